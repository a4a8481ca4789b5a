use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const PR_COMMENTS: &str = r#"[
    {"path": "src/lib.rs", "body": "a", "position": 1,
     "diff_hunk_range": {"start": 10}, "user": {"login": "u1", "avatar_url": "x"}},
    {"path": "src/lib.rs", "body": "b", "position": 1,
     "diff_hunk_range": {"start": 10}, "user": {"login": "u2", "avatar_url": "y"}},
    {"path": "src/main.rs", "body": "elsewhere", "position": 4,
     "diff_hunk_range": {"start": 1}, "user": {"login": "u3", "avatar_url": "z"}}
]"#;

fn cr_threads(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cr-threads").unwrap();
    cmd.current_dir(dir.path()).arg("--no-color");
    cmd
}

#[test]
fn threads_as_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pr.json"), PR_COMMENTS).unwrap();

    cr_threads(&dir)
        .args(["threads", "src/lib.rs", "--source", "pr.json", "--format", "json-compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""comment_count":2"#))
        .stdout(predicate::str::contains(r#""line":9"#))
        .stdout(predicate::str::contains("elsewhere").not());
}

#[test]
fn threads_as_markdown() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pr.json"), PR_COMMENTS).unwrap();

    cr_threads(&dir)
        .args(["threads", "src/lib.rs", "-s", "pr.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Line 10"))
        .stdout(predicate::str::contains("**u2**"));
}

#[test]
fn missing_source_fails() {
    let dir = TempDir::new().unwrap();

    cr_threads(&dir)
        .args(["threads", "src/lib.rs", "-s", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn comments_are_merged_flat() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pr.json"), PR_COMMENTS).unwrap();

    cr_threads(&dir)
        .args(["comments", "src/main.rs", "-s", "pr.json", "--compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""body":"elsewhere""#));
}

#[test]
fn config_init_and_show() {
    let dir = TempDir::new().unwrap();

    cr_threads(&dir).args(["config", "init"]).assert().success();
    assert!(dir.path().join(".cr-threads/config.toml").exists());

    cr_threads(&dir)
        .args(["config", "show", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""order": "encounter""#));
}

#[test]
fn pretty_false_compacts_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pr.json"), PR_COMMENTS).unwrap();
    fs::write(
        dir.path().join("compact.toml"),
        "[export]\ndefault_format = \"json\"\npretty = false\n",
    )
    .unwrap();

    cr_threads(&dir)
        .args(["--config", "compact.toml", "threads", "src/lib.rs", "-s", "pr.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""comment_count":2"#));

    cr_threads(&dir)
        .args(["--config", "compact.toml", "comments", "src/main.rs", "-s", "pr.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""body":"elsewhere""#));
}

#[test]
fn threads_with_avatars() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pr.json"), PR_COMMENTS).unwrap();

    cr_threads(&dir)
        .args(["threads", "src/lib.rs", "-s", "pr.json", "--avatars"])
        .assert()
        .success()
        .stdout(predicate::str::contains("![u1](x) **u1**"));
}

#[test]
fn config_validate_fails_on_invalid_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.toml"), "[aggregation\norder = 1").unwrap();

    cr_threads(&dir)
        .args(["--config", "broken.toml", "config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}
