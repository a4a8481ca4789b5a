//! Registry of comment sources

use super::source::CommentSource;
use crate::types::SourceId;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Holds the registered comment sources keyed by sequential id
#[derive(Default)]
pub struct SourceRegistry {
    /// Sources by id; ids only grow, so key order is registration order
    sources: BTreeMap<SourceId, Arc<dyn CommentSource>>,
    /// Next id to hand out
    next_id: SourceId,
}

impl SourceRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source and return its id
    pub fn register(&mut self, source: Arc<dyn CommentSource>) -> SourceId {
        let id = self.next_id;
        debug!("Registering comment source {} ({})", id, source.name());
        self.sources.insert(id, source);
        self.next_id = id.next();
        id
    }

    /// Remove a source; unknown ids are ignored
    pub fn unregister(&mut self, id: SourceId) -> Option<Arc<dyn CommentSource>> {
        let removed = self.sources.remove(&id);
        if removed.is_some() {
            debug!("Unregistered comment source {}", id);
        }
        removed
    }

    /// Get a source by id
    pub fn get(&self, id: SourceId) -> Option<&Arc<dyn CommentSource>> {
        self.sources.get(&id)
    }

    /// Check if an id is registered
    pub fn contains(&self, id: SourceId) -> bool {
        self.sources.contains_key(&id)
    }

    /// Registered ids in registration order
    pub fn ids(&self) -> Vec<SourceId> {
        self.sources.keys().copied().collect()
    }

    /// Snapshot of the registered sources in registration order
    pub fn snapshot(&self) -> Vec<(SourceId, Arc<dyn CommentSource>)> {
        self.sources
            .iter()
            .map(|(id, source)| (*id, Arc::clone(source)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl std::fmt::Debug for SourceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceRegistry")
            .field("ids", &self.ids())
            .field("next_id", &self.next_id)
            .finish()
    }
}
