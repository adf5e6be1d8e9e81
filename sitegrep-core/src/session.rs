use sitegrep_engine::{ProgressHandle, ProgressSnapshot, progress_handle};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// Per-crawl progress slots keyed by session id.
///
/// Every crawl registers its own slot at start; status pollers look the
/// slot up by id instead of reading one ambient global, so concurrent
/// crawls never interleave their snapshot writes.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<String, ProgressHandle>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a progress slot for a new crawl and hand back its id
    /// together with the handle the crawler writes through.
    pub fn register(&self, max_depth: usize, max_width: usize) -> (String, ProgressHandle) {
        let session_id = Uuid::new_v4().to_string();
        let handle = progress_handle(max_depth, max_width);
        self.sessions
            .lock()
            .unwrap()
            .insert(session_id.clone(), handle.clone());
        (session_id, handle)
    }

    /// Point-in-time copy of a session's progress, or None for an
    /// unknown session id.
    pub fn progress(&self, session_id: &str) -> Option<ProgressSnapshot> {
        let sessions = self.sessions.lock().unwrap();
        let handle = sessions.get(session_id)?;
        let snapshot = handle.lock().unwrap().clone();
        Some(snapshot)
    }

    /// Drop a finished session's slot. Returns false for unknown ids.
    pub fn remove(&self, session_id: &str) -> bool {
        self.sessions.lock().unwrap().remove(session_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().unwrap().is_empty()
    }
}
