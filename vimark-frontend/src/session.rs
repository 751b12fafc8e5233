use std::{
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use lru::LruCache;

use crate::{host::PaneId, mark::Mark};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaneSession {
    pub pane_id: PaneId,
    pub file_path: PathBuf,
    pub marks: Vec<Mark>,
}

impl PaneSession {
    fn new(pane_id: PaneId, file_path: PathBuf) -> Self {
        Self {
            pane_id,
            file_path,
            marks: Vec::new(),
        }
    }
}

/// Pane sessions by pane id. Bounded: the least recently touched session is
/// evicted once the capacity is exceeded.
#[derive(Debug)]
pub struct PaneSessionStore {
    sessions: LruCache<PaneId, PaneSession>,
}

impl Default for PaneSessionStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl PaneSessionStore {
    pub const DEFAULT_CAPACITY: usize = 64;

    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            sessions: LruCache::new(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.sessions.cap().get()
    }

    pub fn get(&mut self, pane_id: &PaneId) -> Option<&PaneSession> {
        self.sessions.get(pane_id)
    }

    pub fn peek(&self, pane_id: &PaneId) -> Option<&PaneSession> {
        self.sessions.peek(pane_id)
    }

    /// Creates the session if absent, otherwise updates its file path.
    /// Returns true if the session was created.
    pub fn upsert(&mut self, pane_id: PaneId, file_path: &Path) -> bool {
        if let Some(session) = self.sessions.get_mut(&pane_id) {
            session.file_path = file_path.to_path_buf();
            return false;
        }

        self.push(PaneSession::new(pane_id, file_path.to_path_buf()));
        true
    }

    /// Replaces the marks of a session, creating it with an empty path if the
    /// pane was never observed.
    pub fn set_marks(&mut self, pane_id: PaneId, marks: Vec<Mark>) {
        if let Some(session) = self.sessions.get_mut(&pane_id) {
            session.marks = marks;
            return;
        }

        tracing::warn!("setting marks on unobserved {}, creating session", pane_id);

        let mut session = PaneSession::new(pane_id, PathBuf::new());
        session.marks = marks;
        self.push(session);
    }

    pub fn remove(&mut self, pane_id: &PaneId) -> Option<PaneSession> {
        self.sessions.pop(pane_id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn push(&mut self, session: PaneSession) {
        let pane_id = session.pane_id;
        if let Some((evicted, _)) = self.sessions.push(pane_id, session) {
            if evicted != pane_id {
                tracing::debug!("session of {} evicted", evicted);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_creates_empty_session() {
        let mut store = PaneSessionStore::default();

        assert!(store.upsert(PaneId(1), Path::new("notes.md")));

        let session = store.get(&PaneId(1)).expect("session should exist");
        assert_eq!(session.file_path, PathBuf::from("notes.md"));
        assert!(session.marks.is_empty());
    }

    #[test]
    fn upsert_existing_updates_path_and_keeps_marks() {
        let mut store = PaneSessionStore::default();
        store.upsert(PaneId(1), Path::new("a.md"));
        store.set_marks(PaneId(1), vec![Mark::new('a', 0, 0)]);

        assert!(!store.upsert(PaneId(1), Path::new("b.md")));

        let session = store.get(&PaneId(1)).expect("session should exist");
        assert_eq!(session.file_path, PathBuf::from("b.md"));
        assert_eq!(session.marks, vec![Mark::new('a', 0, 0)]);
    }

    #[test]
    fn set_marks_creates_missing_session() {
        let mut store = PaneSessionStore::default();
        store.set_marks(PaneId(7), vec![Mark::new('z', 3, 3)]);

        let session = store.get(&PaneId(7)).expect("session should exist");
        assert_eq!(session.marks, vec![Mark::new('z', 3, 3)]);
        assert_eq!(session.file_path, PathBuf::new());
    }

    #[test]
    fn least_recently_used_session_is_evicted() {
        let mut store = PaneSessionStore::new(2);
        store.upsert(PaneId(1), Path::new("1.md"));
        store.upsert(PaneId(2), Path::new("2.md"));

        let _ = store.get(&PaneId(1));
        store.upsert(PaneId(3), Path::new("3.md"));

        assert_eq!(store.len(), 2);
        assert!(store.peek(&PaneId(1)).is_some());
        assert!(store.peek(&PaneId(2)).is_none());
        assert!(store.peek(&PaneId(3)).is_some());
    }

    #[test]
    fn zero_capacity_holds_one_session() {
        let store = PaneSessionStore::new(0);
        assert_eq!(store.capacity(), 1);
    }

    #[test]
    fn remove_drops_session() {
        let mut store = PaneSessionStore::default();
        store.upsert(PaneId(1), Path::new("1.md"));

        let removed = store.remove(&PaneId(1));

        assert_eq!(removed.map(|s| s.pane_id), Some(PaneId(1)));
        assert!(store.is_empty());
    }
}
