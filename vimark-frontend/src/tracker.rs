use std::path::Path;

use vimark_keymap::{key::Key, message::Envelope, EditModeProbe, MarkGestureResolver};

use crate::{
    host::{EditorSurface, PaneId},
    mark::{self, Mark},
    notifier::{ChangeNotifier, MarkObserver, SubscriptionId},
    session::PaneSessionStore,
};

/// Gesture recognizer bound to the content surface of one pane.
#[derive(Debug)]
struct KeyListener {
    pane_id: PaneId,
    resolver: MarkGestureResolver,
}

/// Owns the marks of the focused pane, keeps the pane sessions and publishes
/// every change of the active mark set.
#[derive(Debug)]
pub struct MarkTracker {
    active: Vec<Mark>,
    current_pane: Option<PaneId>,
    listener: Option<KeyListener>,
    modal_editing: bool,
    notifier: ChangeNotifier,
    sessions: PaneSessionStore,
}

impl Default for MarkTracker {
    fn default() -> Self {
        Self::new(true, PaneSessionStore::DEFAULT_CAPACITY)
    }
}

impl MarkTracker {
    /// With `modal_editing` off no key listener is ever installed.
    pub fn new(modal_editing: bool, session_capacity: usize) -> Self {
        Self {
            active: Vec::new(),
            current_pane: None,
            listener: None,
            modal_editing,
            notifier: ChangeNotifier::default(),
            sessions: PaneSessionStore::new(session_capacity),
        }
    }

    pub fn subscribe(&mut self, observer: impl MarkObserver + 'static) -> SubscriptionId {
        self.notifier.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    pub fn active_marks(&self) -> &[Mark] {
        &self.active
    }

    pub fn current_pane(&self) -> Option<PaneId> {
        self.current_pane
    }

    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    pub fn sessions(&self) -> &PaneSessionStore {
        &self.sessions
    }

    pub fn is_listening(&self, pane_id: &PaneId) -> bool {
        self.listener
            .as_ref()
            .is_some_and(|listener| &listener.pane_id == pane_id)
    }

    /// Hands a key pressed in `pane_id` to the installed recognizer and
    /// records the mark of a completed gesture.
    pub fn on_key<S: EditorSurface>(
        &mut self,
        pane_id: &PaneId,
        key: &Key,
        surface: Option<&S>,
        probe: &impl EditModeProbe,
    ) -> Envelope {
        let listener = match self.listener.as_mut() {
            Some(it) if &it.pane_id == pane_id => it,
            _ => return Envelope::none(),
        };

        let view_mode = match surface {
            Some(it) => it.view_mode(),
            None => return Envelope::none(),
        };

        let envelope = listener.resolver.add_key(key, view_mode, probe);
        if let Some(letter) = envelope.mark {
            self.on_mark_letter_captured(letter, surface);
        }

        envelope
    }

    #[tracing::instrument(skip(self, surface))]
    pub fn on_mark_letter_captured<S: EditorSurface>(
        &mut self,
        letter: char,
        surface: Option<&S>,
    ) {
        let (surface, pane_id) = match (surface, self.current_pane) {
            (Some(surface), Some(pane_id)) => (surface, pane_id),
            _ => {
                tracing::debug!("no active surface, mark {} skipped", letter);
                return;
            }
        };

        let selection = match surface.selection() {
            Some(it) => it,
            None => {
                tracing::debug!("surface without selection, mark {} skipped", letter);
                return;
            }
        };

        let from = surface.position_to_offset(&selection.start.line_start());
        let to = surface.position_to_offset(&selection.end.line_start());

        let replaced = mark::insert(&mut self.active, Mark::new(letter, from, to));
        if let Some(replaced) = replaced {
            tracing::debug!("mark {} moved from offset {}", letter, replaced.from);
        }

        self.sessions.set_marks(pane_id, self.active.clone());
        self.publish();
    }

    /// Resolves the marks of a pane after it gained focus or opened a file.
    #[tracing::instrument(skip(self, surface))]
    pub async fn on_pane_or_file_opened<S: EditorSurface>(
        &mut self,
        pane_id: PaneId,
        file_path: &Path,
        surface: &S,
    ) {
        if let Some(listener) = self.listener.take() {
            tracing::trace!("key listener detached from {}", listener.pane_id);
        }

        let stale = !self.notifier.current().is_empty();
        self.active.clear();

        if self.sessions.upsert(pane_id, file_path) {
            tracing::debug!("tracking new {}", pane_id);
        } else if let Some(session) = self.sessions.peek(&pane_id) {
            self.active = session.marks.clone();
        }

        let mut forced = false;
        if self.current_pane == Some(pane_id) {
            let native_marks = surface.native_mark_count().await;
            if native_marks == 0 {
                tracing::debug!("surface of {} holds no native marks, reset", pane_id);

                self.active.clear();
                self.sessions.set_marks(pane_id, Vec::new());
                forced = true;
            }
        }

        if forced || stale || !self.active.is_empty() {
            self.publish();
        }

        self.current_pane = Some(pane_id);

        if self.modal_editing {
            self.listener = Some(KeyListener {
                pane_id,
                resolver: MarkGestureResolver::default(),
            });
        }
    }

    /// Forgets the session of a closed pane.
    #[tracing::instrument(skip(self))]
    pub fn on_pane_closed(&mut self, pane_id: &PaneId) {
        self.sessions.remove(pane_id);

        if self.is_listening(pane_id) {
            self.listener = None;
        }

        if self.current_pane.as_ref() == Some(pane_id) {
            self.current_pane = None;
            self.active.clear();

            if !self.notifier.current().is_empty() {
                self.publish();
            }
        }
    }

    fn publish(&mut self) {
        self.notifier.publish(&self.active);
    }
}
