use std::{collections::HashMap, future::Future, path::PathBuf};

use vimark_buffer::model::{
    viewport::ViewPort, BufferLine, Cursor, Mode, Position, Selection, TextBuffer, ViewMode,
};

use crate::{
    host::{EditorSurface, PaneId},
    settings::Settings,
    tracker::MarkTracker,
};

#[derive(Debug)]
pub struct Model {
    pub files: Vec<PathBuf>,
    pub focused: usize,
    pub key_sequence: String,
    pub message: Option<String>,
    pub mode: Mode,
    pub next_pane_id: u64,
    pub panes: Vec<Pane>,
    pub pending: Option<PendingKey>,
    pub settings: Settings,
    pub tracker: MarkTracker,
}

impl Model {
    pub fn new(settings: Settings) -> Self {
        Self {
            files: settings.files.clone(),
            focused: 0,
            key_sequence: String::new(),
            message: None,
            mode: Mode::default(),
            next_pane_id: 1,
            panes: Vec::new(),
            pending: None,
            tracker: MarkTracker::new(settings.modal_editing, settings.session_capacity),
            settings,
        }
    }

    pub fn focused_pane(&self) -> Option<&Pane> {
        self.panes.get(self.focused)
    }

    pub fn pane_mut(&mut self, pane_id: &PaneId) -> Option<&mut Pane> {
        self.panes.iter_mut().find(|pane| &pane.id == pane_id)
    }

    /// Inserts a pane behind the focused one and focuses it.
    pub fn add_pane(&mut self, path: PathBuf, lines: Vec<BufferLine>) -> PaneId {
        let id = PaneId(self.next_pane_id);
        self.next_pane_id += 1;

        let mut viewport = ViewPort::default();
        viewport.set(&self.settings.window);

        let pane = Pane {
            buffer: TextBuffer { lines },
            cursor: Cursor::default(),
            id,
            native_marks: HashMap::new(),
            path,
            view_mode: ViewMode::default(),
            viewport,
            visual_anchor: None,
        };

        let index = if self.panes.is_empty() {
            0
        } else {
            self.focused + 1
        };

        self.panes.insert(index, pane);
        self.focused = index;

        id
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PendingKey {
    Jump,
    NativeMark,
}

#[derive(Debug)]
pub struct Pane {
    pub buffer: TextBuffer,
    pub cursor: Cursor,
    pub id: PaneId,
    pub native_marks: HashMap<char, Position>,
    pub path: PathBuf,
    pub view_mode: ViewMode,
    pub viewport: ViewPort,
    pub visual_anchor: Option<Position>,
}

impl Pane {
    /// Visual selection or the cursor position when no selection is active.
    pub fn current_selection(&self) -> Selection {
        let head = self.cursor.position();
        match &self.visual_anchor {
            Some(anchor) => Selection::new(anchor.clone(), head),
            None => Selection::new(head.clone(), head),
        }
    }
}

impl EditorSurface for Pane {
    fn selection(&self) -> Option<Selection> {
        Some(self.current_selection())
    }

    fn position_to_offset(&self, position: &Position) -> usize {
        self.buffer.position_to_offset(position)
    }

    fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    fn native_mark_count(&self) -> impl Future<Output = usize> {
        std::future::ready(self.native_marks.len())
    }
}
