use std::path::PathBuf;

use vimark_buffer::model::viewport::{SignPlacement, WindowSettings};

use crate::session::PaneSessionStore;

#[derive(Debug)]
pub struct Settings {
    pub files: Vec<PathBuf>,
    pub modal_editing: bool,
    pub session_capacity: usize,
    /// Persisted. Applied to panes on startup only.
    pub show_signs_before_line_numbers: bool,
    /// One-shot override from the command line, persisted on startup.
    pub show_signs_before_line_numbers_override: Option<bool>,
    pub window: WindowSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            modal_editing: true,
            session_capacity: PaneSessionStore::DEFAULT_CAPACITY,
            show_signs_before_line_numbers: true,
            show_signs_before_line_numbers_override: None,
            window: WindowSettings {
                sign_column_width: 2,
                sign_placement: SignPlacement::BeforeLineNumbers,
            },
        }
    }
}

impl Settings {
    pub fn sign_placement(&self) -> SignPlacement {
        SignPlacement::from_before_line_numbers(self.show_signs_before_line_numbers)
    }
}
