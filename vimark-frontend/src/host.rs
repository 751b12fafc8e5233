use std::{fmt::Display, future::Future};

use vimark_buffer::model::{Position, Selection, ViewMode};

/// Opaque identity of an editing pane. Stable while the pane shows different
/// files, distinct for every split.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PaneId(pub u64);

impl Display for PaneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pane-{}", self.0)
    }
}

/// The editing surface of a pane as exposed by the host editor.
pub trait EditorSurface {
    fn selection(&self) -> Option<Selection>;

    fn position_to_offset(&self, position: &Position) -> usize;

    fn view_mode(&self) -> ViewMode;

    /// Number of marks the host's own modal layer keeps for this surface.
    fn native_mark_count(&self) -> impl Future<Output = usize>;
}
