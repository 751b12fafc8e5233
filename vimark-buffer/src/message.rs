use crate::model::BufferLine;

#[derive(Clone, Eq, PartialEq)]
pub enum BufferMessage {
    Modification(TextModification),
    MoveCursor(usize, CursorDirection),
    ResetCursor,
    SetContent(Vec<BufferLine>),
    UpdateViewPortByCursor,
}

impl std::fmt::Debug for BufferMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferMessage::Modification(modification) => {
                f.debug_tuple("Modification").field(modification).finish()
            }
            BufferMessage::MoveCursor(count, direction) => f
                .debug_tuple("MoveCursor")
                .field(count)
                .field(direction)
                .finish(),
            BufferMessage::ResetCursor => f.debug_tuple("ResetCursor").finish(),
            BufferMessage::SetContent(lines) => {
                f.debug_tuple("SetContent").field(&lines.len()).finish()
            }
            BufferMessage::UpdateViewPortByCursor => {
                f.debug_tuple("UpdateViewPortByCursor").finish()
            }
        }
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TextModification {
    DeleteCharBeforeCursor,
    Insert(String),
    InsertLineBreak,
    Replace(String),
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum CursorDirection {
    Bottom,
    Down,
    Left,
    Line(usize),
    LineEnd,
    LineStart,
    Right,
    Top,
    Up,
}
