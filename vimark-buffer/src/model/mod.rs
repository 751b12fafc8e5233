use std::fmt::Display;

pub mod viewport;

/// Sub-mode of the modal editing layer. Only `Normal` accepts mark gestures.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum Mode {
    Insert,
    #[default]
    Normal,
    Replace,
    Visual,
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mode = match self {
            Mode::Insert => "insert",
            Mode::Normal => "normal",
            Mode::Replace => "replace",
            Mode::Visual => "visual",
        };

        write!(f, "{}", mode)
    }
}

/// How a pane presents its document. Keys are only interpreted in `Source`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ViewMode {
    Preview,
    #[default]
    Source,
}

impl ViewMode {
    pub fn is_editable(&self) -> bool {
        matches!(self, ViewMode::Source)
    }
}

impl Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewMode::Preview => write!(f, "preview"),
            ViewMode::Source => write!(f, "source"),
        }
    }
}

/// Line and column (in chars) inside a [`TextBuffer`].
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub fn line_start(&self) -> Self {
        Self {
            line: self.line,
            column: 0,
        }
    }
}

/// Ordered selection; `start` is never behind `end`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Selection {
    pub start: Position,
    pub end: Position,
}

impl Selection {
    pub fn new(anchor: Position, head: Position) -> Self {
        if anchor <= head {
            Self {
                start: anchor,
                end: head,
            }
        } else {
            Self {
                start: head,
                end: anchor,
            }
        }
    }

    pub fn contains_line(&self, line: usize) -> bool {
        self.start.line <= line && line <= self.end.line
    }
}

#[derive(Clone, Debug, Default)]
pub struct Cursor {
    pub hide_cursor: bool,
    pub hide_cursor_line: bool,
    pub horizontal_index: usize,
    pub vertical_index: usize,
}

impl Cursor {
    pub fn position(&self) -> Position {
        Position::new(self.vertical_index, self.horizontal_index)
    }
}

#[derive(Clone, Debug, Default)]
pub struct TextBuffer {
    pub lines: Vec<BufferLine>,
}

impl TextBuffer {
    pub fn from_content(content: &str) -> Self {
        let lines = content
            .lines()
            .map(|line| BufferLine {
                content: line.to_string(),
                ..Default::default()
            })
            .collect();

        Self { lines }
    }

    /// Offset into the linear char stream, counting one separator per line
    /// break. Positions behind the buffer end resolve to the total length.
    pub fn position_to_offset(&self, position: &Position) -> usize {
        let mut offset = 0;
        for (index, line) in self.lines.iter().enumerate() {
            let length = line.len();
            if index == position.line {
                return offset + position.column.min(length);
            }
            offset += length + 1;
        }

        offset.saturating_sub(1)
    }

    pub fn offset_to_position(&self, offset: usize) -> Position {
        let mut remaining = offset;
        for (index, line) in self.lines.iter().enumerate() {
            let length = line.len();
            if remaining <= length {
                return Position::new(index, remaining);
            }
            remaining -= length + 1;
        }

        match self.lines.last() {
            Some(line) => Position::new(self.lines.len() - 1, line.len()),
            None => Position::default(),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BufferLine {
    pub content: String,
    pub signs: Vec<Sign>,
}

impl BufferLine {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn len(&self) -> usize {
        self.content.chars().count()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sign {
    pub id: SignIdentifier,
    pub content: char,
    pub priority: usize,
    pub style: String,
}

pub type SignIdentifier = &'static str;
