use std::collections::HashSet;

use super::{BufferLine, SignIdentifier};

#[derive(Clone, Debug, Default)]
pub struct WindowSettings {
    pub sign_column_width: usize,
    pub sign_placement: SignPlacement,
}

/// Side of the line numbers the sign column is drawn on. Read once when a
/// viewport is set up.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SignPlacement {
    AfterLineNumbers,
    #[default]
    BeforeLineNumbers,
}

impl SignPlacement {
    pub fn from_before_line_numbers(before: bool) -> Self {
        if before {
            SignPlacement::BeforeLineNumbers
        } else {
            SignPlacement::AfterLineNumbers
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ViewPort {
    pub height: u16,
    pub hidden_sign_ids: HashSet<SignIdentifier>,
    pub horizontal_index: usize,
    pub line_number: LineNumber,
    pub line_number_width: usize,
    pub sign_column_width: usize,
    pub sign_placement: SignPlacement,
    pub vertical_index: usize,
    pub width: u16,
}

impl ViewPort {
    pub fn get_border_width(&self) -> usize {
        if self.get_prefix_width() > 0 {
            1
        } else {
            0
        }
    }

    pub fn get_content_width(&self, _line: &BufferLine) -> usize {
        usize::from(self.width)
            .saturating_sub(self.get_prefix_width())
            .saturating_sub(self.get_border_width())
    }

    pub fn get_line_number_width(&self) -> usize {
        match self.line_number {
            LineNumber::Absolute => self.line_number_width,
            LineNumber::None => 0,
        }
    }

    fn get_prefix_width(&self) -> usize {
        self.sign_column_width + self.get_line_number_width()
    }

    pub fn set(&mut self, settings: &WindowSettings) {
        self.sign_column_width = settings.sign_column_width;
        self.sign_placement = settings.sign_placement;
    }

    /// Widens the line number column to fit the highest line number.
    pub fn set_line_count(&mut self, count: usize) {
        let digits = count.max(1).to_string().len();
        self.line_number_width = digits.max(3);
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LineNumber {
    #[default]
    Absolute,
    None,
}
