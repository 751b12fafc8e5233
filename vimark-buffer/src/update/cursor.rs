use crate::{
    message::CursorDirection,
    model::{Cursor, Mode, TextBuffer},
};

pub fn update_by_direction(
    cursor: &mut Cursor,
    mode: &Mode,
    buffer: &TextBuffer,
    count: &usize,
    direction: &CursorDirection,
) {
    if buffer.lines.is_empty() {
        return;
    }

    let max_index = buffer.lines.len() - 1;
    for _ in 0..*count {
        match direction {
            CursorDirection::Bottom => cursor.vertical_index = max_index,
            CursorDirection::Down => {
                if cursor.vertical_index < max_index {
                    cursor.vertical_index += 1;
                }
            }
            CursorDirection::Left => {
                cursor.horizontal_index = cursor.horizontal_index.saturating_sub(1);
            }
            CursorDirection::Line(index) => cursor.vertical_index = (*index).min(max_index),
            CursorDirection::LineEnd => cursor.horizontal_index = usize::MAX,
            CursorDirection::LineStart => cursor.horizontal_index = 0,
            CursorDirection::Right => cursor.horizontal_index += 1,
            CursorDirection::Top => cursor.vertical_index = 0,
            CursorDirection::Up => {
                cursor.vertical_index = cursor.vertical_index.saturating_sub(1);
            }
        }
    }

    validate_position(cursor, mode, buffer);
}

pub fn validate_position(cursor: &mut Cursor, mode: &Mode, buffer: &TextBuffer) {
    if buffer.lines.is_empty() {
        cursor.vertical_index = 0;
        cursor.horizontal_index = 0;
        return;
    }

    let max_index = buffer.lines.len() - 1;
    if cursor.vertical_index > max_index {
        cursor.vertical_index = max_index;
    }

    let line_length = buffer.lines[cursor.vertical_index].len();
    let max_column = match mode {
        Mode::Insert => line_length,
        Mode::Normal | Mode::Replace | Mode::Visual => line_length.saturating_sub(1),
    };

    if cursor.horizontal_index > max_column {
        cursor.horizontal_index = max_column;
    }
}
