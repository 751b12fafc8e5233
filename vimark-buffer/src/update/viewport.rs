use crate::model::{viewport::ViewPort, Cursor, TextBuffer};

pub fn update_by_cursor(viewport: &mut ViewPort, cursor: &Cursor, buffer: &TextBuffer) {
    if buffer.lines.is_empty() {
        return;
    }

    if cursor.vertical_index >= buffer.lines.len() {
        return;
    }

    let viewport_offset = if viewport.height == 0 {
        0
    } else {
        usize::from(viewport.height - 1)
    };

    if viewport.vertical_index > cursor.vertical_index {
        viewport.vertical_index = cursor.vertical_index;
    } else if viewport.vertical_index + viewport_offset < cursor.vertical_index {
        viewport.vertical_index = cursor.vertical_index - viewport_offset;
    }

    let line = &buffer.lines[cursor.vertical_index];
    let content_width = viewport.get_content_width(line);
    if viewport.horizontal_index > cursor.horizontal_index {
        viewport.horizontal_index = cursor.horizontal_index;
    } else if content_width > 0
        && viewport.horizontal_index + content_width <= cursor.horizontal_index
    {
        viewport.horizontal_index = cursor.horizontal_index.saturating_sub(content_width) + 1;
    }
}
