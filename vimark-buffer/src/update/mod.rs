use crate::{
    message::BufferMessage,
    model::{viewport::ViewPort, Cursor, Mode, TextBuffer},
};

mod cursor;
mod modification;
mod viewport;

pub fn update_buffer(
    viewport: &mut ViewPort,
    cursor: &mut Cursor,
    mode: &Mode,
    buffer: &mut TextBuffer,
    message: &BufferMessage,
) {
    tracing::debug!("handling buffer message: {:?}", message);

    match message {
        BufferMessage::Modification(modification) => {
            modification::update(cursor, mode, buffer, modification);
        }
        BufferMessage::MoveCursor(count, direction) => {
            cursor::update_by_direction(cursor, mode, buffer, count, direction);
        }
        BufferMessage::ResetCursor => {
            viewport.horizontal_index = 0;
            viewport.vertical_index = 0;

            cursor.vertical_index = 0;
            cursor.horizontal_index = 0;
        }
        BufferMessage::SetContent(content) => {
            buffer.lines = content.to_vec();
            cursor::validate_position(cursor, mode, buffer);
        }
        BufferMessage::UpdateViewPortByCursor => (),
    }

    viewport.set_line_count(buffer.lines.len());
    viewport::update_by_cursor(viewport, cursor, buffer);
}
