use message::BufferMessage;
use model::{viewport::ViewPort, Cursor, Mode, Selection, TextBuffer};
use ratatui::{layout::Rect, Frame};

pub mod message;
pub mod model;
mod update;
mod view;

pub fn update(
    viewport: &mut ViewPort,
    cursor: &mut Cursor,
    mode: &Mode,
    buffer: &mut TextBuffer,
    message: &BufferMessage,
) {
    update::update_buffer(viewport, cursor, mode, buffer, message)
}

pub fn view(
    viewport: &ViewPort,
    cursor: Option<&Cursor>,
    mode: &Mode,
    buffer: &TextBuffer,
    selection: Option<&Selection>,
    frame: &mut Frame,
    rect: Rect,
) {
    view::view(viewport, cursor, mode, buffer, selection, frame, rect)
}
