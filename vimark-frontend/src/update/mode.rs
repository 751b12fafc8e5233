use vimark_buffer::{
    message::{BufferMessage, CursorDirection},
    model::Mode,
};

use crate::{action::Action, model::Model};

use super::key::update_focused;

#[tracing::instrument(skip(model))]
pub fn change(model: &mut Model, mode: Mode) -> Vec<Action> {
    let pane = match model.panes.get_mut(model.focused) {
        Some(it) => it,
        None => return Vec::new(),
    };

    let is_edit = matches!(mode, Mode::Insert | Mode::Replace);
    if is_edit && !pane.view_mode.is_editable() {
        model.message = Some(format!("{} view is read only", pane.view_mode));
        return Vec::new();
    }

    pane.visual_anchor = match mode {
        Mode::Visual => Some(pane.cursor.position()),
        Mode::Insert | Mode::Normal | Mode::Replace => None,
    };

    let leaves_edit = matches!(model.mode, Mode::Insert | Mode::Replace);
    model.mode = mode;

    if leaves_edit && model.mode == Mode::Normal {
        update_focused(model, BufferMessage::MoveCursor(1, CursorDirection::Left));
    }

    Vec::new()
}
