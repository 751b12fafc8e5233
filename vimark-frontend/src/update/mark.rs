use vimark_buffer::message::{BufferMessage, CursorDirection};
use vimark_keymap::key::Key;

use crate::{
    action::Action,
    model::{Model, PendingKey},
};

use super::key::update_focused;

/// Second key of the host's own `m{x}` and `'{x}` commands.
pub fn on_pending_key(model: &mut Model, pending: PendingKey, key: &Key) -> Vec<Action> {
    let letter = match key.to_letter() {
        Some(it) => it,
        None => return Vec::new(),
    };

    let pane = match model.panes.get_mut(model.focused) {
        Some(it) => it,
        None => return Vec::new(),
    };

    match pending {
        PendingKey::NativeMark => {
            pane.native_marks.insert(letter, pane.cursor.position());
        }
        PendingKey::Jump => match pane.native_marks.get(&letter) {
            Some(position) => {
                let line = position.line;
                update_focused(model, BufferMessage::MoveCursor(1, CursorDirection::Line(line)));
                update_focused(model, BufferMessage::MoveCursor(1, CursorDirection::LineStart));
            }
            None => model.message = Some(format!("mark {} not set", letter)),
        },
    }

    Vec::new()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use vimark_buffer::model::{Position, TextBuffer};

    use crate::settings::Settings;

    use super::*;

    fn key(keycode: &str) -> Key {
        Key::from_keycode_string(keycode).expect("invalid keycode")
    }

    #[test]
    fn sets_and_jumps_to_native_mark() {
        let mut model = Model::new(Settings::default());
        let lines = TextBuffer::from_content("one\ntwo\nthree").lines;
        model.add_pane(PathBuf::from("a.txt"), lines);

        if let Some(pane) = model.panes.get_mut(model.focused) {
            pane.cursor.vertical_index = 2;
            pane.cursor.horizontal_index = 3;
        }

        on_pending_key(&mut model, PendingKey::NativeMark, &key("a"));

        let pane = model.focused_pane().unwrap();
        assert_eq!(pane.native_marks.get(&'a'), Some(&Position::new(2, 3)));

        if let Some(pane) = model.panes.get_mut(model.focused) {
            pane.cursor.vertical_index = 0;
        }

        on_pending_key(&mut model, PendingKey::Jump, &key("a"));

        let pane = model.focused_pane().unwrap();
        assert_eq!(pane.cursor.vertical_index, 2);
        assert_eq!(pane.cursor.horizontal_index, 0);
    }

    #[test]
    fn jump_to_unset_mark_reports_message() {
        let mut model = Model::new(Settings::default());
        model.add_pane(PathBuf::from("a.txt"), Vec::new());

        on_pending_key(&mut model, PendingKey::Jump, &key("z"));

        assert_eq!(model.message.as_deref(), Some("mark z not set"));
    }
}
