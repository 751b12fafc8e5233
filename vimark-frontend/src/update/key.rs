use vimark_buffer::{
    message::{BufferMessage, CursorDirection, TextModification},
    model::Mode,
};
use vimark_keymap::{
    key::{Key, KeyCode, KeyModifier},
    message::{Envelope, KeySequence},
};

use crate::{
    action::Action,
    model::{Model, PendingKey},
};

use super::{mark, mode, pane, settings};

pub fn update(model: &mut Model, key: &Key) -> Vec<Action> {
    model.message = None;

    let envelope = match model.panes.get(model.focused) {
        Some(pane) => model
            .tracker
            .on_key(&pane.id, key, Some(pane), &model.mode),
        None => Envelope::none(),
    };

    model.key_sequence = match envelope.sequence {
        KeySequence::Changed(sequence) => sequence,
        KeySequence::Completed(_) | KeySequence::None => String::new(),
    };

    if let Some(pending) = model.pending.take() {
        return mark::on_pending_key(model, pending, key);
    }

    match model.mode {
        Mode::Normal => normal(model, key),
        Mode::Visual => visual(model, key),
        Mode::Insert | Mode::Replace => insert(model, key),
    }
}

fn normal(model: &mut Model, key: &Key) -> Vec<Action> {
    let keycode = key.to_keycode_string();
    if let Some(direction) = get_motion(&keycode) {
        return move_cursor(model, direction);
    }

    match keycode.as_str() {
        "i" => mode::change(model, Mode::Insert),
        "v" => mode::change(model, Mode::Visual),
        "R" => mode::change(model, Mode::Replace),
        "m" => {
            model.pending = Some(PendingKey::NativeMark);
            Vec::new()
        }
        "'" => {
            model.pending = Some(PendingKey::Jump);
            Vec::new()
        }
        "q" => vec![Action::Quit],
        "<tab>" => pane::focus_next(model),
        "<C-n>" => pane::open_next_file(model),
        "<C-p>" => pane::toggle_view_mode(model),
        "<C-s>" => settings::toggle_sign_placement(model),
        "<C-v>" => pane::split(model),
        "<C-x>" => pane::close(model),
        _ => Vec::new(),
    }
}

fn visual(model: &mut Model, key: &Key) -> Vec<Action> {
    let keycode = key.to_keycode_string();
    if let Some(direction) = get_motion(&keycode) {
        return move_cursor(model, direction);
    }

    match keycode.as_str() {
        "<esc>" | "v" => mode::change(model, Mode::Normal),
        _ => Vec::new(),
    }
}

fn insert(model: &mut Model, key: &Key) -> Vec<Action> {
    let modification = match key.to_keycode_string().as_str() {
        "<esc>" => return mode::change(model, Mode::Normal),
        "<left>" => return move_cursor(model, CursorDirection::Left),
        "<down>" => return move_cursor(model, CursorDirection::Down),
        "<up>" => return move_cursor(model, CursorDirection::Up),
        "<right>" => return move_cursor(model, CursorDirection::Right),
        "<bs>" => TextModification::DeleteCharBeforeCursor,
        "<cr>" => TextModification::InsertLineBreak,
        _ => match get_text(key) {
            Some(text) if model.mode == Mode::Replace => TextModification::Replace(text),
            Some(text) => TextModification::Insert(text),
            None => return Vec::new(),
        },
    };

    update_focused(model, BufferMessage::Modification(modification));
    Vec::new()
}

fn get_motion(keycode: &str) -> Option<CursorDirection> {
    match keycode {
        "h" | "<left>" => Some(CursorDirection::Left),
        "j" | "<down>" => Some(CursorDirection::Down),
        "k" | "<up>" => Some(CursorDirection::Up),
        "l" | "<right>" => Some(CursorDirection::Right),
        "0" => Some(CursorDirection::LineStart),
        "$" => Some(CursorDirection::LineEnd),
        "G" => Some(CursorDirection::Bottom),
        _ => None,
    }
}

fn get_text(key: &Key) -> Option<String> {
    let char = match key.code {
        KeyCode::Char(c) => c,
        _ => return None,
    };

    if key
        .modifiers
        .iter()
        .any(|modifier| *modifier != KeyModifier::Shift)
    {
        return None;
    }

    if key.is_shifted() {
        Some(char.to_ascii_uppercase().to_string())
    } else {
        Some(char.to_string())
    }
}

fn move_cursor(model: &mut Model, direction: CursorDirection) -> Vec<Action> {
    update_focused(model, BufferMessage::MoveCursor(1, direction));
    Vec::new()
}

pub fn update_focused(model: &mut Model, message: BufferMessage) {
    if let Some(pane) = model.panes.get_mut(model.focused) {
        vimark_buffer::update(
            &mut pane.viewport,
            &mut pane.cursor,
            &model.mode,
            &mut pane.buffer,
            &message,
        );
    }
}
