use crate::{
    message::TextModification,
    model::{BufferLine, Cursor, Mode, TextBuffer},
};

use super::cursor;

pub fn update(
    cursor: &mut Cursor,
    mode: &Mode,
    buffer: &mut TextBuffer,
    modification: &TextModification,
) {
    if buffer.lines.is_empty() {
        buffer.lines.push(Default::default());
    }

    match modification {
        TextModification::DeleteCharBeforeCursor => {
            if cursor.horizontal_index > 0 {
                let line = &mut buffer.lines[cursor.vertical_index];
                let index = get_byte_index(&line.content, cursor.horizontal_index - 1);
                line.content.remove(index);
                cursor.horizontal_index -= 1;
            } else if cursor.vertical_index > 0 {
                let removed = buffer.lines.remove(cursor.vertical_index);
                cursor.vertical_index -= 1;

                let line = &mut buffer.lines[cursor.vertical_index];
                cursor.horizontal_index = line.len();
                line.content.push_str(&removed.content);
            }
        }
        TextModification::Insert(text) => {
            let line = &mut buffer.lines[cursor.vertical_index];
            let index = get_byte_index(&line.content, cursor.horizontal_index);
            line.content.insert_str(index, text);
            cursor.horizontal_index += text.chars().count();
        }
        TextModification::InsertLineBreak => {
            let line = &mut buffer.lines[cursor.vertical_index];
            let index = get_byte_index(&line.content, cursor.horizontal_index);
            let tail = line.content.split_off(index);

            cursor.vertical_index += 1;
            cursor.horizontal_index = 0;
            buffer.lines.insert(
                cursor.vertical_index,
                BufferLine {
                    content: tail,
                    ..Default::default()
                },
            );
        }
        TextModification::Replace(text) => {
            let line = &mut buffer.lines[cursor.vertical_index];
            let mut chars: Vec<_> = line.content.chars().collect();
            for char in text.chars() {
                if cursor.horizontal_index < chars.len() {
                    chars[cursor.horizontal_index] = char;
                } else {
                    chars.push(char);
                }
                cursor.horizontal_index += 1;
            }
            line.content = chars.into_iter().collect();
        }
    }

    let validation_mode = match mode {
        Mode::Replace => &Mode::Insert,
        mode => mode,
    };
    cursor::validate_position(cursor, validation_mode, buffer);
}

fn get_byte_index(content: &str, char_index: usize) -> usize {
    content
        .char_indices()
        .nth(char_index)
        .map(|(index, _)| index)
        .unwrap_or(content.len())
}
