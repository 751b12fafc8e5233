use std::cmp::Reverse;

use crate::model::{
    viewport::{LineNumber, SignPlacement, ViewPort},
    BufferLine, Cursor,
};

pub fn get_prefix(
    vp: &ViewPort,
    bl: &BufferLine,
    index: usize,
    cursor: Option<&Cursor>,
) -> String {
    let signs = get_signs(vp, bl);
    let number = get_line_number(vp, index, cursor);

    match vp.sign_placement {
        SignPlacement::AfterLineNumbers => format!("{}{}{}", number, signs, get_border(vp)),
        SignPlacement::BeforeLineNumbers => format!("{}{}{}", signs, number, get_border(vp)),
    }
}

fn get_border(vp: &ViewPort) -> String {
    " ".repeat(vp.get_border_width())
}

fn get_line_number(vp: &ViewPort, index: usize, cursor: Option<&Cursor>) -> String {
    if vp.line_number == LineNumber::None {
        return "".to_string();
    }

    let width = vp.get_line_number_width();
    let number = (index + 1).to_string();

    let is_cursor_line = cursor.is_some_and(|cursor| cursor.vertical_index == index);
    if is_cursor_line {
        format!("\x1b[1m{:>width$}\x1b[0m", number)
    } else {
        format!("\x1b[90m{:>width$}\x1b[0m", number)
    }
}

fn get_signs(vp: &ViewPort, bl: &BufferLine) -> String {
    let max_sign_count = vp.sign_column_width;

    let mut filtered: Vec<_> = bl
        .signs
        .iter()
        .filter(|s| !vp.hidden_sign_ids.contains(&s.id))
        .collect();

    filtered.sort_by_key(|s| Reverse(s.priority));

    let shown: Vec<_> = filtered.into_iter().take(max_sign_count).collect();
    let signs = shown
        .iter()
        .map(|s| format!("{}{}\x1b[0m", s.style, s.content))
        .collect::<String>();

    // escape sequences do not count towards the column width
    format!("{}{}", signs, " ".repeat(max_sign_count - shown.len()))
}
