use crate::model::{viewport::ViewPort, BufferLine, Cursor, Mode, Selection};

const CURSORLINE_STYLE: &str = "\x1b[100m";
const SELECTION_STYLE: &str = "\x1b[44m";

pub fn get_content(
    vp: &ViewPort,
    mode: &Mode,
    cursor: Option<&Cursor>,
    selection: Option<&Selection>,
    index: usize,
    bl: &BufferLine,
) -> String {
    let chars: Vec<_> = bl
        .content
        .chars()
        .skip(vp.horizontal_index)
        .take(vp.get_content_width(bl))
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    let cursor = cursor.filter(|crsr| crsr.vertical_index == index);
    let line_style = if selection.is_some_and(|sel| sel.contains_line(index)) {
        Some(SELECTION_STYLE)
    } else if cursor.is_some_and(|crsr| !crsr.hide_cursor_line) {
        Some(CURSORLINE_STYLE)
    } else {
        None
    };

    let cursor = match cursor {
        Some(it) if !it.hide_cursor => it,
        _ => return with_style(&chars.iter().collect::<String>(), line_style),
    };

    let column = cursor.horizontal_index.saturating_sub(vp.horizontal_index);
    let before: String = chars.iter().take(column).collect();
    let under_cursor = chars.get(column).copied().unwrap_or(' ');
    let after: String = chars.iter().skip(column + 1).collect();

    format!(
        "{}{}{}\x1b[0m{}",
        with_style(&before, line_style),
        get_cursor_style(mode),
        under_cursor,
        with_style(&after, line_style),
    )
}

fn get_cursor_style(mode: &Mode) -> &'static str {
    match mode {
        Mode::Insert => "\x1b[4m",
        Mode::Normal | Mode::Replace | Mode::Visual => "\x1b[7m",
    }
}

fn with_style(content: &str, style: Option<&str>) -> String {
    match style {
        Some(style) if !content.is_empty() => format!("{}{}\x1b[0m", style, content),
        _ => content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use crate::model::Position;

    use super::*;

    fn viewport() -> ViewPort {
        ViewPort {
            width: 20,
            ..Default::default()
        }
    }

    fn line(content: &str) -> BufferLine {
        BufferLine {
            content: content.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn line_without_cursor_is_plain() {
        let content = get_content(&viewport(), &Mode::Normal, None, None, 0, &line("abc"));
        assert_eq!(content, "abc");
    }

    #[test]
    fn cursor_char_is_inverted() {
        let cursor = Cursor {
            horizontal_index: 1,
            hide_cursor_line: true,
            ..Default::default()
        };

        let content = get_content(
            &viewport(),
            &Mode::Normal,
            Some(&cursor),
            None,
            0,
            &line("abc"),
        );

        assert_eq!(content, "a\x1b[7mb\x1b[0mc");
    }

    #[test]
    fn selected_lines_are_highlighted() {
        let selection = Selection::new(Position::new(0, 0), Position::new(2, 0));
        let content = get_content(
            &viewport(),
            &Mode::Visual,
            None,
            Some(&selection),
            1,
            &line("abc"),
        );

        assert_eq!(content, "\x1b[44mabc\x1b[0m");
    }
}
