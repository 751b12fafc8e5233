use ansi_to_tui::IntoText;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

use crate::model::{viewport::ViewPort, BufferLine, Cursor, Mode, Selection, TextBuffer};

mod line;
mod prefix;

pub fn view(
    viewport: &ViewPort,
    cursor: Option<&Cursor>,
    mode: &Mode,
    buffer: &TextBuffer,
    selection: Option<&Selection>,
    frame: &mut Frame,
    rect: Rect,
) {
    let rendered = get_rendered_lines(viewport, buffer);
    let styled = get_styled_lines(viewport, mode, cursor, selection, rendered);

    frame.render_widget(Paragraph::new(styled), rect);
}

fn get_rendered_lines<'a>(viewport: &ViewPort, buffer: &'a TextBuffer) -> Vec<&'a BufferLine> {
    buffer
        .lines
        .iter()
        .skip(viewport.vertical_index)
        .take(usize::from(viewport.height))
        .collect()
}

fn get_styled_lines(
    vp: &ViewPort,
    mode: &Mode,
    cursor: Option<&Cursor>,
    selection: Option<&Selection>,
    lines: Vec<&BufferLine>,
) -> Vec<Line<'static>> {
    let empty = BufferLine::default();
    let lines = if lines.is_empty() { vec![&empty] } else { lines };

    let mut result = Vec::new();
    for (i, bl) in lines.into_iter().enumerate() {
        let corrected_index = i + vp.vertical_index;

        let content = format!(
            "{}{}",
            prefix::get_prefix(vp, bl, corrected_index, cursor),
            line::get_content(vp, mode, cursor, selection, corrected_index, bl),
        );

        match content.into_text() {
            Ok(text) => result.push(text.lines),
            Err(error) => {
                tracing::warn!("converting line {} failed: {:?}", corrected_index, error)
            }
        }
    }

    result.into_iter().flatten().collect()
}
