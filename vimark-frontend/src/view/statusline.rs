use ratatui::{
    prelude::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::model::Model;

pub fn view(model: &Model, frame: &mut Frame, rect: Rect) {
    let mode = Line::from(Span::styled(
        format!(" {} ", model.mode.to_string().to_uppercase()),
        Style::default().fg(Color::Black).bg(Color::LightBlue),
    ));
    let marks = get_marks_content(model);
    let position = get_position_content(model);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(mode.width() as u16),
            Constraint::Length(1),
            Constraint::Min(marks.width() as u16),
            Constraint::Length(position.width() as u16),
        ])
        .split(rect);

    frame.render_widget(
        Block::default().style(Style::default().bg(Color::Black)),
        rect,
    );

    frame.render_widget(Paragraph::new(mode), layout[0]);
    frame.render_widget(Paragraph::new(marks), layout[2]);
    frame.render_widget(Paragraph::new(position), layout[3]);
}

fn get_marks_content(model: &Model) -> Line<'static> {
    let marks = model.tracker.active_marks();
    if marks.is_empty() {
        return Line::from(Span::styled("no marks", Style::default().fg(Color::DarkGray)));
    }

    let letters: String = marks.iter().map(|mark| mark.letter).collect();
    Line::from(vec![
        Span::styled("marks ", Style::default().fg(Color::Gray)),
        Span::styled(letters, Style::default().fg(Color::LightCyan)),
    ])
}

fn get_position_content(model: &Model) -> Line<'static> {
    let pane = match model.focused_pane() {
        Some(it) => it,
        None => return Line::default(),
    };

    let count = pane.buffer.lines.len();
    let position = if count == 0 {
        0
    } else {
        pane.cursor.vertical_index + 1
    };

    Line::from(vec![
        Span::styled(format!("{} ", pane.view_mode), Style::default().fg(Color::Gray)),
        Span::styled(format!("{}/{} ", position, count), Style::default().fg(Color::Gray)),
    ])
}
