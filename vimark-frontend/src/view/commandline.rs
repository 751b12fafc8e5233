use ratatui::{
    prelude::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::Model;

pub fn view(model: &Model, frame: &mut Frame, rect: Rect) {
    let key_sequence_width = model.key_sequence.chars().count() as u16;
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(100),
            Constraint::Length(key_sequence_width),
        ])
        .split(rect);

    if let Some(message) = &model.message {
        let line = Line::from(Span::styled(message.clone(), Style::default().fg(Color::Gray)));
        frame.render_widget(Paragraph::new(line), layout[0]);
    }

    frame.render_widget(Paragraph::new(model.key_sequence.as_str()), layout[1]);
}
