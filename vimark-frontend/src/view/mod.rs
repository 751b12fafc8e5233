use ratatui::{
    prelude::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use vimark_buffer::{message::BufferMessage, model::Mode};

use crate::{
    error::AppError,
    layout::AppLayout,
    model::{Model, Pane},
    terminal::TerminalWrapper,
};

mod commandline;
mod statusline;

pub fn render_model(terminal: &mut TerminalWrapper, model: &mut Model) -> Result<(), AppError> {
    terminal.draw(|frame| {
        let layout = AppLayout::new(frame.area(), model.panes.len());

        for (index, (pane, rect)) in model.panes.iter_mut().zip(layout.panes.iter()).enumerate() {
            let mode = if index == model.focused {
                Some(&model.mode)
            } else {
                None
            };

            render_pane(pane, mode, frame, *rect);
        }

        statusline::view(model, frame, layout.statusline);
        commandline::view(model, frame, layout.commandline);
    })
}

/// `mode` is only set for the focused pane.
fn render_pane(pane: &mut Pane, mode: Option<&Mode>, frame: &mut Frame, rect: Rect) {
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(rect);

    pane.viewport.height = areas[1].height;
    pane.viewport.width = areas[1].width;

    let buffer_mode = mode.cloned().unwrap_or_default();
    vimark_buffer::update(
        &mut pane.viewport,
        &mut pane.cursor,
        &buffer_mode,
        &mut pane.buffer,
        &BufferMessage::UpdateViewPortByCursor,
    );

    frame.render_widget(Paragraph::new(get_title(pane, mode.is_some())), areas[0]);

    let selection = match (mode, &pane.visual_anchor) {
        (Some(Mode::Visual), Some(_)) => Some(pane.current_selection()),
        _ => None,
    };

    vimark_buffer::view(
        &pane.viewport,
        mode.map(|_| &pane.cursor),
        &buffer_mode,
        &pane.buffer,
        selection.as_ref(),
        frame,
        areas[1],
    );
}

fn get_title(pane: &Pane, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Gray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray).bg(Color::DarkGray)
    };

    Line::from(Span::styled(format!(" {} {} ", pane.id, pane.path.display()), style))
}
