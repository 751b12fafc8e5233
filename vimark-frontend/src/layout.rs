use std::rc::Rc;

use ratatui::prelude::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Debug)]
pub struct AppLayout {
    pub panes: Rc<[Rect]>,
    pub statusline: Rect,
    pub commandline: Rect,
}

impl AppLayout {
    pub fn new(rect: Rect, pane_count: usize) -> Self {
        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(100),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(rect);

        let count = pane_count.max(1) as u32;
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(Constraint::from_ratios((0..count).map(|_| (1, count))))
            .split(main[0]);

        Self {
            panes,
            statusline: main[1],
            commandline: main[2],
        }
    }
}
