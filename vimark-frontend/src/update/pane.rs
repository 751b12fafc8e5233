use std::path::PathBuf;

use vimark_buffer::{
    message::BufferMessage,
    model::{BufferLine, Mode, ViewMode},
};

use crate::{
    action::Action,
    model::{Model, Pane},
};

use super::mode;

pub fn focus_next(model: &mut Model) -> Vec<Action> {
    if model.panes.len() < 2 {
        return Vec::new();
    }

    leave_to_normal(model);
    model.focused = (model.focused + 1) % model.panes.len();

    match model.focused_pane() {
        Some(pane) => vec![Action::PaneOpened(pane.id)],
        None => Vec::new(),
    }
}

/// Opens the focused file in a new pane. The split starts without marks.
pub fn split(model: &mut Model) -> Vec<Action> {
    let (path, lines) = match model.focused_pane() {
        Some(pane) => (pane.path.clone(), get_unsigned_lines(&pane.buffer.lines)),
        None => return Vec::new(),
    };

    leave_to_normal(model);

    let pane_id = model.add_pane(path, lines);
    vec![Action::PaneOpened(pane_id)]
}

pub fn close(model: &mut Model) -> Vec<Action> {
    if model.panes.len() < 2 {
        model.message = Some("last pane can not be closed, quit with q".to_string());
        return Vec::new();
    }

    leave_to_normal(model);

    let closed = model.panes.remove(model.focused);
    model.focused = model.focused.saturating_sub(1);

    let mut actions = vec![Action::PaneClosed(closed.id)];
    if let Some(pane) = model.focused_pane() {
        actions.push(Action::PaneOpened(pane.id));
    }

    actions
}

pub fn open_next_file(model: &mut Model) -> Vec<Action> {
    if model.files.is_empty() {
        model.message = Some("no files to cycle through".to_string());
        return Vec::new();
    }

    let pane = match model.focused_pane() {
        Some(it) => it,
        None => return Vec::new(),
    };

    let index = model
        .files
        .iter()
        .position(|path| path == &pane.path)
        .map_or(0, |index| (index + 1) % model.files.len());

    vec![Action::Open(pane.id, model.files[index].clone())]
}

pub fn toggle_view_mode(model: &mut Model) -> Vec<Action> {
    if let Some(pane) = model.panes.get_mut(model.focused) {
        pane.view_mode = match pane.view_mode {
            ViewMode::Preview => ViewMode::Source,
            ViewMode::Source => ViewMode::Preview,
        };
        model.message = Some(format!("{} view", pane.view_mode));

        let is_edit = matches!(model.mode, Mode::Insert | Mode::Replace);
        if is_edit && !pane.view_mode.is_editable() {
            return mode::change(model, Mode::Normal);
        }
    }

    Vec::new()
}

/// Replaces the content of a pane with a freshly opened file. The host forgets
/// its native marks like a modal editor does on file switch.
pub fn set_file(pane: &mut Pane, path: PathBuf, lines: Vec<BufferLine>) {
    pane.path = path;
    pane.native_marks.clear();
    pane.visual_anchor = None;

    for message in [BufferMessage::SetContent(lines), BufferMessage::ResetCursor] {
        vimark_buffer::update(
            &mut pane.viewport,
            &mut pane.cursor,
            &Mode::Normal,
            &mut pane.buffer,
            &message,
        );
    }
}

fn leave_to_normal(model: &mut Model) {
    model.pending = None;
    if model.mode != Mode::Normal {
        mode::change(model, Mode::Normal);
    }
}

fn get_unsigned_lines(lines: &[BufferLine]) -> Vec<BufferLine> {
    lines
        .iter()
        .map(|line| BufferLine {
            content: line.content.clone(),
            ..Default::default()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use vimark_buffer::model::{Sign, TextBuffer};

    use crate::{host::PaneId, settings::Settings};

    use super::*;

    fn model_with_panes(count: usize) -> Model {
        let mut model = Model::new(Settings {
            files: vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")],
            ..Default::default()
        });

        for _ in 0..count {
            let lines = TextBuffer::from_content("one\ntwo").lines;
            model.add_pane(PathBuf::from("a.txt"), lines);
        }

        model
    }

    #[test]
    fn split_creates_new_pane_without_signs() {
        let mut model = model_with_panes(1);
        if let Some(pane) = model.panes.get_mut(model.focused) {
            pane.buffer.lines[0].signs.push(Sign {
                id: "mark",
                content: 'a',
                priority: 0,
                style: String::new(),
            });
        }

        let actions = split(&mut model);

        assert_eq!(model.panes.len(), 2);
        assert_eq!(model.focused, 1);
        assert_eq!(actions, vec![Action::PaneOpened(PaneId(2))]);
        assert!(model.panes[1].buffer.lines[0].signs.is_empty());
        assert_eq!(model.panes[1].buffer.lines[0].content, "one");
    }

    #[test]
    fn close_focuses_previous_pane() {
        let mut model = model_with_panes(3);
        assert_eq!(model.focused, 2);

        let actions = close(&mut model);

        assert_eq!(
            actions,
            vec![Action::PaneClosed(PaneId(3)), Action::PaneOpened(PaneId(2))]
        );
        assert_eq!(model.focused, 1);
    }

    #[test]
    fn close_keeps_last_pane() {
        let mut model = model_with_panes(1);
        assert!(close(&mut model).is_empty());
        assert_eq!(model.panes.len(), 1);
    }

    #[test]
    fn focus_next_wraps_around() {
        let mut model = model_with_panes(2);
        assert_eq!(focus_next(&mut model), vec![Action::PaneOpened(PaneId(1))]);
        assert_eq!(model.focused, 0);
    }

    #[test]
    fn open_next_file_cycles_files() {
        let mut model = model_with_panes(1);
        assert_eq!(
            open_next_file(&mut model),
            vec![Action::Open(PaneId(1), PathBuf::from("b.txt"))]
        );
    }

    #[test]
    fn set_file_forgets_native_marks() {
        let mut model = model_with_panes(1);
        let pane = model.panes.get_mut(model.focused).unwrap();
        pane.native_marks.insert('a', Default::default());
        pane.cursor.vertical_index = 1;

        let lines = TextBuffer::from_content("x").lines;
        set_file(pane, PathBuf::from("b.txt"), lines);

        assert!(pane.native_marks.is_empty());
        assert_eq!(pane.cursor.vertical_index, 0);
        assert_eq!(pane.path, PathBuf::from("b.txt"));
    }
}
