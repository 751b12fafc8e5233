use vimark_buffer::model::{BufferLine, Sign, SignIdentifier};

use crate::{
    mark::{Mark, MARK_SIGN_ID},
    model::Model,
};

/// Draws the published marks into the pane the tracker currently follows and
/// removes mark signs everywhere else.
pub fn apply_marks(model: &mut Model, marks: &[Mark]) {
    for pane in model.panes.iter_mut() {
        for line in pane.buffer.lines.iter_mut() {
            unset(line, MARK_SIGN_ID);
        }
    }

    let pane_id = match model.tracker.current_pane() {
        Some(it) => it,
        None => return,
    };

    let pane = match model.pane_mut(&pane_id) {
        Some(it) => it,
        None => return,
    };

    for mark in marks {
        let position = pane.buffer.offset_to_position(mark.from);
        if let Some(line) = pane.buffer.lines.get_mut(position.line) {
            line.signs.push(generate_mark_sign(mark.letter));
        }
    }
}

fn unset(line: &mut BufferLine, sign_id: SignIdentifier) {
    line.signs.retain(|sign| sign.id != sign_id);
}

fn generate_mark_sign(letter: char) -> Sign {
    Sign {
        id: MARK_SIGN_ID,
        content: letter,
        priority: 0,
        style: "\x1b[1;96m".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use vimark_buffer::model::TextBuffer;

    use crate::settings::Settings;

    use super::*;

    #[tokio::test]
    async fn signs_follow_tracked_pane() {
        let mut model = Model::new(Settings::default());
        let first = model.add_pane(
            PathBuf::from("a.txt"),
            TextBuffer::from_content("one\ntwo\nthree").lines,
        );
        let second = model.add_pane(
            PathBuf::from("a.txt"),
            TextBuffer::from_content("one\ntwo\nthree").lines,
        );

        let pane = &model.panes[1];
        model
            .tracker
            .on_pane_or_file_opened(second, &pane.path, pane)
            .await;

        model.panes[0].buffer.lines[0]
            .signs
            .push(generate_mark_sign('x'));

        apply_marks(&mut model, &[Mark::new('a', 4, 4), Mark::new('b', 4, 8)]);

        assert!(model.panes[0].buffer.lines[0].signs.is_empty());

        let lines = &model.panes[1].buffer.lines;
        let signs: Vec<_> = lines[1].signs.iter().map(|sign| sign.content).collect();
        assert_eq!(signs, vec!['a', 'b']);
        assert!(lines[0].signs.is_empty());
        assert_eq!(model.panes[0].id, first);
    }
}
