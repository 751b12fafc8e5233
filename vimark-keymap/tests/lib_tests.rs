use vimark_buffer::model::{Mode, ViewMode};
use vimark_keymap::{
    conversion,
    key::{Key, KeyCode, KeyModifier},
    message::KeySequence,
    MarkGestureResolver,
};

fn char_key(c: char) -> Key {
    Key::new(KeyCode::from_char(c), vec![])
}

fn shifted_key(c: char) -> Key {
    Key::new(KeyCode::from_char(c), vec![KeyModifier::Shift])
}

#[test]
fn add_key_leader_changes_sequence() {
    let mut resolver = MarkGestureResolver::default();
    let result = resolver.add_key(&char_key('m'), ViewMode::Source, &Mode::Normal);

    assert_eq!(result.mark, None);
    assert_eq!(result.sequence, KeySequence::Changed("m".to_string()));
    assert_eq!(resolver.pending(), 1);
}

#[test]
fn add_key_ma_emits_lowercase_mark() {
    let mut resolver = MarkGestureResolver::default();
    let _ = resolver.add_key(&char_key('m'), ViewMode::Source, &Mode::Normal);
    let result = resolver.add_key(&char_key('a'), ViewMode::Source, &Mode::Normal);

    assert_eq!(result.mark, Some('a'));
    assert_eq!(result.sequence, KeySequence::Completed("ma".to_string()));
    assert_eq!(resolver.pending(), 0);
}

#[test]
fn add_key_m_shift_a_emits_uppercase_mark() {
    let mut resolver = MarkGestureResolver::default();
    let _ = resolver.add_key(&char_key('m'), ViewMode::Source, &Mode::Normal);
    let result = resolver.add_key(&shifted_key('a'), ViewMode::Source, &Mode::Normal);

    assert_eq!(result.mark, Some('A'));
}

#[test]
fn add_key_without_leader_is_ignored() {
    let mut resolver = MarkGestureResolver::default();
    let result = resolver.add_key(&char_key('a'), ViewMode::Source, &Mode::Normal);

    assert_eq!(result.mark, None);
    assert_eq!(result.sequence, KeySequence::None);
    assert_eq!(resolver.pending(), 0);
}

#[test]
fn add_key_shifted_leader_is_ignored() {
    let mut resolver = MarkGestureResolver::default();
    let result = resolver.add_key(&shifted_key('m'), ViewMode::Source, &Mode::Normal);

    assert_eq!(result.sequence, KeySequence::None);
    assert_eq!(resolver.pending(), 0);
}

#[test]
fn add_key_esc_clears_pending_gesture() {
    let mut resolver = MarkGestureResolver::default();
    let _ = resolver.add_key(&char_key('m'), ViewMode::Source, &Mode::Normal);
    let result = resolver.add_key(&Key::new(KeyCode::Esc, vec![]), ViewMode::Source, &Mode::Normal);

    assert_eq!(result.mark, None);
    assert_eq!(result.sequence, KeySequence::Completed("m<esc>".to_string()));
    assert_eq!(resolver.pending(), 0);

    let result = resolver.add_key(&char_key('a'), ViewMode::Source, &Mode::Normal);
    assert_eq!(result.mark, None);
}

#[test]
fn add_key_esc_on_empty_buffer() {
    let mut resolver = MarkGestureResolver::default();
    let result = resolver.add_key(&Key::new(KeyCode::Esc, vec![]), ViewMode::Source, &Mode::Normal);

    assert_eq!(result.mark, None);
    assert_eq!(result.sequence, KeySequence::None);
}

#[test]
fn add_key_non_letter_keeps_pending_leader() {
    let mut resolver = MarkGestureResolver::default();
    let _ = resolver.add_key(&char_key('m'), ViewMode::Source, &Mode::Normal);
    let _ = resolver.add_key(&char_key('1'), ViewMode::Source, &Mode::Normal);
    let _ = resolver.add_key(&Key::new(KeyCode::Down, vec![]), ViewMode::Source, &Mode::Normal);

    assert_eq!(resolver.pending(), 1);

    let result = resolver.add_key(&char_key('b'), ViewMode::Source, &Mode::Normal);
    assert_eq!(result.mark, Some('b'));
}

#[test]
fn add_key_in_visual_mode_drops_gesture() {
    let mut resolver = MarkGestureResolver::default();
    let _ = resolver.add_key(&char_key('m'), ViewMode::Source, &Mode::Visual);
    let result = resolver.add_key(&char_key('a'), ViewMode::Source, &Mode::Visual);

    assert_eq!(result.mark, None);
    assert_eq!(result.sequence, KeySequence::Completed("ma".to_string()));
    assert_eq!(resolver.pending(), 0);
}

#[test]
fn add_key_with_unknown_mode_emits_mark() {
    let mut resolver = MarkGestureResolver::default();
    let marks = resolver.add_keys(
        conversion::from_keycode_string("mq"),
        ViewMode::Source,
        &None::<Mode>,
    );

    assert_eq!(marks, vec!['q']);
}

#[test]
fn add_key_in_preview_is_ignored() {
    let mut resolver = MarkGestureResolver::default();
    let marks = resolver.add_keys(
        conversion::from_keycode_string("ma"),
        ViewMode::Preview,
        &Mode::Normal,
    );

    assert!(marks.is_empty());
    assert_eq!(resolver.pending(), 0);
}

#[test]
fn add_keys_sequence_of_gestures() {
    let mut resolver = MarkGestureResolver::default();
    let marks = resolver.add_keys(
        conversion::from_keycode_string("xmajmB<esc>mmc"),
        ViewMode::Source,
        &Mode::Normal,
    );

    assert_eq!(marks, vec!['a', 'B', 'm']);
}

#[test]
fn add_keys_ctrl_leader_is_not_a_gesture() {
    let mut resolver = MarkGestureResolver::default();
    let marks = resolver.add_keys(
        conversion::from_keycode_string("<C-m>a"),
        ViewMode::Source,
        &Mode::Normal,
    );

    assert!(marks.is_empty());
}
