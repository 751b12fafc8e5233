use crate::{action::Action, model::Model};

/// Flips the persisted sign placement. Open panes keep the placement they
/// were created with.
pub fn toggle_sign_placement(model: &mut Model) -> Vec<Action> {
    let before = !model.settings.show_signs_before_line_numbers;
    model.settings.show_signs_before_line_numbers = before;

    let placement = if before { "before" } else { "after" };
    model.message = Some(format!("signs {} line numbers after restart", placement));

    vec![Action::SaveSettings]
}
