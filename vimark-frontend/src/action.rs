use std::path::PathBuf;

use crate::{host::PaneId, init::settings::save_settings_to_file, model::Model, open};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    /// Loads a file into an existing pane and announces it.
    Open(PaneId, PathBuf),
    PaneClosed(PaneId),
    /// The pane gained focus or was created.
    PaneOpened(PaneId),
    Quit,
    SaveSettings,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ActionResult {
    Normal,
    Quit,
}

pub async fn exec(model: &mut Model, actions: Vec<Action>) -> ActionResult {
    let mut result = ActionResult::Normal;
    for action in actions {
        tracing::debug!("executing action: {:?}", action);

        match action {
            Action::Open(pane_id, path) => {
                let lines = match open::read_lines(&path).await {
                    Ok(it) => it,
                    Err(error) => {
                        tracing::error!("opening {:?} failed: {:?}", path, error);
                        model.message = Some(format!("opening {} failed", path.display()));
                        Vec::new()
                    }
                };

                if let Some(pane) = model.pane_mut(&pane_id) {
                    crate::update::pane::set_file(pane, path, lines);
                }

                notify_pane_opened(model, pane_id).await;
            }
            Action::PaneClosed(pane_id) => model.tracker.on_pane_closed(&pane_id),
            Action::PaneOpened(pane_id) => notify_pane_opened(model, pane_id).await,
            Action::Quit => result = ActionResult::Quit,
            Action::SaveSettings => {
                if let Err(error) = save_settings_to_file(&model.settings) {
                    tracing::error!("saving settings failed: {:?}", error);
                    model.message = Some("saving settings failed".to_string());
                }
            }
        }
    }

    result
}

async fn notify_pane_opened(model: &mut Model, pane_id: PaneId) {
    let pane = match model.panes.iter().find(|pane| pane.id == pane_id) {
        Some(it) => it,
        None => {
            tracing::warn!("opened {} is not part of the layout", pane_id);
            return;
        }
    };

    model
        .tracker
        .on_pane_or_file_opened(pane.id, &pane.path, pane)
        .await;
}
