use std::path::PathBuf;

use action::{Action, ActionResult};
use error::AppError;
use event::{Emitter, MarkForwarder};
use init::settings::{load_settings_from_file, save_settings_to_file};
use mark::Mark;
use model::Model;
use settings::Settings;
use terminal::TerminalWrapper;
use tokio::sync::mpsc::UnboundedReceiver;
use update::update_model;
use view::render_model;

mod action;
pub mod error;
mod event;
pub mod host;
mod init;
mod layout;
pub mod mark;
mod model;
pub mod notifier;
mod open;
pub mod session;
pub mod settings;
mod terminal;
pub mod tracker;
mod update;
mod view;

const SCRATCH_PATH: &str = "[scratch]";

pub async fn run(mut settings: Settings) -> Result<(), AppError> {
    if let Err(error) = load_settings_from_file(&mut settings) {
        tracing::error!("loading settings failed: {:?}", error);
    }

    if let Some(before) = settings.show_signs_before_line_numbers_override.take() {
        settings.show_signs_before_line_numbers = before;
        if let Err(error) = save_settings_to_file(&settings) {
            tracing::error!("saving settings failed: {:?}", error);
        }
    }

    settings.window.sign_placement = settings.sign_placement();

    let mut model = Model::new(settings);
    let (forwarder, mut marks_receiver) = MarkForwarder::channel();
    model.tracker.subscribe(forwarder);

    let initial_actions = open_initial_panes(&mut model);

    tracing::debug!("starting with model state: {:?}", model);

    let mut terminal = TerminalWrapper::start()?;
    let mut emitter = Emitter::start();

    action::exec(&mut model, initial_actions).await;
    apply_published_marks(&mut model, &mut marks_receiver);

    let mut result = Vec::new();
    if let Err(error) = render_model(&mut terminal, &mut model) {
        result.push(error);
    }

    while result.is_empty() {
        let envelope = match emitter.receiver.recv().await {
            Some(it) => it,
            None => break,
        };

        tracing::debug!("received messages: {:?}", envelope.messages);

        let actions = update_model(&mut model, envelope);
        let exec = action::exec(&mut model, actions).await;
        apply_published_marks(&mut model, &mut marks_receiver);

        if exec == ActionResult::Quit {
            break;
        }

        if let Err(error) = render_model(&mut terminal, &mut model) {
            result.push(error);
        }
    }

    emitter.shutdown().await;

    if let Err(error) = terminal.shutdown() {
        result.push(error);
    }

    if result.is_empty() {
        Ok(())
    } else {
        Err(AppError::Aggregate(result))
    }
}

/// One pane per file. The first pane is announced last and ends up focused.
fn open_initial_panes(model: &mut Model) -> Vec<Action> {
    let mut paths = model.files.clone();
    if paths.is_empty() {
        paths.push(PathBuf::from(SCRATCH_PATH));
    }

    let mut actions = Vec::new();
    for path in paths {
        let pane_id = model.add_pane(path.clone(), Vec::new());
        actions.push(Action::Open(pane_id, path));
    }

    actions.reverse();
    model.focused = 0;

    actions
}

fn apply_published_marks(model: &mut Model, receiver: &mut UnboundedReceiver<Vec<Mark>>) {
    while let Ok(marks) = receiver.try_recv() {
        update::sign::apply_marks(model, &marks);
    }
}
