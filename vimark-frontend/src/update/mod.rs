use crate::{
    action::Action,
    event::{Envelope, Message},
    model::Model,
};

mod key;
mod mark;
mod mode;
pub mod pane;
mod settings;
pub mod sign;

#[tracing::instrument(skip(model))]
pub fn update_model(model: &mut Model, envelope: Envelope) -> Vec<Action> {
    let mut actions = Vec::new();
    for message in envelope.messages {
        match message {
            Message::Key(key) => actions.extend(key::update(model, &key)),
            Message::Resize(x, y) => tracing::trace!("terminal resized to {}x{}", x, y),
        }
    }

    actions
}
