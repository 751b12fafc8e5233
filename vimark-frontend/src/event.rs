use futures::{FutureExt, StreamExt};
use tokio::{
    select,
    sync::{
        mpsc::{self, Receiver, UnboundedReceiver, UnboundedSender},
        oneshot,
    },
};
use vimark_keymap::{conversion, key::Key};

use crate::{mark::Mark, notifier::MarkObserver};

#[derive(Debug)]
pub struct Envelope {
    pub messages: Vec<Message>,
}

#[derive(Debug)]
pub enum Message {
    Key(Key),
    Resize(u16, u16),
}

pub struct Emitter {
    cancellation: Option<oneshot::Sender<oneshot::Sender<bool>>>,
    pub receiver: Receiver<Envelope>,
}

impl Emitter {
    pub fn start() -> Self {
        let (sender, receiver) = mpsc::channel(1);

        let (cancellation, cancellation_receiver) = oneshot::channel();
        start_crossterm_listener(cancellation_receiver, sender);

        Self {
            cancellation: Some(cancellation),
            receiver,
        }
    }

    pub async fn shutdown(&mut self) {
        let cancellation = match self.cancellation.take() {
            Some(it) => it,
            None => return,
        };

        let (sender, receiver) = oneshot::channel();
        if let Err(error) = cancellation.send(sender) {
            tracing::error!("sending cancellation failed: {:?}", error);
            return;
        }

        if let Err(error) = receiver.await {
            tracing::warn!("crossterm listener did not confirm shutdown: {:?}", error);
        }
    }
}

fn start_crossterm_listener(
    mut cancellation_receiver: oneshot::Receiver<oneshot::Sender<bool>>,
    sender: mpsc::Sender<Envelope>,
) {
    tokio::spawn(async move {
        let mut reader = crossterm::event::EventStream::new();

        loop {
            let crossterm_event = reader.next().fuse();

            select! {
                Ok(confirmation) = &mut cancellation_receiver => {
                    let _ = confirmation.send(true);
                    break
                }
                Some(Ok(event)) = crossterm_event => {
                    if let Some(envelope) = handle_crossterm_event(event) {
                        let _ = sender.send(envelope).await;
                    }
                }
            }
        }
    });
}

fn handle_crossterm_event(event: crossterm::event::Event) -> Option<Envelope> {
    match event {
        crossterm::event::Event::Key(key) => {
            conversion::to_key(&key).map(|key| Envelope {
                messages: vec![Message::Key(key)],
            })
        }
        crossterm::event::Event::Resize(x, y) => Some(Envelope {
            messages: vec![Message::Resize(x, y)],
        }),
        crossterm::event::Event::FocusLost
        | crossterm::event::Event::FocusGained
        | crossterm::event::Event::Paste(_)
        | crossterm::event::Event::Mouse(_) => None,
    }
}

/// Observer handing every published mark list to the event loop.
pub struct MarkForwarder {
    sender: UnboundedSender<Vec<Mark>>,
}

impl MarkForwarder {
    pub fn channel() -> (Self, UnboundedReceiver<Vec<Mark>>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl MarkObserver for MarkForwarder {
    fn marks_changed(&mut self, marks: &[Mark]) {
        if let Err(error) = self.sender.send(marks.to_vec()) {
            tracing::error!("forwarding changed marks failed: {:?}", error);
        }
    }
}
