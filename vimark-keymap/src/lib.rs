use std::collections::VecDeque;

use buffer::GestureBuffer;
use key::{Key, KeyCode};
use message::{Envelope, KeySequence};
use vimark_buffer::model::{Mode, ViewMode};

mod buffer;
pub mod conversion;
pub mod key;
pub mod message;

/// First key of every mark gesture, as in vim's `m{a-zA-Z}`.
pub const LEADER: char = 'm';

#[derive(Debug, thiserror::Error, PartialEq)]
enum GestureError {
    #[error("Gesture must start with the leader key.")]
    LeaderExpected,
    #[error("Mode {0} does not accept marks.")]
    ModeRejected(Mode),
    #[error("Key is not a mark letter.")]
    NoLetter,
}

/// Access to the sub-mode of the host's modal editing layer. `None` means the
/// host could not tell and is treated like normal mode.
pub trait EditModeProbe {
    fn current_sub_mode(&self) -> Option<Mode>;
}

impl EditModeProbe for Mode {
    fn current_sub_mode(&self) -> Option<Mode> {
        Some(self.clone())
    }
}

impl EditModeProbe for Option<Mode> {
    fn current_sub_mode(&self) -> Option<Mode> {
        self.clone()
    }
}

/// Recognizes the two key `m{letter}` gesture and yields the mark letter.
#[derive(Debug, Default)]
pub struct MarkGestureResolver {
    buffer: GestureBuffer,
}

impl MarkGestureResolver {
    pub fn add_keys(
        &mut self,
        keys: VecDeque<Key>,
        view_mode: ViewMode,
        probe: &impl EditModeProbe,
    ) -> Vec<char> {
        keys.iter()
            .filter_map(|key| self.add_key(key, view_mode, probe).mark)
            .collect()
    }

    pub fn add_key(
        &mut self,
        key: &Key,
        view_mode: ViewMode,
        probe: &impl EditModeProbe,
    ) -> Envelope {
        if !view_mode.is_editable() {
            tracing::trace!("key {} ignored in view mode {}", key, view_mode);
            return Envelope::none();
        }

        if key.code == KeyCode::Esc {
            let sequence = if self.buffer.is_empty() {
                KeySequence::None
            } else {
                KeySequence::Completed(format!("{}{}", self.buffer, key))
            };

            self.buffer.clear();
            return Envelope {
                mark: None,
                sequence,
            };
        }

        let letter = match get_letter(&self.buffer, key) {
            Ok(it) => it,
            Err(error) => {
                tracing::trace!("key {} ignored: {}", key, error);
                return Envelope::none();
            }
        };

        self.buffer.push(letter);
        if !self.buffer.is_complete() {
            return Envelope {
                mark: None,
                sequence: KeySequence::Changed(self.buffer.to_string()),
            };
        }

        let sequence = self.buffer.to_string();
        let mark = self.buffer.last();
        self.buffer.clear();

        let mark = match check_mode(probe) {
            Ok(()) => mark,
            Err(error) => {
                tracing::debug!("gesture {} dropped: {}", sequence, error);
                None
            }
        };

        Envelope {
            mark,
            sequence: KeySequence::Completed(sequence),
        }
    }

    pub fn pending(&self) -> usize {
        self.buffer.len()
    }
}

fn get_letter(buffer: &GestureBuffer, key: &Key) -> Result<char, GestureError> {
    let letter = key.to_letter().ok_or(GestureError::NoLetter)?;
    if buffer.is_empty() && letter != LEADER {
        return Err(GestureError::LeaderExpected);
    }

    Ok(letter)
}

fn check_mode(probe: &impl EditModeProbe) -> Result<(), GestureError> {
    match probe.current_sub_mode() {
        None | Some(Mode::Normal) => Ok(()),
        Some(mode) => Err(GestureError::ModeRejected(mode)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_letter_requires_leader_on_empty_buffer() {
        let buffer = GestureBuffer::default();
        let key = Key::new(KeyCode::from_char('a'), vec![]);

        assert_eq!(get_letter(&buffer, &key), Err(GestureError::LeaderExpected));
    }

    #[test]
    fn get_letter_accepts_any_letter_after_leader() {
        let mut buffer = GestureBuffer::default();
        buffer.push(LEADER);
        let key = Key::new(KeyCode::from_char('z'), vec![]);

        assert_eq!(get_letter(&buffer, &key), Ok('z'));
    }

    #[test]
    fn check_mode_treats_unknown_as_normal() {
        assert_eq!(check_mode(&None::<Mode>), Ok(()));
        assert_eq!(check_mode(&Mode::Normal), Ok(()));
        assert_eq!(
            check_mode(&Mode::Insert),
            Err(GestureError::ModeRejected(Mode::Insert))
        );
    }
}
