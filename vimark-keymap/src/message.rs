#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeySequence {
    Completed(String),
    Changed(String),
    None,
}

/// Outcome of one key handed to the recognizer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Envelope {
    pub mark: Option<char>,
    pub sequence: KeySequence,
}

impl Envelope {
    pub fn none() -> Self {
        Self {
            mark: None,
            sequence: KeySequence::None,
        }
    }
}
