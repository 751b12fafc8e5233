use std::fmt::Display;

/// Holds the captured chars of a mark gesture in progress.
#[derive(Debug, Default)]
pub struct GestureBuffer {
    buffer: Vec<char>,
}

impl GestureBuffer {
    pub const CAPACITY: usize = 2;

    pub fn push(&mut self, char: char) {
        if self.is_complete() {
            self.buffer.clear();
        }

        self.buffer.push(char);
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn is_complete(&self) -> bool {
        self.buffer.len() >= Self::CAPACITY
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn last(&self) -> Option<char> {
        self.buffer.last().copied()
    }
}

impl Display for GestureBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let result: String = self.buffer.iter().collect();
        write!(f, "{}", result)
    }
}
