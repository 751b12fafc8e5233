use vimark_buffer::model::SignIdentifier;

pub const MARK_SIGN_ID: SignIdentifier = "mark";

/// One named mark of a pane. `from` and `to` are char offsets of the start of
/// the first and last marked line.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Mark {
    pub letter: char,
    pub from: usize,
    pub to: usize,
}

impl Mark {
    pub fn new(letter: char, from: usize, to: usize) -> Self {
        Self { letter, from, to }
    }
}

/// Inserts `mark` keeping `marks` sorted by `from`. A mark with the same
/// letter is replaced and returned. Equal `from` keep insertion order.
pub fn insert(marks: &mut Vec<Mark>, mark: Mark) -> Option<Mark> {
    let replaced = marks
        .iter()
        .position(|m| m.letter == mark.letter)
        .map(|index| marks.remove(index));

    marks.push(mark);
    marks.sort_by_key(|m| m.from);

    replaced
}
