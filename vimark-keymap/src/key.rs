use std::{collections::VecDeque, fmt::Display, hash::Hash};

#[derive(Clone, Debug, Eq)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: Vec<KeyModifier>,
}

impl Key {
    pub fn new(key: KeyCode, modifiers: Vec<KeyModifier>) -> Self {
        Self {
            code: key,
            modifiers,
        }
    }

    pub fn is_shifted(&self) -> bool {
        self.modifiers.contains(&KeyModifier::Shift)
    }

    /// Captured form of an ascii letter key: uppercase if shift is held.
    /// Letters combined with any other modifier are no letters.
    pub fn to_letter(&self) -> Option<char> {
        let char = match self.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => c,
            _ => return None,
        };

        if self
            .modifiers
            .iter()
            .any(|modifier| *modifier != KeyModifier::Shift)
        {
            return None;
        }

        if self.is_shifted() {
            Some(char.to_ascii_uppercase())
        } else {
            Some(char.to_ascii_lowercase())
        }
    }

    pub fn to_keycode_string(&self) -> String {
        let mut modifiers = self.modifiers.clone();
        modifiers.sort();

        match self.code {
            KeyCode::Char(' ') | KeyCode::Char('<') => {
                get_key_string(self.code.to_string(), modifiers, true)
            }
            KeyCode::Char(_) => {
                if modifiers.contains(&KeyModifier::Shift) {
                    modifiers.retain(|modifier| *modifier != KeyModifier::Shift);
                    get_key_string(self.code.to_string().to_uppercase(), modifiers, false)
                } else {
                    get_key_string(self.code.to_string(), modifiers, false)
                }
            }
            _ => get_key_string(self.code.to_string(), modifiers, true),
        }
    }

    pub fn from_keycode_string(keycode: &str) -> Option<Self> {
        let regex = regex::Regex::new(r"[^-<>]+|^-$|--").expect("Failed to compile regex");
        let mut codes = regex
            .find_iter(keycode)
            .map(|m| m.as_str())
            .collect::<VecDeque<_>>();

        let mut modifiers = Vec::new();
        let mut last = codes.pop_back()?;
        if last == "--" {
            last = "-";
        }

        if last.chars().count() == 1 && last.chars().last()?.is_ascii_uppercase() {
            modifiers.push(KeyModifier::Shift);
        }

        for modifier in codes {
            match modifier.to_ascii_uppercase().as_str() {
                "A" => modifiers.push(KeyModifier::Alt),
                "C" => modifiers.push(KeyModifier::Ctrl),
                "D" => modifiers.push(KeyModifier::Command),
                "S" => {
                    if !modifiers.contains(&KeyModifier::Shift) {
                        modifiers.push(KeyModifier::Shift)
                    }
                }
                _ => (),
            }
        }

        KeyCode::from_keycode_string(last).map(|code| Self { code, modifiers })
    }
}

impl Hash for Key {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.to_keycode_string().hash(state);
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        if self.code != other.code {
            return false;
        }

        if self.modifiers.len() != other.modifiers.len() {
            return false;
        }

        for modifier in &self.modifiers {
            if !other.modifiers.contains(modifier) {
                return false;
            }
        }

        true
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_keycode_string())
    }
}

fn get_key_string(code: String, modifiers: Vec<KeyModifier>, force_ltgt: bool) -> String {
    if modifiers.is_empty() && !force_ltgt {
        return code;
    }

    let mut result = String::from("<");
    for modifier in modifiers {
        match modifier {
            KeyModifier::Alt => result.push_str("A-"),
            KeyModifier::Command => result.push_str("D-"),
            KeyModifier::Ctrl => result.push_str("C-"),
            KeyModifier::Shift => result.push_str("S-"),
        };
    }

    result.push_str(&code);
    result.push('>');

    result
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum KeyCode {
    Backspace,
    Char(char),
    Delete,
    Down,
    Enter,
    Esc,
    Left,
    Right,
    Tab,
    Up,
}

impl KeyCode {
    pub fn from_keycode_string(keycode: &str) -> Option<Self> {
        match keycode {
            "bs" => Some(KeyCode::Backspace),
            "del" => Some(KeyCode::Delete),
            "down" => Some(KeyCode::Down),
            "cr" => Some(KeyCode::Enter),
            "esc" => Some(KeyCode::Esc),
            "left" => Some(KeyCode::Left),
            "lt" => Some(KeyCode::Char('<')),
            "right" => Some(KeyCode::Right),
            "space" => Some(KeyCode::Char(' ')),
            "tab" => Some(KeyCode::Tab),
            "up" => Some(KeyCode::Up),
            code => {
                if code.chars().count() == 1 {
                    code.chars().next().map(Self::from_char)
                } else {
                    None
                }
            }
        }
    }

    pub fn from_char(c: char) -> KeyCode {
        KeyCode::Char(c.to_ascii_lowercase())
    }
}

impl Display for KeyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyCode::Backspace => write!(f, "bs"),
            KeyCode::Char(' ') => write!(f, "space"),
            KeyCode::Char('<') => write!(f, "lt"),
            KeyCode::Char(c) => write!(f, "{}", c.to_ascii_lowercase()),
            KeyCode::Delete => write!(f, "del"),
            KeyCode::Down => write!(f, "down"),
            KeyCode::Enter => write!(f, "cr"),
            KeyCode::Esc => write!(f, "esc"),
            KeyCode::Left => write!(f, "left"),
            KeyCode::Right => write!(f, "right"),
            KeyCode::Tab => write!(f, "tab"),
            KeyCode::Up => write!(f, "up"),
        }
    }
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum KeyModifier {
    Alt,
    Command,
    Ctrl,
    Shift,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_keycode_string_valid() {
        let result = Key::from_keycode_string("a");
        assert!(result.is_some(), "Expected Some(Key), got None");
    }

    #[test]
    fn from_keycode_string_dash() {
        let result = Key::from_keycode_string("-");
        assert!(result.is_some(), "Expected Some(Key), got None");
    }

    #[test]
    fn from_keycode_string_invalid() {
        let result = Key::from_keycode_string("<>");
        assert!(result.is_none(), "Expected None, got Some(Key)");
    }

    #[test]
    fn from_keycode_string_case_sensitive() {
        let result = Key::from_keycode_string("A");
        assert!(result.is_some(), "Expected Some(Key), got None");
        assert_eq!(result.as_ref().unwrap().code, KeyCode::Char('a'));
        assert_eq!(result.unwrap().modifiers, vec![KeyModifier::Shift]);
    }

    #[test]
    fn from_keycode_string_with_modifiers() {
        let result = Key::from_keycode_string("<A-C-lt>");
        assert!(result.is_some(), "Expected Some(Key), got None");
        assert_eq!(result.as_ref().unwrap().code, KeyCode::Char('<'));

        let modifiers = result.unwrap().modifiers;
        assert!(modifiers.contains(&KeyModifier::Alt));
        assert!(modifiers.contains(&KeyModifier::Ctrl));
    }

    #[test]
    fn to_letter_lowercase() {
        let key = Key::new(KeyCode::from_char('a'), vec![]);
        assert_eq!(key.to_letter(), Some('a'));
    }

    #[test]
    fn to_letter_uppercase_with_shift() {
        let key = Key::new(KeyCode::from_char('a'), vec![KeyModifier::Shift]);
        assert_eq!(key.to_letter(), Some('A'));
    }

    #[test]
    fn to_letter_rejects_ctrl() {
        let key = Key::new(KeyCode::from_char('m'), vec![KeyModifier::Ctrl]);
        assert_eq!(key.to_letter(), None);
    }

    #[test]
    fn to_letter_rejects_digits_and_specials() {
        assert_eq!(Key::new(KeyCode::from_char('1'), vec![]).to_letter(), None);
        assert_eq!(Key::new(KeyCode::from_char('ä'), vec![]).to_letter(), None);
        assert_eq!(Key::new(KeyCode::Esc, vec![]).to_letter(), None);
    }

    #[test]
    fn to_keycode_string_roundtrips_shift() {
        let key = Key::from_keycode_string("<C-w>").unwrap();
        assert_eq!(key.to_keycode_string(), "<C-w>");

        let key = Key::from_keycode_string("M").unwrap();
        assert_eq!(key.to_keycode_string(), "M");
    }
}
