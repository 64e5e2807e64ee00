use contracts::domain::a001_department::aggregate::{CODE_LETTER_SUFFIXES, MAX_CODE_LENGTH};
use contracts::domain::a001_department::{DepartmentRecord, DepartmentTable};
use leptos::prelude::*;

/// Maximum number of characters the keypad buffer holds (soft cap)
pub const MAX_INPUT_LENGTH: usize = MAX_CODE_LENGTH;

/// A character the keypad accepts: a digit `0`-`9` or one of the letter
/// suffixes `A`/`B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadChar(char);

impl KeypadChar {
    /// Returns `None` for anything outside `{0-9, A, B}`. Lower-case letters
    /// are rejected here; the keyboard layer upper-cases them first.
    pub fn new(c: char) -> Option<Self> {
        if c.is_ascii_digit() || CODE_LETTER_SUFFIXES.contains(&c) {
            Some(Self(c))
        } else {
            None
        }
    }

    pub fn as_char(&self) -> char {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadAction {
    Append(KeypadChar),
    DeleteLast,
    Clear,
}

/// The typed department code: 0 to 3 characters, changed one character at
/// a time or cleared.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeypadState {
    input: String,
}

impl KeypadState {
    pub fn as_str(&self) -> &str {
        &self.input
    }

    pub fn len(&self) -> usize {
        self.input.len()
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    pub fn can_append(&self) -> bool {
        self.len() < MAX_INPUT_LENGTH
    }

    pub fn has_input(&self) -> bool {
        !self.is_empty()
    }

    /// Appends unless the buffer is full. Returns whether the input changed.
    pub fn append(&mut self, c: KeypadChar) -> bool {
        if !self.can_append() {
            return false;
        }
        self.input.push(c.as_char());
        true
    }

    /// Removes the last character. Returns whether the input changed.
    pub fn delete_last(&mut self) -> bool {
        self.input.pop().is_some()
    }

    /// Returns whether the input changed.
    pub fn clear(&mut self) -> bool {
        let changed = !self.input.is_empty();
        self.input.clear();
        changed
    }

    pub fn apply(&mut self, action: KeypadAction) -> bool {
        match action {
            KeypadAction::Append(c) => self.append(c),
            KeypadAction::DeleteLast => self.delete_last(),
            KeypadAction::Clear => self.clear(),
        }
    }

    pub fn current_match(&self, table: &DepartmentTable) -> Option<&'static DepartmentRecord> {
        table.match_input(&self.input)
    }
}

pub fn create_state() -> RwSignal<KeypadState> {
    RwSignal::new(KeypadState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ch(c: char) -> KeypadChar {
        KeypadChar::new(c).unwrap()
    }

    fn typed(chars: &str) -> KeypadState {
        let mut state = KeypadState::default();
        for c in chars.chars() {
            state.append(ch(c));
        }
        state
    }

    fn table() -> &'static DepartmentTable {
        DepartmentTable::builtin()
    }

    #[test]
    fn test_keypad_char_accepts_digits_and_suffixes() {
        for c in "0123456789AB".chars() {
            assert_eq!(KeypadChar::new(c).map(|k| k.as_char()), Some(c));
        }
        for c in ['a', 'b', 'C', 'Z', ' ', '+', 'é'] {
            assert_eq!(KeypadChar::new(c), None, "{c:?} should be rejected");
        }
    }

    #[test]
    fn test_empty_state_has_no_match() {
        let state = KeypadState::default();
        assert!(state.is_empty());
        assert!(state.can_append());
        assert!(!state.has_input());
        assert_eq!(state.current_match(table()), None);
    }

    #[test]
    fn test_two_digits_match_department() {
        let state = typed("68");
        assert_eq!(state.as_str(), "68");
        assert_eq!(state.current_match(table()).unwrap().code, "68");
    }

    #[test]
    fn test_single_digit_matches_padded_department() {
        let state = typed("8");
        assert_eq!(state.as_str(), "8");
        assert_eq!(state.current_match(table()).unwrap().code, "08");
    }

    #[test]
    fn test_letter_suffix_matches_corsica() {
        let state = typed("2A");
        assert_eq!(state.current_match(table()).unwrap().code, "2A");
    }

    #[test]
    fn test_fourth_append_is_ignored() {
        let mut state = typed("971");
        assert!(!state.can_append());
        assert!(!state.append(ch('4')));
        assert_eq!(state.as_str(), "971");
        assert_eq!(state.current_match(table()).unwrap().name, "Guadeloupe");
    }

    #[test]
    fn test_length_never_exceeds_cap() {
        let mut state = KeypadState::default();
        for c in "1234567890AB1234".chars() {
            state.append(ch(c));
            assert!(state.len() <= MAX_INPUT_LENGTH);
        }
        assert_eq!(state.as_str(), "123");
    }

    #[test]
    fn test_delete_last() {
        let mut state = typed("2B");
        assert!(state.delete_last());
        assert_eq!(state.as_str(), "2");
        assert!(state.delete_last());
        assert!(state.is_empty());
        assert!(!state.delete_last());
        assert!(state.is_empty());
    }

    #[test]
    fn test_clear_always_empties() {
        for input in ["", "6", "68", "976"] {
            let mut state = typed(input);
            state.clear();
            assert_eq!(state, KeypadState::default());
        }
    }

    #[test]
    fn test_apply_routes_actions() {
        let mut state = KeypadState::default();
        assert!(state.apply(KeypadAction::Append(ch('7'))));
        assert!(state.apply(KeypadAction::Append(ch('5'))));
        assert_eq!(state.current_match(table()).unwrap().name, "Paris");
        assert!(state.apply(KeypadAction::DeleteLast));
        assert_eq!(state.as_str(), "7");
        assert!(state.apply(KeypadAction::Clear));
        assert!(!state.apply(KeypadAction::Clear));
        assert!(state.is_empty());
    }

    #[test]
    fn test_buffer_reusable_after_no_match() {
        let mut state = typed("99");
        assert_eq!(state.current_match(table()), None);
        state.clear();
        state.append(ch('1'));
        assert_eq!(state.current_match(table()).unwrap().code, "01");
    }
}
