use super::state::{create_state, KeypadAction, KeypadChar, KeypadState};
use contracts::domain::a001_department::{DepartmentRecord, DepartmentTable};
use leptos::prelude::*;

/// Placeholder shown in place of the code while nothing is typed
pub const EMPTY_INPUT_LABEL: &str = "—";

/// What the keypad currently resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Nothing typed yet
    AwaitingInput,
    /// Something typed, but no department has this code
    NotFound,
    Found(&'static DepartmentRecord),
}

impl LookupOutcome {
    pub fn resolve(state: &KeypadState, table: &DepartmentTable) -> Self {
        if state.is_empty() {
            return LookupOutcome::AwaitingInput;
        }
        match state.current_match(table) {
            Some(record) => LookupOutcome::Found(record),
            None => LookupOutcome::NotFound,
        }
    }

    pub fn record(&self) -> Option<&'static DepartmentRecord> {
        match self {
            LookupOutcome::Found(record) => Some(*record),
            _ => None,
        }
    }

    /// Short line under the typed code
    pub fn info_text(&self) -> String {
        match self {
            LookupOutcome::Found(record) => record.display_label(),
            LookupOutcome::NotFound => {
                "Ce numéro ne correspond à aucun département connu.".to_string()
            }
            LookupOutcome::AwaitingInput => {
                "Tapez un numéro (ex. 68) pour trouver un département.".to_string()
            }
        }
    }

    /// Message of the result section when there is no record to show
    pub fn empty_result_text(&self) -> Option<&'static str> {
        match self {
            LookupOutcome::Found(_) => None,
            LookupOutcome::NotFound => Some("Aucun département ne correspond à ce code."),
            LookupOutcome::AwaitingInput => {
                Some("Rien pour l’instant — commence par taper un code.")
            }
        }
    }
}

/// Everything the keypad page renders, derived from the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadDisplay {
    pub input_label: String,
    pub outcome: LookupOutcome,
    pub can_append: bool,
    pub has_input: bool,
}

impl KeypadDisplay {
    pub fn derive(state: &KeypadState, table: &DepartmentTable) -> Self {
        let input_label = if state.is_empty() {
            EMPTY_INPUT_LABEL.to_string()
        } else {
            state.as_str().to_string()
        };
        Self {
            input_label,
            outcome: LookupOutcome::resolve(state, table),
            can_append: state.can_append(),
            has_input: state.has_input(),
        }
    }
}

/// ViewModel for the department keypad
///
/// Owns the only mutable state of the page. Buttons and the keyboard
/// listener go through `dispatch`, views read derived values.
#[derive(Clone, Copy)]
pub struct KeypadViewModel {
    pub state: RwSignal<KeypadState>,
    table: &'static DepartmentTable,
}

impl KeypadViewModel {
    pub fn new(table: &'static DepartmentTable) -> Self {
        Self {
            state: create_state(),
            table,
        }
    }

    pub fn dispatch(&self, action: KeypadAction) {
        let mut changed = false;
        self.state.update(|state| changed = state.apply(action));
        if changed {
            log::debug!("keypad {:?} -> {:?}", action, self.state.get_untracked().as_str());
        } else {
            log::trace!("keypad {:?} ignored", action);
        }
    }

    pub fn append_command(&self, c: KeypadChar) {
        self.dispatch(KeypadAction::Append(c));
    }

    pub fn delete_command(&self) {
        self.dispatch(KeypadAction::DeleteLast);
    }

    pub fn clear_command(&self) {
        self.dispatch(KeypadAction::Clear);
    }

    pub fn display(&self) -> impl Fn() -> KeypadDisplay + Copy + 'static {
        let state = self.state;
        let table = self.table;
        move || state.with(|s| KeypadDisplay::derive(s, table))
    }

    pub fn can_append(&self) -> impl Fn() -> bool + Copy + 'static {
        let state = self.state;
        move || state.with(|s| s.can_append())
    }

    pub fn has_input(&self) -> impl Fn() -> bool + Copy + 'static {
        let state = self.state;
        move || state.with(|s| s.has_input())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display_for(input: &str) -> KeypadDisplay {
        let mut state = KeypadState::default();
        for c in input.chars() {
            state.append(KeypadChar::new(c).unwrap());
        }
        KeypadDisplay::derive(&state, DepartmentTable::builtin())
    }

    #[test]
    fn test_empty_input_shows_prompt() {
        let display = display_for("");
        assert_eq!(display.input_label, "—");
        assert_eq!(display.outcome, LookupOutcome::AwaitingInput);
        assert_eq!(
            display.outcome.info_text(),
            "Tapez un numéro (ex. 68) pour trouver un département."
        );
        assert!(display.can_append);
        assert!(!display.has_input);
    }

    #[test]
    fn test_unknown_code_shows_not_found() {
        let display = display_for("20");
        assert_eq!(display.input_label, "20");
        assert_eq!(display.outcome, LookupOutcome::NotFound);
        assert_eq!(
            display.outcome.info_text(),
            "Ce numéro ne correspond à aucun département connu."
        );
        assert_eq!(
            display.outcome.empty_result_text(),
            Some("Aucun département ne correspond à ce code.")
        );
    }

    #[test]
    fn test_prompt_and_not_found_texts_differ() {
        let awaiting = LookupOutcome::AwaitingInput;
        let not_found = LookupOutcome::NotFound;
        assert_ne!(awaiting.info_text(), not_found.info_text());
        assert_ne!(awaiting.empty_result_text(), not_found.empty_result_text());
    }

    #[test]
    fn test_match_shows_label() {
        let display = display_for("68");
        let record = display.outcome.record().unwrap();
        assert_eq!(record.code, "68");
        assert_eq!(display.outcome.info_text(), "Haut-Rhin (68)");
        assert_eq!(display.outcome.empty_result_text(), None);
    }

    #[test]
    fn test_single_digit_keeps_typed_label() {
        let display = display_for("8");
        assert_eq!(display.input_label, "8");
        assert_eq!(display.outcome.record().unwrap().code, "08");
    }

    #[test]
    fn test_full_buffer_disables_append() {
        let display = display_for("976");
        assert!(!display.can_append);
        assert!(display.has_input);
        assert_eq!(display.outcome.record().unwrap().name, "Mayotte");
    }
}
