//! Physical keyboard support for the keypad.
//!
//! Digits and the A/B suffixes append, Backspace deletes, Escape clears.
//! Shortcuts held with Control, Meta or Alt are left to the browser.

use super::state::{KeypadAction, KeypadChar};
use super::view_model::KeypadViewModel;
use leptos::prelude::*;

/// The parts of a `keydown` event the router looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
}

impl KeyPress {
    pub fn plain(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ctrl: false,
            meta: false,
            alt: false,
        }
    }

    pub fn from_event(ev: &web_sys::KeyboardEvent) -> Self {
        Self {
            key: ev.key(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            alt: ev.alt_key(),
        }
    }

    fn has_modifier(&self) -> bool {
        self.ctrl || self.meta || self.alt
    }
}

/// Maps a key press to a keypad action. `None` means the event is not ours
/// and must not be consumed.
pub fn route_key(press: &KeyPress) -> Option<KeypadAction> {
    if press.has_modifier() {
        return None;
    }

    match press.key.as_str() {
        "Backspace" => Some(KeypadAction::DeleteLast),
        "Escape" => Some(KeypadAction::Clear),
        key => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeypadChar::new(c.to_ascii_uppercase()).map(KeypadAction::Append),
                _ => None,
            }
        }
    }
}

/// Registers a window-level `keydown` listener that drives the keypad.
/// The listener is removed when the owning component is disposed.
pub fn install_keyboard_listener(vm: KeypadViewModel) {
    let handle = window_event_listener(leptos::ev::keydown, move |ev: web_sys::KeyboardEvent| {
        let press = KeyPress::from_event(&ev);
        if let Some(action) = route_key(&press) {
            ev.prevent_default();
            vm.dispatch(action);
        }
    });
    on_cleanup(move || handle.remove());
}
