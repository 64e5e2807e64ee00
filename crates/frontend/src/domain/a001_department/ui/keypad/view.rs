use super::keyboard::install_keyboard_listener;
use super::state::KeypadChar;
use super::view_model::KeypadViewModel;
use crate::domain::a001_department::ui::result_panel::ResultPanel;
use contracts::domain::a001_department::aggregate::CODE_LETTER_SUFFIXES;
use contracts::domain::a001_department::DepartmentTable;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

/// Letters printed under a T9 digit key
pub fn t9_letters(digit: char) -> &'static str {
    match digit {
        '2' => "ABC",
        '3' => "DEF",
        '4' => "GHI",
        '5' => "JKL",
        '6' => "MNO",
        '7' => "PQRS",
        '8' => "TUV",
        '9' => "WXYZ",
        _ => "",
    }
}

/// Caption of a digit key; keeps the row height when there are no letters
fn key_caption(digit: char) -> &'static str {
    match digit {
        '0' => "+",
        d if t9_letters(d).is_empty() => "\u{00A0}",
        d => t9_letters(d),
    }
}

pub fn key_aria_label(digit: char) -> String {
    match t9_letters(digit) {
        "" => format!("Touche {}", digit),
        letters => format!("Touche {} — {}", digit, letters),
    }
}

/// T9 keypad page: header, typed code, keys and lookup result
#[component]
pub fn DepartmentKeypadPage() -> impl IntoView {
    let vm = KeypadViewModel::new(DepartmentTable::builtin());
    install_keyboard_listener(vm);

    let display = Memo::new(move |_| (vm.display())());
    let can_append = vm.can_append();
    let has_input = vm.has_input();

    let digit_key = move |c: KeypadChar| {
        let digit = c.as_char();
        view! {
            <Button
                appearance=ButtonAppearance::Secondary
                disabled=move || !can_append()
                on_click=move |_| vm.append_command(c)
                attr:class="keypad__key"
                attr:aria-label=key_aria_label(digit)
            >
                <span class="keypad__digit">{digit.to_string()}</span>
                <span class="keypad__letters">{key_caption(digit)}</span>
            </Button>
        }
    };

    view! {
        <main class="keypad-page">
            <div class="keypad-page__card">
                <header class="keypad-page__header">
                    <p class="keypad-page__eyebrow">"Clavier T9"</p>
                    <h1 class="keypad-page__title">"Trouve ton département"</h1>
                    <p class="keypad-page__intro">
                        "Utilise le pavé T9 pour composer un code (01 à 976) et accéder au département correspondant. Pour 2A/2B, ajoute la lettre grâce aux boutons dédiés."
                    </p>
                </header>

                <section class="keypad-page__current">
                    <p class="keypad-page__eyebrow">"Code en cours"</p>
                    <p class="keypad-page__code">{move || display.get().input_label}</p>
                    <p class="keypad-page__info">{move || display.get().outcome.info_text()}</p>
                </section>

                <section class="keypad">
                    <div class="keypad__grid">
                        {('1'..='9').filter_map(KeypadChar::new).map(digit_key).collect_view()}
                    </div>
                    <div class="keypad__grid">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=move || !has_input()
                            on_click=move |_| vm.clear_command()
                            attr:class="keypad__key keypad__key--action"
                        >
                            "Effacer"
                        </Button>
                        {KeypadChar::new('0').map(digit_key)}
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=move || !has_input()
                            on_click=move |_| vm.delete_command()
                            attr:class="keypad__key keypad__key--action"
                        >
                            "Suppr"
                        </Button>
                    </div>

                    <div class="keypad__extensions">
                        <p>"Ajouter une lettre ? (utile pour 2A / 2B)"</p>
                        <div class="keypad__extension-buttons">
                            {CODE_LETTER_SUFFIXES
                                .into_iter()
                                .filter_map(KeypadChar::new)
                                .map(|c| {
                                    view! {
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            size=ButtonSize::Small
                                            disabled=move || !can_append()
                                            on_click=move |_| vm.append_command(c)
                                            attr:class="keypad__extension"
                                        >
                                            {c.as_char().to_string()}
                                        </Button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </section>

                <ResultPanel outcome=Signal::derive(move || display.get().outcome) />
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_t9_letters() {
        assert_eq!(t9_letters('1'), "");
        assert_eq!(t9_letters('2'), "ABC");
        assert_eq!(t9_letters('7'), "PQRS");
        assert_eq!(t9_letters('9'), "WXYZ");
        assert_eq!(t9_letters('0'), "");
    }

    #[test]
    fn test_key_captions() {
        assert_eq!(key_caption('0'), "+");
        assert_eq!(key_caption('1'), "\u{00A0}");
        assert_eq!(key_caption('6'), "MNO");
    }

    #[test]
    fn test_key_aria_labels() {
        assert_eq!(key_aria_label('1'), "Touche 1");
        assert_eq!(key_aria_label('0'), "Touche 0");
        assert_eq!(key_aria_label('8'), "Touche 8 — TUV");
    }
}
