use super::keypad::view_model::LookupOutcome;
use leptos::prelude::*;

/// Result section: the matched department with its Wikipedia link, or a
/// message explaining why there is nothing to show.
#[component]
pub fn ResultPanel(
    /// Current lookup outcome (reactive)
    #[prop(into)]
    outcome: Signal<LookupOutcome>,
) -> impl IntoView {
    view! {
        <section class="result-panel">
            <p class="keypad-page__eyebrow">"Résultat"</p>
            {move || {
                let outcome = outcome.get();
                match outcome.record() {
                    Some(record) => view! {
                        <p class="result-panel__title">
                            {format!("{} · {}", record.code, record.name)}
                        </p>
                        <p class="result-panel__hint">
                            "Tu peux visiter l’article Wikipédia correspondant pour approfondir."
                        </p>
                        <a
                            class="result-panel__link"
                            href=record.reference_url
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            "Voir sur Wikipédia"
                        </a>
                    }
                    .into_any(),
                    None => view! {
                        <p class="result-panel__hint">
                            {outcome.empty_result_text().unwrap_or_default()}
                        </p>
                    }
                    .into_any(),
                }
            }}
        </section>
    }
}
