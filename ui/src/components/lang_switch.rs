use leptos::callback::{Callable, Callback};
use leptos::prelude::*;

use crate::model::{LangCode, Languages};

/// A pick only counts when it is a known code different from the current one.
fn changed(current: LangCode, picked: &str) -> Option<LangCode> {
    picked.parse::<LangCode>().ok().filter(|code| *code != current)
}

#[component]
pub fn LangSwitch(
    languages: Languages,
    #[prop(optional)] current: LangCode,
    on_language_changed: Callback<LangCode>,
) -> impl IntoView {
    let current = RwSignal::new(current);

    let on_change = move |ev: leptos::ev::Event| {
        if let Some(code) = changed(current.get_untracked(), &event_target_value(&ev)) {
            current.set(code);
            on_language_changed.run(code);
        }
    };

    let options = move || {
        let selected = current.get();
        languages
            .options(selected)
            .into_iter()
            .map(|(code, label)| {
                view! {
                    <option value=code.as_str() prop:selected={code == selected}>{ label }</option>
                }
            })
            .collect_view()
    };

    view! {
        <select
            class="mt-4 bg-transparent text-sm font-semibold text-text"
            aria-label="Lingua"
            on:change=on_change
        >
            { options }
        </select>
    }
}
