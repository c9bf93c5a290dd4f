use leptos::callback::Callable;
use leptos::prelude::*;

use crate::model::{CtaButton, CtaVariant, Theme};

fn button_class(variant: CtaVariant, theme: Theme) -> &'static str {
    match (variant, theme) {
        (CtaVariant::Contained, Theme::Light) => "px-4 py-2 rounded bg-primary text-white",
        (CtaVariant::Contained, Theme::Dark) => "px-4 py-2 rounded bg-white text-primary",
        (CtaVariant::Outlined, Theme::Light) => "px-4 py-2 rounded border border-primary text-primary",
        (CtaVariant::Outlined, Theme::Dark) => "px-4 py-2 rounded border border-white text-white",
        (CtaVariant::Text, Theme::Light) => "px-4 py-2 text-primary",
        (CtaVariant::Text, Theme::Dark) => "px-4 py-2 text-white",
    }
}

#[component]
pub fn Ctas(buttons: Vec<CtaButton>, #[prop(optional)] theme: Theme) -> impl IntoView {
    view! {
        <div class="flex flex-row gap-4">
            { buttons
                .into_iter()
                .map(|b| {
                    let on_click = b.on_click;
                    view! {
                        <button
                            class=button_class(b.variant, theme)
                            on:click=move |_| on_click.run(())
                        >
                            { b.label }
                        </button>
                    }
                })
                .collect_view() }
        </div>
    }
}
