use leptos::callback::{Callable, Callback};
use leptos::prelude::*;

use crate::model::{Avatar, CtaButton, MenuNode, Theme};

use super::ctas::Ctas;
use super::menu_dropdown::MenuDropdown;

#[component]
fn UpperHeader(
    product: String,
    help: bool,
    on_help_click: Option<Callback<()>>,
    avatar: Option<Avatar>,
    beta: bool,
) -> impl IntoView {
    view! {
        <div class="flex flex-row justify-between py-[18px]">
            <div class="flex flex-row gap-4 items-center">
                { avatar.map(|a| view! {
                    <img src=a.src alt=a.alt class="h-10 w-10 rounded-full object-cover"/>
                }) }
                <h5 class="text-2xl font-bold">{ product }</h5>
                { beta.then(|| view! {
                    <span class="h-5 w-[45px] rounded-full bg-primary text-white text-xs text-center">"beta"</span>
                }) }
            </div>
            { help.then(|| view! {
                <div class="flex flex-row items-center gap-4">
                    <span class="text-sm font-semibold text-primary">"Serve aiuto?"</span>
                    <button
                        class="h-11 w-11 rounded-full bg-primary text-white"
                        aria-label="Serve aiuto?"
                        on:click=move |_| {
                            if let Some(cb) = on_help_click.as_ref() {
                                cb.run(());
                            }
                        }
                    >
                        "?"
                    </button>
                </div>
            }) }
        </div>
    }
}

/// Product header: name row on top, navigation menu and CTAs below.
///
/// Every menu entry owns its own dropdown state.
#[component]
pub fn Header(
    #[prop(into)] product: String,
    menu: Vec<MenuNode>,
    #[prop(optional)] help: bool,
    #[prop(optional)] on_help_click: Option<Callback<()>>,
    #[prop(optional)] avatar: Option<Avatar>,
    #[prop(optional)] beta: bool,
    #[prop(optional)] theme: Theme,
    #[prop(optional)] cta_buttons: Vec<CtaButton>,
) -> impl IntoView {
    let bg = match theme {
        Theme::Dark => "bg-primary-dark",
        Theme::Light => "bg-surface",
    };

    view! {
        <header class=format!("{bg} px-6 flex flex-col gap-4")>
            <UpperHeader product help on_help_click avatar beta/>
            <hr class="border-gray-200"/>
            <div class="flex flex-row justify-between items-center w-full">
                <nav class="flex flex-row gap-8">
                    { menu.into_iter().map(|node| view! { <MenuDropdown node/> }).collect_view() }
                </nav>
                { (!cta_buttons.is_empty()).then(|| view! {
                    <Ctas buttons=cta_buttons theme=Theme::Light/>
                }) }
            </div>
        </header>
    }
}
