use leptos::callback::Callback;
use leptos::prelude::*;

use crate::model::{LinkItem, LinkKind, SocialLink};
use crate::navigation::{ExitAction, HREF_NO_OP, exit_aware_click};

use super::icons::Icon;

#[component]
pub fn FooterLink(
    link: LinkItem,
    on_exit: Option<Callback<ExitAction>>,
) -> impl IntoView {
    let href = link.href_or_no_op().to_owned();
    let external = link.kind == LinkKind::External;
    let on_click = exit_aware_click(href.clone(), link.on_activate, on_exit);

    view! {
        <a
            href=href
            aria-label=link.aria_label
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
            class="inline-block py-1 text-sm font-semibold text-text hover:text-primary"
            on:click=on_click
        >
            { link.label }
        </a>
    }
}

#[component]
pub fn LinkList(
    links: Vec<LinkItem>,
    on_exit: Option<Callback<ExitAction>>,
) -> impl IntoView {
    view! {
        <ul class="flex flex-col items-center sm:items-start p-0 list-none">
            { links
                .into_iter()
                .map(|link| view! { <li><FooterLink link on_exit/></li> })
                .collect_view() }
        </ul>
    }
}

#[component]
pub fn SocialLinks(
    links: Vec<SocialLink>,
    on_exit: Option<Callback<ExitAction>>,
) -> impl IntoView {
    let item = move |s: SocialLink| {
        let href = s.href.unwrap_or_else(|| HREF_NO_OP.to_owned());
        let on_click = exit_aware_click(href.clone(), s.on_activate, on_exit);
        view! {
            <li>
                <a
                    href=href
                    title=s.title
                    aria-label=s.aria_label
                    class="inline-flex text-text hover:text-primary"
                    on:click=on_click
                >
                    <Icon name=s.icon/>
                </a>
            </li>
        }
    };

    view! {
        <ul class="flex flex-row gap-6 sm:gap-3 lg:gap-6 p-0 mt-1 list-none">
            { links.into_iter().map(item).collect_view() }
        </ul>
    }
}
