use leptos::callback::Callback;
use leptos::prelude::*;

use crate::config::RemoteListConfig;
use crate::error::LoadError;
use crate::model::{CompanyLink, LangCode, Languages, LinkItem, PreLoginLinks, Product};
use crate::navigation::{ExitAction, HREF_NO_OP, exit_aware_click};
use crate::remote::{RemoteList, use_remote_list};

use super::lang_switch::LangSwitch;
use super::link::{LinkList, SocialLinks};

const PRODUCTS_TITLE: &str = "Prodotti e Servizi";

#[component]
fn ColumnTitle(title: Option<String>) -> impl IntoView {
    title.map(|t| view! { <span class="text-xs font-bold uppercase tracking-widest">{ t }</span> })
}

#[component]
fn ProductsColumn(
    products: ReadSignal<RemoteList<Product>>,
    on_exit: Option<Callback<ExitAction>>,
) -> impl IntoView {
    let links = move || {
        products.with(|list| list.items().iter().map(LinkItem::from).collect::<Vec<_>>())
    };

    view! {
        <div class="flex flex-col gap-4 items-center sm:items-start">
            <Show when=move || products.with(|list| !list.is_empty())>
                <ColumnTitle title=Some(PRODUCTS_TITLE.to_owned())/>
                { move || view! { <LinkList links=links() on_exit/> } }
            </Show>
        </div>
    }
}

/// Pre-login footer. The products column is fetched from `products_json_url`
/// unless `hide_products_column` is set; `children` is the legal notice.
#[component]
pub fn Footer(
    company_link: CompanyLink,
    links: PreLoginLinks,
    #[prop(into)] products_json_url: String,
    languages: Languages,
    on_language_changed: Callback<LangCode>,
    children: Children,
    #[prop(optional)] current_lang: LangCode,
    #[prop(optional)] on_exit: Option<Callback<ExitAction>>,
    #[prop(optional)] on_products_json_fetch_error: Option<Callback<LoadError>>,
    #[prop(optional)] hide_products_column: bool,
) -> impl IntoView {
    let PreLoginLinks {
        about_us,
        resources,
        follow_us,
    } = links;

    let products = use_remote_list::<Product>(
        RemoteListConfig::new(products_json_url).skip(hide_products_column),
        on_products_json_fetch_error,
    );

    let company_href = company_link
        .href
        .clone()
        .unwrap_or_else(|| HREF_NO_OP.to_owned());
    let on_company_click = exit_aware_click(company_href.clone(), company_link.on_activate, on_exit);

    view! {
        <footer class="border-t border-gray-200 bg-surface">
            <div class="max-w-6xl mx-auto px-6 py-16 grid grid-cols-1 sm:grid-cols-4 gap-12 sm:gap-6">
                <div class="flex flex-col gap-4 items-center sm:items-start">
                    <a
                        href=company_href
                        aria-label=company_link.aria_label
                        class="inline-flex"
                        on:click=on_company_click
                    >
                        <img src="/assets/svg/company.svg" alt="" class="h-8"/>
                    </a>
                    <LinkList links=about_us.links on_exit/>
                </div>

                { (!hide_products_column).then(|| view! {
                    <ProductsColumn products on_exit/>
                }) }

                <div class="flex flex-col gap-4 items-center sm:items-start">
                    <ColumnTitle title=resources.title/>
                    <LinkList links=resources.links on_exit/>
                </div>

                <div class="flex flex-col gap-4 items-center sm:items-start">
                    <ColumnTitle title=Some(follow_us.title)/>
                    <SocialLinks links=follow_us.social_links on_exit/>
                    <LinkList links=follow_us.links on_exit/>
                    <LangSwitch languages current=current_lang on_language_changed/>
                </div>
            </div>

            <div class="border-t border-gray-200 px-4 py-4">
                <p class="text-xs text-center text-text">{ children() }</p>
            </div>
        </footer>
    }
}
