use leptos::callback::Callback;
use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{Footer, Header};
use crate::config::ChromeConfig;
use crate::error::LoadError;
use crate::model::{
    Avatar, CompanyLink, CtaButton, CtaVariant, FollowUs, FooterSection, LangCode, Languages,
    LinkItem, MenuNode, PreLoginLinks, SocialLink,
};
use crate::navigation::ExitAction;

fn demo_menu() -> Vec<MenuNode> {
    vec![
        MenuNode::new("Panoramica").href("#").active(true),
        MenuNode::new("Servizi")
            .child(MenuNode::new("Pagamenti").href("#pagamenti"))
            .child(MenuNode::new("Notifiche").href("#notifiche"))
            .child(
                MenuNode::new("Archivio")
                    .child(MenuNode::new("2024").href("#archivio-2024"))
                    .child(MenuNode::new("2025").href("#archivio-2025")),
            ),
        MenuNode::new("Utenti")
            .child(MenuNode::new("Amministratori").href("#admin"))
            .child(MenuNode::new("Operatori").href("#operatori")),
    ]
}

fn demo_links() -> PreLoginLinks {
    PreLoginLinks {
        about_us: FooterSection {
            title: None,
            links: vec![
                LinkItem::new("Chi siamo", "Vai al link: Chi siamo").href("#chi-siamo"),
                LinkItem::new("Media", "Vai al link: Media").href("#media"),
                LinkItem::new("Lavora con noi", "Vai al link: Lavora con noi")
                    .href("https://example.org/careers")
                    .external(),
            ],
        },
        resources: FooterSection {
            title: Some("Risorse".into()),
            links: vec![
                LinkItem::new("Privacy Policy", "Vai al link: Privacy Policy").href("#privacy"),
                LinkItem::new("Accessibilità", "Vai al link: Accessibilità").href("#a11y"),
            ],
        },
        follow_us: FollowUs {
            title: "Seguici su".into(),
            social_links: ["linkedin", "twitter", "instagram"]
                .into_iter()
                .map(|icon| SocialLink {
                    icon: icon.into(),
                    href: Some(format!("https://{icon}.com")),
                    title: icon.into(),
                    aria_label: format!("Link: vai al sito {icon}"),
                    on_activate: None,
                })
                .collect(),
            links: vec![
                LinkItem::new("Accessibilità", "Vai al link: Accessibilità").href("#a11y"),
            ],
        },
    }
}

fn demo_languages() -> Languages {
    Languages::new([
        (LangCode::It, "Italiano"),
        (LangCode::En, "Inglese"),
        (LangCode::De, "Tedesco"),
    ])
    .with_table(
        LangCode::En,
        [
            (LangCode::It, "Italian"),
            (LangCode::En, "English"),
            (LangCode::De, "German"),
        ],
    )
}

/// Composition root: resolves configuration and wires the chrome together.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ChromeConfig::from_build_env();

    let on_exit = Callback::new(|action: ExitAction| {
        log!("leaving the page");
        action.proceed();
    });
    let on_fetch_error = Callback::new(|err: LoadError| warn!("products column hidden: {err}"));
    let on_language_changed = Callback::new(|code: LangCode| log!("language changed to {code}"));
    let on_help_click = Callback::new(|_: ()| log!("help requested"));
    let avatar = Avatar {
        src: "/assets/svg/company.svg".into(),
        alt: "Ente".into(),
    };
    let company_link = CompanyLink {
        href: Some("https://example.org".into()),
        aria_label: "Link: vai al sito della società".into(),
        on_activate: None,
    };

    let cta_buttons = vec![CtaButton {
        label: "Esci".into(),
        variant: CtaVariant::Outlined,
        on_click: Callback::new(|_: ()| log!("logout")),
    }];

    view! {
        <Title text="Area Riservata"/>

        <Header
            product="Area Riservata"
            menu=demo_menu()
            help=true
            on_help_click
            avatar
            beta=true
            cta_buttons
        />

        <main class="min-h-screen p-4"></main>

        <Footer
            company_link
            links=demo_links()
            products_json_url=config.products_json_url
            languages=demo_languages()
            on_language_changed
            on_exit
            on_products_json_fetch_error=on_fetch_error
        >
            "Società per azioni con socio unico - capitale sociale di euro 1,000,000 interamente versato"
        </Footer>
    }
}
