use leptos::callback::Callback;

use super::link::LinkItem;

#[derive(Clone)]
pub struct CompanyLink {
    pub href: Option<String>,
    pub aria_label: String,
    pub on_activate: Option<Callback<()>>,
}

#[derive(Clone, Default)]
pub struct FooterSection {
    pub title: Option<String>,
    pub links: Vec<LinkItem>,
}

/// Icon-only link. `icon` is a key into the social icon table.
#[derive(Clone)]
pub struct SocialLink {
    pub icon: String,
    pub href: Option<String>,
    pub title: String,
    pub aria_label: String,
    pub on_activate: Option<Callback<()>>,
}

#[derive(Clone, Default)]
pub struct FollowUs {
    pub title: String,
    pub social_links: Vec<SocialLink>,
    pub links: Vec<LinkItem>,
}

/// The link columns shown to visitors who are not logged in.
#[derive(Clone, Default)]
pub struct PreLoginLinks {
    pub about_us: FooterSection,
    pub resources: FooterSection,
    pub follow_us: FollowUs,
}
