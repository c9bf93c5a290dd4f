use leptos::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SocialIcon {
    LinkedIn,
    Twitter,
    Instagram,
}

impl SocialIcon {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "linkedin" => Some(SocialIcon::LinkedIn),
            "twitter" => Some(SocialIcon::Twitter),
            "instagram" => Some(SocialIcon::Instagram),
            _ => None,
        }
    }

    pub fn devicon(&self) -> &'static str {
        match self {
            SocialIcon::LinkedIn => "linkedin-plain",
            SocialIcon::Twitter => "twitter-original",
            SocialIcon::Instagram => "instagram-plain",
        }
    }
}

/// Renders nothing for unknown keys.
#[component]
pub fn Icon(#[prop(into)] name: String) -> impl IntoView {
    SocialIcon::from_key(&name).map(|icon| {
        view! {
            <i class=format!("devicon-{} text-[1.25rem] leading-none", icon.devicon()) aria-hidden="true"></i>
        }
    })
}
