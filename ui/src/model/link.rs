use leptos::callback::Callback;

use crate::navigation::HREF_NO_OP;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LinkKind {
    #[default]
    Internal,
    External,
}

/// A navigable label. `on_activate`, when set, replaces navigation to `href`.
#[derive(Clone)]
pub struct LinkItem {
    pub label: String,
    pub href: Option<String>,
    pub aria_label: String,
    pub kind: LinkKind,
    pub on_activate: Option<Callback<()>>,
}

impl LinkItem {
    pub fn new(label: impl Into<String>, aria_label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
            aria_label: aria_label.into(),
            kind: LinkKind::Internal,
            on_activate: None,
        }
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn external(mut self) -> Self {
        self.kind = LinkKind::External;
        self
    }

    pub fn on_activate(mut self, cb: Callback<()>) -> Self {
        self.on_activate = Some(cb);
        self
    }

    /// What goes into the anchor's `href` attribute.
    pub fn href_or_no_op(&self) -> &str {
        self.href.as_deref().unwrap_or(HREF_NO_OP)
    }
}
