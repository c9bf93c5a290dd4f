use leptos::callback::Callback;

/// One entry of the header navigation. Children form the popup list.
#[derive(Clone, Default)]
pub struct MenuNode {
    pub label: String,
    pub children: Vec<MenuNode>,
    /// Visual emphasis only.
    pub active: bool,
    pub href: Option<String>,
    pub on_activate: Option<Callback<()>>,
}

impl MenuNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn child(mut self, child: MenuNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn on_activate(mut self, cb: Callback<()>) -> Self {
        self.on_activate = Some(cb);
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether clicking the trigger is a navigation rather than a popup toggle.
    pub fn is_navigable(&self) -> bool {
        self.href.is_some() || self.on_activate.is_some()
    }

    /// Only heads its children: rendered as a label, not a link.
    pub fn is_group(&self) -> bool {
        self.has_children() && !self.is_navigable()
    }
}
