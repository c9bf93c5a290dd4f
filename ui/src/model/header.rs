use leptos::callback::Callback;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Avatar {
    pub src: String,
    pub alt: String,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CtaVariant {
    #[default]
    Contained,
    Outlined,
    Text,
}

#[derive(Clone)]
pub struct CtaButton {
    pub label: String,
    pub variant: CtaVariant,
    pub on_click: Callback<()>,
}
