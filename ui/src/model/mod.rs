pub mod footer;
pub mod header;
pub mod lang;
pub mod link;
pub mod menu;
pub mod product;

pub use footer::{CompanyLink, FollowUs, FooterSection, PreLoginLinks, SocialLink};
pub use header::{Avatar, CtaButton, CtaVariant, Theme};
pub use lang::{LangCode, Languages};
pub use link::{LinkItem, LinkKind};
pub use menu::MenuNode;
pub use product::Product;
