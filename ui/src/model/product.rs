use serde_json::Value;

use super::link::LinkItem;
use crate::error::DecodeError;
use crate::remote::decode::{Decode, ObjectReader};

/// One entry of the remote products list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    pub label: String,
    pub href: String,
    pub aria_label: String,
    pub icon: Option<String>,
}

impl Decode for Product {
    fn decode(value: &Value, path: &str) -> Result<Self, DecodeError> {
        let mut r = ObjectReader::new(value, path)?;
        let label = r.string("label");
        let href = r.string("href");
        let aria_label = r.string("ariaLabel");
        let icon = r.optional_string("icon");
        r.finish(Product {
            label,
            href,
            aria_label,
            icon,
        })
    }
}

impl From<&Product> for LinkItem {
    fn from(p: &Product) -> Self {
        LinkItem::new(p.label.clone(), p.aria_label.clone()).href(p.href.clone())
    }
}
