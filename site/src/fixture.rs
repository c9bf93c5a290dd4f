use std::path::Path;

use anyhow::{Context, Result};
use chrome_ui::model::Product;
use chrome_ui::remote::decode::decode_array;

/// Decodes a products file the same way the footer does.
pub fn check_products(path: &Path) -> Result<Vec<Product>> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let json: serde_json::Value =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    decode_array::<Product>(&json).with_context(|| format!("decoding {}", path.display()))
}
