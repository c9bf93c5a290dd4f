/// Production list of products shown in the footer.
pub const DEFAULT_PRODUCTS_JSON_URL: &str = "https://selfcare.pagopa.it/assets/products.json";

/// Settings resolved once at the composition root and handed to the components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromeConfig {
    pub products_json_url: String,
}

impl ChromeConfig {
    /// Build-time override through `CHROME_PRODUCTS_JSON_URL`, else production.
    pub fn from_build_env() -> Self {
        Self::with_override(option_env!("CHROME_PRODUCTS_JSON_URL"))
    }

    fn with_override(url: Option<&str>) -> Self {
        let products_json_url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_PRODUCTS_JSON_URL)
            .to_owned();
        Self { products_json_url }
    }
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self::with_override(None)
    }
}

/// What a [`crate::remote::RemoteListLoader`] needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteListConfig {
    pub source_url: String,
    /// Never fetch. Used when the section showing the list is hidden.
    pub skip: bool,
}

impl RemoteListConfig {
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            skip: false,
        }
    }

    pub fn skip(mut self, skip: bool) -> Self {
        self.skip = skip;
        self
    }
}
