use std::cell::Cell;

use crate::config::RemoteListConfig;
use crate::error::LoadError;

use super::decode::{Decode, decode_array};
use super::source::JsonSource;

/// Fetches and decodes one list, at most once for its whole lifetime.
pub struct RemoteListLoader<S> {
    config: RemoteListConfig,
    source: S,
    activated: Cell<bool>,
}

impl<S: JsonSource> RemoteListLoader<S> {
    pub fn new(config: RemoteListConfig, source: S) -> Self {
        Self {
            config,
            source,
            activated: Cell::new(false),
        }
    }

    pub fn config(&self) -> &RemoteListConfig {
        &self.config
    }

    /// `None` when skipped or already activated; no request is made then.
    pub async fn load<T: Decode>(&self) -> Option<Result<Vec<T>, LoadError>> {
        if self.config.skip || self.activated.replace(true) {
            return None;
        }

        let url = &self.config.source_url;
        let outcome = match self.source.fetch_json(url).await {
            Ok(json) => decode_array::<T>(&json).map_err(|source| LoadError::Decode {
                url: url.clone(),
                source,
            }),
            Err(e) => Err(e),
        };
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;
    use crate::remote::RemoteList;
    use serde_json::{Value, json};
    use std::cell::RefCell;

    #[derive(Default)]
    struct StubSource {
        reply: RefCell<Option<Result<Value, LoadError>>>,
        requested: RefCell<Vec<String>>,
    }

    impl StubSource {
        fn replying(reply: Result<Value, LoadError>) -> Self {
            Self {
                reply: RefCell::new(Some(reply)),
                ..Default::default()
            }
        }
    }

    impl JsonSource for &StubSource {
        async fn fetch_json(&self, url: &str) -> Result<Value, LoadError> {
            self.requested.borrow_mut().push(url.to_owned());
            self.reply
                .borrow_mut()
                .take()
                .unwrap_or_else(|| panic!("unexpected second request to {url}"))
        }
    }

    fn loader(source: &StubSource, skip: bool) -> RemoteListLoader<&StubSource> {
        RemoteListLoader::new(RemoteListConfig::new("/products.json").skip(skip), source)
    }

    #[test]
    fn skip_never_requests() {
        let source = StubSource::replying(Ok(json!([])));
        let out = pollster::block_on(loader(&source, true).load::<Product>());
        assert!(out.is_none());
        assert!(source.requested.borrow().is_empty());
    }

    #[test]
    fn requests_exactly_once() {
        let source = StubSource::replying(Ok(json!([])));
        let loader = loader(&source, false);

        assert!(pollster::block_on(loader.load::<Product>()).is_some());
        assert!(pollster::block_on(loader.load::<Product>()).is_none());
        assert_eq!(*source.requested.borrow(), ["/products.json"]);
    }

    #[test]
    fn valid_payload_decodes() {
        let source = StubSource::replying(Ok(json!([
            {"label": "Prodotto A", "href": "/a", "ariaLabel": "a"}
        ])));
        let out = pollster::block_on(loader(&source, false).load::<Product>())
            .unwrap()
            .unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].label, "Prodotto A");
    }

    #[test]
    fn invalid_payload_is_decode_error() {
        let source = StubSource::replying(Ok(json!([{"label": "Prodotto A"}])));
        let err = pollster::block_on(loader(&source, false).load::<Product>())
            .unwrap()
            .unwrap_err();
        match err {
            LoadError::Decode { url, source } => {
                assert_eq!(url, "/products.json");
                assert!(source.issues.iter().any(|i| i.path == "[0].ariaLabel"));
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn network_error_passes_through() {
        let source = StubSource::replying(Err(LoadError::Network {
            url: "/products.json".into(),
            reason: "offline".into(),
        }));
        let err = pollster::block_on(loader(&source, false).load::<Product>())
            .unwrap()
            .unwrap_err();
        assert!(matches!(err, LoadError::Network { .. }));
    }

    fn load_into_list(source: &StubSource) -> (RemoteList<Product>, Vec<String>) {
        match pollster::block_on(loader(source, false).load::<Product>()) {
            Some(Ok(items)) => (RemoteList::from(items), Vec::new()),
            Some(Err(e)) => (RemoteList::empty(), vec![e.to_string()]),
            None => (RemoteList::empty(), Vec::new()),
        }
    }

    #[test]
    fn scenario_single_valid_product() {
        let source = StubSource::replying(Ok(json!([
            {"label": "Prodotto A", "href": "/a", "ariaLabel": "a"}
        ])));
        let (list, reports) = load_into_list(&source);

        assert!(reports.is_empty());
        assert_eq!(
            list.items(),
            &[Product {
                label: "Prodotto A".into(),
                href: "/a".into(),
                aria_label: "a".into(),
                icon: None,
            }]
        );
    }

    #[test]
    fn scenario_missing_aria_label() {
        let source = StubSource::replying(Ok(json!([{"label": "Prodotto A"}])));
        let (list, reports) = load_into_list(&source);

        assert!(list.is_empty());
        assert_eq!(reports.len(), 1);
        assert!(reports[0].contains("ariaLabel"));
    }

    #[test]
    fn rejected_fetch_reports_once() {
        let source = StubSource::replying(Err(LoadError::Network {
            url: "/products.json".into(),
            reason: "connection refused".into(),
        }));
        let (list, reports) = load_into_list(&source);

        assert!(list.is_empty());
        assert_eq!(reports.len(), 1);
    }

    #[test]
    fn one_bad_entry_rejects_the_whole_list() {
        let source = StubSource::replying(Ok(json!([
            {"label": "Prodotto A", "href": "/a", "ariaLabel": "a"},
            {"label": "Prodotto B", "href": "/b", "ariaLabel": "b"},
            {"label": 3, "href": "/c", "ariaLabel": "c"}
        ])));
        let (list, reports) = load_into_list(&source);

        assert!(list.is_empty());
        assert_eq!(reports.len(), 1);
    }
}
