use std::future::Future;

use gloo_net::http::Request;
use serde_json::Value;

use crate::error::LoadError;

/// Where JSON documents come from.
pub trait JsonSource {
    fn fetch_json(&self, url: &str) -> impl Future<Output = Result<Value, LoadError>>;
}

/// Browser `fetch` through gloo-net.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpSource;

impl JsonSource for HttpSource {
    async fn fetch_json(&self, url: &str) -> Result<Value, LoadError> {
        let resp = Request::get(url)
            .send()
            .await
            .map_err(|e| LoadError::Network {
                url: url.to_owned(),
                reason: e.to_string(),
            })?;

        if !resp.ok() {
            return Err(LoadError::Status {
                url: url.to_owned(),
                status: resp.status(),
            });
        }

        resp.json::<Value>().await.map_err(|e| LoadError::Parse {
            url: url.to_owned(),
            reason: e.to_string(),
        })
    }
}
