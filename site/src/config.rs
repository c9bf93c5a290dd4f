use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub addr: SocketAddr,
    /// Trunk output holding `index.html` and the wasm bundle.
    pub dist_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl SiteConfig {
    /// Reads `CHROME_SITE_*` from the process environment, after `.env` if present.
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(e).context("reading .env");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host: IpAddr = match var("CHROME_SITE_HOST") {
            Some(h) => h.parse().with_context(|| format!("CHROME_SITE_HOST={h:?}"))?,
            None => IpAddr::from([127, 0, 0, 1]),
        };
        let port: u16 = match var("CHROME_SITE_PORT") {
            Some(p) => p.parse().with_context(|| format!("CHROME_SITE_PORT={p:?}"))?,
            None => 3000,
        };

        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")); // = site/
        let dist_dir = var("CHROME_SITE_DIST")
            .map(PathBuf::from)
            .unwrap_or_else(|| root.join("../dist"));
        let assets_dir = var("CHROME_SITE_ASSETS")
            .map(PathBuf::from)
            .unwrap_or_else(|| root.join("assets"));

        Ok(Self {
            addr: SocketAddr::new(host, port),
            dist_dir,
            assets_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let cfg = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.addr, "127.0.0.1:3000".parse().unwrap());
        assert!(cfg.dist_dir.ends_with("dist"));
        assert!(cfg.assets_dir.ends_with("assets"));
    }

    #[test]
    fn overrides() {
        let cfg = SiteConfig::from_lookup(lookup(&[
            ("CHROME_SITE_HOST", "0.0.0.0"),
            ("CHROME_SITE_PORT", "8080"),
            ("CHROME_SITE_DIST", "/srv/dist"),
        ]))
        .unwrap();
        assert_eq!(cfg.addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(cfg.dist_dir, PathBuf::from("/srv/dist"));
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = SiteConfig::from_lookup(lookup(&[("CHROME_SITE_PORT", "http")])).unwrap_err();
        assert!(format!("{err:#}").contains("CHROME_SITE_PORT"));
    }
}
