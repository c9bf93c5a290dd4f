mod config;
mod fixture;

use actix_files::{Files, NamedFile};
use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;

use crate::config::SiteConfig;

async fn spa(cfg: web::Data<SiteConfig>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open(cfg.dist_dir.join("index.html"))?)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = SiteConfig::from_env()?;
    log::info!("serving {} and {}", cfg.dist_dir.display(), cfg.assets_dir.display());

    match fixture::check_products(&cfg.assets_dir.join("products.json")) {
        Ok(products) => log::info!("products.json: {} entries", products.len()),
        Err(e) => log::warn!("products.json will be rejected by the footer: {e:#}"),
    }

    let addr = cfg.addr;
    let data = web::Data::new(cfg);

    HttpServer::new(move || {
        let cfg = data.clone();
        App::new()
            .wrap(Logger::default())
            .app_data(cfg.clone())
            // static assets, including products.json
            .service(Files::new("/assets", &cfg.assets_dir))
            // the SPA bundle built by Trunk
            .service(Files::new("/", &cfg.dist_dir).index_file("index.html"))
            // anything else -> SPA
            .default_service(web::get().to(spa))
    })
    .bind(addr)
    .with_context(|| format!("binding {addr}"))?
    .run()
    .await
    .context("server stopped")
}
