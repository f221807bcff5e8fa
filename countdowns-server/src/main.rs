mod routes;
mod state;

use anyhow::{Context, Result};
use countdowns_core::Catalog;
use countdowns_core::config::SiteConfig;
use std::net::SocketAddr;

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SiteConfig::load(None)?;
    let catalog = match config.data_path() {
        Some(path) => Catalog::install(Catalog::from_file(&path)?)?,
        None => Catalog::global()?,
    };

    let addr: SocketAddr = config
        .listen
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen))?;

    let app = routes::app(AppState::new(catalog, config));

    log::info!("Serving {} events", catalog.len());
    log::info!("countdowns-server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
