use anyhow::Result;
use chrono::Utc;
use countdowns_core::Catalog;
use countdowns_core::config::SiteConfig;
use countdowns_core::sitemap;

pub fn run(catalog: &Catalog, config: &SiteConfig) -> Result<()> {
    let entries = sitemap::entries(catalog.all(), &config.base_url, Utc::now());
    print!("{}", sitemap::to_xml(&entries));
    Ok(())
}
