use std::path::Path;

use anyhow::Result;
use countdowns_core::config::SiteConfig;
use owo_colors::OwoColorize;

pub fn run(config: &SiteConfig, config_path: Option<&Path>) -> Result<()> {
    let config_path = match config_path {
        Some(p) => p.to_path_buf(),
        None => SiteConfig::config_path()?,
    };

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    match config.data_path() {
        Some(path) => println!("  Events:  {}", path.display()),
        None => println!("  Events:  {}", "(bundled)".dimmed()),
    }
    println!();
    println!("{}", "Effective configuration".bold());
    print!("{}", config.to_toml()?);

    Ok(())
}
