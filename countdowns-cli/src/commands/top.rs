use anyhow::Result;
use chrono::Utc;
use countdowns_core::{Catalog, compute_remaining};
use owo_colors::OwoColorize;

use crate::render::{CountdownSize, RenderCountdown, RenderEvent};

pub fn run(catalog: &Catalog, count: usize) -> Result<()> {
    let now = Utc::now();
    let top = catalog.top(count);

    if top.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    for (i, event) in top.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} {}", event.title.bold(), event.render_category());
        if !event.description.is_empty() {
            println!("   {}", event.description.dimmed());
        }
        let remaining = compute_remaining(event.starts_at_utc, now);
        println!("   {}", remaining.render(CountdownSize::Small));
    }

    Ok(())
}
