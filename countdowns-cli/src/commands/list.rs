use anyhow::Result;
use countdowns_core::{Catalog, EventFilter};
use owo_colors::OwoColorize;

use crate::render::{RenderEvent, pluralize};
use crate::zone::DisplayZone;

pub fn run(
    catalog: &Catalog,
    category: &str,
    search: &str,
    zone: &DisplayZone,
    json: bool,
) -> Result<()> {
    let filter = EventFilter::new(category, search);
    let result = filter.apply(catalog.all());

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "Showing {} of {} {}",
            result.shown(),
            result.total,
            pluralize("event", result.total)
        )
        .dimmed()
    );

    if result.is_empty() {
        println!();
        println!("No events found matching your criteria.");
        if !filter.is_default() {
            println!("{}", "Clear the filters with: countdowns list".dimmed());
        }
        return Ok(());
    }

    for event in &result.events {
        println!();
        println!("{}", event.render_card(zone));
    }

    Ok(())
}
