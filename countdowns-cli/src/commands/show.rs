use std::future::Future;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use countdowns_core::clock::SystemClock;
use countdowns_core::ticker::start_countdown;
use countdowns_core::{Event, TimeRemaining, compute_remaining};
use owo_colors::OwoColorize;

use crate::render::{CountdownSize, RenderCountdown, render_tags};
use crate::zone::DisplayZone;

pub fn run(event: &Event, zone: &DisplayZone) -> Result<()> {
    print_header(event);
    let remaining = compute_remaining(event.starts_at_utc, Utc::now());
    println!("{}", remaining.render(CountdownSize::Large));
    println!();
    print_details(event, zone);
    Ok(())
}

/// Show the event and redraw its countdown on every tick until Ctrl-C.
pub async fn watch(event: &Event, zone: &DisplayZone, period: Duration) -> Result<()> {
    watch_until(event, zone, period, tokio::signal::ctrl_c()).await
}

/// Redraw until `shutdown` resolves. The future is polled across ticks, so a
/// signal raised between two redraws is not lost.
async fn watch_until<F: Future>(
    event: &Event,
    zone: &DisplayZone,
    period: Duration,
    shutdown: F,
) -> Result<()> {
    print_header(event);
    print_details(event, zone);
    println!();

    let mut handle = start_countdown(event.starts_at_utc, Arc::new(SystemClock), period);
    redraw(&handle.current())?;

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            next = handle.changed() => match next {
                Some(remaining) => redraw(&remaining)?,
                None => break,
            },
        }
    }

    handle.stop();
    println!();
    Ok(())
}

fn redraw(remaining: &TimeRemaining) -> Result<()> {
    let mut stdout = std::io::stdout();
    // Clear the line and draw over it.
    write!(stdout, "\r\x1b[2K{}", remaining.render(CountdownSize::Small))?;
    stdout.flush()?;
    Ok(())
}

fn print_header(event: &Event) {
    println!("{}", format!("[{}]", event.category).magenta());
    println!("{}", event.title.bold());
    if !event.description.is_empty() {
        println!("{}", event.description);
    }
    println!();
}

fn print_details(event: &Event, zone: &DisplayZone) {
    println!("{}", "Event Details".bold());

    let zone_label = zone
        .name()
        .map(|name| format!("Your Local Time ({})", name))
        .unwrap_or_else(|| "Your Local Time".to_string());
    println!("  {}", zone_label.dimmed());
    println!("  {}", zone.long_date_time(event.starts_at_utc));

    println!("  {}", "UTC Time".dimmed());
    println!("  {}", event.utc_string());

    if !event.tags.is_empty() {
        println!("  {}", "Tags".dimmed());
        println!("  {}", render_tags(&event.tags));
    }
}
