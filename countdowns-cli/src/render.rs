//! TUI rendering for countdowns types.
//!
//! Extension traits that add colored terminal rendering to countdowns-core
//! types using owo_colors.

use countdowns_core::{Event, TimeRemaining};
use owo_colors::OwoColorize;

use crate::zone::DisplayZone;

/// How much room a countdown gets.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum CountdownSize {
    /// One line, e.g. `3 Days 4 Hours 5 Minutes 6 Seconds`
    Small,
    /// One block per unit
    Large,
}

pub trait RenderCountdown {
    fn render(&self, size: CountdownSize) -> String;
}

impl RenderCountdown for TimeRemaining {
    fn render(&self, size: CountdownSize) -> String {
        if self.is_past {
            return "This event has passed!".red().bold().to_string();
        }

        match size {
            CountdownSize::Small => self
                .units()
                .into_iter()
                .map(|(value, unit)| format!("{} {}", value.bold(), unit.label(value).dimmed()))
                .collect::<Vec<_>>()
                .join("  "),
            CountdownSize::Large => self
                .units()
                .into_iter()
                .map(|(value, unit)| {
                    format!("{:>6}\n{:>6}", value.bold().cyan(), unit.label(value).dimmed())
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Event rendering for list views.
pub trait RenderEvent {
    /// Two-line card: title with category, then description and start time.
    fn render_card(&self, zone: &DisplayZone) -> String;
    fn render_category(&self) -> String;
}

impl RenderEvent for Event {
    fn render_card(&self, zone: &DisplayZone) -> String {
        let mut lines = vec![format!("{} {}", self.title.bold(), self.render_category())];
        if !self.description.is_empty() {
            lines.push(format!("   {}", self.description));
        }
        lines.push(format!(
            "   {} {}",
            zone.date_time(self.starts_at_utc).dimmed(),
            format!("[{}]", self.slug).dimmed()
        ));
        lines.join("\n")
    }

    fn render_category(&self) -> String {
        format!("[{}]", self.category).magenta().to_string()
    }
}

/// Render tags as `#tag #other`.
pub fn render_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!("#{}", tag).magenta().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
