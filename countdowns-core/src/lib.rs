//! Core types for the countdowns site.
//!
//! This crate provides everything the presentation layers share:
//! - `Event` and the read-only `Catalog` of events
//! - the countdown engine (`countdown`) and live timers (`ticker`)
//! - the browsing filter (`filter`) and top-event ranking (`ranking`)
//! - SEO metadata and the sitemap
//! - site configuration

pub mod catalog;
pub mod clock;
pub mod config;
pub mod constants;
pub mod countdown;
pub mod error;
pub mod event;
pub mod filter;
pub mod metadata;
pub mod ranking;
pub mod sitemap;
pub mod ticker;

// Re-export the types most callers need at crate root for convenience
pub use catalog::Catalog;
pub use countdown::{CountdownPhase, TimeRemaining, compute_remaining};
pub use error::{CountdownError, CountdownResult};
pub use event::Event;
pub use filter::{CategoryFilter, EventFilter, FilteredEvents};
