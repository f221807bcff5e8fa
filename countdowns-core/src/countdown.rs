//! Countdown time decomposition.
//!
//! A countdown is either pending (the target lies in the future) or elapsed.
//! Pending durations are broken down with fixed unit sizes, including a
//! 365-day year, so the result drifts from calendar years around leap days.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{DAYS_PER_YEAR, HOURS_PER_DAY, MINUTES_PER_HOUR, SECONDS_PER_MINUTE};

/// The two states a countdown can be in relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountdownPhase {
    Pending,
    Elapsed,
}

/// Normalized time left until a target instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRemaining {
    pub years: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub is_past: bool,
}

/// A countdown unit, used to label display values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Year,
    Day,
    Hour,
    Minute,
    Second,
}

impl Unit {
    pub fn label(self, value: u64) -> &'static str {
        let (singular, plural) = match self {
            Unit::Year => ("Year", "Years"),
            Unit::Day => ("Day", "Days"),
            Unit::Hour => ("Hour", "Hours"),
            Unit::Minute => ("Minute", "Minutes"),
            Unit::Second => ("Second", "Seconds"),
        };
        if value == 1 { singular } else { plural }
    }
}

/// Compute the time left from `now` until `target`.
pub fn compute_remaining(target: DateTime<Utc>, now: DateTime<Utc>) -> TimeRemaining {
    let diff = target - now;

    if diff <= chrono::TimeDelta::zero() {
        return TimeRemaining::elapsed();
    }

    // Positive, so truncation toward zero is a floor.
    let total_seconds = diff.num_seconds() as u64;
    let total_minutes = total_seconds / SECONDS_PER_MINUTE;
    let total_hours = total_minutes / MINUTES_PER_HOUR;
    let total_days = total_hours / HOURS_PER_DAY;

    TimeRemaining {
        years: total_days / DAYS_PER_YEAR,
        days: total_days % DAYS_PER_YEAR,
        hours: total_hours % HOURS_PER_DAY,
        minutes: total_minutes % MINUTES_PER_HOUR,
        seconds: total_seconds % SECONDS_PER_MINUTE,
        is_past: false,
    }
}

impl TimeRemaining {
    pub fn elapsed() -> Self {
        TimeRemaining {
            is_past: true,
            ..Default::default()
        }
    }

    pub fn phase(&self) -> CountdownPhase {
        if self.is_past {
            CountdownPhase::Elapsed
        } else {
            CountdownPhase::Pending
        }
    }

    /// Whole seconds represented by the decomposed fields.
    pub fn total_seconds(&self) -> u64 {
        let seconds_per_day = HOURS_PER_DAY * MINUTES_PER_HOUR * SECONDS_PER_MINUTE;
        self.years * DAYS_PER_YEAR * seconds_per_day
            + self.days * seconds_per_day
            + self.hours * MINUTES_PER_HOUR * SECONDS_PER_MINUTE
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }

    /// Values to display, largest unit first. Years are left out while zero;
    /// every other unit is always shown.
    pub fn units(&self) -> Vec<(u64, Unit)> {
        let mut units = Vec::with_capacity(5);
        if self.years > 0 {
            units.push((self.years, Unit::Year));
        }
        units.extend([
            (self.days, Unit::Day),
            (self.hours, Unit::Hour),
            (self.minutes, Unit::Minute),
            (self.seconds, Unit::Second),
        ]);
        units
    }
}

impl fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_past {
            return write!(f, "This event has passed!");
        }
        let parts: Vec<String> = self
            .units()
            .into_iter()
            .map(|(value, unit)| format!("{} {}", value, unit.label(value)))
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}
