/// Sentinel category value meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

/// Number of events shown in the "popular timers" section.
pub const DEFAULT_TOP_COUNT: usize = 10;

/// Default period between countdown refreshes.
pub const DEFAULT_TICK_INTERVAL: &str = "1s";

/// Placeholder public origin used for sitemap and JSON-LD URLs.
pub const DEFAULT_BASE_URL: &str = "https://yoursite.com";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:4096";

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const MINUTES_PER_HOUR: u64 = 60;
pub const HOURS_PER_DAY: u64 = 24;
/// Calendar-naive year length. Leap days are not accounted for.
pub const DAYS_PER_YEAR: u64 = 365;
