//! Timezone used to display event times.

use anyhow::Result;
use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;

pub enum DisplayZone {
    /// Host zone that could not be resolved to an IANA name. Labels are
    /// numeric offsets.
    Local,
    Named(Tz),
}

impl DisplayZone {
    pub fn parse(name: Option<&str>) -> Result<Self> {
        match name {
            None => Ok(DisplayZone::local()),
            Some(name) => name.parse::<Tz>().map(DisplayZone::Named).map_err(|_| {
                anyhow::anyhow!(
                    "Unknown timezone '{}'. Expected an IANA name like Europe/Berlin",
                    name
                )
            }),
        }
    }

    /// The host zone, named when the system reports an IANA zone.
    pub fn local() -> Self {
        iana_time_zone::get_timezone()
            .ok()
            .and_then(|name| name.parse::<Tz>().ok())
            .map(DisplayZone::Named)
            .unwrap_or(DisplayZone::Local)
    }

    /// IANA name of the zone, if it can be determined.
    pub fn name(&self) -> Option<String> {
        match self {
            DisplayZone::Local => iana_time_zone::get_timezone().ok(),
            DisplayZone::Named(tz) => Some(tz.name().to_string()),
        }
    }

    pub fn format(&self, instant: DateTime<Utc>, fmt: &str) -> String {
        match self {
            DisplayZone::Local => instant.with_timezone(&Local).format(fmt).to_string(),
            DisplayZone::Named(tz) => instant.with_timezone(tz).format(fmt).to_string(),
        }
    }

    /// Date and time with a zone label, e.g. `January 1, 2027, 01:00 CET`.
    /// An unnamed local zone is labelled with its offset, e.g. `+01:00`.
    pub fn date_time(&self, instant: DateTime<Utc>) -> String {
        self.format(instant, "%B %-d, %Y, %H:%M %Z")
    }

    /// Like [`DisplayZone::date_time`] with the weekday in front.
    pub fn long_date_time(&self, instant: DateTime<Utc>) -> String {
        self.format(instant, "%A, %B %-d, %Y, %H:%M %Z")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_named_zone() {
        let zone = DisplayZone::parse(Some("Europe/Berlin")).unwrap();
        assert_eq!(zone.name().as_deref(), Some("Europe/Berlin"));
    }

    #[test]
    fn test_parse_unknown_zone_fails() {
        assert!(DisplayZone::parse(Some("Mars/Olympus_Mons")).is_err());
    }

    #[test]
    fn test_unnamed_local_zone_uses_offset_label() {
        let instant = Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap();
        let formatted = DisplayZone::Local.date_time(instant);
        let label = formatted.rsplit(' ').next().unwrap();
        assert!(label.starts_with('+') || label.starts_with('-'), "{}", formatted);
    }

    #[test]
    fn test_local_zone_resolves_to_iana_name_when_known() {
        let expected = iana_time_zone::get_timezone()
            .ok()
            .filter(|name| name.parse::<Tz>().is_ok());
        let zone = DisplayZone::parse(None).unwrap();
        if let Some(expected) = expected {
            assert_eq!(zone.name().as_deref(), Some(expected.as_str()));
            assert!(matches!(zone, DisplayZone::Named(_)));
        }
    }

    #[test]
    fn test_named_zone_formatting() {
        let zone = DisplayZone::parse(Some("Europe/Berlin")).unwrap();
        let instant = Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(zone.date_time(instant), "January 1, 2027, 01:00 CET");
        assert_eq!(
            zone.long_date_time(instant),
            "Friday, January 1, 2027, 01:00 CET"
        );
    }
}
