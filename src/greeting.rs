// spell-checker:words chrono

use std::str::FromStr;

use chrono::{DateTime, Timelike, Utc};

use crate::error::GreetingError;

pub const DEFAULT_TIMEZONE: &str = "Europe/Madrid";
pub const DEFAULT_NAME: &str = "Visitante";

pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Buenos días"
    } else if hour < 18 {
        "Buenas tardes"
    } else {
        "Buenas noches"
    }
}

/// Name to greet: `None` (end of input) or a blank line fall back to the default.
pub fn resolve_name(line: Option<&str>) -> String {
    match line.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => DEFAULT_NAME.to_string(),
    }
}

pub fn greet(name: &str, hour: u32) -> String {
    format!("{}, {name}", greeting_for_hour(hour))
}

/// Time zone named by `TZ`, or the default one when unset.
pub fn timezone_from_env() -> Result<chrono_tz::Tz, GreetingError> {
    let tz = std::env::var("TZ").unwrap_or(DEFAULT_TIMEZONE.to_string());
    chrono_tz::Tz::from_str(&tz).map_err(|_| GreetingError::UnknownTimezone(tz))
}

/// Local hour of `instant` in `tz`.
pub fn hour_at(tz: chrono_tz::Tz, instant: DateTime<Utc>) -> u32 {
    instant.with_timezone(&tz).hour()
}

pub fn current_hour(tz: chrono_tz::Tz) -> u32 {
    hour_at(tz, Utc::now())
}
