use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use slotcheck_core::BusinessHours;

use crate::error::{CliError, CliResult};

pub fn parse_tz_or_input_error(name: &str) -> CliResult<Tz> {
    slotcheck_core::tz::parse_tz(name)
        .map_err(|e| CliError::input(format!("Invalid timezone '{}': {}", name, e)))
}

/// Parse a kindless local wall-clock value.
pub fn parse_local_time(s: &str) -> CliResult<NaiveDateTime> {
    let formats = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    for fmt in &formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }

    Err(CliError::input(format!(
        "Invalid local time format '{}'. Expected: YYYY-MM-DDTHH:MM[:SS]",
        s
    )))
}

pub fn parse_time_of_day(s: &str) -> CliResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| {
            CliError::input(format!(
                "Invalid time of day '{}'. Expected: HH:MM",
                s
            ))
        })
}

pub fn parse_rfc3339_to_utc(s: &str) -> CliResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| CliError::input(format!("Failed to parse RFC3339 '{}': {}", s, e)))
}

/// Build the business window from the shared --business-tz/--open/--close
/// flags.
pub fn parse_business_hours(tz: &str, open: &str, close: &str) -> CliResult<BusinessHours> {
    let zone = parse_tz_or_input_error(tz)?;
    let open = parse_time_of_day(open)?;
    let close = parse_time_of_day(close)?;

    if close <= open {
        return Err(CliError::input(format!(
            "Business close '{}' must be after open '{}'",
            close, open
        )));
    }

    Ok(BusinessHours::new(zone, open, close))
}
