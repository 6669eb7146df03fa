//! Calendar-date handling for training records.
//!
//! Every date is reduced to a [`NaiveDate`] before comparison. Time-of-day and
//! UTC offsets are dropped as written, never converted, so a completion stamped
//! `2023-06-30T23:30:00-05:00` still counts as June 30.

use crate::utils::error::{ReportError, Result};
use chrono::{DateTime, Months, NaiveDate, NaiveDateTime};

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses `YYYY-MM-DD`, `M/D/YYYY` or an ISO / RFC 3339 timestamp into a calendar date.
pub fn parse_calendar_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ReportError::InvalidDateError {
            value: value.to_string(),
            reason: "date is empty".to_string(),
        });
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Ok(date);
        }
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.naive_local().date());
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(datetime.date());
        }
    }

    Err(ReportError::InvalidDateError {
        value: value.to_string(),
        reason: "not a valid calendar date".to_string(),
    })
}

/// Adds one calendar month, clamping to the last day of the target month
/// (Jan 31 -> Feb 28/29).
pub fn one_month_after(date: NaiveDate) -> NaiveDate {
    date.checked_add_months(Months::new(1))
        .unwrap_or(NaiveDate::MAX)
}

/// The window `[July 1 of year - 1, June 30 of year]`, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiscalYear {
    year: i32,
    start: NaiveDate,
    end: NaiveDate,
}

impl FiscalYear {
    pub fn new(year: i32) -> Result<Self> {
        let start = year
            .checked_sub(1)
            .and_then(|previous| NaiveDate::from_ymd_opt(previous, 7, 1));
        let end = NaiveDate::from_ymd_opt(year, 6, 30);

        match (start, end) {
            (Some(start), Some(end)) => Ok(Self { year, start, end }),
            _ => Err(ReportError::InvalidConfigValueError {
                field: "fiscal_year".to_string(),
                value: year.to_string(),
                reason: "fiscal year window is outside the supported calendar".to_string(),
            }),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Serde adapter for required dates in the input file.
pub mod calendar_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format("%Y-%m-%d"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_calendar_date(&raw).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for optional dates. Missing, `null` and `""` all mean "no date".
pub mod optional_calendar_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.collect_str(&date.format("%Y-%m-%d")),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if !raw.trim().is_empty() => super::parse_calendar_date(&raw)
                .map(Some)
                .map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }
}
