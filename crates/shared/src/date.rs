use time::{Date, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::{Error, Result};

pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Calendar date of "now" in UTC.
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Formats a date as `YYYY-MM-DD`.
pub fn date_stamp(date: Date) -> Result<String> {
    date.format(DATE_FORMAT)
        .map_err(|e| Error::Unknown(e.into()))
}

pub fn parse_date(value: &str) -> Result<Date> {
    Date::parse(value.trim(), DATE_FORMAT)
        .map_err(|e| Error::InvalidFormat(format!("invalid date '{value}': {e}")))
}

/// Millisecond unix timestamp, used to mint dish ids.
pub fn timestamp_millis() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

/// Serde adapter storing a [`Date`] as `YYYY-MM-DD`.
pub mod iso_date {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let value = super::date_stamp(*date).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let value = String::deserialize(deserializer)?;
        Date::parse(&value, super::DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}
