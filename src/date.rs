use crate::decode::{parse_u64, DecodeResult, JsonObject};
use crate::error::DecodeError;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;

/// Display format Last.fm uses for dates, always in UTC.
pub const TEXT_DATE_FORMAT: &str = "%d %b %Y, %H:%M";

/// Timestamp sub-fields, in lookup order. `unixtime` is used by user
/// `registered` blocks, `uts` everywhere else.
const TIMESTAMP_KEYS: [&str; 2] = ["uts", "unixtime"];

/// Parse `"06 Oct 2023, 15:58"` as a UTC instant.
pub fn parse_text_date(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw.trim(), TEXT_DATE_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

fn from_timestamp(field: &str, raw: &str) -> Option<DateTime<Utc>> {
    let secs = parse_u64(field, raw).ok()?;
    DateTime::from_timestamp(i64::try_from(secs).ok()?, 0)
}

/// Decode the date object under `key`.
///
/// Returns `Ok(None)` when the key is absent or the object carries neither a
/// timestamp nor a text date (now-playing tracks have no date). When one of
/// them is present but neither parses, the field is reported as invalid.
pub(crate) fn decode_date(obj: &JsonObject<'_>, key: &str) -> DecodeResult<Option<DateTime<Utc>>> {
    let date = match obj.opt_object(key)? {
        Some(date) => date,
        None => return Ok(None),
    };

    let timestamp = TIMESTAMP_KEYS
        .iter()
        .find_map(|k| date.get(k).map(|v| (*k, v)));
    let text = date.get("#text");

    if timestamp.is_none() && text.is_none() {
        return Ok(None);
    }

    if let Some((ts_key, Value::String(raw))) = timestamp {
        if let Some(instant) = from_timestamp(&date.field_path(ts_key), raw) {
            return Ok(Some(instant));
        }
    }

    if let Some(Value::String(raw)) = text {
        if let Some(instant) = parse_text_date(raw) {
            return Ok(Some(instant));
        }
    }

    log::debug!("Unparseable date at {}", obj.field_path(key));
    Err(DecodeError::InvalidDate {
        field: obj.field_path(key),
    })
}

/// Decode a bare text date such as a wiki's `published` field.
pub(crate) fn decode_text_date(
    obj: &JsonObject<'_>,
    key: &str,
) -> DecodeResult<Option<DateTime<Utc>>> {
    match obj.opt_str(key)? {
        None => Ok(None),
        Some(raw) => parse_text_date(raw).map(Some).ok_or_else(|| DecodeError::InvalidDate {
            field: obj.field_path(key),
        }),
    }
}
