//! Primitive decoders and the JSON field accessor used by every entity decoder.
//!
//! Last.fm encodes almost every scalar as a string: counts are `"1235966"`,
//! flags are `"0"`/`"1"` and match scores are `"0.620856"`. The helpers here
//! parse those strings strictly. A native JSON number or boolean in a field
//! that should hold a string is rejected rather than coerced, so a change in
//! the wire format surfaces as an error naming the field.

use crate::date;
use crate::error::DecodeError;
use crate::image::{self, ImageSet};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

/// Implemented by every record that can be built from a JSON object.
pub trait Decode: Sized {
    fn decode(obj: &JsonObject<'_>) -> DecodeResult<Self>;
}

fn is_plain_digits(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a string-encoded unsigned 32-bit integer.
pub fn parse_uint(field: &str, raw: &str) -> DecodeResult<u32> {
    if !is_plain_digits(raw) {
        return Err(DecodeError::malformed(field, raw, "an unsigned integer"));
    }
    raw.parse::<u32>()
        .map_err(|_| DecodeError::malformed(field, raw, "an unsigned 32-bit integer"))
}

/// Parse a string-encoded unsigned 64-bit integer (timestamps, large counts).
pub fn parse_u64(field: &str, raw: &str) -> DecodeResult<u64> {
    if !is_plain_digits(raw) {
        return Err(DecodeError::malformed(field, raw, "an unsigned integer"));
    }
    raw.parse::<u64>()
        .map_err(|_| DecodeError::malformed(field, raw, "an unsigned 64-bit integer"))
}

/// Parse a string-encoded finite float.
pub fn parse_float(field: &str, raw: &str) -> DecodeResult<f64> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(DecodeError::malformed(field, raw, "a finite number")),
    }
}

/// Parse a `"0"`/`"1"` flag. Nothing else is accepted.
pub fn parse_flag(field: &str, raw: &str) -> DecodeResult<bool> {
    match raw {
        "1" => Ok(true),
        "0" => Ok(false),
        _ => Err(DecodeError::malformed(field, raw, "\"0\" or \"1\"")),
    }
}

/// A JSON object together with its dotted path from the document root.
///
/// All accessors report failures against the full path of the field they
/// were asked for.
#[derive(Debug, Clone)]
pub struct JsonObject<'a> {
    map: &'a Map<String, Value>,
    path: String,
}

impl<'a> JsonObject<'a> {
    /// Wrap `value`, which must be a JSON object.
    pub fn new(value: &'a Value, path: impl Into<String>) -> DecodeResult<Self> {
        let path = path.into();
        match value {
            Value::Object(map) => Ok(Self { map, path }),
            _ => Err(DecodeError::unexpected(
                if path.is_empty() { "<root>".to_string() } else { path },
                "an object",
            )),
        }
    }

    /// Wrap the root of a response document.
    pub fn root(value: &'a Value) -> DecodeResult<Self> {
        Self::new(value, "")
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Full dotted path of `key` within this object.
    pub fn field_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a str> {
        self.map.keys().map(String::as_str)
    }

    fn present(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    fn required(&self, key: &str) -> DecodeResult<&'a Value> {
        self.present(key)
            .ok_or_else(|| DecodeError::missing(self.field_path(key)))
    }

    pub fn str(&self, key: &str) -> DecodeResult<&'a str> {
        match self.required(key)? {
            Value::String(s) => Ok(s.as_str()),
            _ => Err(DecodeError::unexpected(self.field_path(key), "a string")),
        }
    }

    pub fn opt_str(&self, key: &str) -> DecodeResult<Option<&'a str>> {
        match self.present(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(DecodeError::unexpected(self.field_path(key), "a string")),
        }
    }

    pub fn string(&self, key: &str) -> DecodeResult<String> {
        self.str(key).map(str::to_owned)
    }

    pub fn opt_string(&self, key: &str) -> DecodeResult<Option<String>> {
        Ok(self.opt_str(key)?.map(str::to_owned))
    }

    /// A string that defaults to empty when the key is missing (mbids).
    pub fn string_or_empty(&self, key: &str) -> DecodeResult<String> {
        Ok(self.opt_str(key)?.unwrap_or_default().to_owned())
    }

    pub fn uint(&self, key: &str) -> DecodeResult<u32> {
        parse_uint(&self.field_path(key), self.str(key)?)
    }

    pub fn opt_uint(&self, key: &str) -> DecodeResult<Option<u32>> {
        self.opt_str(key)?
            .map(|raw| parse_uint(&self.field_path(key), raw))
            .transpose()
    }

    pub fn u64(&self, key: &str) -> DecodeResult<u64> {
        parse_u64(&self.field_path(key), self.str(key)?)
    }

    pub fn opt_u64(&self, key: &str) -> DecodeResult<Option<u64>> {
        self.opt_str(key)?
            .map(|raw| parse_u64(&self.field_path(key), raw))
            .transpose()
    }

    pub fn float(&self, key: &str) -> DecodeResult<f64> {
        parse_float(&self.field_path(key), self.str(key)?)
    }

    pub fn opt_float(&self, key: &str) -> DecodeResult<Option<f64>> {
        self.opt_str(key)?
            .map(|raw| parse_float(&self.field_path(key), raw))
            .transpose()
    }

    pub fn flag(&self, key: &str) -> DecodeResult<bool> {
        parse_flag(&self.field_path(key), self.str(key)?)
    }

    pub fn opt_flag(&self, key: &str) -> DecodeResult<Option<bool>> {
        self.opt_str(key)?
            .map(|raw| parse_flag(&self.field_path(key), raw))
            .transpose()
    }

    pub fn object(&self, key: &str) -> DecodeResult<JsonObject<'a>> {
        JsonObject::new(self.required(key)?, self.field_path(key))
    }

    pub fn opt_object(&self, key: &str) -> DecodeResult<Option<JsonObject<'a>>> {
        self.present(key)
            .map(|value| JsonObject::new(value, self.field_path(key)))
            .transpose()
    }

    /// Decode the object under `key` as `T`.
    pub fn decode<T: Decode>(&self, key: &str) -> DecodeResult<T> {
        T::decode(&self.object(key)?)
    }

    pub fn opt_decode<T: Decode>(&self, key: &str) -> DecodeResult<Option<T>> {
        self.opt_object(key)?.map(|obj| T::decode(&obj)).transpose()
    }

    /// Objects under `key`, accepting Last.fm's list quirks.
    ///
    /// A list with one element is sometimes sent as the bare object, and an
    /// empty list as `""`. Both shapes are normalised into a `Vec`.
    pub fn one_or_many(&self, key: &str) -> DecodeResult<Vec<JsonObject<'a>>> {
        let path = self.field_path(key);
        match self.required(key)? {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| JsonObject::new(item, format!("{path}[{i}]")))
                .collect(),
            value @ Value::Object(_) => Ok(vec![JsonObject::new(value, format!("{path}[0]"))?]),
            Value::String(s) if s.trim().is_empty() => Ok(Vec::new()),
            _ => Err(DecodeError::unexpected(path, "an array or object")),
        }
    }

    /// Decode every object under `key` as `T`, keeping order.
    pub fn decode_many<T: Decode>(&self, key: &str) -> DecodeResult<Vec<T>> {
        self.one_or_many(key)?.iter().map(T::decode).collect()
    }

    /// Like [`decode_many`](Self::decode_many), but an absent key is an empty list.
    pub fn decode_many_or_empty<T: Decode>(&self, key: &str) -> DecodeResult<Vec<T>> {
        if self.present(key).is_none() {
            return Ok(Vec::new());
        }
        self.decode_many(key)
    }

    pub fn images(&self, key: &str) -> DecodeResult<ImageSet> {
        image::decode_images(self, key)
    }

    pub fn date(&self, key: &str) -> DecodeResult<Option<DateTime<Utc>>> {
        date::decode_date(self, key)
    }
}

/// Decode a single entity wrapped under `key` at the document root,
/// e.g. `{"album": {...}}`.
pub fn decode_wrapped<T: Decode>(value: &Value, key: &str) -> DecodeResult<T> {
    let root = JsonObject::root(value)?;
    let inner = root
        .opt_object(key)?
        .ok_or_else(|| DecodeError::MissingContainer(key.to_string()))?;
    T::decode(&inner)
}
