use crate::decode::{DecodeResult, JsonObject};
use crate::error::DecodeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Image URLs for the five size tiers Last.fm publishes.
///
/// No tier is mandatory. Sizes missing from the payload, or sent with an
/// empty URL, are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageSet {
    pub small: Option<String>,
    pub medium: Option<String>,
    pub large: Option<String>,
    pub extra_large: Option<String>,
    pub mega: Option<String>,
}

impl ImageSet {
    pub fn is_empty(&self) -> bool {
        self.largest().is_none()
    }

    /// The biggest available image, if any.
    pub fn largest(&self) -> Option<&str> {
        self.mega
            .as_deref()
            .or(self.extra_large.as_deref())
            .or(self.large.as_deref())
            .or(self.medium.as_deref())
            .or(self.small.as_deref())
    }

    fn slot(&mut self, size: &str) -> Option<&mut Option<String>> {
        match size {
            "small" => Some(&mut self.small),
            "medium" => Some(&mut self.medium),
            "large" => Some(&mut self.large),
            "extralarge" => Some(&mut self.extra_large),
            "mega" => Some(&mut self.mega),
            _ => None,
        }
    }
}

/// Decode the `[{"size": ..., "#text": ...}]` list under `key`.
///
/// An absent key yields an empty set. Unknown size tags are skipped and the
/// last entry wins when a size repeats.
pub(crate) fn decode_images(obj: &JsonObject<'_>, key: &str) -> DecodeResult<ImageSet> {
    let path = obj.field_path(key);
    let entries = match obj.get(key) {
        None | Some(Value::Null) => return Ok(ImageSet::default()),
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(DecodeError::unexpected(path, "an array of images")),
    };

    let mut images = ImageSet::default();
    for (i, entry) in entries.iter().enumerate() {
        let entry = JsonObject::new(entry, format!("{path}[{i}]"))?;
        let size = entry.str("size")?;
        let url = entry.opt_str("#text")?.unwrap_or_default();

        if let Some(slot) = images.slot(size) {
            *slot = (!url.is_empty()).then(|| url.to_string());
        }
    }

    Ok(images)
}
