use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use utoipa::ToSchema;

/// A titled collection of ordered images/videos. Owned and mutated only by
/// the remote API; read-only on this side.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Album {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cover_image_path: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Auxiliary attributes attached to an image, inconsistently serialized by
/// the upstream API. All fields are optional; unknown keys are preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImageProperties {
    /// `"video"` marks a video record regardless of its path.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webp_url: Option<String>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: serde_json::Map<String, Value>,
}

/// Wire form of the `properties` field: either an already-parsed mapping or
/// a JSON-encoded string. Collapsed to `Parsed` at the accessor boundary so
/// downstream code never re-checks the duality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Properties {
    Parsed(ImageProperties),
    Raw(String),
}

impl Default for Properties {
    fn default() -> Self {
        Self::Parsed(ImageProperties::default())
    }
}

impl Properties {
    /// Idempotent normalization: a parsed mapping is returned as-is, a raw
    /// string is parsed as JSON. Malformed JSON degrades to the empty
    /// mapping, never an error.
    #[must_use]
    pub fn parsed(&self) -> ImageProperties {
        match self {
            Self::Parsed(properties) => properties.clone(),
            Self::Raw(raw) => serde_json::from_str(raw).unwrap_or_else(|err| {
                warn!("Failed to parse properties JSON: {err}");
                ImageProperties::default()
            }),
        }
    }

    /// Rewrite a `Raw` value to its `Parsed` form in place.
    pub fn normalize(&mut self) {
        if matches!(self, Self::Raw(_)) {
            *self = Self::Parsed(self.parsed());
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AlbumImage {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub caption: Option<String>,
    /// Storage path, or a video URL for embedded video records.
    pub path: String,
    pub webp_path: Option<String>,
    pub thumbnail_url: Option<String>,
    pub webp_url: Option<String>,
    /// Intra-album display sequence.
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub properties: Properties,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AlbumData {
    pub album: Album,
    pub images: Vec<AlbumImage>,
}

impl AlbumData {
    /// Collapse every image's `properties` to the parsed form.
    pub fn normalize_properties(&mut self) {
        for image in &mut self.images {
            image.properties.normalize();
        }
    }
}

/// Album summary embedded in mosaic item properties.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AlbumSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub cover_image_path: String,
}

/// Image summary embedded in mosaic item properties. Its own `properties`
/// arrives doubly encoded (a JSON string inside an already-parsed object).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SelectedImage {
    pub id: String,
    pub path: String,
    pub title: Option<String>,
    pub caption: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub properties: Option<Properties>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct MosaicItemProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<AlbumSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_image: Option<SelectedImage>,
    /// Album title, relative URL, or external URL; see `mosaic::link_target`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Main display text for the tile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MosaicItem {
    pub id: String,
    pub column_index: i64,
    #[serde(rename = "type")]
    pub item_type: String,
    pub content: Option<String>,
    pub album_id: Option<String>,
    #[serde(default)]
    pub properties: MosaicItemProperties,
    /// Intra-column display sequence.
    #[serde(default)]
    pub order: i64,
    /// Inactive items are hidden from the layout.
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Mosaic {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub columns: i64,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub display_settings: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MosaicData {
    pub mosaic: Mosaic,
    pub items: Vec<MosaicItem>,
}

impl MosaicData {
    /// Collapse every selected image's doubly-encoded `properties`.
    pub fn normalize_properties(&mut self) {
        for item in &mut self.items {
            if let Some(selected) = &mut item.properties.selected_image {
                if let Some(properties) = &mut selected.properties {
                    properties.normalize();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serde_json::json;

    #[test]
    fn properties_deserialize_from_object_and_string() {
        let parsed: Properties =
            serde_json::from_value(json!({"type": "video", "video_id": "abc123"})).unwrap();
        assert_eq!(parsed.parsed().media_type.as_deref(), Some("video"));

        let raw: Properties =
            serde_json::from_value(json!("{\"type\":\"video\",\"video_id\":\"abc123\"}")).unwrap();
        assert_eq!(raw.parsed().video_id.as_deref(), Some("abc123"));
    }

    #[test]
    fn parsed_is_idempotent() {
        let mut properties = Properties::Raw("{\"type\":\"video\"}".to_string());
        let first = properties.parsed();
        properties.normalize();
        assert_eq!(properties, Properties::Parsed(first.clone()));
        // Normalizing again is a no-op.
        let again = properties.parsed();
        assert_eq!(first, again);
    }

    #[test]
    fn malformed_json_degrades_to_empty() {
        let properties = Properties::Raw("{not json".to_string());
        assert_eq!(properties.parsed(), ImageProperties::default());
    }

    #[test]
    fn unknown_keys_are_preserved() {
        let properties: Properties =
            serde_json::from_value(json!({"year": 2021, "festival": "IDFA"})).unwrap();
        let parsed = properties.parsed();
        assert_eq!(parsed.year, Some(2021));
        assert_eq!(parsed.extra.get("festival"), Some(&json!("IDFA")));
    }
}
