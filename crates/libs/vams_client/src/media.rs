//! Media URL resolution heuristics.
//!
//! The upstream API mixes plain photos with embedded videos and spreads the
//! video metadata over partially-overlapping sources (the `properties`
//! mapping, the record's own fields, the storage path). These functions
//! resolve the best available thumbnail/embed URL in a fixed priority order.

use crate::interfaces::{AlbumImage, ImageProperties, MosaicItem, Properties};
use tracing::warn;

/// Host substrings that mark a path as an embedded video. Substring match,
/// not strict URL parsing; that is what the upstream data requires.
const VIDEO_HOSTS: [&str; 3] = ["youtube.com", "youtu.be", "vimeo.com"];

/// Shown when a video record carries no resolvable thumbnail at all.
pub const VIDEO_THUMBNAIL_PLACEHOLDER: &str =
    "https://via.placeholder.com/800x600/333333/ffffff?text=Video+Thumbnail+Not+Available";

/// Idempotent normalization of a `properties` value; see [`Properties::parsed`].
#[must_use]
pub fn parse_properties(properties: &Properties) -> ImageProperties {
    properties.parsed()
}

fn path_is_video_host(path: &str) -> bool {
    let path = path.to_lowercase();
    VIDEO_HOSTS.iter().any(|host| path.contains(host))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// An album image is a video when its properties say so, or when its path
/// points at a known video host.
#[must_use]
pub fn is_video_item(image: &AlbumImage) -> bool {
    let properties = parse_properties(&image.properties);
    if properties.media_type.as_deref() == Some("video") {
        return true;
    }
    path_is_video_host(&image.path)
}

/// Same classification for a mosaic item's selected image; false when the
/// item has no selected image.
#[must_use]
pub fn is_mosaic_video_item(item: &MosaicItem) -> bool {
    let Some(selected) = &item.properties.selected_image else {
        return false;
    };
    if let Some(properties) = &selected.properties {
        if properties.parsed().media_type.as_deref() == Some("video") {
            return true;
        }
    }
    path_is_video_host(&selected.path)
}

/// Extract a YouTube video id from a watch or short URL.
///
/// Truncates at the next `&` (watch URLs) or `?` (short URLs); `None` when
/// neither pattern is present.
#[must_use]
pub fn extract_video_id(url: &str) -> Option<String> {
    if let Some((_, rest)) = url.split_once("youtube.com/watch?v=") {
        let id = rest.split('&').next().unwrap_or(rest);
        return (!id.is_empty()).then(|| id.to_string());
    }
    if let Some((_, rest)) = url.split_once("youtu.be/") {
        let id = rest.split('?').next().unwrap_or(rest);
        return (!id.is_empty()).then(|| id.to_string());
    }
    None
}

/// The video id for a record: `properties.video_id` first, else extracted
/// from `properties.video_url`, else from the record's path.
fn resolve_video_id(image: &AlbumImage, properties: &ImageProperties) -> Option<String> {
    if let Some(id) = non_empty(properties.video_id.as_deref()) {
        return Some(id.to_string());
    }
    let url = non_empty(properties.video_url.as_deref()).unwrap_or(&image.path);
    extract_video_id(url)
}

/// Resolve a display thumbnail for a video record.
///
/// Strict priority: `properties.thumbnail_url`, the record's own
/// `thumbnail_url`, a generated YouTube thumbnail, a fixed placeholder.
#[must_use]
pub fn get_video_thumbnail(image: &AlbumImage) -> String {
    let properties = parse_properties(&image.properties);

    if let Some(url) = non_empty(properties.thumbnail_url.as_deref()) {
        return url.to_string();
    }
    if let Some(url) = non_empty(image.thumbnail_url.as_deref()) {
        return url.to_string();
    }
    if let Some(video_id) = resolve_video_id(image, &properties) {
        return format!("https://img.youtube.com/vi/{video_id}/maxresdefault.jpg");
    }

    warn!(title = ?image.title, "No thumbnail found for video, using fallback");
    VIDEO_THUMBNAIL_PLACEHOLDER.to_string()
}

/// Embed URL for a YouTube-hosted record; `None` when no video id can be
/// resolved. Never errors.
#[must_use]
pub fn get_youtube_embed_url(image: &AlbumImage) -> Option<String> {
    let properties = parse_properties(&image.properties);
    resolve_video_id(image, &properties).map(|id| format!("https://www.youtube.com/embed/{id}"))
}

/// Best display URL for an album record: videos resolve a thumbnail, photos
/// fall through `thumbnail_url` → `webp_url` → raw path.
#[must_use]
pub fn get_best_image_url(image: &AlbumImage) -> String {
    if is_video_item(image) {
        return get_video_thumbnail(image);
    }
    non_empty(image.thumbnail_url.as_deref())
        .or_else(|| non_empty(image.webp_url.as_deref()))
        .unwrap_or(&image.path)
        .to_string()
}

/// Display URL for a mosaic tile.
///
/// A selected image wins: video-ish selections prefer the thumbnail from
/// their (tolerantly parsed) properties, everything else uses the raw path.
/// Without a selection the referenced album's cover is used, else a
/// deterministic placeholder keyed by the item id.
#[must_use]
pub fn get_mosaic_image_url(item: &MosaicItem) -> String {
    if let Some(selected) = &item.properties.selected_image {
        let properties = selected
            .properties
            .as_ref()
            .map(Properties::parsed)
            .unwrap_or_default();

        let is_video = properties.media_type.as_deref() == Some("video")
            || path_is_video_host(&selected.path);
        if is_video {
            if let Some(url) = non_empty(properties.thumbnail_url.as_deref()) {
                return url.to_string();
            }
        }
        return selected.path.clone();
    }

    if let Some(album) = &item.properties.album {
        if !album.cover_image_path.is_empty() {
            return album.cover_image_path.clone();
        }
    }

    let key = item.id.chars().last().map(String::from).unwrap_or_default();
    format!("https://picsum.photos/800/800?random={key}")
}
