//! Mosaic accessors and view helpers: column partitioning, tile text, and
//! the link-classification heuristic for clickable tiles.

use crate::client::VamsClient;
use crate::error::VamsError;
use crate::interfaces::{MosaicData, MosaicItem};

impl VamsClient {
    pub async fn fetch_mosaic_by_title(&self, title: &str) -> Result<MosaicData, VamsError> {
        let mut data: MosaicData = self
            .fetch_api(&format!("/public/mosaics/by-title/{title}"))
            .await?;
        data.normalize_properties();
        Ok(data)
    }
}

/// Where a clickable mosaic tile leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// An album page, by title.
    Album(String),
    /// A site-relative path.
    Internal(String),
    /// An external URL, opened in a new context.
    External(String),
}

/// Active items of one column, in display order.
#[must_use]
pub fn items_for_column(items: &[MosaicItem], column_index: i64) -> Vec<&MosaicItem> {
    let mut column: Vec<&MosaicItem> = items
        .iter()
        .filter(|item| item.column_index == column_index && item.is_active)
        .collect();
    column.sort_by_key(|item| item.order);
    column
}

/// Number of visible items per column, for layout balancing.
#[must_use]
pub fn column_counts(items: &[MosaicItem], columns: i64) -> Vec<usize> {
    (0..columns)
        .map(|column| items_for_column(items, column).len())
        .collect()
}

/// Main display text for a tile: `edit_text`, else the embedded album title.
#[must_use]
pub fn item_title(item: &MosaicItem) -> String {
    item.properties
        .edit_text
        .clone()
        .filter(|text| !text.is_empty())
        .or_else(|| item.properties.album.as_ref().map(|album| album.title.clone()))
        .unwrap_or_default()
}

/// Alt text for a tile image, in descending specificity.
#[must_use]
pub fn image_alt(item: &MosaicItem) -> String {
    let selected = item.properties.selected_image.as_ref();
    selected
        .and_then(|image| image.caption.clone())
        .or_else(|| selected.and_then(|image| image.title.clone()))
        .or_else(|| item.properties.edit_text.clone())
        .or_else(|| item.properties.album.as_ref().map(|album| album.title.clone()))
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| "Mosaic item".to_string())
}

#[must_use]
pub fn is_clickable(item: &MosaicItem) -> bool {
    item.properties.link.is_some()
        || (item.item_type == "album" && item.properties.album.is_some())
}

/// Classify a tile's `link` property.
///
/// A single bare word is an album title, a leading `/` a site-relative
/// path, anything else an external URL. Album-typed tiles without a link
/// fall back to their embedded album.
#[must_use]
pub fn link_target(item: &MosaicItem) -> Option<LinkTarget> {
    if let Some(link) = item
        .properties
        .link
        .as_deref()
        .filter(|link| !link.is_empty())
    {
        if link.starts_with('/') {
            return Some(LinkTarget::Internal(link.to_string()));
        }
        if !link.contains(char::is_whitespace) && !link.contains('/') && !link.contains('.') {
            return Some(LinkTarget::Album(link.to_string()));
        }
        return Some(LinkTarget::External(link.to_string()));
    }

    if item.item_type == "album" {
        if let Some(album) = &item.properties.album {
            return Some(LinkTarget::Album(album.title.clone()));
        }
    }
    None
}
