use serde::Deserialize;

/// One result item from the search API
///
/// The payload carries much more than this; only the links matter here.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    /// Primary link to the full-size image
    #[serde(default)]
    pub link: Option<String>,

    /// Nested image metadata, used for the thumbnail fallback
    #[serde(default)]
    pub image: Option<ImageInfo>,
}

/// Nested image metadata on a result item
#[derive(Debug, Clone, Deserialize)]
pub struct ImageInfo {
    #[serde(rename = "thumbnailLink", default)]
    pub thumbnail_link: Option<String>,
}

impl SearchItem {
    /// The link worth downloading: primary first, thumbnail as fallback
    pub fn best_link(&self) -> Option<&str> {
        self.link
            .as_deref()
            .or_else(|| self.image.as_ref().and_then(|i| i.thumbnail_link.as_deref()))
    }
}

/// One page of the search API response
#[derive(Debug, Deserialize)]
pub struct SearchPage {
    /// Absent entirely when a page has no results
    #[serde(default)]
    pub items: Option<Vec<SearchItem>>,
}
