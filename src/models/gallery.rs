//! Gallery filter and view types.

use super::{AspectRatio, ImageStyle};

/// Gallery layout mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GalleryViewMode {
    /// Variable-height tiled layout (default)
    #[default]
    Masonry,
    /// Uniform grid
    Grid,
    /// Single-column list
    List,
}

impl GalleryViewMode {
    pub const ALL: [GalleryViewMode; 3] = [Self::Masonry, Self::Grid, Self::List];

    pub fn label(self) -> &'static str {
        match self {
            Self::Masonry => "Masonry",
            Self::Grid => "Grid",
            Self::List => "List",
        }
    }
}

/// Sort order applied after filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortBy {
    /// Input order, as supplied by the data source
    #[default]
    Curated,
    /// Highest artwork ordinal first
    Newest,
    /// Lowest artwork ordinal first
    Oldest,
    /// Featured first, then new, then the rest
    Popular,
    /// Stable shuffle keyed by a seed
    Random(u64),
}

/// Filter state for the gallery.
///
/// Filters are plain data; [`crate::core::filter`] applies them to an
/// artwork sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryFilters {
    pub category_slug: Option<String>,
    pub sub_category_slug: Option<String>,
    pub style: Option<ImageStyle>,
    pub aspect_ratio: Option<AspectRatio>,
    pub search_query: String,
    pub featured_only: bool,
    pub new_only: bool,
    pub sort_by: SortBy,
}
