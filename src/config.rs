//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Data and text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Data & Text Assets (loaded at compile time)
// =============================================================================

/// Category catalog (TOML).
pub const CATEGORIES_TOML: &str = include_str!("../assets/data/categories.toml");

/// About page body (Markdown).
pub const ABOUT_MARKDOWN: &str = include_str!("../assets/text/about.md");

// =============================================================================
// Site Metadata
// =============================================================================

/// Site-wide metadata.
pub mod site {
    /// Site name shown in the navbar and titles.
    pub const NAME: &str = "Culinary Canvas";

    pub const TAGLINE: &str = "AI-Generated Culinary Artworks";

    pub const DESCRIPTION: &str = "Discover breathtaking AI-generated food photography. \
         A premium collection for creative professionals.";

    /// Title used on the home page.
    pub const DEFAULT_TITLE: &str = "Culinary Canvas - AI Stock Photos Portfolio";

    pub const CONTACT_EMAIL: &str = "hello@culinarycanvas.art";

    /// Page title for a section (`{section} | Culinary Canvas`).
    pub fn title_for(section: &str) -> String {
        format!("{} | {}", section, NAME)
    }
}

// =============================================================================
// Gallery Configuration
// =============================================================================

pub mod gallery {
    /// Number of mock artworks generated for the home page.
    pub const MOCK_ARTWORK_COUNT: usize = 24;

    /// Artworks appended per "Load More" click.
    pub const LOAD_MORE_STEP: usize = 12;

    /// Upper bound on artworks shown on the home page.
    pub const MAX_ARTWORKS: usize = 96;

    /// Number of mock artworks generated before narrowing to one category.
    pub const CATEGORY_ARTWORK_POOL: usize = 60;

    /// Gap between grid tiles in pixels.
    pub const GRID_GAP_PX: u32 = 16;

    /// Image query suffix for grid thumbnails.
    pub const THUMBNAIL_PARAMS: &str = "w=400&h=300&fit=crop&auto=format";

    /// Image query suffix for lightbox previews.
    pub const PREVIEW_PARAMS: &str = "w=800&h=600&fit=crop&auto=format";

    /// Fill color of the inline placeholder shown while images load.
    pub const PLACEHOLDER_COLOR: &str = "#1a1a2e";

    /// Number of leading tiles loaded eagerly.
    pub const EAGER_TILES: usize = 4;
}

/// Masonry column breakpoints (min viewport width in px, column count).
///
/// Below the first breakpoint a single column is used.
pub const MASONRY_BREAKPOINTS: &[(u32, usize)] = &[(640, 2), (768, 3), (1024, 4), (1280, 5)];

// =============================================================================
// Lightbox Configuration
// =============================================================================

/// Magnified zoom factor (the normal factor is 1x).
pub const LIGHTBOX_ZOOM_FACTOR: f64 = 1.5;

// =============================================================================
// Content Protection
// =============================================================================

pub mod protection {
    /// Whether interception is enabled when the page loads.
    pub const ENABLED_BY_DEFAULT: bool = true;

    /// CSS selector marking protected regions.
    pub const PROTECTED_SELECTOR: &str = "[data-protected], .protected-image";

    /// Watermark text overlaid on protected images.
    pub const WATERMARK_TEXT: &str = "© Culinary Canvas";

    /// Watermark opacity.
    pub const WATERMARK_OPACITY: f64 = 0.15;

    /// Number of repeated watermark labels in the tiled overlay.
    pub const WATERMARK_REPEAT: usize = 9;
}

// =============================================================================
// Search Configuration
// =============================================================================

/// Maximum number of suggestions shown under the search bar.
pub const MAX_SEARCH_SUGGESTIONS: usize = 6;

/// Searches offered when the search box is focused and empty.
pub const TRENDING_SEARCHES: &[&str] = &["coffee", "cakes", "salad", "pizza", "sourdough"];

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
