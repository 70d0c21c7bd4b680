//! Artwork records displayed in the gallery grid and lightbox.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported image aspect ratios.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectRatio {
    /// Square (1:1)
    #[serde(rename = "1:1")]
    Square,
    /// Classic landscape (4:3)
    #[serde(rename = "4:3")]
    Classic,
    /// Classic portrait (3:4)
    #[serde(rename = "3:4")]
    Portrait,
    /// Cinematic (16:9)
    #[serde(rename = "16:9")]
    Widescreen,
    /// Mobile stories (9:16)
    #[serde(rename = "9:16")]
    Stories,
    /// DSLR landscape (3:2)
    #[serde(rename = "3:2")]
    Dslr,
    /// DSLR portrait (2:3)
    #[serde(rename = "2:3")]
    DslrPortrait,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 7] = [
        Self::Square,
        Self::Classic,
        Self::Portrait,
        Self::Widescreen,
        Self::Stories,
        Self::Dslr,
        Self::DslrPortrait,
    ];

    /// Width and height terms of the ratio.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Self::Square => (1, 1),
            Self::Classic => (4, 3),
            Self::Portrait => (3, 4),
            Self::Widescreen => (16, 9),
            Self::Stories => (9, 16),
            Self::Dslr => (3, 2),
            Self::DslrPortrait => (2, 3),
        }
    }

    /// Rendered height of a tile of unit width.
    pub fn relative_height(self) -> f64 {
        let (w, h) = self.dimensions();
        f64::from(h) / f64::from(w)
    }

    /// Value for the CSS `aspect-ratio` property (e.g. `4 / 3`).
    pub fn css_value(self) -> String {
        let (w, h) = self.dimensions();
        format!("{} / {}", w, h)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Classic => "4:3",
            Self::Portrait => "3:4",
            Self::Widescreen => "16:9",
            Self::Stories => "9:16",
            Self::Dslr => "3:2",
            Self::DslrPortrait => "2:3",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Style/mood classification of an artwork.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStyle {
    Bright,
    Moody,
    Minimal,
    Rustic,
    Modern,
    Vintage,
    Dramatic,
    Natural,
    Studio,
    Lifestyle,
}

impl ImageStyle {
    pub const ALL: [ImageStyle; 10] = [
        Self::Bright,
        Self::Moody,
        Self::Minimal,
        Self::Rustic,
        Self::Modern,
        Self::Vintage,
        Self::Dramatic,
        Self::Natural,
        Self::Studio,
        Self::Lifestyle,
    ];

    /// Lowercase identifier, as used in filters and search.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bright => "bright",
            Self::Moody => "moody",
            Self::Minimal => "minimal",
            Self::Rustic => "rustic",
            Self::Modern => "modern",
            Self::Vintage => "vintage",
            Self::Dramatic => "dramatic",
            Self::Natural => "natural",
            Self::Studio => "studio",
            Self::Lifestyle => "lifestyle",
        }
    }

    /// Short chip label for the filter bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bright => "Bright",
            Self::Moody => "Moody",
            Self::Minimal => "Minimal",
            Self::Rustic => "Rustic",
            Self::Modern => "Modern",
            Self::Vintage => "Vintage",
            Self::Dramatic => "Dramatic",
            Self::Natural => "Natural",
            Self::Studio => "Studio",
            Self::Lifestyle => "Lifestyle",
        }
    }

    /// Long descriptive label (info panel, tooltips).
    pub fn description(self) -> &'static str {
        match self {
            Self::Bright => "Bright & Airy",
            Self::Moody => "Moody & Dark",
            Self::Minimal => "Minimal & Clean",
            Self::Rustic => "Rustic & Warm",
            Self::Modern => "Modern & Sleek",
            Self::Vintage => "Vintage & Retro",
            Self::Dramatic => "Dramatic & Bold",
            Self::Natural => "Natural Light",
            Self::Studio => "Studio Lit",
            Self::Lifestyle => "Lifestyle",
        }
    }

    /// Swatch color shown next to the style chip.
    pub fn swatch(self) -> &'static str {
        match self {
            Self::Bright => "#eab308",
            Self::Moody => "#334155",
            Self::Minimal => "#9ca3af",
            Self::Rustic => "#d97706",
            Self::Modern => "#3b82f6",
            Self::Vintage => "#b45309",
            Self::Dramatic => "#dc2626",
            Self::Natural => "#22c55e",
            Self::Studio => "#525252",
            Self::Lifestyle => "#ec4899",
        }
    }
}

impl fmt::Display for ImageStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lightweight artwork record used by the grid and the lightbox.
///
/// Records are immutable; the gallery works with ordered sequences of them
/// that are filtered and sorted upstream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArtworkPreview {
    pub id: String,
    pub slug: String,
    pub thumbnail_src: String,
    pub preview_src: String,
    /// Inline placeholder shown while the thumbnail loads.
    pub blur_data_url: String,
    pub title: String,
    pub category_slug: String,
    pub sub_category_slug: String,
    pub aspect_ratio: AspectRatio,
    pub style: ImageStyle,
    pub is_featured: bool,
    pub is_new: bool,
}

impl ArtworkPreview {
    /// Ordinal parsed from the `artwork_{n}` id, used for date-like sorting.
    pub fn ordinal(&self) -> Option<u32> {
        self.id.rsplit('_').next()?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio_relative_height() {
        assert_eq!(AspectRatio::Square.relative_height(), 1.0);
        assert_eq!(AspectRatio::Classic.relative_height(), 0.75);
        assert!(AspectRatio::Stories.relative_height() > 1.7);
    }

    #[test]
    fn test_aspect_ratio_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            ratio: AspectRatio,
        }
        let w: Wrapper = toml::from_str(r#"ratio = "16:9""#).unwrap();
        assert_eq!(w.ratio, AspectRatio::Widescreen);
        assert_eq!(AspectRatio::Widescreen.to_string(), "16:9");
        assert_eq!(AspectRatio::Portrait.css_value(), "3 / 4");
    }

    #[test]
    fn test_style_labels() {
        assert_eq!(ImageStyle::Moody.as_str(), "moody");
        assert_eq!(ImageStyle::Moody.description(), "Moody & Dark");
        assert_eq!(ImageStyle::ALL.len(), 10);
    }

    #[test]
    fn test_ordinal() {
        let artwork = ArtworkPreview {
            id: "artwork_12".to_string(),
            slug: "artwork-12".to_string(),
            thumbnail_src: String::new(),
            preview_src: String::new(),
            blur_data_url: String::new(),
            title: "Test".to_string(),
            category_slug: "beverages".to_string(),
            sub_category_slug: "artisan-coffee".to_string(),
            aspect_ratio: AspectRatio::Square,
            style: ImageStyle::Bright,
            is_featured: false,
            is_new: false,
        };
        assert_eq!(artwork.ordinal(), Some(12));
    }
}
