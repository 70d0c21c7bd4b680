//! Gallery filter and sort pipeline.
//!
//! [`GalleryFilters`] is plain data owned by the page. Applying it never
//! mutates the input; the result keeps input order unless a sort is chosen.

use std::cmp::Reverse;

use sha2::{Digest, Sha256};

use crate::models::{ArtworkPreview, AspectRatio, GalleryFilters, ImageStyle, SortBy};

impl GalleryFilters {
    /// Whether a single artwork passes every active filter.
    pub fn matches(&self, artwork: &ArtworkPreview) -> bool {
        if let Some(cat) = &self.category_slug
            && artwork.category_slug != *cat
        {
            return false;
        }
        if let Some(sub) = &self.sub_category_slug
            && artwork.sub_category_slug != *sub
        {
            return false;
        }
        if self.style.is_some_and(|s| artwork.style != s) {
            return false;
        }
        if self.aspect_ratio.is_some_and(|r| artwork.aspect_ratio != r) {
            return false;
        }
        if self.featured_only && !artwork.is_featured {
            return false;
        }
        if self.new_only && !artwork.is_new {
            return false;
        }
        self.matches_query(artwork)
    }

    /// Filter then sort.
    pub fn apply(&self, artworks: &[ArtworkPreview]) -> Vec<ArtworkPreview> {
        let mut out: Vec<ArtworkPreview> = artworks
            .iter()
            .filter(|a| self.matches(a))
            .cloned()
            .collect();
        sort_artworks(&mut out, self.sort_by);
        out
    }

    /// Number of active chip filters (category, sub-category, style).
    pub fn active_count(&self) -> usize {
        [
            self.category_slug.is_some(),
            self.sub_category_slug.is_some(),
            self.style.is_some(),
        ]
        .into_iter()
        .filter(|&active| active)
        .count()
    }

    pub fn has_active(&self) -> bool {
        self.active_count() > 0 || !self.search_query.trim().is_empty()
    }

    /// Select a category, or deselect it if already selected.
    ///
    /// Any category change clears the sub-category. `None` selects all.
    pub fn select_category(&mut self, slug: Option<&str>) {
        self.category_slug = match slug {
            Some(s) if self.category_slug.as_deref() != Some(s) => Some(s.to_string()),
            _ => None,
        };
        self.sub_category_slug = None;
    }

    /// Select a sub-category, or deselect it if already selected.
    pub fn select_sub_category(&mut self, slug: Option<&str>) {
        self.sub_category_slug = match slug {
            Some(s) if self.sub_category_slug.as_deref() != Some(s) => Some(s.to_string()),
            _ => None,
        };
    }

    /// Select a style, or deselect it if already selected.
    pub fn select_style(&mut self, style: Option<ImageStyle>) {
        self.style = match style {
            Some(s) if self.style != Some(s) => Some(s),
            _ => None,
        };
    }

    /// Select an aspect ratio, or deselect it if already selected.
    pub fn select_aspect_ratio(&mut self, ratio: Option<AspectRatio>) {
        self.aspect_ratio = match ratio {
            Some(r) if self.aspect_ratio != Some(r) => Some(r),
            _ => None,
        };
    }

    /// Reset every filter. The sort order is kept.
    pub fn clear(&mut self) {
        *self = Self {
            sort_by: self.sort_by,
            ..Self::default()
        };
    }

    fn matches_query(&self, artwork: &ArtworkPreview) -> bool {
        let query = self.search_query.trim();
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        [
            artwork.title.as_str(),
            &artwork.category_slug,
            &artwork.sub_category_slug,
            artwork.style.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
    }
}

/// Sort in place. All orders are stable.
pub fn sort_artworks(artworks: &mut [ArtworkPreview], sort_by: SortBy) {
    match sort_by {
        SortBy::Curated => {}
        SortBy::Newest => artworks.sort_by_key(|a| Reverse(a.ordinal().unwrap_or(0))),
        SortBy::Oldest => artworks.sort_by_key(|a| a.ordinal().unwrap_or(u32::MAX)),
        SortBy::Popular => artworks.sort_by_key(popularity_rank),
        SortBy::Random(seed) => artworks.sort_by_cached_key(|a| shuffle_key(seed, &a.id)),
    }
}

fn popularity_rank(artwork: &ArtworkPreview) -> u8 {
    match (artwork.is_featured, artwork.is_new) {
        (true, _) => 0,
        (false, true) => 1,
        (false, false) => 2,
    }
}

// Same seed, same order.
fn shuffle_key(seed: u64, id: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    hasher.update(id.as_bytes());
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generate_mock_artworks;

    fn ids(items: &[ArtworkPreview]) -> Vec<&str> {
        items.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_default_filters_pass_everything_in_order() {
        let items = generate_mock_artworks(12);
        let out = GalleryFilters::default().apply(&items);
        assert_eq!(out, items);
    }

    #[test]
    fn test_category_sub_and_style() {
        let items = generate_mock_artworks(24);
        let mut filters = GalleryFilters::default();

        filters.select_category(Some("beverages"));
        let out = filters.apply(&items);
        assert_eq!(out.len(), 5);
        assert!(out.iter().all(|a| a.category_slug == "beverages"));

        filters.select_sub_category(Some("artisan-coffee"));
        let out = filters.apply(&items);
        assert!(!out.is_empty());
        assert!(out.iter().all(|a| a.sub_category_slug == "artisan-coffee"));

        filters.select_style(Some(ImageStyle::Moody));
        let out = filters.apply(&items);
        assert!(out.iter().all(|a| a.style == ImageStyle::Moody));
        assert_eq!(filters.active_count(), 3);
    }

    #[test]
    fn test_selecting_category_clears_sub() {
        let mut filters = GalleryFilters::default();
        filters.select_category(Some("beverages"));
        filters.select_sub_category(Some("artisan-coffee"));
        filters.select_category(Some("desserts-sweets"));
        assert_eq!(filters.category_slug.as_deref(), Some("desserts-sweets"));
        assert_eq!(filters.sub_category_slug, None);
    }

    #[test]
    fn test_reselect_deselects() {
        let mut filters = GalleryFilters::default();
        filters.select_category(Some("beverages"));
        filters.select_category(Some("beverages"));
        assert_eq!(filters.category_slug, None);

        filters.select_style(Some(ImageStyle::Rustic));
        filters.select_style(Some(ImageStyle::Rustic));
        assert_eq!(filters.style, None);

        filters.select_sub_category(Some("mocktails"));
        filters.select_sub_category(None);
        assert_eq!(filters.sub_category_slug, None);
        assert_eq!(filters.active_count(), 0);

        filters.select_aspect_ratio(Some(AspectRatio::Portrait));
        assert_eq!(filters.aspect_ratio, Some(AspectRatio::Portrait));
        filters.select_aspect_ratio(Some(AspectRatio::Portrait));
        assert_eq!(filters.aspect_ratio, None);
    }

    #[test]
    fn test_clear_keeps_sort() {
        let mut filters = GalleryFilters {
            search_query: "cake".into(),
            featured_only: true,
            sort_by: SortBy::Oldest,
            ..Default::default()
        };
        filters.select_category(Some("beverages"));
        assert!(filters.has_active());
        filters.clear();
        assert!(!filters.has_active());
        assert!(!filters.featured_only);
        assert_eq!(filters.sort_by, SortBy::Oldest);
    }

    #[test]
    fn test_search_is_case_insensitive_over_fields() {
        let items = generate_mock_artworks(24);
        let search = |q: &str| {
            GalleryFilters {
                search_query: q.into(),
                ..Default::default()
            }
            .apply(&items)
        };

        let cakes = search("  CAKE ");
        assert!(cakes.iter().any(|a| a.title == "Chocolate Layer Cake"));
        assert!(cakes.iter().any(|a| a.sub_category_slug == "layered-cakes"));

        let moody = search("moody");
        assert!(!moody.is_empty());
        assert!(moody.iter().all(|a| a.style == ImageStyle::Moody
            || a.title.to_lowercase().contains("moody")));

        assert!(search("zzz-nothing").is_empty());
    }

    #[test]
    fn test_flag_and_ratio_filters() {
        let items = generate_mock_artworks(24);
        let featured = GalleryFilters {
            featured_only: true,
            ..Default::default()
        }
        .apply(&items);
        assert_eq!(ids(&featured), ["artwork_1", "artwork_6", "artwork_11", "artwork_16", "artwork_21"]);

        let wide = GalleryFilters {
            aspect_ratio: Some(AspectRatio::Widescreen),
            new_only: true,
            ..Default::default()
        }
        .apply(&items);
        assert!(wide.iter().all(|a| a.is_new && a.aspect_ratio == AspectRatio::Widescreen));
    }

    #[test]
    fn test_sort_orders() {
        let items = generate_mock_artworks(8);

        let mut newest = items.clone();
        sort_artworks(&mut newest, SortBy::Newest);
        assert_eq!(newest[0].id, "artwork_8");
        assert_eq!(newest[7].id, "artwork_1");

        let mut oldest = newest.clone();
        sort_artworks(&mut oldest, SortBy::Oldest);
        assert_eq!(oldest, items);

        let mut popular = items.clone();
        sort_artworks(&mut popular, SortBy::Popular);
        // artwork_1 is featured and new, artwork_6 featured, artwork_8 new.
        assert_eq!(ids(&popular[..3]), ["artwork_1", "artwork_6", "artwork_8"]);
    }

    #[test]
    fn test_random_sort_is_seeded() {
        let items = generate_mock_artworks(20);
        let shuffled = |seed| {
            let mut v = items.clone();
            sort_artworks(&mut v, SortBy::Random(seed));
            v
        };
        assert_eq!(shuffled(7), shuffled(7));
        assert_ne!(ids(&shuffled(7)), ids(&shuffled(8)));

        let mut sorted = ids(&shuffled(7)).into_iter().map(String::from).collect::<Vec<_>>();
        sorted.sort();
        let mut expected = ids(&items).into_iter().map(String::from).collect::<Vec<_>>();
        expected.sort();
        assert_eq!(sorted, expected);
    }
}
