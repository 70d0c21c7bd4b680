//! Search suggestions and keyboard selection.

use crate::config::{MAX_SEARCH_SUGGESTIONS, TRENDING_SEARCHES};
use crate::core::Catalog;
use crate::models::AppRoute;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SuggestionKind {
    Category { slug: String },
    SubCategory { category_slug: String, slug: String },
    Trending,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestion {
    pub label: String,
    /// Secondary text (parent category for sub-categories)
    pub detail: Option<String>,
    pub kind: SuggestionKind,
}

impl Suggestion {
    /// Where picking this suggestion navigates, if anywhere.
    pub fn route(&self) -> Option<AppRoute> {
        match &self.kind {
            SuggestionKind::Category { slug } => Some(AppRoute::Category { slug: slug.clone() }),
            SuggestionKind::SubCategory { category_slug, .. } => Some(AppRoute::Category {
                slug: category_slug.clone(),
            }),
            SuggestionKind::Trending => None,
        }
    }
}

/// Suggestions for the current input.
///
/// A blank query offers the trending searches. Otherwise categories come
/// first, then sub-categories, capped at [`MAX_SEARCH_SUGGESTIONS`].
pub fn suggestions(catalog: &Catalog, query: &str) -> Vec<Suggestion> {
    if query.trim().is_empty() {
        return TRENDING_SEARCHES
            .iter()
            .map(|term| Suggestion {
                label: term.to_string(),
                detail: None,
                kind: SuggestionKind::Trending,
            })
            .collect();
    }

    let found = catalog.search(query);
    let categories = found.categories.into_iter().map(|cat| Suggestion {
        label: cat.name,
        detail: Some(format!("{} images", cat.stats.total_images)),
        kind: SuggestionKind::Category { slug: cat.slug },
    });
    let subs = found.sub_categories.into_iter().map(|r| Suggestion {
        label: r.sub_category.name,
        detail: Some(r.category_name),
        kind: SuggestionKind::SubCategory {
            category_slug: r.category_slug,
            slug: r.sub_category.slug,
        },
    });
    categories.chain(subs).take(MAX_SEARCH_SUGGESTIONS).collect()
}

/// Keys handled by the search box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchKey {
    Down,
    Up,
    Select,
    Dismiss,
}

impl SearchKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Self::Down),
            "ArrowUp" => Some(Self::Up),
            "Enter" => Some(Self::Select),
            "Escape" => Some(Self::Dismiss),
            _ => None,
        }
    }
}

/// Highlighted row in a suggestion list. Navigation wraps at both ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SuggestionCursor {
    selected: Option<usize>,
}

impl SuggestionCursor {
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn down(&mut self, len: usize) {
        self.selected = match (len, self.selected) {
            (0, _) => None,
            (_, Some(i)) if i + 1 < len => Some(i + 1),
            _ => Some(0),
        };
    }

    pub fn up(&mut self, len: usize) {
        self.selected = match (len, self.selected) {
            (0, _) => None,
            (_, Some(i)) if i > 0 && i < len => Some(i - 1),
            _ => Some(len - 1),
        };
    }

    pub fn reset(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::gallery::MAX_ARTWORKS;
    use crate::core::generate_mock_artworks;
    use crate::models::GalleryFilters;

    #[test]
    fn test_blank_query_offers_trending() {
        let catalog = Catalog::load().unwrap();
        let list = suggestions(&catalog, " ");
        assert_eq!(list.len(), TRENDING_SEARCHES.len());
        assert!(list.iter().all(|s| s.kind == SuggestionKind::Trending));
        assert_eq!(list[0].route(), None);
    }

    #[test]
    fn test_trending_terms_match_artworks() {
        let artworks = generate_mock_artworks(MAX_ARTWORKS);
        for term in TRENDING_SEARCHES {
            let filters = GalleryFilters {
                search_query: term.to_string(),
                ..GalleryFilters::default()
            };
            assert!(!filters.apply(&artworks).is_empty(), "{term}");
        }
    }

    #[test]
    fn test_categories_before_sub_categories() {
        let catalog = Catalog::load().unwrap();
        let list = suggestions(&catalog, "coffee");
        assert!(list.len() <= MAX_SEARCH_SUGGESTIONS);
        assert_eq!(list[0].label, "Beverages");
        assert_eq!(
            list[0].route(),
            Some(AppRoute::Category {
                slug: "beverages".into()
            })
        );
        let coffee = list
            .iter()
            .find(|s| s.label == "Artisan Coffee")
            .expect("sub-category suggestion");
        assert_eq!(coffee.detail.as_deref(), Some("Beverages"));
        assert_eq!(
            coffee.route(),
            Some(AppRoute::Category {
                slug: "beverages".into()
            })
        );
    }

    #[test]
    fn test_cursor_wraps() {
        let mut cursor = SuggestionCursor::default();
        cursor.down(3);
        assert_eq!(cursor.selected(), Some(0));
        cursor.down(3);
        cursor.down(3);
        assert_eq!(cursor.selected(), Some(2));
        cursor.down(3);
        assert_eq!(cursor.selected(), Some(0));
        cursor.up(3);
        assert_eq!(cursor.selected(), Some(2));

        cursor.reset();
        cursor.up(3);
        assert_eq!(cursor.selected(), Some(2));
    }

    #[test]
    fn test_cursor_empty_list() {
        let mut cursor = SuggestionCursor::default();
        cursor.down(0);
        assert_eq!(cursor.selected(), None);
        cursor.up(0);
        assert_eq!(cursor.selected(), None);
    }

    #[test]
    fn test_search_keys() {
        assert_eq!(SearchKey::from_key("ArrowDown"), Some(SearchKey::Down));
        assert_eq!(SearchKey::from_key("Escape"), Some(SearchKey::Dismiss));
        assert_eq!(SearchKey::from_key("a"), None);
    }
}
