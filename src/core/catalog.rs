//! Static category catalog.
//!
//! The catalog is parsed once at startup from the embedded TOML asset and is
//! read-only afterwards. Categories are kept ordered by `sort_order`.

use std::collections::HashSet;

use serde::Deserialize;
use unicode_normalization::UnicodeNormalization;

use crate::config::CATEGORIES_TOML;
use crate::core::error::CatalogError;
use crate::models::{Category, CategoryNavItem, SubCategory, SubCategoryRef};

#[derive(Deserialize)]
struct CatalogFile {
    categories: Vec<Category>,
}

/// Categories and sub-categories matching a search query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogMatches {
    pub categories: Vec<Category>,
    pub sub_categories: Vec<SubCategoryRef>,
}

impl CatalogMatches {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.sub_categories.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Load the embedded catalog.
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_toml(CATEGORIES_TOML)
    }

    /// Parse a catalog from TOML text.
    ///
    /// Rejects empty catalogs, duplicate category slugs, and duplicate
    /// sub-category slugs within a category.
    pub fn from_toml(source: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(source)?;
        if file.categories.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for cat in &file.categories {
            if !seen.insert(cat.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(cat.slug.clone()));
            }
            let mut subs = HashSet::new();
            for sub in &cat.sub_categories {
                if !subs.insert(sub.slug.as_str()) {
                    return Err(CatalogError::DuplicateSlug(format!("{}/{}", cat.slug, sub.slug)));
                }
            }
        }

        let mut categories = file.categories;
        categories.sort_by_key(|cat| cat.sort_order);
        for cat in &mut categories {
            cat.sub_categories.sort_by_key(|sub| sub.sort_order);
        }
        Ok(Self { categories })
    }

    /// All categories, ordered by `sort_order`.
    pub fn all(&self) -> &[Category] {
        &self.categories
    }

    pub fn featured(&self) -> Vec<&Category> {
        self.categories.iter().filter(|cat| cat.is_featured).collect()
    }

    pub fn by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|cat| cat.slug == slug)
    }

    pub fn by_id(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|cat| cat.id == id)
    }

    pub fn sub_category(&self, category_slug: &str, sub_slug: &str) -> Option<&SubCategory> {
        self.by_slug(category_slug)?.sub_category(sub_slug)
    }

    /// Every sub-category, flattened with its parent category.
    pub fn all_sub_categories(&self) -> Vec<SubCategoryRef> {
        self.sub_categories_where(|_| true)
    }

    pub fn popular_sub_categories(&self) -> Vec<SubCategoryRef> {
        self.all_sub_categories()
            .into_iter()
            .filter(|r| r.sub_category.is_popular)
            .collect()
    }

    pub fn total_image_count(&self) -> u32 {
        self.categories.iter().map(|cat| cat.stats.total_images).sum()
    }

    pub fn total_sub_category_count(&self) -> usize {
        self.categories.iter().map(|cat| cat.sub_categories.len()).sum()
    }

    pub fn nav_items(&self) -> Vec<CategoryNavItem> {
        self.categories.iter().map(CategoryNavItem::from).collect()
    }

    /// Search names and descriptions.
    ///
    /// English fields are matched case-insensitively; Bengali names are
    /// matched as NFC-normalized substrings. A blank query matches nothing.
    pub fn search(&self, query: &str) -> CatalogMatches {
        let query = query.trim();
        if query.is_empty() {
            return CatalogMatches::default();
        }
        let lower = query.to_lowercase();
        let bengali: String = query.nfc().collect();

        let matches = |name: &str, name_bn: &str, description: &str| {
            name.to_lowercase().contains(&lower)
                || name_bn.nfc().collect::<String>().contains(&bengali)
                || description.to_lowercase().contains(&lower)
        };

        CatalogMatches {
            categories: self
                .categories
                .iter()
                .filter(|cat| matches(&cat.name, &cat.name_bn, &cat.description))
                .cloned()
                .collect(),
            sub_categories: self
                .sub_categories_where(|sub| matches(&sub.name, &sub.name_bn, &sub.description)),
        }
    }

    fn sub_categories_where(&self, pred: impl Fn(&SubCategory) -> bool) -> Vec<SubCategoryRef> {
        self.categories
            .iter()
            .flat_map(|cat| {
                cat.sub_categories
                    .iter()
                    .filter(|sub| pred(sub))
                    .map(|sub| SubCategoryRef {
                        category_slug: cat.slug.clone(),
                        category_name: cat.name.clone(),
                        sub_category: sub.clone(),
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::load().expect("embedded catalog must parse")
    }

    #[test]
    fn test_embedded_catalog_loads_in_order() {
        let catalog = catalog();
        assert_eq!(catalog.all().len(), 10);
        let orders: Vec<u32> = catalog.all().iter().map(|c| c.sort_order).collect();
        let mut sorted = orders.clone();
        sorted.sort();
        assert_eq!(orders, sorted);
        assert_eq!(catalog.all()[0].slug, "fresh-produce");
    }

    #[test]
    fn test_lookups() {
        let catalog = catalog();
        let bev = catalog.by_slug("beverages").unwrap();
        assert_eq!(bev.name, "Beverages");
        assert_eq!(catalog.by_id("cat_beverages").unwrap().slug, "beverages");
        assert!(catalog.by_slug("nope").is_none());
        assert_eq!(
            catalog
                .sub_category("beverages", "artisan-coffee")
                .map(|s| s.name.as_str()),
            Some("Artisan Coffee")
        );
        assert!(catalog.sub_category("beverages", "steaks-grills").is_none());
    }

    #[test]
    fn test_counts() {
        let catalog = catalog();
        assert_eq!(catalog.total_sub_category_count(), 100);
        assert_eq!(catalog.all_sub_categories().len(), 100);
        let total: u32 = catalog.all().iter().map(|c| c.stats.total_images).sum();
        assert_eq!(catalog.total_image_count(), total);
        assert!(catalog.total_image_count() > 2000);
    }

    #[test]
    fn test_popular_and_featured() {
        let catalog = catalog();
        let popular = catalog.popular_sub_categories();
        assert!(!popular.is_empty());
        assert!(popular.iter().all(|p| p.sub_category.is_popular));
        assert!(
            popular
                .iter()
                .any(|p| p.category_slug == "fresh-produce" && p.sub_category.slug == "tropical-fruits")
        );
        assert!(catalog.featured().iter().all(|c| c.is_featured));
    }

    #[test]
    fn test_search_english_case_insensitive() {
        let catalog = catalog();
        let found = catalog.search("COFFEE");
        assert!(found.categories.iter().any(|c| c.slug == "beverages"));
        assert!(
            found
                .sub_categories
                .iter()
                .any(|s| s.sub_category.slug == "artisan-coffee")
        );
    }

    #[test]
    fn test_search_bengali() {
        let catalog = catalog();
        let found = catalog.search("পানীয়");
        assert!(found.categories.iter().any(|c| c.slug == "beverages"));
    }

    #[test]
    fn test_search_blank_matches_nothing() {
        assert!(catalog().search("   ").is_empty());
    }

    #[test]
    fn test_nav_items() {
        let items = catalog().nav_items();
        assert_eq!(items.len(), 10);
        assert_eq!(items[1].slug, "beverages");
        assert_eq!(items[1].icon, "coffee");
        assert_eq!(items[1].sub_categories.len(), 10);
    }

    #[test]
    fn test_rejects_empty_and_duplicates() {
        assert!(matches!(
            Catalog::from_toml("categories = []"),
            Err(CatalogError::Empty)
        ));
        assert!(matches!(
            Catalog::from_toml("not = [valid"),
            Err(CatalogError::Parse(_))
        ));

        let one = r#"
[[categories]]
id = "a"
name = "A"
name_bn = "A"
slug = "dup"
description = ""
description_bn = ""
cover_image = ""
sort_order = 1
meta_title = ""
meta_description = ""
icon = { name = "leaf", color = "green" }
stats = { total_images = 1, featured_images = 0, new_images = 0, sub_category_count = 0 }
"#;
        let dup = format!("{one}{}", one.replace("id = \"a\"", "id = \"b\""));
        assert!(matches!(
            Catalog::from_toml(&dup),
            Err(CatalogError::DuplicateSlug(slug)) if slug == "dup"
        ));
        assert_eq!(Catalog::from_toml(one).unwrap().all().len(), 1);
    }

    #[test]
    fn test_rejects_duplicate_sub_category_slugs() {
        let category = r#"
[[categories]]
id = "a"
name = "A"
name_bn = "A"
slug = "cat"
description = ""
description_bn = ""
cover_image = ""
sort_order = 1
meta_title = ""
meta_description = ""
icon = { name = "leaf", color = "green" }
stats = { total_images = 1, featured_images = 0, new_images = 0, sub_category_count = 2 }
"#;
        let sub = |id: &str| {
            format!(
                r#"
[[categories.sub_categories]]
id = "{id}"
name = "S"
name_bn = "S"
slug = "sub"
description = ""
description_bn = ""
image_count = 1
sort_order = 1
"#
            )
        };
        let dup = format!("{category}{}{}", sub("s1"), sub("s2"));
        assert!(matches!(
            Catalog::from_toml(&dup),
            Err(CatalogError::DuplicateSlug(slug)) if slug == "cat/sub"
        ));

        let single = format!("{category}{}", sub("s1"));
        let catalog = Catalog::from_toml(&single).unwrap();
        assert!(catalog.sub_category("cat", "sub").is_some());
    }
}
