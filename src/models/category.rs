//! Static catalog types for categories and sub-categories.

use serde::Deserialize;

/// Icon reference for a category: a semantic icon name plus an accent color.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CategoryIcon {
    /// Icon key (e.g. `"coffee"`, `"utensils-crossed"`).
    pub name: String,
    /// Accent color family (e.g. `"amber"`).
    pub color: String,
}

/// Aggregate image counts for a category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CategoryStats {
    pub total_images: u32,
    pub featured_images: u32,
    pub new_images: u32,
    pub sub_category_count: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SubCategory {
    pub id: String,
    pub name: String,
    /// Bengali name
    pub name_bn: String,
    pub slug: String,
    pub description: String,
    /// Bengali description
    pub description_bn: String,
    pub image_count: u32,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub sort_order: u32,
}

/// Top-level gallery category.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Bengali name
    pub name_bn: String,
    pub slug: String,
    pub description: String,
    /// Bengali description
    pub description_bn: String,

    pub icon: CategoryIcon,
    pub cover_image: String,
    #[serde(default)]
    pub hero_image: Option<String>,

    #[serde(default)]
    pub sub_categories: Vec<SubCategory>,
    pub stats: CategoryStats,

    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_new: bool,
    pub sort_order: u32,

    pub meta_title: String,
    pub meta_description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Category {
    pub fn sub_category(&self, slug: &str) -> Option<&SubCategory> {
        self.sub_categories.iter().find(|sub| sub.slug == slug)
    }
}

/// Sub-category flattened together with its parent's identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubCategoryRef {
    pub category_slug: String,
    pub category_name: String,
    pub sub_category: SubCategory,
}

/// Simplified category entry for menus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryNavItem {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub icon: String,
    pub image_count: u32,
    /// `(name, slug)` pairs
    pub sub_categories: Vec<(String, String)>,
}

impl From<&Category> for CategoryNavItem {
    fn from(cat: &Category) -> Self {
        Self {
            id: cat.id.clone(),
            name: cat.name.clone(),
            slug: cat.slug.clone(),
            icon: cat.icon.name.clone(),
            image_count: cat.stats.total_images,
            sub_categories: cat
                .sub_categories
                .iter()
                .map(|sub| (sub.name.clone(), sub.slug.clone()))
                .collect(),
        }
    }
}
