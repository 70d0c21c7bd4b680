//! Custom error types for the application.
//!
//! - [`CatalogError`] - Loading and validating the embedded category catalog

use thiserror::Error;

/// Errors raised while loading the static category catalog.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The embedded TOML asset could not be parsed.
    #[error("failed to parse category catalog: {0}")]
    Parse(String),
    /// The catalog parsed but contains no categories.
    #[error("category catalog is empty")]
    Empty,
    /// Two categories, or two sub-categories of one category, share a slug.
    /// Sub-category slugs are reported as `category/sub`.
    #[error("duplicate slug: {0}")]
    DuplicateSlug(String),
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.message().to_string())
    }
}
