//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`ArtworkPreview`], [`AspectRatio`], [`ImageStyle`] - Gallery artwork records
//! - [`Category`], [`SubCategory`] - Static catalog entries
//! - [`GalleryFilters`], [`GalleryViewMode`], [`SortBy`] - Gallery view state
//! - [`AppRoute`] - Hash-based navigation

mod artwork;
mod category;
mod gallery;
mod route;

pub use artwork::{ArtworkPreview, AspectRatio, ImageStyle};
pub use category::{Category, CategoryNavItem, SubCategory, SubCategoryRef};
pub use gallery::{GalleryFilters, GalleryViewMode, SortBy};
pub use route::AppRoute;
