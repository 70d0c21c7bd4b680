//! Core gallery logic, independent of the DOM.
//!
//! This module provides:
//! - [`ProtectionController`] for context-menu, drag and shortcut interception
//! - [`Lightbox`] navigation over an artwork sequence
//! - [`Catalog`] loading, lookups and search
//! - Filtering, sorting and masonry layout of artwork sequences

mod catalog;
pub mod error;
mod filter;
pub mod lightbox;
pub mod masonry;
mod mock;
pub mod protection;
pub mod search;

pub use catalog::Catalog;
pub use lightbox::{Lightbox, Zoom};
pub use mock::generate_mock_artworks;
pub use protection::{KeyChord, ProtectionController, TargetInfo, Verdict, ViolationKind};
