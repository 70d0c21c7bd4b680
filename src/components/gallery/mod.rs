//! Gallery components.
//!
//! - [`MasonryGrid`] - Responsive grid of [`ImageCard`] tiles
//! - [`FilterBar`] - Category, style, sort and layout controls
//! - [`SearchBar`] - Search input with catalog suggestions
//! - [`LightboxView`] - Full-screen viewer over the filtered sequence

mod filter_bar;
mod image_card;
mod lightbox;
mod masonry_grid;
mod search_bar;

pub use filter_bar::FilterBar;
pub use image_card::ImageCard;
pub use lightbox::LightboxView;
pub use masonry_grid::MasonryGrid;
pub use search_bar::SearchBar;
