//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`security`] - Content protection listeners and protected images
//! - [`gallery`] - Grid, filters, search and lightbox
//! - [`layout`] - Navbar and footer
//! - [`pages`] - One component per route
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod gallery;
pub mod icons;
pub mod layout;
pub mod pages;
pub mod router;
pub mod security;

pub use router::AppRouter;
