//! Utility modules for DOM access, formatting, and markdown rendering.
//!
//! Provides:
//! - [`dom`] - Window/document access, hash routing, event inspection
//! - [`format`] - Counts, slugs and counters for display
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization

pub mod dom;
pub mod format;
mod markdown;

pub use markdown::markdown_to_html;
