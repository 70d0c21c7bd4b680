//! Content-protection UI.
//!
//! - [`SecurityProvider`] - Document listeners for context menu, drag and shortcuts
//! - [`ProtectedImage`] - Watermarked image inside a protected region

mod protected_image;
mod provider;

pub use protected_image::ProtectedImage;
pub use provider::SecurityProvider;
