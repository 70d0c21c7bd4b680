//! Page chrome shared by every route.

mod footer;
mod navbar;

pub use footer::Footer;
pub use navbar::Navbar;
