//! Route-level page components.

mod about;
mod category;
mod collections;
mod home;
mod not_found;

pub use about::AboutPage;
pub use category::CategoryPage;
pub use collections::CollectionsPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
