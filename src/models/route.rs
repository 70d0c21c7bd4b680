//! Hash-based routing.
//!
//! URL format: `#/`, `#/category/{slug}`, `#/collections`, `#/about`.
//! Hash routing keeps the site deployable as static files on any host.

/// Application routes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Hero + gallery: `#/` or empty hash
    Home,
    /// Category detail: `#/category/{slug}`
    Category { slug: String },
    /// `#/collections`
    Collections,
    /// `#/about`
    About,
    /// Anything unrecognized (the raw path is kept for display)
    NotFound { path: String },
}

impl AppRoute {
    /// Parse a URL hash into a route.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');

        let mut segments = path.split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some(""), None, None) => Self::Home,
            (Some("collections"), None, None) => Self::Collections,
            (Some("about"), None, None) => Self::About,
            (Some("category"), Some(slug), None) if !slug.is_empty() => Self::Category {
                slug: slug.to_string(),
            },
            _ => Self::NotFound {
                path: path.to_string(),
            },
        }
    }

    /// Convert the route to a URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::Category { slug } => format!("#/category/{}", slug),
            Self::Collections => "#/collections".to_string(),
            Self::About => "#/about".to_string(),
            Self::NotFound { path } => format!("#/{}", path),
        }
    }

    /// Current route from the browser URL.
    pub fn current() -> Self {
        Self::from_hash(&crate::utils::dom::get_hash())
    }

    /// Navigate to this route (adds a history entry and fires `hashchange`).
    pub fn push(&self) {
        crate::utils::dom::set_hash(&self.to_hash());
    }

    /// Document title for this route.
    pub fn title(&self) -> String {
        use crate::config::site;
        match self {
            Self::Home => site::DEFAULT_TITLE.to_string(),
            Self::Category { slug } => site::title_for(&crate::utils::format::humanize_slug(slug)),
            Self::Collections => site::title_for("Collections"),
            Self::About => site::title_for("About Us"),
            Self::NotFound { .. } => site::title_for("Not Found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/about"), AppRoute::About);
        assert_eq!(AppRoute::from_hash("#/collections/"), AppRoute::Collections);
        assert_eq!(
            AppRoute::from_hash("#/category/beverages"),
            AppRoute::Category {
                slug: "beverages".to_string()
            }
        );
    }

    #[test]
    fn test_route_not_found() {
        assert_eq!(
            AppRoute::from_hash("#/category"),
            AppRoute::NotFound {
                path: "category".to_string()
            }
        );
        assert_eq!(
            AppRoute::from_hash("#/category/beverages/extra"),
            AppRoute::NotFound {
                path: "category/beverages/extra".to_string()
            }
        );
        assert_eq!(
            AppRoute::from_hash("#/pricing"),
            AppRoute::NotFound {
                path: "pricing".to_string()
            }
        );
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(AppRoute::Home.to_hash(), "#/");
        assert_eq!(AppRoute::About.to_hash(), "#/about");
        assert_eq!(
            AppRoute::Category {
                slug: "healthy-diet".to_string()
            }
            .to_hash(),
            "#/category/healthy-diet"
        );
    }

    #[test]
    fn test_route_titles() {
        assert_eq!(AppRoute::About.title(), "About Us | Culinary Canvas");
        assert_eq!(
            AppRoute::Category {
                slug: "main-courses".to_string()
            }
            .title(),
            "Main Courses | Culinary Canvas"
        );
    }
}
