//! Application router component.
//!
//! Hash routing over native `hashchange` events instead of leptos_router,
//! so the site works from any static host.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the page is derived from `#/path`
//! - **Chrome never re-renders on navigation**: navbar and footer stay mounted
//! - **Pages are rebuilt per route**: each page owns its filters and lightbox
//! - **hashchange events**: browser back/forward work without extra wiring

use leptos::{ev, prelude::*};
use leptos_use::use_event_listener;

use crate::app::SecurityContext;
use crate::components::layout::{Footer, Navbar};
use crate::components::pages::{
    AboutPage, CategoryPage, CollectionsPage, HomePage, NotFoundPage,
};
use crate::components::security::SecurityProvider;
use crate::models::AppRoute;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/router.module.css");

/// Main application router.
///
/// - `#/` → [`HomePage`]
/// - `#/category/{slug}` → [`CategoryPage`]
/// - `#/collections` → [`CollectionsPage`]
/// - `#/about` → [`AboutPage`]
/// - anything else → [`NotFoundPage`]
#[component]
pub fn AppRouter(security: SecurityContext) -> impl IntoView {
    let route = RwSignal::new(AppRoute::current());

    let _ = use_event_listener(window(), ev::hashchange, move |_| {
        route.set(AppRoute::current());
    });

    let route_memo = Memo::new(move |_| route.get());

    // Title and scroll position follow the route; the first run keeps
    // whatever scroll position the browser restored.
    Effect::new(move |prev: Option<AppRoute>| {
        let current = route_memo.get();
        dom::set_document_title(&current.title());
        if prev.is_some_and(|p| p != current) {
            dom::scroll_to_top();
        }
        current
    });

    let page = move || match route_memo.get() {
        AppRoute::Home => view! { <HomePage security=security /> }.into_any(),
        AppRoute::Category { slug } => {
            view! { <CategoryPage slug=slug security=security /> }.into_any()
        }
        AppRoute::Collections => view! { <CollectionsPage /> }.into_any(),
        AppRoute::About => view! { <AboutPage /> }.into_any(),
        not_found @ AppRoute::NotFound { .. } => {
            view! { <NotFoundPage path=not_found.to_hash() /> }.into_any()
        }
    };

    view! {
        <SecurityProvider security=security>
            <div class=css::shell>
                <Navbar route=route_memo security=security />
                <main class=css::main>{page}</main>
                <Footer />
            </div>
        </SecurityProvider>
    }
}
