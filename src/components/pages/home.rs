//! Landing page: hero and the main gallery.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::{AppContext, SecurityContext};
use crate::components::gallery::{FilterBar, LightboxView, MasonryGrid, SearchBar};
use crate::components::icons as ic;
use crate::config::gallery::{LOAD_MORE_STEP, MAX_ARTWORKS, MOCK_ARTWORK_COUNT};
use crate::config::site;
use crate::core::{Lightbox, generate_mock_artworks};
use crate::models::{AppRoute, GalleryFilters, GalleryViewMode};
use crate::utils::dom;
use crate::utils::format::format_count;

stylance::import_crate_style!(css, "src/components/pages/home.module.css");

const GALLERY_ID: &str = "gallery";

/// Popular sub-categories linked from the hero.
const POPULAR_LINKS: usize = 8;

#[component]
pub fn HomePage(security: SecurityContext) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let (total_images, category_count, sub_category_count) = ctx.catalog.with_value(|c| {
        (
            c.total_image_count(),
            c.all().len(),
            c.total_sub_category_count(),
        )
    });
    let popular: Vec<(String, String)> = ctx.catalog.with_value(|c| {
        c.popular_sub_categories()
            .into_iter()
            .take(POPULAR_LINKS)
            .map(|r| (r.sub_category.name, AppRoute::Category { slug: r.category_slug }.to_hash()))
            .collect()
    });

    let filters = RwSignal::new(GalleryFilters::default());
    let view_mode = RwSignal::new(GalleryViewMode::default());
    let lightbox = RwSignal::new(Lightbox::default());
    let shown = RwSignal::new(MOCK_ARTWORK_COUNT);

    // Generation is deterministic, so a larger count extends the same prefix.
    let artworks = Memo::new(move |_| generate_mock_artworks(shown.get()));
    let filtered = Memo::new(move |_| artworks.with(|all| filters.with(|f| f.apply(all))));
    let total = Signal::derive(move || filtered.with(Vec::len));

    let on_open = Callback::new(move |index: usize| {
        let len = filtered.with_untracked(Vec::len);
        let mut state = lightbox.get_untracked();
        if state.open(len, index) {
            lightbox.set(state);
        }
    });

    let query = Signal::derive(move || filters.with(|f| f.search_query.clone()));
    let on_query = Callback::new(move |q: String| filters.update(|f| f.search_query = q));

    let can_load_more = move || shown.get() < MAX_ARTWORKS;
    let load_more = move |_| shown.update(|n| *n = (*n + LOAD_MORE_STEP).min(MAX_ARTWORKS));

    view! {
        <div class=css::page>
            <section class=css::hero>
                <span class=css::eyebrow>
                    <Icon icon=ic::SPARKLES />
                    {site::TAGLINE}
                </span>
                <h1 class=css::title>
                    "Where Food Meets "
                    <span class=css::accent>"Artistry"</span>
                </h1>
                <p class=css::lead>{site::DESCRIPTION}</p>

                <div class=css::search>
                    <SearchBar value=query on_change=on_query />
                </div>

                <div class=css::stats>
                    <div class=css::stat>
                        <strong>{format!("{}+", format_count(u64::from(total_images)))}</strong>
                        <span>"Artworks"</span>
                    </div>
                    <div class=css::stat>
                        <strong>{category_count}</strong>
                        <span>"Categories"</span>
                    </div>
                    <div class=css::stat>
                        <strong>{format!("{}+", sub_category_count)}</strong>
                        <span>"Sub-categories"</span>
                    </div>
                </div>

                <div class=css::popular>
                    <span class=css::popularLabel>
                        <Icon icon=ic::TRENDING />
                        "Popular right now:"
                    </span>
                    {popular
                        .into_iter()
                        .map(|(name, href)| view! { <a class=css::popularLink href=href>{name}</a> })
                        .collect_view()}
                </div>

                <button class=css::explore on:click=move |_| dom::scroll_into_view(GALLERY_ID)>
                    "Explore Gallery"
                    <Icon icon=ic::ARROW_RIGHT />
                </button>
            </section>

            <section id=GALLERY_ID class=css::gallery>
                <FilterBar filters=filters view_mode=view_mode total=total />
                <MasonryGrid
                    items=filtered
                    security=security
                    on_open=on_open
                    view_mode=view_mode
                />
                <Show when=can_load_more>
                    <div class=css::more>
                        <button class=css::moreButton on:click=load_more>
                            "Load More"
                        </button>
                    </div>
                </Show>
            </section>

            <LightboxView items=filtered state=lightbox security=security />
        </div>
    }
}
