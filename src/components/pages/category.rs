//! Category detail page.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::NotFoundPage;
use crate::app::{AppContext, SecurityContext};
use crate::components::gallery::{FilterBar, LightboxView, MasonryGrid};
use crate::components::icons as ic;
use crate::components::security::ProtectedImage;
use crate::config::gallery::CATEGORY_ARTWORK_POOL;
use crate::core::{Lightbox, generate_mock_artworks};
use crate::models::{AppRoute, Category, GalleryFilters, GalleryViewMode, SubCategory};
use crate::utils::dom;
use crate::utils::format::{format_count, pluralize};

stylance::import_crate_style!(css, "src/components/pages/category.module.css");

const ARTWORKS_ID: &str = "category-artworks";

/// Renders the category for `slug`, or the not-found view for an unknown slug.
///
/// Category ids (`cat_beverages`) are accepted in place of the slug.
#[component]
pub fn CategoryPage(slug: String, security: SecurityContext) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let found = ctx
        .catalog
        .with_value(|c| c.by_slug(&slug).or_else(|| c.by_id(&slug)).cloned());
    match found {
        Some(category) => view! { <CategoryView category=category security=security /> }.into_any(),
        None => {
            let path = AppRoute::Category { slug }.to_hash();
            view! { <NotFoundPage path=path /> }.into_any()
        }
    }
}

#[component]
fn CategoryView(category: Category, security: SecurityContext) -> impl IntoView {
    let filters = RwSignal::new(GalleryFilters::default());
    let view_mode = RwSignal::new(GalleryViewMode::default());
    let lightbox = RwSignal::new(Lightbox::default());

    let pool: Vec<_> = generate_mock_artworks(CATEGORY_ARTWORK_POOL)
        .into_iter()
        .filter(|a| a.category_slug == category.slug)
        .collect();
    let pool = StoredValue::new(pool);
    let filtered = Memo::new(move |_| pool.with_value(|all| filters.with(|f| f.apply(all))));
    let total = Signal::derive(move || filtered.with(Vec::len));

    let on_open = Callback::new(move |index: usize| {
        let len = filtered.with_untracked(Vec::len);
        let mut state = lightbox.get_untracked();
        if state.open(len, index) {
            lightbox.set(state);
        }
    });

    let on_sub_category = Callback::new(move |slug: String| {
        filters.update(|f| f.select_sub_category(Some(&slug)));
        dom::scroll_into_view(ARTWORKS_ID);
    });

    let cover = category.hero_image.clone().unwrap_or_else(|| category.cover_image.clone());
    let stats = category.stats;
    let subs = category.sub_categories.clone();
    let name = category.name.clone();
    let icon = ic::category_icon(&category.icon.name);
    let icon_style = format!("background: {};", category.icon.color);
    let artworks_heading = format!("{} Artworks", category.name);
    let name_bn = category.name_bn.clone();
    let description = category.description.clone();

    view! {
        <div class=css::page>
            <header class=css::header>
                <ProtectedImage
                    src=Signal::stored(cover)
                    alt=Signal::stored(name.clone())
                    security=security
                    show_watermark=false
                    eager=true
                    class=css::cover
                />
                <div class=css::shade></div>
                <div class=css::headerContent>
                    <a class=css::back href=AppRoute::Home.to_hash()>
                        <Icon icon=ic::CHEVRON_LEFT />
                        "All categories"
                    </a>
                    <span class=css::icon style=icon_style>
                        <Icon icon=icon />
                    </span>
                    <h1>{name}</h1>
                    <p class=css::nameBn>{name_bn}</p>
                    <p class=css::description>{description}</p>
                </div>
            </header>

            <section class=css::stats>
                <Stat value=format_count(u64::from(stats.total_images)) label="Images" />
                <Stat value=format_count(u64::from(stats.featured_images)) label="Featured" />
                <Stat value=format_count(u64::from(stats.new_images)) label="New this month" />
                <Stat value=subs.len().to_string() label="Sub-categories" />
            </section>

            <section class=css::section>
                <h2>"Browse by sub-category"</h2>
                <div class=css::subGrid>
                    {subs
                        .into_iter()
                        .map(|sub| {
                            view! {
                                <SubCategoryCard
                                    sub=sub
                                    filters=filters
                                    on_select=on_sub_category
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id=ARTWORKS_ID class=css::section>
                <h2>{artworks_heading}</h2>
                <FilterBar
                    filters=filters
                    view_mode=view_mode
                    total=total
                    show_categories=false
                    fixed_category=category
                />
                <MasonryGrid
                    items=filtered
                    security=security
                    on_open=on_open
                    view_mode=view_mode
                    show_category=false
                />
            </section>

            <LightboxView items=filtered state=lightbox security=security />
        </div>
    }
}

#[component]
fn Stat(value: String, label: &'static str) -> impl IntoView {
    view! {
        <div class=css::stat>
            <strong>{value}</strong>
            <span>{label}</span>
        </div>
    }
}

#[component]
fn SubCategoryCard(
    sub: SubCategory,
    filters: RwSignal<GalleryFilters>,
    on_select: Callback<String>,
) -> impl IntoView {
    let slug = sub.slug.clone();
    let check = sub.slug.clone();
    let selected = move || filters.with(|f| f.sub_category_slug.as_deref() == Some(check.as_str()));

    view! {
        <button
            class=move || {
                if selected() {
                    format!("{} {}", css::subCard, css::subCardSelected)
                } else {
                    css::subCard.to_string()
                }
            }
            on:click=move |_| on_select.run(slug.clone())
        >
            {sub.is_popular.then(|| view! {
                <span class=css::popular>
                    <Icon icon=ic::TRENDING />
                    "Popular"
                </span>
            })}
            <span class=css::subName>{sub.name}</span>
            <span class=css::subNameBn>{sub.name_bn}</span>
            <span class=css::subCount>{pluralize(sub.image_count as usize, "image")}</span>
        </button>
    }
}
