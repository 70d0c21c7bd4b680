//! Category, style, sort and layout controls above the grid.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{AspectRatio, Category, GalleryFilters, GalleryViewMode, ImageStyle, SortBy};
use crate::utils::format::pluralize;

stylance::import_crate_style!(css, "src/components/gallery/filter_bar.module.css");

fn chip_class(selected: bool) -> String {
    if selected {
        format!("{} {}", css::chip, css::chipSelected)
    } else {
        css::chip.to_string()
    }
}

const SORT_OPTIONS: [(&str, &str); 5] = [
    ("curated", "Curated"),
    ("newest", "Newest"),
    ("oldest", "Oldest"),
    ("popular", "Popular"),
    ("random", "Random"),
];

fn sort_key(sort: SortBy) -> &'static str {
    match sort {
        SortBy::Curated => "curated",
        SortBy::Newest => "newest",
        SortBy::Oldest => "oldest",
        SortBy::Popular => "popular",
        SortBy::Random(_) => "random",
    }
}

fn parse_sort(key: &str, seed: u64) -> SortBy {
    match key {
        "newest" => SortBy::Newest,
        "oldest" => SortBy::Oldest,
        "popular" => SortBy::Popular,
        "random" => SortBy::Random(seed),
        _ => SortBy::Curated,
    }
}

/// Filter bar.
///
/// With `show_categories` off (category pages), the category row is hidden
/// and the sub-category chips of `fixed_category` are shown instead.
#[component]
pub fn FilterBar(
    filters: RwSignal<GalleryFilters>,
    view_mode: RwSignal<GalleryViewMode>,
    #[prop(into)] total: Signal<usize>,
    #[prop(default = true)] show_categories: bool,
    #[prop(optional)] fixed_category: Option<Category>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let categories: Vec<Category> = ctx.catalog.with_value(|c| c.all().to_vec());
    let (expanded, set_expanded) = signal(false);

    let active_count = Signal::derive(move || filters.with(GalleryFilters::active_count));
    let has_active = move || filters.with(GalleryFilters::has_active);
    let selected_category = move || filters.with(|f| f.category_slug.clone());

    // Sub-category chips follow the selected (or fixed) category.
    let sub_source = {
        let categories = categories.clone();
        move || -> Option<Category> {
            if let Some(fixed) = &fixed_category {
                return Some(fixed.clone());
            }
            let slug = selected_category()?;
            categories.iter().find(|c| c.slug == slug).cloned()
        }
    };

    let on_sort = move |ev: ev::Event| {
        let sort = parse_sort(&event_target_value(&ev), ctx.shuffle_seed);
        filters.update(|f| f.sort_by = sort);
    };

    view! {
        <div class=css::bar>
            <div class=css::row>
                <button
                    class=move || chip_class(expanded.get())
                    on:click=move |_| set_expanded.update(|e| *e = !*e)
                >
                    <Icon icon=ic::FILTERS />
                    "Filters"
                    <Show when=move || { active_count.get() > 0 }>
                        <span class=css::countBadge>{active_count}</span>
                    </Show>
                </button>

                {show_categories.then(|| view! {
                    <div class=css::scroller>
                        <button
                            class=move || chip_class(selected_category().is_none())
                            on:click=move |_| filters.update(|f| f.select_category(None))
                        >
                            "All Categories"
                        </button>
                        {categories
                            .iter()
                            .map(|cat| {
                                let slug = cat.slug.clone();
                                let check = slug.clone();
                                view! {
                                    <button
                                        class=move || chip_class(selected_category().as_deref() == Some(check.as_str()))
                                        on:click=move |_| filters.update(|f| f.select_category(Some(&slug)))
                                    >
                                        <Icon icon=ic::category_icon(&cat.icon.name) />
                                        {cat.name.clone()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                })}

                <div class=css::spacer></div>

                <select
                    class=css::sort
                    title="Sort"
                    prop:value=move || filters.with(|f| sort_key(f.sort_by))
                    on:change=on_sort
                >
                    {SORT_OPTIONS
                        .iter()
                        .map(|(key, label)| view! { <option value=*key>{*label}</option> })
                        .collect_view()}
                </select>

                <div class=css::viewModes>
                    {GalleryViewMode::ALL
                        .into_iter()
                        .map(|mode| view! {
                            <button
                                class=move || {
                                    if view_mode.get() == mode {
                                        format!("{} {}", css::viewButton, css::viewButtonActive)
                                    } else {
                                        css::viewButton.to_string()
                                    }
                                }
                                title=mode.label()
                                on:click=move |_| view_mode.set(mode)
                            >
                                <Icon icon=ic::view_mode_icon(mode) />
                            </button>
                        })
                        .collect_view()}
                </div>

                <span class=css::total>{move || pluralize(total.get(), "image")}</span>
            </div>

            <Show when=move || expanded.get()>
                <div class=css::panel>
                    {
                        let sub_source = sub_source.clone();
                        move || sub_source().map(|cat| view! {
                            <section class=css::group>
                                <h4>{format!("{} Sub-categories", cat.name)}</h4>
                                <div class=css::chips>
                                    {cat.sub_categories
                                        .into_iter()
                                        .map(|sub| {
                                            let slug = sub.slug.clone();
                                            let check = sub.slug.clone();
                                            view! {
                                                <button
                                                    class=move || chip_class(filters.with(|f| f.sub_category_slug.as_deref() == Some(check.as_str())))
                                                    on:click=move |_| filters.update(|f| f.select_sub_category(Some(&slug)))
                                                >
                                                    {sub.name}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </section>
                        })
                    }

                    <section class=css::group>
                        <h4>"Style"</h4>
                        <div class=css::chips>
                            {ImageStyle::ALL
                                .into_iter()
                                .map(|style| view! {
                                    <button
                                        class=move || chip_class(filters.with(|f| f.style == Some(style)))
                                        title=style.description()
                                        on:click=move |_| filters.update(|f| f.select_style(Some(style)))
                                    >
                                        <span class=css::swatch style=format!("background: {};", style.swatch())></span>
                                        {style.label()}
                                    </button>
                                })
                                .collect_view()}
                        </div>
                    </section>

                    <section class=css::group>
                        <h4>"Aspect Ratio"</h4>
                        <div class=css::chips>
                            {AspectRatio::ALL
                                .into_iter()
                                .map(|ratio| view! {
                                    <button
                                        class=move || chip_class(filters.with(|f| f.aspect_ratio == Some(ratio)))
                                        on:click=move |_| filters.update(|f| f.select_aspect_ratio(Some(ratio)))
                                    >
                                        {ratio.label()}
                                    </button>
                                })
                                .collect_view()}
                        </div>
                    </section>

                    <section class=css::group>
                        <h4>"Show"</h4>
                        <div class=css::chips>
                            <button
                                class=move || chip_class(filters.with(|f| f.featured_only))
                                on:click=move |_| filters.update(|f| f.featured_only = !f.featured_only)
                            >
                                "Featured only"
                            </button>
                            <button
                                class=move || chip_class(filters.with(|f| f.new_only))
                                on:click=move |_| filters.update(|f| f.new_only = !f.new_only)
                            >
                                <Icon icon=ic::SPARKLES />
                                "New only"
                            </button>
                        </div>
                    </section>

                    <Show when=has_active>
                        <button class=css::clear on:click=move |_| filters.update(GalleryFilters::clear)>
                            <Icon icon=ic::CLOSE />
                            {move || match active_count.get() {
                                0 => "Clear all".to_string(),
                                n => format!("Clear all ({})", n),
                            }}
                        </button>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_keys_round_trip() {
        for (key, _) in SORT_OPTIONS {
            assert_eq!(sort_key(parse_sort(key, 42)), key);
        }
        assert_eq!(parse_sort("random", 9), SortBy::Random(9));
        assert_eq!(parse_sort("bogus", 9), SortBy::Curated);
    }
}
