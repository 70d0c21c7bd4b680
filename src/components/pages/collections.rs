//! Curated collections overview.

use leptos::prelude::*;

use crate::utils::format::pluralize;

stylance::import_crate_style!(css, "src/components/pages/content.module.css");

struct Collection {
    name: &'static str,
    emoji: &'static str,
    count: usize,
}

const COLLECTIONS: &[Collection] = &[
    Collection { name: "Seasonal Favorites", emoji: "🍂", count: 45 },
    Collection { name: "Breakfast Vibes", emoji: "☀️", count: 32 },
    Collection { name: "Sweet Treats", emoji: "🍰", count: 58 },
    Collection { name: "Healthy Choices", emoji: "🥗", count: 41 },
    Collection { name: "Comfort Food", emoji: "🍲", count: 37 },
    Collection { name: "Gourmet Delights", emoji: "✨", count: 29 },
];

#[component]
pub fn CollectionsPage() -> impl IntoView {
    view! {
        <div class=css::page>
            <header class=css::intro>
                <h1>
                    "Curated "
                    <span class=css::accent>"Collections"</span>
                </h1>
                <p>"Explore our handpicked collections of stunning culinary artworks"</p>
            </header>

            <div class=css::cards>
                {COLLECTIONS
                    .iter()
                    .map(|c| view! {
                        <div class=css::card>
                            <div class=css::emoji>{c.emoji}</div>
                            <h3>{c.name}</h3>
                            <p>{pluralize(c.count, "artwork")}</p>
                        </div>
                    })
                    .collect_view()}
            </div>

            <p class=css::note>"More collections coming soon..."</p>
        </div>
    }
}
