//! Fallback view for unknown routes and category slugs.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::AppRoute;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/pages/content.module.css");

/// Number of category shortcuts offered.
const SUGGESTED_CATEGORIES: usize = 4;

#[component]
pub fn NotFoundPage(#[prop(into)] path: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let suggested: Vec<(String, String)> = ctx.catalog.with_value(|c| {
        c.featured()
            .into_iter()
            .take(SUGGESTED_CATEGORIES)
            .map(|cat| (cat.name.clone(), AppRoute::Category { slug: cat.slug.clone() }.to_hash()))
            .collect()
    });

    view! {
        <div class=css::page>
            <div class=css::notFound>
                <span class=css::code>"404"</span>
                <h1>"Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist or has been moved."</p>
                <code class=css::path>{path}</code>

                <div class=css::actions>
                    <a class=css::primary href=AppRoute::Home.to_hash()>
                        <Icon icon=ic::HOME />
                        "Go Home"
                    </a>
                    <button class=css::secondary on:click=|_| dom::history_back()>
                        <Icon icon=ic::CHEVRON_LEFT />
                        "Go Back"
                    </button>
                </div>

                <p class=css::note>"Popular categories:"</p>
                <div class=css::chips>
                    {suggested
                        .into_iter()
                        .map(|(name, href)| view! { <a class=css::chip href=href>{name}</a> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
