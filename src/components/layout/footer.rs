//! Site footer.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::site;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/layout/footer.module.css");

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let featured: Vec<(String, String)> = ctx.catalog.with_value(|c| {
        c.featured()
            .into_iter()
            .map(|cat| (cat.name.clone(), AppRoute::Category { slug: cat.slug.clone() }.to_hash()))
            .collect()
    });
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class=css::footer>
            <div class=css::inner>
                <div class=css::about>
                    <h3>{site::NAME}</h3>
                    <p>{site::DESCRIPTION}</p>
                    <a class=css::contact href=format!("mailto:{}", site::CONTACT_EMAIL)>
                        <Icon icon=ic::MAIL />
                        {site::CONTACT_EMAIL}
                    </a>
                </div>

                <div class=css::column>
                    <h4>"Featured"</h4>
                    {featured
                        .into_iter()
                        .map(|(name, href)| view! { <a href=href>{name}</a> })
                        .collect_view()}
                </div>

                <div class=css::column>
                    <h4>"Explore"</h4>
                    <a href=AppRoute::Home.to_hash()>"Gallery"</a>
                    <a href=AppRoute::Collections.to_hash()>"Collections"</a>
                    <a href=AppRoute::About.to_hash()>"About Us"</a>
                </div>
            </div>

            <div class=css::bottom>
                {format!("© {} {}. All artworks are protected by copyright.", year, site::NAME)}
            </div>
        </footer>
    }
}
