//! About page, rendered from the embedded Markdown body.

use leptos::prelude::*;

use crate::config::ABOUT_MARKDOWN;
use crate::utils::markdown_to_html;

stylance::import_crate_style!(css, "src/components/pages/content.module.css");

const FEATURES: [(&str, &str, &str); 3] = [
    ("🎨", "AI-Generated Art", "Created using cutting-edge AI technology"),
    ("📸", "Premium Quality", "High-resolution images for professional use"),
    ("🍽️", "Curated Collection", "Carefully selected culinary artworks"),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    let body = markdown_to_html(ABOUT_MARKDOWN);

    view! {
        <div class=css::page>
            <header class=css::intro>
                <h1>
                    "About "
                    <span class=css::accent>"Culinary Canvas"</span>
                </h1>
            </header>

            <article class=css::prose inner_html=body></article>

            <div class=css::cards>
                {FEATURES
                    .iter()
                    .map(|(emoji, title, text)| view! {
                        <div class=css::card>
                            <div class=css::emoji>{*emoji}</div>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
