//! Gallery tile.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::SecurityContext;
use crate::components::icons as ic;
use crate::components::security::ProtectedImage;
use crate::config::gallery::EAGER_TILES;
use crate::models::{ArtworkPreview, GalleryViewMode};
use crate::utils::format::humanize_slug;

stylance::import_crate_style!(css, "src/components/gallery/image_card.module.css");

/// A single artwork tile. Clicking anywhere except the like button opens
/// the lightbox at `index`.
#[component]
pub fn ImageCard(
    artwork: ArtworkPreview,
    /// Position in the sequence the lightbox pages through
    index: usize,
    security: SecurityContext,
    on_open: Callback<usize>,
    #[prop(default = GalleryViewMode::Masonry)] view_mode: GalleryViewMode,
    #[prop(default = true)] show_category: bool,
) -> impl IntoView {
    let (liked, set_liked) = signal(false);

    let on_like = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        set_liked.update(|l| *l = !*l);
    };

    // Masonry keeps each artwork's own shape; grid and list use uniform tiles.
    let media_style = match view_mode {
        GalleryViewMode::Masonry => format!("aspect-ratio: {};", artwork.aspect_ratio.css_value()),
        GalleryViewMode::Grid | GalleryViewMode::List => "aspect-ratio: 4 / 3;".to_string(),
    };

    let card_class = match view_mode {
        GalleryViewMode::List => format!("{} {}", css::card, css::cardList),
        _ => css::card.to_string(),
    };

    let eager = index < EAGER_TILES;
    let category_label = humanize_slug(&artwork.category_slug);
    let title = artwork.title.clone();

    view! {
        <article
            class=card_class
            data-protected="true"
            on:click=move |_| on_open.run(index)
            on:contextmenu=move |ev: ev::MouseEvent| security.suppress(&ev)
        >
            <div class=css::media style=media_style>
                <ProtectedImage
                    src=artwork.thumbnail_src.clone()
                    alt=artwork.title.clone()
                    placeholder=artwork.blur_data_url.clone()
                    security=security
                    show_watermark=false
                    eager=eager
                    class=css::image
                />
                <div class=css::shade></div>
                <div class=css::overlay>
                    <div class=css::overlayTop>
                        <div class=css::badges>
                            {artwork.is_new.then(|| view! {
                                <span class=css::badgeNew>
                                    <Icon icon=ic::SPARKLES />
                                    "New"
                                </span>
                            })}
                            {artwork.is_featured.then(|| view! {
                                <span class=css::badgeFeatured>"Featured"</span>
                            })}
                        </div>
                        <button
                            class=move || {
                                if liked.get() {
                                    format!("{} {}", css::likeButton, css::likeButtonActive)
                                } else {
                                    css::likeButton.to_string()
                                }
                            }
                            title="Like"
                            on:click=on_like
                        >
                            {move || if liked.get() {
                                view! { <Icon icon=ic::HEART_FILL /> }.into_any()
                            } else {
                                view! { <Icon icon=ic::HEART /> }.into_any()
                            }}
                        </button>
                    </div>
                    <div>
                        {show_category.then(|| view! {
                            <span class=css::category>{category_label}</span>
                        })}
                        <h3 class=css::title>{title}</h3>
                        <span class=css::viewHint>
                            <Icon icon=ic::ZOOM_IN />
                            "View"
                        </span>
                    </div>
                </div>
            </div>
        </article>
    }
}
