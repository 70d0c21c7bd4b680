//! Full-screen artwork viewer.
//!
//! [`LightboxView`] is always mounted next to the grid and owns nothing but
//! the `Show`. The modal itself only exists while the state is open, so its
//! keyboard listener and body scroll lock live exactly as long as it does.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use leptos_use::use_event_listener;

use crate::app::{AppContext, SecurityContext};
use crate::components::icons as ic;
use crate::components::security::ProtectedImage;
use crate::config::site;
use crate::core::{Lightbox, Zoom};
use crate::models::ArtworkPreview;
use crate::utils::dom;
use crate::utils::format::{format_position, humanize_slug};

stylance::import_crate_style!(css, "src/components/gallery/lightbox.module.css");

/// Lightbox over `items`, driven by `state`.
///
/// When `items` changes length while open (filters changed underneath),
/// the index is clamped back into range or the lightbox closes.
#[component]
pub fn LightboxView(
    #[prop(into)] items: Signal<Vec<ArtworkPreview>>,
    state: RwSignal<Lightbox>,
    security: SecurityContext,
) -> impl IntoView {
    Effect::new(move |_| {
        let len = items.with(Vec::len);
        let mut lightbox = state.get_untracked();
        lightbox.sync_len(len);
        if lightbox != state.get_untracked() {
            state.set(lightbox);
        }
    });

    view! {
        <Show when=move || state.with(Lightbox::is_open)>
            <LightboxModal items=items state=state security=security />
        </Show>
    }
}

#[component]
fn LightboxModal(
    items: Signal<Vec<ArtworkPreview>>,
    state: RwSignal<Lightbox>,
    security: SecurityContext,
) -> impl IntoView {
    let len = Signal::derive(move || items.with(Vec::len));
    let current = Memo::new(move |_| {
        let index = state.with(Lightbox::index)?;
        items.with(|v| v.get(index).cloned())
    });

    let saved_overflow = dom::lock_body_scroll();
    on_cleanup(move || dom::unlock_body_scroll(saved_overflow));

    let _ = use_event_listener(window(), ev::keydown, move |ev| {
        let mut lightbox = state.get_untracked();
        if lightbox.handle_key(&ev.key(), len.get_untracked()) {
            ev.prevent_default();
            state.set(lightbox);
        }
    });

    let close = move |_| state.update(Lightbox::close);
    let stop = |ev: ev::MouseEvent| ev.stop_propagation();
    let on_previous = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        state.update(|lb| {
            lb.previous();
        });
    };
    let on_next = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        let n = len.get_untracked();
        state.update(|lb| {
            lb.next(n);
        });
    };

    let counter = move || {
        state
            .with(Lightbox::index)
            .map(|i| format_position(i, len.get()))
            .unwrap_or_default()
    };
    let zoom = move || state.with(Lightbox::zoom);
    let liked = move || state.with(Lightbox::liked);
    let show_info = move || state.with(Lightbox::show_info);

    let toolbar_class = move |active: bool| {
        if active {
            format!("{} {}", css::toolButton, css::toolButtonActive)
        } else {
            css::toolButton.to_string()
        }
    };

    view! {
        <div
            class=css::backdrop
            role="dialog"
            aria-modal="true"
            on:click=close
        >
            <div class=css::topBar on:click=stop>
                <span class=css::counter>{counter}</span>
                <div class=css::tools>
                    <button
                        class=move || toolbar_class(show_info())
                        title="Info (i)"
                        on:click=move |_| state.update(Lightbox::toggle_info)
                    >
                        <Icon icon=ic::INFO />
                    </button>
                    <button
                        class=move || toolbar_class(liked())
                        title="Like"
                        on:click=move |_| state.update(Lightbox::toggle_like)
                    >
                        {move || if liked() {
                            view! { <Icon icon=ic::HEART_FILL /> }.into_any()
                        } else {
                            view! { <Icon icon=ic::HEART /> }.into_any()
                        }}
                    </button>
                    <button
                        class=css::toolButton
                        title="Zoom"
                        on:click=move |_| state.update(Lightbox::toggle_zoom)
                    >
                        {move || match zoom() {
                            Zoom::Normal => view! { <Icon icon=ic::ZOOM_IN /> }.into_any(),
                            Zoom::Magnified => view! { <Icon icon=ic::ZOOM_OUT /> }.into_any(),
                        }}
                    </button>
                    <button class=css::toolButton title="Close (Esc)" on:click=close>
                        <Icon icon=ic::CLOSE />
                    </button>
                </div>
            </div>

            <Show when=move || state.with(Lightbox::has_previous)>
                <button
                    class=format!("{} {}", css::navButton, css::navPrevious)
                    title="Previous"
                    on:click=on_previous
                >
                    <Icon icon=ic::CHEVRON_LEFT />
                </button>
            </Show>
            <Show when=move || state.with(|lb| lb.has_next(len.get()))>
                <button
                    class=format!("{} {}", css::navButton, css::navNext)
                    title="Next"
                    on:click=on_next
                >
                    <Icon icon=ic::CHEVRON_RIGHT />
                </button>
            </Show>

            {move || current.get().map(|artwork| view! {
                <div
                    class=css::stage
                    data-protected="true"
                    style=format!("aspect-ratio: {};", artwork.aspect_ratio.css_value())
                    on:click=stop
                >
                    <div
                        class=css::zoomLayer
                        style=move || format!("transform: scale({});", zoom().factor())
                    >
                        <ProtectedImage
                            src=artwork.preview_src.clone()
                            alt=artwork.title.clone()
                            placeholder=artwork.blur_data_url.clone()
                            security=security
                            eager=true
                        />
                    </div>
                    <span class=css::signature>{format!("© {}", site::NAME)}</span>
                </div>
            })}

            <Show when=show_info>
                {move || current.get().map(|artwork| view! { <InfoPanel artwork=artwork /> })}
            </Show>

            <p class=css::hint>"← → to navigate · i for info · Esc to close"</p>
        </div>
    }
}

/// Side panel with the current artwork's metadata.
#[component]
fn InfoPanel(artwork: ArtworkPreview) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let (category, sub_category) = ctx.catalog.with_value(|catalog| {
        let category = catalog
            .by_slug(&artwork.category_slug)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| humanize_slug(&artwork.category_slug));
        let sub_category = catalog
            .sub_category(&artwork.category_slug, &artwork.sub_category_slug)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| humanize_slug(&artwork.sub_category_slug));
        (category, sub_category)
    });

    let rows = [
        ("Category", category),
        ("Sub-category", sub_category),
        ("Style", artwork.style.description().to_string()),
        ("Aspect Ratio", artwork.aspect_ratio.label().to_string()),
    ];

    view! {
        <aside class=css::info on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
            <h3 class=css::infoTitle>{artwork.title.clone()}</h3>
            <div class=css::infoBadges>
                {artwork.is_new.then(|| view! { <span class=css::badgeNew>"New"</span> })}
                {artwork.is_featured.then(|| view! { <span class=css::badgeFeatured>"Featured"</span> })}
            </div>
            <dl class=css::infoRows>
                {rows
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div>
                            <dt>{label}</dt>
                            <dd>{value}</dd>
                        </div>
                    })
                    .collect_view()}
            </dl>
            <p class=css::notice>
                "This image is protected by copyright. For licensing inquiries, please contact "
                <a href=format!("mailto:{}", site::CONTACT_EMAIL)>{site::CONTACT_EMAIL}</a>
                "."
            </p>
        </aside>
    }
}
