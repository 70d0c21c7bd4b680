//! Image wrapped in a protected region with a tiled watermark.

use leptos::{ev, prelude::*};

use crate::app::SecurityContext;
use crate::config::protection::{WATERMARK_OPACITY, WATERMARK_REPEAT, WATERMARK_TEXT};

stylance::import_crate_style!(css, "src/components/security/protected_image.module.css");

/// Image rendered inside a `data-protected` region.
///
/// A transparent overlay sits above the `<img>` so pointer gestures hit
/// the overlay rather than the image. While protection is enabled, context
/// menu and drag are suppressed locally as well as by the document
/// listener. The watermark fades in once the image has loaded.
#[component]
pub fn ProtectedImage(
    #[prop(into)] src: Signal<String>,
    #[prop(into)] alt: Signal<String>,
    security: SecurityContext,
    /// Inline placeholder painted behind the image until it loads
    #[prop(optional, into)]
    placeholder: Option<Signal<String>>,
    #[prop(default = true)] show_watermark: bool,
    #[prop(default = false)] eager: bool,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let (loaded, set_loaded) = signal(false);

    // A new source starts unloaded again.
    Effect::new(move |prev: Option<()>| {
        src.track();
        if prev.is_some() {
            set_loaded.set(false);
        }
    });

    let on_context_menu = move |ev: ev::MouseEvent| security.suppress(&ev);
    let on_drag_start = move |ev: ev::DragEvent| security.suppress(&ev);

    let frame_style = move || {
        placeholder
            .filter(|_| !loaded.get())
            .map(|p| format!("background-image: url(\"{}\");", p.get()))
            .unwrap_or_default()
    };

    let image_class = move || {
        if loaded.get() {
            css::image.to_string()
        } else {
            format!("{} {}", css::image, css::imageLoading)
        }
    };

    view! {
        <div
            class=format!("protected-image {} {}", css::frame, class)
            data-protected="true"
            style=frame_style
            on:contextmenu=on_context_menu
        >
            <img
                class=image_class
                src=move || src.get()
                alt=move || alt.get()
                draggable="false"
                loading=if eager { "eager" } else { "lazy" }
                on:load=move |_| set_loaded.set(true)
            />
            <div
                class=css::overlay
                aria-hidden="true"
                on:contextmenu=on_context_menu
                on:dragstart=on_drag_start
            ></div>
            <Show when=move || show_watermark && loaded.get()>
                <Watermark />
            </Show>
        </div>
    }
}

#[component]
fn Watermark() -> impl IntoView {
    let label_style = format!("opacity: {};", WATERMARK_OPACITY);

    view! {
        <div class=css::watermark aria-hidden="true">
            <div class=css::watermarkTiles>
                {(0..WATERMARK_REPEAT)
                    .map(|_| view! { <span class=css::watermarkLabel style=label_style.clone()>{WATERMARK_TEXT}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}
