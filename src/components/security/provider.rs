//! Document-level interception of copy-related user actions.

use leptos::logging::warn;
use leptos::{ev, prelude::*};
use leptos_use::{UseEventListenerOptions, use_event_listener, use_event_listener_with_options};

use crate::app::SecurityContext;
use crate::core::Verdict;
use crate::utils::dom;

/// Installs the `contextmenu`, `dragstart` and `keydown` listeners on the
/// document for as long as it is mounted.
///
/// Listeners are owned by this component's reactive scope and are removed
/// when it unmounts. Toggling protection off does not detach them; the
/// handlers see a disabled controller and let every event through.
#[component]
pub fn SecurityProvider(security: SecurityContext, children: Children) -> impl IntoView {
    let report = move || {
        let state = security.snapshot();
        if let Some(kind) = state.last_violation() {
            warn!("protection: blocked {} (violations: {})", kind, state.violations());
        }
    };

    let _ = use_event_listener(document(), ev::contextmenu, move |ev| {
        if security.intercept_context_menu(&ev) == Verdict::Block {
            ev.prevent_default();
            report();
        }
    });

    let _ = use_event_listener(document(), ev::dragstart, move |ev| {
        if security.intercept_drag_start(&ev) == Verdict::Block {
            ev.prevent_default();
            report();
        }
    });

    // Capture phase, so page-level shortcut handlers never see blocked chords.
    let _ = use_event_listener_with_options(
        document(),
        ev::keydown,
        move |ev| {
            if security.intercept_key(&dom::key_chord(&ev)) == Verdict::Block {
                ev.prevent_default();
                ev.stop_propagation();
                report();
            }
        },
        UseEventListenerOptions::default().capture(true),
    );

    children()
}
