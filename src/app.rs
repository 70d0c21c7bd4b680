//! Root application module.
//!
//! Contains the main App component, the [`SecurityContext`] handle, the
//! [`AppContext`] definition, and application-level setup following Leptos
//! conventions.

use leptos::logging::error;
use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config::protection::ENABLED_BY_DEFAULT;
use crate::core::{Catalog, KeyChord, ProtectionController, Verdict, ViolationKind};
use crate::utils::dom;

// ============================================================================
// SecurityContext
// ============================================================================

/// Shared content-protection state.
///
/// A `Copy` handle over a signal holding the [`ProtectionController`]. It is
/// passed as a prop to every component that reads the enabled flag or
/// reports interceptions, so the dependency is visible in their signatures.
///
/// The signal is only written when an event is actually blocked or the flag
/// is toggled, so allowed events do not wake subscribers.
#[derive(Clone, Copy)]
pub struct SecurityContext {
    state: RwSignal<ProtectionController>,
}

impl SecurityContext {
    pub fn new(enabled: bool) -> Self {
        Self {
            state: RwSignal::new(ProtectionController::new(enabled)),
        }
    }

    /// Reactive read of the enabled flag.
    pub fn is_enabled(&self) -> bool {
        self.state.with(|c| c.is_enabled())
    }

    /// Reactive read of the violation counter.
    pub fn violations(&self) -> u32 {
        self.state.with(|c| c.violations())
    }

    pub fn last_violation(&self) -> Option<ViolationKind> {
        self.state.with(|c| c.last_violation())
    }

    /// Untracked copy of the controller, for logging from event handlers.
    pub fn snapshot(&self) -> ProtectionController {
        self.state.get_untracked()
    }

    pub fn toggle(&self) {
        self.state.update(|c| c.toggle());
    }

    /// Document-level `contextmenu` handler decision.
    pub fn intercept_context_menu(&self, event: &web_sys::Event) -> Verdict {
        let target = dom::target_info(event);
        self.intercept(|c| c.on_context_menu(target))
    }

    /// Document-level `dragstart` handler decision.
    pub fn intercept_drag_start(&self, event: &web_sys::Event) -> Verdict {
        let target = dom::target_info(event);
        self.intercept(|c| c.on_drag_start(target))
    }

    /// Document-level `keydown` handler decision.
    pub fn intercept_key(&self, chord: &KeyChord) -> Verdict {
        self.intercept(|c| c.on_key_down(chord))
    }

    /// Suppress a pointer event on an element that is protected by
    /// construction. Does not count a violation; the document listener
    /// records it when the event bubbles up.
    pub fn suppress(&self, event: &web_sys::Event) {
        if self.state.with_untracked(|c| c.is_enabled()) {
            event.prevent_default();
        }
    }

    fn intercept(&self, f: impl FnOnce(&mut ProtectionController) -> Verdict) -> Verdict {
        let mut controller = self.state.get_untracked();
        let verdict = f(&mut controller);
        if verdict.is_block() {
            self.state.set(controller);
        }
        verdict
    }
}

impl Default for SecurityContext {
    fn default() -> Self {
        Self::new(ENABLED_BY_DEFAULT)
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context.
///
/// Provided at the root of the component tree once the catalog has loaded,
/// and read with `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Static category catalog (read-only after load).
    pub catalog: StoredValue<Catalog>,
    /// Seed for the "random" sort, fixed for the page lifetime.
    pub shuffle_seed: u64,
}

impl AppContext {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: StoredValue::new(catalog),
            shuffle_seed: js_sys::Date::now() as u64,
        }
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Loads the catalog and provides the global AppContext
/// - Creates the shared SecurityContext
/// - Wraps the app in an ErrorBoundary so a catalog failure renders a
///   reload screen instead of a blank page
#[component]
pub fn App() -> impl IntoView {
    let security = SecurityContext::default();

    let site = Catalog::load()
        .inspect_err(|e| error!("catalog: {}", e))
        .map(|catalog| {
            provide_context(AppContext::new(catalog));
            view! { <AppRouter security=security /> }
        });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #0f0f14;
                    color: #e5e5e5;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="
                        max-width: 600px;
                        text-align: center;
                    ">
                        <h1 style="color: #f97316; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #a3a3a3; margin-bottom: 2rem;">
                            "The gallery could not be loaded. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #1c1c24;
                            padding: 1rem;
                            border-radius: 8px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #737373;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #f87171;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = dom::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #f97316;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 9999px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            {site}
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn security(enabled: bool) -> SecurityContext {
        Owner::new().set();
        SecurityContext::new(enabled)
    }

    #[test]
    fn test_blocked_key_counts_violation() {
        let security = security(true);
        assert!(security.is_enabled());
        assert_eq!(security.intercept_key(&KeyChord::new("F12")), Verdict::Block);
        assert_eq!(security.violations(), 1);
        assert!(security.last_violation().is_some());
    }

    #[test]
    fn test_toggle_off_allows_and_keeps_counter() {
        let security = security(true);
        security.intercept_key(&KeyChord::new("F12"));

        security.toggle();
        assert!(!security.is_enabled());
        assert_eq!(security.intercept_key(&KeyChord::new("F12")), Verdict::Allow);
        assert_eq!(security.violations(), 1);

        security.toggle();
        assert!(security.is_enabled());
        assert_eq!(security.snapshot().violations(), 1);
    }

    #[test]
    fn test_allowed_event_leaves_state_untouched() {
        let security = security(true);
        assert_eq!(security.intercept_key(&KeyChord::new("s").ctrl()), Verdict::Block);
        let last = security.last_violation();

        assert_eq!(security.intercept_key(&KeyChord::new("a")), Verdict::Allow);
        assert_eq!(security.intercept_key(&KeyChord::new("ArrowLeft")), Verdict::Allow);
        assert_eq!(security.violations(), 1);
        assert_eq!(security.last_violation(), last);
    }

    #[test]
    fn test_disabled_from_start() {
        let security = security(false);
        assert!(!security.is_enabled());
        assert_eq!(security.intercept_key(&KeyChord::new("u").ctrl()), Verdict::Allow);
        assert_eq!(security.violations(), 0);
        assert_eq!(security.last_violation(), None);
    }
}
