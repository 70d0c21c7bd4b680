//! Top navigation bar.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::{AppContext, SecurityContext};
use crate::components::icons as ic;
use crate::config::site;
use crate::core::Catalog;
use crate::models::AppRoute;
use crate::utils::format::format_count;

stylance::import_crate_style!(css, "src/components/layout/navbar.module.css");

fn link_class(active: bool) -> String {
    if active {
        format!("{} {}", css::link, css::linkActive)
    } else {
        css::link.to_string()
    }
}

/// Navbar with page links, a categories menu and the protection toggle.
///
/// The toggle shows the violation count once anything has been blocked.
#[component]
pub fn Navbar(route: Memo<AppRoute>, security: SecurityContext) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let nav_items = ctx.catalog.with_value(Catalog::nav_items);
    let (menu_open, set_menu_open) = signal(false);

    // Navigating closes the mobile menu.
    Effect::new(move |_| {
        route.track();
        set_menu_open.set(false);
    });

    let is_home = move || route.with(|r| *r == AppRoute::Home);
    let is_category = move || route.with(|r| matches!(r, AppRoute::Category { .. }));
    let is_collections = move || route.with(|r| *r == AppRoute::Collections);
    let is_about = move || route.with(|r| *r == AppRoute::About);

    let shield_title = move || match (security.is_enabled(), security.last_violation()) {
        (false, _) => "Content protection off".to_string(),
        (true, None) => "Content protection on".to_string(),
        (true, Some(kind)) => format!("Content protection on (last blocked: {})", kind),
    };

    view! {
        <nav class=css::navbar>
            <div class=css::inner>
                <a class=css::brand href=AppRoute::Home.to_hash()>
                    <span class=css::logo><Icon icon=ic::CAMERA /></span>
                    <span class=css::brandText>
                        <span class=css::name>{site::NAME}</span>
                        <span class=css::tagline>{site::TAGLINE}</span>
                    </span>
                </a>

                <div class=move || {
                    if menu_open.get() {
                        format!("{} {}", css::links, css::linksOpen)
                    } else {
                        css::links.to_string()
                    }
                }>
                    <a class=move || link_class(is_home()) href=AppRoute::Home.to_hash()>
                        <Icon icon=ic::HOME />
                        "Home"
                    </a>

                    <div class=css::dropdown>
                        <span class=move || link_class(is_category())>
                            "Categories"
                            <Icon icon=ic::CHEVRON_DOWN />
                        </span>
                        <div class=css::menu>
                            {nav_items
                                .into_iter()
                                .map(|item| {
                                    let href = AppRoute::Category { slug: item.slug }.to_hash();
                                    view! {
                                        <a class=css::menuItem href=href>
                                            <Icon icon=ic::category_icon(&item.icon) />
                                            <span class=css::menuName>{item.name}</span>
                                            <span class=css::menuCount>
                                                {format_count(u64::from(item.image_count))}
                                            </span>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <a class=move || link_class(is_collections()) href=AppRoute::Collections.to_hash()>
                        <Icon icon=ic::COLLECTIONS />
                        "Collections"
                    </a>
                    <a class=move || link_class(is_about()) href=AppRoute::About.to_hash()>
                        <Icon icon=ic::INFO />
                        "About"
                    </a>
                </div>

                <div class=css::actions>
                    <button
                        class=move || {
                            if security.is_enabled() {
                                format!("{} {}", css::shield, css::shieldOn)
                            } else {
                                css::shield.to_string()
                            }
                        }
                        title=shield_title
                        on:click=move |_| security.toggle()
                    >
                        {move || if security.is_enabled() {
                            view! { <Icon icon=ic::SHIELD /> }.into_any()
                        } else {
                            view! { <Icon icon=ic::SHIELD_OFF /> }.into_any()
                        }}
                        <Show when=move || { security.violations() > 0 }>
                            <span class=css::badge>{move || security.violations()}</span>
                        </Show>
                    </button>

                    <button
                        class=css::menuButton
                        title="Menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() {
                            view! { <Icon icon=ic::CLOSE /> }.into_any()
                        } else {
                            view! { <Icon icon=ic::MENU /> }.into_any()
                        }}
                    </button>
                </div>
            </div>
        </nav>
    }
}
