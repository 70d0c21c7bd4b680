//! Search input with catalog suggestions.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::search::{SearchKey, Suggestion, SuggestionCursor, SuggestionKind, suggestions};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/gallery/search_bar.module.css");

/// Search box driving the gallery's text filter.
///
/// While focused, a dropdown lists matching categories and sub-categories
/// (or trending searches for an empty box). Picking a category navigates
/// to its page; picking a trending term fills the box.
#[component]
pub fn SearchBar(
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(default = "Search food photography...")] placeholder: &'static str,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let (focused, set_focused) = signal(false);
    let cursor = RwSignal::new(SuggestionCursor::default());

    let items = Memo::new(move |_| ctx.catalog.with_value(|c| suggestions(c, &value.get())));

    // Any edit drops the keyboard highlight.
    Effect::new(move |_| {
        value.track();
        cursor.update(SuggestionCursor::reset);
    });

    let dismiss = move || {
        dom::blur_active_element();
        set_focused.set(false);
    };

    let pick = move |suggestion: Suggestion| {
        match suggestion.route() {
            Some(route) => {
                on_change.run(String::new());
                route.push();
            }
            None => on_change.run(suggestion.label),
        }
        dismiss();
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        let len = items.with_untracked(Vec::len);
        match SearchKey::from_key(&ev.key()) {
            Some(SearchKey::Down) => {
                ev.prevent_default();
                cursor.update(|c| c.down(len));
            }
            Some(SearchKey::Up) => {
                ev.prevent_default();
                cursor.update(|c| c.up(len));
            }
            Some(SearchKey::Select) => {
                let selected = cursor
                    .get_untracked()
                    .selected()
                    .and_then(|i| items.with_untracked(|v| v.get(i).cloned()));
                ev.prevent_default();
                match selected {
                    Some(suggestion) => pick(suggestion),
                    None => dismiss(),
                }
            }
            Some(SearchKey::Dismiss) => dismiss(),
            None => {}
        }
    };

    let is_trending = move || items.with(|v| v.first().is_some_and(|s| s.kind == SuggestionKind::Trending));

    view! {
        <div class=css::wrapper>
            <div class=css::field>
                <span class=css::icon><Icon icon=ic::SEARCH /></span>
                <input
                    class=css::input
                    type="search"
                    placeholder=placeholder
                    autocomplete="off"
                    prop:value=move || value.get()
                    on:input=move |ev| on_change.run(event_target_value(&ev))
                    on:focus=move |_| set_focused.set(true)
                    on:blur=move |_| set_focused.set(false)
                    on:keydown=on_keydown
                />
                <Show when=move || !value.with(String::is_empty)>
                    <button
                        class=css::clear
                        title="Clear"
                        on:mousedown=|ev: ev::MouseEvent| ev.prevent_default()
                        on:click=move |_| on_change.run(String::new())
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </Show>
            </div>

            <Show when=move || focused.get() && !items.with(Vec::is_empty)>
                <div class=css::dropdown>
                    <Show when=is_trending>
                        <div class=css::heading>
                            <Icon icon=ic::TRENDING />
                            "Trending"
                        </div>
                    </Show>
                    <ul class=css::list role="listbox">
                        {move || {
                            let selected = cursor.with(SuggestionCursor::selected);
                            items
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(i, suggestion)| {
                                    let class = if selected == Some(i) {
                                        format!("{} {}", css::item, css::itemSelected)
                                    } else {
                                        css::item.to_string()
                                    };
                                    let label = suggestion.label.clone();
                                    let detail = suggestion.detail.clone();
                                    view! {
                                        <li
                                            class=class
                                            role="option"
                                            on:mousedown=move |ev: ev::MouseEvent| {
                                                // Keep focus so blur doesn't close the list first.
                                                ev.prevent_default();
                                                pick(suggestion.clone());
                                            }
                                        >
                                            <span>{label}</span>
                                            {detail.map(|d| view! { <span class=css::detail>{d}</span> })}
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </div>
            </Show>
        </div>
    }
}
