//! Responsive artwork grid.

use leptos::prelude::*;
use leptos_use::use_media_query;

use super::ImageCard;
use crate::app::SecurityContext;
use crate::config::MASONRY_BREAKPOINTS;
use crate::config::gallery::GRID_GAP_PX;
use crate::core::masonry::{columns_for_width, distribute};
use crate::models::{ArtworkPreview, GalleryViewMode};

stylance::import_crate_style!(css, "src/components/gallery/masonry_grid.module.css");

/// Column count tracking the viewport breakpoints.
fn use_column_count() -> Signal<usize> {
    let queries: Vec<(u32, Signal<bool>)> = MASONRY_BREAKPOINTS
        .iter()
        .map(|(min, _)| (*min, use_media_query(format!("(min-width: {}px)", min))))
        .collect();

    Signal::derive(move || {
        let width = queries
            .iter()
            .filter(|(_, matches)| matches.get())
            .map(|(min, _)| *min)
            .max()
            .unwrap_or(0);
        columns_for_width(width)
    })
}

/// Renders `items` as masonry columns, a uniform grid, or a list.
///
/// Card indices always refer to positions in `items`, whatever the layout,
/// so the lightbox pages in the same order the filters produced.
#[component]
pub fn MasonryGrid(
    #[prop(into)] items: Signal<Vec<ArtworkPreview>>,
    security: SecurityContext,
    on_open: Callback<usize>,
    #[prop(into, default = Signal::stored(GalleryViewMode::Masonry))] view_mode: Signal<
        GalleryViewMode,
    >,
    #[prop(default = true)] show_category: bool,
) -> impl IntoView {
    let columns = use_column_count();
    let gap_style = format!("gap: {}px;", GRID_GAP_PX);

    let card = move |items: &[ArtworkPreview], index: usize, mode: GalleryViewMode| {
        view! {
            <ImageCard
                artwork=items[index].clone()
                index=index
                security=security
                on_open=on_open
                view_mode=mode
                show_category=show_category
            />
        }
    };

    move || {
        let items = items.get();
        if items.is_empty() {
            return view! {
                <div class=css::empty>
                    <div class=css::emptyIcon>"🖼️"</div>
                    <h3>"No artworks found"</h3>
                    <p>"Try adjusting your filters or search query"</p>
                </div>
            }
            .into_any();
        }

        let mode = view_mode.get();
        match mode {
            GalleryViewMode::Masonry => {
                let cols = distribute(&items, columns.get());
                view! {
                    <div class=css::masonry style=gap_style.clone()>
                        {cols
                            .into_iter()
                            .map(|col| view! {
                                <div class=css::column style=gap_style.clone()>
                                    {col.into_iter().map(|i| card(&items, i, mode)).collect_view()}
                                </div>
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }
            GalleryViewMode::Grid => view! {
                <div
                    class=css::grid
                    style=format!("{} grid-template-columns: repeat({}, minmax(0, 1fr));", gap_style, columns.get())
                >
                    {(0..items.len()).map(|i| card(&items, i, mode)).collect_view()}
                </div>
            }
            .into_any(),
            GalleryViewMode::List => view! {
                <div class=css::list style=gap_style.clone()>
                    {(0..items.len()).map(|i| card(&items, i, mode)).collect_view()}
                </div>
            }
            .into_any(),
        }
    }
}
