//! Deterministic mock artwork generator.
//!
//! Stands in for an image backend: the same `count` always yields the same
//! records, so grids, filters and lightbox indices are stable across reloads.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::config::gallery::{PLACEHOLDER_COLOR, PREVIEW_PARAMS, THUMBNAIL_PARAMS};
use crate::models::{ArtworkPreview, AspectRatio, ImageStyle};

const IMAGE_POOL: &[&str] = &[
    "https://images.unsplash.com/photo-1546069901-ba9599a7e63c",
    "https://images.unsplash.com/photo-1565299624946-b28f40a0ae38",
    "https://images.unsplash.com/photo-1565958011703-44f9829ba187",
    "https://images.unsplash.com/photo-1482049016631-27e3f7875c29",
    "https://images.unsplash.com/photo-1504674900247-0877df9cc836",
    "https://images.unsplash.com/photo-1512621776951-a57141f2eefd",
    "https://images.unsplash.com/photo-1473093295043-cdd812d0e601",
    "https://images.unsplash.com/photo-1498837167922-ddd27525d352",
    "https://images.unsplash.com/photo-1495147466023-ac5c588e2e94",
    "https://images.unsplash.com/photo-1481391319762-47dff72954d9",
    "https://images.unsplash.com/photo-1484723091739-30a097e8f929",
    "https://images.unsplash.com/photo-1467003909585-2f8a72700288",
    "https://images.unsplash.com/photo-1432139555190-58524dae6a55",
    "https://images.unsplash.com/photo-1499028344343-cd173ffc68a9",
    "https://images.unsplash.com/photo-1476224203421-9ac39bcb3327",
    "https://images.unsplash.com/photo-1455619452474-d2be8b1e70cd",
    "https://images.unsplash.com/photo-1529042410759-befb1204b468",
    "https://images.unsplash.com/photo-1509440159596-0249088772ff",
    "https://images.unsplash.com/photo-1551024601-bec78aea704b",
    "https://images.unsplash.com/photo-1488477181946-6428a0291777",
];

/// `(category slug, [sub-category slugs])`, aligned with the catalog asset.
const SECTIONS: &[(&str, [&str; 2])] = &[
    ("fresh-produce", ["tropical-fruits", "leafy-greens"]),
    ("beverages", ["artisan-coffee", "fresh-juices"]),
    ("desserts-sweets", ["layered-cakes", "ice-cream-gelato"]),
    ("breakfast-brunch", ["pancake-stacks", "avocado-toast"]),
    ("main-courses", ["steaks-grills", "pasta-perfection"]),
];

const STYLES: &[ImageStyle] = &[
    ImageStyle::Bright,
    ImageStyle::Moody,
    ImageStyle::Minimal,
    ImageStyle::Rustic,
    ImageStyle::Modern,
    ImageStyle::Natural,
];

const RATIOS: &[AspectRatio] = &[
    AspectRatio::Square,
    AspectRatio::Classic,
    AspectRatio::Portrait,
    AspectRatio::Widescreen,
];

const TITLES: &[&str] = &[
    "Fresh Garden Salad",
    "Artisan Coffee Brew",
    "Chocolate Layer Cake",
    "Avocado Toast Delight",
    "Grilled Ribeye Steak",
    "Homemade Sourdough",
    "Spice Collection",
    "Gourmet Burger",
    "Elegant Table Setting",
    "Buddha Bowl",
    "Tropical Fruit Platter",
    "Pancake Stack",
    "Seafood Pasta",
    "French Croissant",
    "Smoothie Bowl",
    "Margherita Pizza",
    "Farm Vegetables",
    "Ice Cream Sundae",
    "Herb Garden",
    "Bread Basket",
];

/// Generate `count` artworks, numbered from 1.
pub fn generate_mock_artworks(count: usize) -> Vec<ArtworkPreview> {
    (0..count).map(mock_artwork).collect()
}

fn mock_artwork(index: usize) -> ArtworkPreview {
    let (category_slug, subs) = SECTIONS[index % SECTIONS.len()];
    let image = IMAGE_POOL[index % IMAGE_POOL.len()];
    let aspect_ratio = RATIOS[index % RATIOS.len()];
    let n = index + 1;

    ArtworkPreview {
        id: format!("artwork_{n}"),
        slug: format!("artwork-{n}"),
        thumbnail_src: format!("{image}?{THUMBNAIL_PARAMS}"),
        preview_src: format!("{image}?{PREVIEW_PARAMS}"),
        blur_data_url: placeholder_data_url(aspect_ratio),
        title: TITLES[index % TITLES.len()].to_string(),
        category_slug: category_slug.to_string(),
        sub_category_slug: subs[index % subs.len()].to_string(),
        aspect_ratio,
        style: STYLES[index % STYLES.len()],
        is_featured: index % 5 == 0,
        is_new: index % 7 == 0,
    }
}

/// Solid-color SVG sized to the aspect ratio, as a base64 data URL.
pub fn placeholder_data_url(ratio: AspectRatio) -> String {
    let (w, h) = ratio.dimensions();
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 {w} {h}'>\
         <rect width='{w}' height='{h}' fill='{PLACEHOLDER_COLOR}'/></svg>"
    );
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}
