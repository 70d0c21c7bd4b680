//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.
//! Category icons always come from Lucide, which is the only set with
//! food glyphs.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowRight as ArrowRight, LuCamera as Camera, LuChevronLeft as ChevronLeft,
        LuChevronDown as ChevronDown, LuChevronRight as ChevronRight, LuHeart as Heart, LuHeart as HeartFill,
        LuHouse as Home, LuImage as Image, LuInfo as Info, LuLayers as Collections,
        LuLayoutDashboard as Masonry, LuLayoutGrid as Grid, LuList as List, LuMail as Mail,
        LuMenu as Menu, LuSearch as Search,
        LuShieldCheck as Shield, LuShieldOff as ShieldOff, LuSlidersHorizontal as Filters,
        LuSparkles as Sparkles, LuTrendingUp as Trending, LuX as Close, LuZoomIn as ZoomIn,
        LuZoomOut as ZoomOut,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRight as ArrowRight, BsCamera as Camera, BsChevronLeft as ChevronLeft,
        BsChevronDown as ChevronDown, BsChevronRight as ChevronRight, BsColumnsGap as Masonry,
        BsEnvelope as Mail, BsGraphUpArrow as Trending,
        BsGrid as Grid, BsHeart as Heart, BsHeartFill as HeartFill, BsHouseFill as Home,
        BsImage as Image, BsInfoCircle as Info, BsList as Menu, BsListUl as List, BsSearch as Search,
        BsShieldCheck as Shield, BsShieldSlash as ShieldOff, BsSliders as Filters,
        BsStack as Collections, BsStars as Sparkles, BsXLg as Close, BsZoomIn as ZoomIn,
        BsZoomOut as ZoomOut,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(ARROW_RIGHT, ArrowRight);
themed_icon!(CAMERA, Camera);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CLOSE, Close);
themed_icon!(COLLECTIONS, Collections);
themed_icon!(FILTERS, Filters);
themed_icon!(GRID, Grid);
themed_icon!(HEART, Heart);
themed_icon!(HEART_FILL, HeartFill);
themed_icon!(HOME, Home);
themed_icon!(IMAGE, Image);
themed_icon!(INFO, Info);
themed_icon!(LIST, List);
themed_icon!(MAIL, Mail);
themed_icon!(MENU, Menu);
themed_icon!(MASONRY, Masonry);
themed_icon!(SEARCH, Search);
themed_icon!(SHIELD, Shield);
themed_icon!(SHIELD_OFF, ShieldOff);
themed_icon!(SPARKLES, Sparkles);
themed_icon!(TRENDING, Trending);
themed_icon!(ZOOM_IN, ZoomIn);
themed_icon!(ZOOM_OUT, ZoomOut);

// =============================================================================
// Category Icons
// =============================================================================

/// Icon for a catalog icon key (e.g. `"coffee"`).
pub fn category_icon(name: &str) -> Icon {
    match name {
        "apple" => icondata::LuApple,
        "coffee" => icondata::LuCoffee,
        "cake" => icondata::LuCake,
        "egg" => icondata::LuEgg,
        "croissant" => icondata::LuCroissant,
        "leaf" => icondata::LuLeaf,
        "pizza" => icondata::LuPizza,
        "wine" => icondata::LuWine,
        "salad" => icondata::LuSalad,
        _ => icondata::LuUtensilsCrossed,
    }
}

/// Icon for a gallery view mode.
pub fn view_mode_icon(mode: crate::models::GalleryViewMode) -> Icon {
    use crate::models::GalleryViewMode;
    match mode {
        GalleryViewMode::Masonry => MASONRY,
        GalleryViewMode::Grid => GRID,
        GalleryViewMode::List => LIST,
    }
}
