//! Filter taxonomy tables.
//!
//! Fixed, ordered lists of the valid filter values the catalog understands:
//! component categories, layout axes (text alignment, media placement, column
//! count), and element tags. Purely static data consumed by the filter
//! sidebar endpoint; the database remains the source of truth for which
//! values actually occur on components.

use std::sync::LazyLock;

use serde::Serialize;

/// One selectable filter entry: display name plus the stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub name: &'static str,
    pub value: &'static str,
}

/// A category entry. `href` is only used by the public browse pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub name: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CATEGORIES: &[CategoryOption] = &[
    CategoryOption { name: "All", value: "all", href: "/browse-components" },
    CategoryOption { name: "Blog", value: "blog", href: "/browse-components/blog" },
    CategoryOption { name: "Contact", value: "contact", href: "/browse-components/contact" },
    CategoryOption { name: "CTA", value: "cta", href: "/browse-components/cta" },
    CategoryOption { name: "FAQ", value: "faq", href: "/browse-components/faq" },
    CategoryOption { name: "Feature", value: "feature", href: "/browse-components/feature" },
    CategoryOption { name: "Footer", value: "footer", href: "/browse-components/footer" },
    CategoryOption { name: "Gallery", value: "gallery", href: "/browse-components/gallery" },
    CategoryOption { name: "Header", value: "header", href: "/browse-components/header" },
    CategoryOption { name: "Hero", value: "hero", href: "/browse-components/hero" },
    CategoryOption { name: "Logos", value: "logos", href: "/browse-components/logos" },
    CategoryOption { name: "Navbar", value: "navbar", href: "/browse-components/navbar" },
    CategoryOption { name: "Pricing", value: "pricing", href: "/browse-components/pricing" },
    CategoryOption { name: "Team", value: "team", href: "/browse-components/team" },
    CategoryOption { name: "Testimonial", value: "testimonial", href: "/browse-components/testimonial" },
];

pub const TEXT_LAYOUT: &[FilterOption] = &[
    FilterOption { name: "Text Align Left", value: "text-align-left" },
    FilterOption { name: "Text Align Center", value: "text-align-center" },
];

pub const VISUAL_LAYOUT: &[FilterOption] = &[
    FilterOption { name: "Video/Image Left", value: "video-image-left" },
    FilterOption { name: "Video/Image Center", value: "video-image-center" },
    FilterOption { name: "Video/Image Right", value: "video-image-right" },
];

pub const COLUMN_LAYOUT: &[FilterOption] = &[
    FilterOption { name: "1 Column", value: "1-column" },
    FilterOption { name: "2 Columns", value: "2-columns" },
    FilterOption { name: "3 Columns", value: "3-columns" },
    FilterOption { name: "4 Columns", value: "4-columns" },
    FilterOption { name: "5+ Columns", value: "5-or-more-columns" },
];

pub const ELEMENTS: &[FilterOption] = &[
    FilterOption { name: "Accordion", value: "accordion" },
    FilterOption { name: "Animation", value: "animation" },
    FilterOption { name: "Background Image", value: "background-image" },
    FilterOption { name: "Background Video", value: "background-video" },
    FilterOption { name: "Banner", value: "banner" },
    FilterOption { name: "Buttons", value: "buttons" },
    FilterOption { name: "Cards", value: "cards" },
    FilterOption { name: "Checkboxes", value: "checkboxes" },
    FilterOption { name: "Dropdown", value: "dropdown" },
    FilterOption { name: "Filters", value: "filters" },
    FilterOption { name: "Forms", value: "forms" },
    FilterOption { name: "Icons", value: "icons" },
    FilterOption { name: "Image", value: "image" },
    FilterOption { name: "List", value: "list" },
    FilterOption { name: "Loading Animation", value: "loading-animation" },
    FilterOption { name: "Logos", value: "logos" },
    FilterOption { name: "Modal", value: "modal" },
    FilterOption { name: "Multiple Images", value: "multiple-images" },
    FilterOption { name: "Navbar", value: "navbar" },
    FilterOption { name: "Pagination", value: "pagination" },
    FilterOption { name: "Progress Bar", value: "progress-bar" },
    FilterOption { name: "Radio Buttons", value: "radio-buttons" },
    FilterOption { name: "Rich Text", value: "rich-text" },
    FilterOption { name: "Search Bar", value: "search-bar" },
    FilterOption { name: "Side Panel", value: "side-panel" },
    FilterOption { name: "Sidebar", value: "sidebar" },
    FilterOption { name: "Slider", value: "slider" },
    FilterOption { name: "Table", value: "table" },
    FilterOption { name: "Tabs", value: "tabs" },
    FilterOption { name: "Tags", value: "tags" },
    FilterOption { name: "Text Only", value: "text-only" },
    FilterOption { name: "Toggles", value: "toggles" },
    FilterOption { name: "Video", value: "video" },
];

/// All layout axes flattened, in sidebar display order.
pub static LAYOUT_PROPERTIES: LazyLock<Vec<FilterOption>> = LazyLock::new(|| {
    TEXT_LAYOUT
        .iter()
        .chain(VISUAL_LAYOUT)
        .chain(COLUMN_LAYOUT)
        .copied()
        .collect()
});

/// Every non-category property: layout axes followed by element tags.
pub static ALL_PROPERTIES: LazyLock<Vec<FilterOption>> = LazyLock::new(|| {
    TEXT_LAYOUT
        .iter()
        .chain(VISUAL_LAYOUT)
        .chain(COLUMN_LAYOUT)
        .chain(ELEMENTS)
        .copied()
        .collect()
});

#[cfg(test)]
#[path = "filter_list_test.rs"]
mod tests;
