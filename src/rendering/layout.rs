//! Spatial arrangements of poster text, independent of visual style.

use super::{Layout, TextRole};

/// Darkening layer drawn between the background and the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// 40% black at top and bottom edges, clear in the middle
    TopBottomGradient,
    /// Flat 30% black
    Uniform,
    /// 80% black at the bottom edge fading upward
    BottomGradient,
    None,
}

/// Area of the poster a group of elements is confined to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Anchored to the top edge
    Top,
    /// Anchored to the bottom edge
    Bottom,
    /// Vertically centered over the full poster
    Center,
    /// Upper half, content at its top
    TopHalf,
    /// Lower half, content at its bottom
    BottomHalf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Start,
    Center,
    End,
}

/// One text element inside a region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub role: TextRole,
    pub max_width_pct: Option<u8>,
    pub margin_top_px: u16,
}

const fn item(role: TextRole) -> Item {
    Item { role, max_width_pct: None, margin_top_px: 0 }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionSpec {
    pub region: Region,
    pub align: Align,
    pub gap_px: u16,
    /// Elements in paint order
    pub items: &'static [Item],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrangement {
    pub overlay: Overlay,
    pub padding_px: u16,
    pub regions: &'static [RegionSpec],
}

impl Arrangement {
    /// Iterate `(region spec, item)` pairs in paint order.
    pub fn items(&self) -> impl Iterator<Item = (&'static RegionSpec, &'static Item)> {
        let regions: &'static [RegionSpec] = self.regions;
        regions.iter().flat_map(|r| r.items.iter().map(move |i| (r, i)))
    }
}

static STANDARD: Arrangement = Arrangement {
    overlay: Overlay::TopBottomGradient,
    padding_px: 32,
    regions: &[
        RegionSpec {
            region: Region::Top,
            align: Align::Start,
            gap_px: 0,
            items: &[item(TextRole::Slogan)],
        },
        RegionSpec {
            region: Region::Bottom,
            align: Align::Start,
            gap_px: 16,
            items: &[item(TextRole::Badge), item(TextRole::Tagline)],
        },
    ],
};

static CENTERED: Arrangement = Arrangement {
    overlay: Overlay::Uniform,
    padding_px: 32,
    regions: &[RegionSpec {
        region: Region::Center,
        align: Align::Center,
        gap_px: 0,
        items: &[
            item(TextRole::Slogan),
            Item { margin_top_px: 12, ..item(TextRole::Tagline) },
            Item { margin_top_px: 24, ..item(TextRole::Badge) },
        ],
    }],
};

static BOTTOM: Arrangement = Arrangement {
    overlay: Overlay::BottomGradient,
    padding_px: 32,
    regions: &[RegionSpec {
        region: Region::Bottom,
        align: Align::Start,
        gap_px: 0,
        items: &[
            item(TextRole::Slogan),
            Item { margin_top_px: 12, ..item(TextRole::Tagline) },
            Item { margin_top_px: 16, ..item(TextRole::Badge) },
        ],
    }],
};

static SPLIT: Arrangement = Arrangement {
    overlay: Overlay::None,
    padding_px: 24,
    regions: &[
        RegionSpec {
            region: Region::TopHalf,
            align: Align::Start,
            gap_px: 0,
            items: &[Item { max_width_pct: Some(80), ..item(TextRole::Slogan) }],
        },
        RegionSpec {
            region: Region::BottomHalf,
            align: Align::End,
            gap_px: 8,
            items: &[item(TextRole::Badge), item(TextRole::Tagline)],
        },
    ],
};

/// Arrangement for a layout.
pub fn arrangement(layout: Layout) -> &'static Arrangement {
    match layout {
        Layout::Standard => &STANDARD,
        Layout::Centered => &CENTERED,
        Layout::Bottom => &BOTTOM,
        Layout::Split => &SPLIT,
    }
}
