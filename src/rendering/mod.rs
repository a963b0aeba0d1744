//! Poster rendering: background image plus styled text in a chosen layout.
//!
//! Rendering is a pure function of `(image URL, content, style, layout)`.
//! Styles resolve through [`theme::theme`] and layouts through
//! [`layout::arrangement`]; both are static tables.

pub mod layout;
pub mod markup;
pub mod paint;
pub mod theme;

use crate::{Content, VisualStyle};
use std::fmt;

pub use markup::{render_document, render_html};
pub use paint::{compose, PaintCommand};

/// Spatial arrangement of poster text, selectable at display time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Layout {
    #[default]
    Standard,
    Centered,
    Bottom,
    Split,
}

impl Layout {
    pub const ALL: [Layout; 4] = [Layout::Standard, Layout::Centered, Layout::Bottom, Layout::Split];

    pub fn name(self) -> &'static str {
        match self {
            Layout::Standard => "standard",
            Layout::Centered => "centered",
            Layout::Bottom => "bottom",
            Layout::Split => "split",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Text elements drawn over a poster
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TextRole {
    Slogan,
    Tagline,
    /// Highlight value
    Badge,
}

/// Everything needed to draw one poster
#[derive(Debug, Clone, Copy)]
pub struct Poster<'a> {
    /// `None` draws a neutral placeholder
    pub image_url: Option<&'a str>,
    pub content: &'a Content,
    pub style: VisualStyle,
    pub layout: Layout,
}

impl<'a> Poster<'a> {
    /// An empty URL is treated as "no image".
    pub fn new(image_url: &'a str, content: &'a Content, style: VisualStyle, layout: Layout) -> Self {
        Self {
            image_url: Some(image_url).filter(|u| !u.is_empty()),
            content,
            style,
            layout,
        }
    }

    /// Text for a role, `None` when the content has nothing to show.
    pub fn text(&self, role: TextRole) -> Option<&'a str> {
        match role {
            TextRole::Slogan => Some(self.content.slogan.as_str()),
            TextRole::Tagline => Some(self.content.promo_tagline.as_str()),
            TextRole::Badge => self.content.highlight(),
        }
    }

    pub(crate) fn style_slug(&self) -> &'static str {
        match self.style {
            VisualStyle::Minimalist => "minimalist",
            VisualStyle::Vibrant => "vibrant",
            VisualStyle::Luxury => "luxury",
            VisualStyle::Urgent => "urgent",
            VisualStyle::Retro => "retro",
            VisualStyle::Cyberpunk => "cyberpunk",
            VisualStyle::Corporate => "corporate",
        }
    }
}
