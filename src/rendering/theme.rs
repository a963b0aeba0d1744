//! Per-style presentation of the three poster text roles.
//!
//! Every visual style maps to one static [`Theme`]. Layouts never look at
//! the style and themes never look at the layout.

use super::TextRole;
use crate::VisualStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    Sans,
    Serif,
    Display,
    Mono,
}

impl FontFamily {
    pub fn css(self) -> &'static str {
        match self {
            FontFamily::Sans => "'Inter', 'Helvetica Neue', Arial, sans-serif",
            FontFamily::Serif => "'Playfair Display', Georgia, serif",
            FontFamily::Display => "'Bebas Neue', 'Impact', sans-serif",
            FontFamily::Mono => "'JetBrains Mono', 'Courier New', monospace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderSide {
    All,
    Top,
    Bottom,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub side: BorderSide,
    pub width_px: u8,
    pub color: &'static str,
}

/// Typography and decoration for one text role
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: FontFamily,
    pub weight: u16,
    pub size_px: u16,
    pub color: &'static str,
    pub italic: bool,
    pub uppercase: bool,
    pub tracking_em: f32,
    pub background: Option<&'static str>,
    pub border: Option<Border>,
    pub text_shadow: Option<&'static str>,
    pub box_shadow: Option<&'static str>,
    /// top, right, bottom, left
    pub padding_px: [u16; 4],
    pub radius_px: u16,
    pub skew_deg: i16,
    /// Shrink-wrap the element instead of spanning the column
    pub inline: bool,
    pub pulse: bool,
}

const BASE: TextStyle = TextStyle {
    font: FontFamily::Sans,
    weight: 400,
    size_px: 16,
    color: "#ffffff",
    italic: false,
    uppercase: false,
    tracking_em: 0.0,
    background: None,
    border: None,
    text_shadow: None,
    box_shadow: None,
    padding_px: [0, 0, 0, 0],
    radius_px: 0,
    skew_deg: 0,
    inline: false,
    pulse: false,
};

/// Badges are always shrink-wrapped chips.
const BADGE: TextStyle = TextStyle {
    inline: true,
    ..BASE
};

const fn pad(v: u16, h: u16) -> [u16; 4] {
    [v, h, v, h]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub slogan: TextStyle,
    pub tagline: TextStyle,
    pub badge: TextStyle,
}

impl Theme {
    pub fn text(&self, role: TextRole) -> &TextStyle {
        match role {
            TextRole::Slogan => &self.slogan,
            TextRole::Tagline => &self.tagline,
            TextRole::Badge => &self.badge,
        }
    }
}

static MINIMALIST: Theme = Theme {
    slogan: TextStyle {
        weight: 300,
        size_px: 24,
        color: "#1e293b",
        uppercase: true,
        tracking_em: -0.025,
        ..BASE
    },
    tagline: TextStyle {
        weight: 500,
        size_px: 14,
        color: "#64748b",
        border: Some(Border { side: BorderSide::Top, width_px: 1, color: "#e2e8f0" }),
        padding_px: [4, 0, 0, 0],
        ..BASE
    },
    badge: TextStyle {
        weight: 700,
        size_px: 10,
        uppercase: true,
        background: Some("#1e293b"),
        padding_px: pad(2, 8),
        ..BADGE
    },
};

static VIBRANT: Theme = Theme {
    slogan: TextStyle {
        font: FontFamily::Display,
        size_px: 30,
        text_shadow: Some("0 10px 8px rgba(0,0,0,0.25)"),
        ..BASE
    },
    tagline: TextStyle {
        weight: 700,
        size_px: 18,
        color: "#4f46e5",
        background: Some("#ffffff"),
        box_shadow: Some("0 4px 6px rgba(0,0,0,0.1)"),
        padding_px: pad(4, 12),
        radius_px: 9999,
        inline: true,
        ..BASE
    },
    badge: TextStyle {
        weight: 900,
        background: Some("#ec4899"),
        box_shadow: Some("0 10px 15px rgba(0,0,0,0.2)"),
        padding_px: pad(4, 12),
        radius_px: 6,
        ..BADGE
    },
};

static LUXURY: Theme = Theme {
    slogan: TextStyle {
        font: FontFamily::Serif,
        size_px: 30,
        color: "#f59e0b",
        italic: true,
        text_shadow: Some("0 1px 1px rgba(0,0,0,0.05)"),
        ..BASE
    },
    tagline: TextStyle {
        font: FontFamily::Serif,
        size_px: 12,
        color: "#fde68a",
        uppercase: true,
        tracking_em: 0.2,
        ..BASE
    },
    badge: TextStyle {
        weight: 700,
        size_px: 10,
        color: "#0f172a",
        background: Some("#fbbf24"),
        padding_px: pad(2, 12),
        radius_px: 2,
        ..BADGE
    },
};

static URGENT: Theme = Theme {
    slogan: TextStyle {
        font: FontFamily::Display,
        weight: 900,
        size_px: 36,
        color: "#dc2626",
        italic: true,
        uppercase: true,
        ..BASE
    },
    tagline: TextStyle {
        weight: 700,
        size_px: 20,
        color: "#facc15",
        background: Some("#000000"),
        padding_px: pad(4, 12),
        skew_deg: -10,
        inline: true,
        ..BASE
    },
    badge: TextStyle {
        weight: 900,
        size_px: 12,
        background: Some("#dc2626"),
        box_shadow: Some("0 10px 15px rgba(0,0,0,0.2)"),
        padding_px: pad(12, 12),
        radius_px: 9999,
        pulse: true,
        ..BADGE
    },
};

static RETRO: Theme = Theme {
    slogan: TextStyle {
        font: FontFamily::Serif,
        size_px: 30,
        color: "#9a3412",
        text_shadow: Some("0 4px 3px rgba(0,0,0,0.07)"),
        ..BASE
    },
    tagline: TextStyle {
        weight: 700,
        color: "#7c2d12",
        background: Some("#fff7ed"),
        border: Some(Border { side: BorderSide::All, width_px: 2, color: "#9a3412" }),
        padding_px: pad(4, 8),
        inline: true,
        ..BASE
    },
    badge: TextStyle {
        font: FontFamily::Serif,
        size_px: 12,
        color: "#fff7ed",
        background: Some("#9a3412"),
        padding_px: pad(4, 8),
        radius_px: 2,
        ..BADGE
    },
};

static CYBERPUNK: Theme = Theme {
    slogan: TextStyle {
        font: FontFamily::Display,
        size_px: 30,
        color: "#22d3ee",
        italic: true,
        uppercase: true,
        text_shadow: Some("0 0 8px rgba(34,211,238,0.8)"),
        ..BASE
    },
    tagline: TextStyle {
        font: FontFamily::Mono,
        color: "#d946ef",
        tracking_em: -0.05,
        border: Some(Border { side: BorderSide::Bottom, width_px: 2, color: "#d946ef" }),
        inline: true,
        ..BASE
    },
    badge: TextStyle {
        font: FontFamily::Mono,
        weight: 700,
        size_px: 12,
        color: "#000000",
        background: Some("#06b6d4"),
        padding_px: pad(4, 8),
        ..BADGE
    },
};

static CORPORATE: Theme = Theme {
    slogan: TextStyle {
        weight: 700,
        size_px: 24,
        color: "#312e81",
        ..BASE
    },
    tagline: TextStyle {
        weight: 600,
        color: "#4f46e5",
        border: Some(Border { side: BorderSide::Left, width_px: 4, color: "#4f46e5" }),
        padding_px: [0, 0, 0, 12],
        ..BASE
    },
    badge: TextStyle {
        size_px: 12,
        background: Some("#312e81"),
        padding_px: pad(4, 12),
        ..BADGE
    },
};

/// Theme for a visual style.
pub fn theme(style: VisualStyle) -> &'static Theme {
    match style {
        VisualStyle::Minimalist => &MINIMALIST,
        VisualStyle::Vibrant => &VIBRANT,
        VisualStyle::Luxury => &LUXURY,
        VisualStyle::Urgent => &URGENT,
        VisualStyle::Retro => &RETRO,
        VisualStyle::Cyberpunk => &CYBERPUNK,
        VisualStyle::Corporate => &CORPORATE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_style_has_a_distinct_slogan_treatment() {
        let mut seen = Vec::new();
        for style in VisualStyle::ALL {
            let t = theme(style);
            assert!(t.badge.inline, "{} badge should be a chip", style);
            seen.push((t.slogan.color, t.slogan.size_px, t.slogan.font as u8));
        }
        seen.sort_by(|a, b| a.0.cmp(b.0));
        seen.dedup();
        assert_eq!(seen.len(), VisualStyle::ALL.len());
    }
}
