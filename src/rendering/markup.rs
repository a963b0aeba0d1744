//! Standalone HTML output for poster previews.
//!
//! Paint commands are emitted as absolutely positioned blocks with inline
//! CSS, so a preview renders the same in any browser without stylesheets.

use super::layout::{Align, Overlay, Region};
use super::paint::{compose, PaintCommand};
use super::theme::{theme, BorderSide, TextStyle};
use super::{Poster, TextRole};
use std::fmt::Write;

/// Escape text for HTML element content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn overlay_css(overlay: Overlay) -> &'static str {
    match overlay {
        Overlay::TopBottomGradient => {
            "background:linear-gradient(to bottom, rgba(0,0,0,0.4), transparent 50%, rgba(0,0,0,0.4));"
        }
        Overlay::Uniform => "background:rgba(0,0,0,0.3);",
        Overlay::BottomGradient => "background:linear-gradient(to top, rgba(0,0,0,0.8), transparent 50%);",
        Overlay::None => "",
    }
}

fn region_css(region: Region, align: Align, padding: u16, gap: u16) -> String {
    let (position, justify) = match region {
        Region::Top => ("top:0;left:0;right:0;", "flex-start"),
        Region::Bottom => ("bottom:0;left:0;right:0;", "flex-end"),
        Region::Center => ("top:0;bottom:0;left:0;right:0;", "center"),
        Region::TopHalf => ("top:0;left:0;right:0;height:50%;", "flex-start"),
        Region::BottomHalf => ("bottom:0;left:0;right:0;height:50%;", "flex-end"),
    };
    let (items, text_align) = match align {
        Align::Start => ("flex-start", "left"),
        Align::Center => ("center", "center"),
        Align::End => ("flex-end", "right"),
    };
    format!(
        "position:absolute;{position}box-sizing:border-box;padding:{padding}px;display:flex;flex-direction:column;\
justify-content:{justify};align-items:{items};text-align:{text_align};gap:{gap}px;"
    )
}

/// Inline CSS for one styled text element.
pub fn text_css(style: &TextStyle) -> String {
    let mut css = String::new();
    let _ = write!(
        css,
        "margin:0;font-family:{};font-weight:{};font-size:{}px;line-height:1.15;color:{};",
        style.font.css(),
        style.weight,
        style.size_px,
        style.color
    );
    if style.italic {
        css.push_str("font-style:italic;");
    }
    if style.uppercase {
        css.push_str("text-transform:uppercase;");
    }
    if style.tracking_em != 0.0 {
        let _ = write!(css, "letter-spacing:{}em;", style.tracking_em);
    }
    if let Some(bg) = style.background {
        let _ = write!(css, "background:{};", bg);
    }
    if let Some(b) = style.border {
        let prop = match b.side {
            BorderSide::All => "border",
            BorderSide::Top => "border-top",
            BorderSide::Bottom => "border-bottom",
            BorderSide::Left => "border-left",
        };
        let _ = write!(css, "{}:{}px solid {};", prop, b.width_px, b.color);
    }
    if let Some(shadow) = style.text_shadow {
        let _ = write!(css, "text-shadow:{};", shadow);
    }
    if let Some(shadow) = style.box_shadow {
        let _ = write!(css, "box-shadow:{};", shadow);
    }
    let [t, r, b, l] = style.padding_px;
    if style.padding_px != [0, 0, 0, 0] {
        let _ = write!(css, "padding:{}px {}px {}px {}px;", t, r, b, l);
    }
    if style.radius_px > 0 {
        let _ = write!(css, "border-radius:{}px;", style.radius_px);
    }
    if style.skew_deg != 0 {
        let _ = write!(css, "transform:skewX({}deg);", style.skew_deg);
    }
    if style.inline {
        css.push_str("display:inline-block;");
    }
    if style.pulse {
        css.push_str("animation:adgenius-pulse 2s cubic-bezier(0.4,0,0.6,1) infinite;");
    }
    css
}

fn role_tag(role: TextRole) -> (&'static str, &'static str) {
    match role {
        TextRole::Slogan => ("h2", "slogan"),
        TextRole::Tagline => ("div", "tagline"),
        TextRole::Badge => ("div", "badge"),
    }
}

/// Render one poster as an HTML fragment with a 3:4 frame.
pub fn render_html(poster: &Poster<'_>) -> String {
    let theme = theme(poster.style);
    let arrangement = super::layout::arrangement(poster.layout);
    let cmds = compose(poster);

    let mut html = String::new();
    let _ = write!(
        html,
        "<div class=\"poster layout-{} style-{}\" style=\"position:relative;width:100%;aspect-ratio:3/4;\
overflow:hidden;border-radius:16px;background:#e2e8f0;\">",
        poster.layout.name(),
        poster.style_slug()
    );

    let mut open_region: Option<Region> = None;
    for cmd in &cmds {
        match cmd {
            PaintCommand::Background { url } => {
                let _ = write!(
                    html,
                    "<img class=\"background\" src=\"{}\" alt=\"AI Background\" \
style=\"position:absolute;inset:0;width:100%;height:100%;object-fit:cover;\">",
                    escape_html(url)
                );
            }
            PaintCommand::Placeholder => {
                html.push_str(
                    "<div class=\"placeholder\" style=\"position:absolute;inset:0;display:flex;\
align-items:center;justify-content:center;color:#94a3b8;font-family:sans-serif;\">No image</div>",
                );
            }
            PaintCommand::Overlay(kind) => {
                let _ = write!(
                    html,
                    "<div class=\"overlay\" style=\"position:absolute;inset:0;{}\"></div>",
                    overlay_css(*kind)
                );
            }
            PaintCommand::Text {
                role,
                text,
                region,
                align,
                max_width_pct,
                margin_top_px,
            } => {
                if open_region != Some(*region) {
                    if open_region.is_some() {
                        html.push_str("</div>");
                    }
                    let gap = arrangement
                        .regions
                        .iter()
                        .find(|r| r.region == *region)
                        .map(|r| r.gap_px)
                        .unwrap_or(0);
                    let _ = write!(
                        html,
                        "<div class=\"region\" style=\"{}\">",
                        region_css(*region, *align, arrangement.padding_px, gap)
                    );
                    open_region = Some(*region);
                }
                let (tag, class) = role_tag(*role);
                let mut css = text_css(theme.text(*role));
                if let Some(pct) = max_width_pct {
                    let _ = write!(css, "max-width:{}%;", pct);
                }
                if *margin_top_px > 0 {
                    let _ = write!(css, "margin-top:{}px;", margin_top_px);
                }
                let _ = write!(
                    html,
                    "<{tag} class=\"{class}\" style=\"{css}\">{}</{tag}>",
                    escape_html(text)
                );
            }
        }
    }
    if open_region.is_some() {
        html.push_str("</div>");
    }
    html.push_str("</div>");
    html
}

/// Wrap poster fragments into a complete HTML page.
pub fn render_document(title: &str, posters: &[Poster<'_>]) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\
@keyframes adgenius-pulse{{50%{{opacity:.5}}}}\
body{{margin:0;padding:32px;background:#f8fafc;font-family:sans-serif;}}\
.grid{{display:grid;grid-template-columns:repeat(auto-fill,minmax(320px,1fr));gap:32px;}}\
</style>\n</head>\n<body>\n<h1>{}</h1>\n<div class=\"grid\">\n",
        escape_html(title),
        escape_html(title)
    );
    for poster in posters {
        html.push_str(&render_html(poster));
        html.push('\n');
    }
    html.push_str("</div>\n</body>\n</html>\n");
    html
}
