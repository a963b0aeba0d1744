//! Paint command list for one poster

use super::layout::{arrangement, Align, Overlay, Region};
use super::{Poster, TextRole};

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Cover the poster with the generated background
    Background { url: String },
    /// Neutral fill shown when no background exists
    Placeholder,
    Overlay(Overlay),
    Text {
        role: TextRole,
        text: String,
        region: Region,
        align: Align,
        max_width_pct: Option<u8>,
        margin_top_px: u16,
    },
}

/// Resolve a poster into paint commands: background, overlay, then text in
/// arrangement order. Roles without text (a missing highlight) are skipped.
pub fn compose(poster: &Poster<'_>) -> Vec<PaintCommand> {
    let arrangement = arrangement(poster.layout);
    let mut cmds = Vec::with_capacity(5);

    match poster.image_url {
        Some(url) => cmds.push(PaintCommand::Background { url: url.to_string() }),
        None => cmds.push(PaintCommand::Placeholder),
    }
    if arrangement.overlay != Overlay::None {
        cmds.push(PaintCommand::Overlay(arrangement.overlay));
    }

    for (spec, item) in arrangement.items() {
        let Some(text) = poster.text(item.role) else {
            continue;
        };
        cmds.push(PaintCommand::Text {
            role: item.role,
            text: text.to_string(),
            region: spec.region,
            align: spec.align,
            max_width_pct: item.max_width_pct,
            margin_top_px: item.margin_top_px,
        });
    }
    cmds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::Layout;
    use crate::{Content, SocialPost, VisualStyle};

    fn content(highlight: Option<&str>) -> Content {
        Content {
            social_post: SocialPost {
                title: "t".into(),
                description: "d".into(),
                solution: "s".into(),
                cta: "c".into(),
                hashtags: vec![],
            },
            slogan: "Sip green".into(),
            promo_tagline: "BOGO".into(),
            data_viz_value: highlight.map(str::to_string),
        }
    }

    #[test]
    fn missing_image_paints_placeholder() {
        let c = content(None);
        let poster = Poster::new("", &c, VisualStyle::Minimalist, Layout::Split);
        let cmds = compose(&poster);
        assert_eq!(cmds[0], PaintCommand::Placeholder);
        // split has no overlay
        assert!(matches!(cmds[1], PaintCommand::Text { role: TextRole::Slogan, .. }));
    }

    #[test]
    fn missing_highlight_omits_badge_in_every_layout() {
        let c = content(None);
        for layout in Layout::ALL {
            let cmds = compose(&Poster::new("data:image/png;base64,QQ==", &c, VisualStyle::Vibrant, layout));
            assert!(!cmds.iter().any(|c| matches!(c, PaintCommand::Text { role: TextRole::Badge, .. })));
            assert_eq!(cmds.iter().filter(|c| matches!(c, PaintCommand::Text { .. })).count(), 2);
        }
    }

    #[test]
    fn standard_puts_badge_before_tagline_at_bottom() {
        let c = content(Some("50% OFF"));
        let cmds = compose(&Poster::new("u", &c, VisualStyle::Urgent, Layout::Standard));
        let texts: Vec<(TextRole, Region)> = cmds
            .iter()
            .filter_map(|c| match c {
                PaintCommand::Text { role, region, .. } => Some((*role, *region)),
                _ => None,
            })
            .collect();
        assert_eq!(
            texts,
            vec![
                (TextRole::Slogan, Region::Top),
                (TextRole::Badge, Region::Bottom),
                (TextRole::Tagline, Region::Bottom),
            ]
        );
        assert_eq!(cmds[1], PaintCommand::Overlay(Overlay::TopBottomGradient));
    }
}
