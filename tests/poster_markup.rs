mod common;

use adgenius::rendering::{render_document, render_html, Layout, Poster};
use adgenius::VisualStyle;
use common::{content, image};
use scraper::{Html, Selector};

fn select<'a>(doc: &'a Html, css: &str) -> Vec<scraper::ElementRef<'a>> {
    let sel = Selector::parse(css).unwrap();
    doc.select(&sel).collect()
}

#[test]
fn every_layout_and_style_renders_all_text() {
    let c = content("Sip green");
    let url = image("QUJD");
    for layout in Layout::ALL {
        for style in VisualStyle::ALL {
            let doc = Html::parse_fragment(&render_html(&Poster::new(&url, &c, style, layout)));
            let root = select(&doc, "div.poster");
            assert_eq!(root.len(), 1, "{} / {}", layout, style);
            let class = root[0].value().attr("class").unwrap();
            assert!(class.contains(&format!("layout-{}", layout.name())));

            let slogan = select(&doc, "h2.slogan");
            assert_eq!(slogan[0].text().collect::<String>(), "Sip green");
            assert_eq!(select(&doc, "div.tagline").len(), 1);
            assert_eq!(select(&doc, "div.badge")[0].text().collect::<String>(), "2x");
            assert_eq!(select(&doc, "img.background")[0].value().attr("src"), Some(url.as_str()));
        }
    }
}

#[test]
fn missing_image_shows_placeholder() {
    let c = content("Sip green");
    let doc = Html::parse_fragment(&render_html(&Poster::new("", &c, VisualStyle::Luxury, Layout::Centered)));
    assert!(select(&doc, "img.background").is_empty());
    let placeholder = select(&doc, "div.placeholder");
    assert_eq!(placeholder[0].text().collect::<String>(), "No image");
}

#[test]
fn badge_is_omitted_without_highlight() {
    let mut c = content("Sip green");
    c.data_viz_value = None;
    let url = image("QUJD");
    for layout in Layout::ALL {
        let doc = Html::parse_fragment(&render_html(&Poster::new(&url, &c, VisualStyle::Urgent, layout)));
        assert!(select(&doc, "div.badge").is_empty(), "{}", layout);
        assert_eq!(select(&doc, "div.tagline").len(), 1);
    }
}

#[test]
fn generated_text_is_escaped() {
    let mut c = content("<script>alert(1)</script> & more");
    c.promo_tagline = "\"quoted\"".into();
    let html = render_html(&Poster::new(&image("QUJD"), &c, VisualStyle::Retro, Layout::Bottom));
    assert!(!html.contains("<script>"));

    let doc = Html::parse_fragment(&html);
    assert!(select(&doc, "script").is_empty());
    assert_eq!(
        select(&doc, "h2.slogan")[0].text().collect::<String>(),
        "<script>alert(1)</script> & more"
    );
    assert_eq!(select(&doc, "div.tagline")[0].text().collect::<String>(), "\"quoted\"");
}

#[test]
fn split_layout_limits_slogan_width_and_has_no_overlay() {
    let c = content("Sip green");
    let url = image("QUJD");
    let doc = Html::parse_fragment(&render_html(&Poster::new(&url, &c, VisualStyle::Cyberpunk, Layout::Split)));
    let style = select(&doc, "h2.slogan")[0].value().attr("style").unwrap();
    assert!(style.contains("max-width:80%;"));
    assert!(select(&doc, "div.overlay").is_empty());
    assert_eq!(select(&doc, "div.region").len(), 2);

    let doc = Html::parse_fragment(&render_html(&Poster::new(&url, &c, VisualStyle::Cyberpunk, Layout::Centered)));
    assert_eq!(select(&doc, "div.overlay").len(), 1);
    assert_eq!(select(&doc, "div.region").len(), 1);
}

#[test]
fn document_wraps_posters_in_a_grid() {
    let c = content("Sip green");
    let a = image("QUJD");
    let b = image("REVG");
    let posters = [
        Poster::new(&a, &c, VisualStyle::Corporate, Layout::Standard),
        Poster::new(&b, &c, VisualStyle::Corporate, Layout::Standard),
    ];
    let doc = Html::parse_document(&render_document("Launch <1>", &posters));
    assert_eq!(select(&doc, "title")[0].text().collect::<String>(), "Launch <1>");
    assert_eq!(select(&doc, "div.grid > div.poster").len(), 2);
}

#[test]
fn region_padding_follows_layout_not_style() {
    let c = content("Sip green");
    let url = image("QUJD");
    for style in VisualStyle::ALL {
        for (layout, padding) in [(Layout::Standard, "padding:32px;"), (Layout::Split, "padding:24px;")] {
            let doc = Html::parse_fragment(&render_html(&Poster::new(&url, &c, style, layout)));
            for region in select(&doc, "div.region") {
                let css = region.value().attr("style").unwrap();
                assert!(css.contains(padding), "{} / {}: {}", layout, style, css);
            }
        }
    }
}
