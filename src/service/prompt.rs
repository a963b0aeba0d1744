//! Natural-language instructions sent to the generation backend.

use crate::Strategy;

/// Prompt for marketing copy using a pain-point / solution / call-to-action structure.
pub fn copy_prompt(strategy: &Strategy) -> String {
    let photo_note = if strategy.usable_image().is_some() {
        " and the attached product photo"
    } else {
        ""
    };
    format!(
        "Based on the following marketing strategy{photo_note}, generate high-converting copy using the AIDA model.
Goal: {goal}
Audience: {audience}
Product Keywords: {keywords}
Promotion: {promo}
Style: {style}

Instructions:
- Social Post should focus on customer pain points (description), how this product solves them (solution), and end with a clear call to action (cta).
- Hashtags should be plain words without the leading '#'.
- Slogan should be short, punchy, and reflect the value proposition.
- Promo Tagline should emphasize the urgency or benefit of the mechanism.
- Data Viz Value is optional: a short statistic or urgency marker (for example \"50% OFF\" or \"48H ONLY\").
- Return ONLY valid JSON matching the response schema.",
        goal = strategy.goal,
        audience = strategy.audience,
        keywords = strategy.keywords.join(", "),
        promo = strategy.promo_mechanism,
        style = strategy.style,
    )
}

/// Prompt for a text-free commercial poster background.
pub fn background_prompt(strategy: &Strategy) -> String {
    let scene = strategy
        .scene()
        .map(|s| format!("\nThe scene should be: {}.", s))
        .unwrap_or_default();
    let product = if strategy.usable_image().is_some() {
        "\nFeature the product from the attached photo naturally within the scene."
    } else {
        ""
    };
    format!(
        "A professional, clean, commercial-quality advertising background image for a {style} campaign.
Campaign Goal: {goal}.
Targeting: {audience}.{scene}{product}
The background should look like studio photography with perfect lighting.
Ensure large areas of negative space (empty areas) for placing text.
NO TEXT, NO LETTERS in the image. High resolution, aesthetic, professional.",
        style = strategy.style,
        goal = strategy.goal,
        audience = strategy.audience,
    )
}
