//! Campaign strategy: what the user asks for.

use crate::{Error, Result};
use base64::Engine as Base64Engine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel kept in history in place of the product photo bytes.
pub const IMAGE_STORED_SENTINEL: &str = "(Image Stored)";

/// Marketing goal of a campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum Goal {
    #[default]
    #[serde(rename = "New Product Launch")]
    NewProductLaunch,
    #[serde(rename = "Stock Clearance")]
    StockClearance,
    #[serde(rename = "Festival Promotion")]
    FestivalPromotion,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::NewProductLaunch, Goal::StockClearance, Goal::FestivalPromotion];

    pub fn label(self) -> &'static str {
        match self {
            Goal::NewProductLaunch => "New Product Launch",
            Goal::StockClearance => "Stock Clearance",
            Goal::FestivalPromotion => "Festival Promotion",
        }
    }
}

/// Target audience of a campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum Audience {
    #[default]
    #[serde(rename = "Office Workers")]
    OfficeWorker,
    #[serde(rename = "Home Makers")]
    HomeMaker,
    #[serde(rename = "Students")]
    Student,
    #[serde(rename = "Entrepreneurs")]
    Entrepreneur,
}

impl Audience {
    pub const ALL: [Audience; 4] = [
        Audience::OfficeWorker,
        Audience::HomeMaker,
        Audience::Student,
        Audience::Entrepreneur,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Audience::OfficeWorker => "Office Workers",
            Audience::HomeMaker => "Home Makers",
            Audience::Student => "Students",
            Audience::Entrepreneur => "Entrepreneurs",
        }
    }
}

/// Named typographic/color theme applied to poster text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum VisualStyle {
    #[serde(rename = "Minimalist")]
    Minimalist,
    #[default]
    #[serde(rename = "Energetic/Vibrant")]
    Vibrant,
    #[serde(rename = "Luxury/Premium")]
    Luxury,
    #[serde(rename = "Urgent/Bold")]
    Urgent,
    #[serde(rename = "Retro/Vintage")]
    Retro,
    #[serde(rename = "Cyberpunk/Neon")]
    Cyberpunk,
    #[serde(rename = "Professional/Corporate")]
    Corporate,
}

impl VisualStyle {
    pub const ALL: [VisualStyle; 7] = [
        VisualStyle::Minimalist,
        VisualStyle::Vibrant,
        VisualStyle::Luxury,
        VisualStyle::Urgent,
        VisualStyle::Retro,
        VisualStyle::Cyberpunk,
        VisualStyle::Corporate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            VisualStyle::Minimalist => "Minimalist",
            VisualStyle::Vibrant => "Energetic/Vibrant",
            VisualStyle::Luxury => "Luxury/Premium",
            VisualStyle::Urgent => "Urgent/Bold",
            VisualStyle::Retro => "Retro/Vintage",
            VisualStyle::Cyberpunk => "Cyberpunk/Neon",
            VisualStyle::Corporate => "Professional/Corporate",
        }
    }
}

macro_rules! display_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_label!(Goal, Audience, VisualStyle);

/// Product photo attached to a strategy.
///
/// `Inline` holds base64 data, either raw or as a `data:` URL. `Stored`
/// marks that a photo existed but was not retained; it only appears in
/// persisted history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductImage {
    Inline(String),
    Stored,
}

impl ProductImage {
    /// Raw base64 payload, or `None` for the stored sentinel.
    pub fn payload(&self) -> Option<&str> {
        match self {
            ProductImage::Inline(data) => {
                let raw = match data.split_once(',') {
                    Some((_, rest)) => rest,
                    None => data.as_str(),
                };
                Some(raw.trim())
            }
            ProductImage::Stored => None,
        }
    }

    /// Decode the payload, failing for the sentinel or malformed base64.
    pub fn decode(&self) -> Result<Vec<u8>> {
        let payload = self
            .payload()
            .ok_or_else(|| Error::InvalidStrategy("product image was not retained".into()))?;
        base64::engine::general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| Error::InvalidStrategy(format!("product image is not valid base64: {}", e)))
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        ProductImage::Inline(base64::engine::general_purpose::STANDARD.encode(bytes))
    }
}

impl From<String> for ProductImage {
    fn from(value: String) -> Self {
        if value == IMAGE_STORED_SENTINEL {
            ProductImage::Stored
        } else {
            ProductImage::Inline(value)
        }
    }
}

impl From<ProductImage> for String {
    fn from(value: ProductImage) -> Self {
        match value {
            ProductImage::Inline(data) => data,
            ProductImage::Stored => IMAGE_STORED_SENTINEL.to_string(),
        }
    }
}

/// Immutable description of one campaign request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    pub goal: Goal,
    pub audience: Audience,
    pub keywords: Vec<String>,
    pub promo_mechanism: String,
    pub style: VisualStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_image: Option<ProductImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene_preference: Option<String>,
}

impl Strategy {
    /// Split a comma-separated keyword field, trimming and dropping empties.
    pub fn parse_keywords(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Product image usable as model input (present and not the sentinel).
    pub fn usable_image(&self) -> Option<&ProductImage> {
        self.product_image
            .as_ref()
            .filter(|img| matches!(img, ProductImage::Inline(_)))
    }

    /// Copy suitable for persistence: a present photo becomes the sentinel.
    pub fn redacted(&self) -> Strategy {
        Strategy {
            product_image: self.product_image.as_ref().map(|_| ProductImage::Stored),
            ..self.clone()
        }
    }

    pub fn scene(&self) -> Option<&str> {
        self.scene_preference
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Mutable draft of the strategy form.
#[derive(Debug, Clone, Default)]
pub struct StrategyForm {
    pub goal: Goal,
    pub audience: Audience,
    pub keywords: String,
    pub promo: String,
    pub style: VisualStyle,
    pub scene: String,
    pub product_image: Option<ProductImage>,
}

impl StrategyForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the draft and produce a strategy.
    pub fn submit(&self) -> Result<Strategy> {
        let keywords = Strategy::parse_keywords(&self.keywords);
        if keywords.is_empty() {
            return Err(Error::InvalidStrategy("at least one product keyword is required".into()));
        }
        let promo_mechanism = self.promo.trim().to_string();
        if promo_mechanism.is_empty() {
            return Err(Error::InvalidStrategy("a promotion is required".into()));
        }
        if let Some(img) = &self.product_image {
            if matches!(img, ProductImage::Stored) {
                return Err(Error::InvalidStrategy("product image must carry image data".into()));
            }
            img.decode()?;
        }
        let scene = self.scene.trim();

        Ok(Strategy {
            goal: self.goal,
            audience: self.audience,
            keywords,
            promo_mechanism,
            style: self.style,
            product_image: self.product_image.clone(),
            scene_preference: (!scene.is_empty()).then(|| scene.to_string()),
        })
    }
}
