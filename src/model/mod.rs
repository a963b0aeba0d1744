//! Campaign data model: strategy input, generated content and history records.

pub mod campaign;
pub mod content;
pub mod strategy;

pub use campaign::{now_millis, CampaignRecord, MAX_POSTERS};
pub use content::{Content, SocialPost};
pub use strategy::{Audience, Goal, ProductImage, Strategy, StrategyForm, VisualStyle, IMAGE_STORED_SENTINEL};
