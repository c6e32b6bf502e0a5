//! Derived rows handed to the view layer.

use serde::Serialize;

use promo_model::{CardPresentation, DisplayRule, Partner, ProductDetail};

/// Partner name shown when a card's partner is not in the sheet.
pub const UNKNOWN_PARTNER: &str = "Unknown";

/// Status shown when a card's partner is not in the sheet.
pub const INACTIVE_STATUS: &str = "INACTIVE";

/// Priority shown when a card has no display rule.
pub const DEFAULT_PRIORITY: &str = "0";

/// Segment that matches every viewer.
pub const WILDCARD_SEGMENT: &str = "All";

/// One card joined with its partner and first display rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DenormalizedRow {
    #[serde(flatten)]
    pub card: CardPresentation,
    #[serde(rename = "Partner_Name")]
    pub partner_name: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Priority")]
    pub priority: String,
    #[serde(rename = "User_Segment")]
    pub segment: String,
}

/// Everything the preview screens need for one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardPreview<'a> {
    pub card: &'a CardPresentation,
    pub partner: Option<&'a Partner>,
    pub benefits: Vec<&'a str>,
    pub detail: Option<&'a ProductDetail>,
    pub rules: Vec<&'a DisplayRule>,
    pub priority: i64,
}
