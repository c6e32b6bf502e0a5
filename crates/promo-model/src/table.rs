use serde::{Deserialize, Serialize};
use std::fmt;

use crate::columns;

/// The four tables stacked in one published sheet.
///
/// Header rows are told apart by their first cell (the key column) together
/// with a signature column that appears anywhere in the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    Partner,
    CardPresentation,
    ProductDetail,
    DisplayRule,
}

impl TableKind {
    /// Order in which header signatures are checked.
    ///
    /// `CardPresentation` and `ProductDetail` share the `Config_ID` key column,
    /// so `Card_Title` must be tried before `Hero_Banner_URL`.
    pub const DETECTION_ORDER: [TableKind; 4] = [
        TableKind::Partner,
        TableKind::CardPresentation,
        TableKind::ProductDetail,
        TableKind::DisplayRule,
    ];

    /// Column name expected in the first cell of this table's header row.
    pub const fn key_column(self) -> &'static str {
        match self {
            TableKind::Partner => columns::PARTNER_ID,
            TableKind::CardPresentation | TableKind::ProductDetail => columns::CONFIG_ID,
            TableKind::DisplayRule => columns::RULE_ID,
        }
    }

    /// Column name whose presence disambiguates this table's header row.
    pub const fn signature_column(self) -> &'static str {
        match self {
            TableKind::Partner => columns::PARTNER_NAME,
            TableKind::CardPresentation => columns::CARD_TITLE,
            TableKind::ProductDetail => columns::HERO_BANNER_URL,
            TableKind::DisplayRule => columns::USER_SEGMENT,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TableKind::Partner => "Partners",
            TableKind::CardPresentation => "Card Presentation",
            TableKind::ProductDetail => "Product Details",
            TableKind::DisplayRule => "Display Rules",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
