use serde::{Deserialize, Serialize};

use crate::fields::FieldMap;
use crate::records::{CardPresentation, DisplayRule, Partner, ProductDetail};
use crate::table::TableKind;

/// The four tables recovered from one sheet snapshot.
///
/// Each collection keeps the order rows appeared in the sheet. That order is
/// the tie-break for every first-match lookup and for priority sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveredTables {
    pub partners: Vec<Partner>,
    pub cards: Vec<CardPresentation>,
    pub product_details: Vec<ProductDetail>,
    pub display_rules: Vec<DisplayRule>,
}

impl RecoveredTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a data row to the collection for `kind`.
    pub fn push(&mut self, kind: TableKind, fields: &FieldMap) {
        match kind {
            TableKind::Partner => self.partners.push(Partner::from_fields(fields)),
            TableKind::CardPresentation => {
                self.cards.push(CardPresentation::from_fields(fields));
            }
            TableKind::ProductDetail => {
                self.product_details
                    .push(ProductDetail::from_fields(fields));
            }
            TableKind::DisplayRule => {
                self.display_rules.push(DisplayRule::from_fields(fields));
            }
        }
    }

    /// Number of records recovered for `kind`.
    pub fn len(&self, kind: TableKind) -> usize {
        match kind {
            TableKind::Partner => self.partners.len(),
            TableKind::CardPresentation => self.cards.len(),
            TableKind::ProductDetail => self.product_details.len(),
            TableKind::DisplayRule => self.display_rules.len(),
        }
    }

    pub fn total_records(&self) -> usize {
        TableKind::DETECTION_ORDER
            .iter()
            .map(|kind| self.len(*kind))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_records() == 0
    }
}
