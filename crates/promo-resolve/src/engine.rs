//! Joins and filters over one recovered snapshot.
//!
//! # Tie-break contract
//!
//! Ids are not validated for uniqueness. Whenever a lookup can match more
//! than one row (a partner by `Partner_ID`, a rule or product detail by
//! `Config_ID`), the first matching row in sheet order is used. The
//! helpers below are the only place lookups happen, so the rule holds for
//! every derived view.

use std::collections::HashSet;

use promo_model::{CardPresentation, DisplayRule, Partner, ProductDetail, RecoveredTables};

use crate::view::{
    CardPreview, DEFAULT_PRIORITY, DenormalizedRow, INACTIVE_STATUS, UNKNOWN_PARTNER,
    WILDCARD_SEGMENT,
};

/// Read-only queries over a [`RecoveredTables`] snapshot.
#[derive(Debug, Clone, Copy)]
pub struct ResolutionEngine<'a> {
    tables: &'a RecoveredTables,
}

impl<'a> ResolutionEngine<'a> {
    pub fn new(tables: &'a RecoveredTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &'a RecoveredTables {
        self.tables
    }

    /// First partner with the given id.
    pub fn partner(&self, partner_id: &str) -> Option<&'a Partner> {
        self.tables
            .partners
            .iter()
            .find(|partner| partner.partner_id == partner_id)
    }

    /// First card with the given id.
    pub fn card(&self, config_id: &str) -> Option<&'a CardPresentation> {
        self.tables
            .cards
            .iter()
            .find(|card| card.config_id == config_id)
    }

    /// All display rules for a card, in sheet order.
    pub fn rules_for(&self, config_id: &str) -> impl Iterator<Item = &'a DisplayRule> {
        self.tables
            .display_rules
            .iter()
            .filter(move |rule| rule.config_id == config_id)
    }

    /// The rule that supplies a card's priority and displayed segment.
    pub fn first_rule(&self, config_id: &str) -> Option<&'a DisplayRule> {
        self.rules_for(config_id).next()
    }

    /// First product detail for a card.
    ///
    /// The sheet intends one detail row per card but does not enforce it.
    pub fn product_detail(&self, config_id: &str) -> Option<&'a ProductDetail> {
        self.tables
            .product_details
            .iter()
            .find(|detail| detail.config_id == config_id)
    }

    /// Sort key for a card: its first rule's priority, `0` without rules.
    pub fn priority_of(&self, card: &CardPresentation) -> i64 {
        self.first_rule(&card.config_id)
            .map_or(0, DisplayRule::priority_value)
    }

    /// Every card joined with its partner and first rule, in sheet order.
    ///
    /// Never drops a card. Missing partners and rules fall back to the
    /// fixed sentinels in [`crate::view`].
    pub fn administrative_view(&self) -> Vec<DenormalizedRow> {
        self.tables
            .cards
            .iter()
            .map(|card| {
                let partner = self.partner(&card.partner_id);
                let rule = self.first_rule(&card.config_id);
                DenormalizedRow {
                    card: card.clone(),
                    partner_name: partner
                        .map_or(UNKNOWN_PARTNER, |p| p.name.as_str())
                        .to_string(),
                    status: partner
                        .map_or(INACTIVE_STATUS, |p| p.status.as_str())
                        .to_string(),
                    priority: rule
                        .map_or(DEFAULT_PRIORITY, |r| r.priority.as_str())
                        .to_string(),
                    segment: rule
                        .map_or(WILDCARD_SEGMENT, |r| r.segment.as_str())
                        .to_string(),
                }
            })
            .collect()
    }

    /// Cards a viewer in `segment` may see, highest priority first.
    ///
    /// A card passes when its partner is active and either it has no
    /// display rules or one of its rules targets `"All"` or exactly
    /// `segment`. Segment comparison is case-sensitive, unlike the status
    /// check. Equal priorities keep sheet order.
    pub fn eligible_cards(&self, segment: &str) -> Vec<&'a CardPresentation> {
        let active: HashSet<&str> = self
            .tables
            .partners
            .iter()
            .filter(|partner| partner.is_active())
            .map(|partner| partner.partner_id.as_str())
            .collect();

        let mut eligible: Vec<(i64, &'a CardPresentation)> = self
            .tables
            .cards
            .iter()
            .filter(|card| active.contains(card.partner_id.as_str()))
            .filter(|card| self.targets_segment(card, segment))
            .map(|card| (self.priority_of(card), card))
            .collect();

        // sort_by is stable
        eligible.sort_by(|a, b| b.0.cmp(&a.0));

        tracing::debug!(
            segment,
            cards = self.tables.cards.len(),
            eligible = eligible.len(),
            "resolved eligible cards"
        );
        eligible.into_iter().map(|(_, card)| card).collect()
    }

    /// Returns true if the card has no rules or a rule matching `segment`.
    fn targets_segment(&self, card: &CardPresentation, segment: &str) -> bool {
        let mut rules = self.rules_for(&card.config_id).peekable();
        if rules.peek().is_none() {
            return true;
        }
        rules.any(|rule| rule.segment == WILDCARD_SEGMENT || rule.segment == segment)
    }

    /// Card, partner, benefits, and product detail for one configuration.
    pub fn card_preview(&self, config_id: &str) -> Option<CardPreview<'a>> {
        let card = self.card(config_id)?;
        Some(CardPreview {
            card,
            partner: self.partner(&card.partner_id),
            benefits: card.benefits(),
            detail: self.product_detail(config_id),
            rules: self.rules_for(config_id).collect(),
            priority: self.priority_of(card),
        })
    }
}
