//! Typed records for the four recovered tables.
//!
//! Every value is kept as the trimmed text from the sheet. Columns missing
//! from a header (or cells missing from a short row) read as empty strings.
//! Serialized field names match the sheet's column names.

use serde::{Deserialize, Serialize};

use crate::columns;
use crate::fields::FieldMap;

/// A bank or issuer that owns card configurations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    #[serde(rename = "Partner_ID")]
    pub partner_id: String,
    #[serde(rename = "Partner_Name")]
    pub name: String,
    #[serde(rename = "Bank_Code")]
    pub bank_code: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Status")]
    pub status: String,
}

impl Partner {
    pub fn from_fields(fields: &FieldMap) -> Self {
        Self {
            partner_id: fields.text(columns::PARTNER_ID),
            name: fields.text(columns::PARTNER_NAME),
            bank_code: fields.text(columns::BANK_CODE),
            category: fields.text(columns::CATEGORY),
            status: fields.text(columns::STATUS),
        }
    }

    /// Returns true when the status reads "active" in any letter case.
    ///
    /// Any other value, including an empty cell, counts as inactive.
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case("active")
    }
}

/// How a card is drawn in the offers list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPresentation {
    #[serde(rename = "Config_ID")]
    pub config_id: String,
    #[serde(rename = "Partner_ID")]
    pub partner_id: String,
    #[serde(rename = "Card_Title")]
    pub title: String,
    #[serde(rename = "Card_Subtitle")]
    pub subtitle: String,
    #[serde(rename = "Logo_URL")]
    pub logo_url: String,
    #[serde(rename = "Badge_Text")]
    pub badge_text: String,
    #[serde(rename = "Bg_Color")]
    pub bg_color: String,
    #[serde(rename = "Text_Color")]
    pub text_color: String,
    #[serde(rename = "Benefit_1")]
    pub benefit_1: String,
    #[serde(rename = "Benefit_2")]
    pub benefit_2: String,
    #[serde(rename = "Benefit_3")]
    pub benefit_3: String,
    #[serde(rename = "CTA_Label_Card")]
    pub cta_label: String,
}

impl CardPresentation {
    pub fn from_fields(fields: &FieldMap) -> Self {
        Self {
            config_id: fields.text(columns::CONFIG_ID),
            partner_id: fields.text(columns::PARTNER_ID),
            title: fields.text(columns::CARD_TITLE),
            subtitle: fields.text(columns::CARD_SUBTITLE),
            logo_url: fields.text(columns::LOGO_URL),
            badge_text: fields.text(columns::BADGE_TEXT),
            bg_color: fields.text(columns::BG_COLOR),
            text_color: fields.text(columns::TEXT_COLOR),
            benefit_1: fields.text(columns::BENEFIT_1),
            benefit_2: fields.text(columns::BENEFIT_2),
            benefit_3: fields.text(columns::BENEFIT_3),
            cta_label: fields.text(columns::CTA_LABEL_CARD),
        }
    }

    /// Non-empty benefit lines, in column order.
    pub fn benefits(&self) -> Vec<&str> {
        [&self.benefit_1, &self.benefit_2, &self.benefit_3]
            .into_iter()
            .map(String::as_str)
            .filter(|benefit| !benefit.is_empty())
            .collect()
    }
}

/// Landing page content behind a card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDetail {
    #[serde(rename = "Config_ID")]
    pub config_id: String,
    #[serde(rename = "Hero_Banner_URL")]
    pub hero_banner_url: String,
    #[serde(rename = "Terms_Conditions")]
    pub terms: String,
    #[serde(rename = "Step_1")]
    pub step_1: String,
    #[serde(rename = "Step_2")]
    pub step_2: String,
    #[serde(rename = "CTA_Action_Type")]
    pub cta_action_type: String,
    #[serde(rename = "Final_URL")]
    pub final_url: String,
}

impl ProductDetail {
    pub fn from_fields(fields: &FieldMap) -> Self {
        Self {
            config_id: fields.text(columns::CONFIG_ID),
            hero_banner_url: fields.text(columns::HERO_BANNER_URL),
            terms: fields.text(columns::TERMS_CONDITIONS),
            step_1: fields.text(columns::STEP_1),
            step_2: fields.text(columns::STEP_2),
            cta_action_type: fields.text(columns::CTA_ACTION_TYPE),
            final_url: fields.text(columns::FINAL_URL),
        }
    }

    /// Non-empty onboarding steps, in column order.
    pub fn steps(&self) -> Vec<&str> {
        [&self.step_1, &self.step_2]
            .into_iter()
            .map(String::as_str)
            .filter(|step| !step.is_empty())
            .collect()
    }
}

/// Audience targeting for one card configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRule {
    #[serde(rename = "Rule_ID")]
    pub rule_id: String,
    #[serde(rename = "Config_ID")]
    pub config_id: String,
    #[serde(rename = "User_Segment")]
    pub segment: String,
    #[serde(rename = "Min_Age")]
    pub min_age: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Priority")]
    pub priority: String,
}

impl DisplayRule {
    pub fn from_fields(fields: &FieldMap) -> Self {
        Self {
            rule_id: fields.text(columns::RULE_ID),
            config_id: fields.text(columns::CONFIG_ID),
            segment: fields.text(columns::USER_SEGMENT),
            min_age: fields.text(columns::MIN_AGE),
            location: fields.text(columns::LOCATION),
            priority: fields.text(columns::PRIORITY),
        }
    }

    /// Priority as an integer; blank or unparseable text counts as `0`.
    pub fn priority_value(&self) -> i64 {
        parse_priority(&self.priority)
    }
}

/// Parses a priority cell, falling back to `0`.
pub fn parse_priority(value: &str) -> i64 {
    value.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partner_status_is_case_insensitive() {
        for status in ["ACTIVE", "Active", "active"] {
            let partner = Partner {
                status: status.to_string(),
                ..Partner::default()
            };
            assert!(partner.is_active(), "{status}");
        }
        for status in ["INACTIVE", "Inactive", "", "paused"] {
            let partner = Partner {
                status: status.to_string(),
                ..Partner::default()
            };
            assert!(!partner.is_active(), "{status}");
        }
    }

    #[test]
    fn benefits_skip_empty_cells() {
        let card = CardPresentation {
            benefit_1: "Free shipping".to_string(),
            benefit_3: "No annual fee".to_string(),
            ..CardPresentation::default()
        };
        assert_eq!(card.benefits(), vec!["Free shipping", "No annual fee"]);
    }

    #[test]
    fn priority_parse_falls_back_to_zero() {
        assert_eq!(parse_priority("10"), 10);
        assert_eq!(parse_priority(" 7 "), 7);
        assert_eq!(parse_priority("-3"), -3);
        assert_eq!(parse_priority(""), 0);
        assert_eq!(parse_priority("high"), 0);
        assert_eq!(parse_priority("2.5"), 0);
    }

    #[test]
    fn records_read_missing_columns_as_empty() {
        let fields: FieldMap = [("Rule_ID", "R1"), ("Config_ID", "C1")]
            .into_iter()
            .collect();
        let rule = DisplayRule::from_fields(&fields);
        assert_eq!(rule.rule_id, "R1");
        assert_eq!(rule.segment, "");
        assert_eq!(rule.priority_value(), 0);
    }
}
