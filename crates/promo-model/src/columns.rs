//! Column names used by the published sheet.

// Partners
pub const PARTNER_ID: &str = "Partner_ID";
pub const PARTNER_NAME: &str = "Partner_Name";
pub const BANK_CODE: &str = "Bank_Code";
pub const CATEGORY: &str = "Category";
pub const STATUS: &str = "Status";

// Card presentation
pub const CONFIG_ID: &str = "Config_ID";
pub const CARD_TITLE: &str = "Card_Title";
pub const CARD_SUBTITLE: &str = "Card_Subtitle";
pub const LOGO_URL: &str = "Logo_URL";
pub const BADGE_TEXT: &str = "Badge_Text";
pub const BG_COLOR: &str = "Bg_Color";
pub const TEXT_COLOR: &str = "Text_Color";
pub const BENEFIT_1: &str = "Benefit_1";
pub const BENEFIT_2: &str = "Benefit_2";
pub const BENEFIT_3: &str = "Benefit_3";
pub const CTA_LABEL_CARD: &str = "CTA_Label_Card";

// Product details
pub const HERO_BANNER_URL: &str = "Hero_Banner_URL";
pub const TERMS_CONDITIONS: &str = "Terms_Conditions";
pub const STEP_1: &str = "Step_1";
pub const STEP_2: &str = "Step_2";
pub const CTA_ACTION_TYPE: &str = "CTA_Action_Type";
pub const FINAL_URL: &str = "Final_URL";

// Display rules
pub const RULE_ID: &str = "Rule_ID";
pub const USER_SEGMENT: &str = "User_Segment";
pub const MIN_AGE: &str = "Min_Age";
pub const LOCATION: &str = "Location";
pub const PRIORITY: &str = "Priority";
