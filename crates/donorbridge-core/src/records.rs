use std::fmt;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Category of a donor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub enum DonorType {
    Individual,
    Foundation,
    Business,
    Other,
}

impl DonorType {
    pub const ALL: [DonorType; 4] = [
        DonorType::Individual,
        DonorType::Foundation,
        DonorType::Business,
        DonorType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DonorType::Individual => "Individual",
            DonorType::Foundation => "Foundation",
            DonorType::Business => "Business",
            DonorType::Other => "Other",
        }
    }

    /// Parse a display label back into the enum. Unknown labels yield `None`.
    pub fn parse_label(label: &str) -> Option<DonorType> {
        Self::ALL.iter().copied().find(|dt| dt.label() == label)
    }
}

impl fmt::Display for DonorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outreach channel of a campaign.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub enum CampaignType {
    #[serde(rename = "Direct Mail")]
    DirectMail,
    Email,
    Event,
    #[serde(rename = "Social Media")]
    SocialMedia,
}

impl CampaignType {
    pub const ALL: [CampaignType; 4] = [
        CampaignType::DirectMail,
        CampaignType::Email,
        CampaignType::Event,
        CampaignType::SocialMedia,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CampaignType::DirectMail => "Direct Mail",
            CampaignType::Email => "Email",
            CampaignType::Event => "Event",
            CampaignType::SocialMedia => "Social Media",
        }
    }
}

impl fmt::Display for CampaignType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Payment method of a donation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub enum PaymentMethod {
    #[serde(rename = "Credit Card")]
    CreditCard,
    Check,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::CreditCard,
        PaymentMethod::Check,
        PaymentMethod::BankTransfer,
        PaymentMethod::Cash,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::Check => "Check",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::Cash => "Cash",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A donor profile. Built once by a factory call and never mutated;
/// regeneration produces a fresh, independent record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Donor {
    pub donor_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub created_date: NaiveDate,
    pub donor_type: DonorType,
}

/// A fundraising campaign.
///
/// `start_date` and `end_date` are drawn from disjoint windows by the
/// factory; the windows are independent, so `start_date > end_date` is
/// possible and intentionally not corrected (legacy behavior).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Campaign {
    pub campaign_id: i64,
    pub campaign_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub goal_amount: i64,
    pub campaign_type: CampaignType,
}

/// A single gift from a donor.
///
/// `campaign_id` is `None` for gifts not tied to a campaign; the absence
/// must survive end-to-end and is never defaulted downstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Donation {
    pub donation_id: i64,
    pub donor_id: i64,
    pub campaign_id: Option<i64>,
    pub amount: f64,
    pub donation_date: NaiveDate,
    pub payment_method: PaymentMethod,
    pub is_recurring: bool,
}

/// A fundraiser who owns a portfolio of donors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct PortfolioHolder {
    pub portfolio_holder_id: i64,
    pub name: String,
    pub email: String,
}

/// Link between a donor and the fundraiser managing the relationship.
/// Each donor appears in at most one assignment across the whole set;
/// the assigner owns that invariant, not this record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct PortfolioAssignment {
    pub assignment_id: i64,
    pub donor_id: i64,
    pub portfolio_holder_id: i64,
    pub assigned_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_labels_round_trip_through_serde() {
        let json = serde_json::to_string(&CampaignType::DirectMail).expect("serialize");
        assert_eq!(json, "\"Direct Mail\"");
        let parsed: PaymentMethod =
            serde_json::from_str("\"Bank Transfer\"").expect("deserialize");
        assert_eq!(parsed, PaymentMethod::BankTransfer);
    }

    #[test]
    fn donor_type_parses_only_known_labels() {
        assert_eq!(DonorType::parse_label("Foundation"), Some(DonorType::Foundation));
        assert_eq!(DonorType::parse_label("InvalidType"), None);
    }
}
