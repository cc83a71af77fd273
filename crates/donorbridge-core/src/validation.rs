//! Conformance predicates for donor and donation records.
//!
//! Validation failure is a boolean result for the caller to act on, not an
//! error. The typed forms check only semantics (the type system already
//! guarantees field presence); the row forms guard externally supplied
//! loose data before persistence and re-check presence.

use serde_json::{Map, Value};

use crate::records::{Donation, Donor, DonorType};

const DONOR_REQUIRED_FIELDS: [&str; 5] =
    ["donor_id", "first_name", "last_name", "email", "donor_type"];

const DONATION_REQUIRED_FIELDS: [&str; 4] =
    ["donation_id", "donor_id", "amount", "donation_date"];

/// Semantic validity of a typed donor record.
pub fn validate_donor(donor: &Donor) -> bool {
    donor.email.contains('@')
}

/// Semantic validity of a typed donation record. A missing `campaign_id`
/// is valid ("gift not tied to a campaign"); a present one must be > 0.
pub fn validate_donation(donation: &Donation) -> bool {
    if donation.amount <= 0.0 {
        return false;
    }
    match donation.campaign_id {
        Some(campaign_id) => campaign_id > 0,
        None => true,
    }
}

/// Validity of an externally supplied donor row.
pub fn validate_donor_row(row: &Map<String, Value>) -> bool {
    if !has_fields(row, &DONOR_REQUIRED_FIELDS) {
        return false;
    }
    let Some(email) = row.get("email").and_then(Value::as_str) else {
        return false;
    };
    if !email.contains('@') {
        return false;
    }
    row.get("donor_type")
        .and_then(Value::as_str)
        .and_then(DonorType::parse_label)
        .is_some()
}

/// Validity of an externally supplied donation row. An absent or null
/// `campaign_id` passes; a present one must be a positive integer.
pub fn validate_donation_row(row: &Map<String, Value>) -> bool {
    if !has_fields(row, &DONATION_REQUIRED_FIELDS) {
        return false;
    }
    let Some(amount) = row.get("amount").and_then(Value::as_f64) else {
        return false;
    };
    if amount <= 0.0 {
        return false;
    }
    match row.get("campaign_id") {
        None | Some(Value::Null) => true,
        Some(value) => value.as_i64().map(|id| id > 0).unwrap_or(false),
    }
}

fn has_fields(row: &Map<String, Value>, fields: &[&str]) -> bool {
    fields.iter().all(|field| row.contains_key(*field))
}
