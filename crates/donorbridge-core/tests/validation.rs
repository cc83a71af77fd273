use serde_json::{Map, Value, json};

use donorbridge_core::{
    Donation, Donor, DonorType, PaymentMethod, validate_donation, validate_donation_row,
    validate_donor, validate_donor_row,
};

fn donation(amount: f64, campaign_id: Option<i64>) -> Donation {
    Donation {
        donation_id: 1,
        donor_id: 1,
        campaign_id,
        amount,
        donation_date: chrono::NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date"),
        payment_method: PaymentMethod::Check,
        is_recurring: false,
    }
}

fn donor(email: &str) -> Donor {
    Donor {
        donor_id: 1,
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: email.to_string(),
        phone: "555-0100".to_string(),
        address: "12 Main St".to_string(),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        zip_code: "62704".to_string(),
        created_date: chrono::NaiveDate::from_ymd_opt(2022, 1, 10).expect("valid date"),
        donor_type: DonorType::Individual,
    }
}

fn as_map(value: Value) -> Map<String, Value> {
    value.as_object().expect("json object").clone()
}

#[test]
fn typed_donor_requires_an_at_sign_in_the_email() {
    assert!(validate_donor(&donor("john@example.com")));
    assert!(!validate_donor(&donor("notanemail")));
    assert!(!validate_donor(&donor("")));
}

#[test]
fn typed_donation_boundaries() {
    assert!(validate_donation(&donation(10.0, Some(3))));
    assert!(!validate_donation(&donation(0.0, Some(3))));
    assert!(!validate_donation(&donation(-100.0, Some(3))));
    assert!(!validate_donation(&donation(50.0, Some(0))));
    // A gift not tied to a campaign is valid.
    assert!(validate_donation(&donation(50.0, None)));
}

#[test]
fn donor_row_requires_all_fields() {
    let row = as_map(json!({"donor_id": 1, "first_name": "John"}));
    assert!(!validate_donor_row(&row));
}

#[test]
fn donor_row_accepts_complete_valid_record() {
    let row = as_map(json!({
        "donor_id": 1,
        "first_name": "John",
        "last_name": "Doe",
        "email": "john@example.com",
        "donor_type": "Individual",
    }));
    assert!(validate_donor_row(&row));
}

#[test]
fn donor_row_rejects_email_without_at_sign() {
    let row = as_map(json!({
        "donor_id": 1,
        "first_name": "John",
        "last_name": "Doe",
        "email": "notanemail",
        "donor_type": "Individual",
    }));
    assert!(!validate_donor_row(&row));
}

#[test]
fn donor_row_rejects_unknown_donor_type() {
    let row = as_map(json!({
        "donor_id": 1,
        "first_name": "John",
        "last_name": "Doe",
        "email": "john@example.com",
        "donor_type": "InvalidType",
    }));
    assert!(!validate_donor_row(&row));
}

#[test]
fn donation_row_requires_all_fields() {
    let row = as_map(json!({"donation_id": 1, "donor_id": 1}));
    assert!(!validate_donation_row(&row));
}

#[test]
fn donation_row_boundaries_on_amount() {
    let mut row = as_map(json!({
        "donation_id": 1,
        "donor_id": 1,
        "amount": 150.0,
        "donation_date": "2024-03-15",
    }));
    assert!(validate_donation_row(&row));

    row.insert("amount".to_string(), json!(0));
    assert!(!validate_donation_row(&row));

    row.insert("amount".to_string(), json!(-100));
    assert!(!validate_donation_row(&row));
}

#[test]
fn donation_row_campaign_id_null_is_valid_but_zero_is_not() {
    let mut row = as_map(json!({
        "donation_id": 1,
        "donor_id": 1,
        "amount": 150.0,
        "donation_date": "2024-03-15",
        "campaign_id": null,
    }));
    assert!(validate_donation_row(&row));

    row.insert("campaign_id".to_string(), json!(4));
    assert!(validate_donation_row(&row));

    row.insert("campaign_id".to_string(), json!(0));
    assert!(!validate_donation_row(&row));
}
