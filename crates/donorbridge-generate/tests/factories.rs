use chrono::NaiveDate;

use donorbridge_generate::{
    generate_campaign, generate_donation, generate_donor, generate_portfolio_assignment,
    generate_portfolio_holder,
};

#[test]
fn donor_is_reproducible_with_the_same_seed() {
    let a = generate_donor(1, Some(42));
    let b = generate_donor(1, Some(42));
    assert_eq!(a.first_name, b.first_name);
    assert_eq!(a.email, b.email);
    assert_eq!(a, b);
}

#[test]
fn interleaved_seeded_calls_do_not_contaminate_each_other() {
    let a1 = generate_donor(1, Some(42));
    let _noise = generate_donor(2, Some(7));
    let a2 = generate_donor(1, Some(42));
    assert_eq!(a1, a2);
}

#[test]
fn different_seeds_produce_different_donors() {
    let a = generate_donor(1, Some(42));
    let b = generate_donor(1, Some(43));
    assert_ne!(a, b);
}

#[test]
fn donor_id_matches_input_and_email_is_well_formed() {
    let donor = generate_donor(12345, Some(1));
    assert_eq!(donor.donor_id, 12345);
    assert!(donor.email.contains('@'));
    assert!(!donor.first_name.is_empty());
    assert!(!donor.zip_code.is_empty());
}

#[test]
fn donor_created_date_falls_in_the_trailing_window() {
    let today = chrono::Local::now().date_naive();
    let floor = today - chrono::Months::new(60);
    for seed in 0..50 {
        let donor = generate_donor(1, Some(seed));
        assert!(donor.created_date >= floor && donor.created_date <= today);
    }
}

#[test]
fn campaign_keeps_caller_supplied_name_and_draws_goal_in_bounds() {
    for seed in 0..100 {
        let campaign = generate_campaign(1, "Spring Gala", Some(seed));
        assert_eq!(campaign.campaign_name, "Spring Gala");
        assert!(campaign.goal_amount >= 10_000 && campaign.goal_amount <= 100_000);
    }
}

#[test]
fn campaign_is_reproducible_with_the_same_seed() {
    let a = generate_campaign(3, "Capital Campaign", Some(42));
    let b = generate_campaign(3, "Capital Campaign", Some(42));
    assert_eq!(a, b);
}

#[test]
fn donation_amount_stays_in_bounds_and_is_rounded_to_cents() {
    for seed in 0..200 {
        let donation = generate_donation(1, 1, None, false, Some(seed));
        assert!(donation.amount >= 10.0 && donation.amount <= 5000.0);
        let cents = donation.amount * 100.0;
        assert!((cents - cents.round()).abs() < 1e-6);
    }
}

#[test]
fn donation_is_reproducible_with_the_same_seed() {
    let a = generate_donation(1, 1, None, false, Some(42));
    let b = generate_donation(1, 1, None, false, Some(42));
    assert_eq!(a, b);
}

#[test]
fn supplied_campaign_id_is_kept() {
    let donation = generate_donation(999, 888, Some(5), false, Some(1));
    assert_eq!(donation.donation_id, 999);
    assert_eq!(donation.donor_id, 888);
    assert_eq!(donation.campaign_id, Some(5));
}

#[test]
fn omitted_campaign_is_drawn_from_the_default_range() {
    for seed in 0..50 {
        let donation = generate_donation(1, 1, None, false, Some(seed));
        let campaign_id = donation.campaign_id.expect("campaign assigned");
        assert!((1..=10).contains(&campaign_id));
    }
}

#[test]
fn allow_no_campaign_leaves_campaign_absent() {
    let donation = generate_donation(1, 1, None, true, Some(42));
    assert_eq!(donation.campaign_id, None);
    assert!(donorbridge_core::validate_donation(&donation));
}

#[test]
fn holder_keeps_explicit_name_and_derives_email() {
    let holder = generate_portfolio_holder(1, Some("Jane Doe"), Some(42));
    assert_eq!(holder.portfolio_holder_id, 1);
    assert_eq!(holder.name, "Jane Doe");
    assert_eq!(holder.email, "janedoe@example.com");
}

#[test]
fn holder_name_is_generated_as_first_last_when_absent() {
    let holder = generate_portfolio_holder(1, None, Some(42));
    assert!(holder.name.contains(' '));
    assert!(!holder.name.is_empty());
    assert!(holder.email.contains('@'));
}

#[test]
fn assignment_keeps_explicit_date_and_generates_one_otherwise() {
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
    let explicit = generate_portfolio_assignment(1, 100, 2, Some(date), Some(42));
    assert_eq!(explicit.assignment_id, 1);
    assert_eq!(explicit.donor_id, 100);
    assert_eq!(explicit.portfolio_holder_id, 2);
    assert_eq!(explicit.assigned_date, date);

    let generated = generate_portfolio_assignment(1, 100, 2, None, Some(42));
    let today = chrono::Local::now().date_naive();
    let floor = today - chrono::Months::new(24);
    assert!(generated.assigned_date >= floor && generated.assigned_date <= today);
}
