//! Entity factories.
//!
//! Each factory takes the identifying key(s), optional overrides, and an
//! optional seed, and returns one fully populated record. The seeded form
//! builds a call-local rng via [`record_rng`] and uses the current local
//! date as "today"; the `_with` forms take both explicitly so batch code
//! and tests control the draw source and the date windows.

use chrono::{Duration, Months, NaiveDate};
use fake::Fake;
use fake::faker::address::en::{BuildingNumber, CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::PhoneNumber;
use rand::Rng;

use donorbridge_core::{
    Campaign, CampaignType, Donation, Donor, DonorType, PaymentMethod, PortfolioAssignment,
    PortfolioHolder,
};

use crate::seed::record_rng;

/// Inclusive donation amount bounds, in currency units.
pub const AMOUNT_MIN: f64 = 10.0;
pub const AMOUNT_MAX: f64 = 5000.0;

/// Inclusive campaign goal bounds.
pub const GOAL_MIN: i64 = 10_000;
pub const GOAL_MAX: i64 = 100_000;

/// Campaign id range drawn when a donation has no campaign and uncampaigned
/// gifts are not allowed.
pub const DEFAULT_CAMPAIGN_IDS: std::ops::RangeInclusive<i64> = 1..=10;

/// Generate a donor profile. Always succeeds.
pub fn generate_donor(donor_id: i64, seed: Option<u64>) -> Donor {
    let mut rng = record_rng(seed);
    generate_donor_with(donor_id, local_today(), &mut rng)
}

pub fn generate_donor_with(donor_id: i64, today: NaiveDate, rng: &mut impl Rng) -> Donor {
    let building: String = BuildingNumber().fake_with_rng(rng);
    let street: String = StreetName().fake_with_rng(rng);
    Donor {
        donor_id,
        first_name: FirstName().fake_with_rng(rng),
        last_name: LastName().fake_with_rng(rng),
        email: SafeEmail().fake_with_rng(rng),
        phone: PhoneNumber().fake_with_rng(rng),
        address: format!("{building} {street}"),
        city: CityName().fake_with_rng(rng),
        state: StateAbbr().fake_with_rng(rng),
        zip_code: ZipCode().fake_with_rng(rng),
        created_date: date_between(years_back(today, 5), today, rng),
        donor_type: pick(&DonorType::ALL, rng),
    }
}

/// Generate a campaign. The name is caller-supplied, never generated.
///
/// `start_date` and `end_date` come from independent windows (2y->1y back
/// and 1y back->today), so start after end is possible; this reproduces the
/// legacy generator and is deliberately not corrected here.
pub fn generate_campaign(campaign_id: i64, campaign_name: &str, seed: Option<u64>) -> Campaign {
    let mut rng = record_rng(seed);
    generate_campaign_with(campaign_id, campaign_name, local_today(), &mut rng)
}

pub fn generate_campaign_with(
    campaign_id: i64,
    campaign_name: &str,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> Campaign {
    Campaign {
        campaign_id,
        campaign_name: campaign_name.to_string(),
        start_date: date_between(years_back(today, 2), years_back(today, 1), rng),
        end_date: date_between(years_back(today, 1), today, rng),
        goal_amount: rng.random_range(GOAL_MIN..=GOAL_MAX),
        campaign_type: pick(&CampaignType::ALL, rng),
    }
}

/// Generate a donation.
///
/// Campaign policy: a supplied `campaign_id` is kept as-is. When omitted,
/// `allow_no_campaign = false` draws one uniformly from
/// [`DEFAULT_CAMPAIGN_IDS`]; `allow_no_campaign = true` leaves it `None`,
/// the only branch that produces an uncampaigned gift.
pub fn generate_donation(
    donation_id: i64,
    donor_id: i64,
    campaign_id: Option<i64>,
    allow_no_campaign: bool,
    seed: Option<u64>,
) -> Donation {
    let mut rng = record_rng(seed);
    generate_donation_with(
        donation_id,
        donor_id,
        campaign_id,
        allow_no_campaign,
        local_today(),
        &mut rng,
    )
}

pub fn generate_donation_with(
    donation_id: i64,
    donor_id: i64,
    campaign_id: Option<i64>,
    allow_no_campaign: bool,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> Donation {
    let campaign_id = match campaign_id {
        Some(id) => Some(id),
        None if allow_no_campaign => None,
        None => Some(rng.random_range(DEFAULT_CAMPAIGN_IDS)),
    };
    let amount = rng.random_range(AMOUNT_MIN..=AMOUNT_MAX);
    Donation {
        donation_id,
        donor_id,
        campaign_id,
        amount: (amount * 100.0).round() / 100.0,
        donation_date: date_between(years_back(today, 3), today, rng),
        payment_method: pick(&PaymentMethod::ALL, rng),
        is_recurring: rng.random_bool(0.5),
    }
}

/// Generate a portfolio holder. A missing name is generated as
/// "First Last"; the email is derived from the name.
pub fn generate_portfolio_holder(
    holder_id: i64,
    name: Option<&str>,
    seed: Option<u64>,
) -> PortfolioHolder {
    let mut rng = record_rng(seed);
    generate_portfolio_holder_with(holder_id, name, &mut rng)
}

pub fn generate_portfolio_holder_with(
    holder_id: i64,
    name: Option<&str>,
    rng: &mut impl Rng,
) -> PortfolioHolder {
    let name = match name {
        Some(name) => name.to_string(),
        None => {
            let first: String = FirstName().fake_with_rng(rng);
            let last: String = LastName().fake_with_rng(rng);
            format!("{first} {last}")
        }
    };
    let email = format!("{}@example.com", slugify(&name));
    PortfolioHolder {
        portfolio_holder_id: holder_id,
        name,
        email,
    }
}

/// Generate a portfolio assignment record. Does not enforce the
/// one-fundraiser-per-donor invariant; that belongs to the assigner.
pub fn generate_portfolio_assignment(
    assignment_id: i64,
    donor_id: i64,
    portfolio_holder_id: i64,
    assigned_date: Option<NaiveDate>,
    seed: Option<u64>,
) -> PortfolioAssignment {
    let mut rng = record_rng(seed);
    generate_portfolio_assignment_with(
        assignment_id,
        donor_id,
        portfolio_holder_id,
        assigned_date,
        local_today(),
        &mut rng,
    )
}

pub fn generate_portfolio_assignment_with(
    assignment_id: i64,
    donor_id: i64,
    portfolio_holder_id: i64,
    assigned_date: Option<NaiveDate>,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> PortfolioAssignment {
    PortfolioAssignment {
        assignment_id,
        donor_id,
        portfolio_holder_id,
        assigned_date: assigned_date
            .unwrap_or_else(|| date_between(years_back(today, 2), today, rng)),
    }
}

pub(crate) fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Uniform date in `[start, end]`. An inverted range collapses to `start`.
pub(crate) fn date_between(start: NaiveDate, end: NaiveDate, rng: &mut impl Rng) -> NaiveDate {
    let span = (end - start).num_days().max(0);
    start + Duration::days(rng.random_range(0..=span))
}

fn years_back(today: NaiveDate, years: u32) -> NaiveDate {
    today - Months::new(12 * years)
}

fn pick<T: Copy>(values: &[T], rng: &mut impl Rng) -> T {
    values[rng.random_range(0..values.len())]
}

fn slugify(value: &str) -> String {
    value
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .flat_map(|ch| ch.to_lowercase())
        .collect()
}
