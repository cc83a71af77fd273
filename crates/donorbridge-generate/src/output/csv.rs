//! CSV export with the fixed per-entity column order consumed by the
//! persistence/export collaborator. A donation without a campaign renders
//! as an empty `campaign_id` field; it is never defaulted.

use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use donorbridge_core::{Campaign, Donation, Donor, PortfolioAssignment, PortfolioHolder};

use crate::dataset::Dataset;
use crate::errors::GenerationError;

const DONOR_HEADER: [&str; 11] = [
    "donor_id",
    "first_name",
    "last_name",
    "email",
    "phone",
    "address",
    "city",
    "state",
    "zip_code",
    "created_date",
    "donor_type",
];

const CAMPAIGN_HEADER: [&str; 6] = [
    "campaign_id",
    "campaign_name",
    "start_date",
    "end_date",
    "goal_amount",
    "campaign_type",
];

const DONATION_HEADER: [&str; 7] = [
    "donation_id",
    "donor_id",
    "campaign_id",
    "amount",
    "donation_date",
    "payment_method",
    "is_recurring",
];

const HOLDER_HEADER: [&str; 3] = ["portfolio_holder_id", "name", "email"];

const ASSIGNMENT_HEADER: [&str; 4] = [
    "assignment_id",
    "donor_id",
    "portfolio_holder_id",
    "assigned_date",
];

/// Write every entity collection of a dataset into `dir` (created if
/// missing), one file per entity. Returns total bytes written.
pub fn write_dataset_csv(dir: &Path, dataset: &Dataset) -> Result<u64, GenerationError> {
    std::fs::create_dir_all(dir)?;
    let mut bytes = 0;
    bytes += write_donors_csv(&dir.join("donors.csv"), &dataset.donors)?;
    bytes += write_campaigns_csv(&dir.join("campaigns.csv"), &dataset.campaigns)?;
    bytes += write_donations_csv(&dir.join("donations.csv"), &dataset.donations)?;
    bytes += write_holders_csv(&dir.join("portfolio_holders.csv"), &dataset.holders)?;
    bytes += write_assignments_csv(
        &dir.join("portfolio_assignments.csv"),
        &dataset.assignments,
    )?;
    info!(dir = %dir.display(), bytes, "dataset exported");
    Ok(bytes)
}

pub fn write_donors_csv(path: &Path, donors: &[Donor]) -> Result<u64, GenerationError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(DONOR_HEADER)?;
    for donor in donors {
        writer.write_record([
            donor.donor_id.to_string(),
            donor.first_name.clone(),
            donor.last_name.clone(),
            donor.email.clone(),
            donor.phone.clone(),
            donor.address.clone(),
            donor.city.clone(),
            donor.state.clone(),
            donor.zip_code.clone(),
            date_field(donor.created_date),
            donor.donor_type.label().to_string(),
        ])?;
    }
    finish(writer, path)
}

pub fn write_campaigns_csv(path: &Path, campaigns: &[Campaign]) -> Result<u64, GenerationError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(CAMPAIGN_HEADER)?;
    for campaign in campaigns {
        writer.write_record([
            campaign.campaign_id.to_string(),
            campaign.campaign_name.clone(),
            date_field(campaign.start_date),
            date_field(campaign.end_date),
            campaign.goal_amount.to_string(),
            campaign.campaign_type.label().to_string(),
        ])?;
    }
    finish(writer, path)
}

pub fn write_donations_csv(path: &Path, donations: &[Donation]) -> Result<u64, GenerationError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(DONATION_HEADER)?;
    for donation in donations {
        writer.write_record([
            donation.donation_id.to_string(),
            donation.donor_id.to_string(),
            donation
                .campaign_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            format!("{:.2}", donation.amount),
            date_field(donation.donation_date),
            donation.payment_method.label().to_string(),
            donation.is_recurring.to_string(),
        ])?;
    }
    finish(writer, path)
}

pub fn write_holders_csv(
    path: &Path,
    holders: &[PortfolioHolder],
) -> Result<u64, GenerationError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HOLDER_HEADER)?;
    for holder in holders {
        writer.write_record([
            holder.portfolio_holder_id.to_string(),
            holder.name.clone(),
            holder.email.clone(),
        ])?;
    }
    finish(writer, path)
}

pub fn write_assignments_csv(
    path: &Path,
    assignments: &[PortfolioAssignment],
) -> Result<u64, GenerationError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(ASSIGNMENT_HEADER)?;
    for assignment in assignments {
        writer.write_record([
            assignment.assignment_id.to_string(),
            assignment.donor_id.to_string(),
            assignment.portfolio_holder_id.to_string(),
            date_field(assignment.assigned_date),
        ])?;
    }
    finish(writer, path)
}

fn date_field(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn finish<W: std::io::Write>(mut writer: csv::Writer<W>, path: &Path) -> Result<u64, GenerationError> {
    writer.flush()?;
    drop(writer);
    Ok(std::fs::metadata(path)?.len())
}
