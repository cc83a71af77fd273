//! Batch dataset orchestration.
//!
//! Runs the entity factories as simple ordered loops, wiring referential
//! integrity: donation donor ids are drawn from the generated donor
//! population, campaign ids from the generated campaigns, and portfolio
//! assignments from the assigner. With a run seed set, every record gets
//! its own derived seed, so the whole dataset is reproducible while records
//! stay independent of each other.

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use donorbridge_core::{Campaign, Donation, Donor, PortfolioAssignment, PortfolioHolder};

use crate::errors::GenerationError;
use crate::factory::{
    generate_campaign_with, generate_donation_with, generate_donor_with,
    generate_portfolio_holder_with, local_today,
};
use crate::portfolio::{HolderCapacity, assign_portfolios};
use crate::seed::derive_seed;

/// What to generate in one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSpec {
    pub donors: u64,
    pub donations: u64,
    /// Campaign names, caller-supplied; one campaign per name, ids 1..=N.
    pub campaign_names: Vec<String>,
    /// Portfolio holders and their capacities; capacities must fit within
    /// the donor population.
    pub holders: Vec<HolderCapacity>,
    /// Share of donations left without a campaign, in [0, 1].
    pub no_campaign_rate: f64,
    /// Run seed. `None` makes the whole run non-reproducible.
    pub seed: Option<u64>,
}

/// Summary of a completed run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetReport {
    pub donors: u64,
    pub campaigns: u64,
    pub donations: u64,
    pub holders: u64,
    pub assignments: u64,
    pub duration_ms: u64,
}

/// Generated row collections, referentially consistent with each other.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub donors: Vec<Donor>,
    pub campaigns: Vec<Campaign>,
    pub donations: Vec<Donation>,
    pub holders: Vec<PortfolioHolder>,
    pub assignments: Vec<PortfolioAssignment>,
    pub report: DatasetReport,
}

/// Generate a full dataset from a spec.
pub fn generate_dataset(spec: &DatasetSpec) -> Result<Dataset, GenerationError> {
    validate_spec(spec)?;

    let start = Instant::now();
    let today = local_today();
    info!(
        donors = spec.donors,
        donations = spec.donations,
        campaigns = spec.campaign_names.len(),
        holders = spec.holders.len(),
        seed = spec.seed,
        "dataset generation started"
    );

    let mut donors = Vec::with_capacity(spec.donors as usize);
    for index in 0..spec.donors {
        let mut rng = scoped_rng(spec.seed, "donor", index);
        donors.push(generate_donor_with(index as i64 + 1, today, &mut rng));
    }

    let mut campaigns = Vec::with_capacity(spec.campaign_names.len());
    for (index, name) in spec.campaign_names.iter().enumerate() {
        let mut rng = scoped_rng(spec.seed, "campaign", index as u64);
        campaigns.push(generate_campaign_with(index as i64 + 1, name, today, &mut rng));
    }

    let mut donations = Vec::with_capacity(spec.donations as usize);
    for index in 0..spec.donations {
        let mut rng = scoped_rng(spec.seed, "donation", index);
        let donor_id = rng.random_range(1..=spec.donors as i64);
        let uncampaigned = rng.random_bool(spec.no_campaign_rate);
        let campaign_id = if uncampaigned {
            None
        } else {
            Some(rng.random_range(1..=campaigns.len() as i64))
        };
        donations.push(generate_donation_with(
            index as i64 + 1,
            donor_id,
            campaign_id,
            uncampaigned,
            today,
            &mut rng,
        ));
    }

    let mut holders = Vec::with_capacity(spec.holders.len());
    for (index, holder) in spec.holders.iter().enumerate() {
        let mut rng = scoped_rng(spec.seed, "holder", index as u64);
        holders.push(generate_portfolio_holder_with(
            holder.portfolio_holder_id,
            None,
            &mut rng,
        ));
    }

    let donor_ids: Vec<i64> = donors.iter().map(|donor| donor.donor_id).collect();
    let assignment_seed = spec.seed.map(|seed| derive_seed(seed, "assignment", 0));
    let assignments = assign_portfolios(&donor_ids, &spec.holders, assignment_seed)?;

    let report = DatasetReport {
        donors: donors.len() as u64,
        campaigns: campaigns.len() as u64,
        donations: donations.len() as u64,
        holders: holders.len() as u64,
        assignments: assignments.len() as u64,
        duration_ms: start.elapsed().as_millis() as u64,
    };
    info!(
        donors = report.donors,
        donations = report.donations,
        assignments = report.assignments,
        duration_ms = report.duration_ms,
        "dataset generation completed"
    );

    Ok(Dataset {
        donors,
        campaigns,
        donations,
        holders,
        assignments,
        report,
    })
}

fn validate_spec(spec: &DatasetSpec) -> Result<(), GenerationError> {
    if !(0.0..=1.0).contains(&spec.no_campaign_rate) {
        return Err(GenerationError::InvalidSpec(format!(
            "no_campaign_rate must be in [0, 1], got {}",
            spec.no_campaign_rate
        )));
    }
    if spec.donations > 0 && spec.donors == 0 {
        return Err(GenerationError::InvalidSpec(
            "donations require at least one donor".to_string(),
        ));
    }
    if spec.donations > 0 && spec.campaign_names.is_empty() && spec.no_campaign_rate < 1.0 {
        return Err(GenerationError::InvalidSpec(
            "campaigned donations require at least one campaign name".to_string(),
        ));
    }
    Ok(())
}

fn scoped_rng(seed: Option<u64>, label: &str, index: u64) -> ChaCha8Rng {
    match seed {
        Some(run_seed) => ChaCha8Rng::seed_from_u64(derive_seed(run_seed, label, index)),
        None => ChaCha8Rng::from_os_rng(),
    }
}
