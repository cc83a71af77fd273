//! Donor-to-fundraiser portfolio assignment.
//!
//! Shuffle the whole donor population once with a seeded uniform shuffle,
//! then consume the shuffled sequence in declared holder order, slicing off
//! exactly each holder's capacity. Slices are disjoint because the sequence
//! is consumed without replacement, which gives the one-fundraiser-per-donor
//! invariant and a deterministic output for a fixed seed.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use donorbridge_core::PortfolioAssignment;

use crate::errors::GenerationError;
use crate::factory::{generate_portfolio_assignment_with, local_today};
use crate::seed::record_rng;

/// How many donors a fundraiser's portfolio should hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolderCapacity {
    pub portfolio_holder_id: i64,
    pub capacity: usize,
}

/// Partition `donor_ids` into disjoint portfolios, one per holder.
///
/// Emits exactly `sum(capacity)` assignments with `assignment_id` starting
/// at 1, sequenced holder-major. Fails fast with
/// [`GenerationError::InsufficientDonors`] before producing any assignment
/// when the capacities exceed the population; partial output is never
/// returned.
pub fn assign_portfolios(
    donor_ids: &[i64],
    holders: &[HolderCapacity],
    seed: Option<u64>,
) -> Result<Vec<PortfolioAssignment>, GenerationError> {
    let requested: usize = holders.iter().map(|holder| holder.capacity).sum();
    if requested > donor_ids.len() {
        return Err(GenerationError::InsufficientDonors {
            requested,
            available: donor_ids.len(),
        });
    }

    let mut rng = record_rng(seed);
    let mut pool = donor_ids.to_vec();
    pool.shuffle(&mut rng);

    let today = local_today();
    let mut assignments = Vec::with_capacity(requested);
    let mut next = pool.into_iter();
    let mut assignment_id = 1_i64;
    for holder in holders {
        for _ in 0..holder.capacity {
            // Cannot run dry: requested <= pool size was checked above.
            let Some(donor_id) = next.next() else {
                return Err(GenerationError::InsufficientDonors {
                    requested,
                    available: donor_ids.len(),
                });
            };
            assignments.push(generate_portfolio_assignment_with(
                assignment_id,
                donor_id,
                holder.portfolio_holder_id,
                None,
                today,
                &mut rng,
            ));
            assignment_id += 1;
        }
    }

    Ok(assignments)
}
