//! Deterministic synthetic data generation for the DonorBridge schema.
//!
//! Entity factories produce one validated record per call from an id and an
//! optional seed; the portfolio assigner partitions donors across
//! fundraisers without repetition; the dataset orchestrator runs batch
//! generation and CSV export with reproducible per-record randomness.

pub mod dataset;
pub mod errors;
pub mod factory;
pub mod output;
pub mod portfolio;
pub mod seed;

pub use dataset::{Dataset, DatasetReport, DatasetSpec, generate_dataset};
pub use errors::GenerationError;
pub use factory::{
    generate_campaign, generate_donation, generate_donor, generate_portfolio_assignment,
    generate_portfolio_holder,
};
pub use portfolio::{HolderCapacity, assign_portfolios};
pub use seed::{derive_seed, record_rng};
