//! Core contracts and helpers for DonorBridge.
//!
//! This crate defines the donor CRM record types, validation predicates,
//! the tabular input model, and the schema-inference/PII-redaction pipeline
//! shared across the generation and intake components.

pub mod error;
pub mod inference;
pub mod pii;
pub mod prompt;
pub mod records;
pub mod table;
pub mod validation;

pub use error::{Error, Result};
pub use inference::{ColumnSummary, InferredSchema, SampleValue, TableShape, infer_schema};
pub use pii::{PiiPatterns, REDACTION_MARKER};
pub use prompt::format_schema_for_prompt;
pub use records::{
    Campaign, CampaignType, Donation, Donor, DonorType, PaymentMethod, PortfolioAssignment,
    PortfolioHolder,
};
pub use table::{CellValue, DataTable};
pub use validation::{
    validate_donation, validate_donation_row, validate_donor, validate_donor_row,
};
