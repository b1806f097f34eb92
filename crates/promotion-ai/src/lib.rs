//! Decision-support core for promotion eligibility assessments.
//!
//! The crate owns the intake-to-verdict pipeline: candidate profiles are validated,
//! assembled into the fixed feature row the classifier was trained on, encoded through
//! a fitted categorical encoder, and scored by a fitted binary classifier. Rendering
//! and artifact provisioning live with the callers.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
