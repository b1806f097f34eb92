//! Inference adapter: walks an assembled feature row through the fitted encoder and
//! classifier and decodes the output into a verdict.

pub mod verdict;

use std::sync::Arc;

use super::assembler::{self, FeatureRow, FeatureValue};
use super::domain::CandidateProfile;
use verdict::{Assessment, Recommendation};

/// Fitted categorical encoder capability.
///
/// `transform` maps `(column, label)` pairs to numeric codes, one code per input pair
/// in the same order. Pure with respect to the fitted state: the same input always
/// yields the same output.
pub trait CategoricalEncoder: Send + Sync {
    fn transform(&self, columns: &[(&str, &str)]) -> Result<Vec<f64>, EncodeError>;
}

/// Fitted binary classifier capability.
///
/// `features` is the fully numeric row in training-column order. `predict` yields the
/// class label; `predict_probability` yields `[P(class 0), P(class 1)]`.
pub trait PromotionModel: Send + Sync {
    fn predict(&self, features: &[f64]) -> Result<u8, ModelError>;
    fn predict_probability(&self, features: &[f64]) -> Result<[f64; 2], ModelError>;
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum EncodeError {
    #[error("unknown category '{value}' for column {column}")]
    UnknownCategory { column: String, value: String },
    #[error("encoder was not fitted for column {column}")]
    UnknownColumn { column: String },
    #[error("encoder returned {actual} codes for {expected} columns")]
    CodeShape { expected: usize, actual: usize },
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ModelError {
    #[error("classifier expects {expected} features, got {actual}")]
    FeatureShape { expected: usize, actual: usize },
}

/// Schema mismatch between the assembled record and the fitted artifacts. Surfaced
/// verbatim to the caller; nothing here is locally recoverable.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AssessmentError {
    #[error("schema mismatch: {0}")]
    Encode(#[from] EncodeError),
    #[error("schema mismatch: {0}")]
    Model(#[from] ModelError),
}

/// Stateless adapter over the two fitted artifacts. The artifacts are read-only, so
/// one engine is safely shared by any number of callers.
pub struct AssessmentEngine {
    encoder: Arc<dyn CategoricalEncoder>,
    model: Arc<dyn PromotionModel>,
}

impl AssessmentEngine {
    pub fn new(encoder: Arc<dyn CategoricalEncoder>, model: Arc<dyn PromotionModel>) -> Self {
        Self { encoder, model }
    }

    /// Assemble, encode, predict, decode. One call per "Assess Eligibility" action.
    pub fn assess(&self, profile: &CandidateProfile) -> Result<Assessment, AssessmentError> {
        let row = assembler::assemble(profile);
        let features = self.encode(&row)?;

        let class = self.model.predict(&features)?;
        let [_, promotion_probability] = self.model.predict_probability(&features)?;

        Ok(Assessment::new(
            Recommendation::from_class(class),
            promotion_probability,
        ))
    }

    /// Replaces categorical cells with encoder codes in place, preserving column
    /// identity and order; numeric cells are untouched.
    fn encode(&self, row: &FeatureRow) -> Result<Vec<f64>, AssessmentError> {
        let labels: Vec<(&str, &str)> = row
            .iter()
            .filter_map(|(name, value)| match value {
                FeatureValue::Label(text) => Some((*name, *text)),
                _ => None,
            })
            .collect();

        let codes = self.encoder.transform(&labels)?;
        if codes.len() != labels.len() {
            return Err(EncodeError::CodeShape {
                expected: labels.len(),
                actual: codes.len(),
            }
            .into());
        }

        let mut features = Vec::with_capacity(row.len());
        let mut next_code = codes.into_iter();
        for (_, value) in row.iter() {
            let numeric = match value {
                FeatureValue::Label(_) => next_code.next().unwrap_or_default(),
                FeatureValue::Int(value) => *value as f64,
                FeatureValue::Float(value) => *value,
            };
            features.push(numeric);
        }

        Ok(features)
    }
}
