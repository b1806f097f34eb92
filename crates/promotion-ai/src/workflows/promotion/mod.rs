//! Promotion eligibility assessment: intake validation, feature assembly, and
//! inference against pre-trained encoder/classifier artifacts.

pub mod artifacts;
pub mod assembler;
pub mod domain;
pub mod inference;
pub mod intake;
pub mod roster;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use artifacts::{ArtifactBundle, ArtifactError, LogisticModelArtifact, OrdinalEncoderArtifact};
pub use assembler::{assemble, FeatureRow, FeatureValue};
pub use domain::{
    CandidateProfile, Division, Gender, MaritalStatus, PreviousEmployers, Qualification, YesNo,
    CATEGORICAL_COLUMNS, FEATURE_COLUMNS,
};
pub use inference::verdict::{Assessment, Recommendation};
pub use inference::{
    AssessmentEngine, AssessmentError, CategoricalEncoder, EncodeError, ModelError, PromotionModel,
};
pub use intake::ValidationError;
pub use roster::{CandidateRosterImporter, RosterImportError};
pub use router::assessment_router;
pub use service::{AssessmentService, AssessmentServiceError};
