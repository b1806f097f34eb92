//! Concrete fitted-artifact implementations behind the inference capability traits.
//!
//! Artifacts are JSON exports of the training pipeline: an ordinal encoder (per-column
//! category order) and a logistic-regression classifier (per-feature coefficients).
//! Anything satisfying [`CategoricalEncoder`] and [`PromotionModel`] can replace them.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::domain::{
    Division, Gender, MaritalStatus, PreviousEmployers, Qualification, YesNo,
    CATEGORICAL_COLUMNS, FEATURE_COLUMNS,
};
use super::inference::{
    AssessmentEngine, CategoricalEncoder, EncodeError, ModelError, PromotionModel,
};
use crate::config::ArtifactConfig;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact not found at {}", path.display())]
    Missing { path: PathBuf },
    #[error("failed to read artifact {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("artifact {} is not valid JSON: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("artifact {} was fitted against a different schema: {detail}", path.display())]
    SchemaMismatch { path: PathBuf, detail: String },
}

/// Fitted ordinal encoder: each categorical column carries its training category
/// order, and transform maps a label to its index in that order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdinalEncoderArtifact {
    pub categories: BTreeMap<String, Vec<String>>,
}

impl OrdinalEncoderArtifact {
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let artifact: Self = read_json(path)?;
        artifact.check_schema(path)?;
        Ok(artifact)
    }

    /// Encoder covering every label the intake form can produce, in form order.
    /// Used by demos and tests; a production artifact ships its own category order.
    pub fn with_form_categories() -> Self {
        let mut categories = BTreeMap::new();
        categories.insert(
            "Division".to_string(),
            Division::ALL.iter().map(|v| v.label().to_string()).collect(),
        );
        categories.insert(
            "Qualification".to_string(),
            Qualification::ALL
                .iter()
                .map(|v| v.label().to_string())
                .collect(),
        );
        categories.insert(
            "Gender".to_string(),
            Gender::ALL.iter().map(|v| v.label().to_string()).collect(),
        );
        for column in [
            "Foreign_schooled",
            "Past_Disciplinary_Action",
            "Previous_IntraDepartmental_Movement",
        ] {
            categories.insert(
                column.to_string(),
                YesNo::ALL.iter().map(|v| v.label().to_string()).collect(),
            );
        }
        categories.insert(
            "Marital_Status".to_string(),
            MaritalStatus::ALL
                .iter()
                .map(|v| v.label().to_string())
                .collect(),
        );
        categories.insert(
            "No_of_previous_employers".to_string(),
            PreviousEmployers::ALL
                .iter()
                .map(|v| v.label().to_string())
                .collect(),
        );
        Self { categories }
    }

    fn check_schema(&self, path: &Path) -> Result<(), ArtifactError> {
        for column in CATEGORICAL_COLUMNS {
            if !self.categories.contains_key(column) {
                return Err(ArtifactError::SchemaMismatch {
                    path: path.to_path_buf(),
                    detail: format!("missing categorical column {column}"),
                });
            }
        }
        if self.categories.len() != CATEGORICAL_COLUMNS.len() {
            let extra: Vec<&str> = self
                .categories
                .keys()
                .map(String::as_str)
                .filter(|key| !CATEGORICAL_COLUMNS.contains(key))
                .collect();
            return Err(ArtifactError::SchemaMismatch {
                path: path.to_path_buf(),
                detail: format!("unexpected columns: {}", extra.join(", ")),
            });
        }
        Ok(())
    }
}

impl CategoricalEncoder for OrdinalEncoderArtifact {
    fn transform(&self, columns: &[(&str, &str)]) -> Result<Vec<f64>, EncodeError> {
        columns
            .iter()
            .map(|(column, value)| {
                let known =
                    self.categories
                        .get(*column)
                        .ok_or_else(|| EncodeError::UnknownColumn {
                            column: (*column).to_string(),
                        })?;
                known
                    .iter()
                    .position(|category| category == value)
                    .map(|index| index as f64)
                    .ok_or_else(|| EncodeError::UnknownCategory {
                        column: (*column).to_string(),
                        value: (*value).to_string(),
                    })
            })
            .collect()
    }
}

/// Fitted logistic-regression classifier: coefficients in training-column order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModelArtifact {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LogisticModelArtifact {
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let artifact: Self = read_json(path)?;
        artifact.check_schema(path)?;
        Ok(artifact)
    }

    fn check_schema(&self, path: &Path) -> Result<(), ArtifactError> {
        if self.feature_names != FEATURE_COLUMNS {
            return Err(ArtifactError::SchemaMismatch {
                path: path.to_path_buf(),
                detail: format!(
                    "feature names do not match the {} training columns",
                    FEATURE_COLUMNS.len()
                ),
            });
        }
        if self.coefficients.len() != self.feature_names.len() {
            return Err(ArtifactError::SchemaMismatch {
                path: path.to_path_buf(),
                detail: format!(
                    "{} coefficients for {} features",
                    self.coefficients.len(),
                    self.feature_names.len()
                ),
            });
        }
        Ok(())
    }

    fn probability_of_promotion(&self, features: &[f64]) -> Result<f64, ModelError> {
        if features.len() != self.coefficients.len() {
            return Err(ModelError::FeatureShape {
                expected: self.coefficients.len(),
                actual: features.len(),
            });
        }

        let logit: f64 = self
            .coefficients
            .iter()
            .zip(features)
            .map(|(weight, feature)| weight * feature)
            .sum::<f64>()
            + self.intercept;

        Ok(1.0 / (1.0 + (-logit).exp()))
    }
}

impl PromotionModel for LogisticModelArtifact {
    fn predict(&self, features: &[f64]) -> Result<u8, ModelError> {
        let p1 = self.probability_of_promotion(features)?;
        Ok(u8::from(p1 >= 0.5))
    }

    fn predict_probability(&self, features: &[f64]) -> Result<[f64; 2], ModelError> {
        let p1 = self.probability_of_promotion(features)?;
        Ok([1.0 - p1, p1])
    }
}

/// Both fitted artifacts, loaded once at startup and shared for the process lifetime.
#[derive(Debug)]
pub struct ArtifactBundle {
    pub encoder: Arc<OrdinalEncoderArtifact>,
    pub model: Arc<LogisticModelArtifact>,
}

impl ArtifactBundle {
    pub fn load(config: &ArtifactConfig) -> Result<Self, ArtifactError> {
        let encoder = Arc::new(OrdinalEncoderArtifact::load(&config.encoder_path)?);
        let model = Arc::new(LogisticModelArtifact::load(&config.model_path)?);
        Ok(Self { encoder, model })
    }

    pub fn engine(&self) -> AssessmentEngine {
        AssessmentEngine::new(self.encoder.clone(), self.model.clone())
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            return Err(ArtifactError::Missing {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(ArtifactError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&raw).map_err(|source| ArtifactError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}
