use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Binary recommendation decoded from the classifier's class label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Recommended,
    NotRecommended,
}

impl Recommendation {
    pub(crate) const fn from_class(class: u8) -> Self {
        match class {
            1 => Self::Recommended,
            _ => Self::NotRecommended,
        }
    }

    /// Verdict string shown to the user.
    pub const fn verdict(self) -> &'static str {
        match self {
            Self::Recommended => "RECOMMENDED FOR PROMOTION",
            Self::NotRecommended => "NOT RECOMMENDED",
        }
    }
}

/// Final result of one eligibility assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub recommendation: Recommendation,
    /// Probability mass on the promotion class, reported regardless of which class
    /// was predicted.
    pub promotion_probability: f64,
    pub assessed_at: DateTime<Utc>,
}

impl Assessment {
    pub(crate) fn new(recommendation: Recommendation, promotion_probability: f64) -> Self {
        Self {
            recommendation,
            promotion_probability,
            assessed_at: Utc::now(),
        }
    }

    /// Confidence rendered the way the original tool displays it, e.g. "87.0%".
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}%", self.promotion_probability * 100.0)
    }

    pub fn summary(&self) -> String {
        format!(
            "{} (Confidence: {})",
            self.recommendation.verdict(),
            self.confidence_percent()
        )
    }
}
