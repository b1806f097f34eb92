use super::domain::{CandidateProfile, FEATURE_COLUMNS};

/// One cell of the assembled feature row.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    /// Categorical label awaiting the fitted encoder.
    Label(&'static str),
    Int(i64),
    Float(f64),
}

/// Single-row record mirroring the classifier's training frame, columns in
/// [`FEATURE_COLUMNS`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    columns: Vec<(&'static str, FeatureValue)>,
}

impl FeatureRow {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|(name, _)| *name).collect()
    }

    pub fn get(&self, column: &str) -> Option<&FeatureValue> {
        self.columns
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, FeatureValue)> {
        self.columns.iter()
    }
}

/// Shapes a validated profile into the ordered record the artifacts expect.
///
/// Targets_met and Previous_Award enter the row as 1/0 flags; every other field
/// passes through unchanged. Pure data shaping, cannot fail.
pub fn assemble(profile: &CandidateProfile) -> FeatureRow {
    let columns = vec![
        ("Division", FeatureValue::Label(profile.division.label())),
        (
            "Qualification",
            FeatureValue::Label(profile.qualification.label()),
        ),
        ("Gender", FeatureValue::Label(profile.gender.label())),
        (
            "Trainings_Attended",
            FeatureValue::Int(i64::from(profile.trainings_attended)),
        ),
        (
            "Year_of_birth",
            FeatureValue::Int(i64::from(profile.year_of_birth)),
        ),
        (
            "Last_performance_score",
            FeatureValue::Float(profile.last_performance_score),
        ),
        (
            "Year_of_recruitment",
            FeatureValue::Int(i64::from(profile.year_of_recruitment)),
        ),
        (
            "Targets_met",
            FeatureValue::Int(i64::from(profile.targets_met.as_flag())),
        ),
        (
            "Previous_Award",
            FeatureValue::Int(i64::from(profile.previous_award.as_flag())),
        ),
        (
            "Training_score_average",
            FeatureValue::Int(i64::from(profile.training_score_average)),
        ),
        (
            "Foreign_schooled",
            FeatureValue::Label(profile.foreign_schooled.label()),
        ),
        (
            "Marital_Status",
            FeatureValue::Label(profile.marital_status.label()),
        ),
        (
            "Past_Disciplinary_Action",
            FeatureValue::Label(profile.past_disciplinary_action.label()),
        ),
        (
            "Previous_IntraDepartmental_Movement",
            FeatureValue::Label(profile.previous_intra_departmental_movement.label()),
        ),
        (
            "No_of_previous_employers",
            FeatureValue::Label(profile.no_of_previous_employers.label()),
        ),
    ];

    debug_assert_eq!(columns.len(), FEATURE_COLUMNS.len());
    FeatureRow { columns }
}
