use std::ops::RangeInclusive;

use super::domain::CandidateProfile;

// Numeric domains mirrored from the intake form the training data was collected with.
pub const TRAININGS_ATTENDED: RangeInclusive<u32> = 2..=11;
pub const YEAR_OF_BIRTH: RangeInclusive<u32> = 1950..=2005;
pub const YEAR_OF_RECRUITMENT: RangeInclusive<u32> = 1980..=2024;
pub const TRAINING_SCORE_AVERAGE: RangeInclusive<u32> = 0..=100;
pub const LAST_PERFORMANCE_SCORE: RangeInclusive<f64> = 0.0..=14.0;
pub const PERFORMANCE_SCORE_STEP: f64 = 0.5;

/// A numeric field fell outside the domain the artifacts were trained on.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
    #[error("Last_performance_score must land on a {PERFORMANCE_SCORE_STEP} increment, got {value}")]
    OffStep { value: f64 },
}

/// Enforces the numeric domains; enum fields are already closed by their types.
pub fn validate(profile: &CandidateProfile) -> Result<(), ValidationError> {
    check_u32(
        "Trainings_Attended",
        profile.trainings_attended,
        TRAININGS_ATTENDED,
    )?;
    check_u32("Year_of_birth", profile.year_of_birth, YEAR_OF_BIRTH)?;
    check_u32(
        "Year_of_recruitment",
        profile.year_of_recruitment,
        YEAR_OF_RECRUITMENT,
    )?;
    check_u32(
        "Training_score_average",
        profile.training_score_average,
        TRAINING_SCORE_AVERAGE,
    )?;

    let score = profile.last_performance_score;
    if !LAST_PERFORMANCE_SCORE.contains(&score) {
        return Err(ValidationError::OutOfRange {
            field: "Last_performance_score",
            min: *LAST_PERFORMANCE_SCORE.start(),
            max: *LAST_PERFORMANCE_SCORE.end(),
            value: score,
        });
    }

    let steps = score / PERFORMANCE_SCORE_STEP;
    if (steps - steps.round()).abs() > 1e-9 {
        return Err(ValidationError::OffStep { value: score });
    }

    Ok(())
}

fn check_u32(
    field: &'static str,
    value: u32,
    range: RangeInclusive<u32>,
) -> Result<(), ValidationError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            min: f64::from(*range.start()),
            max: f64::from(*range.end()),
            value: f64::from(value),
        })
    }
}
