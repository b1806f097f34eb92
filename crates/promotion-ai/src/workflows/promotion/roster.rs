use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::domain::CandidateProfile;
use super::intake::{self, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read candidate roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("roster line {line}: {source}")]
    Row {
        line: usize,
        source: ValidationError,
    },
}

/// Reads a candidate roster CSV whose headers are the training column names and
/// validates every row before any of them reach the engine.
pub struct CandidateRosterImporter;

impl CandidateRosterImporter {
    pub fn from_path(path: &Path) -> Result<Vec<CandidateProfile>, RosterImportError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<CandidateProfile>, RosterImportError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut profiles = Vec::new();

        for (index, record) in csv_reader.deserialize::<CandidateProfile>().enumerate() {
            let profile = record?;
            // Line 1 is the header row.
            intake::validate(&profile).map_err(|source| RosterImportError::Row {
                line: index + 2,
                source,
            })?;
            profiles.push(profile);
        }

        Ok(profiles)
    }
}
