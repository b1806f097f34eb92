use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use promotion_ai::config::AppConfig;
use promotion_ai::error::AppError;
use promotion_ai::workflows::promotion::{
    ArtifactBundle, AssessmentEngine, AssessmentService, CandidateProfile,
    CandidateRosterImporter,
};

use crate::infra::{demo_encoder, demo_model, sample_profile};

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON file holding one candidate profile keyed by the training column names
    #[arg(long)]
    pub(crate) profile: Option<PathBuf>,
    /// Use the bundled demo artifacts instead of the configured ones
    #[arg(long)]
    pub(crate) demo: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RosterArgs {
    /// Roster CSV whose headers are the training column names
    pub(crate) path: PathBuf,
    /// Use the bundled demo artifacts instead of the configured ones
    #[arg(long)]
    pub(crate) demo: bool,
}

fn engine(use_demo_artifacts: bool) -> Result<AssessmentEngine, AppError> {
    if use_demo_artifacts {
        return Ok(AssessmentEngine::new(
            Arc::new(demo_encoder()),
            Arc::new(demo_model()),
        ));
    }

    let config = AppConfig::load()?;
    let artifacts = ArtifactBundle::load(&config.artifacts)?;
    Ok(artifacts.engine())
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let candidate: CandidateProfile = match &args.profile {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => sample_profile(),
    };

    let service = AssessmentService::new(engine(args.demo)?);
    let assessment = service.assess(&candidate)?;

    println!("{}", assessment.summary());
    Ok(())
}

pub(crate) fn run_roster(args: RosterArgs) -> Result<(), AppError> {
    let profiles = CandidateRosterImporter::from_path(&args.path)?;
    let service = AssessmentService::new(engine(args.demo)?);
    let assessments = service.assess_batch(&profiles)?;

    for (index, assessment) in assessments.iter().enumerate() {
        println!("candidate {}: {}", index + 1, assessment.summary());
    }
    println!("{} candidate(s) assessed", assessments.len());
    Ok(())
}
