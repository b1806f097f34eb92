use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use promotion_ai::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct FixArgs {
    /// Notebook file to re-parse and re-serialize
    pub(crate) path: PathBuf,
}

/// Re-parses a notebook's JSON and, when valid, saves a cleanly indented copy next
/// to the original. Parse failures are diagnosed with line and column, not fatal.
pub(crate) fn run_fix(args: FixArgs) -> Result<(), AppError> {
    let raw = fs::read_to_string(&args.path)?;

    match serde_json::from_str::<serde_json::Value>(&raw) {
        Ok(content) => {
            let target = fixed_path(&args.path);
            fs::write(&target, serde_json::to_string_pretty(&content)?)?;
            println!(
                "Notebook JSON is valid. Reformatted copy saved to {}.",
                target.display()
            );
        }
        Err(err) => {
            println!(
                "JSON error at line {}, column {}: {err}",
                err.line(),
                err.column()
            );
            if let Some(line) = raw.lines().nth(err.line().saturating_sub(1)) {
                println!("Offending line: {line}");
            }
            println!("Look for a missing comma, extra comma, or unclosed quote.");
        }
    }

    Ok(())
}

fn fixed_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("notebook.ipynb");
    path.with_file_name(format!("fixed_{name}"))
}
