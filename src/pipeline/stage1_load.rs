use std::path::Path;

use crate::input::{Fixture, load_fixtures};
use crate::pipeline::PipelineError;

/// Loads the fixture file. An empty file is rejected here, before any
/// request is sent.
pub fn run_stage1(path: &Path) -> Result<Vec<Fixture>, PipelineError> {
    let fixtures = load_fixtures(path)?;
    if fixtures.is_empty() {
        return Err(PipelineError::NoFixtures(path.display().to_string()));
    }
    tracing::info!(path = %path.display(), n_fixtures = fixtures.len(), "loaded fixtures");
    Ok(fixtures)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_load.rs"]
mod tests;
