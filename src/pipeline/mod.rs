pub mod stage1_load;
pub mod stage2_generate;
pub mod stage3_score;
pub mod stage4_report;

use std::io::Write;

use thiserror::Error;

use crate::client::{ClientError, Generator};
use crate::input::{Fixture, InputError};
use crate::model::record::SampleRecord;
use crate::report::ReportError;
use crate::report::text::render_sample_block;
use stage2_generate::generate_sample;
use stage3_score::score_sample;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("no fixtures found in {0}; nothing to evaluate")]
    NoFixtures(String),
    #[error("cannot set up generation client: {0}")]
    Client(#[from] ClientError),
    #[error("sample {index}: {source}")]
    Generate {
        index: usize,
        #[source]
        source: ClientError,
    },
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Generates and scores every fixture in order, writing each sample block to
/// `out` as soon as it is scored. Stops at the first generation failure.
pub fn run_samples<G, W>(
    fixtures: &[Fixture],
    generator: &G,
    out: &mut W,
) -> Result<Vec<SampleRecord>, PipelineError>
where
    G: Generator + ?Sized,
    W: Write + ?Sized,
{
    let mut records = Vec::with_capacity(fixtures.len());
    for (index, fixture) in fixtures.iter().enumerate() {
        let generated = generate_sample(generator, index, fixture)?;
        let record = score_sample(index, fixture, generated);
        out.write_all(render_sample_block(&record).as_bytes())
            .map_err(ReportError::from)?;
        records.push(record);
    }
    out.flush().map_err(ReportError::from)?;
    Ok(records)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
