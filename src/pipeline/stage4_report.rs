use std::io::Write;
use std::path::Path;

use crate::model::record::SampleRecord;
use crate::model::scores::{Averages, ScoreSeries};
use crate::pipeline::PipelineError;
use crate::report::chart::{render_chart_svg, write_chart};
use crate::report::text::render_averages;
use crate::report::{ReportError, averages};

#[derive(Debug, Clone)]
pub struct Stage4Input<'a> {
    pub records: &'a [SampleRecord],
    pub model: &'a str,
    pub chart_path: &'a Path,
}

/// Writes the chart, then the averages. Zero records yields
/// `ReportError::NoSamples` and nothing is written.
pub fn run_stage4<W>(input: &Stage4Input<'_>, out: &mut W) -> Result<Averages, PipelineError>
where
    W: Write + ?Sized,
{
    let averages = averages(input.records)?;

    let series = ScoreSeries::from_records(input.records);
    let svg = render_chart_svg(&series, input.model);
    write_chart(input.chart_path, &svg)?;
    tracing::info!(path = %input.chart_path.display(), "wrote score chart");

    out.write_all(render_averages(&averages).as_bytes())
        .map_err(ReportError::from)?;
    out.flush().map_err(ReportError::from)?;
    Ok(averages)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
