pub mod chart;
pub mod text;

use thiserror::Error;

use crate::model::record::SampleRecord;
use crate::model::scores::{Averages, RougeScores, ScoreSeries};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("no samples were evaluated; averages are undefined")]
    NoSamples,
    #[error("cannot write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write report output: {0}")]
    Output(#[from] std::io::Error),
}

pub fn format_f64_3(v: f64) -> String {
    format!("{:.3}", v)
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

pub fn averages(records: &[SampleRecord]) -> Result<Averages, ReportError> {
    let series = ScoreSeries::from_records(records);
    let avg = |values: &[f64]| mean(values).ok_or(ReportError::NoSamples);
    Ok(Averages {
        n_samples: records.len(),
        scores: RougeScores {
            rouge1: avg(&series.rouge1)?,
            rouge2: avg(&series.rouge2)?,
            rouge_l: avg(&series.rouge_l)?,
        },
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
