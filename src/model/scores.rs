use crate::model::record::SampleRecord;

/// F-measures for one (expected, generated) pair. Each value is in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RougeScores {
    pub rouge1: f64,
    pub rouge2: f64,
    pub rouge_l: f64,
}

impl RougeScores {
    pub const ZERO: RougeScores = RougeScores {
        rouge1: 0.0,
        rouge2: 0.0,
        rouge_l: 0.0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreKind {
    Rouge1,
    Rouge2,
    RougeL,
}

impl ScoreKind {
    pub const ALL: [ScoreKind; 3] = [ScoreKind::Rouge1, ScoreKind::Rouge2, ScoreKind::RougeL];

    pub fn label(self) -> &'static str {
        match self {
            ScoreKind::Rouge1 => "ROUGE-1",
            ScoreKind::Rouge2 => "ROUGE-2",
            ScoreKind::RougeL => "ROUGE-L",
        }
    }

    pub fn pick(self, scores: &RougeScores) -> f64 {
        match self {
            ScoreKind::Rouge1 => scores.rouge1,
            ScoreKind::Rouge2 => scores.rouge2,
            ScoreKind::RougeL => scores.rouge_l,
        }
    }
}

/// Per-dimension score sequences in sample order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreSeries {
    pub rouge1: Vec<f64>,
    pub rouge2: Vec<f64>,
    pub rouge_l: Vec<f64>,
}

impl ScoreSeries {
    pub fn from_records(records: &[SampleRecord]) -> Self {
        let mut series = ScoreSeries {
            rouge1: Vec::with_capacity(records.len()),
            rouge2: Vec::with_capacity(records.len()),
            rouge_l: Vec::with_capacity(records.len()),
        };
        for record in records {
            series.rouge1.push(record.scores.rouge1);
            series.rouge2.push(record.scores.rouge2);
            series.rouge_l.push(record.scores.rouge_l);
        }
        series
    }

    pub fn get(&self, kind: ScoreKind) -> &[f64] {
        match kind {
            ScoreKind::Rouge1 => &self.rouge1,
            ScoreKind::Rouge2 => &self.rouge2,
            ScoreKind::RougeL => &self.rouge_l,
        }
    }

    pub fn len(&self) -> usize {
        self.rouge1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rouge1.is_empty()
    }
}

/// Arithmetic means over every sample of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Averages {
    pub n_samples: usize,
    pub scores: RougeScores,
}
