use crate::input::Fixture;
use crate::model::scores::RougeScores;

/// Everything known about one fixture after it has been generated and scored.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRecord {
    pub index: usize,
    pub fixture: Fixture,
    pub generated: String,
    pub scores: RougeScores,
}
