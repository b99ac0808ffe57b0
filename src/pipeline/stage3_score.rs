use crate::input::Fixture;
use crate::model::record::SampleRecord;
use crate::rouge;

pub fn score_sample(index: usize, fixture: &Fixture, generated: String) -> SampleRecord {
    let scores = rouge::score(&fixture.expected, &generated);
    SampleRecord {
        index,
        fixture: fixture.clone(),
        generated,
        scores,
    }
}
