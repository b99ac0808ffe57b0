use crate::model::record::SampleRecord;
use crate::model::scores::{Averages, ScoreKind};
use crate::report::format_f64_3;

const SEPARATOR_WIDTH: usize = 40;

pub fn render_sample_block(record: &SampleRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("Prompt: {}\n", record.fixture.input));
    out.push_str(&format!("Expected: {}\n", record.fixture.expected));
    out.push_str(&format!("Generated: {}\n", record.generated));
    let scores = ScoreKind::ALL
        .iter()
        .map(|kind| format!("{}: {}", kind.label(), format_f64_3(kind.pick(&record.scores))))
        .collect::<Vec<_>>();
    out.push_str(&scores.join(", "));
    out.push('\n');
    out.push_str(&"=".repeat(SEPARATOR_WIDTH));
    out.push('\n');
    out
}

pub fn render_averages(averages: &Averages) -> String {
    let mut out = String::new();
    for kind in ScoreKind::ALL {
        out.push_str(&format!(
            "Average {}: {}\n",
            kind.label(),
            format_f64_3(kind.pick(&averages.scores))
        ));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
