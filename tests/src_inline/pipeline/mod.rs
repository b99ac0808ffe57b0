use std::cell::Cell;

use super::*;
use crate::report::averages;

struct FixedGenerator {
    reply: &'static str,
    calls: Cell<usize>,
}

impl FixedGenerator {
    fn new(reply: &'static str) -> Self {
        Self {
            reply,
            calls: Cell::new(0),
        }
    }
}

impl Generator for FixedGenerator {
    fn generate(&self, _prompt: &str) -> Result<String, ClientError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.reply.to_string())
    }

    fn model(&self) -> &str {
        "stub:latest"
    }
}

/// Echoes the prompt back, failing on one chosen call.
struct EchoGenerator {
    fail_at: Option<usize>,
    calls: Cell<usize>,
}

impl Generator for EchoGenerator {
    fn generate(&self, prompt: &str) -> Result<String, ClientError> {
        let call = self.calls.get();
        self.calls.set(call + 1);
        if self.fail_at == Some(call) {
            return Err(ClientError::Decode("connection reset".to_string()));
        }
        Ok(format!("  {prompt}\n"))
    }

    fn model(&self) -> &str {
        "echo"
    }
}

fn fixture(input: &str, expected: &str) -> Fixture {
    Fixture {
        input: input.to_string(),
        expected: expected.to_string(),
    }
}

#[test]
fn test_fixed_reply_averages_equal_single_score() {
    let fixtures = vec![
        fixture("a", "the cat sat on the mat"),
        fixture("b", "the cat sat on the mat"),
        fixture("c", "the cat sat on the mat"),
    ];
    let generator = FixedGenerator::new("a cat sat on a hat");
    let mut out = Vec::new();

    let records = run_samples(&fixtures, &generator, &mut out).unwrap();
    assert_eq!(generator.calls.get(), 3);

    let once = crate::rouge::score("the cat sat on the mat", "a cat sat on a hat");
    let avg = averages(&records).unwrap();
    assert!((avg.scores.rouge1 - once.rouge1).abs() < 1e-12);
    assert!((avg.scores.rouge2 - once.rouge2).abs() < 1e-12);
    assert!((avg.scores.rouge_l - once.rouge_l).abs() < 1e-12);
}

#[test]
fn test_hello_world_scenario() {
    let fixtures = vec![fixture("Hello", "Hello world")];
    let generator = FixedGenerator::new("Hello world");
    let mut out = Vec::new();

    let records = run_samples(&fixtures, &generator, &mut out).unwrap();
    assert_eq!(records.len(), 1);
    assert!((records[0].scores.rouge1 - 1.0).abs() < 1e-12);
    assert!((records[0].scores.rouge_l - 1.0).abs() < 1e-12);

    let avg = averages(&records).unwrap();
    assert_eq!(avg.scores, records[0].scores);

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Prompt: Hello\nExpected: Hello world\nGenerated: Hello world\n"));
    assert!(text.contains("ROUGE-1: 1.000, ROUGE-2: 1.000, ROUGE-L: 1.000"));
}

#[test]
fn test_records_keep_fixture_order_and_trim() {
    let fixtures = vec![
        fixture("first", "first"),
        fixture("second", "second"),
        fixture("third", "third"),
    ];
    let generator = EchoGenerator {
        fail_at: None,
        calls: Cell::new(0),
    };
    let mut out = Vec::new();

    let records = run_samples(&fixtures, &generator, &mut out).unwrap();
    let order = records
        .iter()
        .map(|r| (r.index, r.generated.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(order, vec![(0, "first"), (1, "second"), (2, "third")]);

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches(&"=".repeat(40)).count(), 3);
}

#[test]
fn test_generation_failure_aborts_with_partial_output() {
    let fixtures = vec![fixture("one", "one"), fixture("two", "two"), fixture("three", "three")];
    let generator = EchoGenerator {
        fail_at: Some(1),
        calls: Cell::new(0),
    };
    let mut out = Vec::new();

    let err = run_samples(&fixtures, &generator, &mut out).unwrap_err();
    match err {
        PipelineError::Generate { index, .. } => assert_eq!(index, 1),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(generator.calls.get(), 2);

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Prompt: one"));
    assert!(!text.contains("Prompt: two"));
}

#[test]
fn test_empty_fixture_slice_produces_no_records() {
    let generator = FixedGenerator::new("unused");
    let mut out = Vec::new();
    let records = run_samples(&[], &generator, &mut out).unwrap();
    assert!(records.is_empty());
    assert_eq!(generator.calls.get(), 0);
    assert!(matches!(averages(&records), Err(ReportError::NoSamples)));
}
