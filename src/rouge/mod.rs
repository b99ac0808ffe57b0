//! ROUGE-1, ROUGE-2 and ROUGE-L F-measures over Porter-stemmed tokens.

pub mod porter;
pub mod tokenize;

use std::collections::HashMap;

use crate::model::scores::RougeScores;
use tokenize::tokenize;

/// Scores `generated` against the reference `expected`.
pub fn score(expected: &str, generated: &str) -> RougeScores {
    let target = tokenize(expected);
    let prediction = tokenize(generated);
    if target.is_empty() || prediction.is_empty() {
        return RougeScores::ZERO;
    }
    RougeScores {
        rouge1: rouge_n(&target, &prediction, 1),
        rouge2: rouge_n(&target, &prediction, 2),
        rouge_l: rouge_l(&target, &prediction),
    }
}

pub fn rouge_n(target: &[String], prediction: &[String], n: usize) -> f64 {
    let target_ngrams = ngram_counts(target, n);
    let prediction_ngrams = ngram_counts(prediction, n);

    let mut overlap = 0usize;
    for (gram, &count) in &target_ngrams {
        if let Some(&other) = prediction_ngrams.get(gram) {
            overlap += count.min(other);
        }
    }
    let target_total: usize = target_ngrams.values().sum();
    let prediction_total: usize = prediction_ngrams.values().sum();

    let precision = overlap as f64 / prediction_total.max(1) as f64;
    let recall = overlap as f64 / target_total.max(1) as f64;
    fmeasure(precision, recall)
}

pub fn rouge_l(target: &[String], prediction: &[String]) -> f64 {
    if target.is_empty() || prediction.is_empty() {
        return 0.0;
    }
    let lcs = lcs_length(target, prediction) as f64;
    let precision = lcs / prediction.len() as f64;
    let recall = lcs / target.len() as f64;
    fmeasure(precision, recall)
}

pub fn fmeasure(precision: f64, recall: f64) -> f64 {
    if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    }
}

fn ngram_counts(tokens: &[String], n: usize) -> HashMap<&[String], usize> {
    let mut counts = HashMap::new();
    if n == 0 || tokens.len() < n {
        return counts;
    }
    for gram in tokens.windows(n) {
        *counts.entry(gram).or_insert(0) += 1;
    }
    counts
}

/// Two-row dynamic programme over token sequences.
fn lcs_length(a: &[String], b: &[String]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for x in a {
        for (j, y) in b.iter().enumerate() {
            curr[j + 1] = if x == y {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

#[cfg(test)]
#[path = "../../tests/src_inline/rouge/mod.rs"]
mod tests;
