use super::*;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn toks(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

#[test]
fn test_identical_text_scores_one() {
    let s = score("The cat sat on the mat.", "the cat sat on the mat");
    assert_close(s.rouge1, 1.0);
    assert_close(s.rouge2, 1.0);
    assert_close(s.rouge_l, 1.0);
}

#[test]
fn test_disjoint_text_scores_zero() {
    let s = score("apple orange", "dog cat");
    assert_eq!(s, RougeScores::ZERO);
}

#[test]
fn test_hello_world_fixture() {
    let s = score("Hello world", "Hello world");
    assert_close(s.rouge1, 1.0);
    assert_close(s.rouge2, 1.0);
    assert_close(s.rouge_l, 1.0);
}

#[test]
fn test_stemming_merges_inflections() {
    // the / cat / run shared after stemming, are vs is differ.
    let s = score("The cats are running", "the cat is run");
    assert_close(s.rouge1, 0.75);
}

#[test]
fn test_partial_overlap() {
    let s = score("the cat sat", "the cat ran");
    assert_close(s.rouge1, 2.0 / 3.0);
    assert_close(s.rouge2, 0.5);
    assert_close(s.rouge_l, 2.0 / 3.0);
}

#[test]
fn test_precision_recall_asymmetry() {
    // target 2 tokens, prediction 4 tokens, overlap 2: p = 0.5, r = 1.0
    let s = score("hello world", "hello world and more");
    assert_close(s.rouge1, 2.0 * 0.5 * 1.0 / 1.5);
}

#[test]
fn test_empty_generated_scores_zero() {
    assert_eq!(score("machine learning", ""), RougeScores::ZERO);
    assert_eq!(score("", "machine learning"), RougeScores::ZERO);
    assert_eq!(score("", ""), RougeScores::ZERO);
}

#[test]
fn test_ngram_counts_are_clipped() {
    // "the" appears twice in the prediction but once in the target.
    let v = rouge_n(&toks("the cat"), &toks("the the"), 1);
    assert_close(v, 0.5);
}

#[test]
fn test_lcs_is_subsequence_not_substring() {
    assert_eq!(lcs_length(&toks("a b c d"), &toks("a x c y")), 2);
    assert_close(rouge_l(&toks("a b c d"), &toks("a x c y")), 0.5);
}

#[test]
fn test_rouge2_needs_two_tokens() {
    assert_close(rouge_n(&toks("hello"), &toks("hello"), 2), 0.0);
}

#[test]
fn test_scores_stay_in_unit_interval() {
    let texts = [
        "",
        "a",
        "a a a a",
        "The quick brown fox jumps over the lazy dog",
        "dogs jumped over quick foxes, lazily!",
        "1 2 3 4 5 6 7 8 9 10",
        "ROUGE measures overlap between summaries",
        "Überraschung: naïve café",
    ];
    for expected in &texts {
        for generated in &texts {
            let s = score(expected, generated);
            for v in [s.rouge1, s.rouge2, s.rouge_l] {
                assert!((0.0..=1.0).contains(&v), "{v} out of range");
            }
        }
    }
}

#[test]
fn test_fmeasure_zero_guard() {
    assert_eq!(fmeasure(0.0, 0.0), 0.0);
    assert_close(fmeasure(1.0, 1.0), 1.0);
}

#[test]
fn test_irregular_past_tense_matches_base_form() {
    // died -> die: 3 shared of 3 target and 4 predicted tokens.
    let s = score("the plant died", "the plant will die");
    assert_close(s.rouge1, 6.0 / 7.0);
}

#[test]
fn test_short_plural_keeps_ie_stem() {
    // ties -> tie, so tie and it are shared.
    let s = score("I will tie it", "he ties it");
    assert_close(s.rouge1, 4.0 / 7.0);
}
