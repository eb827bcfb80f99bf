// Unit tests for the ROUGE scorer through its public API.
//
// Covers the boundary scenarios (identical and disjoint texts), the [0, 1]
// range over assorted inputs, and agreement with hand-computed values.

use textbench::rouge::score::{rouge_l, rouge_n};
use textbench::rouge::scorer::{OverlapScorer, RougeScorer, RougeType};
use textbench::rouge::tokenize::tokenize;

// ============================================================
// Boundary scenarios
// ============================================================

#[test]
fn identical_summary_scores_one() {
    let text = "Ministers agreed a new trade deal with the EU on Tuesday.";
    let value = RougeScorer::default().score(0, text, text).unwrap();
    assert!((value - 1.0).abs() < 1e-9, "got {value}");
}

#[test]
fn disjoint_vocabulary_scores_zero() {
    let value = RougeScorer::default()
        .score(0, "football club signs striker", "inflation hits record high")
        .unwrap();
    assert_eq!(value, 0.0);
}

#[test]
fn punctuation_only_difference_scores_one() {
    let value = RougeScorer::default()
        .score(0, "Inflation hits record high!", "inflation, hits record-high")
        .unwrap();
    assert!((value - 1.0).abs() < 1e-9);
}

// ============================================================
// Range and symmetry
// ============================================================

#[test]
fn scores_stay_in_unit_interval() {
    let pairs = [
        ("", ""),
        ("a", ""),
        ("", "a"),
        ("a a a a", "a"),
        ("the cat", "the the the cat cat"),
        ("x y z", "z y x"),
    ];
    for (candidate, reference) in pairs {
        for score in [
            rouge_n(candidate, reference, 1),
            rouge_n(candidate, reference, 2),
            rouge_l(candidate, reference),
        ] {
            for v in [score.precision, score.recall, score.fmeasure] {
                assert!(
                    (0.0..=1.0).contains(&v),
                    "{v} out of range for {candidate:?} / {reference:?}"
                );
            }
        }
    }
}

#[test]
fn rouge1_fmeasure_is_symmetric() {
    let a = "the central bank raised interest rates";
    let b = "interest rates were raised by the bank";
    let ab = rouge_n(a, b, 1);
    let ba = rouge_n(b, a, 1);
    assert!((ab.fmeasure - ba.fmeasure).abs() < 1e-12);
    assert!((ab.precision - ba.recall).abs() < 1e-12);
}

#[test]
fn word_order_matters_for_rouge_l_not_rouge1() {
    let r1 = rouge_n("x y z", "z y x", 1);
    let rl = rouge_l("x y z", "z y x");
    assert!((r1.fmeasure - 1.0).abs() < 1e-9);
    assert!((rl.fmeasure - 1.0 / 3.0).abs() < 1e-9);
}

// ============================================================
// Scorer selection
// ============================================================

#[test]
fn scorer_name_matches_column() {
    for (kind, name) in [
        (RougeType::Rouge1, "rouge1"),
        (RougeType::Rouge2, "rouge2"),
        (RougeType::RougeL, "rougeL"),
    ] {
        assert_eq!(RougeScorer::new(kind).name(), name);
        assert_eq!(kind.to_string(), name);
    }
}

#[test]
fn tokenizer_keeps_digits() {
    assert_eq!(tokenize("GDP grew 2.5% in Q3"), vec!["gdp", "grew", "2", "5", "in", "q3"]);
}
