use crate::model::{EvaluationResult, PairSet};

// Metrics are computed over the union of the two sets, so every pair in
// scope is a true positive, false positive, or false negative; pairs absent
// from both sets never enter the universe.
pub fn evaluate(predicted: &PairSet, ground_truth: &PairSet) -> EvaluationResult {
    let true_positives = predicted.intersection(ground_truth).count();
    let false_positives = predicted.difference(ground_truth).count();
    let false_negatives = ground_truth.difference(predicted).count();
    let universe_size = true_positives + false_positives + false_negatives;

    let precision = ratio(true_positives, true_positives + false_positives);
    let recall = ratio(true_positives, true_positives + false_negatives);
    let f1 = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };
    let accuracy = ratio(true_positives, universe_size);

    EvaluationResult {
        precision,
        recall,
        f1,
        accuracy,
        true_positives,
        false_positives,
        false_negatives,
        universe_size,
    }
}

// Zero denominators report 0.0 rather than NaN; the counts in the result
// distinguish that case from a genuine zero score.
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
