//! Reference AUC scorers for cross-checks and benchmarks.

use crate::error::AucError;
use crate::types::{LabelCounts, Sample};

fn check_input(samples: &[Sample]) -> Result<LabelCounts, AucError> {
    assert!(
        samples.len() >= 2,
        "need at least two samples to calculate AUC, got {}",
        samples.len()
    );
    let counts = LabelCounts::tally(samples);
    counts.check_mixed()?;
    Ok(counts)
}

/// AUC from its probabilistic definition (Mann-Whitney U statistic).
///
/// Counts, over every (positive, negative) pair, the pairs where the
/// positive is scored higher, plus half the tied pairs. Runs in `O(P·N)`
/// and is meant for small datasets only.
pub fn pairwise_auc(samples: &[Sample]) -> Result<f64, AucError> {
    let counts = check_input(samples)?;

    let (positives, negatives): (Vec<f32>, Vec<f32>) = {
        let mut pos = Vec::with_capacity(counts.positives as usize);
        let mut neg = Vec::with_capacity(counts.negatives as usize);
        for s in samples {
            if s.ground_truth.is_positive() {
                pos.push(s.prediction);
            } else {
                neg.push(s.prediction);
            }
        }
        (pos, neg)
    };

    // Doubled so that ties contribute an integer 1.
    let mut wins2: u64 = 0;
    for &p in &positives {
        for &n in &negatives {
            if p > n {
                wins2 += 2;
            } else if p == n {
                wins2 += 1;
            }
        }
    }

    Ok(0.5 * wins2 as f64 / counts.positives as f64 / counts.negatives as f64)
}

/// AUC from a floating-point trapezoidal scan of the ROC curve.
///
/// Walks thresholds from the highest prediction down, emitting one
/// `(FPR, TPR)` point per distinct prediction and summing trapezoids in
/// `f64`. This is the conventional formulation that the integer engine in
/// [`crate::auc`] replaces.
pub fn float_trapezoid_auc(samples: &[Sample]) -> Result<f64, AucError> {
    let counts = check_input(samples)?;
    let pos_total = counts.positives as f64;
    let neg_total = counts.negatives as f64;

    let mut sorted = samples.to_vec();
    sorted.sort_unstable_by(|a, b| b.prediction.total_cmp(&a.prediction));

    let mut area = 0.0;
    let (mut tp, mut fp) = (0u64, 0u64);
    let (mut prev_tpr, mut prev_fpr) = (0.0, 0.0);

    let mut i = 0;
    while i < sorted.len() {
        let threshold = sorted[i].prediction;
        while i < sorted.len() && sorted[i].prediction == threshold {
            if sorted[i].ground_truth.is_positive() {
                tp += 1;
            } else {
                fp += 1;
            }
            i += 1;
        }
        let tpr = tp as f64 / pos_total;
        let fpr = fp as f64 / neg_total;
        area += (fpr - prev_fpr) * (tpr + prev_tpr) / 2.0;
        prev_tpr = tpr;
        prev_fpr = fpr;
    }

    Ok(area)
}
