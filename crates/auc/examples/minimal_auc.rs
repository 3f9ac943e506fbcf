//! Minimal self-contained AUC example.
//!
//! Run:
//!   cargo run -p auc-rs --example minimal_auc

use auc_rs::metrics::pairwise_auc;
use auc_rs::{auc, Sample};

fn main() {
    // Two classifier scores per class; one positive ties with a negative.
    let samples = vec![
        Sample::positive(0.9),
        Sample::positive(0.4),
        Sample::negative(0.4),
        Sample::negative(0.2),
    ];

    let score = auc(&samples).expect("labels are mixed");
    println!("AUC: {score}");

    let reference = pairwise_auc(&samples).expect("labels are mixed");
    println!("Pairwise reference: {reference}");
}
