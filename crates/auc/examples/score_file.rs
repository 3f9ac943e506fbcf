//! Score a `ground_truth,prediction` file and explain degenerate inputs.
//!
//! Run:
//!   cargo run -p auc-rs --example score_file -- data/scores.csv

use auc_rs::io::load_samples;
use auc_rs::{compute_auc, AucError, LabelCounts};
use std::path::PathBuf;

fn main() {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/scores.csv")));

    let mut samples = match load_samples(&path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}: {}", path.display(), e);
            return;
        }
    };

    let counts = LabelCounts::tally(&samples);
    println!(
        "{} samples ({} positive, {} negative)",
        counts.total(),
        counts.positives,
        counts.negatives
    );

    match compute_auc(&mut samples) {
        Ok(score) => println!("AUC = {score:.6}"),
        Err(AucError::AllNegatives) => println!("no positives, AUC undefined"),
        Err(AucError::AllPositives) => println!("no negatives, AUC undefined"),
        Err(e) => println!("error: {e}"),
    }
}
