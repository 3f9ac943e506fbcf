//! Reading labelled predictions from text files.
//!
//! One record per line:
//!
//! ```text
//! <ground_truth>,<prediction>
//! ```
//!
//! `ground_truth` is the integer 0 or 1 and `prediction` any real number.
//! Whitespace around either field is ignored, so `0, 0.1` and `1 ,0.8`
//! are both accepted. Blank lines are skipped.

use std::io::BufRead;
use std::path::Path;

use tracing::debug;

use crate::error::AucError;
use crate::types::{Label, Sample};

/// Minimum number of records a file must hold to be scored.
pub const MIN_SAMPLES: usize = 2;

/// Load samples from a file.
pub fn load_samples(path: &Path) -> Result<Vec<Sample>, AucError> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    load_samples_from_reader(reader)
}

/// Load samples from any buffered reader.
///
/// Fails with [`AucError::TooFewSamples`] when fewer than [`MIN_SAMPLES`]
/// records are read.
pub fn load_samples_from_reader(reader: impl BufRead) -> Result<Vec<Sample>, AucError> {
    let mut samples = Vec::new();

    for (line_idx, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        samples.push(parse_record(line, line_idx + 1)?);
    }

    debug!(count = samples.len(), "data points read");

    if samples.len() < MIN_SAMPLES {
        return Err(AucError::TooFewSamples {
            found: samples.len(),
        });
    }
    Ok(samples)
}

fn parse_record(line: &str, line_num: usize) -> Result<Sample, AucError> {
    let (gt_str, pred_str) = line.split_once(',').ok_or_else(|| AucError::ParseError {
        line: line_num,
        message: format!("expected ground_truth,prediction, got: {}", line),
    })?;
    let (gt_str, pred_str) = (gt_str.trim(), pred_str.trim());

    let raw: u32 = gt_str.parse().map_err(|_| AucError::ParseError {
        line: line_num,
        message: format!("invalid ground truth: {}", gt_str),
    })?;
    let ground_truth = Label::try_from(raw).map_err(|e| AucError::ParseError {
        line: line_num,
        message: e.to_string(),
    })?;

    let prediction: f32 = pred_str
        .parse()
        .ok()
        .filter(|p: &f32| !p.is_nan())
        .ok_or_else(|| AucError::ParseError {
            line: line_num,
            message: format!("invalid prediction: {}", pred_str),
        })?;

    Ok(Sample {
        ground_truth,
        prediction,
    })
}

// ─── Tests ───────────────────────────────────────────────────────────
