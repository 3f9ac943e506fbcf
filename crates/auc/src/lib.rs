//! # auc-rs
//!
//! Area under the ROC curve for binary-labelled predictions, computed with
//! exact integer arithmetic.
//!
//! The engine sorts the samples by prediction, integrates the ROC curve with
//! the trapezoidal rule over distinct thresholds while counting in `u64`,
//! and only converts to `f64` for the final normalization. The result is
//! identical to the Mann-Whitney definition of AUC, ties included.
//!
//! ```
//! use auc_rs::{compute_auc, Sample};
//!
//! let mut samples = vec![
//!     Sample::negative(0.1),
//!     Sample::negative(3.0),
//!     Sample::positive(0.8),
//! ];
//! assert_eq!(compute_auc(&mut samples).unwrap(), 0.5);
//! ```

pub mod auc;
pub mod error;
pub mod io;
pub mod metrics;
pub mod types;

pub use auc::{auc, compute_auc, sort_by_prediction, MAX_SAMPLES};
pub use error::AucError;
pub use types::*;
