/// Errors returned by auc-rs operations.
#[derive(Debug, thiserror::Error)]
pub enum AucError {
    /// Every ground truth label is 0, so there is no ranking to score.
    #[error("ground truth are all zeros, can't calc AUC")]
    AllNegatives,

    /// Every ground truth label is 1, so there is no ranking to score.
    #[error("ground truth are all ones, can't calc AUC")]
    AllPositives,

    /// A raw ground truth value outside `{0, 1}`.
    #[error("ground truth value must be either 0 or 1, got: {0}")]
    InvalidLabel(u32),

    /// The input held fewer records than an AUC needs.
    #[error("need at least two data points to calculate AUC, found {found}")]
    TooFewSamples {
        /// Number of records actually read.
        found: usize,
    },

    /// A parse error occurred while reading a sample file.
    #[error("parse error at line {line}: {message}")]
    ParseError {
        /// 1-based line number where the error occurred.
        line: usize,
        /// Description of the parse failure.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
