use crate::error::AucError;

/// Binary ground truth of a [`Sample`].
///
/// Matches the raw integer encoding of the text format:
/// `Negative=0, Positive=1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Label {
    /// Ground truth 0.
    Negative = 0,
    /// Ground truth 1.
    Positive = 1,
}

impl Label {
    /// `true` for [`Label::Positive`].
    pub fn is_positive(self) -> bool {
        self == Label::Positive
    }
}

impl TryFrom<u32> for Label {
    type Error = AucError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Label::Negative),
            1 => Ok(Label::Positive),
            other => Err(AucError::InvalidLabel(other)),
        }
    }
}

impl From<bool> for Label {
    fn from(positive: bool) -> Self {
        if positive {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}

impl From<Label> for u32 {
    fn from(label: Label) -> Self {
        label as u32
    }
}

/// A single scored observation: `ground_truth,prediction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Binary label.
    pub ground_truth: Label,
    /// Classifier score. Higher means "more positive"; ties are meaningful
    /// and are grouped into one ROC step.
    pub prediction: f32,
}

impl Sample {
    /// Build a sample from a label and a prediction.
    pub fn new(ground_truth: Label, prediction: f32) -> Self {
        Self {
            ground_truth,
            prediction,
        }
    }

    /// Shorthand for a [`Label::Positive`] sample.
    pub fn positive(prediction: f32) -> Self {
        Self::new(Label::Positive, prediction)
    }

    /// Shorthand for a [`Label::Negative`] sample.
    pub fn negative(prediction: f32) -> Self {
        Self::new(Label::Negative, prediction)
    }
}

/// Number of positive and negative samples in a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LabelCounts {
    /// Samples labelled 1.
    pub positives: u64,
    /// Samples labelled 0.
    pub negatives: u64,
}

impl LabelCounts {
    /// Count the labels of `samples`.
    pub fn tally(samples: &[Sample]) -> Self {
        let positives = samples
            .iter()
            .filter(|s| s.ground_truth.is_positive())
            .count() as u64;
        Self {
            positives,
            negatives: samples.len() as u64 - positives,
        }
    }

    /// Total number of samples counted.
    pub fn total(&self) -> u64 {
        self.positives + self.negatives
    }

    /// Reject label mixes that leave the AUC undefined.
    pub fn check_mixed(&self) -> Result<(), AucError> {
        if self.positives == 0 {
            return Err(AucError::AllNegatives);
        }
        if self.negatives == 0 {
            return Err(AucError::AllPositives);
        }
        Ok(())
    }
}
