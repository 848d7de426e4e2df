use super::alignment_op::AlignmentOp;
use super::comparison_error::ComparisonError;

/// Percentage similarity between the reference and hypothesis token sequences.
pub struct Scorer;

impl Scorer {
    /// `100 - round2(mismatched / max(len_ref, len_hyp) * 100)`, rounded to two
    /// decimals.
    ///
    /// `mismatched` counts only reference-side tokens of non-equal ops, so
    /// extra words in the hypothesis never lower the score on their own. The
    /// result is not clamped.
    pub fn score(
        ops: &[AlignmentOp],
        reference: &[String],
        hypothesis: &[String],
    ) -> Result<f64, ComparisonError> {
        let longest = reference.len().max(hypothesis.len());
        if longest == 0 {
            return Err(ComparisonError::invalid_input(
                "nothing to score: both scripts are empty after normalization",
            ));
        }

        let mismatched: usize = ops
            .iter()
            .filter(|op| !op.is_equal())
            .map(|op| op.ref_range().len())
            .sum();

        let percent_diff = 100.0 - round2(mismatched as f64 / longest as f64 * 100.0);
        Ok(round2(percent_diff))
    }
}

/// Rounds to two decimals, ties to even.
pub(crate) fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    let rounded = scaled.round();
    let rounded = if (scaled - scaled.trunc()).abs() == 0.5 && rounded % 2.0 != 0.0 {
        rounded - scaled.signum()
    } else {
        rounded
    };
    rounded / 100.0
}
