use serde::Serialize;

use super::comparison_error::ComparisonError;
use super::highlighter::Highlighter;
use super::normalizer::Normalizer;
use super::scorer::Scorer;
use super::sequence_aligner::SequenceAligner;

/// Outcome of comparing a spoken attempt against its reference script.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Comparison {
    /// Similarity percentage, two decimals, not clamped.
    pub score: f64,
    /// Highlighted hypothesis markup. Not HTML-escaped.
    pub html: String,
}

/// Compares a reference script with a transcribed attempt: normalize, align,
/// score, highlight.
pub struct ScriptComparator;

impl ScriptComparator {
    pub fn compare(reference: &str, hypothesis: &str) -> Result<Comparison, ComparisonError> {
        if reference.trim().is_empty() {
            return Err(ComparisonError::invalid_input("reference script is empty"));
        }
        if hypothesis.trim().is_empty() {
            return Err(ComparisonError::invalid_input("spoken attempt is empty"));
        }

        let ref_tokens = Normalizer::normalize(reference);
        let hyp_tokens = Normalizer::normalize(hypothesis);
        let raw_tokens = Normalizer::raw_tokens(hypothesis);

        let ops = SequenceAligner::align(&ref_tokens, &hyp_tokens);
        let score = Scorer::score(&ops, &ref_tokens, &hyp_tokens)?;
        let html = Highlighter::render(&ops, &ref_tokens, &hyp_tokens, &raw_tokens);

        log::debug!(
            "Compared {} reference / {} spoken words in {} ops, score {score}",
            ref_tokens.len(),
            hyp_tokens.len(),
            ops.len()
        );

        Ok(Comparison { score, html })
    }
}
