use crate::shared::constants::{CONTAINER_CLASS, MATCHED_CLASS, MISMATCHED_CLASS};

use super::alignment_op::AlignmentOp;

/// Renders the hypothesis as HTML, one span per spoken word.
///
/// Token text is inserted verbatim and never escaped. Callers that show
/// transcripts from untrusted sources in a browser must sanitize the output.
pub struct Highlighter;

impl Highlighter {
    /// Walks the alignment and wraps raw hypothesis tokens in matched or
    /// mismatched spans.
    ///
    /// `Equal`, `Replace` and `Delete` blocks walk their reference range and
    /// emit the raw hypothesis token at the same absolute index, skipping
    /// indices past the end of the hypothesis. Inside a `Replace` block an
    /// index is emitted only when the reference and hypothesis tokens there
    /// are equal. `Insert` blocks emit their hypothesis range. Raw tokens left
    /// over after all ops (counted by how many spans were emitted) are
    /// appended as mismatched.
    pub fn render(
        ops: &[AlignmentOp],
        reference: &[String],
        hypothesis: &[String],
        raw_hypothesis: &[&str],
    ) -> String {
        let mut spans: Vec<String> = Vec::with_capacity(raw_hypothesis.len());
        let mut emit = |class: &str, j: usize| {
            if let Some(token) = raw_hypothesis.get(j) {
                spans.push(span(class, token));
            }
        };

        for op in ops {
            match op {
                AlignmentOp::Equal { ref_range, .. } => {
                    for i in ref_range.clone().filter(|&i| i < hypothesis.len()) {
                        emit(MATCHED_CLASS, i);
                    }
                }
                AlignmentOp::Replace { ref_range, .. } => {
                    for i in ref_range.clone().filter(|&i| i < hypothesis.len()) {
                        if reference.get(i) == hypothesis.get(i) {
                            emit(MISMATCHED_CLASS, i);
                        }
                    }
                }
                AlignmentOp::Delete { ref_range, .. } => {
                    for i in ref_range.clone().filter(|&i| i < hypothesis.len()) {
                        emit(MISMATCHED_CLASS, i);
                    }
                }
                AlignmentOp::Insert { hyp_range, .. } => {
                    for j in hyp_range.clone().filter(|&j| j < hypothesis.len()) {
                        emit(MISMATCHED_CLASS, j);
                    }
                }
            }
        }

        let emitted = spans.len();
        if raw_hypothesis.len() > emitted {
            spans.extend(
                raw_hypothesis[emitted..]
                    .iter()
                    .map(|token| span(MISMATCHED_CLASS, token)),
            );
        }

        format!(
            r#"<div className="{CONTAINER_CLASS}">{}</div>"#,
            spans.join(" ")
        )
    }
}

fn span(class: &str, token: &str) -> String {
    format!(r#"<span className="{class}">{token}</span>"#)
}
