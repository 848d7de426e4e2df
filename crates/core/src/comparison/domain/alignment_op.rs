use std::ops::Range;

/// One block of an alignment script turning the reference into the hypothesis.
///
/// Ranges are half-open indices into the normalized reference and hypothesis
/// token sequences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AlignmentOp {
    Equal {
        ref_range: Range<usize>,
        hyp_range: Range<usize>,
    },
    Replace {
        ref_range: Range<usize>,
        hyp_range: Range<usize>,
    },
    Delete {
        ref_range: Range<usize>,
        hyp_range: Range<usize>,
    },
    Insert {
        ref_range: Range<usize>,
        hyp_range: Range<usize>,
    },
}

impl AlignmentOp {
    pub fn ref_range(&self) -> Range<usize> {
        match self {
            Self::Equal { ref_range, .. }
            | Self::Replace { ref_range, .. }
            | Self::Delete { ref_range, .. }
            | Self::Insert { ref_range, .. } => ref_range.clone(),
        }
    }

    pub fn hyp_range(&self) -> Range<usize> {
        match self {
            Self::Equal { hyp_range, .. }
            | Self::Replace { hyp_range, .. }
            | Self::Delete { hyp_range, .. }
            | Self::Insert { hyp_range, .. } => hyp_range.clone(),
        }
    }

    pub fn is_equal(&self) -> bool {
        matches!(self, Self::Equal { .. })
    }
}
