use std::collections::HashMap;

use super::alignment_op::AlignmentOp;

/// A run of `size` equal tokens starting at `ref_start` / `hyp_start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchingBlock {
    pub ref_start: usize,
    pub hyp_start: usize,
    pub size: usize,
}

/// Longest-matching-block diff over two token sequences.
///
/// Finds the longest run of equal tokens, then recurses on the pieces to its
/// left and right. Among equally long runs the one starting earliest in the
/// reference wins, then earliest in the hypothesis. No token is treated as
/// junk and frequent tokens are never discarded, so results are stable for any
/// input length.
pub struct SequenceAligner<'a> {
    reference: &'a [String],
    hypothesis: &'a [String],
    /// Hypothesis token -> ascending indices where it occurs.
    hyp_index: HashMap<&'a str, Vec<usize>>,
}

impl<'a> SequenceAligner<'a> {
    pub fn new(reference: &'a [String], hypothesis: &'a [String]) -> Self {
        let mut hyp_index: HashMap<&str, Vec<usize>> = HashMap::new();
        for (j, token) in hypothesis.iter().enumerate() {
            hyp_index.entry(token.as_str()).or_default().push(j);
        }
        Self {
            reference,
            hypothesis,
            hyp_index,
        }
    }

    /// Aligns `reference` against `hypothesis` in one call.
    pub fn align(reference: &[String], hypothesis: &[String]) -> Vec<AlignmentOp> {
        SequenceAligner::new(reference, hypothesis).opcodes()
    }

    /// Longest equal run inside `ref[alo..ahi]` and `hyp[blo..bhi]`.
    ///
    /// Returns a block with `size == 0` at `(alo, blo)` when nothing matches.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> MatchingBlock {
        let mut best = MatchingBlock {
            ref_start: alo,
            hyp_start: blo,
            size: 0,
        };
        // Length of the match ending at hyp index j, for the previous ref row.
        let mut run_lengths: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut next_run_lengths = HashMap::new();
            if let Some(positions) = self.hyp_index.get(self.reference[i].as_str()) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| run_lengths.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_run_lengths.insert(j, k);
                    if k > best.size {
                        best = MatchingBlock {
                            ref_start: i + 1 - k,
                            hyp_start: j + 1 - k,
                            size: k,
                        };
                    }
                }
            }
            run_lengths = next_run_lengths;
        }

        best
    }

    /// All maximal matching blocks in ascending order, adjacent blocks merged,
    /// terminated by a `(len_ref, len_hyp, 0)` sentinel.
    pub fn matching_blocks(&self) -> Vec<MatchingBlock> {
        let len_ref = self.reference.len();
        let len_hyp = self.hypothesis.len();

        let mut pending = vec![(0, len_ref, 0, len_hyp)];
        let mut blocks = Vec::new();
        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);
            if block.size == 0 {
                continue;
            }
            let (i, j, k) = (block.ref_start, block.hyp_start, block.size);
            blocks.push(block);
            if alo < i && blo < j {
                pending.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                pending.push((i + k, ahi, j + k, bhi));
            }
        }
        blocks.sort_by_key(|b| (b.ref_start, b.hyp_start, b.size));

        let mut merged: Vec<MatchingBlock> = Vec::with_capacity(blocks.len() + 1);
        for block in blocks {
            match merged.last_mut() {
                Some(last)
                    if last.ref_start + last.size == block.ref_start
                        && last.hyp_start + last.size == block.hyp_start =>
                {
                    last.size += block.size;
                }
                _ => merged.push(block),
            }
        }
        merged.push(MatchingBlock {
            ref_start: len_ref,
            hyp_start: len_hyp,
            size: 0,
        });
        merged
    }

    /// Alignment script covering both sequences end to end.
    pub fn opcodes(&self) -> Vec<AlignmentOp> {
        let mut ops = Vec::new();
        let (mut i, mut j) = (0, 0);

        for block in self.matching_blocks() {
            let (ai, bj) = (block.ref_start, block.hyp_start);
            let ref_range = i..ai;
            let hyp_range = j..bj;
            if i < ai && j < bj {
                ops.push(AlignmentOp::Replace {
                    ref_range,
                    hyp_range,
                });
            } else if i < ai {
                ops.push(AlignmentOp::Delete {
                    ref_range,
                    hyp_range,
                });
            } else if j < bj {
                ops.push(AlignmentOp::Insert {
                    ref_range,
                    hyp_range,
                });
            }

            i = ai + block.size;
            j = bj + block.size;
            if block.size > 0 {
                ops.push(AlignmentOp::Equal {
                    ref_range: ai..i,
                    hyp_range: bj..j,
                });
            }
        }

        ops
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tokens(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn equal(r: std::ops::Range<usize>, h: std::ops::Range<usize>) -> AlignmentOp {
        AlignmentOp::Equal {
            ref_range: r,
            hyp_range: h,
        }
    }

    fn replace(r: std::ops::Range<usize>, h: std::ops::Range<usize>) -> AlignmentOp {
        AlignmentOp::Replace {
            ref_range: r,
            hyp_range: h,
        }
    }

    fn delete(r: std::ops::Range<usize>, h: std::ops::Range<usize>) -> AlignmentOp {
        AlignmentOp::Delete {
            ref_range: r,
            hyp_range: h,
        }
    }

    fn insert(r: std::ops::Range<usize>, h: std::ops::Range<usize>) -> AlignmentOp {
        AlignmentOp::Insert {
            ref_range: r,
            hyp_range: h,
        }
    }

    fn assert_covers_both(ops: &[AlignmentOp], len_ref: usize, len_hyp: usize) {
        let (mut i, mut j) = (0, 0);
        for op in ops {
            assert_eq!(op.ref_range().start, i, "gap or overlap in reference at {op:?}");
            assert_eq!(op.hyp_range().start, j, "gap or overlap in hypothesis at {op:?}");
            i = op.ref_range().end;
            j = op.hyp_range().end;
        }
        assert_eq!(i, len_ref);
        assert_eq!(j, len_hyp);
    }

    // ── Longest match ─────────────────────────────────────────────────

    #[test]
    fn test_find_longest_match_prefers_longest_run() {
        let a = tokens("x a b c y");
        let b = tokens("a b c z a b");
        let aligner = SequenceAligner::new(&a, &b);
        let best = aligner.find_longest_match(0, a.len(), 0, b.len());
        assert_eq!(
            best,
            MatchingBlock {
                ref_start: 1,
                hyp_start: 0,
                size: 3
            }
        );
    }

    #[test]
    fn test_find_longest_match_tie_breaks_to_earliest() {
        let a = tokens("a b");
        let b = tokens("b a");
        let aligner = SequenceAligner::new(&a, &b);
        let best = aligner.find_longest_match(0, 2, 0, 2);
        assert_eq!(
            best,
            MatchingBlock {
                ref_start: 0,
                hyp_start: 1,
                size: 1
            }
        );
    }

    #[test]
    fn test_find_longest_match_earliest_in_hypothesis_for_same_ref_start() {
        let a = tokens("a");
        let b = tokens("b a a");
        let aligner = SequenceAligner::new(&a, &b);
        let best = aligner.find_longest_match(0, 1, 0, 3);
        assert_eq!(best.hyp_start, 1);
    }

    #[test]
    fn test_find_longest_match_respects_bounds() {
        let a = tokens("a b c");
        let b = tokens("a b c");
        let aligner = SequenceAligner::new(&a, &b);
        let best = aligner.find_longest_match(1, 3, 0, 1);
        assert_eq!(best.size, 0);
        assert_eq!((best.ref_start, best.hyp_start), (1, 0));
    }

    // ── Matching blocks ───────────────────────────────────────────────

    #[test]
    fn test_matching_blocks_end_with_sentinel() {
        let a = tokens("a b x c");
        let b = tokens("a b y c");
        let blocks = SequenceAligner::new(&a, &b).matching_blocks();
        let triples: Vec<_> = blocks
            .iter()
            .map(|b| (b.ref_start, b.hyp_start, b.size))
            .collect();
        assert_eq!(triples, vec![(0, 0, 2), (3, 3, 1), (4, 4, 0)]);
    }

    #[test]
    fn test_matching_blocks_empty_inputs() {
        let empty: Vec<String> = Vec::new();
        let blocks = SequenceAligner::new(&empty, &empty).matching_blocks();
        assert_eq!(
            blocks,
            vec![MatchingBlock {
                ref_start: 0,
                hyp_start: 0,
                size: 0
            }]
        );
    }

    // ── Opcodes ───────────────────────────────────────────────────────

    #[rstest]
    #[case::identical("the cat sat", "the cat sat", vec![equal(0..3, 0..3)])]
    #[case::substitution(
        "the cat sat",
        "the dog sat",
        vec![equal(0..1, 0..1), replace(1..2, 1..2), equal(2..3, 2..3)]
    )]
    #[case::trailing_deletion("hello world", "hello", vec![equal(0..1, 0..1), delete(1..2, 1..1)])]
    #[case::trailing_insertion("hi", "hi there friend", vec![equal(0..1, 0..1), insert(1..1, 1..3)])]
    #[case::leading_insertion("a b c", "x a b c", vec![insert(0..0, 0..1), equal(0..3, 1..4)])]
    #[case::middle_deletion(
        "a b c",
        "a c",
        vec![equal(0..1, 0..1), delete(1..2, 1..1), equal(2..3, 1..2)]
    )]
    #[case::nothing_in_common("a b", "c d e", vec![replace(0..2, 0..3)])]
    #[case::swapped("a b", "b a", vec![insert(0..0, 0..1), equal(0..1, 1..2), delete(1..2, 2..2)])]
    fn test_opcodes(#[case] a: &str, #[case] b: &str, #[case] expected: Vec<AlignmentOp>) {
        let (a, b) = (tokens(a), tokens(b));
        let ops = SequenceAligner::align(&a, &b);
        assert_eq!(ops, expected);
    }

    #[test]
    fn test_opcodes_empty_inputs_yield_no_ops() {
        let empty: Vec<String> = Vec::new();
        assert!(SequenceAligner::align(&empty, &empty).is_empty());
    }

    #[test]
    fn test_opcodes_empty_reference_is_single_insert() {
        let empty: Vec<String> = Vec::new();
        let b = tokens("one two");
        assert_eq!(SequenceAligner::align(&empty, &b), vec![insert(0..0, 0..2)]);
    }

    #[test]
    fn test_opcodes_identical_is_single_equal() {
        let a = tokens("to be or not to be that is the question");
        let ops = SequenceAligner::align(&a, &a);
        assert_eq!(ops, vec![equal(0..a.len(), 0..a.len())]);
    }

    #[rstest]
    #[case("the quick brown fox jumps over the lazy dog", "a quick brown dog jumps over the fox")]
    #[case("one two three four five", "five four three two one")]
    #[case("a a a b b b", "b a b a b a")]
    #[case("x", "y y y y")]
    fn test_opcodes_cover_both_sequences(#[case] a: &str, #[case] b: &str) {
        let (a, b) = (tokens(a), tokens(b));
        let ops = SequenceAligner::align(&a, &b);
        assert_covers_both(&ops, a.len(), b.len());
    }

    #[test]
    fn test_equal_ops_really_match() {
        let a = tokens("we hold these truths to be self evident");
        let b = tokens("we hold the truth to be evident");
        for op in SequenceAligner::align(&a, &b) {
            if op.is_equal() {
                assert_eq!(&a[op.ref_range()], &b[op.hyp_range()]);
            }
        }
    }
}
