pub mod alignment_op;
pub mod comparison_error;
pub mod highlighter;
pub mod normalizer;
pub mod scorer;
pub mod script_comparator;
pub mod sequence_aligner;
