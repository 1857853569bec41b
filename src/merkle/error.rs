use thiserror::Error;

/// An error that occurred while building a merkle tree or an inclusion proof.
///
/// All variants are fail-fast: the offending call produces nothing, and there
/// is no partial state to recover. Proof *verification* never errors; a
/// mismatched proof is an ordinary `false`.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum MerkleTreeError {
    /// A tree cannot be built over zero leaves
    #[error("cannot build a merkle tree from an empty leaf sequence")]
    EmptyInput,
    /// The leaf sequence reached the configured maximum tree size
    #[error("leaf count {count} reaches the maximum tree size {max}")]
    InputTooLarge {
        /// Number of leaves that were supplied
        count: usize,
        /// The configured limit; the leaf count must stay strictly below it
        max: usize,
    },
    /// An inclusion proof was requested for an index outside the leaf level
    #[error("leaf index {index} is out of range for a tree with {leaf_count} leaves")]
    IndexOutOfRange {
        /// The requested leaf index
        index: usize,
        /// Number of leaves in the tree
        leaf_count: usize,
    },
}
