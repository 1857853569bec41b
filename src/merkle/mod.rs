//! A full-layer merkle tree over an ordered sequence of leaf digests: every
//! level's node hashes are kept, root first, and single-leaf inclusion proofs
//! are flat sibling lists thanks to the commutative pair hash.

/// Defines errors that might arise while building trees and proofs.
pub mod error;
/// Defines inclusion proofs on the tree.
pub mod proof;
/// Defines the merkle tree itself.
pub mod tree;
