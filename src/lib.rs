//! An unordered merkle tree over hex-encoded sha256 digests.
//!
//! The tree is built once from an ordered sequence of leaf digests and kept
//! in full: every level's node hashes, root level first. Parents are formed
//! with a *commutative* pair hash (the two children are ordered by their hex
//! encoding before hashing), so an inclusion proof is a flat list of sibling
//! digests with no left/right position flags. Levels with an odd node count
//! pair their unmatched last node with itself.
//!
//! ```
//! use umt_rs::{HexHash, MerkleTree};
//!
//! let leaves: Vec<HexHash> = ["a", "b", "c"]
//!     .iter()
//!     .map(|data| HexHash::digest(data.as_bytes()))
//!     .collect();
//! let tree = MerkleTree::build(leaves.clone())?;
//! let proof = tree.build_proof(1)?;
//! assert!(tree.check_proof(&leaves[1], &proof));
//! # Ok::<(), umt_rs::MerkleTreeError>(())
//! ```

mod hex_hash;
/// Defines the tree, its inclusion proofs, and their errors.
pub mod merkle;
mod record;

pub use crate::{
    hex_hash::{HexHash, InvalidHexHash, HASH_LEN},
    merkle::{
        error::MerkleTreeError,
        proof::InclusionProof,
        tree::{MerkleTree, MAX_LEAVES},
    },
    record::BalanceRecord,
};
