use super::error::MerkleTreeError;
use super::proof::InclusionProof;
use crate::hex_hash::HexHash;

/// The maximum number of leaves a tree may be built over. Leaf counts must
/// stay strictly below this limit.
pub const MAX_LEAVES: usize = 1_000_000;

/// A merkle tree which keeps every level of node hashes, root level first.
///
/// ```ascii
///          root          <- levels[0]
///        /      \
///       A        B       <- levels[1]
///      / \      /  \
///     C   D    E    F    <- levels[2], the leaf digests
/// ```
///
/// Parents are produced with the commutative pair hash
/// [`HexHash::combine`]; a level with an odd node count pairs its unmatched
/// last node with itself. The tree is immutable once built: every level
/// above the leaves is fully determined by the level below it.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "borsh", derive(borsh::BorshSerialize))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MerkleTree {
    levels: Vec<Vec<HexHash>>,
}

impl MerkleTree {
    /// Builds the full tree over an ordered sequence of leaf digests.
    ///
    /// Construction proceeds leaves-upward, halving (rounded up) the node
    /// count per level until a single-node root level is produced, then
    /// stores the levels in root-first order. A single leaf is its own root
    /// and no pairwise hashing occurs.
    pub fn build(leaf_hashes: Vec<HexHash>) -> Result<Self, MerkleTreeError> {
        if leaf_hashes.is_empty() {
            return Err(MerkleTreeError::EmptyInput);
        }
        if leaf_hashes.len() >= MAX_LEAVES {
            return Err(MerkleTreeError::InputTooLarge {
                count: leaf_hashes.len(),
                max: MAX_LEAVES,
            });
        }

        let mut levels = Vec::new();
        let mut nodes = leaf_hashes;
        while nodes.len() > 1 {
            let parents = parent_level(&nodes);
            levels.push(nodes);
            nodes = parents;
        }
        levels.push(nodes);
        levels.reverse();

        Ok(Self { levels })
    }

    /// Returns the root digest, the tree's commitment to the whole leaf set
    pub fn root(&self) -> &HexHash {
        &self.levels[0][0]
    }

    /// Returns all levels, root level first, leaf level last
    pub fn levels(&self) -> &[Vec<HexHash>] {
        &self.levels
    }

    /// Returns the leaf digests the tree was built over
    pub fn leaf_hashes(&self) -> &[HexHash] {
        &self.levels[self.levels.len() - 1]
    }

    /// Returns the number of leaves
    pub fn leaf_count(&self) -> usize {
        self.leaf_hashes().len()
    }

    /// Returns the number of levels, including the root and leaf levels
    pub fn height(&self) -> usize {
        self.levels.len()
    }

    /// Creates an inclusion proof for the leaf at the given index.
    ///
    /// The proof collects one sibling per non-root level, walking upward from
    /// the leaf: the sibling of node `i` is node `i ^ 1`, except on an
    /// odd-sized level where the unmatched last node doubles as its own
    /// sibling. The root itself is never part of the proof; it is the
    /// verification target. Proof length is therefore `height() - 1`, and
    /// empty for a single-leaf tree.
    pub fn build_proof(&self, leaf_index: usize) -> Result<InclusionProof, MerkleTreeError> {
        let leaf_count = self.leaf_count();
        if leaf_index >= leaf_count {
            return Err(MerkleTreeError::IndexOutOfRange {
                index: leaf_index,
                leaf_count,
            });
        }

        let mut siblings = Vec::with_capacity(self.height() - 1);
        let mut index = leaf_index;
        for level in self.levels.iter().rev().take(self.height() - 1) {
            let mut sibling = index ^ 1;
            if sibling >= level.len() {
                // odd level: the unmatched last node was paired with itself
                sibling = index;
            }
            siblings.push(level[sibling]);
            index /= 2;
        }

        Ok(InclusionProof::new(siblings))
    }

    /// Checks that a leaf digest plus a proof reconstruct this tree's root.
    /// Mismatches of any kind yield `false`, never an error.
    pub fn check_proof(&self, leaf_hash: &HexHash, proof: &InclusionProof) -> bool {
        proof.verify(self.root(), leaf_hash)
    }
}

/// Pairs up consecutive nodes into their parents, combining the unmatched
/// last node of an odd-sized level with itself.
fn parent_level(nodes: &[HexHash]) -> Vec<HexHash> {
    let mut parents = Vec::with_capacity(nodes.len().div_ceil(2));
    for pair in nodes.chunks(2) {
        match pair {
            [left, right] => parents.push(left.combine(right)),
            [last] => parents.push(last.combine(last)),
            _ => unreachable!("chunks(2) yields one- or two-node slices"),
        }
    }
    parents
}
