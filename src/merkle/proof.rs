use crate::hex_hash::HexHash;

/// A proof that one leaf digest is included in a merkle tree.
///
/// The proof holds the sibling hash met at every non-root level, ordered from
/// the leaf level upward. It owns its hashes and keeps no reference to the
/// tree that produced it. Because the pair hash is commutative, no sibling
/// carries a left/right position flag.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InclusionProof {
    /// The sibling hashes used to rebuild the path to the root.
    pub siblings: Vec<HexHash>,
}

impl InclusionProof {
    /// Wraps sibling hashes received from an untrusted source into a proof
    pub fn new(siblings: Vec<HexHash>) -> Self {
        Self { siblings }
    }

    /// Returns the sibling hashes, ordered from the leaf level upward
    pub fn siblings(&self) -> &[HexHash] {
        &self.siblings
    }

    /// Returns the number of siblings, which equals the number of non-root
    /// tree levels the proof walks
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    /// Returns true for the proof of a single-leaf tree, whose leaf is
    /// already the root
    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Folds the proof over the given leaf digest, producing the root this
    /// proof claims the leaf belongs under
    pub fn compute_root(&self, leaf_hash: &HexHash) -> HexHash {
        self.siblings
            .iter()
            .fold(*leaf_hash, |running, sibling| running.combine(sibling))
    }

    /// Checks the proof against a known root. Any mismatch is a plain
    /// `false`; untrusted proofs are expected input, not a fault condition.
    pub fn verify(&self, root: &HexHash, leaf_hash: &HexHash) -> bool {
        self.compute_root(leaf_hash) == *root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_proof_claims_the_leaf_is_the_root() {
        let leaf = HexHash::digest(b"only leaf");
        let proof = InclusionProof::default();
        assert_eq!(proof.compute_root(&leaf), leaf);
        assert!(proof.verify(&leaf, &leaf));
        assert!(!proof.verify(&HexHash::digest(b"other"), &leaf));
    }

    #[test]
    fn fold_is_left_to_right() {
        let leaf = HexHash::digest(b"leaf");
        let s0 = HexHash::digest(b"sibling 0");
        let s1 = HexHash::digest(b"sibling 1");
        let proof = InclusionProof::new(vec![s0, s1]);
        assert_eq!(proof.compute_root(&leaf), leaf.combine(&s0).combine(&s1));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_hash_strings() {
        let proof = InclusionProof::new(vec![
            HexHash::digest(b"Account0-0:0"),
            HexHash::digest(b"Account1-1:100"),
        ]);

        let json = serde_json::to_value(&proof).expect("Serialization must succeed");
        assert_eq!(
            json,
            serde_json::json!({
                "siblings": [
                    "fab9601fcc9f9a365bbc0a2a3bfdaab1c5063e81d06cc7136a11eca3c9338aed",
                    "8d107469907af8b3afd357e9d92f9603bdd3537ff75c27d5e0ff438fca5440ce",
                ]
            })
        );

        let got: InclusionProof =
            serde_json::from_value(json).expect("serialized proof is correct");
        assert_eq!(got, proof);
    }
}
