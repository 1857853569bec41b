use std::fmt;
use std::str::FromStr;

use sha2::{Digest, Sha256};
use thiserror::Error;

/// The length of a digest in bytes
pub const HASH_LEN: usize = 32;
/// The fixed hash primitive. Currently sha256
pub type DefaultHasher = Sha256;

/// A sha256 digest which is ordered, combined and rendered through its
/// lowercase hex encoding.
///
/// `Ord` is derived on the raw bytes: hex encoding maps each byte to two
/// characters monotonically, so byte order and hex-string order agree.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Default)]
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
pub struct HexHash([u8; HASH_LEN]);

impl HexHash {
    /// Hashes arbitrary leaf data. Deterministic and infallible for any
    /// input size.
    pub fn digest(data: &[u8]) -> Self {
        let mut hasher = DefaultHasher::new();
        hasher.update(data);
        Self(hasher.finalize().into())
    }

    /// Combines two digests into a parent digest.
    ///
    /// The smaller operand (in hex order) is fed to the hasher first, so
    /// `a.combine(&b) == b.combine(&a)` and a proof needs no left/right
    /// position flags. The trade-off is weaker structural second-preimage
    /// resistance than a positional scheme. Note that it is the 64-character
    /// hex encodings that get concatenated, not the raw bytes.
    pub fn combine(&self, other: &Self) -> Self {
        let (first, second) = if self <= other {
            (self, other)
        } else {
            (other, self)
        };
        let mut hasher = DefaultHasher::new();
        hasher.update(first.to_hex().as_bytes());
        hasher.update(second.to_hex().as_bytes());
        Self(hasher.finalize().into())
    }

    /// Returns the lowercase hex encoding of the digest
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Returns the raw digest bytes
    pub fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }
}

impl fmt::Display for HexHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::LowerHex for HexHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for HexHash {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

/// The error returned when parsing a digest from bytes or hex fails
#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
#[error("expected a {HASH_LEN}-byte sha256 digest or its hex encoding")]
pub struct InvalidHexHash;

impl TryFrom<&[u8]> for HexHash {
    type Error = InvalidHexHash;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        value.try_into().map(Self).map_err(|_| InvalidHexHash)
    }
}

impl FromStr for HexHash {
    type Err = InvalidHexHash;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|_| InvalidHexHash)?;
        Self::try_from(bytes.as_slice())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HexHash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HexHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct HexVisitor;

        impl serde::de::Visitor<'_> for HexVisitor {
            type Value = HexHash;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a 64-character hex-encoded sha256 digest")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_matches_known_vector() {
        let hash = HexHash::digest(b"Account0-0:0");
        assert_eq!(
            hash.to_hex(),
            "fab9601fcc9f9a365bbc0a2a3bfdaab1c5063e81d06cc7136a11eca3c9338aed"
        );
    }

    #[test]
    fn combine_is_commutative() {
        let inputs: Vec<HexHash> = (0u8..8)
            .map(|i| HexHash::digest(&[i]))
            .collect();
        for a in &inputs {
            for b in &inputs {
                assert_eq!(a.combine(b), b.combine(a));
            }
        }
    }

    #[test]
    fn combine_hashes_the_ordered_hex_concatenation() {
        let a = HexHash::digest(b"left");
        let b = HexHash::digest(b"right");
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        let concat = format!("{first}{second}");
        assert_eq!(a.combine(&b), HexHash::digest(concat.as_bytes()));
    }

    #[test]
    fn hex_round_trip() {
        let hash = HexHash::digest(b"some leaf");
        let parsed: HexHash = hash.to_hex().parse().expect("own encoding must parse");
        assert_eq!(parsed, hash);
        assert_eq!(HexHash::try_from(hash.as_bytes().as_slice()), Ok(hash));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!("zz".parse::<HexHash>(), Err(InvalidHexHash));
        // valid hex, wrong length
        assert_eq!("fab960".parse::<HexHash>(), Err(InvalidHexHash));
        assert_eq!(HexHash::try_from([0u8; 31].as_ref()), Err(InvalidHexHash));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_hex_strings() {
        let hash = HexHash::digest(b"Account0-0:0");

        let serialized = serde_json::to_string(&hash).expect("Serialization must succeed");
        assert_eq!(
            serialized,
            "\"fab9601fcc9f9a365bbc0a2a3bfdaab1c5063e81d06cc7136a11eca3c9338aed\""
        );

        let got: HexHash = serde_json::from_str(&serialized).expect("serialized hash is correct");
        assert_eq!(got, hash);
    }

    #[cfg(feature = "borsh")]
    #[test]
    fn borsh_round_trip() {
        let hash = HexHash::digest(b"Account0-0:0");

        let serialized = borsh::to_vec(&hash).expect("Serialization to vec must succeed");
        let got = borsh::from_slice::<HexHash>(&serialized).expect("serialized hash is correct");

        assert_eq!(got, hash);
    }
}
