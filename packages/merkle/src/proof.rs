use cosmwasm_schema::cw_serde;
use cosmwasm_std::HexBinary;
use sha3::{Digest, Keccak256};

use crate::error::MerkleError;
use crate::hash::{hash_pair_opt, Hash, HASH_SIZE};

// MaxSiblings bounds the proofs accepted by the verifier. A tree of 2^256 leaves
// needs 256 siblings, which no snapshot will come close to.
pub const MAX_SIBLINGS: usize = 256;

/// Proof represents a sorted-pair Merkle proof.
///
/// `siblings` runs from the leaf's sibling up to a child of the root. No
/// left/right flags are needed since every pair is sorted before hashing.
#[cw_serde]
#[derive(Default, Eq)]
pub struct Proof {
    /// Sibling hashes, leaf level first.
    pub siblings: Vec<HexBinary>,
}

impl Proof {
    /// Parses `0x`-prefixed (or bare) hex siblings.
    pub fn from_hex_strings<S: AsRef<str>>(siblings: &[S]) -> Result<Self, MerkleError> {
        let siblings = siblings
            .iter()
            .map(|s| {
                let s = s.as_ref();
                let digits = s.strip_prefix("0x").unwrap_or(s);
                hex::decode(digits).map(HexBinary::from)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { siblings })
    }

    /// The siblings as `0x`-prefixed lowercase hex.
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.siblings
            .iter()
            .map(|sibling| format!("0x{}", sibling.to_hex()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Checks that the proof leads from `leaf` to `root`.
    pub fn verify(&self, leaf: &[u8], root: &[u8]) -> bool {
        verify(leaf, &self.siblings, root)
    }

    /// Performs basic validation.
    ///
    /// NOTE: it expects every sibling to be of size `HASH_SIZE`, and at most
    /// `MAX_SIBLINGS` of them.
    pub fn validate_basic(&self) -> Result<(), MerkleError> {
        validate_siblings(&self.siblings)
    }
}

impl From<Vec<Hash>> for Proof {
    fn from(siblings: Vec<Hash>) -> Self {
        Self {
            siblings: siblings
                .into_iter()
                .map(|sibling| HexBinary::from(sibling.as_slice()))
                .collect(),
        }
    }
}

/// Recomputes the root reached from `leaf` by folding `siblings` with sorted-pair
/// hashing.
pub fn compute_root<S: AsRef<[u8]>>(leaf: &[u8], siblings: &[S]) -> Result<Hash, MerkleError> {
    let mut current: Hash = leaf
        .try_into()
        .map_err(|_| MerkleError::InvalidLeafLength(leaf.len()))?;
    validate_siblings(siblings)?;

    let mut hasher = Keccak256::new();
    for (index, sibling) in siblings.iter().enumerate() {
        let sibling: &Hash = sibling.as_ref().try_into().map_err(|_| {
            MerkleError::InvalidSiblingLength {
                index,
                got: sibling.as_ref().len(),
            }
        })?;
        current = hash_pair_opt(&mut hasher, &current, sibling);
    }
    Ok(current)
}

/// Verifies that `siblings` prove `leaf` against `root`.
///
/// Malformed input (wrong hash sizes, oversized proofs) is reported as `false`.
pub fn verify<S: AsRef<[u8]>>(leaf: &[u8], siblings: &[S], root: &[u8]) -> bool {
    if root.len() != HASH_SIZE {
        return false;
    }
    match compute_root(leaf, siblings) {
        Ok(computed) => computed.as_slice() == root,
        Err(_) => false,
    }
}

fn validate_siblings<S: AsRef<[u8]>>(siblings: &[S]) -> Result<(), MerkleError> {
    if siblings.len() > MAX_SIBLINGS {
        return Err(MerkleError::TooManySiblings {
            max: MAX_SIBLINGS,
            got: siblings.len(),
        });
    }
    for (index, sibling) in siblings.iter().enumerate() {
        let got = sibling.as_ref().len();
        if got != HASH_SIZE {
            return Err(MerkleError::InvalidSiblingLength { index, got });
        }
    }
    Ok(())
}
