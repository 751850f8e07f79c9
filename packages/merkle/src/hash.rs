//! Keccak-256 hashing as used by Ethereum `abi.encodePacked` commitments.

use sha3::{Digest, Keccak256};

pub const HASH_SIZE: usize = 32;

pub type Hash = [u8; HASH_SIZE];

pub fn keccak256(data: &[u8]) -> Hash {
    Keccak256::digest(data).into()
}

/// keccak256(min(a, b) || max(a, b))
pub fn hash_pair(a: &Hash, b: &Hash) -> Hash {
    let (lo, hi) = sort_pair(a, b);
    Keccak256::new()
        .chain_update(lo)
        .chain_update(hi)
        .finalize()
        .into()
}

/// keccak256(min(a, b) || max(a, b)), reusing `hasher`.
pub(crate) fn hash_pair_opt(hasher: &mut Keccak256, a: &Hash, b: &Hash) -> Hash {
    let (lo, hi) = sort_pair(a, b);
    hasher.reset();
    hasher.update(lo);
    hasher.update(hi);
    hasher.finalize_reset().into()
}

fn sort_pair<'a>(a: &'a Hash, b: &'a Hash) -> (&'a Hash, &'a Hash) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak256_known_vectors() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
        assert_eq!(
            hex::encode(keccak256(b"abc")),
            "4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45"
        );
    }

    #[test]
    fn test_hash_pair_is_order_independent() {
        let a = [1u8; 32];
        let b = [2u8; 32];
        assert_eq!(hash_pair(&a, &b), hash_pair(&b, &a));

        let mut concat = Vec::with_capacity(64);
        concat.extend_from_slice(&a);
        concat.extend_from_slice(&b);
        assert_eq!(hash_pair(&b, &a), keccak256(&concat));
    }

    #[test]
    fn test_hash_pair_opt_matches_hash_pair() {
        let mut hasher = Keccak256::new();
        let pairs = [
            ([0u8; 32], [0xffu8; 32]),
            ([7u8; 32], [3u8; 32]),
            ([9u8; 32], [9u8; 32]),
        ];
        for (a, b) in pairs {
            assert_eq!(hash_pair_opt(&mut hasher, &a, &b), hash_pair(&a, &b));
        }
    }
}
