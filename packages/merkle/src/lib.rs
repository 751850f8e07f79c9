mod address;
mod error;
mod hash;
mod leaf;
mod proof;
mod tree;

pub use self::address::{Address, ADDRESS_LEN};
pub use self::error::MerkleError;
pub use self::hash::{hash_pair, keccak256, Hash, HASH_SIZE};
pub use self::leaf::{encode_leaf, leaf_preimage, LEAF_PREIMAGE_LEN};
pub use self::proof::{compute_root, verify, Proof, MAX_SIBLINGS};
pub use self::tree::MerkleTree;

pub type Result<T> = std::result::Result<T, MerkleError>;
