use hex::FromHexError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MerkleError {
    #[error("Cannot build a Merkle tree from zero leaves")]
    EmptyInput,
    #[error("Leaf index {index} is out of range for a tree with {leaf_count} leaves")]
    IndexOutOfRange { index: usize, leaf_count: usize },
    #[error("Leaf {0} is not part of the tree")]
    LeafNotFound(String),
    #[error("Invalid address length: expected 40 hex chars, got {0}")]
    InvalidAddressLength(usize),
    #[error("Invalid address hex: {0}")]
    InvalidAddressHex(String),
    #[error("Invalid address checksum: {0}")]
    InvalidAddressChecksum(String),
    #[error("Expected leaf size to be 32, got {0}")]
    InvalidLeafLength(usize),
    #[error("Expected sibling #{index} size to be 32, got {got}")]
    InvalidSiblingLength { index: usize, got: usize },
    #[error("Expected no more than {max} siblings, got {got}")]
    TooManySiblings { max: usize, got: usize },
    #[error(transparent)]
    InvalidHex(#[from] FromHexError),
}
