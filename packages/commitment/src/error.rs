use std::path::PathBuf;

use airdrop_merkle::MerkleError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ServiceError {
    #[error("Invalid entitlement #{index} ({address}): {source}")]
    InvalidEntitlement {
        index: usize,
        address: String,
        source: MerkleError,
    },

    #[error("Account not found in merkle proofs snapshot: {0}")]
    NotFound(String),

    #[error("Invalid merkle proof for {0}")]
    InvalidProof(String),

    #[error(transparent)]
    Merkle(#[from] MerkleError),
}

impl ServiceError {
    /// Whether the error points at a defect in the commitment itself rather
    /// than at the query or the snapshot.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            ServiceError::InvalidProof(_)
                | ServiceError::Merkle(MerkleError::IndexOutOfRange { .. })
        )
    }
}

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to read snapshot {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}
