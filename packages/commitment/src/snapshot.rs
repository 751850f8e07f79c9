use std::fs;
use std::path::Path;

use crate::entitlement::Entitlement;
use crate::error::SnapshotError;

/// The fixed list of entitlements a commitment is built over, in file order.
///
/// The on-disk format is a JSON array of `{ "address": .., "amount": .. }`
/// objects. Loading does not validate addresses; that happens when the
/// `CommitmentService` is built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    entitlements: Vec<Entitlement>,
}

impl Snapshot {
    pub fn new(entitlements: Vec<Entitlement>) -> Self {
        Self { entitlements }
    }

    pub fn from_json_slice(data: &[u8]) -> Result<Self, SnapshotError> {
        let entitlements = serde_json::from_slice(data)?;
        Ok(Self { entitlements })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_slice(&data)
    }

    pub fn into_entitlements(self) -> Vec<Entitlement> {
        self.entitlements
    }

    pub fn len(&self) -> usize {
        self.entitlements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entitlements.is_empty()
    }
}

impl From<Vec<Entitlement>> for Snapshot {
    fn from(entitlements: Vec<Entitlement>) -> Self {
        Self::new(entitlements)
    }
}
