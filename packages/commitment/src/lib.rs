pub mod commands;
pub mod config;
pub mod entitlement;
pub mod error;
pub mod service;
pub mod snapshot;

pub use commands::{Export, ProofReply};
pub use config::{Config, LeafOrder};
pub use entitlement::Entitlement;
pub use error::{ServiceError, SnapshotError};
pub use service::{Claim, ClaimResponse, CommitmentService};
pub use snapshot::Snapshot;
