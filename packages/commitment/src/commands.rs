//! Operations behind the `airdrop-proofs` subcommands.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use airdrop_logging::{error, info, warn};
use airdrop_merkle::Proof;
use anyhow::{Context, Result};
use serde::Serialize;

use crate::error::ServiceError;
use crate::service::{ClaimResponse, CommitmentService};

pub const NOT_FOUND_MESSAGE: &str = "Account not found in merkle proofs snapshot.";
pub const INVALID_PROOF_MESSAGE: &str = "Invalid merkle proof.";

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ErrorDetail {
    pub code: u16,
    pub message: &'static str,
}

impl ErrorBody {
    fn not_found(message: &'static str) -> Self {
        Self {
            error: ErrorDetail { code: 404, message },
        }
    }
}

/// Answer to a proof query: the claim, or the 404 body served in its place.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum ProofReply {
    Claim(ClaimResponse),
    Error(ErrorBody),
}

impl ProofReply {
    pub fn is_success(&self) -> bool {
        matches!(self, ProofReply::Claim(_))
    }

    pub fn exit_code(&self) -> ExitCode {
        exit_code(self.is_success())
    }
}

/// Root and every served claim, as written by `export`.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Export {
    pub root: String,
    pub claims: Vec<ClaimResponse>,
}

pub fn prove(service: &CommitmentService, address: &str) -> ProofReply {
    match service.lookup(address) {
        Ok(claim) => ProofReply::Claim(claim.to_response()),
        Err(err) => {
            let message = match err {
                ServiceError::NotFound(_) => NOT_FOUND_MESSAGE,
                _ => INVALID_PROOF_MESSAGE,
            };
            if err.is_internal() {
                error!("{err}");
            } else {
                warn!("{err}");
            }
            ProofReply::Error(ErrorBody::not_found(message))
        }
    }
}

pub fn collect_claims(service: &CommitmentService) -> Result<Export, ServiceError> {
    let claims = service
        .claims()
        .map(|claim| claim.map(|c| c.to_response()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Export {
        root: service.root_hex(),
        claims,
    })
}

/// Writes the root and all claims to `output` as pretty JSON. Returns the
/// number of claims written.
pub fn export(service: &CommitmentService, output: &Path) -> Result<usize> {
    let export = collect_claims(service).context("Failed to derive claims")?;
    let json = serde_json::to_string_pretty(&export).context("Failed to serialize claims")?;
    write_file_atomic(output, json.as_bytes())?;
    info!("Wrote {} claims to {output:?}", export.claims.len());
    Ok(export.claims.len())
}

/// Runs the verifier over hex-encoded inputs, `0x` prefix optional.
pub fn verify(leaf: &str, root: &str, siblings: &[String]) -> Result<bool> {
    let leaf = decode_hex(leaf).context("Invalid leaf")?;
    let root = decode_hex(root).context("Invalid root")?;
    let proof = Proof::from_hex_strings(siblings).context("Invalid proof")?;
    Ok(proof.verify(&leaf, &root))
}

pub fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn decode_hex(s: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(s.strip_prefix("0x").unwrap_or(s))?)
}

/// Writes `contents` to a sibling temp file, syncs it and renames it over
/// `path`. The temp file is removed if any step fails.
pub fn write_file_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let temp_path = temp_path(path)?;
    let result = write_synced(&temp_path, contents).and_then(|()| {
        fs::rename(&temp_path, path).context("Failed to move temp file to output")
    });
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_synced(path: &Path, contents: &[u8]) -> Result<()> {
    let mut file = File::create(path).context("Failed to create temp file")?;
    file.write_all(contents)
        .context("Failed to write to temp file")?;
    file.sync_all().context("Failed to sync temp file")?;
    Ok(())
}

/// `dir/name` -> `dir/name.tmp`
fn temp_path(path: &Path) -> Result<PathBuf> {
    let mut name = path
        .file_name()
        .with_context(|| format!("Invalid output path {path:?}"))?
        .to_os_string();
    name.push(".tmp");
    Ok(path.with_file_name(name))
}
