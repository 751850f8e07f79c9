#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use airdrop_commitment::commands::{self, exit_code};
use airdrop_commitment::config::{DEFAULT_SNAPSHOT_PATH, LOG_LEVEL_ENV, SNAPSHOT_PATH_ENV};
use airdrop_commitment::{CommitmentService, Config, LeafOrder, Snapshot};
use airdrop_logging::{info, init_logger, LevelFilter};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "airdrop-proofs")]
#[command(about = "Merkle root and proofs for an airdrop snapshot", long_about = None)]
#[command(version)]
struct Cli {
    /// Snapshot JSON file: [{ "address": "0x..", "amount": .. }, ..]
    #[arg(short, long, env = SNAPSHOT_PATH_ENV, default_value = DEFAULT_SNAPSHOT_PATH)]
    snapshot: PathBuf,

    /// Order of the leaves the tree is built over
    #[arg(long, value_enum, default_value_t = LeafOrderArg::Sorted)]
    leaf_order: LeafOrderArg,

    /// Maximum log level written to stderr
    #[arg(long, env = LOG_LEVEL_ENV, default_value = "info")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the Merkle root of the snapshot
    Root,
    /// Print the entitlement and proof of an address as JSON
    Proof {
        /// Address to look up (case-insensitive)
        address: String,
    },
    /// Write the root and every claim to a JSON file
    Export {
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Verify a proof given as hex strings
    Verify {
        /// Leaf digest
        #[arg(long)]
        leaf: String,
        /// Expected root
        #[arg(long)]
        root: String,
        /// Sibling digests, leaf level first
        siblings: Vec<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LeafOrderArg {
    Sorted,
    Snapshot,
}

impl From<LeafOrderArg> for LeafOrder {
    fn from(arg: LeafOrderArg) -> Self {
        match arg {
            LeafOrderArg::Sorted => LeafOrder::Sorted,
            LeafOrderArg::Snapshot => LeafOrder::Snapshot,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    match &cli.command {
        Commands::Verify {
            leaf,
            root,
            siblings,
        } => {
            let valid = commands::verify(leaf, root, siblings)?;
            println!("{valid}");
            Ok(exit_code(valid))
        }
        Commands::Root => {
            let service = load_service(&cli.snapshot, cli.leaf_order)?;
            println!("{}", service.root_hex());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Proof { address } => {
            let service = load_service(&cli.snapshot, cli.leaf_order)?;
            let reply = commands::prove(&service, address);
            print_json(&reply)?;
            Ok(reply.exit_code())
        }
        Commands::Export { output } => {
            let service = load_service(&cli.snapshot, cli.leaf_order)?;
            commands::export(&service, output)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_service(path: &Path, leaf_order: LeafOrderArg) -> Result<CommitmentService> {
    let snapshot = Snapshot::from_file(path)?;
    info!("Read {} entitlements from {path:?}", snapshot.len());
    let config = Config {
        leaf_order: leaf_order.into(),
    };
    let service = CommitmentService::with_config(snapshot.into_entitlements(), &config)
        .context("Failed to build the Merkle commitment")?;
    info!("Merkle root: {}", service.root_hex());
    Ok(service)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize response")?;
    println!("{json}");
    Ok(())
}
