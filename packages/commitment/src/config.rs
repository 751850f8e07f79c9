use cosmwasm_schema::cw_serde;

pub const DEFAULT_SNAPSHOT_PATH: &str = "./snapshot.json";
pub const SNAPSHOT_PATH_ENV: &str = "SNAPSHOT_PATH";
pub const LOG_LEVEL_ENV: &str = "AIRDROP_LOG";

/// Order of the leaf layer the tree is built over.
#[cw_serde]
#[derive(Copy, Default)]
pub enum LeafOrder {
    /// Leaf digests sorted ascending, so the root does not depend on the
    /// order of the snapshot. Roots published from `merkletreejs` with
    /// `{ sort: true }` are built this way.
    #[default]
    Sorted,
    /// Leaf digests in snapshot order.
    Snapshot,
}

/// Config of the commitment service
#[cw_serde]
#[derive(Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub leaf_order: LeafOrder,
}
