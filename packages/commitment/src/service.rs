use std::collections::hash_map::Entry;
use std::collections::HashMap;

use airdrop_logging::{debug, error, info, warn};
use airdrop_merkle::{encode_leaf, Address, Hash, MerkleError, MerkleTree, Proof};
use serde::Serialize;

use crate::config::{Config, LeafOrder};
use crate::entitlement::Entitlement;
use crate::error::ServiceError;

/// A served entitlement together with its Merkle proof.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Claim {
    pub entitlement: Entitlement,
    pub leaf: Hash,
    pub proof: Proof,
}

impl Claim {
    pub fn to_response(&self) -> ClaimResponse {
        let mut account = self.entitlement.clone();
        account.extra_mut().remove("proof");
        ClaimResponse {
            proof: self.proof.to_hex_strings(),
            account,
        }
    }
}

/// JSON body served for a claim: `{ "proof": ["0x.."], ..record }`, the
/// snapshot record echoed as it was read. A `proof` field of the record is
/// not echoed.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ClaimResponse {
    pub proof: Vec<String>,
    #[serde(flatten)]
    pub account: Entitlement,
}

/// An immutable Merkle commitment over a snapshot, answering proof queries.
///
/// Built once, then shared by reference (or `Arc`) between any number of
/// concurrent readers.
///
/// Addresses are looked up case-insensitively on their textual form. If the
/// snapshot holds the same address more than once, lookups serve the first
/// occurrence; the later ones are still committed as leaves.
#[derive(Clone, Debug)]
pub struct CommitmentService {
    config: Config,
    entitlements: Vec<Entitlement>,
    addresses: Vec<Address>,
    /// Lower-cased address text -> entitlement index
    index: HashMap<String, usize>,
    /// Entitlement index -> leaf position in the tree
    positions: Vec<usize>,
    tree: MerkleTree,
}

impl CommitmentService {
    pub fn new(entitlements: Vec<Entitlement>) -> Result<Self, ServiceError> {
        Self::with_config(entitlements, &Config::default())
    }

    pub fn with_config(
        entitlements: Vec<Entitlement>,
        config: &Config,
    ) -> Result<Self, ServiceError> {
        if entitlements.is_empty() {
            return Err(MerkleError::EmptyInput.into());
        }

        let mut addresses = Vec::with_capacity(entitlements.len());
        let mut leaves = Vec::with_capacity(entitlements.len());
        let mut index = HashMap::with_capacity(entitlements.len());
        for (i, entitlement) in entitlements.iter().enumerate() {
            let address: Address = entitlement.address.parse().map_err(|source| {
                ServiceError::InvalidEntitlement {
                    index: i,
                    address: entitlement.address.clone(),
                    source,
                }
            })?;
            match index.entry(entitlement.address.to_lowercase()) {
                Entry::Vacant(slot) => {
                    slot.insert(i);
                }
                Entry::Occupied(first) => {
                    warn!(
                        "Duplicate address {} at entitlement #{i}, lookups serve entitlement #{}",
                        entitlement.address,
                        first.get()
                    );
                }
            }
            leaves.push(encode_leaf(&address, entitlement.amount));
            addresses.push(address);
        }

        let positions = match config.leaf_order {
            LeafOrder::Snapshot => (0..leaves.len()).collect(),
            LeafOrder::Sorted => {
                let mut order: Vec<usize> = (0..leaves.len()).collect();
                order.sort_by(|&a, &b| leaves[a].cmp(&leaves[b]));
                let mut positions = vec![0; leaves.len()];
                for (position, &i) in order.iter().enumerate() {
                    positions[i] = position;
                }
                leaves = order.into_iter().map(|i| leaves[i]).collect();
                positions
            }
        };

        let tree = MerkleTree::build(leaves)?;
        info!(
            "Built commitment over {} entitlements ({:?} leaves, depth {}), root 0x{}",
            entitlements.len(),
            config.leaf_order,
            tree.depth(),
            hex::encode(tree.root())
        );

        Ok(Self {
            config: config.clone(),
            entitlements,
            addresses,
            index,
            positions,
            tree,
        })
    }

    pub fn root(&self) -> Hash {
        self.tree.root()
    }

    /// The root as `0x`-prefixed lowercase hex.
    pub fn root_hex(&self) -> String {
        format!("0x{}", hex::encode(self.root()))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tree(&self) -> &MerkleTree {
        &self.tree
    }

    pub fn entitlements(&self) -> &[Entitlement] {
        &self.entitlements
    }

    /// Looks up `address` and returns its entitlement with a proof that has
    /// been checked against the root.
    pub fn lookup(&self, address: &str) -> Result<Claim, ServiceError> {
        let i = *self
            .index
            .get(&address.to_lowercase())
            .ok_or_else(|| ServiceError::NotFound(address.to_string()))?;
        let claim = self.claim(i)?;
        debug!(
            "Served proof for {address} (leaf 0x{}, {} siblings)",
            hex::encode(claim.leaf),
            claim.proof.len()
        );
        Ok(claim)
    }

    /// Claims for every served entitlement, in snapshot order. Entitlements
    /// shadowed by an earlier duplicate address are skipped.
    pub fn claims(&self) -> impl Iterator<Item = Result<Claim, ServiceError>> + '_ {
        (0..self.entitlements.len())
            .filter(move |&i| {
                self.index.get(&self.entitlements[i].address.to_lowercase()) == Some(&i)
            })
            .map(move |i| self.claim(i))
    }

    fn claim(&self, i: usize) -> Result<Claim, ServiceError> {
        let entitlement = &self.entitlements[i];
        let leaf = encode_leaf(&self.addresses[i], entitlement.amount);
        let proof = self.tree.prove_by_index(self.positions[i])?;
        if !proof.verify(&leaf, &self.root()) {
            error!(
                "Proof for {} does not verify against root {}",
                entitlement.address,
                self.root_hex()
            );
            return Err(ServiceError::InvalidProof(entitlement.address.clone()));
        }
        Ok(Claim {
            entitlement: entitlement.clone(),
            leaf,
            proof,
        })
    }
}
