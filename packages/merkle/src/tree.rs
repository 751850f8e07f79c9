use sha3::{Digest, Keccak256};

use crate::error::MerkleError;
use crate::hash::{hash_pair_opt, Hash};
use crate::proof::Proof;

/// A binary Merkle tree with sorted-pair hashing.
///
/// Every layer is retained, from the leaves (`layers[0]`) up to the root
/// (the single element of the last layer), so proofs are read off by index.
///
/// When a layer has an odd number of nodes the last one is promoted to the
/// next layer unchanged; it is not hashed with itself. A promoted node
/// contributes no sibling to the proofs going through it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleTree {
    layers: Vec<Vec<Hash>>,
}

impl MerkleTree {
    /// Builds the tree over `leaves`, keeping their order.
    pub fn build(leaves: Vec<Hash>) -> Result<Self, MerkleError> {
        if leaves.is_empty() {
            return Err(MerkleError::EmptyInput);
        }

        let mut hasher = Keccak256::new();
        let mut layers = vec![leaves];
        loop {
            let layer = &layers[layers.len() - 1];
            if layer.len() == 1 {
                break;
            }
            let next = layer
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => hash_pair_opt(&mut hasher, left, right),
                    _ => pair[0],
                })
                .collect();
            layers.push(next);
        }

        Ok(Self { layers })
    }

    pub fn root(&self) -> Hash {
        // `build` guarantees a non-empty last layer of length one.
        self.layers[self.layers.len() - 1][0]
    }

    pub fn leaves(&self) -> &[Hash] {
        &self.layers[0]
    }

    pub fn leaf_count(&self) -> usize {
        self.layers[0].len()
    }

    pub fn layers(&self) -> &[Vec<Hash>] {
        &self.layers
    }

    /// Number of layers above the leaves.
    pub fn depth(&self) -> usize {
        self.layers.len() - 1
    }

    /// Index of the first leaf equal to `leaf`.
    pub fn position(&self, leaf: &Hash) -> Option<usize> {
        self.leaves().iter().position(|l| l == leaf)
    }

    /// Collects the sibling of the leaf at `index` on every layer below the root.
    pub fn prove_by_index(&self, index: usize) -> Result<Proof, MerkleError> {
        let leaf_count = self.leaf_count();
        if index >= leaf_count {
            return Err(MerkleError::IndexOutOfRange { index, leaf_count });
        }

        let mut siblings = Vec::with_capacity(self.depth());
        let mut current = index;
        for layer in &self.layers[..self.depth()] {
            if let Some(sibling) = layer.get(current ^ 1) {
                siblings.push(*sibling);
            }
            current /= 2;
        }

        Ok(Proof::from(siblings))
    }

    /// Proof for the first leaf equal to `leaf`.
    pub fn prove(&self, leaf: &Hash) -> Result<Proof, MerkleError> {
        let index = self
            .position(leaf)
            .ok_or_else(|| MerkleError::LeafNotFound(hex::encode(leaf)))?;
        self.prove_by_index(index)
    }
}
