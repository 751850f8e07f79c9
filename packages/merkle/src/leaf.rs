use cosmwasm_std::Uint256;

use crate::address::{Address, ADDRESS_LEN};
use crate::hash::{keccak256, Hash};

pub const LEAF_PREIMAGE_LEN: usize = ADDRESS_LEN + 32;

/// address (20 bytes) || amount (32 bytes, big-endian)
///
/// Same layout as Solidity's `abi.encodePacked(address, uint256)`.
pub fn leaf_preimage(address: &Address, amount: Uint256) -> [u8; LEAF_PREIMAGE_LEN] {
    let mut preimage = [0u8; LEAF_PREIMAGE_LEN];
    preimage[..ADDRESS_LEN].copy_from_slice(address.as_bytes());
    preimage[ADDRESS_LEN..].copy_from_slice(&amount.to_be_bytes());
    preimage
}

/// keccak256(address || amount)
pub fn encode_leaf(address: &Address, amount: Uint256) -> Hash {
    keccak256(&leaf_preimage(address, amount))
}
