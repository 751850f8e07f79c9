use std::collections::HashSet;

use cosmwasm_std::Uint256;
use rand::{Rng, RngCore};

/// Generate random bytes of specified length using the provided RNG
pub fn gen_random_bytes<R: RngCore>(rng: &mut R, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen()).collect()
}

/// Generate a random 20-byte address
pub fn gen_random_address<R: RngCore>(rng: &mut R) -> [u8; 20] {
    let mut address = [0u8; 20];
    rng.fill_bytes(&mut address);
    address
}

/// Generate a random amount, mixing small values with full 256-bit ones
pub fn gen_random_amount<R: RngCore>(rng: &mut R) -> Uint256 {
    if rng.gen_bool(0.5) {
        Uint256::from(rng.gen::<u64>())
    } else {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        Uint256::from_be_bytes(bytes)
    }
}

/// Generate `n` entitlements with distinct addresses, as raw address bytes and amounts
pub fn gen_random_entitlements<R: RngCore>(rng: &mut R, n: usize) -> Vec<([u8; 20], Uint256)> {
    let mut seen = HashSet::with_capacity(n);
    let mut entitlements = Vec::with_capacity(n);
    while entitlements.len() < n {
        let address = gen_random_address(rng);
        if seen.insert(address) {
            entitlements.push((address, gen_random_amount(rng)));
        }
    }
    entitlements
}

/// Render entitlements as a snapshot JSON document: `[{"address": "0x..", "amount": ".."}]`
pub fn snapshot_json(entitlements: &[([u8; 20], Uint256)]) -> String {
    let records: Vec<serde_json::Value> = entitlements
        .iter()
        .map(|(address, amount)| {
            serde_json::json!({
                "address": format!("0x{}", hex::encode(address)),
                "amount": amount.to_string(),
            })
        })
        .collect();
    serde_json::Value::Array(records).to_string()
}
