use std::sync::Arc;
use std::thread;

use airdrop_commitment::{
    commands, CommitmentService, Config, Entitlement, LeafOrder, ServiceError, Snapshot,
};
use airdrop_merkle::{encode_leaf, verify, Address, Proof};
use airdrop_test_utils::{
    gen_random_entitlements, snapshot_json, ADDRESS_A, ADDRESS_B, ADDRESS_D, FIVE_ACCOUNT_SNAPSHOT,
    FIVE_ACCOUNT_SNAPSHOT_ORDER_ROOT, FIVE_ACCOUNT_SORTED_ROOT, TWO_ACCOUNT_ROOT,
    TWO_ACCOUNT_SNAPSHOT,
};
use assert_matches::assert_matches;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn load(json: &str) -> Vec<Entitlement> {
    Snapshot::from_json_slice(json.as_bytes())
        .unwrap()
        .into_entitlements()
}

fn random_snapshot(seed: u64, n: usize) -> Vec<Entitlement> {
    let mut rng = StdRng::seed_from_u64(seed);
    load(&snapshot_json(&gen_random_entitlements(&mut rng, n)))
}

#[test]
fn two_account_snapshot_matches_known_root() {
    let service = CommitmentService::new(load(TWO_ACCOUNT_SNAPSHOT)).unwrap();
    assert_eq!(service.root_hex(), TWO_ACCOUNT_ROOT);

    let a = service.lookup(ADDRESS_A).unwrap();
    let b = service.lookup(ADDRESS_B).unwrap();
    assert_eq!(a.proof, Proof::from(vec![b.leaf]));
    assert_eq!(b.proof, Proof::from(vec![a.leaf]));
}

#[test]
fn five_account_snapshot_matches_known_roots() {
    let sorted = CommitmentService::new(load(FIVE_ACCOUNT_SNAPSHOT)).unwrap();
    assert_eq!(sorted.root_hex(), FIVE_ACCOUNT_SORTED_ROOT);

    let config = Config {
        leaf_order: LeafOrder::Snapshot,
    };
    let ordered = CommitmentService::with_config(load(FIVE_ACCOUNT_SNAPSHOT), &config).unwrap();
    assert_eq!(ordered.root_hex(), FIVE_ACCOUNT_SNAPSHOT_ORDER_ROOT);

    for service in [&sorted, &ordered] {
        assert_eq!(service.entitlements().len(), 5);
        assert_eq!(service.tree().depth(), 3);
        for claim in service.claims() {
            let claim = claim.unwrap();
            assert!(verify(&claim.leaf, &claim.proof.siblings, &service.root()));
        }
    }
}

#[test]
fn every_entitlement_round_trips() {
    for leaf_order in [LeafOrder::Sorted, LeafOrder::Snapshot] {
        let entitlements = random_snapshot(1, 333);
        let service =
            CommitmentService::with_config(entitlements.clone(), &Config { leaf_order }).unwrap();
        for entitlement in &entitlements {
            let claim = service.lookup(&entitlement.address).unwrap();
            assert_eq!(&claim.entitlement, entitlement);

            let address: Address = entitlement.address.parse().unwrap();
            let leaf = encode_leaf(&address, entitlement.amount);
            assert_eq!(claim.leaf, leaf);
            assert!(claim.proof.verify(&leaf, &service.root()));
        }
    }
}

#[test]
fn sorted_root_ignores_snapshot_order() {
    let entitlements = random_snapshot(2, 101);
    let want = CommitmentService::new(entitlements.clone()).unwrap().root();

    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..3 {
        let mut shuffled = entitlements.clone();
        shuffled.shuffle(&mut rng);
        assert_eq!(CommitmentService::new(shuffled).unwrap().root(), want);
    }
}

#[test]
fn lookup_is_case_insensitive() {
    let service = CommitmentService::new(random_snapshot(4, 20)).unwrap();
    let address = service.entitlements()[7].address.clone();
    let upper = format!("0x{}", address[2..].to_uppercase());
    assert_eq!(service.lookup(&address), service.lookup(&upper));
}

#[test]
fn unknown_and_malformed_addresses_are_not_found() {
    let service = CommitmentService::new(load(TWO_ACCOUNT_SNAPSHOT)).unwrap();
    for query in [
        "0x3333333333333333333333333333333333333333",
        // Same bytes as A, but not the same text
        "1111111111111111111111111111111111111111",
        "0x",
        "garbage",
    ] {
        assert_eq!(
            service.lookup(query),
            Err(ServiceError::NotFound(query.to_string()))
        );
    }
}

#[test]
fn tampered_proofs_do_not_verify() {
    let service = CommitmentService::new(random_snapshot(5, 64)).unwrap();
    let claim = service.lookup(&service.entitlements()[0].address.clone()).unwrap();
    let root = service.root();
    assert!(claim.proof.verify(&claim.leaf, &root));

    let mut siblings: Vec<Vec<u8>> = claim.proof.siblings.iter().map(|s| s.to_vec()).collect();
    siblings[2][31] ^= 0x01;
    assert!(!verify(&claim.leaf, &siblings, &root));

    // Reordered siblings pair up differently
    let mut reordered = claim.proof.siblings.clone();
    reordered.swap(0, 1);
    assert!(!verify(&claim.leaf, &reordered, &root));

    // Truncated proof
    assert!(!verify(&claim.leaf, &claim.proof.siblings[1..], &root));
}

#[test]
fn empty_snapshot_never_builds() {
    let entitlements = load("[]");
    assert_eq!(
        CommitmentService::new(entitlements).unwrap_err(),
        ServiceError::Merkle(airdrop_merkle::MerkleError::EmptyInput)
    );
}

#[test]
fn bad_checksum_fails_construction() {
    let entitlements = vec![Entitlement::new(
        "0x5AAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
        1u128,
    )];
    assert_matches!(
        CommitmentService::new(entitlements),
        Err(ServiceError::InvalidEntitlement { index: 0, .. })
    );
}

#[test]
fn concurrent_lookups_share_one_service() {
    let service = Arc::new(CommitmentService::new(random_snapshot(6, 200)).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                for entitlement in service.entitlements().iter().skip(t).step_by(4) {
                    let claim = service.lookup(&entitlement.address).unwrap();
                    assert!(claim.proof.verify(&claim.leaf, &service.root()));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn proof_reply_echoes_snapshot_amounts_as_written() {
    let service = CommitmentService::new(load(FIVE_ACCOUNT_SNAPSHOT)).unwrap();
    let reply = serde_json::to_value(commands::prove(&service, ADDRESS_D)).unwrap();
    assert_eq!(reply["address"], ADDRESS_D);
    assert_eq!(reply["amount"], "0x1");
    assert_eq!(reply["proof"].as_array().unwrap().len(), 3);

    let reply = serde_json::to_value(commands::prove(&service, ADDRESS_A)).unwrap();
    assert_eq!(reply["amount"], 100);
}
