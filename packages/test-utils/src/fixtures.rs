//! Fixed snapshots with digests computed independently with Keccak-256.

pub const ADDRESS_A: &str = "0x1111111111111111111111111111111111111111";
pub const ADDRESS_B: &str = "0x2222222222222222222222222222222222222222";
pub const ADDRESS_C: &str = "0x3333333333333333333333333333333333333333";
pub const ADDRESS_D: &str = "0x4444444444444444444444444444444444444444";
pub const ADDRESS_E: &str = "0x5555555555555555555555555555555555555555";

/// keccak256(A || 100)
pub const LEAF_A: &str = "0x4f2aefca2998f6aa2ab6799857a78dad717148458baa694d613c74251a29f216";
/// keccak256(B || 250)
pub const LEAF_B: &str = "0x52c5b1c08ce679436484d6b2b9947fc84a9700270abca044df5beaffb95d9b71";
/// keccak256(C || 10^18)
pub const LEAF_C: &str = "0x4ae015bf35f7df0d33e93fdb7e3b2f2fb2dbd9c86ca8009a9f649a3d720c0742";

/// `[A: 100, B: 250]`
pub const TWO_ACCOUNT_SNAPSHOT: &str = r#"[
  { "address": "0x1111111111111111111111111111111111111111", "amount": 100 },
  { "address": "0x2222222222222222222222222222222222222222", "amount": "250" }
]"#;

/// Root of `TWO_ACCOUNT_SNAPSHOT`, in either leaf order.
pub const TWO_ACCOUNT_ROOT: &str =
    "0x51276427b75869d6fb2f58724ac3f1a1f6514b71c4a50fb78b6b4f26ed558762";

/// `[A: 100, B: 250, C: 10^18, D: 1, E: 2^256 - 1]`
pub const FIVE_ACCOUNT_SNAPSHOT: &str = r#"[
  { "address": "0x1111111111111111111111111111111111111111", "amount": 100 },
  { "address": "0x2222222222222222222222222222222222222222", "amount": "250" },
  { "address": "0x3333333333333333333333333333333333333333", "amount": "1000000000000000000" },
  { "address": "0x4444444444444444444444444444444444444444", "amount": "0x1" },
  {
    "address": "0x5555555555555555555555555555555555555555",
    "amount": "115792089237316195423570985008687907853269984665640564039457584007913129639935"
  }
]"#;

/// Root of `FIVE_ACCOUNT_SNAPSHOT` with leaves sorted before building.
pub const FIVE_ACCOUNT_SORTED_ROOT: &str =
    "0x11355f649ec1c3783ccbdcc20baabe68f2849890e45a34fdbc9e7075c864dbcd";

/// Root of `FIVE_ACCOUNT_SNAPSHOT` with leaves in snapshot order.
pub const FIVE_ACCOUNT_SNAPSHOT_ORDER_ROOT: &str =
    "0x10eafb4e1e086717790a900833505fe54b909d953e81999621f54bee7116eb11";
