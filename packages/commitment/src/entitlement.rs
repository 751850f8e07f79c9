use std::str::FromStr;

use cosmwasm_std::Uint256;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One (address, amount) record of the snapshot.
///
/// `address` is kept exactly as it appears in the snapshot; it is validated
/// when the commitment is built, not when the snapshot is parsed. The amount
/// is parsed for leaf encoding, while the record serializes back the way it
/// was read: amount in its original form, other fields included.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "SnapshotRecord", into = "SnapshotRecord")]
pub struct Entitlement {
    pub address: String,
    pub amount: Uint256,
    raw_amount: Value,
    extra: Map<String, Value>,
}

impl Entitlement {
    pub fn new(address: impl Into<String>, amount: impl Into<Uint256>) -> Self {
        let amount = amount.into();
        Self {
            address: address.into(),
            amount,
            raw_amount: Value::String(amount.to_string()),
            extra: Map::new(),
        }
    }

    /// The amount as written in the snapshot.
    pub fn raw_amount(&self) -> &Value {
        &self.raw_amount
    }

    /// Snapshot fields other than `address` and `amount`.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    pub(crate) fn extra_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.extra
    }
}

#[derive(Serialize, Deserialize)]
struct SnapshotRecord {
    address: String,
    amount: Value,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<SnapshotRecord> for Entitlement {
    type Error = String;

    /// Accepts a JSON number or a string holding a decimal or `0x`-hex integer.
    fn try_from(record: SnapshotRecord) -> Result<Self, Self::Error> {
        let amount = match &record.amount {
            Value::Number(n) => n
                .as_u64()
                .map(Uint256::from)
                .ok_or_else(|| format!("invalid amount: {n}"))?,
            Value::String(s) => parse_amount(s)?,
            other => return Err(format!("invalid amount: {other}")),
        };
        Ok(Self {
            address: record.address,
            amount,
            raw_amount: record.amount,
            extra: record.extra,
        })
    }
}

impl From<Entitlement> for SnapshotRecord {
    fn from(entitlement: Entitlement) -> Self {
        Self {
            address: entitlement.address,
            amount: entitlement.raw_amount,
            extra: entitlement.extra,
        }
    }
}

pub(crate) fn parse_amount(s: &str) -> Result<Uint256, String> {
    let s = s.trim();
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(digits) => {
            if digits.is_empty() || digits.len() > 64 {
                return Err(format!("invalid hex amount: {s}"));
            }
            let padded = format!("{digits:0>64}");
            let mut bytes = [0u8; 32];
            hex::decode_to_slice(&padded, &mut bytes)
                .map_err(|e| format!("invalid hex amount {s}: {e}"))?;
            Ok(Uint256::from_be_bytes(bytes))
        }
        None => Uint256::from_str(s).map_err(|e| format!("invalid amount {s}: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_amount_forms() {
        let json = r#"[
            {"address": "0x11", "amount": 100},
            {"address": "0x22", "amount": "250"},
            {"address": "0x33", "amount": "0xff"},
            {"address": "0x44", "amount": "0x0"}
        ]"#;
        let entitlements: Vec<Entitlement> = serde_json::from_str(json).unwrap();
        let amounts: Vec<_> = entitlements.iter().map(|e| e.amount).collect();
        assert_eq!(
            amounts,
            vec![
                Uint256::from(100u128),
                Uint256::from(250u128),
                Uint256::from(255u128),
                Uint256::zero(),
            ]
        );
    }

    #[test]
    fn test_deserialize_amount_rejects_garbage() {
        for amount in [r#""-1""#, r#""1.5""#, r#""0x""#, r#""0xzz""#, "-1", "null"] {
            let json = format!(r#"{{"address": "0x11", "amount": {amount}}}"#);
            assert!(
                serde_json::from_str::<Entitlement>(&json).is_err(),
                "accepted {amount}"
            );
        }
    }

    #[test]
    fn test_parse_amount_bounds() {
        let max = "115792089237316195423570985008687907853269984665640564039457584007913129639935";
        assert_eq!(parse_amount(max), Ok(Uint256::MAX));
        assert!(parse_amount(&format!("0x1{}", "0".repeat(64))).is_err());
        assert_eq!(parse_amount(&format!("0x{}", "f".repeat(64))), Ok(Uint256::MAX));
        // 2^256 does not fit
        let overflow =
            "115792089237316195423570985008687907853269984665640564039457584007913129639936";
        assert!(parse_amount(overflow).is_err());
    }

    #[test]
    fn test_extra_fields_are_kept() {
        let json = r#"{"address": "0x11", "amount": 1, "note": "team"}"#;
        let entitlement: Entitlement = serde_json::from_str(json).unwrap();
        assert_eq!(entitlement.address, "0x11");
        assert_eq!(entitlement.amount, Uint256::from(1u128));
        assert_eq!(entitlement.extra().get("note"), Some(&json!("team")));
        assert_ne!(entitlement, Entitlement::new("0x11", 1u128));
    }

    #[test]
    fn test_serialize_as_read() {
        let json = r#"{"address":"0x11","amount":"0x1","tier":5}"#;
        let entitlement: Entitlement = serde_json::from_str(json).unwrap();
        assert_eq!(entitlement.amount, Uint256::from(1u128));
        assert_eq!(entitlement.raw_amount(), &json!("0x1"));
        assert_eq!(
            serde_json::to_value(&entitlement).unwrap(),
            json!({"address": "0x11", "amount": "0x1", "tier": 5})
        );

        let entitlement: Entitlement =
            serde_json::from_str(r#"{"address":"0x11","amount":100}"#).unwrap();
        assert_eq!(
            serde_json::to_string(&entitlement).unwrap(),
            r#"{"address":"0x11","amount":100}"#
        );
    }

    #[test]
    fn test_serialize_new_amount_as_decimal_string() {
        let entitlement = Entitlement::new("0x11", 250u128);
        assert_eq!(
            serde_json::to_string(&entitlement).unwrap(),
            r#"{"address":"0x11","amount":"250"}"#
        );
    }
}
