//! Snapshot fingerprints
//!
//! Cleaned fact trees are hashed with BLAKE3 over their canonical JSON
//! encoding so two hosts, or two runs on one host, can be compared by digest.

use crate::error::PruneError;
use crate::facts::clean_value;
use blake3::Hasher;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// BLAKE3 digest of a canonical fact tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Fingerprint {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Canonical encoding: compact JSON with object keys in sorted order.
pub fn canonical_bytes(value: &Value) -> Vec<u8> {
    sorted(value).to_string().into_bytes()
}

// Objects are re-emitted in key order whether or not serde_json's
// `preserve_order` feature is on.
fn sorted(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, child)| (key.clone(), sorted(child)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(sorted).collect()),
        other => other.clone(),
    }
}

/// Fingerprint of a value as-is, without cleaning.
pub fn fingerprint(value: &Value) -> Fingerprint {
    let bytes = canonical_bytes(value);
    let mut hasher = Hasher::new();
    hasher.update(b"facts");
    hasher.update(&(bytes.len() as u64).to_be_bytes());
    hasher.update(&bytes);
    Fingerprint(*hasher.finalize().as_bytes())
}

/// Result of comparing two cleaned snapshots
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub left: Fingerprint,
    pub right: Fingerprint,
}

impl Comparison {
    pub fn identical(&self) -> bool {
        self.left == self.right
    }
}

/// Clean both snapshots and compare their fingerprints.
pub fn compare(left: Value, right: Value) -> Result<Comparison, PruneError> {
    let left = clean_value(left)?;
    let right = clean_value(right)?;
    Ok(Comparison {
        left: fingerprint(&left),
        right: fingerprint(&right),
    })
}
