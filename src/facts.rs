//! Host fact cleanup
//!
//! The fixed rules that strip time- and session-dependent values from an
//! `ansible_facts` mapping, and the two-stage [`clean`] pipeline that applies
//! them.

use crate::error::PruneError;
use crate::mounts::clean_list;
use crate::prune::prune;
use crate::spec::{PruneRules, PruneSpec};
use serde_json::{Map, Value};
use std::sync::OnceLock;
use tracing::debug;

/// Key holding the per-mount fact list
pub const MOUNTS_KEY: &str = "mounts";

/// Fields removed from every mount entry
pub const MOUNT_FIELDS: &[&str] = &[
    "block_available",
    "block_used",
    "inode_available",
    "inode_used",
    "size_available",
];

const DATE_TIME_FIELDS: &[&str] = &[
    "date",
    "day",
    "epoch",
    "hour",
    "iso8601",
    "iso8601_basic",
    "iso8601_basic_short",
    "iso8601_micro",
    "minute",
    "month",
    "second",
    "time",
    "weekday",
    "weekday_number",
    "weeknumber",
    "year",
];

const ENV_FIELDS: &[&str] = &["PWD", "SUDO_COMMAND", "SUDO_GID", "SUDO_UID", "SUDO_USER"];

/// The process-wide cleanup rules. Built on first use, never mutated.
pub fn cleanup_spec() -> &'static PruneRules {
    static SPEC: OnceLock<PruneRules> = OnceLock::new();
    SPEC.get_or_init(|| {
        let usage = || PruneSpec::leaves(["free", "used"]);
        PruneRules::from([
            ("_facts_gathered".to_string(), PruneSpec::Leaf),
            ("ansible_local".to_string(), PruneSpec::Leaf),
            (
                "date_time".to_string(),
                PruneSpec::leaves(DATE_TIME_FIELDS.iter().copied()),
            ),
            ("env".to_string(), PruneSpec::leaves(ENV_FIELDS.iter().copied())),
            ("memfree_mb".to_string(), PruneSpec::Leaf),
            (
                "memory_mb".to_string(),
                PruneSpec::nested([("nocache", usage()), ("real", usage())]),
            ),
            ("uptime_seconds".to_string(), PruneSpec::Leaf),
        ])
    })
}

/// Remove dynamic values from a fact mapping in place.
pub fn clean(facts: &mut Map<String, Value>) -> Result<&mut Map<String, Value>, PruneError> {
    let before = facts.len();
    prune(facts, cleanup_spec())?;
    clean_list(facts, MOUNTS_KEY, MOUNT_FIELDS)?;
    debug!(
        top_level_before = before,
        top_level_after = facts.len(),
        "Cleaned facts"
    );
    Ok(facts)
}

/// [`clean`] over an untyped JSON value. The value must be an object.
pub fn clean_value(mut facts: Value) -> Result<Value, PruneError> {
    let map = facts.as_object_mut().ok_or_else(|| PruneError::NotAMapping {
        path: "$".to_string(),
    })?;
    clean(map)?;
    Ok(facts)
}
