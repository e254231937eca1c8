//! Prune specifications
//!
//! A [`PruneSpec`] node is either a leaf marker (delete the whole key) or a
//! nested rule set (recurse into the key's mapping and delete only the listed
//! sub-keys). In JSON form a leaf is `null` and a nested spec is an object.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rules for one level of a fact tree, keyed by fact name
pub type PruneRules = BTreeMap<String, PruneSpec>;

/// What to remove at a single key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PruneSpec {
    /// Delete the key and its value
    Leaf,
    /// Recurse into the key's mapping
    Nested(PruneRules),
}

impl PruneSpec {
    /// Build a nested spec whose children are all leaves.
    pub fn leaves<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PruneSpec::Nested(
            keys.into_iter()
                .map(|key| (key.into(), PruneSpec::Leaf))
                .collect(),
        )
    }

    /// Build a nested spec from explicit children.
    pub fn nested<I, S>(children: I) -> Self
    where
        I: IntoIterator<Item = (S, PruneSpec)>,
        S: Into<String>,
    {
        PruneSpec::Nested(
            children
                .into_iter()
                .map(|(key, spec)| (key.into(), spec))
                .collect(),
        )
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, PruneSpec::Leaf)
    }

    /// JSON form of this node, used when reporting mismatches.
    pub fn to_value(&self) -> serde_json::Value {
        match self {
            PruneSpec::Leaf => serde_json::Value::Null,
            PruneSpec::Nested(children) => serde_json::Value::Object(
                children
                    .iter()
                    .map(|(key, spec)| (key.clone(), spec.to_value()))
                    .collect(),
            ),
        }
    }

    /// Dotted paths of every leaf below this node, sorted.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        if let PruneSpec::Nested(children) = self {
            collect_leaf_paths(children, "", &mut paths);
        }
        paths
    }
}

/// Dotted paths of every leaf in a rule set, sorted.
pub fn rule_leaf_paths(rules: &PruneRules) -> Vec<String> {
    let mut paths = Vec::new();
    collect_leaf_paths(rules, "", &mut paths);
    paths
}

fn collect_leaf_paths(rules: &PruneRules, prefix: &str, out: &mut Vec<String>) {
    for (key, spec) in rules {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match spec {
            PruneSpec::Leaf => out.push(path),
            PruneSpec::Nested(children) => collect_leaf_paths(children, &path, out),
        }
    }
}
