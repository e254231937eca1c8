//! Structural pruning of fact trees
//!
//! Walks a subject mapping guided by a [`PruneRules`] tree. Leaf rules delete
//! the matching key outright; nested rules recurse into the matching mapping
//! and drop it entirely if nothing is left afterwards.

use crate::error::PruneError;
use crate::spec::{PruneRules, PruneSpec};
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// Prune `subject` in place using `rules`, returning it for chaining.
///
/// Keys missing from either side are ignored. A nested rule applied to a
/// non-mapping value fails with [`PruneError::StructuralMismatch`]; keys
/// already removed before that point stay removed.
pub fn prune<'a>(
    subject: &'a mut Map<String, Value>,
    rules: &PruneRules,
) -> Result<&'a mut Map<String, Value>, PruneError> {
    prune_at(subject, rules, "")?;
    Ok(subject)
}

fn prune_at(
    subject: &mut Map<String, Value>,
    rules: &PruneRules,
    prefix: &str,
) -> Result<(), PruneError> {
    // Snapshot the keys to visit before anything is removed
    let matched: Vec<String> = subject
        .keys()
        .filter(|key| rules.contains_key(key.as_str()))
        .cloned()
        .collect();

    for key in matched {
        let path = join_path(prefix, &key);
        match &rules[&key] {
            PruneSpec::Leaf => {
                subject.remove(&key);
                debug!(path = %path, "Removed fact");
            }
            PruneSpec::Nested(children) => {
                let emptied = match subject.get_mut(&key) {
                    Some(Value::Object(inner)) => {
                        prune_at(inner, children, &path)?;
                        inner.is_empty()
                    }
                    Some(other) => {
                        return Err(PruneError::StructuralMismatch {
                            path,
                            subject: other.clone(),
                            spec: rules[&key].to_value(),
                        });
                    }
                    None => false,
                };
                if emptied {
                    subject.remove(&key);
                    trace!(path = %path, "Collapsed empty mapping");
                }
            }
        }
    }

    Ok(())
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}
