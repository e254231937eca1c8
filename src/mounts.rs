//! Per-element cleanup of list-valued facts
//!
//! Unlike [`crate::prune`], removal here is strict: every element of the list
//! must carry every field being removed.

use crate::error::PruneError;
use serde_json::{Map, Value};
use tracing::debug;

/// Remove each of `fields` from every mapping in `subject[list_key]`.
///
/// The whole list is checked before anything is removed, so on error the
/// list is left as it was.
pub fn clean_list<'a, S: AsRef<str>>(
    subject: &'a mut Map<String, Value>,
    list_key: &str,
    fields: &[S],
) -> Result<&'a mut Map<String, Value>, PruneError> {
    let items = match subject.get_mut(list_key) {
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(PruneError::NotAList {
                list_key: list_key.to_string(),
            })
        }
        None => {
            return Err(PruneError::MissingListKey {
                list_key: list_key.to_string(),
            })
        }
    };

    for (index, item) in items.iter().enumerate() {
        let entry = item.as_object().ok_or_else(|| PruneError::NotAMapping {
            path: format!("{}[{}]", list_key, index),
        })?;
        for field in fields {
            let field: &str = field.as_ref();
            if !entry.contains_key(field) {
                return Err(PruneError::MissingField {
                    list_key: list_key.to_string(),
                    index,
                    field: field.to_string(),
                });
            }
        }
    }

    for item in items.iter_mut() {
        if let Value::Object(entry) = item {
            for field in fields {
                let field: &str = field.as_ref();
                entry.remove(field);
            }
        }
    }
    debug!(
        list_key,
        items = items.len(),
        fields = fields.len(),
        "Stripped fields from list items"
    );

    Ok(subject)
}
