//! Named filter table
//!
//! Host pipelines look transforms up by name. `clean_facts` is the only entry.

use crate::error::PruneError;
use crate::facts::clean_value;
use serde_json::Value;
use std::collections::BTreeMap;

/// A named transform over a JSON value
pub type FilterFn = fn(Value) -> Result<Value, PruneError>;

/// Name under which [`clean_value`] is registered
pub const CLEAN_FACTS: &str = "clean_facts";

/// All registered filters, keyed by name.
pub fn filters() -> BTreeMap<&'static str, FilterFn> {
    let mut table: BTreeMap<&'static str, FilterFn> = BTreeMap::new();
    table.insert(CLEAN_FACTS, clean_value);
    table
}

/// Apply the filter registered under `name`.
pub fn apply_filter(name: &str, value: Value) -> Result<Value, PruneError> {
    let filter = filters()
        .get(name)
        .copied()
        .ok_or_else(|| PruneError::UnknownFilter(name.to_string()))?;
    filter(value)
}
