//! factprune: deterministic host fact snapshots
//!
//! Removes time- and session-dependent values from nested fact records so
//! that snapshots from different runs or hosts compare equal when nothing
//! meaningful changed.

pub mod cli;
pub mod config;
pub mod error;
pub mod facts;
pub mod filters;
pub mod logging;
pub mod mounts;
pub mod prune;
pub mod snapshot;
pub mod spec;

pub use error::{ApiError, PruneError};
pub use facts::{clean, clean_value, cleanup_spec, MOUNTS_KEY, MOUNT_FIELDS};
pub use filters::{apply_filter, filters};
pub use mounts::clean_list;
pub use prune::prune;
pub use spec::{PruneRules, PruneSpec};
