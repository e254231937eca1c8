//! Config loading entry points.

use super::merge_policy::builder_with_defaults;
use super::sources::{global_file, workspace_file};
use super::FactPruneConfig;
use config::{Environment, File, FileFormat};
use std::path::Path;
use tracing::debug;

/// Loads [`FactPruneConfig`] from layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from defaults, the global file, workspace files and environment.
    pub fn load(workspace_root: &Path) -> Result<FactPruneConfig, config::ConfigError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let config = builder
            .add_source(Environment::with_prefix("FACTPRUNE").separator("__"))
            .build()?;
        debug!(workspace = %workspace_root.display(), "Configuration loaded");
        config.try_deserialize()
    }

    /// Load from a single file on top of defaults, ignoring other files.
    pub fn load_from_file(path: &Path) -> Result<FactPruneConfig, config::ConfigError> {
        let config = builder_with_defaults()?
            .add_source(File::from(path).format(FileFormat::Toml).required(true))
            .build()?;
        config.try_deserialize()
    }
}
