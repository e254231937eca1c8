//! CLI route: single route table and run context.

use crate::cli::help::command_name;
use crate::cli::parse::Commands;
use crate::config::{ConfigLoader, FactPruneConfig};
use crate::error::ApiError;
use crate::facts::cleanup_spec;
use crate::filters::{apply_filter, filters, CLEAN_FACTS};
use crate::snapshot::{compare, fingerprint};
use serde_json::{json, Value};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};
use walkdir::WalkDir;

/// What a command produced: text for stdout and the process exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub exit_code: i32,
}

impl CommandOutput {
    fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit_code: 0,
        }
    }
}

/// Runtime context for CLI execution: workspace and loaded configuration.
pub struct RunContext {
    workspace_root: PathBuf,
    config: FactPruneConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        config.validate().map_err(|errors| {
            let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                msgs.join("\n")
            ))
        })?;
        Ok(Self {
            workspace_root,
            config,
        })
    }

    /// Build a context from an already loaded config.
    pub fn with_config(workspace_root: PathBuf, config: FactPruneConfig) -> Self {
        Self {
            workspace_root,
            config,
        }
    }

    /// Execute a command and return its output.
    pub fn execute(&self, command: &Commands) -> Result<CommandOutput, ApiError> {
        let started = Instant::now();
        let name = command_name(command);
        info!(command = name, "Running command");

        let result = match command {
            Commands::Clean {
                input,
                output,
                compact,
                filter,
            } => self.handle_clean(input, output.as_deref(), *compact, filter),
            Commands::Fingerprint { input } => self.handle_fingerprint(input),
            Commands::Compare {
                left,
                right,
                format,
            } => self.handle_compare(left, right, format),
            Commands::Batch { dir, out_dir } => self.handle_batch(dir, out_dir),
            Commands::Filters => Ok(CommandOutput::success(
                filters().keys().copied().collect::<Vec<_>>().join("\n"),
            )),
            Commands::Spec => {
                let rendered = serde_json::to_string_pretty(cleanup_spec())?;
                Ok(CommandOutput::success(rendered))
            }
            Commands::ShowConfig => {
                let rendered = toml::to_string_pretty(&self.config).map_err(|e| {
                    ApiError::ConfigError(format!("Failed to render configuration: {}", e))
                })?;
                Ok(CommandOutput::success(rendered.trim_end()))
            }
        };

        debug!(
            command = name,
            elapsed_ms = started.elapsed().as_millis() as u64,
            ok = result.is_ok(),
            "Command finished"
        );
        result
    }

    fn handle_clean(
        &self,
        input: &str,
        output: Option<&Path>,
        compact: bool,
        filter: &str,
    ) -> Result<CommandOutput, ApiError> {
        let facts = self.read_facts(input)?;
        let cleaned = apply_filter(filter, facts)?;
        let rendered = self.render(&cleaned, compact)?;

        match output {
            Some(path) => {
                let path = self.resolve(path);
                write_file(&path, &rendered)?;
                info!(output = %path.display(), "Wrote cleaned facts");
                Ok(CommandOutput::success(""))
            }
            None => Ok(CommandOutput::success(rendered)),
        }
    }

    fn handle_fingerprint(&self, input: &str) -> Result<CommandOutput, ApiError> {
        let facts = self.read_facts(input)?;
        let cleaned = apply_filter(CLEAN_FACTS, facts)?;
        Ok(CommandOutput::success(fingerprint(&cleaned).to_hex()))
    }

    fn handle_compare(
        &self,
        left: &str,
        right: &str,
        format: &str,
    ) -> Result<CommandOutput, ApiError> {
        let comparison = compare(self.read_facts(left)?, self.read_facts(right)?)?;
        let identical = comparison.identical();

        let text = match format {
            "json" => serde_json::to_string_pretty(&json!({
                "identical": identical,
                "left": comparison.left,
                "right": comparison.right,
            }))?,
            "text" if identical => format!("identical {}", comparison.left),
            "text" => format!(
                "different\n  {}  {}\n  {}  {}",
                comparison.left, left, comparison.right, right
            ),
            other => {
                return Err(ApiError::ConfigError(format!(
                    "Invalid format: {} (must be 'text' or 'json')",
                    other
                )))
            }
        };

        Ok(CommandOutput {
            text,
            exit_code: if identical { 0 } else { 1 },
        })
    }

    fn handle_batch(&self, dir: &Path, out_dir: &Path) -> Result<CommandOutput, ApiError> {
        let dir = self.resolve(dir);
        let out_dir = self.resolve(out_dir);
        if !dir.is_dir() {
            return Err(ApiError::InputNotFound(dir));
        }

        let extension = self.config.batch.extension.as_str();
        let walker = WalkDir::new(&dir)
            .follow_links(self.config.batch.follow_symlinks)
            .sort_by_file_name();

        let mut cleaned_count = 0usize;
        for entry in walker {
            let entry = entry.map_err(|e| {
                ApiError::IoError(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("Failed to walk directory: {}", e),
                ))
            })?;
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.starts_with(&out_dir)
                || path.extension().and_then(|e| e.to_str()) != Some(extension)
            {
                continue;
            }

            let relative = path.strip_prefix(&dir).unwrap_or(path);
            let facts = read_facts_file(path)?;
            let cleaned = apply_filter(CLEAN_FACTS, facts)?;
            let target = out_dir.join(relative);
            write_file(&target, &self.render(&cleaned, false)?)?;
            debug!(source = %path.display(), target = %target.display(), "Cleaned fact file");
            cleaned_count += 1;
        }

        info!(files = cleaned_count, out_dir = %out_dir.display(), "Batch complete");
        Ok(CommandOutput::success(format!(
            "Cleaned {} fact file(s) into {}",
            cleaned_count,
            out_dir.display()
        )))
    }

    fn read_facts(&self, input: &str) -> Result<Value, ApiError> {
        if input == "-" {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            return parse_facts("<stdin>", &buf);
        }
        read_facts_file(&self.resolve(Path::new(input)))
    }

    fn render(&self, value: &Value, compact: bool) -> Result<String, ApiError> {
        if self.config.output.pretty && !compact {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.workspace_root.join(path)
        }
    }
}

fn read_facts_file(path: &Path) -> Result<Value, ApiError> {
    if !path.is_file() {
        return Err(ApiError::InputNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    parse_facts(&path.display().to_string(), &content)
}

fn parse_facts(source_name: &str, content: &str) -> Result<Value, ApiError> {
    serde_json::from_str(content).map_err(|error| ApiError::InvalidJson {
        source_name: source_name.to_string(),
        error,
    })
}

fn write_file(path: &Path, content: &str) -> Result<(), ApiError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, format!("{}\n", content))?;
    Ok(())
}
