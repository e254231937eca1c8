//! CLI command-name contract for logging.

use crate::cli::parse::Commands;

/// Stable command name for log fields (e.g. "clean", "show_config").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Clean { .. } => "clean",
        Commands::Fingerprint { .. } => "fingerprint",
        Commands::Compare { .. } => "compare",
        Commands::Batch { .. } => "batch",
        Commands::Filters => "filters",
        Commands::Spec => "spec",
        Commands::ShowConfig => "show_config",
    }
}
