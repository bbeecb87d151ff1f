use crate::cli::args::Command;
use crate::cli::params::{DEFAULT_MANIFEST_PATH, DEFAULT_OUTPUT_DIR, FetchParams};
use crate::config::{Config, load_config};
use crate::download::FetchOptions;
use crate::error::FetchError;
use crate::manifest::Manifest;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum ResolvedCommand {
    Fetch(FetchParams),
}

/// Applies CLI > config file > built-in default precedence and loads the manifest.
///
/// Every fatal condition surfaces here, before anything touches the output directory.
pub fn resolve_command(command: Command) -> Result<ResolvedCommand, FetchError> {
    match command {
        Command::Fetch {
            manifest_path,
            output_dir,
            config_path,
            timeout_secs,
        } => {
            let app_config = match config_path {
                Some(config_path) => {
                    tracing::info!("Loading configuration from {}", config_path);
                    load_config(&config_path)?
                }
                None => Config::default(),
            };

            let timeout_secs = timeout_secs.unwrap_or(app_config.timeout_secs);
            if timeout_secs == 0 {
                return Err(FetchError::CliArgumentValidation {
                    details: "timeout-secs must be greater than 0.".to_string(),
                });
            }

            let manifest_path = manifest_path
                .map(PathBuf::from)
                .or(app_config.manifest_path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST_PATH));
            let output_dir = output_dir
                .map(PathBuf::from)
                .or(app_config.output_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

            tracing::info!("Loading manifest from {}", manifest_path.display());
            let manifest = Manifest::load_from_file(&manifest_path)?;

            Ok(ResolvedCommand::Fetch(FetchParams {
                manifest_path,
                manifest,
                output_dir,
                options: FetchOptions {
                    timeout: Duration::from_secs(timeout_secs),
                    allow_nested_names: app_config.allow_nested_names,
                },
            }))
        }
    }
}
