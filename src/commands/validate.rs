use super::Host;
use crate::Result;
use crate::config::Config;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file (default is `game-intel.toml`)
    #[arg(value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,
}

/// Load the configuration, which also checks its values.
///
/// Returns the path of the file that was checked, if any.
fn validate_config_inner(workspace_root: &Utf8Path, config_path: Option<&Utf8Path>) -> Result<Option<Utf8PathBuf>> {
    let _ = Config::load(workspace_root, config_path)?;
    Ok(Config::resolve_path(workspace_root, config_path))
}

pub fn validate_config<H: Host>(host: &mut H, args: &ValidateArgs) -> Result<()> {
    let workspace_root = Utf8PathBuf::from(".");

    match validate_config_inner(&workspace_root, args.config.as_deref()) {
        Ok(checked) => {
            let _ = writeln!(host.output(), "Configuration file is valid");
            if let Some(path) = checked {
                let _ = writeln!(host.output(), "Config file: {path}");
            } else {
                let _ = writeln!(host.output(), "Using default configuration (no config file found)");
            }
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Configuration validation failed: {e}");
            host.exit(1);
            Err(e)
        }
    }
}
