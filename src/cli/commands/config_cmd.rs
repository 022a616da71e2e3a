//! config command - Show config resolution, print or initialize the file

use serde::Serialize;
use std::path::PathBuf;

use crate::cli::Context;
use crate::core::config::{Config, ConfigSource};
use crate::ui::output;
use anyhow::{bail, Context as _, Result};

#[derive(Debug, Serialize)]
struct PathOutput {
    source: String,
    path: Option<PathBuf>,
    default_path: Option<PathBuf>,
}

/// Show which config file is in use.
pub fn path(ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;
    let default_path = Config::default_config_path().ok();

    if ctx.json {
        output::json(&PathOutput {
            source: config.source().to_string(),
            path: config.loaded_from().map(PathBuf::from),
            default_path,
        })?;
        return Ok(());
    }

    match config.loaded_from() {
        Some(path) => output::result(format!("{} ({})", path.display(), config.source())),
        None => {
            output::result(format!("(none; using {})", ConfigSource::Defaults));
            if let Some(default_path) = default_path {
                output::print(
                    format!("Create one with 'glyphwave config init' at {}", default_path.display()),
                    ctx.verbosity(),
                );
            }
        }
    }

    Ok(())
}

/// Print the effective configuration as TOML.
pub fn show(ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;
    let effective = config.effective();

    if ctx.json {
        output::json(&effective)?;
    } else {
        let text = toml::to_string_pretty(&effective).context("Failed to render configuration")?;
        output::result(text.trim_end());
    }

    Ok(())
}

/// Write the reference configuration to `--config` or the default path.
pub fn init(ctx: &Context, force: bool) -> Result<()> {
    let path = match &ctx.config {
        Some(path) => path.clone(),
        None => Config::default_config_path().context("Failed to locate config directory")?,
    };

    if path.exists() && !force {
        bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    Config::write(&path, &Config::reference_file()).context("Failed to write config")?;
    output::print(format!("Wrote {}", path.display()), ctx.verbosity());

    Ok(())
}
