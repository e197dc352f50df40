//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::config::CliConfig;
use crate::output::Output;

/// File names searched for, in order, in each directory.
const CONFIG_NAMES: [&str; 3] = ["naela.toml", ".naela.toml", "naela.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context for the current directory.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Self::load_in(cwd, config_path, output)
    }

    /// Load context rooted at `cwd`.
    ///
    /// Without an explicit path the nearest config file in `cwd` or its
    /// ancestors is used. A config file that exists but does not parse is an
    /// error; defaults apply only when no file is found.
    pub fn load_in(cwd: PathBuf, config_path: Option<&str>, output: Output) -> Result<Self> {
        let config = match config_path {
            Some(path) => CliConfig::load(path)?,
            None => match discover_config(&cwd) {
                Some(path) => {
                    output.debug(&format!("using config {}", path.display()));
                    CliConfig::load(&path.to_string_lossy())?
                }
                None => CliConfig::default(),
            },
        };

        Ok(Self { config, output, cwd })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Nearest config file at or above `start`.
fn discover_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}
