//! CLI command implementations

pub mod config;
pub mod edit;
pub mod new;
pub mod show;
pub mod simulate;

use anyhow::Result;
use blockyard_sandbox::SandboxConfig;

/// The config at `path`, or the defaults when no path is given
pub fn load_config(path: Option<&str>) -> Result<SandboxConfig> {
    match path {
        Some(path) => Ok(SandboxConfig::load(path)?),
        None => {
            let mut config = SandboxConfig::default();
            config.apply_env_overrides();
            Ok(config)
        }
    }
}
