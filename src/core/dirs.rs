//! Where grecent keeps its files.
//!
//! XDG variables are honored on the BSDs and Linux even when `dirs` would pick
//! something else; other platforms use the `dirs` defaults.

use crate::core::error::{GrecentError, Result};
use std::path::PathBuf;

const APP_DIR: &str = "grecent";

#[derive(Debug, Clone, Copy)]
enum Kind {
    Config,
    Cache,
}

impl Kind {
    fn xdg_var(self) -> &'static str {
        match self {
            Kind::Config => "XDG_CONFIG_HOME",
            Kind::Cache => "XDG_CACHE_HOME",
        }
    }

    fn home_fallback(self) -> &'static str {
        match self {
            Kind::Config => ".config",
            Kind::Cache => ".cache",
        }
    }

    fn platform_default(self) -> Option<PathBuf> {
        match self {
            Kind::Config => dirs::config_dir(),
            Kind::Cache => dirs::cache_dir(),
        }
    }
}

fn app_directory(kind: Kind) -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var_os(kind.xdg_var())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(kind.home_fallback()))),
        _ => kind.platform_default(),
    };
    base.map(|dir| dir.join(APP_DIR))
        .ok_or(GrecentError::NoHomeDirectory)
}

pub fn get_config_directory() -> Result<PathBuf> {
    app_directory(Kind::Config)
}

pub fn get_cache_directory() -> Result<PathBuf> {
    app_directory(Kind::Cache)
}

/// `<config dir>/grecent/config.json`
pub fn config_file() -> Result<PathBuf> {
    Ok(get_config_directory()?.join("config.json"))
}

/// `<cache dir>/grecent/grecent.log`
pub fn log_file() -> Result<PathBuf> {
    Ok(get_cache_directory()?.join("grecent.log"))
}
