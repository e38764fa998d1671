mod basic;
mod lookup;

pub use basic::BasicConfig;
pub use lookup::LookupConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, sync::LazyLock};

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core server configuration (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,

    /// Outbound character-lookup settings (see `lookup` table in config.toml).
    #[serde(default)]
    pub lookup: LookupConfig,
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";

impl Config {
    /// Builds a Figment that merges defaults, an optional config TOML file and
    /// `MENAGERIE_`-prefixed environment variables (e.g.
    /// `MENAGERIE_BASIC__LISTEN_PORT=8080`).
    pub fn figment() -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE));
        }
        figment.merge(Env::prefixed("MENAGERIE_").split("__"))
    }

    /// Loads configuration by merging defaults, `config.toml` if present and
    /// the environment.
    pub fn from_optional_toml() -> Self {
        Self::figment().extract().unwrap_or_else(|err| {
            panic!("failed to extract configuration (defaults + optional config.toml): {err}")
        })
    }
}

/// Global, lazily-initialized configuration instance.
pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::from_optional_toml);
