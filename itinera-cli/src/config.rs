use anyhow::{Context, Result};
use itinera_live::SearchSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::{ensure_itinera_home, itinera_home};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchSection,
    pub trip: TripSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSection {
    /// When false, non-preset destinations go straight to synthetic itineraries.
    pub enabled: bool,
    pub endpoint: String,
    pub timeout_secs: u64,
}

/// Defaults for `itinera plan` flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripSection {
    pub budget: u32,
    pub duration: usize,
    pub start_location: Option<String>,
}

impl Default for SearchSection {
    fn default() -> Self {
        let s = SearchSettings::default();
        Self {
            enabled: true,
            endpoint: s.endpoint,
            timeout_secs: s.timeout_secs,
        }
    }
}

impl Default for TripSection {
    fn default() -> Self {
        Self {
            budget: 50_000,
            duration: 5,
            start_location: None,
        }
    }
}

impl SearchSection {
    pub fn settings(&self) -> SearchSettings {
        SearchSettings {
            endpoint: self.endpoint.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(itinera_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config(cfg: &Config) -> Result<PathBuf> {
    let p = ensure_itinera_home()?.join("config.toml");
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(p)
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let written = save_config(&Config::default())?;
    println!("Wrote {}", written.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_fills_defaults() {
        let cfg: Config = toml::from_str("[trip]\nbudget = 20000\n").unwrap();
        assert_eq!(cfg.trip.budget, 20_000);
        assert_eq!(cfg.trip.duration, 5);
        assert!(cfg.search.enabled);
        assert_eq!(cfg.search.timeout_secs, 5);
    }

    #[test]
    fn test_default_round_trips_through_toml() {
        let cfg = Config::default();
        let s = toml::to_string_pretty(&cfg).unwrap();
        assert_eq!(toml::from_str::<Config>(&s).unwrap(), cfg);
    }

    #[test]
    fn test_missing_file_is_default() {
        let p = std::env::temp_dir().join("itinera-no-such-config.toml");
        assert_eq!(load_config_from(&p).unwrap(), Config::default());
    }

    #[test]
    fn test_search_settings_mapping() {
        let cfg: Config =
            toml::from_str("[search]\nendpoint = \"http://localhost:9/api\"\ntimeout_secs = 2\n")
                .unwrap();
        let s = cfg.search.settings();
        assert_eq!(s.endpoint, "http://localhost:9/api");
        assert_eq!(s.timeout_secs, 2);
    }
}
