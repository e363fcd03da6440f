//! Deployment configuration.
//!
//! Non-secret settings (phone directories, spreadsheet/folder ids, routing
//! knobs) come from a TOML file; the path is taken from `LIBRETA_CONFIG` or
//! defaults to `libreta.toml`. Secrets (Google service-account key, Twilio
//! credentials) are environment-only, see `google::auth` and `twilio`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use libreta_core::{DefaultRoute, Directory, RoutingPolicy};
use libreta_parse::AmountExtractor;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub numbers: NumbersConfig,
    #[serde(default)]
    pub routing: RoutingConfig,
    pub sheets: SheetsConfig,
    pub drive: DriveConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// The sender allow-lists. Everything else about a sender is derived.
#[derive(Debug, Clone, Deserialize)]
pub struct NumbersConfig {
    pub admins: Vec<String>,
    pub rental_authorized: String,
    #[serde(default)]
    pub restricted: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    pub default_route: DefaultRoute,
    pub default_currency: String,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            default_route: DefaultRoute::Restricted,
            default_currency: libreta_parse::DEFAULT_CURRENCY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SheetsConfig {
    pub expenses_spreadsheet_id: String,
    pub rentals_spreadsheet_id: String,
    #[serde(default = "default_personal_tab")]
    pub personal_tab: String,
    #[serde(default = "default_partnership_tab")]
    pub partnership_tab: String,
    #[serde(default = "default_restricted_tab")]
    pub restricted_tab: String,
    #[serde(default = "default_rentals_tab")]
    pub rentals_tab: String,
}

fn default_personal_tab() -> String {
    "PERSONAL".to_string()
}
fn default_partnership_tab() -> String {
    "COMPARTIDO".to_string()
}
fn default_restricted_tab() -> String {
    "RESTRINGIDO".to_string()
}
fn default_rentals_tab() -> String {
    "ARRIENDOS".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct DriveConfig {
    pub expenses_folder_id: String,
    pub rentals_folder_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Config {
    pub fn default_path() -> PathBuf {
        std::env::var("LIBRETA_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("libreta.toml"))
    }

    pub fn load(path: &Path) -> Result<Config> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("parsing config from {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Config> {
        Ok(toml::from_str(raw)?)
    }

    pub fn directory(&self) -> Directory {
        Directory::new(
            self.numbers.admins.clone(),
            self.numbers.restricted.clone(),
            self.numbers.rental_authorized.clone(),
        )
    }

    pub fn routing_policy(&self) -> RoutingPolicy {
        RoutingPolicy::new(self.routing.default_route)
    }

    pub fn amount_extractor(&self) -> AmountExtractor {
        AmountExtractor::new(self.routing.default_currency.clone())
    }
}
