use crate::chain::ZIL_ADDRESS;
use crate::entity::Network;
use log::warn;
use std::collections::HashSet;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON array of token records
    pub token_list_path: PathBuf,

    /// JSON bridge registry, optional
    pub bridge_tokens_path: Option<PathBuf>,

    /// Where hand-added token addresses are kept
    pub saved_tokens_path: PathBuf,

    /// Curated denominations for the marketplace list
    pub exchange_denoms: Option<HashSet<String>>,

    /// Address of the chain's base asset
    pub native_token_address: String,

    pub network: Network,

    pub dark_theme: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token_list_path: PathBuf::from("tokens.json"),
            bridge_tokens_path: None,
            saved_tokens_path: PathBuf::from("saved_tokens.json"),
            exchange_denoms: None,
            native_token_address: ZIL_ADDRESS.to_string(),
            network: Network::MainNet,
            dark_theme: false,
        }
    }
}

fn parse_denoms(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .collect()
}

impl Config {
    /// Creates a new configuration from environment variables
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();

        let network = match env::var("NETWORK") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                warn!("{}, falling back to mainnet", e);
                Network::MainNet
            }),
            Err(_) => defaults.network,
        };

        Self {
            token_list_path: env::var("TOKEN_LIST_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.token_list_path),
            bridge_tokens_path: env::var("BRIDGE_TOKENS_PATH").ok().map(PathBuf::from),
            saved_tokens_path: env::var("SAVED_TOKENS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.saved_tokens_path),
            exchange_denoms: env::var("EXCHANGE_DENOMS").ok().map(|raw| parse_denoms(&raw)),
            native_token_address: env::var("NATIVE_TOKEN_ADDRESS")
                .unwrap_or(defaults.native_token_address),
            network,
            dark_theme: env::var("DARK_THEME")
                .map(|v| v.trim().eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.dark_theme),
        }
    }
}
