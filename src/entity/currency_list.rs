use crate::entity::{BridgeableTokenMapping, PickerError, TokenInfo};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

/// Addresses the user added to their list by hand
pub type SavedTokens = BTreeSet<String>;

/// Which base filter a currency dialog applies before search and sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurrencyListType {
    /// Every Zilliqa token
    #[serde(rename = "zil")]
    Zil,
    /// Zilliqa tokens accepted as marketplace denominations
    #[serde(rename = "ark-zil")]
    ArkZil,
    /// Zilliqa tokens that can be bridged out
    #[serde(rename = "bridge-zil")]
    BridgeZil,
    /// Ethereum tokens that can be bridged in
    #[serde(rename = "bridge-eth")]
    BridgeEth,
    /// No chain filter
    #[serde(rename = "all")]
    All,
}

impl fmt::Display for CurrencyListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CurrencyListType::Zil => "zil",
            CurrencyListType::ArkZil => "ark-zil",
            CurrencyListType::BridgeZil => "bridge-zil",
            CurrencyListType::BridgeEth => "bridge-eth",
            CurrencyListType::All => "all",
        };
        f.write_str(name)
    }
}

impl FromStr for CurrencyListType {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zil" => Ok(CurrencyListType::Zil),
            "ark-zil" => Ok(CurrencyListType::ArkZil),
            "bridge-zil" => Ok(CurrencyListType::BridgeZil),
            "bridge-eth" => Ok(CurrencyListType::BridgeEth),
            "all" => Ok(CurrencyListType::All),
            other => Err(PickerError::UnknownListType(other.to_string())),
        }
    }
}

/// Per-dialog switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenListOptions {
    pub exclude_native_asset: bool,
    pub exclude_tokens_without_pool: bool,
    pub fungible_tokens_only: bool,
    pub wrapped_native_only: bool,
    pub rank_by_contribution: bool,
}

/// Collaborator state the pipeline reads, passed in by the caller
#[derive(Debug, Clone, Default)]
pub struct TokenListContext {
    pub native_address: String,
    pub exchange_denoms: Option<HashSet<String>>,
    pub bridge_tokens: BridgeableTokenMapping,
}

impl TokenListContext {
    pub fn new(native_address: &str) -> Self {
        Self {
            native_address: native_address.to_string(),
            exchange_denoms: None,
            bridge_tokens: BridgeableTokenMapping::default(),
        }
    }

    pub fn with_exchange_denoms<I, S>(mut self, denoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exchange_denoms = Some(denoms.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_bridge_tokens(mut self, bridge_tokens: BridgeableTokenMapping) -> Self {
        self.bridge_tokens = bridge_tokens;
        self
    }
}

/// Result of one pipeline run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenSelection {
    pub tokens: Vec<TokenInfo>,
    /// Set when the caller's current token fell out of the list
    pub replace_selection: Option<TokenInfo>,
}

impl TokenSelection {
    pub fn addresses(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.address.as_str()).collect()
    }
}
