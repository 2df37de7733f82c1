use crate::entity::Blockchain;
use crate::utils::lenient_decimal;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Liquidity pool a token trades in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolInfo {
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub user_contribution: Option<Decimal>, // Connected wallet's share of the pool
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    pub address: String, // Bech32 on Zilliqa, hex on Ethereum
    pub symbol: String,  // Token symbol (e.g. "ZIL", "XSGD")
    #[serde(default)]
    pub name: Option<String>, // Full token name
    #[serde(default)]
    pub decimals: u8,
    pub blockchain: Blockchain,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub balance: Option<Decimal>, // Holder balance, absent when no wallet is connected
    #[serde(default)]
    pub is_native: bool,
    #[serde(default)]
    pub is_wrapped_native: bool,
    #[serde(default)]
    pub pool: Option<PoolInfo>,
    #[serde(default)]
    pub registered: bool,
}

impl TokenInfo {
    pub fn new(address: &str, symbol: &str, blockchain: Blockchain) -> Self {
        Self {
            address: address.to_string(),
            symbol: symbol.to_string(),
            name: None,
            decimals: 0,
            blockchain,
            balance: None,
            is_native: false,
            is_wrapped_native: false,
            pool: None,
            registered: false,
        }
    }

    /// Balance used for ranking, zero when unknown
    pub fn balance_or_zero(&self) -> Decimal {
        self.balance.unwrap_or(Decimal::ZERO)
    }

    /// Pool contribution used for ranking, zero when there is no pool
    pub fn contribution_or_zero(&self) -> Decimal {
        self.pool
            .as_ref()
            .and_then(|pool| pool.user_contribution)
            .unwrap_or(Decimal::ZERO)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.symbol)
    }
}
