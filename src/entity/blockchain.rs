use crate::entity::PickerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Chain a token lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Blockchain {
    #[serde(rename = "zil")]
    Zilliqa,
    #[serde(rename = "eth")]
    Ethereum,
}

impl Blockchain {
    /// Zilliqa is the marketplace's home chain, everything else arrives over the bridge
    pub fn is_native_chain(&self) -> bool {
        matches!(self, Blockchain::Zilliqa)
    }
}

impl fmt::Display for Blockchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Blockchain::Zilliqa => write!(f, "zil"),
            Blockchain::Ethereum => write!(f, "eth"),
        }
    }
}

impl FromStr for Blockchain {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zil" | "zilliqa" => Ok(Blockchain::Zilliqa),
            "eth" | "ethereum" => Ok(Blockchain::Ethereum),
            other => Err(PickerError::UnknownBlockchain(other.to_string())),
        }
    }
}
