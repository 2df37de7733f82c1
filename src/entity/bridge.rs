use crate::entity::Blockchain;
use serde::{Deserialize, Serialize};

/// One side of a bridge pair, addresses are hex without the 0x prefix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeableToken {
    pub blockchain: Blockchain,
    pub token_address: String,
    pub to_blockchain: Blockchain,
    pub to_token_address: String,
    #[serde(default)]
    pub denom: String,
}

/// Bridge registry grouped by origin chain
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BridgeableTokenMapping {
    #[serde(default)]
    pub zil: Vec<BridgeableToken>,
    #[serde(default)]
    pub eth: Vec<BridgeableToken>,
}

impl BridgeableTokenMapping {
    pub fn for_chain(&self, blockchain: Blockchain) -> &[BridgeableToken] {
        match blockchain {
            Blockchain::Zilliqa => &self.zil,
            Blockchain::Ethereum => &self.eth,
        }
    }
}
