use crate::entity::BridgeableTokenMapping;
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use std::path::PathBuf;

#[async_trait]
pub trait BridgeRepository: Send + Sync {
    async fn get_bridge_tokens(&self) -> Result<BridgeableTokenMapping>;
}

/// Bridge registry read from `{ "zil": [...], "eth": [...] }` on disk
pub struct JsonBridgeRepository {
    path: Option<PathBuf>,
}

impl JsonBridgeRepository {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

#[async_trait]
impl BridgeRepository for JsonBridgeRepository {
    async fn get_bridge_tokens(&self) -> Result<BridgeableTokenMapping> {
        let Some(path) = &self.path else {
            return Ok(BridgeableTokenMapping::default());
        };

        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read bridge list {}", path.display()))?;
        let mapping: BridgeableTokenMapping = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse bridge list {}", path.display()))?;

        info!(
            "Loaded {} zil and {} eth bridge tokens",
            mapping.zil.len(),
            mapping.eth.len()
        );
        Ok(mapping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Blockchain;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_bridge_tokens() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"zil": [{
                "blockchain": "zil",
                "tokenAddress": "7aa7ea9f4534d8d70224b9c2fb165242f321f12b",
                "toBlockchain": "eth",
                "toTokenAddress": "dac17f958d2ee523a2206206994597c13d831ec7",
                "denom": "xsgd.z"
            }]}"#,
        )
        .unwrap();

        let repository = JsonBridgeRepository::new(Some(file.path().to_path_buf()));
        let mapping = repository.get_bridge_tokens().await.unwrap();
        assert_eq!(mapping.zil.len(), 1);
        assert!(mapping.eth.is_empty());
        assert_eq!(mapping.for_chain(Blockchain::Zilliqa)[0].denom, "xsgd.z");
    }

    #[tokio::test]
    async fn test_no_path_means_empty_registry() {
        let repository = JsonBridgeRepository::new(None);
        let mapping = repository.get_bridge_tokens().await.unwrap();
        assert_eq!(mapping, BridgeableTokenMapping::default());
    }
}
