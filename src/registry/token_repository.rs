use crate::entity::TokenInfo;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use log::{error, info};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Source of the live token registry
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Full token snapshot
    async fn get_tokens(&self) -> Result<Vec<TokenInfo>>;

    /// Look up a single token by its address
    async fn get_token_by_address(&self, address: &str) -> Result<TokenInfo>;
}

/// Token registry read from a JSON array on disk
pub struct JsonTokenRepository {
    path: PathBuf,
    token_cache: Arc<Mutex<HashMap<String, TokenInfo>>>,
    loaded: AtomicBool,
}

impl JsonTokenRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            token_cache: Arc::new(Mutex::new(HashMap::new())),
            loaded: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl TokenRepository for JsonTokenRepository {
    async fn get_tokens(&self) -> Result<Vec<TokenInfo>> {
        info!("Loading token registry from {}", self.path.display());

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read token list {}", self.path.display()))?;

        let tokens: Vec<TokenInfo> = serde_json::from_str(&raw).map_err(|e| {
            error!("Failed to parse token list: {}", e);
            anyhow!("Failed to parse token list {}: {}", self.path.display(), e)
        })?;

        // Lookups served by address reflect the latest snapshot
        {
            let mut cache = self
                .token_cache
                .lock()
                .map_err(|_| anyhow!("Token cache lock poisoned"))?;
            cache.clear();
            for token in &tokens {
                cache.insert(token.address.to_lowercase(), token.clone());
            }
        }
        self.loaded.store(true, Ordering::Release);

        info!("Loaded {} tokens", tokens.len());
        Ok(tokens)
    }

    async fn get_token_by_address(&self, address: &str) -> Result<TokenInfo> {
        let key = address.trim().to_lowercase();

        // Check cache first
        {
            let cache = self
                .token_cache
                .lock()
                .map_err(|_| anyhow!("Token cache lock poisoned"))?;
            if let Some(token) = cache.get(&key) {
                return Ok(token.clone());
            }
        }

        // The cache holds the whole snapshot once loaded
        if self.loaded.load(Ordering::Acquire) {
            return Err(anyhow!("Token {} not found in registry", address));
        }

        self.get_tokens()
            .await?
            .into_iter()
            .find(|t| t.address.to_lowercase() == key)
            .ok_or_else(|| anyhow!("Token {} not found in registry", address))
    }
}
