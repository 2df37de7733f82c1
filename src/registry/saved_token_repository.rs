use crate::entity::SavedTokens;
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Persistence for the user's hand-added tokens
#[async_trait]
pub trait SavedTokenRepository: Send + Sync {
    async fn load(&self) -> Result<SavedTokens>;
    async fn save(&self, saved: &SavedTokens) -> Result<()>;
}

pub struct FileSavedTokenRepository {
    path: PathBuf,
}

impl FileSavedTokenRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SavedTokenRepository for FileSavedTokenRepository {
    async fn load(&self) -> Result<SavedTokens> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse saved tokens {}", self.path.display())),
            // Nothing saved yet
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(SavedTokens::new()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read saved tokens {}", self.path.display())),
        }
    }

    async fn save(&self, saved: &SavedTokens) -> Result<()> {
        let raw = serde_json::to_string_pretty(saved)?;
        tokio::fs::write(&self.path, raw)
            .await
            .with_context(|| format!("Failed to write saved tokens {}", self.path.display()))?;
        info!("Saved {} user tokens", saved.len());
        Ok(())
    }
}
