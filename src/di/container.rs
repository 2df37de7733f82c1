use std::sync::Arc;

use crate::config::Config;
use crate::entity::{Blockchain, TokenInfo, TokenListContext};
use crate::interactor::currency_list_interactor::CurrencyListInteractorImpl;
use crate::interactor::logo_interactor::LogoSettings;
use crate::registry::bridge_repository::{BridgeRepository, JsonBridgeRepository};
use crate::registry::saved_token_repository::{FileSavedTokenRepository, SavedTokenRepository};
use crate::registry::token_repository::{JsonTokenRepository, TokenRepository};
use anyhow::Result;
use log::warn;

/// ServiceContainer provides access to core application dependencies
pub struct ServiceContainer {
    // Registries
    token_repository: Arc<dyn TokenRepository + Send + Sync>,
    bridge_repository: Arc<dyn BridgeRepository + Send + Sync>,
    saved_token_repository: Arc<dyn SavedTokenRepository + Send + Sync>,

    // Configuration
    config: Config,
}

impl ServiceContainer {
    /// Create a container backed by the JSON files named in `config`
    pub fn new(config: Config) -> Self {
        let token_repository = Arc::new(JsonTokenRepository::new(config.token_list_path.clone()))
            as Arc<dyn TokenRepository + Send + Sync>;
        let bridge_repository =
            Arc::new(JsonBridgeRepository::new(config.bridge_tokens_path.clone()))
                as Arc<dyn BridgeRepository + Send + Sync>;
        let saved_token_repository =
            Arc::new(FileSavedTokenRepository::new(config.saved_tokens_path.clone()))
                as Arc<dyn SavedTokenRepository + Send + Sync>;

        Self {
            token_repository,
            bridge_repository,
            saved_token_repository,
            config,
        }
    }

    /// Snapshot collaborator state into a currency list interactor
    pub async fn currency_list_interactor(&self) -> Result<CurrencyListInteractorImpl> {
        let bridge_tokens = self.bridge_repository.get_bridge_tokens().await?;

        let mut context =
            TokenListContext::new(&self.config.native_token_address).with_bridge_tokens(bridge_tokens);
        context.exchange_denoms = self.config.exchange_denoms.clone();

        Ok(CurrencyListInteractorImpl::new(context))
    }

    /// Registry entry for `address`, or an address-only placeholder when the
    /// registry does not list it
    pub async fn token_or_placeholder(&self, address: &str) -> TokenInfo {
        match self.token_repository.get_token_by_address(address).await {
            Ok(token) => token,
            Err(e) => {
                warn!("{}, using an unlisted placeholder", e);
                TokenInfo::new(address.trim(), "", Blockchain::Zilliqa)
            }
        }
    }

    // Accessor methods

    pub fn token_repository(&self) -> Arc<dyn TokenRepository + Send + Sync> {
        self.token_repository.clone()
    }

    pub fn bridge_repository(&self) -> Arc<dyn BridgeRepository + Send + Sync> {
        self.bridge_repository.clone()
    }

    pub fn saved_token_repository(&self) -> Arc<dyn SavedTokenRepository + Send + Sync> {
        self.saved_token_repository.clone()
    }

    pub fn logo_settings(&self) -> LogoSettings {
        LogoSettings {
            network: self.config.network,
            dark_theme: self.config.dark_theme,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{CurrencyListType, TokenListOptions};
    use crate::interactor::CurrencyListInteractor;
    use crate::presenter::CurrencyDialogPresenter;
    use crate::view::ConsoleCurrencyView;
    use std::io::Write;

    #[tokio::test]
    async fn test_container_wires_exchange_denoms() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"[
                {"address": "zil1a", "symbol": "AAA", "blockchain": "zil", "registered": true},
                {"address": "zil1b", "symbol": "BBB", "blockchain": "zil", "registered": true}
            ]"#,
        )
        .unwrap();

        let config = Config {
            token_list_path: file.path().to_path_buf(),
            exchange_denoms: Some(["zil1b".to_string()].into_iter().collect()),
            ..Default::default()
        };
        let container = ServiceContainer::new(config);

        let tokens = container.token_repository().get_tokens().await.unwrap();
        let interactor = container.currency_list_interactor().await.unwrap();
        let selection = interactor.select_tokens(
            &tokens,
            CurrencyListType::ArkZil,
            &TokenListOptions::default(),
            None,
        );
        assert_eq!(selection.addresses(), vec!["zil1b"]);
    }

    #[tokio::test]
    async fn test_unlisted_current_token_is_replaced() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"[
                {"address": "0x1", "symbol": "AAA", "blockchain": "zil", "registered": true, "balance": "5"},
                {"address": "0x2", "symbol": "BBB", "blockchain": "zil", "registered": true}
            ]"#,
        )
        .unwrap();

        let config = Config {
            token_list_path: file.path().to_path_buf(),
            ..Default::default()
        };
        let container = ServiceContainer::new(config);
        let tokens = container.token_repository().get_tokens().await.unwrap();

        let current = container.token_or_placeholder("0x9").await;
        assert_eq!(current.address, "0x9");
        assert_eq!(container.token_or_placeholder("0x2").await.symbol, "BBB");

        let interactor = Arc::new(container.currency_list_interactor().await.unwrap());
        let view = Arc::new(ConsoleCurrencyView::new(Vec::new()));
        let mut presenter = CurrencyDialogPresenter::new(
            interactor,
            view.clone(),
            CurrencyListType::Zil,
            TokenListOptions::default(),
            Default::default(),
        );

        let replacement = presenter.refresh(&tokens, Some(&current)).unwrap();
        assert_eq!(replacement.map(|t| t.symbol), Some("AAA".to_string()));

        drop(presenter);
        let output = Arc::try_unwrap(view).ok().unwrap().into_inner().unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with("Selected AAA (0x1)\n"));
    }
}
