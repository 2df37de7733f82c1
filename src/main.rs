//! Token picker - command line front end
//!
//! Loads the token, bridge and saved-token registries, runs one currency
//! dialog pass with the requested list type, flags and search text, and
//! prints the resulting list.
use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use log::info;
use std::io;
use std::sync::Arc;
use token_picker::{
    resolve_logo, Config, ConsoleCurrencyView, CurrencyDialogPresenter, CurrencyListType,
    LogoRequest, SavedTokenRepository, ServiceContainer, TokenListOptions, TokenLogo,
    TokenRepository,
};

#[derive(Parser, Debug)]
#[command(name = "token-picker", version, about = "Select a token the way the swap dialog does")]
struct Cli {
    /// Search text typed into the dialog
    #[arg(default_value = "")]
    search: String,

    /// zil, ark-zil, bridge-zil, bridge-eth or all
    #[arg(short, long, default_value = "zil")]
    list: CurrencyListType,

    /// Address of the currently selected token
    #[arg(long)]
    current: Option<String>,

    /// Add or remove an address from the saved token list before listing
    #[arg(long)]
    toggle: Option<String>,

    #[arg(long)]
    hide_native: bool,

    #[arg(long)]
    hide_no_pool: bool,

    #[arg(long)]
    fungible_only: bool,

    #[arg(long)]
    wrapped_only: bool,

    /// Rank by pool contribution instead of balance
    #[arg(long)]
    show_contribution: bool,

    /// Print each listed token's logo URL
    #[arg(long)]
    logos: bool,

    #[arg(long, env = "TOKEN_LIST_PATH")]
    tokens: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!("Starting token picker v{}", token_picker::VERSION);

    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(path) = cli.tokens.clone() {
        config.token_list_path = path;
    }

    let services = ServiceContainer::new(config);
    let tokens = services
        .token_repository()
        .get_tokens()
        .await
        .context("Failed to load token registry")?;
    let saved_repository = services.saved_token_repository();
    let saved = saved_repository.load().await?;

    // A selection the registry no longer lists still triggers a replacement
    let current = match &cli.current {
        Some(address) => Some(services.token_or_placeholder(address).await),
        None => None,
    };

    let options = TokenListOptions {
        exclude_native_asset: cli.hide_native,
        exclude_tokens_without_pool: cli.hide_no_pool,
        fungible_tokens_only: cli.fungible_only,
        wrapped_native_only: cli.wrapped_only,
        rank_by_contribution: cli.show_contribution,
    };

    let interactor = Arc::new(services.currency_list_interactor().await?);
    let view = Arc::new(ConsoleCurrencyView::new(io::stdout()));
    let mut presenter =
        CurrencyDialogPresenter::new(interactor.clone(), view, cli.list, options, saved)
            .with_search(&cli.search);

    if let Some(address) = &cli.toggle {
        let token = services.token_or_placeholder(address).await;
        let saved = presenter.toggle_user_token(&token)?;
        saved_repository.save(saved).await?;
    }

    presenter.refresh(&tokens, current.as_ref())?;

    if cli.logos {
        let settings = services.logo_settings();
        for token in presenter.visible_tokens() {
            let request = LogoRequest {
                symbol: Some(token.symbol.as_str()),
                address: &token.address,
                blockchain: Some(token.blockchain),
                legacy: false,
            };
            if let TokenLogo::Remote { url, .. } =
                resolve_logo(&request, &settings, &interactor.context().bridge_tokens)
            {
                println!("{:<10} {}", token.symbol, url);
            }
        }
    }

    Ok(())
}
