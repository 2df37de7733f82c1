pub mod collection_interactor;
pub mod currency_list_interactor;
pub mod logo_interactor;
pub mod saved_token_interactor;
pub mod search_interactor;

pub use collection_interactor::{normalize_royalties, validate_input};
pub use currency_list_interactor::{
    compare_tokens, select_tokens, CurrencyListInteractor, CurrencyListInteractorImpl,
};
pub use logo_interactor::{resolve_logo, LogoRequest, LogoSettings, TokenLogo};
pub use saved_token_interactor::toggle_saved_token;
pub use search_interactor::matches_search;
