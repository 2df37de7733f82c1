pub mod bridge_repository;
pub mod saved_token_repository;
pub mod token_repository;

pub use bridge_repository::{BridgeRepository, JsonBridgeRepository};
pub use saved_token_repository::{FileSavedTokenRepository, SavedTokenRepository};
pub use token_repository::{JsonTokenRepository, TokenRepository};
