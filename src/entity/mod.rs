mod blockchain;
mod bridge;
mod collection;
mod currency_list;
mod network;
mod picker_error;
mod token;

pub use blockchain::Blockchain;
pub use bridge::{BridgeableToken, BridgeableTokenMapping};
pub use collection::{CollectionField, CollectionInputs, FieldError};
pub use currency_list::{
    CurrencyListType, SavedTokens, TokenListContext, TokenListOptions, TokenSelection,
};
pub use network::Network;
pub use picker_error::PickerError;
pub use token::{PoolInfo, TokenInfo};
