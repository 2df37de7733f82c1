#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Unknown token list type: {0}")]
    UnknownListType(String),

    #[error("Unknown blockchain: {0}")]
    UnknownBlockchain(String),

    #[error("Unknown network: {0}")]
    UnknownNetwork(String),
}
