use crate::entity::PickerError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Network {
    #[default]
    MainNet,
    TestNet,
}

impl FromStr for Network {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mainnet" => Ok(Network::MainNet),
            "testnet" => Ok(Network::TestNet),
            other => Err(PickerError::UnknownNetwork(other.to_string())),
        }
    }
}
