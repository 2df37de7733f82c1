pub mod address;
pub mod constants;

pub use address::{from_bech32_address, is_bech32_address, normalize_address, to_bech32_address};
pub use constants::{ZIL_ADDRESS, ZIL_HEX_ADDRESS, ZIL_HRP};
