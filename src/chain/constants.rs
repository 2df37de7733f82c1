// Native ZIL is addressed as the zero address
pub const ZIL_ADDRESS: &str = "zil1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq9yf6pz";
pub const ZIL_HEX_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

// Human readable part of Zilliqa bech32 addresses
pub const ZIL_HRP: &str = "zil";

// Symbols drawn with the native ZIL artwork
pub const NATIVE_LOGO_SYMBOLS: [&str; 2] = ["ZIL", "eZIL"];

pub const ADDRESS_BYTES: usize = 20;
