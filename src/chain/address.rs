use crate::chain::constants::{ADDRESS_BYTES, ZIL_HRP};
use crate::entity::PickerError;
use bech32::{FromBase32, ToBase32, Variant};
use log::debug;

fn strip_hex_prefix(address: &str) -> &str {
    address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address)
}

/// Convert a 20-byte hex address (with or without 0x) to its zil1 form
pub fn to_bech32_address(address: &str) -> Result<String, PickerError> {
    let bytes = hex::decode(strip_hex_prefix(address.trim()))
        .map_err(|_| PickerError::InvalidAddress(address.to_string()))?;
    if bytes.len() != ADDRESS_BYTES {
        return Err(PickerError::InvalidAddress(address.to_string()));
    }

    bech32::encode(ZIL_HRP, bytes.to_base32(), Variant::Bech32)
        .map_err(|_| PickerError::InvalidAddress(address.to_string()))
}

/// Convert a zil1 address to lowercase 0x-prefixed hex
pub fn from_bech32_address(address: &str) -> Result<String, PickerError> {
    let invalid = || PickerError::InvalidAddress(address.to_string());

    let (hrp, data, variant) = bech32::decode(address.trim()).map_err(|_| invalid())?;
    if hrp != ZIL_HRP || variant != Variant::Bech32 {
        return Err(invalid());
    }

    let bytes = Vec::<u8>::from_base32(&data).map_err(|_| invalid())?;
    if bytes.len() != ADDRESS_BYTES {
        return Err(invalid());
    }
    Ok(format!("0x{}", hex::encode(bytes)))
}

pub fn is_bech32_address(address: &str) -> bool {
    from_bech32_address(address).is_ok()
}

/// Canonical lowercase bech32 form of a hex or bech32 address.
///
/// Returns `None` when the input is neither, so callers can treat it as
/// "matches nothing".
pub fn normalize_address(address: &str) -> Option<String> {
    let trimmed = address.trim();
    if trimmed.to_lowercase().starts_with(ZIL_HRP) {
        if let Ok(hex) = from_bech32_address(trimmed) {
            return to_bech32_address(&hex).ok();
        }
    }

    match to_bech32_address(trimmed) {
        Ok(bech32) => Some(bech32),
        Err(_) => {
            debug!("Address {} cannot be normalized", address);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::constants::{ZIL_ADDRESS, ZIL_HEX_ADDRESS};

    #[test]
    fn test_to_bech32_address() {
        assert_eq!(
            to_bech32_address("0x7Aa7eA9f4534d8D70224b9c2FB165242F321F12b").unwrap(),
            "zil102n74869xnvdwq3yh8p0k9jjgtejruft268tg8"
        );
        assert_eq!(
            to_bech32_address("a845c1034cd077bd8d32be0447239c7e4be6cb21").unwrap(),
            "zil14pzuzq6v6pmmmrfjhczywguu0e97djepxt8g3e"
        );
        assert_eq!(to_bech32_address(ZIL_HEX_ADDRESS).unwrap(), ZIL_ADDRESS);
    }

    #[test]
    fn test_from_bech32_address() {
        assert_eq!(
            from_bech32_address("zil102n74869xnvdwq3yh8p0k9jjgtejruft268tg8").unwrap(),
            "0x7aa7ea9f4534d8d70224b9c2fb165242f321f12b"
        );
        assert_eq!(from_bech32_address(ZIL_ADDRESS).unwrap(), ZIL_HEX_ADDRESS);
    }

    #[test]
    fn test_invalid_addresses() {
        assert!(to_bech32_address("0x1234").is_err());
        assert!(to_bech32_address("not hex at all").is_err());
        // Valid bech32, wrong prefix
        assert!(from_bech32_address("a12uel5l").is_err());
        assert!(!is_bech32_address("zil102n74869xnvdwq3yh8p0k9jjgtejruft268tg9"));
        // Mixed case is rejected outright
        assert!(!is_bech32_address("zil102n74869xnvdwq3yh8p0k9jjgtejruft268TG8"));
    }

    #[test]
    fn test_normalize_address() {
        let expected = Some("zil102n74869xnvdwq3yh8p0k9jjgtejruft268tg8".to_string());
        assert_eq!(
            normalize_address("0x7Aa7eA9f4534d8D70224b9c2FB165242F321F12b"),
            expected
        );
        assert_eq!(
            normalize_address("7aa7ea9f4534d8d70224b9c2fb165242f321f12b"),
            expected
        );
        assert_eq!(
            normalize_address(" ZIL102N74869XNVDWQ3YH8P0K9JJGTEJRUFT268TG8 "),
            expected
        );
        assert_eq!(normalize_address("0x2"), None);
    }
}
