use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

lazy_static! {
    pub static ref TWITTER_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_]+$").unwrap();
    pub static ref INSTAGRAM_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_.]+$").unwrap();
    pub static ref WEBSITE_REGEX: Regex = Regex::new(r"^(http|https)://").unwrap();
    static ref NUMBER_REGEX: Regex =
        Regex::new(r"^([+-]?)([0-9]*)(?:\.([0-9]*))?(?:[eE]([+-]?[0-9]+))?$").unwrap();
}

// Digits in the integer part of Decimal::MAX
const MAX_INTEGER_DIGITS: i64 = 29;

/// Parse a decimal, returning `None` for anything that is not a number.
///
/// Numbers beyond `Decimal`'s range clamp to `Decimal::MAX`/`Decimal::MIN`,
/// numbers too small to represent become zero.
pub fn parse_decimal(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
        .or_else(|| clamp_out_of_range(trimmed))
}

fn clamp_out_of_range(input: &str) -> Option<Decimal> {
    let caps = NUMBER_REGEX.captures(input)?;
    let integer = caps.get(2).map_or("", |m| m.as_str());
    let fraction = caps.get(3).map_or("", |m| m.as_str());
    if integer.is_empty() && fraction.is_empty() {
        return None;
    }

    let exponent = match caps.get(4) {
        Some(m) => m.as_str().parse::<i64>().unwrap_or(if m.as_str().starts_with('-') {
            i64::MIN / 2
        } else {
            i64::MAX / 2
        }),
        None => 0,
    };

    // Position of the leading significant digit relative to the decimal point
    let significant = integer.trim_start_matches('0');
    let magnitude = if !significant.is_empty() {
        (significant.len() as i64).saturating_add(exponent)
    } else {
        let digits = fraction.trim_start_matches('0');
        if digits.is_empty() {
            return Some(Decimal::ZERO);
        }
        exponent.saturating_sub((fraction.len() - digits.len()) as i64)
    };

    if magnitude >= MAX_INTEGER_DIGITS {
        let negative = caps.get(1).map_or(false, |m| m.as_str() == "-");
        Some(if negative { Decimal::MIN } else { Decimal::MAX })
    } else if magnitude <= 0 {
        Some(Decimal::ZERO)
    } else {
        None
    }
}

/// Serde adapter for optional amounts: numbers and numeric strings parse,
/// malformed values become zero so ranking stays total.
pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(parse_decimal(&s).unwrap_or(Decimal::ZERO)),
        Some(Value::Number(n)) => Some(parse_decimal(&n.to_string()).unwrap_or(Decimal::ZERO)),
        Some(_) => Some(Decimal::ZERO),
    })
}

// Format amount with the token's precision, trailing zeros trimmed
pub fn format_amount(amount: Decimal, decimals: u8) -> String {
    let rounded = amount.round_dp(u32::from(decimals.min(18)));
    rounded.normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal(" 12.5 "), Some(Decimal::new(125, 1)));
        assert_eq!(parse_decimal("1e3"), Some(Decimal::from(1000)));
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("."), None);
        assert_eq!(parse_decimal("1e"), None);
    }

    #[test]
    fn test_parse_decimal_clamps_out_of_range() {
        assert_eq!(parse_decimal("100000000000000000000000000000"), Some(Decimal::MAX));
        assert_eq!(parse_decimal("-100000000000000000000000000000"), Some(Decimal::MIN));
        assert_eq!(parse_decimal("1.5e40"), Some(Decimal::MAX));
        assert_eq!(parse_decimal("0.001e35"), Some(Decimal::MAX));
        assert_eq!(parse_decimal("1e-40"), Some(Decimal::ZERO));
    }

    #[test]
    fn test_lenient_decimal_keeps_huge_balances() {
        #[derive(serde::Deserialize)]
        struct Row {
            #[serde(default, deserialize_with = "lenient_decimal")]
            balance: Option<Decimal>,
        }

        let row: Row = serde_json::from_str(r#"{"balance": 1e30}"#).unwrap();
        assert_eq!(row.balance, Some(Decimal::MAX));
        let row: Row = serde_json::from_str(r#"{"balance": "lots"}"#).unwrap();
        assert_eq!(row.balance, Some(Decimal::ZERO));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Decimal::new(1_234_567, 3), 2), "1234.57");
        assert_eq!(format_amount(Decimal::new(1_500, 3), 6), "1.5");
        assert_eq!(format_amount(Decimal::ZERO, 12), "0");
    }

    #[test]
    fn test_handle_patterns() {
        assert!(TWITTER_REGEX.is_match("zilswap_io"));
        assert!(!TWITTER_REGEX.is_match("zil.swap"));
        assert!(INSTAGRAM_REGEX.is_match("the.bear.market"));
        assert!(WEBSITE_REGEX.is_match("https://thebear.market"));
        assert!(!WEBSITE_REGEX.is_match("ftp://thebear.market"));
    }
}
