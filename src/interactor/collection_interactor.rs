use crate::entity::{CollectionField, FieldError};
use crate::utils::{parse_decimal, INSTAGRAM_REGEX, TWITTER_REGEX, WEBSITE_REGEX};
use rust_decimal::Decimal;

const DISCORD_PREFIX: &str = "https://discord.gg/";
const TELEGRAM_PREFIX: &str = "https://t.me/";
const URL_MAX_LEN: usize = 253;
const MAX_ROYALTIES: i64 = 8;

// Lengths are counted in UTF-16 code units, as the browser form counts them
fn input_length(input: &str) -> usize {
    input.encode_utf16().count()
}

fn check_length(input: &str, min: usize, max: usize) -> Result<(), FieldError> {
    let len = input_length(input);
    if len > 0 && len < min {
        return Err(FieldError::TooShort(min));
    }
    if len > max {
        return Err(FieldError::TooLong(max));
    }
    Ok(())
}

fn check_max_length(input: &str, max: usize) -> Result<(), FieldError> {
    if input_length(input) > max {
        return Err(FieldError::TooLong(max));
    }
    Ok(())
}

fn parse_royalties(input: &str) -> Option<Decimal> {
    if input.trim().is_empty() {
        return Some(Decimal::ZERO);
    }
    parse_decimal(input)
}

/// Validate one collection form field
pub fn validate_input(field: CollectionField, input: &str) -> Result<(), FieldError> {
    match field {
        CollectionField::CollectionName => check_length(input, 2, 50),
        CollectionField::Description => check_length(input, 2, 300),
        CollectionField::DiscordUrl => {
            check_max_length(input, URL_MAX_LEN)?;
            if !input.starts_with(DISCORD_PREFIX) {
                return Err(FieldError::InvalidUrlPrefix(DISCORD_PREFIX));
            }
            Ok(())
        }
        CollectionField::TelegramUrl => {
            check_max_length(input, URL_MAX_LEN)?;
            if !input.starts_with(TELEGRAM_PREFIX) {
                return Err(FieldError::InvalidUrlPrefix(TELEGRAM_PREFIX));
            }
            Ok(())
        }
        CollectionField::WebsiteUrl => {
            check_length(input, 2, URL_MAX_LEN)?;
            if !WEBSITE_REGEX.is_match(input) {
                return Err(FieldError::InvalidUrlPrefix("http:// or https://"));
            }
            Ok(())
        }
        CollectionField::TwitterHandle => {
            check_length(input, 2, 15)?;
            if !input.is_empty() && !TWITTER_REGEX.is_match(input) {
                return Err(FieldError::InvalidHandle);
            }
            Ok(())
        }
        CollectionField::InstagramHandle => {
            check_length(input, 2, 30)?;
            if !input.is_empty() && !INSTAGRAM_REGEX.is_match(input) {
                return Err(FieldError::InvalidHandle);
            }
            Ok(())
        }
        CollectionField::Royalties => match parse_royalties(input) {
            Some(value) if value >= Decimal::ZERO && value <= Decimal::from(MAX_ROYALTIES) => Ok(()),
            _ => Err(FieldError::InvalidAmount),
        },
    }
}

/// Royalties left blank, zero or non-numeric when editing ends become "0"
pub fn normalize_royalties(input: &str) -> Option<String> {
    match parse_decimal(input) {
        Some(value) if !value.is_zero() => None,
        _ => Some("0".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(field: CollectionField, input: &str) -> String {
        validate_input(field, input)
            .err()
            .map(|e| e.to_string())
            .unwrap_or_default()
    }

    #[test]
    fn test_collection_name() {
        assert_eq!(message(CollectionField::CollectionName, "B"), "Minimum of 2 characters");
        assert_eq!(message(CollectionField::CollectionName, &"b".repeat(51)), "Maximum of 50 characters");
        assert_eq!(message(CollectionField::CollectionName, "The Bear Market"), "");
        assert_eq!(message(CollectionField::CollectionName, ""), "");
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // One emoji is a surrogate pair
        assert_eq!(message(CollectionField::CollectionName, "\u{1F43B}"), "");
        assert_eq!(message(CollectionField::CollectionName, "\u{e9}"), "Minimum of 2 characters");
        assert_eq!(
            message(CollectionField::CollectionName, &"\u{1F43B}".repeat(26)),
            "Maximum of 50 characters"
        );
    }

    #[test]
    fn test_description_limit() {
        assert_eq!(message(CollectionField::Description, &"x".repeat(300)), "");
        assert_eq!(message(CollectionField::Description, &"x".repeat(301)), "Maximum of 300 characters");
    }

    #[test]
    fn test_social_urls() {
        assert_eq!(message(CollectionField::DiscordUrl, "https://discord.gg/bears"), "");
        assert_eq!(
            message(CollectionField::DiscordUrl, "https://discord.com/bears"),
            "Invalid URL, it should begin with https://discord.gg/"
        );
        assert_eq!(
            message(CollectionField::TelegramUrl, "t.me/bears"),
            "Invalid URL, it should begin with https://t.me/"
        );
        assert_eq!(
            message(CollectionField::TelegramUrl, &format!("https://t.me/{}", "a".repeat(250))),
            "Maximum of 253 characters"
        );
        assert_eq!(message(CollectionField::WebsiteUrl, "http://thebear.market"), "");
        assert_eq!(
            message(CollectionField::WebsiteUrl, "thebear.market"),
            "Invalid URL, it should begin with http:// or https://"
        );
    }

    #[test]
    fn test_handles() {
        assert_eq!(message(CollectionField::TwitterHandle, "zilswap"), "");
        assert_eq!(message(CollectionField::TwitterHandle, "z"), "Minimum of 2 characters");
        assert_eq!(
            message(CollectionField::TwitterHandle, "zil-swap"),
            "Must only contain alphanumeric or underscore characters"
        );
        assert_eq!(message(CollectionField::TwitterHandle, &"a".repeat(16)), "Maximum of 15 characters");
        assert_eq!(message(CollectionField::InstagramHandle, "bear.market_"), "");
        assert_eq!(message(CollectionField::InstagramHandle, &"a".repeat(31)), "Maximum of 30 characters");
    }

    #[test]
    fn test_royalties() {
        assert_eq!(message(CollectionField::Royalties, "2.5"), "");
        assert_eq!(message(CollectionField::Royalties, "8"), "");
        assert_eq!(message(CollectionField::Royalties, "8.01"), "Invalid amount");
        assert_eq!(message(CollectionField::Royalties, "-1"), "Invalid amount");
        assert_eq!(message(CollectionField::Royalties, "abc"), "Invalid amount");
    }

    #[test]
    fn test_normalize_royalties() {
        assert_eq!(normalize_royalties("abc"), Some("0".to_string()));
        assert_eq!(normalize_royalties("0.00"), Some("0".to_string()));
        assert_eq!(normalize_royalties(""), Some("0".to_string()));
        assert_eq!(normalize_royalties("2.5"), None);
    }
}
