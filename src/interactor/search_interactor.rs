use crate::entity::{SavedTokens, TokenInfo, TokenListOptions};

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Search box predicate for the currency dialog.
///
/// Unregistered tokens the user has not saved stay hidden until the exact
/// address is typed; their names and symbols are never searched.
pub fn matches_search(
    token: &TokenInfo,
    query: &str,
    saved: &SavedTokens,
    options: &TokenListOptions,
) -> bool {
    let search_term = normalize(query);

    if token.is_native && options.exclude_native_asset {
        return false;
    }
    if !token.is_native
        && token.pool.is_none()
        && options.exclude_tokens_without_pool
        && !token.is_wrapped_native
    {
        return false;
    }

    let trusted = token.registered || saved.contains(&token.address);
    let address_match = normalize(&token.address) == search_term;

    if !trusted {
        return !search_term.is_empty() && address_match;
    }

    address_match
        || token
            .name
            .as_ref()
            .map(|name| name.to_lowercase().contains(&search_term))
            .unwrap_or(false)
        || token.symbol.to_lowercase().contains(&search_term)
}
