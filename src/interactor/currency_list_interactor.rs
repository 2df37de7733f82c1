use crate::chain::normalize_address;
use crate::entity::{
    CurrencyListType, SavedTokens, TokenInfo, TokenListContext, TokenListOptions, TokenSelection,
};
use crate::interactor::search_interactor::matches_search;
use log::debug;
use std::cmp::Ordering;
use std::collections::HashSet;

pub trait CurrencyListInteractor: Send + Sync {
    fn select_tokens(
        &self,
        tokens: &[TokenInfo],
        list_type: CurrencyListType,
        options: &TokenListOptions,
        current: Option<&TokenInfo>,
    ) -> TokenSelection;

    fn matches_search(
        &self,
        token: &TokenInfo,
        query: &str,
        saved: &SavedTokens,
        options: &TokenListOptions,
    ) -> bool;
}

pub struct CurrencyListInteractorImpl {
    context: TokenListContext,
}

impl CurrencyListInteractorImpl {
    pub fn new(context: TokenListContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &TokenListContext {
        &self.context
    }
}

impl CurrencyListInteractor for CurrencyListInteractorImpl {
    fn select_tokens(
        &self,
        tokens: &[TokenInfo],
        list_type: CurrencyListType,
        options: &TokenListOptions,
        current: Option<&TokenInfo>,
    ) -> TokenSelection {
        select_tokens(tokens, list_type, options, &self.context, current)
    }

    fn matches_search(
        &self,
        token: &TokenInfo,
        query: &str,
        saved: &SavedTokens,
        options: &TokenListOptions,
    ) -> bool {
        matches_search(token, query, saved, options)
    }
}

/// Filter, rank and validate the current selection for one dialog render.
///
/// The category filter runs first, then the fungible-only filter, then the
/// ranking sort, then the wrapped-native restriction. When `current` is not in
/// the result and the result is non-empty the top-ranked token is returned as
/// the replacement.
pub fn select_tokens(
    tokens: &[TokenInfo],
    list_type: CurrencyListType,
    options: &TokenListOptions,
    context: &TokenListContext,
    current: Option<&TokenInfo>,
) -> TokenSelection {
    let mut seen = HashSet::new();
    let bridge_destinations = bridge_destination_addresses(list_type, context);

    let mut selected: Vec<TokenInfo> = tokens
        .iter()
        .filter(|t| seen.insert(t.address.clone()))
        .filter(|t| in_category(t, list_type, context, &bridge_destinations))
        .filter(|t| !(options.fungible_tokens_only && t.address == context.native_address))
        .cloned()
        .collect();

    selected.sort_by(|lhs, rhs| compare_tokens(lhs, rhs, options.rank_by_contribution));

    if options.wrapped_native_only {
        selected.retain(|t| t.is_native || t.is_wrapped_native);
    }

    let replace_selection = current.and_then(|current| {
        let still_listed = selected.iter().any(|t| t.address == current.address);
        if still_listed {
            None
        } else {
            selected.first().cloned()
        }
    });

    if let Some(replacement) = &replace_selection {
        debug!(
            "Selected token dropped out of {} list, falling back to {}",
            list_type, replacement.symbol
        );
    }

    debug!(
        "Selected {} of {} tokens for {} list",
        selected.len(),
        tokens.len(),
        list_type
    );

    TokenSelection {
        tokens: selected,
        replace_selection,
    }
}

fn bridge_destination_addresses(
    list_type: CurrencyListType,
    context: &TokenListContext,
) -> HashSet<String> {
    if list_type != CurrencyListType::BridgeZil {
        return HashSet::new();
    }

    context
        .bridge_tokens
        .zil
        .iter()
        .filter_map(|b| normalize_address(&b.token_address))
        .collect()
}

fn in_category(
    token: &TokenInfo,
    list_type: CurrencyListType,
    context: &TokenListContext,
    bridge_destinations: &HashSet<String>,
) -> bool {
    let native_chain = token.blockchain.is_native_chain();
    match list_type {
        CurrencyListType::Zil => native_chain,
        CurrencyListType::ArkZil => {
            native_chain
                && context
                    .exchange_denoms
                    .as_ref()
                    .map(|denoms| denoms.contains(&token.address))
                    .unwrap_or(false)
        }
        CurrencyListType::BridgeEth => !native_chain,
        CurrencyListType::BridgeZil => {
            native_chain
                && normalize_address(&token.address)
                    .map(|address| bridge_destinations.contains(&address))
                    .unwrap_or(false)
        }
        CurrencyListType::All => true,
    }
}

fn is_primary_native(token: &TokenInfo) -> bool {
    token.is_native && !token.is_wrapped_native
}

/// Native first, then the ranking amount descending, then symbol ascending
pub fn compare_tokens(lhs: &TokenInfo, rhs: &TokenInfo, rank_by_contribution: bool) -> Ordering {
    match (is_primary_native(lhs), is_primary_native(rhs)) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }

    let difference = if rank_by_contribution {
        rhs.contribution_or_zero().cmp(&lhs.contribution_or_zero())
    } else {
        rhs.balance_or_zero().cmp(&lhs.balance_or_zero())
    };

    difference.then_with(|| lhs.symbol.cmp(&rhs.symbol))
}
