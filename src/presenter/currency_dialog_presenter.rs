use crate::entity::{CurrencyListType, SavedTokens, TokenInfo, TokenListOptions, TokenSelection};
use crate::interactor::currency_list_interactor::CurrencyListInteractor;
use crate::interactor::saved_token_interactor::toggle_saved_token;
use crate::view::currency_view::CurrencyDialogView;
use anyhow::Result;
use log::debug;
use std::sync::Arc;

pub const EMPTY_STATE_LABEL: &str = "No token found.";

/// State behind one open "Select Token" dialog.
///
/// Every change recomputes the visible list from the last token snapshot and
/// re-renders it. Nothing is drawn before the first snapshot arrives.
pub struct CurrencyDialogPresenter<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
    list_type: CurrencyListType,
    options: TokenListOptions,
    search: String,
    saved: SavedTokens,
    selection: TokenSelection,
    has_snapshot: bool,
}

impl<I, V> CurrencyDialogPresenter<I, V>
where
    I: CurrencyListInteractor,
    V: CurrencyDialogView,
{
    pub fn new(
        interactor: Arc<I>,
        view: Arc<V>,
        list_type: CurrencyListType,
        options: TokenListOptions,
        saved: SavedTokens,
    ) -> Self {
        Self {
            interactor,
            view,
            list_type,
            options,
            search: String::new(),
            saved,
            selection: TokenSelection::default(),
            has_snapshot: false,
        }
    }

    /// Start with text already in the search box, nothing is rendered
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.to_string();
        self
    }

    /// Recompute the list for a new token snapshot.
    ///
    /// Returns the replacement when `current` is no longer listed; the view is
    /// told about it before the list is drawn.
    pub fn refresh(
        &mut self,
        tokens: &[TokenInfo],
        current: Option<&TokenInfo>,
    ) -> Result<Option<TokenInfo>> {
        self.selection =
            self.interactor
                .select_tokens(tokens, self.list_type, &self.options, current);
        self.has_snapshot = true;

        if let Some(replacement) = &self.selection.replace_selection {
            self.view.select_currency(replacement)?;
        }

        self.render()?;
        Ok(self.selection.replace_selection.clone())
    }

    pub fn set_search(&mut self, search: &str) -> Result<()> {
        self.search = search.to_string();
        self.render()
    }

    pub fn clear_search(&mut self) -> Result<()> {
        self.set_search("")
    }

    /// Add or remove a token from the user's list, clearing the search on add
    pub fn toggle_user_token(&mut self, token: &TokenInfo) -> Result<&SavedTokens> {
        if !self.saved.contains(&token.address) {
            self.search.clear();
        }
        self.saved = toggle_saved_token(&token.address, &self.saved);
        debug!("User token list now has {} entries", self.saved.len());

        self.render()?;
        Ok(&self.saved)
    }

    pub fn select_currency(&self, token: &TokenInfo) -> Result<()> {
        self.view.select_currency(token)
    }

    pub fn visible_tokens(&self) -> Vec<&TokenInfo> {
        self.selection
            .tokens
            .iter()
            .filter(|t| {
                self.interactor
                    .matches_search(t, &self.search, &self.saved, &self.options)
            })
            .collect()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn saved_tokens(&self) -> &SavedTokens {
        &self.saved
    }

    fn render(&self) -> Result<()> {
        if !self.has_snapshot {
            return Ok(());
        }

        let visible = self.visible_tokens();
        if visible.is_empty() {
            return self.view.display_empty(EMPTY_STATE_LABEL);
        }
        self.view
            .display_tokens(&visible, &self.saved, self.options.rank_by_contribution)
    }
}
