use crate::entity::{SavedTokens, TokenInfo};
use crate::utils::format_amount;
use anyhow::{anyhow, Result};
use std::io::Write;
use std::sync::Mutex;

pub trait CurrencyDialogView: Send + Sync {
    fn display_tokens(
        &self,
        tokens: &[&TokenInfo],
        saved: &SavedTokens,
        show_contribution: bool,
    ) -> Result<()>;
    fn display_empty(&self, label: &str) -> Result<()>;
    fn select_currency(&self, token: &TokenInfo) -> Result<()>;
}

/// Plain text rendering of the currency dialog
pub struct ConsoleCurrencyView<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> ConsoleCurrencyView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> Result<W> {
        self.out
            .into_inner()
            .map_err(|_| anyhow!("Console view writer was poisoned"))
    }

    fn write_line(&self, line: &str) -> Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| anyhow!("Console view writer was poisoned"))?;
        writeln!(out, "{}", line)?;
        Ok(())
    }
}

fn format_row(token: &TokenInfo, saved: &SavedTokens, show_contribution: bool) -> String {
    let amount = if show_contribution {
        token.contribution_or_zero()
    } else {
        token.balance_or_zero()
    };

    let marker = if token.registered {
        ""
    } else if saved.contains(&token.address) {
        "  [saved]"
    } else {
        "  [unregistered]"
    };

    format!(
        "{:<10} {:<28} {:>24}{}",
        token.symbol,
        token.display_name(),
        format_amount(amount, token.decimals),
        marker
    )
}

impl<W: Write + Send> CurrencyDialogView for ConsoleCurrencyView<W> {
    fn display_tokens(
        &self,
        tokens: &[&TokenInfo],
        saved: &SavedTokens,
        show_contribution: bool,
    ) -> Result<()> {
        let amount_header = if show_contribution {
            "Contribution"
        } else {
            "Balance"
        };
        self.write_line(&format!(
            "{:<10} {:<28} {:>24}",
            "Symbol", "Name", amount_header
        ))?;

        for token in tokens {
            self.write_line(&format_row(token, saved, show_contribution))?;
        }
        Ok(())
    }

    fn display_empty(&self, label: &str) -> Result<()> {
        self.write_line(label)
    }

    fn select_currency(&self, token: &TokenInfo) -> Result<()> {
        self.write_line(&format!("Selected {} ({})", token.symbol, token.address))
    }
}
