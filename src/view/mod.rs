pub mod currency_view;

pub use currency_view::{ConsoleCurrencyView, CurrencyDialogView};
