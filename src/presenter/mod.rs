pub mod collection_presenter;
pub mod currency_dialog_presenter;

pub use collection_presenter::CollectionFormPresenter;
pub use currency_dialog_presenter::{CurrencyDialogPresenter, EMPTY_STATE_LABEL};
