pub mod chain;
pub mod config;
pub mod di;
pub mod entity;
pub mod interactor;
pub mod presenter;
pub mod registry;
pub mod utils;
pub mod view;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export commonly used items
pub use chain::*;
pub use config::Config;
pub use di::*;
pub use entity::*;
pub use interactor::*;
pub use presenter::*;
pub use registry::*;
pub use utils::*;
pub use view::*;
