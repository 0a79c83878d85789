pub mod api;
pub mod chain;
pub mod classifier;
pub mod config;
pub mod di;
pub mod entity;
pub mod interactor;
pub mod presenter;
pub mod router;
pub mod utils;
pub mod view;

// Re-export commonly used items
pub use api::{build_router, AppState};
pub use chain::{TransactionSubmitter, WalletSession};
pub use classifier::IntentClassifier;
pub use config::AppConfig;
pub use di::*;
pub use entity::*;
pub use interactor::*;
pub use presenter::*;
pub use router::{ActionRegistry, ActionSpec};
pub use utils::*;
pub use view::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
