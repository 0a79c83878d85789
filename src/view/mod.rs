pub mod pool_view;

pub use pool_view::{PoolView, TextPoolView};
