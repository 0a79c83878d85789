pub mod pool_presenter;

pub use pool_presenter::{PoolPresenter, PoolPresenterImpl};
