pub mod pool_interactor;

pub use pool_interactor::{PoolInteractor, PoolInteractorImpl};
