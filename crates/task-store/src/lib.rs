pub mod atomic;
pub mod error;
pub mod query;
pub mod service;
pub mod store;

pub use error::StoreError;
pub use service::Service;
pub use store::Store;
