//! Storage layer for omniwriter
//!
//! Generation records live in a remote PostgREST table when it is reachable
//! and in a capped local JSON slot otherwise. `PersistenceGateway` hides the
//! difference from callers.

mod error;
mod gateway;
mod local;
mod remote;
#[cfg(test)]
mod tests;
pub mod traits;

pub use error::StorageError;
pub use gateway::{PersistenceGateway, Persisted};
pub use local::LocalRecordStore;
pub use remote::RemoteRecordStore;
pub use traits::RecordStore;
