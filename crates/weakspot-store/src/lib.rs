//! weakspot-store — the persisted status store and its storage backends.
//!
//! `StatusStore` owns the two persisted ID sets and speaks to storage
//! through the `StatusBackend` port defined in `weakspot-core`. Two
//! backends ship here: a file-based one for real use and an in-memory one
//! for tests and ephemeral sessions.

pub mod file;
pub mod memory;
pub mod store;

pub use file::FileBackend;
pub use memory::MemoryBackend;
pub use store::{NoopObserver, StatusStore, StoreObserver};
