//! Subcommand implementations.

pub mod clear;
pub mod diff;
pub mod export;
pub mod init;
pub mod mark;
pub mod progress;
pub mod review;
pub mod status;
pub mod validate;

use anyhow::Result;

use weakspot_core::id::ItemId;
use weakspot_store::{FileBackend, StatusStore};

use crate::config::WeakspotConfig;

/// Open the status store over the configured state directory.
fn open_store(config: &WeakspotConfig) -> StatusStore {
    StatusStore::open(Box::new(FileBackend::new(&config.state_dir)))
}

/// Parse a user-supplied item ID with a friendly error.
fn parse_item_id(raw: &str) -> Result<ItemId> {
    raw.parse()
        .map_err(|e| anyhow::anyhow!("invalid item ID {raw:?}: {e}"))
}

/// One shared warning for best-effort persistence.
fn warn_if_not_persisted(store: &StatusStore) {
    if store.persist_failures() > 0 {
        eprintln!("warning: state could not be persisted; this change will not survive the session");
    }
}
