//! The `weakspot status` command.

use anyhow::Result;

use crate::config::WeakspotConfig;

pub fn execute(config: &WeakspotConfig, id: &str) -> Result<()> {
    let item = super::parse_item_id(id)?;
    let store = super::open_store(config);
    println!("{item}: {}", store.status(&item));
    Ok(())
}
