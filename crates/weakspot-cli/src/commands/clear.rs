//! The `weakspot clear-review` command.

use anyhow::Result;

use crate::config::WeakspotConfig;

pub fn execute(config: &WeakspotConfig, yes: bool) -> Result<()> {
    if !yes {
        anyhow::bail!("clearing the review list cannot be undone; re-run with --yes to confirm");
    }

    let mut store = super::open_store(config);
    let removed = store.clear_needs_review();
    println!("Cleared {removed} weak spot(s).");
    super::warn_if_not_persisted(&store);
    Ok(())
}
