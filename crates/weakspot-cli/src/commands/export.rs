//! The `weakspot export` command.

use std::path::PathBuf;

use anyhow::Result;

use weakspot_report::ProgressSnapshot;

use crate::config::WeakspotConfig;

pub fn execute(config: &WeakspotConfig, output: PathBuf) -> Result<()> {
    let store = super::open_store(config);
    let snapshot = ProgressSnapshot::capture(store.mastered_ids(), store.needs_review_ids());
    snapshot.save_json(&output)?;

    println!(
        "Wrote snapshot to {} ({} mastered, {} to review)",
        output.display(),
        snapshot.mastered.len(),
        snapshot.needs_review.len()
    );
    Ok(())
}
