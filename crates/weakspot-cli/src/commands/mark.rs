//! The `weakspot mark` command.

use anyhow::Result;

use weakspot_core::status::Status;

use crate::config::WeakspotConfig;

pub fn execute(config: &WeakspotConfig, id: &str, status: &str) -> Result<()> {
    let item = super::parse_item_id(id)?;
    let target: Status = status
        .parse()
        .map_err(|e: String| anyhow::anyhow!("{e} (expected mastered, review, or unset)"))?;

    let mut store = super::open_store(config);
    let new_status = match target {
        Status::Mastered => store.mark_mastered(&item),
        Status::NeedsReview => store.mark_needs_review(&item),
        Status::Unset => store.reset(&item),
    };

    println!("{item}: {new_status}");
    println!("{} item(s) to review", store.needs_review_count());
    super::warn_if_not_persisted(&store);
    Ok(())
}
