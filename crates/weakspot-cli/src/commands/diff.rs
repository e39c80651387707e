//! The `weakspot diff` command.

use std::path::PathBuf;

use anyhow::Result;

use weakspot_report::ProgressSnapshot;

use crate::config::WeakspotConfig;

pub fn execute(config: &WeakspotConfig, baseline_path: PathBuf, format: &str) -> Result<()> {
    let baseline = ProgressSnapshot::load_json(&baseline_path)?;

    let store = super::open_store(config);
    let current = ProgressSnapshot::capture(store.mastered_ids(), store.needs_review_ids());

    let delta = current.compare(&baseline);

    match format {
        "markdown" | "md" => {
            println!("{}", delta.to_markdown());
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&delta)?);
        }
        _ => {
            // text format
            println!(
                "Since {}: {} newly mastered, {} new weak spots, {} resolved, {} unchanged",
                baseline.created_at,
                delta.newly_mastered.len(),
                delta.newly_weak.len(),
                delta.resolved.len(),
                delta.unchanged
            );

            if !delta.newly_mastered.is_empty() {
                println!("\nNewly mastered:");
                for id in &delta.newly_mastered {
                    println!("  {id}");
                }
            }

            if !delta.newly_weak.is_empty() {
                println!("\nNew weak spots:");
                for id in &delta.newly_weak {
                    println!("  {id}");
                }
            }

            if !delta.resolved.is_empty() {
                println!("\nResolved:");
                for id in &delta.resolved {
                    println!("  {id}");
                }
            }

            if !delta.has_changes() {
                println!("No changes.");
            }
        }
    }

    Ok(())
}
