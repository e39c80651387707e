//! The `weakspot review` command.

use anyhow::Result;

use weakspot_core::loader::load_content_dir;
use weakspot_core::review::{collect_needs_review, domain_counts, filter_domain};
use weakspot_report::review_sheet;

use crate::config::WeakspotConfig;

pub fn execute(config: &WeakspotConfig, domain: Option<u32>, format: &str) -> Result<()> {
    let store = super::open_store(config);
    let lessons = load_content_dir(&config.content_dir)?;

    let mut entries = collect_needs_review(store.needs_review_ids(), &lessons);
    if let Some(d) = domain {
        entries = filter_domain(entries, d);
    }

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        "markdown" | "md" => {
            println!("{}", review_sheet(&entries));
        }
        _ => {
            // table format
            if entries.is_empty() {
                println!("Nothing to review.");
                return Ok(());
            }

            println!("{} item(s) to review", entries.len());
            let counts = domain_counts(&entries);
            let breakdown: Vec<String> = counts
                .iter()
                .map(|(domain, count)| format!("D{domain}: {count}"))
                .collect();
            println!("{}", breakdown.join("  "));
            println!();

            use comfy_table::{Cell, Table};

            let mut table = Table::new();
            table.set_header(vec!["Item", "Domain", "Lesson", "Mistake"]);
            for entry in &entries {
                table.add_row(vec![
                    Cell::new(&entry.id),
                    Cell::new(entry.domain),
                    Cell::new(&entry.lesson_title),
                    Cell::new(&entry.mistake.mistake),
                ]);
            }
            println!("{table}");
        }
    }

    Ok(())
}
