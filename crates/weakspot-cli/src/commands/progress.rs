//! The `weakspot progress` command.

use anyhow::Result;

use weakspot_core::loader::load_content_dir;
use weakspot_core::progress::lesson_overview;

use crate::config::WeakspotConfig;

pub fn execute(
    config: &WeakspotConfig,
    lesson: Option<String>,
    section: Option<u32>,
    format: &str,
) -> Result<()> {
    let store = super::open_store(config);
    let lessons = load_content_dir(&config.content_dir)?;

    let mut rows = lesson_overview(&lessons, store.mastered_ids(), store.needs_review_ids());
    if let Some(lesson) = &lesson {
        rows.retain(|r| &r.scope.lesson == lesson);
    }
    if let Some(section) = section {
        rows.retain(|r| r.scope.section == section);
    }

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        _ => {
            if rows.is_empty() {
                println!("No tracked sections match.");
                return Ok(());
            }

            use comfy_table::{Cell, Table};

            let mut table = Table::new();
            table.set_header(vec![
                "Lesson", "Section", "Total", "Mastered", "Review", "Untested", "Mastered %",
            ]);
            for row in &rows {
                let section_label = match &row.section_title {
                    Some(title) => format!("{} ({title})", row.scope.section),
                    None => row.scope.section.to_string(),
                };
                table.add_row(vec![
                    Cell::new(&row.scope.lesson),
                    Cell::new(section_label),
                    Cell::new(row.total),
                    Cell::new(row.progress.mastered),
                    Cell::new(row.progress.needs_review),
                    Cell::new(row.progress.untested),
                    Cell::new(format!("{}%", row.progress.percent_mastered)),
                ]);
            }
            println!("{table}");

            println!(
                "\nOverall: {} mastered, {} to review",
                store.mastered_count(),
                store.needs_review_count()
            );
        }
    }

    Ok(())
}
