//! The `weakspot validate` command.

use std::path::PathBuf;

use anyhow::Result;

use weakspot_core::loader;

use crate::config::WeakspotConfig;

pub fn execute(config: &WeakspotConfig, content: Option<PathBuf>) -> Result<()> {
    let path = content.unwrap_or_else(|| config.content_dir.clone());

    let lessons = if path.is_dir() {
        loader::load_content_dir(&path)?
    } else {
        vec![loader::load_lesson(&path)?]
    };

    println!(
        "{} lesson(s), {} trackable mistake(s)",
        lessons.len(),
        lessons
            .iter()
            .flat_map(|l| l.sections())
            .map(|s| s.mistakes().len())
            .sum::<usize>()
    );

    let warnings = loader::validate_lessons(&lessons);
    for w in &warnings {
        let prefix = w
            .lesson_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("All lessons valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
