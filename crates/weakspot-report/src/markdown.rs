//! Markdown review-sheet generation.
//!
//! The printable counterpart of the weak-spots review view: every
//! needs-review item with its full explanation, grouped by exam domain.

use weakspot_core::review::{domain_counts, ReviewEntry};

/// Render a markdown review sheet from already-collected entries.
///
/// Entries are expected in collector order (domain, then lesson); the sheet
/// groups them under one heading per domain.
pub fn review_sheet(entries: &[ReviewEntry]) -> String {
    let mut md = String::new();

    md.push_str("# Weak spots review\n\n");

    if entries.is_empty() {
        md.push_str("Nothing to review. Mark items while studying to build this list.\n");
        return md;
    }

    md.push_str(&format!("{} item(s) to review\n", entries.len()));

    let counts = domain_counts(entries);
    let mut current_domain = None;

    for entry in entries {
        if current_domain != Some(entry.domain) {
            current_domain = Some(entry.domain);
            let count = counts.get(&entry.domain).copied().unwrap_or(0);
            md.push_str(&format!("\n## Domain {} ({count})\n", entry.domain));
        }

        md.push_str(&format!(
            "\n### {} — {}, section {}\n\n",
            entry.id.lesson,
            entry.lesson_title,
            entry.id.section + 1
        ));
        if let Some(title) = &entry.section_title {
            md.push_str(&format!("*{title}*\n\n"));
        }
        md.push_str(&format!("- **Mistake:** {}\n", entry.mistake.mistake));
        if let Some(why) = &entry.mistake.why_wrong {
            md.push_str(&format!("- **Why this is wrong:** {why}\n"));
        }
        if let Some(correct) = &entry.mistake.correct {
            md.push_str(&format!("- **Correct understanding:** {correct}\n"));
        }
    }

    md
}
