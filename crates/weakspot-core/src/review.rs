//! Cross-lesson review collection.
//!
//! Reconstructs full mistake detail for every needs-review ID by resolving
//! it against the in-memory content tree. Stored IDs whose content has been
//! edited or removed since the status was recorded are expected drift, not
//! errors: they are dropped from the output. The collection owns no state
//! and can be recomputed at any time.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::content::{Lesson, Mistake};
use crate::id::ItemId;

/// A fully resolved needs-review item, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewEntry {
    pub id: ItemId,
    pub lesson_title: String,
    pub section_title: Option<String>,
    /// Carried from the lesson for display grouping.
    pub domain: u32,
    pub mistake: Mistake,
}

/// Resolve every needs-review ID against `lessons`.
///
/// Output is sorted by `(domain ascending, lesson ID lexicographic)`; the
/// sort is stable, so items within a lesson keep their stored order.
pub fn collect_needs_review<'a, I>(ids: I, lessons: &[Lesson]) -> Vec<ReviewEntry>
where
    I: IntoIterator<Item = &'a ItemId>,
{
    let mut entries = Vec::new();

    for id in ids {
        let Some(lesson) = lessons.iter().find(|l| l.id == id.lesson) else {
            tracing::debug!("dropping {id}: lesson no longer present");
            continue;
        };
        let Some(section) = lesson.sections().get(id.section as usize) else {
            tracing::debug!("dropping {id}: section no longer present");
            continue;
        };
        let Some(mistake) = section.mistakes().get(id.mistake as usize) else {
            tracing::debug!("dropping {id}: mistake no longer present");
            continue;
        };

        entries.push(ReviewEntry {
            id: id.clone(),
            lesson_title: lesson.title.clone(),
            section_title: section.title.clone(),
            domain: lesson.domain,
            mistake: mistake.clone(),
        });
    }

    entries.sort_by(|a, b| {
        a.domain
            .cmp(&b.domain)
            .then_with(|| a.id.lesson.cmp(&b.id.lesson))
    });
    entries
}

/// Number of review entries per domain, in domain order.
pub fn domain_counts(entries: &[ReviewEntry]) -> BTreeMap<u32, usize> {
    let mut counts = BTreeMap::new();
    for entry in entries {
        *counts.entry(entry.domain).or_insert(0) += 1;
    }
    counts
}

/// Keep only the entries belonging to `domain`.
pub fn filter_domain(entries: Vec<ReviewEntry>, domain: u32) -> Vec<ReviewEntry> {
    entries.into_iter().filter(|e| e.domain == domain).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lessons() -> Vec<Lesson> {
        let make = |id: &str, domain: u32, mistakes: &[&str]| -> Lesson {
            let mistakes_json: Vec<String> = mistakes
                .iter()
                .map(|m| format!(r#"{{ "mistake": "{m}" }}"#))
                .collect();
            serde_json::from_str(&format!(
                r#"{{
                    "id": "{id}",
                    "title": "Lesson {id}",
                    "domain": {domain},
                    "sections": [
                        {{ "title": "S0",
                           "memory_hooks": {{ "common_mistakes": [{}] }} }}
                    ]
                }}"#,
                mistakes_json.join(",")
            ))
            .unwrap()
        };

        vec![
            make("D2-LESSON-004", 2, &["worm", "trojan"]),
            make("D1-LESSON-001", 1, &["deterrent"]),
        ]
    }

    fn ids(raw: &[&str]) -> Vec<ItemId> {
        raw.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn resolves_and_sorts_by_domain_then_lesson() {
        let stored = ids(&["D2-LESSON-004-0-1", "D1-LESSON-001-0-0"]);
        let entries = collect_needs_review(&stored, &lessons());

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].domain, 1);
        assert_eq!(entries[0].mistake.mistake, "deterrent");
        assert_eq!(entries[1].domain, 2);
        assert_eq!(entries[1].mistake.mistake, "trojan");
    }

    #[test]
    fn missing_lesson_section_or_mistake_is_dropped() {
        let stored = ids(&[
            "GONE-LESSON-0-0",     // lesson removed
            "D1-LESSON-001-9-0",   // section out of range
            "D1-LESSON-001-0-9",   // mistake out of range
            "D1-LESSON-001-0-0",   // still valid
        ]);
        let entries = collect_needs_review(&stored, &lessons());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, ItemId::new("D1-LESSON-001", 0, 0));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(collect_needs_review(&[], &lessons()).is_empty());
    }

    #[test]
    fn domain_counts_and_filter() {
        let stored = ids(&[
            "D2-LESSON-004-0-0",
            "D2-LESSON-004-0-1",
            "D1-LESSON-001-0-0",
        ]);
        let entries = collect_needs_review(&stored, &lessons());

        let counts = domain_counts(&entries);
        assert_eq!(counts.get(&1), Some(&1));
        assert_eq!(counts.get(&2), Some(&2));

        let only_d2 = filter_domain(entries, 2);
        assert_eq!(only_d2.len(), 2);
        assert!(only_d2.iter().all(|e| e.domain == 2));
    }
}
