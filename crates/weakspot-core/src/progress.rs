//! Per-scope progress aggregation.
//!
//! Pure reductions over the two stored ID sets; no ordering or tie-break
//! logic. Totals come from the current content tree, while counts come from
//! stored state — content edited after a status was recorded can therefore
//! leave counts above the total, which the arithmetic here tolerates.

use serde::{Deserialize, Serialize};

use crate::content::Lesson;
use crate::id::{ItemId, Scope};

/// Counts for one `(lesson, section)` scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeProgress {
    /// Items marked mastered.
    pub mastered: usize,
    /// Items marked needs-review.
    pub needs_review: usize,
    /// Items with no recorded status.
    pub untested: usize,
    /// Rounded percentage of the scope's items that are mastered.
    pub percent_mastered: u32,
}

/// Compute progress for a single scope.
///
/// `untested` saturates at zero and `percent_mastered` is 0 when
/// `total_items` is 0.
pub fn scope_progress<'a, M, N>(
    mastered: M,
    needs_review: N,
    scope: &Scope,
    total_items: usize,
) -> ScopeProgress
where
    M: IntoIterator<Item = &'a ItemId>,
    N: IntoIterator<Item = &'a ItemId>,
{
    let mastered = mastered.into_iter().filter(|id| scope.contains(id)).count();
    let needs_review = needs_review
        .into_iter()
        .filter(|id| scope.contains(id))
        .count();

    let percent_mastered = if total_items == 0 {
        0
    } else {
        ((mastered as f64 / total_items as f64) * 100.0).round() as u32
    };

    ScopeProgress {
        mastered,
        needs_review,
        untested: total_items.saturating_sub(mastered + needs_review),
        percent_mastered,
    }
}

/// One row of the per-section progress overview.
#[derive(Debug, Clone, Serialize)]
pub struct ScopeRow {
    pub scope: Scope,
    pub lesson_title: String,
    pub section_title: Option<String>,
    pub total: usize,
    pub progress: ScopeProgress,
}

/// Build a progress row for every section that carries mistakes.
pub fn lesson_overview<'a, M, N>(lessons: &[Lesson], mastered: M, needs_review: N) -> Vec<ScopeRow>
where
    M: IntoIterator<Item = &'a ItemId>,
    N: IntoIterator<Item = &'a ItemId>,
{
    let mastered: Vec<&ItemId> = mastered.into_iter().collect();
    let needs_review: Vec<&ItemId> = needs_review.into_iter().collect();

    let mut rows = Vec::new();
    for lesson in lessons {
        for (section_idx, section) in lesson.sections().iter().enumerate() {
            let total = section.mistakes().len();
            if total == 0 {
                continue;
            }
            let scope = Scope::new(lesson.id.clone(), section_idx as u32);
            let progress = scope_progress(
                mastered.iter().copied(),
                needs_review.iter().copied(),
                &scope,
                total,
            );
            rows.push(ScopeRow {
                scope,
                lesson_title: lesson.title.clone(),
                section_title: section.title.clone(),
                total,
                progress,
            });
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<ItemId> {
        raw.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn counts_and_percentage() {
        // Two weak, one mastered, three items total in the scope.
        let mastered = ids(&["D1-LESSON-001-0-2"]);
        let weak = ids(&["D1-LESSON-001-0-0", "D1-LESSON-001-0-1"]);
        let scope = Scope::new("D1-LESSON-001", 0);

        let p = scope_progress(&mastered, &weak, &scope, 3);
        assert_eq!(p.mastered, 1);
        assert_eq!(p.needs_review, 2);
        assert_eq!(p.untested, 0);
        assert_eq!(p.percent_mastered, 33);
    }

    #[test]
    fn partition_invariant() {
        let mastered = ids(&["L-0-0", "L-0-1"]);
        let weak = ids(&["L-0-2"]);
        let scope = Scope::new("L", 0);

        let p = scope_progress(&mastered, &weak, &scope, 5);
        assert_eq!(p.mastered + p.needs_review + p.untested, 5);
        assert_eq!(p.percent_mastered, 40);
    }

    #[test]
    fn zero_total_yields_all_zero() {
        let p = scope_progress(&[], &[], &Scope::new("L", 0), 0);
        assert_eq!(
            p,
            ScopeProgress {
                mastered: 0,
                needs_review: 0,
                untested: 0,
                percent_mastered: 0
            }
        );
    }

    #[test]
    fn other_scopes_do_not_leak_in() {
        let mastered = ids(&["L-1-0", "L-10-0", "M-1-0"]);
        let p = scope_progress(&mastered, &[], &Scope::new("L", 1), 2);
        assert_eq!(p.mastered, 1);
        assert_eq!(p.untested, 1);
    }

    #[test]
    fn untested_saturates_after_content_shrinks() {
        // Five statuses recorded, but the section now has three items.
        let mastered = ids(&["L-0-0", "L-0-1", "L-0-2", "L-0-3", "L-0-4"]);
        let p = scope_progress(&mastered, &[], &Scope::new("L", 0), 3);
        assert_eq!(p.mastered, 5);
        assert_eq!(p.untested, 0);
    }

    #[test]
    fn overview_skips_sections_without_mistakes() {
        let lesson: Lesson = serde_json::from_str(
            r#"{
                "id": "D1-LESSON-001",
                "title": "Controls",
                "domain": 1,
                "sections": [
                    { "title": "Intro" },
                    { "title": "Categories",
                      "memory_hooks": { "common_mistakes": [ { "mistake": "a" }, { "mistake": "b" } ] } }
                ]
            }"#,
        )
        .unwrap();

        let mastered = ids(&["D1-LESSON-001-1-0"]);
        let rows = lesson_overview(&[lesson], &mastered, &[]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].scope.section, 1);
        assert_eq!(rows[0].total, 2);
        assert_eq!(rows[0].progress.mastered, 1);
        assert_eq!(rows[0].progress.percent_mastered, 50);
    }
}
