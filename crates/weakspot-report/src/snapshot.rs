//! Progress snapshots with JSON persistence and baseline comparison.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use weakspot_core::id::ItemId;

/// A point-in-time copy of the two tracked sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// When the snapshot was taken.
    pub created_at: DateTime<Utc>,
    /// IDs marked mastered, in ID order.
    pub mastered: Vec<ItemId>,
    /// IDs marked needs-review, in ID order.
    pub needs_review: Vec<ItemId>,
}

impl ProgressSnapshot {
    /// Capture a snapshot from the two ID sets.
    pub fn capture<'a, M, N>(mastered: M, needs_review: N) -> Self
    where
        M: IntoIterator<Item = &'a ItemId>,
        N: IntoIterator<Item = &'a ItemId>,
    {
        let mut mastered: Vec<ItemId> = mastered.into_iter().cloned().collect();
        let mut needs_review: Vec<ItemId> = needs_review.into_iter().cloned().collect();
        mastered.sort();
        needs_review.sort();

        Self {
            created_at: Utc::now(),
            mastered,
            needs_review,
        }
    }

    /// Save the snapshot as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize snapshot")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write snapshot to {}", path.display()))?;
        Ok(())
    }

    /// Load a snapshot from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot from {}", path.display()))?;
        let snapshot: ProgressSnapshot =
            serde_json::from_str(&content).context("failed to parse snapshot JSON")?;
        Ok(snapshot)
    }

    /// Compare this snapshot against an earlier baseline.
    pub fn compare(&self, baseline: &ProgressSnapshot) -> ProgressDelta {
        let base_mastered: BTreeSet<&ItemId> = baseline.mastered.iter().collect();
        let base_weak: BTreeSet<&ItemId> = baseline.needs_review.iter().collect();
        let cur_mastered: BTreeSet<&ItemId> = self.mastered.iter().collect();
        let cur_weak: BTreeSet<&ItemId> = self.needs_review.iter().collect();

        let newly_mastered = cur_mastered
            .difference(&base_mastered)
            .map(|id| (*id).clone())
            .collect();
        let newly_weak = cur_weak
            .difference(&base_weak)
            .map(|id| (*id).clone())
            .collect();
        let resolved = base_weak
            .difference(&cur_weak)
            .map(|id| (*id).clone())
            .collect();
        let unchanged = cur_mastered.intersection(&base_mastered).count()
            + cur_weak.intersection(&base_weak).count();

        ProgressDelta {
            newly_mastered,
            newly_weak,
            resolved,
            unchanged,
        }
    }
}

/// Result of comparing two snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressDelta {
    /// IDs mastered since the baseline.
    pub newly_mastered: Vec<ItemId>,
    /// IDs that became weak spots since the baseline.
    pub newly_weak: Vec<ItemId>,
    /// Baseline weak spots no longer marked needs-review (mastered or
    /// reset).
    pub resolved: Vec<ItemId>,
    /// IDs whose membership did not move.
    pub unchanged: usize,
}

impl ProgressDelta {
    /// Format the delta as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**Summary:** {} newly mastered, {} new weak spots, {} resolved, {} unchanged\n",
            self.newly_mastered.len(),
            self.newly_weak.len(),
            self.resolved.len(),
            self.unchanged
        ));

        let section = |md: &mut String, title: &str, ids: &[ItemId]| {
            if ids.is_empty() {
                return;
            }
            md.push_str(&format!("\n### {title}\n\n"));
            for id in ids {
                md.push_str(&format!("- {id}\n"));
            }
        };

        section(&mut md, "Newly mastered", &self.newly_mastered);
        section(&mut md, "New weak spots", &self.newly_weak);
        section(&mut md, "Resolved", &self.resolved);

        md
    }

    /// Returns true if anything moved since the baseline.
    pub fn has_changes(&self) -> bool {
        !self.newly_mastered.is_empty()
            || !self.newly_weak.is_empty()
            || !self.resolved.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<ItemId> {
        raw.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn capture_sorts_ids() {
        let unsorted = ids(&["L-1-1", "L-0-0"]);
        let snapshot = ProgressSnapshot::capture(&unsorted, &[]);
        assert_eq!(snapshot.mastered, ids(&["L-0-0", "L-1-1"]));
    }

    #[test]
    fn compare_identical_snapshots() {
        let a = ProgressSnapshot::capture(&ids(&["L-0-0"]), &ids(&["L-0-1"]));
        let delta = a.compare(&a.clone());
        assert!(!delta.has_changes());
        assert_eq!(delta.unchanged, 2);
    }

    #[test]
    fn compare_tracks_transitions() {
        let baseline = ProgressSnapshot::capture(&ids(&["L-0-0"]), &ids(&["L-0-1", "L-0-2"]));
        // L-0-1 got mastered, L-0-3 became weak, L-0-2 stayed weak.
        let current =
            ProgressSnapshot::capture(&ids(&["L-0-0", "L-0-1"]), &ids(&["L-0-2", "L-0-3"]));

        let delta = current.compare(&baseline);
        assert_eq!(delta.newly_mastered, ids(&["L-0-1"]));
        assert_eq!(delta.newly_weak, ids(&["L-0-3"]));
        assert_eq!(delta.resolved, ids(&["L-0-1"]));
        assert_eq!(delta.unchanged, 2);
    }

    #[test]
    fn json_round_trip() {
        let snapshot = ProgressSnapshot::capture(&ids(&["L-0-0"]), &ids(&["L-0-1"]));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshots/progress.json");

        snapshot.save_json(&path).unwrap();
        let loaded = ProgressSnapshot::load_json(&path).unwrap();

        assert_eq!(loaded.mastered, snapshot.mastered);
        assert_eq!(loaded.needs_review, snapshot.needs_review);
        assert_eq!(loaded.created_at, snapshot.created_at);
    }

    #[test]
    fn markdown_output() {
        let baseline = ProgressSnapshot::capture(&[], &ids(&["L-0-1"]));
        let current = ProgressSnapshot::capture(&ids(&["L-0-1"]), &[]);

        let md = current.compare(&baseline).to_markdown();
        assert!(md.contains("1 newly mastered"));
        assert!(md.contains("Resolved"));
        assert!(md.contains("L-0-1"));
    }
}
