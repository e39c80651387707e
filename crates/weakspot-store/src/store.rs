//! The status store.
//!
//! Exclusive owner of the two persisted ID sets. All operations are
//! synchronous and run to completion on the caller's thread; persistence is
//! best-effort — a failed write is logged and counted, the in-memory
//! transition stands, and durability is simply lost for the session.

use std::collections::BTreeSet;

use weakspot_core::error::BackendError;
use weakspot_core::id::{ItemId, Scope};
use weakspot_core::progress::{scope_progress, ScopeProgress};
use weakspot_core::status::{Status, StatusBackend, MASTERED_KEY, NEEDS_REVIEW_KEY};

// ---------------------------------------------------------------------------
// Observer
// ---------------------------------------------------------------------------

/// Synchronous mutation notifications.
///
/// Observers are invoked after the in-memory transition and its persistence
/// attempt, on the mutating call itself — a badge can recount immediately
/// instead of polling. Observers must not call back into the store.
pub trait StoreObserver {
    fn on_status_changed(&self, id: &ItemId, from: Status, to: Status);
    fn on_review_cleared(&self, removed: usize);
}

/// No-op observer.
pub struct NoopObserver;

impl StoreObserver for NoopObserver {
    fn on_status_changed(&self, _: &ItemId, _: Status, _: Status) {}
    fn on_review_cleared(&self, _: usize) {}
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Persisted mastery state for every self-assessed item.
///
/// Invariant: an ID is in at most one of the two sets at any time.
pub struct StatusStore {
    mastered: BTreeSet<ItemId>,
    needs_review: BTreeSet<ItemId>,
    backend: Box<dyn StatusBackend>,
    observers: Vec<Box<dyn StoreObserver>>,
    persist_failures: u32,
}

impl StatusStore {
    /// Open a store over `backend`, loading both persisted sets.
    ///
    /// A corrupt payload or unreadable backend degrades to an empty set:
    /// tracking state resets rather than failing to open.
    pub fn open(backend: Box<dyn StatusBackend>) -> Self {
        let mastered = load_set(backend.as_ref(), MASTERED_KEY);
        let needs_review = load_set(backend.as_ref(), NEEDS_REVIEW_KEY);
        Self {
            mastered,
            needs_review,
            backend,
            observers: Vec::new(),
            persist_failures: 0,
        }
    }

    /// Register an observer for subsequent mutations.
    pub fn subscribe(&mut self, observer: Box<dyn StoreObserver>) {
        self.observers.push(observer);
    }

    /// Current status of `id`. The mastered set wins if an ID somehow
    /// appears in both (it cannot through this API).
    pub fn status(&self, id: &ItemId) -> Status {
        if self.mastered.contains(id) {
            Status::Mastered
        } else if self.needs_review.contains(id) {
            Status::NeedsReview
        } else {
            Status::Unset
        }
    }

    /// Mark `id` as mastered, removing any needs-review mark. Idempotent:
    /// re-marking neither persists nor notifies.
    pub fn mark_mastered(&mut self, id: &ItemId) -> Status {
        let from = self.status(id);
        if from == Status::Mastered {
            return Status::Mastered;
        }
        self.needs_review.remove(id);
        self.mastered.insert(id.clone());
        self.persist_both();
        self.notify_changed(id, from, Status::Mastered);
        Status::Mastered
    }

    /// Mark `id` as needs-review, removing any mastered mark. Idempotent.
    pub fn mark_needs_review(&mut self, id: &ItemId) -> Status {
        let from = self.status(id);
        if from == Status::NeedsReview {
            return Status::NeedsReview;
        }
        self.mastered.remove(id);
        self.needs_review.insert(id.clone());
        self.persist_both();
        self.notify_changed(id, from, Status::NeedsReview);
        Status::NeedsReview
    }

    /// Remove `id` from both sets. Idempotent; always yields `Unset`.
    pub fn reset(&mut self, id: &ItemId) -> Status {
        let from = self.status(id);
        if from == Status::Unset {
            return Status::Unset;
        }
        self.mastered.remove(id);
        self.needs_review.remove(id);
        self.persist_both();
        self.notify_changed(id, from, Status::Unset);
        Status::Unset
    }

    /// Empty the needs-review set, leaving the mastered set untouched.
    /// Returns the number of IDs removed. Irreversible; confirmation is a
    /// caller concern.
    pub fn clear_needs_review(&mut self) -> usize {
        let removed = self.needs_review.len();
        self.needs_review.clear();
        if let Err(e) = self.backend.delete(NEEDS_REVIEW_KEY) {
            self.record_failure(NEEDS_REVIEW_KEY, &e);
        }
        if removed > 0 {
            for observer in &self.observers {
                observer.on_review_cleared(removed);
            }
        }
        removed
    }

    /// IDs currently marked mastered, in ID order.
    pub fn mastered_ids(&self) -> impl Iterator<Item = &ItemId> {
        self.mastered.iter()
    }

    /// IDs currently marked needs-review, in ID order.
    pub fn needs_review_ids(&self) -> impl Iterator<Item = &ItemId> {
        self.needs_review.iter()
    }

    pub fn mastered_count(&self) -> usize {
        self.mastered.len()
    }

    /// The navigation-badge count.
    pub fn needs_review_count(&self) -> usize {
        self.needs_review.len()
    }

    /// Progress for one `(lesson, section)` scope.
    pub fn progress(&self, scope: &Scope, total_items: usize) -> ScopeProgress {
        scope_progress(&self.mastered, &self.needs_review, scope, total_items)
    }

    /// Number of persistence attempts that failed since opening. The
    /// in-memory state is still authoritative for the session when this is
    /// non-zero; it just will not survive a reload.
    pub fn persist_failures(&self) -> u32 {
        self.persist_failures
    }

    fn persist_both(&mut self) {
        let payloads = [
            (MASTERED_KEY, serde_json::to_string(&self.mastered)),
            (NEEDS_REVIEW_KEY, serde_json::to_string(&self.needs_review)),
        ];
        for (key, payload) in payloads {
            let result = payload
                .map_err(|e| BackendError::Unavailable(format!("encode failed: {e}")))
                .and_then(|p| self.backend.write(key, &p));
            if let Err(e) = result {
                self.record_failure(key, &e);
            }
        }
    }

    fn record_failure(&mut self, key: &str, error: &BackendError) {
        self.persist_failures += 1;
        tracing::warn!("failed to persist {key}: {error}");
    }

    fn notify_changed(&self, id: &ItemId, from: Status, to: Status) {
        for observer in &self.observers {
            observer.on_status_changed(id, from, to);
        }
    }
}

/// Load one persisted set, degrading to empty on any failure.
fn load_set(backend: &dyn StatusBackend, key: &str) -> BTreeSet<ItemId> {
    let payload = match backend.read(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => return BTreeSet::new(),
        Err(e) => {
            tracing::warn!("failed to read {key}, starting empty: {e}");
            return BTreeSet::new();
        }
    };

    let raw: Vec<String> = match serde_json::from_str(&payload) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!("corrupt payload under {key}, starting empty: {e}");
            return BTreeSet::new();
        }
    };

    raw.into_iter()
        .filter_map(|s| match s.parse::<ItemId>() {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::debug!("skipping malformed stored ID {s:?}: {e}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::memory::MemoryBackend;
    use weakspot_core::status::{MASTERED_KEY, NEEDS_REVIEW_KEY};

    fn id(s: &str) -> ItemId {
        s.parse().unwrap()
    }

    fn open_with_handle() -> (StatusStore, MemoryBackend) {
        let backend = MemoryBackend::new();
        let store = StatusStore::open(Box::new(backend.clone()));
        (store, backend)
    }

    #[test]
    fn mark_mastered_excludes_needs_review() {
        let (mut store, _) = open_with_handle();
        let item = id("D1-LESSON-001-0-0");

        store.mark_needs_review(&item);
        store.mark_mastered(&item);

        assert_eq!(store.status(&item), Status::Mastered);
        assert!(!store.needs_review_ids().any(|i| *i == item));
    }

    #[test]
    fn mark_needs_review_excludes_mastered() {
        let (mut store, _) = open_with_handle();
        let item = id("D1-LESSON-001-0-0");

        store.mark_mastered(&item);
        store.mark_needs_review(&item);

        assert_eq!(store.status(&item), Status::NeedsReview);
        assert!(!store.mastered_ids().any(|i| *i == item));
    }

    #[test]
    fn reset_always_yields_unset() {
        let (mut store, _) = open_with_handle();
        let item = id("D1-LESSON-001-0-0");

        assert_eq!(store.reset(&item), Status::Unset);

        store.mark_mastered(&item);
        store.reset(&item);
        assert_eq!(store.status(&item), Status::Unset);

        store.mark_needs_review(&item);
        store.reset(&item);
        assert_eq!(store.status(&item), Status::Unset);
    }

    #[test]
    fn double_mark_is_idempotent() {
        let (mut store, backend) = open_with_handle();
        let item = id("D1-LESSON-001-0-0");

        store.mark_mastered(&item);
        let writes_after_first = backend.write_count();
        store.mark_mastered(&item);

        assert_eq!(store.status(&item), Status::Mastered);
        assert_eq!(store.mastered_count(), 1);
        // The repeat neither re-persisted nor changed anything.
        assert_eq!(backend.write_count(), writes_after_first);
    }

    #[test]
    fn clear_needs_review_leaves_mastered_untouched() {
        let (mut store, backend) = open_with_handle();
        store.mark_needs_review(&id("L-0-0"));
        store.mark_needs_review(&id("L-0-1"));
        store.mark_mastered(&id("L-0-2"));

        assert_eq!(store.clear_needs_review(), 2);
        assert_eq!(store.needs_review_count(), 0);
        assert_eq!(store.mastered_count(), 1);
        assert!(backend.raw(NEEDS_REVIEW_KEY).is_none());
        assert!(backend.raw(MASTERED_KEY).is_some());
    }

    #[test]
    fn persisted_payload_is_a_bare_string_array() {
        let (mut store, backend) = open_with_handle();
        store.mark_needs_review(&id("D1-LESSON-001-0-1"));
        store.mark_needs_review(&id("D1-LESSON-001-0-0"));

        let payload = backend.raw(NEEDS_REVIEW_KEY).unwrap();
        let decoded: Vec<String> = serde_json::from_str(&payload).unwrap();
        assert_eq!(
            decoded,
            vec!["D1-LESSON-001-0-0", "D1-LESSON-001-0-1"]
        );
    }

    #[test]
    fn scenario_one_mastered_two_weak_of_three() {
        let (mut store, _) = open_with_handle();
        store.mark_needs_review(&id("D1-LESSON-001-0-0"));
        store.mark_needs_review(&id("D1-LESSON-001-0-1"));
        store.mark_mastered(&id("D1-LESSON-001-0-2"));

        let p = store.progress(&Scope::new("D1-LESSON-001", 0), 3);
        assert_eq!(p.mastered, 1);
        assert_eq!(p.needs_review, 2);
        assert_eq!(p.untested, 0);
        assert_eq!(p.percent_mastered, 33);
    }

    #[test]
    fn write_failure_does_not_block_the_transition() {
        let (mut store, backend) = open_with_handle();
        let item = id("D1-LESSON-001-0-0");
        backend.set_fail_writes(true);

        assert_eq!(store.mark_mastered(&item), Status::Mastered);
        assert_eq!(store.status(&item), Status::Mastered);
        assert!(store.persist_failures() > 0);

        // The lost write is not visible to a fresh session.
        let reopened = StatusStore::open(Box::new(backend.clone()));
        assert_eq!(reopened.status(&item), Status::Unset);
    }

    #[test]
    fn corrupt_payload_falls_back_to_empty() {
        let backend = MemoryBackend::new();
        backend.seed(MASTERED_KEY, "{ definitely not an array");
        backend.seed(NEEDS_REVIEW_KEY, "[\"D1-LESSON-001-0-0\"]");

        let store = StatusStore::open(Box::new(backend));
        assert_eq!(store.mastered_count(), 0);
        assert_eq!(store.needs_review_count(), 1);
    }

    #[test]
    fn malformed_stored_ids_are_skipped() {
        let backend = MemoryBackend::new();
        backend.seed(
            NEEDS_REVIEW_KEY,
            "[\"D1-LESSON-001-0-0\", \"garbage\", \"L--1-2\"]",
        );

        let store = StatusStore::open(Box::new(backend));
        assert_eq!(store.needs_review_count(), 1);
    }

    // Records every notification for assertion.
    struct Recorder {
        changes: Rc<RefCell<Vec<(ItemId, Status, Status)>>>,
        cleared: Rc<RefCell<Vec<usize>>>,
    }

    impl StoreObserver for Recorder {
        fn on_status_changed(&self, id: &ItemId, from: Status, to: Status) {
            self.changes.borrow_mut().push((id.clone(), from, to));
        }
        fn on_review_cleared(&self, removed: usize) {
            self.cleared.borrow_mut().push(removed);
        }
    }

    #[test]
    fn observers_see_changes_but_not_idempotent_repeats() {
        let (mut store, _) = open_with_handle();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let cleared = Rc::new(RefCell::new(Vec::new()));
        store.subscribe(Box::new(Recorder {
            changes: changes.clone(),
            cleared: cleared.clone(),
        }));

        let item = id("D1-LESSON-001-0-0");
        store.mark_needs_review(&item);
        store.mark_needs_review(&item); // repeat: no notification
        store.mark_mastered(&item);
        store.clear_needs_review(); // empty set: no notification
        store.mark_needs_review(&item);
        store.clear_needs_review();

        let changes = changes.borrow();
        assert_eq!(changes.len(), 3);
        assert_eq!(changes[0].1, Status::Unset);
        assert_eq!(changes[0].2, Status::NeedsReview);
        assert_eq!(changes[1].1, Status::NeedsReview);
        assert_eq!(changes[1].2, Status::Mastered);
        assert_eq!(*cleared.borrow(), vec![1]);
    }
}
