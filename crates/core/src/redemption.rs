//! Redemption state machine over the pass catalog.
//!
//! Each pass is either `Available` or `Redeemed`. The only transitions are:
//!
//! - `Available -> Redeemed` via [`RedemptionController::redeem`]
//! - every pass back to `Available` via [`RedemptionController::reset_all`]
//!
//! Every mutation is persisted through a [`PersistentStore`] under
//! [`REDEMPTION_STATE_KEY`]. Persistence is best effort; the in-memory state
//! is authoritative for the running session.

use crate::catalog::Catalog;
use crate::clock::{Clock, SystemClock};
use crate::error::PassError;
use crate::store::{PersistentStore, REDEMPTION_STATE_KEY, StorageBackend};
use crate::types::{Pass, PassStatus, RedemptionRecord, RedemptionState};

/// Owns the redemption state for one catalog.
#[derive(Debug)]
pub struct RedemptionController<B, C = SystemClock> {
    catalog: Catalog,
    state: RedemptionState,
    store: PersistentStore<B>,
    clock: C,
}

impl<B: StorageBackend> RedemptionController<B> {
    /// Load the controller's state from `backend`, stamping redemptions with
    /// the system clock.
    pub fn load(catalog: Catalog, backend: B) -> Self {
        Self::with_clock(catalog, backend, SystemClock)
    }
}

impl<B: StorageBackend, C: Clock> RedemptionController<B, C> {
    /// Load the controller's state from `backend` using `clock` for
    /// redemption timestamps.
    ///
    /// Missing or unreadable state starts every pass as available. Records
    /// for IDs that are not in `catalog` are dropped.
    pub fn with_clock(catalog: Catalog, backend: B, clock: C) -> Self {
        let store = PersistentStore::new(backend);
        let mut state = store.load(REDEMPTION_STATE_KEY, RedemptionState::new());

        let before = state.len();
        state.redeemed.retain(|id, _| catalog.contains(id.as_str()));
        let dropped = before - state.len();
        if dropped > 0 {
            tracing::warn!(dropped, "Ignoring stored redemptions for unknown passes");
        }

        tracing::debug!(redeemed = state.len(), "Loaded redemption state");

        Self {
            catalog,
            state,
            store,
            clock,
        }
    }

    /// Mark pass `id` as redeemed now.
    ///
    /// Redeeming a pass that is already redeemed changes nothing and returns
    /// the original record.
    ///
    /// # Errors
    ///
    /// Returns [`PassError::UnknownPass`] if `id` is not in the catalog.
    pub fn redeem(&mut self, id: &str) -> Result<RedemptionRecord, PassError> {
        let Some(pass) = self.catalog.get(id) else {
            tracing::warn!(pass_id = %id, "Rejected redemption of unknown pass");
            return Err(PassError::UnknownPass(id.to_owned()));
        };

        if let Some(existing) = self.state.get(id) {
            tracing::debug!(pass_id = %id, date = existing.date, "Pass already redeemed");
            return Ok(*existing);
        }

        let record = RedemptionRecord::new(self.clock.now_millis());
        self.state.redeemed.insert(pass.id.clone(), record);
        self.persist();

        tracing::info!(pass_id = %id, date = record.date, "Pass redeemed");
        Ok(record)
    }

    /// Return every pass to available.
    pub fn reset_all(&mut self) {
        self.state = RedemptionState::new();
        self.persist();
        tracing::info!("All passes reset");
    }

    /// Whether pass `id` has been redeemed.
    #[must_use]
    pub fn is_redeemed(&self, id: &str) -> bool {
        self.state.contains(id)
    }

    /// Whether every pass in the catalog has been redeemed.
    #[must_use]
    pub fn all_redeemed(&self) -> bool {
        self.catalog.ids().all(|id| self.state.contains(id.as_str()))
    }

    /// The redemption record for `id`, if redeemed.
    #[must_use]
    pub fn record(&self, id: &str) -> Option<&RedemptionRecord> {
        self.state.get(id)
    }

    /// Status of pass `id`, or `None` if it is not in the catalog.
    #[must_use]
    pub fn status(&self, id: &str) -> Option<PassStatus> {
        self.catalog.contains(id).then(|| self.status_of(id))
    }

    /// Every pass with its status, in catalog order.
    pub fn passes(&self) -> impl Iterator<Item = (&Pass, PassStatus)> {
        self.catalog
            .iter()
            .map(|pass| (pass, self.status_of(pass.id.as_str())))
    }

    /// Number of redeemed passes.
    #[must_use]
    pub fn redeemed_count(&self) -> usize {
        self.state.len()
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> &RedemptionState {
        &self.state
    }

    /// The catalog this controller tracks.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn status_of(&self, id: &str) -> PassStatus {
        if self.state.contains(id) {
            PassStatus::Redeemed
        } else {
            PassStatus::Available
        }
    }

    fn persist(&self) {
        self.store.save(REDEMPTION_STATE_KEY, &self.state);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::Cell;
    use std::sync::Arc;

    use super::*;
    use crate::clock::FixedClock;
    use crate::confirm::{AutoConfirm, AutoDecline, Gated, REDEEM_PROMPT, RESET_PROMPT, gated};
    use crate::store::{MemoryBackend, StorageError};

    const IDS: [&str; 5] = [
        "argument-immunity",
        "food-treat",
        "movie-night",
        "chore-pass",
        "visit-home",
    ];

    /// Clock that advances by one second on every read.
    struct TickingClock(Cell<i64>);

    impl Clock for TickingClock {
        fn now_millis(&self) -> i64 {
            let now = self.0.get();
            self.0.set(now + 1_000);
            now
        }
    }

    struct BrokenBackend;

    impl StorageBackend for BrokenBackend {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("read blocked".to_owned()))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("write blocked".to_owned()))
        }
    }

    fn controller() -> RedemptionController<MemoryBackend, FixedClock> {
        RedemptionController::with_clock(
            Catalog::default(),
            MemoryBackend::new(),
            FixedClock(1_700_000_000_000),
        )
    }

    #[test]
    fn test_initial_state_all_available() {
        let c = controller();
        for id in IDS {
            assert!(!c.is_redeemed(id));
            assert_eq!(c.status(id), Some(PassStatus::Available));
        }
        assert!(!c.all_redeemed());
        assert_eq!(c.redeemed_count(), 0);
    }

    #[test]
    fn test_redeem_records_clock_time() {
        let mut c = controller();
        let record = c.redeem("food-treat").unwrap();
        assert_eq!(record.date, 1_700_000_000_000);
        assert!(c.is_redeemed("food-treat"));
        assert_eq!(c.record("food-treat"), Some(&record));
    }

    #[test]
    fn test_redeem_is_idempotent() {
        let mut c = RedemptionController::with_clock(
            Catalog::default(),
            MemoryBackend::new(),
            TickingClock(Cell::new(10)),
        );
        let first = c.redeem("movie-night").unwrap();
        let second = c.redeem("movie-night").unwrap();
        assert_eq!(first, second);
        assert_eq!(c.record("movie-night").unwrap().date, 10);
    }

    #[test]
    fn test_redeem_unknown_pass_rejected() {
        let mut c = controller();
        let err = c.redeem("nap-pass").unwrap_err();
        assert_eq!(err, PassError::UnknownPass("nap-pass".to_owned()));
        assert!(err.is_invalid_argument());
        assert_eq!(c.redeemed_count(), 0);
        assert!(c.status("nap-pass").is_none());
    }

    #[test]
    fn test_redeem_unknown_pass_does_not_persist() {
        let backend = Arc::new(MemoryBackend::new());
        let mut c = RedemptionController::load(Catalog::default(), Arc::clone(&backend));
        c.redeem("nap-pass").unwrap_err();
        assert!(backend.is_empty());
    }

    #[test]
    fn test_all_redeemed_requires_every_pass() {
        let mut c = controller();
        let (last, rest) = IDS.split_last().unwrap();
        for id in rest {
            c.redeem(id).unwrap();
        }
        assert!(!c.all_redeemed());
        c.redeem(last).unwrap();
        assert!(c.all_redeemed());
    }

    #[test]
    fn test_reset_all() {
        let mut c = controller();
        for id in IDS {
            c.redeem(id).unwrap();
        }
        c.reset_all();
        for id in IDS {
            assert!(!c.is_redeemed(id));
        }
        assert!(!c.all_redeemed());
    }

    #[test]
    fn test_state_survives_reload() {
        let backend = Arc::new(MemoryBackend::new());
        let mut first = RedemptionController::with_clock(
            Catalog::default(),
            Arc::clone(&backend),
            TickingClock(Cell::new(500)),
        );
        first.redeem("chore-pass").unwrap();
        first.redeem("visit-home").unwrap();

        let second = RedemptionController::load(Catalog::default(), backend);
        assert_eq!(second.state(), first.state());
        assert_eq!(second.record("chore-pass").unwrap().date, 500);
        assert_eq!(second.record("visit-home").unwrap().date, 1_500);
    }

    #[test]
    fn test_reset_is_persisted() {
        let backend = Arc::new(MemoryBackend::new());
        let mut first = RedemptionController::load(Catalog::default(), Arc::clone(&backend));
        first.redeem("food-treat").unwrap();
        first.reset_all();

        assert_eq!(
            backend.get_item(REDEMPTION_STATE_KEY).unwrap().as_deref(),
            Some(r#"{"redeemed":{}}"#)
        );
    }

    #[test]
    fn test_broken_storage_starts_fresh_and_keeps_memory_state() {
        let mut c =
            RedemptionController::with_clock(Catalog::default(), BrokenBackend, FixedClock(1));
        assert_eq!(c.redeemed_count(), 0);
        c.redeem("food-treat").unwrap();
        assert!(c.is_redeemed("food-treat"));
        c.reset_all();
        assert!(!c.is_redeemed("food-treat"));
    }

    #[test]
    fn test_unknown_stored_ids_are_dropped() {
        let backend = MemoryBackend::new();
        backend
            .set_item(
                REDEMPTION_STATE_KEY,
                r#"{"redeemed":{"food-treat":{"date":5},"ghost":{"date":6}}}"#,
            )
            .unwrap();
        let c = RedemptionController::load(Catalog::default(), backend);
        assert!(c.is_redeemed("food-treat"));
        assert!(!c.is_redeemed("ghost"));
        assert_eq!(c.redeemed_count(), 1);
    }

    #[test]
    fn test_malformed_stored_record_keeps_the_rest() {
        let backend = MemoryBackend::new();
        backend
            .set_item(
                REDEMPTION_STATE_KEY,
                r#"{"redeemed":{"food-treat":{"date":5},"movie-night":null}}"#,
            )
            .unwrap();
        let mut c = RedemptionController::with_clock(
            Catalog::default(),
            &backend,
            FixedClock(1_700_000_000_000),
        );
        assert_eq!(c.record("food-treat"), Some(&RedemptionRecord::new(5)));
        assert!(!c.is_redeemed("movie-night"));

        // Redeeming another pass must not overwrite the surviving record
        c.redeem("movie-night").unwrap();
        let reloaded = RedemptionController::load(Catalog::default(), &backend);
        assert_eq!(reloaded.record("food-treat"), Some(&RedemptionRecord::new(5)));
        assert!(reloaded.is_redeemed("movie-night"));
    }

    #[test]
    fn test_passes_in_catalog_order_with_status() {
        let mut c = controller();
        c.redeem("movie-night").unwrap();
        let listed: Vec<(&str, PassStatus)> =
            c.passes().map(|(p, s)| (p.id.as_str(), s)).collect();
        assert_eq!(
            listed,
            [
                ("argument-immunity", PassStatus::Available),
                ("food-treat", PassStatus::Available),
                ("movie-night", PassStatus::Redeemed),
                ("chore-pass", PassStatus::Available),
                ("visit-home", PassStatus::Available),
            ]
        );
    }

    #[test]
    fn test_declined_redeem_leaves_state_unchanged() {
        let mut c = controller();
        let outcome = gated(&mut AutoDecline, REDEEM_PROMPT, || c.redeem("food-treat")).unwrap();
        assert_eq!(outcome, Gated::Declined);
        assert!(!c.is_redeemed("food-treat"));
    }

    #[test]
    fn test_confirmed_reset() {
        let mut c = controller();
        c.redeem("food-treat").unwrap();
        let outcome = gated(&mut AutoConfirm, RESET_PROMPT, || {
            c.reset_all();
            Ok::<_, PassError>(())
        })
        .unwrap();
        assert!(outcome.is_committed());
        assert!(!c.is_redeemed("food-treat"));
    }
}
