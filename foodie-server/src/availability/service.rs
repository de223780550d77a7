//! Evaluation pass and its process-wide entry point

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;

use super::AvailabilityError;
use super::clock::Clock;
use super::evaluator::{self, Candidate};
use super::slots::{MinuteOfDay, SlotTag};
use super::store::AvailabilityStore;

/// Outcome of one evaluation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PassReport {
    /// Non-overridden items loaded from the store
    pub considered: usize,
    pub written: usize,
    /// Unrecognized time slot
    pub skipped: usize,
    /// Per-item write failures
    pub failed: usize,
    /// Minute-of-day the pass evaluated at
    pub minute: u16,
}

/// One full sweep: load, evaluate at `now`, write every decision
///
/// Writes are unconditional and best-effort; a failed write is logged and
/// counted, and the sweep moves on. Only a failed read aborts the pass,
/// in which case nothing is written.
pub async fn run_pass<S>(store: &S, now: MinuteOfDay) -> Result<PassReport, AvailabilityError>
where
    S: AvailabilityStore + ?Sized,
{
    let candidates: Vec<Candidate> = store.load_candidates().await?;
    let considered = candidates
        .iter()
        .filter(|c| !c.is_overridden())
        .count();
    let skipped = candidates
        .iter()
        .filter(|c| !c.is_overridden() && matches!(c.slot, SlotTag::Unrecognized(_)))
        .count();

    let decisions = evaluator::evaluate(now, &candidates);

    let mut written = 0;
    let mut failed = 0;
    for decision in decisions {
        match store
            .write_availability(decision.id, decision.is_available)
            .await
        {
            Ok(()) => written += 1,
            Err(e) => {
                failed += 1;
                tracing::warn!(food_id = decision.id, error = %e, "Failed to persist availability");
            }
        }
    }

    Ok(PassReport {
        considered,
        written,
        skipped,
        failed,
        minute: now.get(),
    })
}

/// Shared by the scheduler and the on-demand endpoint
///
/// The pass lock keeps two passes from ever running at once. Override
/// writes from the admin console do not take it.
pub struct AvailabilityService {
    store: Arc<dyn AvailabilityStore>,
    clock: Arc<dyn Clock>,
    pass_lock: Mutex<()>,
}

impl AvailabilityService {
    pub fn new(store: Arc<dyn AvailabilityStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            pass_lock: Mutex::new(()),
        }
    }

    /// Run one pass at the current wall-clock minute
    pub async fn run_pass(&self) -> Result<PassReport, AvailabilityError> {
        let _guard = self.pass_lock.lock().await;
        // Read the clock after acquiring the lock so a queued pass uses
        // the time it actually runs at
        let now = self.clock.now_minute();
        self.logged(run_pass(self.store.as_ref(), now).await)
    }

    /// Run one pass at an explicit minute
    pub async fn run_pass_at(&self, now: MinuteOfDay) -> Result<PassReport, AvailabilityError> {
        let _guard = self.pass_lock.lock().await;
        self.logged(run_pass(self.store.as_ref(), now).await)
    }

    fn logged(
        &self,
        result: Result<PassReport, AvailabilityError>,
    ) -> Result<PassReport, AvailabilityError> {
        match &result {
            Ok(report) if report.failed > 0 => {
                tracing::warn!(
                    considered = report.considered,
                    written = report.written,
                    skipped = report.skipped,
                    failed = report.failed,
                    minute = report.minute,
                    "Availability pass finished with write failures"
                );
            }
            Ok(report) => {
                tracing::debug!(
                    considered = report.considered,
                    written = report.written,
                    skipped = report.skipped,
                    minute = report.minute,
                    "Availability pass finished"
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "Availability pass aborted");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::clock::FixedClock;
    use async_trait::async_trait;
    use parking_lot::Mutex as SyncMutex;
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Default)]
    struct MemoryStore {
        rows: SyncMutex<Vec<(i64, String, Option<bool>, bool)>>,
        fail_read: AtomicBool,
        fail_write_ids: SyncMutex<HashSet<i64>>,
        writes: SyncMutex<Vec<(i64, bool)>>,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
        read_delay: SyncMutex<Option<Duration>>,
    }

    impl MemoryStore {
        fn with_rows(rows: &[(i64, &str, Option<bool>, bool)]) -> Self {
            let store = Self::default();
            *store.rows.lock() = rows
                .iter()
                .map(|(id, slot, ov, avail)| (*id, slot.to_string(), *ov, *avail))
                .collect();
            store
        }

        fn flags(&self) -> HashMap<i64, bool> {
            self.rows.lock().iter().map(|r| (r.0, r.3)).collect()
        }
    }

    #[async_trait]
    impl AvailabilityStore for MemoryStore {
        async fn load_candidates(&self) -> Result<Vec<Candidate>, AvailabilityError> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            let delay = *self.read_delay.lock();
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            if self.fail_read.load(Ordering::SeqCst) {
                return Err(AvailabilityError::Read("connection refused".into()));
            }
            Ok(self
                .rows
                .lock()
                .iter()
                .filter(|r| !r.2.unwrap_or(false))
                .map(|r| Candidate::new(r.0, &r.1, r.2))
                .collect())
        }

        async fn write_availability(&self, id: i64, is_available: bool) -> Result<(), AvailabilityError> {
            if self.fail_write_ids.lock().contains(&id) {
                return Err(AvailabilityError::Write {
                    id,
                    reason: "disk full".into(),
                });
            }
            self.writes.lock().push((id, is_available));
            if let Some(row) = self.rows.lock().iter_mut().find(|r| r.0 == id) {
                row.3 = is_available;
            }
            Ok(())
        }
    }

    fn m(minute: u16) -> MinuteOfDay {
        MinuteOfDay::new(minute).unwrap()
    }

    #[tokio::test]
    async fn test_pass_writes_every_evaluated_item_even_if_unchanged() {
        let store = MemoryStore::with_rows(&[
            (1, "lunch", Some(false), true),
            (2, "dinner", None, false),
            (3, "breakfast", Some(true), true),
        ]);
        let report = run_pass(&store, m(800)).await.unwrap();

        assert_eq!(
            report,
            PassReport {
                considered: 2,
                written: 2,
                skipped: 0,
                failed: 0,
                minute: 800
            }
        );
        // item 1 was already true and still gets written
        assert_eq!(*store.writes.lock(), vec![(1, true), (2, false)]);
        assert_eq!(store.flags()[&3], true, "overridden row untouched");
    }

    #[tokio::test]
    async fn test_unrecognized_slot_counted_as_skipped() {
        let store = MemoryStore::with_rows(&[
            (1, "midnight-snack", None, true),
            (2, "beverage", None, false),
        ]);
        let report = run_pass(&store, m(10)).await.unwrap();
        assert_eq!(report.considered, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.written, 1);
        assert_eq!(store.flags()[&1], true, "unrecognized keeps its stored flag");
        assert_eq!(store.flags()[&2], true);
    }

    #[tokio::test]
    async fn test_write_failure_does_not_abort_pass() {
        let store = MemoryStore::with_rows(&[
            (1, "lunch", None, false),
            (2, "lunch", None, false),
            (3, "lunch", None, false),
        ]);
        store.fail_write_ids.lock().insert(2);

        let report = run_pass(&store, m(800)).await.unwrap();
        assert_eq!(report.written, 2);
        assert_eq!(report.failed, 1);
        let flags = store.flags();
        assert!(flags[&1] && flags[&3]);
        assert!(!flags[&2]);
    }

    #[tokio::test]
    async fn test_read_failure_aborts_without_writes() {
        let store = MemoryStore::with_rows(&[(1, "lunch", None, false)]);
        store.fail_read.store(true, Ordering::SeqCst);

        let err = run_pass(&store, m(800)).await.unwrap_err();
        assert!(matches!(err, AvailabilityError::Read(_)));
        assert!(store.writes.lock().is_empty());

        // Next pass recovers
        store.fail_read.store(false, Ordering::SeqCst);
        let report = run_pass(&store, m(800)).await.unwrap();
        assert_eq!(report.written, 1);
    }

    #[tokio::test]
    async fn test_service_uses_clock_and_serializes_passes() {
        let store = Arc::new(MemoryStore::with_rows(&[(1, "breakfast", None, false)]));
        *store.read_delay.lock() = Some(Duration::from_millis(20));
        let clock = Arc::new(FixedClock::new(m(400)));
        let service = Arc::new(AvailabilityService::new(store.clone(), clock.clone()));

        let mut handles = Vec::new();
        for _ in 0..4 {
            let service = service.clone();
            handles.push(tokio::spawn(async move { service.run_pass().await }));
        }
        for handle in handles {
            let report = handle.await.unwrap().unwrap();
            assert_eq!(report.minute, 400);
        }
        assert_eq!(store.max_in_flight.load(Ordering::SeqCst), 1);
        assert_eq!(store.flags()[&1], true);

        clock.set(m(1000));
        service.run_pass().await.unwrap();
        assert_eq!(store.flags()[&1], false);
    }

    #[tokio::test]
    async fn test_run_pass_at_matches_scheduled_result() {
        let rows = [(1, "evening", None, false), (2, "dinner", None, false)];
        let a = Arc::new(MemoryStore::with_rows(&rows));
        let b = MemoryStore::with_rows(&rows);
        let service = AvailabilityService::new(a.clone(), Arc::new(FixedClock::new(m(1140))));

        let scheduled = service.run_pass().await.unwrap();
        let on_demand = run_pass(&b, m(1140)).await.unwrap();
        assert_eq!(scheduled, on_demand);
        assert_eq!(a.flags(), b.flags());
        assert!(a.flags().values().all(|v| *v));
    }
}
