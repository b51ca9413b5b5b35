use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::core::error::Result;
use crate::features::asteroids::models::Asteroid;
use crate::features::auth::model::Member;
use crate::features::watchlist::dtos::WatchStateDto;
use crate::features::watchlist::models::WatchlistEntry;
use crate::modules::records::store::{self, ListOptions, RecordStore};
use crate::shared::constants::{COLLECTION_ASTEROIDS, COLLECTION_WATCHLIST, DEFAULT_PAGE_SIZE};

/// Fetch every watchlist entry belonging to the given user key.
///
/// The backend has no per-user index this service relies on; membership is a
/// linear scan over the retrieved set, which is fine at personal-watchlist
/// scale.
pub(crate) async fn fetch_user_entries(
    store: &dyn RecordStore,
    user_key: &str,
) -> Result<Vec<WatchlistEntry>> {
    let mut entries = Vec::new();
    let mut skip = 0;

    loop {
        let page: crate::shared::types::Page<WatchlistEntry> = store::get_all_as(
            store,
            COLLECTION_WATCHLIST,
            ListOptions::page(DEFAULT_PAGE_SIZE, skip),
        )
        .await?;

        let empty = page.items.is_empty();
        entries.extend(page.items.into_iter().filter(|e| e.belongs_to(user_key)));

        if !page.has_next || empty {
            break;
        }
        skip = page.next_skip;
    }

    Ok(entries)
}

/// Per-key watch state: the optimistic watched flag plus the transient
/// updating flag, and an operation lock serializing toggles for the key.
#[derive(Default)]
struct WatchSlot {
    op: Mutex<()>,
    watched: AtomicBool,
    updating: AtomicBool,
}

/// Reconciles per-user watch membership against the watchlist collection.
///
/// Toggles are optimistic: the local watched flag flips before the backend
/// write resolves and is rolled back if the write fails. Toggles for the same
/// `(userId, asteroidId)` key are serialized through a per-key lock, so a
/// second toggle waits instead of racing the first — rapid double-toggles
/// cannot interleave their create/delete calls.
pub struct WatchReconciler {
    store: Arc<dyn RecordStore>,
    slots: Mutex<HashMap<(String, String), Arc<WatchSlot>>>,
}

impl WatchReconciler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            slots: Mutex::new(HashMap::new()),
        }
    }

    async fn slot(&self, user_key: &str, asteroid_id: &str) -> Arc<WatchSlot> {
        let mut slots = self.slots.lock().await;
        slots
            .entry((user_key.to_string(), asteroid_id.to_string()))
            .or_default()
            .clone()
    }

    /// Check watch membership against the backend and refresh the local flag.
    pub async fn status(&self, user_key: &str, asteroid_id: &str) -> Result<WatchStateDto> {
        let slot = self.slot(user_key, asteroid_id).await;
        let _op = slot.op.lock().await;

        let entries = fetch_user_entries(self.store.as_ref(), user_key).await?;
        let watched = entries.iter().any(|e| e.matches(user_key, asteroid_id));
        slot.watched.store(watched, Ordering::SeqCst);

        Ok(WatchStateDto {
            watched,
            updating: false,
        })
    }

    /// Local watch state for the key without a backend round trip.
    pub async fn local_state(&self, user_key: &str, asteroid_id: &str) -> WatchStateDto {
        let slot = self.slot(user_key, asteroid_id).await;
        WatchStateDto {
            watched: slot.watched.load(Ordering::SeqCst),
            updating: slot.updating.load(Ordering::SeqCst),
        }
    }

    /// Add the asteroid to the member's watchlist.
    ///
    /// The watched flag flips optimistically; a failed create rolls it back
    /// and propagates the error. Watching an already-watched asteroid is a
    /// no-op rather than a duplicate entry.
    pub async fn watch(
        &self,
        member: &Member,
        asteroid_id: &str,
        notes: Option<String>,
    ) -> Result<WatchStateDto> {
        // Fetch first so the denormalized name and risk level are current.
        let asteroid: Asteroid =
            store::get_by_id_as(self.store.as_ref(), COLLECTION_ASTEROIDS, asteroid_id).await?;

        let user_key = member.user_key();
        let slot = self.slot(user_key, asteroid_id).await;
        let _op = slot.op.lock().await;

        slot.updating.store(true, Ordering::SeqCst);
        let previous = slot.watched.swap(true, Ordering::SeqCst);

        let result = self.create_entry(user_key, &asteroid, notes).await;
        slot.updating.store(false, Ordering::SeqCst);

        match result {
            Ok(()) => Ok(WatchStateDto {
                watched: true,
                updating: false,
            }),
            Err(e) => {
                tracing::error!("Failed to add {} to watchlist: {}", asteroid_id, e);
                slot.watched.store(previous, Ordering::SeqCst);
                Err(e)
            }
        }
    }

    /// Remove the asteroid from the member's watchlist.
    ///
    /// The watched flag flips optimistically; a failed delete rolls it back.
    /// When no entry matches, the asteroid was already unwatched and the call
    /// succeeds.
    pub async fn unwatch(&self, member: &Member, asteroid_id: &str) -> Result<WatchStateDto> {
        let user_key = member.user_key();
        let slot = self.slot(user_key, asteroid_id).await;
        let _op = slot.op.lock().await;

        slot.updating.store(true, Ordering::SeqCst);
        let previous = slot.watched.swap(false, Ordering::SeqCst);

        let result = self.delete_entry(user_key, asteroid_id).await;
        slot.updating.store(false, Ordering::SeqCst);

        match result {
            Ok(()) => Ok(WatchStateDto {
                watched: false,
                updating: false,
            }),
            Err(e) => {
                tracing::error!("Failed to remove {} from watchlist: {}", asteroid_id, e);
                slot.watched.store(previous, Ordering::SeqCst);
                Err(e)
            }
        }
    }

    async fn create_entry(
        &self,
        user_key: &str,
        asteroid: &Asteroid,
        notes: Option<String>,
    ) -> Result<()> {
        let existing = fetch_user_entries(self.store.as_ref(), user_key).await?;
        if existing.iter().any(|e| e.matches(user_key, &asteroid.id)) {
            tracing::debug!("{} already watches {}", user_key, asteroid.id);
            return Ok(());
        }

        let entry = WatchlistEntry::new_for(user_key, asteroid, notes);
        store::create_from(self.store.as_ref(), COLLECTION_WATCHLIST, &entry).await?;
        Ok(())
    }

    async fn delete_entry(&self, user_key: &str, asteroid_id: &str) -> Result<()> {
        let entries = fetch_user_entries(self.store.as_ref(), user_key).await?;
        // First match wins; duplicates are not expected but not prevented by
        // the backend.
        let Some(entry) = entries.iter().find(|e| e.matches(user_key, asteroid_id)) else {
            return Ok(());
        };

        self.store.delete(COLLECTION_WATCHLIST, &entry.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::modules::records::MemoryRecordStore;
    use crate::shared::test_helpers::{seed_asteroid, test_asteroid, test_member};
    use crate::shared::constants::RISK_HIGH;

    async fn setup() -> (Arc<MemoryRecordStore>, WatchReconciler, Member) {
        let store = Arc::new(MemoryRecordStore::new());
        seed_asteroid(&store, test_asteroid("a1", "Apophis", Some(RISK_HIGH))).await;
        let reconciler = WatchReconciler::new(store.clone());
        (store, reconciler, test_member("pilot@example.com"))
    }

    #[tokio::test]
    async fn test_watch_then_unwatch_round_trip() {
        let (store, reconciler, member) = setup().await;

        let state = reconciler.watch(&member, "a1", None).await.unwrap();
        assert!(state.watched);
        assert_eq!(store.count(COLLECTION_WATCHLIST).await, 1);

        let state = reconciler.unwatch(&member, "a1").await.unwrap();
        assert!(!state.watched);
        assert_eq!(store.count(COLLECTION_WATCHLIST).await, 0);

        let local = reconciler.local_state(member.user_key(), "a1").await;
        assert!(!local.watched);
        assert!(!local.updating);
    }

    #[tokio::test]
    async fn test_watch_denormalizes_asteroid_fields() {
        let (store, reconciler, member) = setup().await;

        reconciler
            .watch(&member, "a1", Some("keep an eye on this one".to_string()))
            .await
            .unwrap();

        let entries = fetch_user_entries(store.as_ref(), member.user_key())
            .await
            .unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.asteroid_name.as_deref(), Some("Apophis"));
        assert_eq!(entry.risk_level.as_deref(), Some(RISK_HIGH));
        assert_eq!(entry.user_id.as_deref(), Some("pilot@example.com"));
        assert!(entry.added_date.is_some());
    }

    #[tokio::test]
    async fn test_watch_rolls_back_on_create_failure() {
        let (store, reconciler, member) = setup().await;
        store.set_fail_writes(true);

        let err = reconciler.watch(&member, "a1", None).await.unwrap_err();
        assert!(matches!(err, AppError::ExternalServiceError(_)));

        // The optimistic flip must not stick.
        let local = reconciler.local_state(member.user_key(), "a1").await;
        assert!(!local.watched);
        assert_eq!(store.count(COLLECTION_WATCHLIST).await, 0);
    }

    #[tokio::test]
    async fn test_unwatch_rolls_back_on_delete_failure() {
        let (store, reconciler, member) = setup().await;
        reconciler.watch(&member, "a1", None).await.unwrap();

        store.set_fail_writes(true);
        let err = reconciler.unwatch(&member, "a1").await.unwrap_err();
        assert!(matches!(err, AppError::ExternalServiceError(_)));

        let local = reconciler.local_state(member.user_key(), "a1").await;
        assert!(local.watched);
        assert_eq!(store.count(COLLECTION_WATCHLIST).await, 1);
    }

    #[tokio::test]
    async fn test_watch_twice_does_not_duplicate() {
        let (store, reconciler, member) = setup().await;

        reconciler.watch(&member, "a1", None).await.unwrap();
        reconciler.watch(&member, "a1", None).await.unwrap();

        assert_eq!(store.count(COLLECTION_WATCHLIST).await, 1);
    }

    #[tokio::test]
    async fn test_concurrent_watches_for_one_key_do_not_duplicate() {
        let (store, reconciler, member) = setup().await;

        // Both toggles target the same (userId, asteroidId) key; the second
        // waits on the per-key lock and sees the first's entry.
        let (first, second) = tokio::join!(
            reconciler.watch(&member, "a1", None),
            reconciler.watch(&member, "a1", None),
        );
        first.unwrap();
        second.unwrap();

        assert_eq!(store.count(COLLECTION_WATCHLIST).await, 1);
        let local = reconciler.local_state(member.user_key(), "a1").await;
        assert!(local.watched);
        assert!(!local.updating);
    }

    #[tokio::test]
    async fn test_concurrent_watch_and_unwatch_stay_consistent() {
        let (store, reconciler, member) = setup().await;

        let (watch, unwatch) = tokio::join!(
            reconciler.watch(&member, "a1", None),
            reconciler.unwatch(&member, "a1"),
        );
        watch.unwrap();
        unwatch.unwrap();

        // Whichever toggle ran second wins, but the create/delete calls must
        // not interleave: at most one entry, and the local flag agrees with
        // the backend.
        let entries = fetch_user_entries(store.as_ref(), member.user_key())
            .await
            .unwrap();
        assert!(entries.len() <= 1);
        let local = reconciler.local_state(member.user_key(), "a1").await;
        assert_eq!(local.watched, !entries.is_empty());
        assert!(!local.updating);
    }

    #[tokio::test]
    async fn test_unwatch_without_entry_is_a_no_op() {
        let (_store, reconciler, member) = setup().await;

        let state = reconciler.unwatch(&member, "a1").await.unwrap();
        assert!(!state.watched);
    }

    #[tokio::test]
    async fn test_status_scans_backend_membership() {
        let (store, reconciler, member) = setup().await;
        let other = test_member("other@example.com");

        reconciler.watch(&other, "a1", None).await.unwrap();
        assert_eq!(store.count(COLLECTION_WATCHLIST).await, 1);

        // Another member's entry must not count for this user.
        let state = reconciler.status(member.user_key(), "a1").await.unwrap();
        assert!(!state.watched);

        reconciler.watch(&member, "a1", None).await.unwrap();
        let state = reconciler.status(member.user_key(), "a1").await.unwrap();
        assert!(state.watched);
    }

    #[tokio::test]
    async fn test_watch_missing_asteroid_is_not_found() {
        let (_store, reconciler, member) = setup().await;

        let err = reconciler.watch(&member, "nope", None).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
