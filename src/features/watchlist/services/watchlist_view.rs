use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::asteroids::models::Asteroid;
use crate::features::watchlist::dtos::WatchlistStatsDto;
use crate::features::watchlist::models::WatchlistEntry;
use crate::features::watchlist::services::watch_reconciler::fetch_user_entries;
use crate::modules::records::store::{self, RecordStore};
use crate::shared::constants::{COLLECTION_ASTEROIDS, RISK_HIGH, RISK_LOW, RISK_MEDIUM};

/// A member's watchlist joined with the asteroid records it references.
///
/// The two lists are kept side by side rather than zipped: an entry whose
/// asteroid record has since disappeared still shows up in `entries`, with no
/// matching element in `asteroids`.
#[derive(Debug, Clone, Default)]
pub struct WatchlistView {
    pub entries: Vec<WatchlistEntry>,
    pub asteroids: Vec<Asteroid>,
}

impl WatchlistView {
    /// Per-risk counts over the joined asteroid records.
    pub fn stats(&self) -> WatchlistStatsDto {
        WatchlistStatsDto {
            total: self.entries.len() as i64,
            high: self.count_risk(RISK_HIGH),
            medium: self.count_risk(RISK_MEDIUM),
            low: self.count_risk(RISK_LOW),
        }
    }

    fn count_risk(&self, level: &str) -> i64 {
        self.asteroids.iter().filter(|a| a.risk_is(level)).count() as i64
    }

    fn asteroid_id_for_entry(&self, entry_id: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|e| e.id == entry_id)
            .and_then(|e| e.asteroid_id.clone())
    }
}

/// Loads and mutates the watchlist page's data.
pub struct WatchlistViewService {
    store: Arc<dyn RecordStore>,
}

impl WatchlistViewService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Load the member's entries and resolve each referenced asteroid.
    ///
    /// Entries pointing at deleted asteroids are kept; the missing record is
    /// simply absent from the asteroid list.
    pub async fn load(&self, user_key: &str) -> Result<WatchlistView> {
        let entries = fetch_user_entries(self.store.as_ref(), user_key).await?;

        let mut asteroids = Vec::with_capacity(entries.len());
        for entry in &entries {
            let Some(asteroid_id) = entry.asteroid_id.as_deref() else {
                continue;
            };
            match store::get_by_id_as::<Asteroid>(
                self.store.as_ref(),
                COLLECTION_ASTEROIDS,
                asteroid_id,
            )
            .await
            {
                Ok(asteroid) => asteroids.push(asteroid),
                Err(AppError::NotFound(_)) => {
                    tracing::warn!("Watchlist entry {} references missing asteroid {}", entry.id, asteroid_id);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(WatchlistView { entries, asteroids })
    }

    /// Remove an entry from the view, reconciling with the backend.
    ///
    /// The entry must be part of the member's own view; an id that does not
    /// appear in it is NotFound, so one member cannot delete another's entry.
    /// Both lists drop the entry and its asteroid up front, then the backend
    /// delete runs. If the delete fails the view is not rolled back
    /// piecemeal; the whole list reloads from the backend so the view cannot
    /// drift from what the backend actually holds.
    pub async fn remove(&self, user_key: &str, view: &WatchlistView, entry_id: &str) -> Result<WatchlistView> {
        if view.entries.iter().all(|e| e.id != entry_id) {
            return Err(AppError::NotFound(format!(
                "Watchlist entry {} not found",
                entry_id
            )));
        }

        let removed_asteroid_id = view.asteroid_id_for_entry(entry_id);

        let mut next = WatchlistView {
            entries: view
                .entries
                .iter()
                .filter(|e| e.id != entry_id)
                .cloned()
                .collect(),
            asteroids: view.asteroids.clone(),
        };
        if let Some(asteroid_id) = removed_asteroid_id {
            next.asteroids.retain(|a| a.id != asteroid_id);
        }

        match self
            .store
            .delete(crate::shared::constants::COLLECTION_WATCHLIST, entry_id)
            .await
        {
            Ok(()) => Ok(next),
            Err(e) => {
                tracing::error!("Failed to delete watchlist entry {}: {}", entry_id, e);
                self.load(user_key).await
            }
        }
    }
}
