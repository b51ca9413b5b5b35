use std::sync::Arc;

use crate::core::error::Result;
use crate::features::asteroids::dtos::DashboardStatsDto;
use crate::features::asteroids::models::Asteroid;
use crate::modules::records::store::{self, ListOptions, RecordStore};
use crate::shared::constants::{COLLECTION_ASTEROIDS, RISK_HIGH, RISK_LOW, RISK_MEDIUM};
use crate::shared::paging::PagedFeed;
use crate::shared::types::Page;

/// Read-side service for the asteroid catalog.
pub struct AsteroidService {
    store: Arc<dyn RecordStore>,
}

impl AsteroidService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Fetch one page of asteroid records in the backend's default order.
    pub async fn load_page(&self, limit: i64, skip: i64) -> Result<Page<Asteroid>> {
        store::get_all_as(
            self.store.as_ref(),
            COLLECTION_ASTEROIDS,
            ListOptions::page(limit, skip),
        )
        .await
    }

    /// Fetch one page into an accumulating feed. A load at skip 0 starts a
    /// new generation and replaces the feed; any other skip appends. Returns
    /// false when the fetched page was stale and discarded.
    pub async fn load_into(
        &self,
        feed: &mut PagedFeed<Asteroid>,
        limit: i64,
        skip: i64,
    ) -> Result<bool> {
        let generation = feed.begin_load(skip);
        let page = self.load_page(limit, skip).await?;
        Ok(feed.apply_page(skip, page, generation))
    }

    /// Fetch a single asteroid; NotFound when absent.
    pub async fn get(&self, id: &str) -> Result<Asteroid> {
        store::get_by_id_as(self.store.as_ref(), COLLECTION_ASTEROIDS, id).await
    }

    /// Dashboard header stats: the backend's total plus per-risk counts over
    /// the fetched page (page-local, as the dashboard has always shown them).
    pub fn stats(page: &Page<Asteroid>) -> DashboardStatsDto {
        let count = |level: &str| page.items.iter().filter(|a| a.risk_is(level)).count() as i64;

        DashboardStatsDto {
            total: page.total_count,
            high: count(RISK_HIGH),
            medium: count(RISK_MEDIUM),
            low: count(RISK_LOW),
        }
    }
}
