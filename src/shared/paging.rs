use crate::shared::types::Page;

/// Accumulator for incrementally loaded record listings.
///
/// Pages arrive from the storage backend in default order. A page applied at
/// skip 0 replaces the held sequence (refresh); any other skip appends in
/// page-then-record order. There is no re-sort and no dedup: a record fetched
/// twice because of a concurrent mutation appears twice.
///
/// Every refresh bumps a generation counter. Page applications carry the
/// generation they were loaded under, and a page from a superseded generation
/// is discarded instead of applied, so a late response can never clobber a
/// newer refresh.
#[derive(Debug)]
pub struct PagedFeed<T> {
    items: Vec<T>,
    has_next: bool,
    next_skip: i64,
    total_count: i64,
    generation: u64,
}

impl<T> Default for PagedFeed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PagedFeed<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            has_next: false,
            next_skip: 0,
            total_count: 0,
            generation: 0,
        }
    }

    /// Start a load at the given skip and return the generation token the
    /// resulting page must be applied under. A skip-0 load is a refresh and
    /// invalidates every in-flight page of the previous generation.
    pub fn begin_load(&mut self, skip: i64) -> u64 {
        if skip == 0 {
            self.generation += 1;
        }
        self.generation
    }

    /// Apply a fetched page. Returns false (and changes nothing) when the
    /// page belongs to a superseded generation.
    pub fn apply_page(&mut self, skip: i64, page: Page<T>, generation: u64) -> bool {
        if generation != self.generation {
            tracing::debug!(
                "Discarding stale page: generation {} != {}",
                generation,
                self.generation
            );
            return false;
        }

        if skip == 0 {
            self.items = page.items;
        } else {
            self.items.extend(page.items);
        }
        self.has_next = page.has_next;
        self.next_skip = page.next_skip;
        self.total_count = page.total_count;
        true
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.has_next
    }

    /// Skip value for the next "load more" fetch
    pub fn next_skip(&self) -> i64 {
        self.next_skip
    }

    pub fn total_count(&self) -> i64 {
        self.total_count
    }
}
