pub mod watchlist_dto;

pub use watchlist_dto::{WatchRequest, WatchStateDto, WatchlistDto, WatchlistStatsDto};
