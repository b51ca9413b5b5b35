pub mod watchlist_handler;
