pub mod watch_reconciler;
pub mod watchlist_view;

pub use watch_reconciler::WatchReconciler;
pub use watchlist_view::{WatchlistView, WatchlistViewService};
