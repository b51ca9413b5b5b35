pub mod alerts;
pub mod asteroids;
pub mod auth;
pub mod users;
pub mod watchlist;
