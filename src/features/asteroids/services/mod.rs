pub mod asteroid_service;
pub mod filter;

pub use asteroid_service::AsteroidService;
pub use filter::filter_asteroids;
