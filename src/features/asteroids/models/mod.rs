pub mod asteroid;

pub use asteroid::Asteroid;
