pub mod asteroid_handler;

pub use asteroid_handler::*;
