pub mod asteroid_dto;

pub use asteroid_dto::*;
