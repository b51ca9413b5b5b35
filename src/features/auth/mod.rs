pub mod clients;
pub mod guards;
pub mod model;

pub use guards::CurrentMember;
pub use model::Member;
