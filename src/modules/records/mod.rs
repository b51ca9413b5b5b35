pub mod http;
#[cfg(test)]
pub mod memory;
pub mod store;

pub use http::HttpRecordStore;
#[cfg(test)]
pub use memory::MemoryRecordStore;
pub use store::{ListOptions, RecordPage, RecordStore};
