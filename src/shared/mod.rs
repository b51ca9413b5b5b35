pub mod constants;
pub mod paging;
pub mod test_helpers;
pub mod types;
