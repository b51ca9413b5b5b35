pub mod member_session_client;

pub use member_session_client::MemberSessionClient;
