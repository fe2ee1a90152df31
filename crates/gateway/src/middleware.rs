pub mod error_handling;
pub mod request_log;
