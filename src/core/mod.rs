pub mod client;
pub mod connection;
pub mod constants;
pub mod error;
