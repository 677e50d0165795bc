pub mod channel_role;
pub mod config;
pub mod error;
pub mod report;
