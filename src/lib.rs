pub mod config;
pub mod error;
pub mod screening;
pub mod server;
pub mod storage;
pub mod telemetry;
