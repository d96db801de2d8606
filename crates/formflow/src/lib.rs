pub mod config;
pub mod error;
pub mod forms;
pub mod render;
pub mod telemetry;
