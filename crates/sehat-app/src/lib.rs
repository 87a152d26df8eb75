//! Application service layer - use cases and configuration

pub mod app;
pub mod config;
