//! Application service layer - pricing use cases, config, scanning, export

pub mod app;
pub mod config;
pub mod export;
pub mod logging;
pub mod repository;
pub mod scanner;
