pub mod config;
pub mod content_store;
pub mod format;
pub mod indicators;
