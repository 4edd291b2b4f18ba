pub mod cli;
pub mod clipboard;
pub mod config;
pub mod listing;
pub mod logging;
pub mod shutdown;
pub mod ui;
