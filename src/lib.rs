pub mod catalog;
pub mod config;
pub mod listing;
pub mod logging;
pub mod router;
pub mod ui;
