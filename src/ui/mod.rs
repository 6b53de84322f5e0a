pub mod address;
pub mod app;
pub mod detail;
pub mod events;
pub mod footer;
pub mod format;
pub mod header;
pub mod home;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod search;
pub mod terminal_guard;
pub mod theme;
pub mod vehicle;

pub use runtime::run;
