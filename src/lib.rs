//! Linkshelf: a personal shelf of categorized links.
//!
//! The core is an in-memory link store, an add/edit form with presence
//! validation, and a grouping pass over six fixed categories. This library
//! crate exposes all modules for the binaries and integration tests.

pub mod app;
pub mod logging;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod types;
