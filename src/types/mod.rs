// Linkshelf shared type definitions
// Each submodule defines types used across the crate.

pub mod draft;
pub mod errors;
pub mod link;
pub mod notification;
pub mod settings;
