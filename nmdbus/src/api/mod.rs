//! Public API surface: the client handle, data models, and the profile
//! builder.

pub mod models;
pub mod network_manager;
pub mod profile;
