//! Shared type definitions: state enums, flag bitmasks, and constants.

pub mod constants;
pub mod flags;
pub mod states;
