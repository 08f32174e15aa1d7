//! Supporting helpers shared across the crate.

pub mod convert;
