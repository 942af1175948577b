//! Shared helpers for release operations.

pub mod fs;
