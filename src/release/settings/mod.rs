//! Configuration structures for release operations.
//!
//! This module provides the release target types, the fixed target matrix,
//! and the [`Settings`] the pipeline runs from.

mod builder;
mod core;
mod target;

pub use builder::{
    DEFAULT_COMPILER, DEFAULT_PROGRAM, DEFAULT_STAGING_DIR, DEFAULT_VERSION_FILE, SettingsBuilder,
};
pub use core::Settings;
pub use target::{Arch, ArchiveKind, Os, TARGET_MATRIX, Target};
