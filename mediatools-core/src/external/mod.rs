//! Interactions with the external analyzer and the file system.
//!
//! This module encapsulates everything that crosses the process boundary:
//! spawning the mediainfo binary and probing the file system for input
//! files.

use std::io;
use std::path::Path;

use crate::error::CoreResult;

/// Contains the mediainfo invocation and output parsing logic
pub mod mediainfo_executor;

pub use mediainfo_executor::{check_media, get_media_info, parse_mediainfo_output};

/// Reports whether a filesystem entry exists at `path`.
///
/// A missing entry is a normal negative result, not an error; any other
/// metadata access failure is surfaced to the caller.
pub fn file_exists(path: &Path) -> CoreResult<bool> {
    match std::fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}
