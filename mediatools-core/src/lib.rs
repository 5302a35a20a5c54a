//! Core library for media file inspection via the external mediainfo tool.
//!
//! This crate shells out to the `mediainfo` command-line analyzer with a
//! fixed report template, enforces a wall-clock timeout on the subprocess,
//! and parses the emitted `Key:: value` lines into a flat
//! [`MediaFileInfo`] record. A convenience composition verifies that the
//! input file exists before the analyzer is invoked.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use mediatools_core::check_media;
//! use std::path::Path;
//!
//! let info = check_media(Path::new("/path/to/clip.mov")).unwrap();
//! println!("{} ({} bytes)", info.file_name, info.file_size_bytes);
//! ```

pub mod error;
pub mod external;
pub mod media_info;
pub mod util;
pub mod utils;

// Re-exports for public API
pub use error::{CoreError, CoreResult};
pub use external::{check_media, file_exists, get_media_info};
pub use media_info::MediaFileInfo;
pub use utils::{format_bytes, format_duration};
