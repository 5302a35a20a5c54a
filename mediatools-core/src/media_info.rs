//! Flat record of media attributes reported by the external analyzer.

use serde::Serialize;
use std::time::Duration;

/// Media attributes for a single file, as reported by the mediainfo tool.
///
/// Every textual field defaults to an empty string when the tool does not
/// emit it; no field is required to be present. `duration` is populated
/// only when `duration_ms` parses as a millisecond count and otherwise
/// stays at zero while the raw string is retained.
///
/// A record is constructed empty, filled by a single parse pass over the
/// tool's output, and handed to the caller as a snapshot.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct MediaFileInfo {
    pub file_name: String,
    pub file_size_bytes: String,
    pub video_count: String,
    pub audio_count: String,
    pub duration_ms: String,
    pub duration: Duration,
    pub format: String,
    pub codec_id: String,
    pub resolution: String,
    pub width: String,
    pub height: String,
    pub standard: String,
    pub codec: String,
    pub bitrate_bps: String,
    pub framerate: String,
    pub aspect_ratio: String,
    pub audio: String,
}
