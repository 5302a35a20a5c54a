//! MediaInfo integration for media file inspection
//!
//! This module builds the fixed inform template handed to the mediainfo
//! binary, executes it as a subprocess with a bounded timeout, and parses
//! the emitted `Key:: value` report into a [`MediaFileInfo`] record.

use std::path::Path;
use std::process::Command;
use std::time::Duration;

use crate::error::{CoreError, CoreResult};
use crate::external::file_exists;
use crate::media_info::MediaFileInfo;
use crate::util::command::run_command_with_timeout;

/// Wall-clock bound on a single mediainfo invocation.
pub const MEDIAINFO_TIMEOUT: Duration = Duration::from_secs(60);

/// Fixed output template handed to mediainfo as its first argument.
///
/// Requests one `Key:: value` pair per line across the General/Video/
/// Audio/Text sections of the tool's report model. The `\r\n` sequences
/// are literal text; mediainfo expands them while rendering the report.
const MEDIAINFO_INFORM: &str = r"--Inform=General;FileName:: %FileName%.%FileExtension%\r\nFileSize_bytes:: %FileSize%\r\nVideoCount:: %VideoCount%\r\nAudioCount:: %AudioCount%\r\nDuration_ms:: %Duration%\r\nFormat:: %Format%\r\nCodecID:: %CodecID%\r\n
Video;Resolution:: %Width%x%Height%\r\nWidth:: %Width%\r\nHeight:: %Height%\r\nStandard:: %Standard%\r\nCodec:: %Codec/String% %Format_Profile%\r\nBitrate_bps:: %BitRate%\r\nFramerate:: %FrameRate% fps\r\nAspectRatio:: %DisplayAspectRatio/String%\r\n
Audio;Audio:: %Language/String% %BitRate/String% %BitRate_Mode% %Channel(s)% chnls %Codec/String%\r\n
Text;%Language/String%
Text_Begin;Subs:
Text_Middle;, 
Text_End;.\r\n
";

/// Runs mediainfo against `input_path` and parses its report.
///
/// Assumes the path exists; see [`check_media`] for the composed variant
/// that verifies existence first. All invocation failures abort with no
/// partial record; a timeout is reported distinctly from other failures.
pub fn get_media_info(input_path: &Path) -> CoreResult<MediaFileInfo> {
    log::debug!("Running mediainfo on: {}", input_path.display());

    let mut cmd = Command::new("mediainfo");
    cmd.arg(MEDIAINFO_INFORM).arg(input_path);

    let output = match run_command_with_timeout(&mut cmd, MEDIAINFO_TIMEOUT) {
        Ok(output) => output,
        Err(e @ CoreError::CommandTimeout(..)) => {
            log::error!("mediainfo timed out on {}: {}", input_path.display(), e);
            return Err(e);
        }
        Err(e) => {
            log::error!("mediainfo failed on {}: {}", input_path.display(), e);
            return Err(e);
        }
    };

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(parse_mediainfo_output(&stdout))
}

/// Confirms `input_path` exists, then runs the analyzer against it.
///
/// A missing path fails immediately with [`CoreError::InputNotFound`] and
/// the analyzer is never invoked; any other metadata access failure is
/// propagated verbatim.
pub fn check_media(input_path: &Path) -> CoreResult<MediaFileInfo> {
    if !file_exists(input_path)? {
        return Err(CoreError::InputNotFound(
            input_path.display().to_string(),
        ));
    }

    get_media_info(input_path)
}

/// Parses the `Key:: value` report emitted by the inform template.
///
/// Lines without exactly one `::` delimiter are skipped (blank lines,
/// section markers, banner noise), as are keys outside the recognized
/// set. A record with many empty fields is a valid result; the tool
/// simply did not report those attributes.
pub fn parse_mediainfo_output(output: &str) -> MediaFileInfo {
    let mut info = MediaFileInfo::default();

    for line in output.lines() {
        let parts: Vec<&str> = line.split("::").collect();
        if parts.len() != 2 {
            continue;
        }

        apply_field(&mut info, parts[0].trim(), parts[1].trim());
    }

    info
}

/// Copies a recognized key into its record field; unknown keys are ignored.
fn apply_field(info: &mut MediaFileInfo, key: &str, value: &str) {
    match key {
        "FileName" => info.file_name = value.to_string(),
        "FileSize_bytes" => info.file_size_bytes = value.to_string(),
        "VideoCount" => info.video_count = value.to_string(),
        "AudioCount" => info.audio_count = value.to_string(),
        "Duration_ms" => {
            info.duration_ms = value.to_string();
            // Raw string is kept even when it does not parse; the
            // structured duration then stays at zero.
            if let Ok(ms) = value.parse::<u64>() {
                info.duration = Duration::from_millis(ms);
                log::debug!("Parsed duration: {:?}", info.duration);
            }
        }
        "Format" => info.format = value.to_string(),
        "CodecID" => info.codec_id = value.to_string(),
        "Resolution" => info.resolution = value.to_string(),
        "Width" => info.width = value.to_string(),
        "Height" => info.height = value.to_string(),
        "Standard" => info.standard = value.to_string(),
        "Codec" => info.codec = value.to_string(),
        "Bitrate_bps" => info.bitrate_bps = value.to_string(),
        "Framerate" => info.framerate = value.to_string(),
        "AspectRatio" => info.aspect_ratio = value.to_string(),
        "Audio" => info.audio = value.to_string(),
        _ => {}
    }
}
