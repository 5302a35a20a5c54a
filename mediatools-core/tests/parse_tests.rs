// mediatools-core/tests/parse_tests.rs

use mediatools_core::external::parse_mediainfo_output;
use std::time::Duration;

#[test]
fn test_minimal_report() {
    let output = "FileName:: clip.mov\n\
                  FileSize_bytes:: 104937987\n\
                  VideoCount:: 1\n\
                  Duration_ms:: 90125\n\
                  Resolution:: 1920x816\n";
    let info = parse_mediainfo_output(output);

    assert_eq!(info.file_name, "clip.mov");
    assert_eq!(info.file_size_bytes, "104937987");
    assert_eq!(info.video_count, "1");
    assert_eq!(info.duration_ms, "90125");
    assert_eq!(info.duration, Duration::from_millis(90125));
    assert_eq!(info.resolution, "1920x816");
}

#[test]
fn test_report_with_banner_noise_and_blank_lines() {
    let output = "MediaInfo CLI v23.10\n\
                  \n\
                  FileName:: movie.mkv\n\
                  \n\
                  Subs: English, German.\n\
                  AudioCount:: 2\n";
    let info = parse_mediainfo_output(output);

    assert_eq!(info.file_name, "movie.mkv");
    assert_eq!(info.audio_count, "2");
    assert_eq!(info.video_count, "");
}

#[test]
fn test_crlf_terminated_report() {
    // The inform template terminates lines with \r\n once mediainfo has
    // expanded the escapes; values must come out clean either way.
    let output = "FileName:: clip.mov\r\nWidth:: 1920\r\n";
    let info = parse_mediainfo_output(output);

    assert_eq!(info.file_name, "clip.mov");
    assert_eq!(info.width, "1920");
}
