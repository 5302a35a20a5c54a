// mediatools-cli/src/main.rs
//
// Command-line front end for mediatools-core. Parses arguments with clap,
// sets up env_logger, verifies the input file exists, runs the external
// analyzer against it, and prints the resulting record as aligned text or
// JSON. Exit code is 1 on any failure.

use clap::{Parser, Subcommand};
use log::LevelFilter;
use mediatools_core::{check_media, format_bytes, format_duration, MediaFileInfo};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Mediatools: media file inspection",
    long_about = "Inspects media files by driving the mediainfo analyzer via the mediatools-core library."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Checks that a media file exists and prints its attributes
    Info(InfoArgs),
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Media file to inspect
    #[arg(required = true, value_name = "FILE")]
    file: PathBuf,

    /// Print the record as JSON instead of aligned text
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn run_info(args: InfoArgs) -> Result<(), Box<dyn std::error::Error>> {
    let info = check_media(&args.file)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print_record(&info);
    }

    Ok(())
}

/// Prints one aligned `label: value` line per non-empty field.
fn print_record(info: &MediaFileInfo) {
    print_field("File name:", &info.file_name);
    if let Ok(bytes) = info.file_size_bytes.parse::<u64>() {
        println!(
            "{:<14}{} ({})",
            "File size:",
            info.file_size_bytes,
            format_bytes(bytes)
        );
    } else {
        print_field("File size:", &info.file_size_bytes);
    }
    print_field("Video count:", &info.video_count);
    print_field("Audio count:", &info.audio_count);
    if info.duration > Duration::ZERO {
        println!(
            "{:<14}{} ms ({})",
            "Duration:",
            info.duration_ms,
            format_duration(info.duration)
        );
    } else {
        print_field("Duration:", &info.duration_ms);
    }
    print_field("Format:", &info.format);
    print_field("Codec ID:", &info.codec_id);
    print_field("Resolution:", &info.resolution);
    print_field("Width:", &info.width);
    print_field("Height:", &info.height);
    print_field("Standard:", &info.standard);
    print_field("Codec:", &info.codec);
    print_field("Bitrate:", &info.bitrate_bps);
    print_field("Framerate:", &info.framerate);
    print_field("Aspect ratio:", &info.aspect_ratio);
    print_field("Audio:", &info.audio);
}

fn print_field(label: &str, value: &str) {
    if !value.is_empty() {
        println!("{label:<14}{value}");
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Info(args) => {
            init_logging(args.verbose);
            run_info(args)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
