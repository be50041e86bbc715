//! audio-cutter command line interface
//!
//! Cuts a time range out of a WAV file and writes it as 16-bit PCM WAV.

use audio_cutter::TimeWindow;
use audio_cutter::decoder::{self, Decoder, WavSource};
use audio_cutter::processor::{frame_range, trim_and_encode};
use clap::{Parser, Subcommand};
use log::{debug, error, info};
use std::path::{Path, PathBuf};

/// Download name used when no output path is given
const DEFAULT_OUTPUT: &str = "trimmed-audio.wav";

#[derive(Parser)]
#[command(name = "audio-cutter")]
#[command(about = "Cut a time range out of a recording into a standalone WAV file", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the format of a WAV file
    Probe {
        /// Input WAV file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Cut a time range out of a WAV file
    Trim {
        /// Input WAV file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output WAV file
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Start time in seconds
        #[arg(short, long, default_value_t = 0.0)]
        start: f64,

        /// End time in seconds (defaults to the end of the recording)
        #[arg(short, long)]
        end: Option<f64>,
    },
}

fn probe(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let info = decoder::probe(input)?;

    println!("File: {}", input.display());
    println!("  Sample rate: {} Hz", info.sample_rate);
    println!("  Channels: {}", info.channel_count);
    println!(
        "  Format: {}-bit {}",
        info.bits_per_sample,
        if info.is_float { "float" } else { "PCM" }
    );
    println!("  Frames: {}", info.frame_count);
    println!("  Duration: {:.3}s", info.duration_secs());

    Ok(())
}

fn trim(
    input: &Path,
    output: &Path,
    start: f64,
    end: Option<f64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = WavSource::from_file(input)?;
    let info = source.info();
    info!(
        "Decoding {} ({} Hz, {} channels, {:.3}s)",
        input.display(),
        info.sample_rate,
        info.channel_count,
        info.duration_secs()
    );

    let signal = source.decode()?;
    let window = TimeWindow::new(start, end.unwrap_or_else(|| signal.duration_secs()));

    let frames = frame_range(&signal, &window)?;
    debug!("Selected frames {}..{}", frames.start, frames.end);

    let container = trim_and_encode(&signal, &window)?;
    drop(signal);

    container.write_to(output)?;
    info!("Wrote {} bytes to {}", container.len(), output.display());

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    debug!("audio-cutter {}", audio_cutter::VERSION);

    let result = match &cli.command {
        Commands::Probe { input } => probe(input),
        Commands::Trim {
            input,
            output,
            start,
            end,
        } => trim(input, output, *start, *end),
    };

    if let Err(e) = &result {
        error!("{}", e);
    }

    result
}
