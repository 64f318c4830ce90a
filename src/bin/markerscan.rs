use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use markerlib::{Strategy, WindowScanner, MESSAGE_MARKER_SIZE, PACKET_MARKER_SIZE};

#[derive(ValueEnum, Debug, PartialEq, Eq, Clone, Copy)]
enum Mode {
    Packet,
    Message,
}

impl Mode {
    fn window_size(self) -> usize {
        match self {
            Mode::Packet => PACKET_MARKER_SIZE,
            Mode::Message => MESSAGE_MARKER_SIZE,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long)]
    verbose: bool,
    #[clap(short, long, value_enum, default_value_t = Mode::Message)]
    mode: Mode,
    /// Window size; overrides --mode
    #[clap(short, long)]
    size: Option<usize>,
    #[clap(long, value_enum, default_value_t = Strategy::Rescan)]
    strategy: Strategy,
    /// Read from this file instead of stdin
    input: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder()
        .format_module_path(false)
        .format_timestamp_millis()
        .filter_level(log_level)
        .init();
    let size = args.size.unwrap_or_else(|| args.mode.window_size());
    let scanner = WindowScanner::new(size).with_strategy(args.strategy);
    let start = std::time::Instant::now();
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let position = match args.input {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("could not open {}", path.display()))?;
            markerlib::solve(BufReader::new(file), handle, &scanner)?
        }
        None => markerlib::solve(std::io::stdin().lock(), handle, &scanner)?,
    };
    log::debug!(
        "found {}-byte marker ending at {} in {:?}",
        scanner.size(),
        position,
        start.elapsed()
    );
    Ok(())
}
