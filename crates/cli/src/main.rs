//! RISC-V SYSTEM/CSR scanner CLI.
//!
//! This binary provides two commands:
//! 1. **scan:** Scan an image for SYSTEM instructions and write the CSR usage report.
//! 2. **listing:** Write an image as `0xADDRESS 0xVALUE` lines for memory-initialisation tools.

mod logging;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use csrscan_core::config::{Config, WordOrder};
use csrscan_core::image::listing::{parse_address, write_image_listing};
use csrscan_core::image::{self, ImageFormat};
use csrscan_core::{CsrSpace, ReportOptions, ScanError, Scanner, report};

use crate::logging::LogLevel;

/// Output path meaning "standard output".
const STDOUT_PATH: &str = "-";

#[derive(Parser, Debug)]
#[command(
    name = "csrscan",
    version,
    about = "RISC-V SYSTEM instruction and CSR usage scanner",
    long_about = "Scan a machine-code image for SYSTEM instructions, classify every CSR access by \
                  privilege level and accessibility, and write a tab-separated report.\n\n\
                  Examples:\n  csrscan scan Image.bin.bin\n  csrscan scan firmware.elf --little-endian -o -\n  \
                  csrscan listing Image.bin --base 0x8000_0000 -o preparedImage.txt\n  \
                  csrscan listing firmware.elf.gz -o preparedImage.txt"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log verbosity (overridden by RUST_LOG).
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Warn, global = true)]
    log_level: LogLevel,

    /// Log every decoded SYSTEM instruction (same as --log-level debug).
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan an image and write the SYSTEM/CSR report.
    Scan {
        /// Image to scan (raw binary or ELF).
        image: PathBuf,

        /// Report destination; `-` writes to stdout. Defaults to the configured output.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Container format of the image.
        #[arg(short, long, value_enum, default_value_t = FormatArg::Auto)]
        format: FormatArg,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Assemble words least-significant byte first.
        #[arg(long)]
        little_endian: bool,

        /// Add a column with architectural CSR names.
        #[arg(long)]
        csr_names: bool,
    },

    /// Write an address/value listing of an image.
    Listing {
        /// Image to list (raw binary or ELF, optionally gzipped).
        image: PathBuf,

        /// Address of the first word of a raw image (hex with 0x prefix, or decimal).
        /// ELF sections are listed at their own addresses.
        #[arg(short, long, value_parser = parse_address)]
        base: Option<u64>,

        /// Container format of the image.
        #[arg(short, long, value_enum, default_value_t = FormatArg::Auto)]
        format: FormatArg,

        /// Read words most-significant byte first.
        #[arg(long)]
        big_endian: bool,

        /// Listing destination; `-` (the default) writes to stdout.
        #[arg(short, long, default_value = STDOUT_PATH)]
        output: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Image container selection on the command line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Auto,
    Raw,
    Elf,
}

impl From<FormatArg> for ImageFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Auto => Self::Auto,
            FormatArg::Raw => Self::Raw,
            FormatArg::Elf => Self::Elf,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(if cli.verbose {
        LogLevel::Debug
    } else {
        cli.log_level
    });

    let result = match cli.command {
        Commands::Scan {
            image,
            output,
            format,
            config,
            little_endian,
            csr_names,
        } => cmd_scan(
            &image,
            output,
            format.into(),
            config.as_deref(),
            little_endian,
            csr_names,
        ),
        Commands::Listing {
            image,
            base,
            format,
            big_endian,
            output,
            config,
        } => cmd_listing(
            &image,
            base,
            format.into(),
            big_endian,
            &output,
            config.as_deref(),
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Loads the configuration file, or the defaults when none is given.
fn load_config(path: Option<&Path>) -> Result<Config, ScanError> {
    path.map_or_else(|| Ok(Config::default()), Config::from_file)
}

/// Scans `image` and writes the report.
fn cmd_scan(
    image: &Path,
    output: Option<PathBuf>,
    format: ImageFormat,
    config: Option<&Path>,
    little_endian: bool,
    csr_names: bool,
) -> Result<(), ScanError> {
    let mut config = load_config(config)?;
    if little_endian {
        config.scan.word_order = WordOrder::Little;
    }
    config.report.show_csr_names |= csr_names;
    let output = output.unwrap_or_else(|| config.report.output.clone());

    let bytes = image::read_image(image)?;
    let regions = image::regions(&bytes, format)?;

    let space = CsrSpace::standard();
    let acc = Scanner::new(space, &config.scan).scan_regions(&regions);
    let text = report::render(&acc, space, ReportOptions::from(&config.report));

    write_output(&output, |out| out.write_all(text.as_bytes()))?;
    if output.as_os_str() != STDOUT_PATH {
        let shown = std::path::absolute(&output).unwrap_or(output);
        println!("Results written to {}", shown.display());
    }
    Ok(())
}

/// Writes the address/value listing of `image`.
fn cmd_listing(
    image: &Path,
    base: Option<u64>,
    format: ImageFormat,
    big_endian: bool,
    output: &Path,
    config: Option<&Path>,
) -> Result<(), ScanError> {
    let mut config = load_config(config)?.listing;
    if let Some(base) = base {
        config.base_address = base;
    }
    if big_endian {
        config.word_order = WordOrder::Big;
    }

    let bytes = image::read_image(image)?;
    if output.as_os_str() == STDOUT_PATH {
        let lines = write_image_listing(&bytes, format, &config, io::stdout().lock())?;
        tracing::info!(lines, "listing written to stdout");
    } else {
        let file = File::create(output).map_err(|e| ScanError::io(output, e))?;
        let lines = write_image_listing(&bytes, format, &config, BufWriter::new(file))?;
        println!("{lines} lines written to {}", output.display());
    }
    Ok(())
}

/// Opens `path` (or stdout for `-`) and hands a buffered writer to `write`.
fn write_output(
    path: &Path,
    write: impl FnOnce(&mut dyn Write) -> io::Result<()>,
) -> Result<(), ScanError> {
    if path.as_os_str() == STDOUT_PATH {
        let mut out = io::stdout().lock();
        write(&mut out).and_then(|()| out.flush()).map_err(ScanError::Write)
    } else {
        let file = File::create(path).map_err(|e| ScanError::io(path, e))?;
        let mut out = BufWriter::new(file);
        write(&mut out).and_then(|()| out.flush()).map_err(ScanError::Write)
    }
}
