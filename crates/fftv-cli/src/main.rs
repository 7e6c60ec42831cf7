//! fftv CLI — butterfly stage verification tools
//!
//! # Commands
//!
//! - `convert` - Convert an oscilloscope CSV capture to a Q2.14 `.mem` image
//! - `lutgen` - Generate the sine twiddle ROM `.mem` image
//! - `check` - Check testbench butterfly results against the golden model
//!
//! `check` exits 0 when the hardware passes and 1 when it fails; structural
//! problems (missing file, malformed records, empty results) print a fatal
//! message and exit 2.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use fftv_core::{
    read_results, read_samples, run_check, write_mem, CheckConfig, LutConfig, QFormat,
    RampStimulus, SampleFileConfig, VerifyResult,
};

/// fftv - Fixed-point FFT butterfly stage verification
#[derive(Parser)]
#[command(name = "fftv")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an oscilloscope CSV capture to a Q2.14 .mem image
    ///
    /// Examples:
    ///   fftv convert --input pd1.csv --output input_data.mem
    Convert {
        /// WaveForms CSV capture to read
        #[arg(short, long)]
        input: PathBuf,

        /// Output .mem image path
        #[arg(short, long)]
        output: PathBuf,

        /// Sample memory depth; captures are zero-padded or truncated to this
        #[arg(short = 'n', long, default_value = "8192")]
        samples: usize,
    },
    /// Generate the sine twiddle ROM .mem image
    ///
    /// Examples:
    ///   fftv lutgen --output sine_lut_8192.mem
    ///   fftv lutgen --output lut.mem --period 4096 --size 1024
    Lutgen {
        /// Output .mem image path
        #[arg(short, long)]
        output: PathBuf,

        /// Full sine period length in samples
        #[arg(long, default_value = "8192")]
        period: usize,

        /// Number of ROM entries to generate
        #[arg(long, default_value = "2048")]
        size: usize,
    },
    /// Check testbench butterfly results against the golden model
    ///
    /// Examples:
    ///   fftv check --csv top_fft_pair_results.csv
    ///   fftv check --csv results.csv --tol 0 --json
    Check {
        /// Testbench results dump (pair,y0_r,y0_i,y1_r,y1_i)
        #[arg(long, default_value = "top_fft_pair_results.csv")]
        csv: PathBuf,

        /// Tolerance in fixed-point LSBs
        #[arg(long, default_value = "2")]
        tol: u64,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> VerifyResult<ExitCode> {
    match cli.command {
        Commands::Convert {
            input,
            output,
            samples,
        } => {
            let config = SampleFileConfig {
                n_samples: samples,
                ..SampleFileConfig::default()
            };
            let voltages = read_samples(&input, &config)?;

            let format = QFormat::default();
            let words: Vec<_> = voltages.iter().map(|&v| format.encode(v)).collect();
            write_mem(&output, &words)?;

            println!("wrote {} records to {}", words.len(), output.display());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Lutgen {
            output,
            period,
            size,
        } => {
            let config = LutConfig {
                n: period,
                lut_size: size,
            };
            let lut = config.generate(&QFormat::default())?;
            write_mem(&output, &lut)?;

            println!("wrote {} LUT entries to {}", lut.len(), output.display());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { csv, tol, json } => {
            let cases = read_results(&csv)?;
            let report = run_check(&cases, &RampStimulus, &CheckConfig { tolerance_lsb: tol })?;

            if json {
                println!("{}", report.to_json());
            } else {
                print!("{}", report.to_text());
            }

            Ok(if report.passed {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
