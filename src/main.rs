//! Checkout Simulator CLI
//!
//! Replays a CSV batch of payment form submissions through the simulated
//! checkout flow and prints a transaction summary.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- submissions.csv > transactions.csv
//! cargo run -- submissions.csv --receipts-dir receipts/ --no-delay
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use checkout_sim::{CheckoutEngine, CheckoutError, Delays, Result};
use std::env;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

struct Options {
    input_path: String,
    receipts_dir: Option<PathBuf>,
    delays: Delays,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut input_path = None;
    let mut receipts_dir = None;
    let mut delays = Delays::default();

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--no-delay" => delays = Delays::none(),
            "--receipts-dir" => {
                let dir = iter.next().ok_or_else(|| CheckoutError::MissingFlagValue {
                    flag: "--receipts-dir".to_string(),
                })?;
                receipts_dir = Some(PathBuf::from(dir));
            }
            flag if flag.starts_with("--") => {
                return Err(CheckoutError::UnknownFlag {
                    flag: flag.to_string(),
                });
            }
            path if input_path.is_none() => input_path = Some(path.to_string()),
            extra => {
                return Err(CheckoutError::UnknownFlag {
                    flag: extra.to_string(),
                });
            }
        }
    }

    Ok(Options {
        input_path: input_path.ok_or(CheckoutError::MissingArgument)?,
        receipts_dir,
        delays,
    })
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let options = parse_args(&args)?;

    let file = File::open(&options.input_path)?;
    let reader = BufReader::new(file);

    let mut engine = CheckoutEngine::with_delays(options.delays);
    engine.process_csv(reader)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    engine.write_output(handle)?;

    if let Some(dir) = options.receipts_dir {
        fs::create_dir_all(&dir)?;
        engine.write_receipts(&dir)?;
    }

    Ok(())
}
