//! Page-replacement simulator CLI.
//!
//! This binary assembles a run configuration from the command line, loads
//! the trace file, replays it through the selected policy, and prints the
//! five-line report to stdout. Diagnostics go to stderr (enable with
//! `RUST_LOG`, e.g. `RUST_LOG=vmsim_core=debug`), so stdout stays
//! machine-readable.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vmsim_core::{Algorithm, Config, Simulator, Trace};

#[derive(Parser, Debug)]
#[command(
    name = "vmsim",
    version,
    about = "Trace-driven virtual-memory page-replacement simulator",
    long_about = "Replay a memory reference trace against a fixed number of physical frames\n\
                  and report accesses, page faults, and write-backs for one replacement\n\
                  algorithm.\n\n\
                  Examples:\n  \
                  vmsim -n 8 -a clock gcc.trace\n  \
                  vmsim -n 16 -a aging -r 5 gcc.trace\n  \
                  vmsim -n 16 -a work -r 10 -t 50 gcc.trace"
)]
struct Cli {
    /// Number of frames in physical memory.
    #[arg(short = 'n', long = "numframes")]
    numframes: usize,

    /// Eviction algorithm: opt, clock, aging, or work.
    #[arg(short = 'a', long = "algorithm")]
    algorithm: Algorithm,

    /// Refresh interval in accesses (aging and work).
    #[arg(short = 'r', long = "refresh")]
    refresh: Option<u64>,

    /// Working-set window in accesses (work only).
    #[arg(short = 't', long = "tau")]
    tau: Option<u64>,

    /// Memory reference trace to replay.
    tracefile: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config {
        frames: cli.numframes,
        algorithm: cli.algorithm,
        refresh: cli.refresh,
        tau: cli.tau,
    };
    if let Err(err) = config.validate() {
        eprintln!("vmsim: {err}");
        process::exit(1);
    }

    let trace = match Trace::load(&cli.tracefile) {
        Ok(trace) => trace,
        Err(err) => {
            eprintln!("vmsim: {err}");
            process::exit(1);
        }
    };

    let mut simulator = match Simulator::new(&config, &trace) {
        Ok(simulator) => simulator,
        Err(err) => {
            eprintln!("vmsim: {err}");
            process::exit(1);
        }
    };

    match simulator.run(&trace) {
        Ok(report) => println!("{report}"),
        Err(err) => {
            eprintln!("vmsim: simulation aborted: {err}");
            process::exit(1);
        }
    }
}
