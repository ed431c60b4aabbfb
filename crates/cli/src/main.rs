//! LEGv8 pipelined simulator CLI.
//!
//! This binary provides a single entry point:
//! 1. **Run:** Assemble a LEGv8 source file into memory and run it through
//!    the five-stage pipeline until it halts.
//!
//! Tracing verbosity follows `RUST_LOG` (e.g. `RUST_LOG=legv8_core=trace`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use legv8_core::config::Config;
use legv8_core::sim::{Simulator, load_program};

#[derive(Parser, Debug)]
#[command(
    name = "legsim",
    author,
    version,
    about = "LEGv8 pipelined CPU simulator",
    long_about = "Assemble a LEGv8 source file and run it on a five-stage pipelined machine.\n\nExamples:\n  legsim run -f programs/loop.s\n  legsim run -f programs/loop.s --config machine.json\n  RUST_LOG=legv8_core=trace legsim run -f programs/loop.s"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assemble a source file and run it until the pipeline halts.
    Run {
        /// LEGv8 assembly source file.
        #[arg(short, long)]
        file: PathBuf,

        /// Machine configuration file (JSON). Defaults are used if omitted.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the final execution counters as JSON instead of text.
        #[arg(long)]
        json_stats: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            file,
            config,
            json_stats,
        } => cmd_run(&file, config.as_deref(), json_stats),
    }
}

/// Loads the configuration, assembles the program, runs it, and prints the
/// final register snapshot and counters. Exits with code 1 on any error.
fn cmd_run(file: &std::path::Path, config_path: Option<&std::path::Path>, json_stats: bool) {
    let config = match config_path {
        Some(path) => load_config(path),
        None => Config::default(),
    };

    println!("[*] Assembling: {}", file.display());
    let image = load_program(file, config.memory_words).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    let sim = Simulator::new(image, &config);
    println!("[*] Running ({} memory words)", config.memory_words);
    let report = match sim.run() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("\n[!] FAULT: {e}");
            print_snapshot(&sim);
            process::exit(1);
        }
    };

    println!();
    print_snapshot(&sim);
    println!();
    if json_stats {
        match serde_json::to_string_pretty(&report.stats) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: could not serialize stats: {e}");
                process::exit(1);
            }
        }
    } else {
        let s = report.stats;
        println!(
            "Instructions: {} retired, {} fetched, {} squashed",
            s.retired, s.fetched, s.squashed
        );
        println!("Branches:     {} resolved, {} taken", s.branches, s.branches_taken);
        println!("Memory:       {} loads, {} stores", s.loads, s.stores);
        println!("Stalls:       {} hazard waits", s.hazard_waits);
    }
}

fn load_config(path: &std::path::Path) -> Config {
    let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading config {}: {e}", path.display());
        process::exit(1);
    });
    serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!("Error in config {}: {e}", path.display());
        process::exit(1);
    })
}

/// Prints the register file as four columns of `NAME VALUE` pairs.
fn print_snapshot(sim: &Simulator) {
    let snap = sim.snapshot();
    for row in snap.chunks(4) {
        let line: Vec<String> = row
            .iter()
            .map(|(name, value)| format!("{name:<10} {value}"))
            .collect();
        println!("{}", line.join("   "));
    }
}
