use auc_rs::io::load_samples;
use auc_rs::{compute_auc, AucError, LabelCounts};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Exit status when the input file cannot be loaded.
const EXIT_INPUT: i32 = 1;
/// Exit status when every ground truth is 0.
const EXIT_ALL_NEGATIVES: i32 = 3;
/// Exit status when every ground truth is 1.
const EXIT_ALL_POSITIVES: i32 = 4;

#[derive(Parser)]
#[command(
    name = "calc-auc",
    version,
    about = "Calculate ROC AUC from a file of ground_truth,prediction lines",
    after_help = "Input file lines look like:\n  0, 0.1\n  0, 3\n  1, 0.8"
)]
struct Cli {
    /// Text file with one `ground_truth,prediction` record per line
    input_file: PathBuf,

    /// Quiet mode (no informational output or logs)
    #[arg(short, long)]
    quiet: bool,

    /// Print the result as a JSON object
    #[arg(long)]
    json: bool,

    /// Decimal places of the printed AUC
    #[arg(short, long, default_value_t = 6)]
    precision: usize,
}

#[derive(Serialize)]
struct Report {
    samples: u64,
    positives: u64,
    negatives: u64,
    auc: f64,
}

fn init_logging(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_code(err: &AucError) -> i32 {
    match err {
        AucError::AllNegatives => EXIT_ALL_NEGATIVES,
        AucError::AllPositives => EXIT_ALL_POSITIVES,
        _ => EXIT_INPUT,
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet);
    debug!(path = %cli.input_file.display(), "loading samples");

    let mut samples = load_samples(&cli.input_file).unwrap_or_else(|e| {
        eprintln!(
            "can't open input file {}: {}",
            cli.input_file.display(),
            e
        );
        process::exit(EXIT_INPUT);
    });

    if !cli.quiet {
        eprintln!("data points read from input file: {}", samples.len());
    }

    let counts = LabelCounts::tally(&samples);
    let score = compute_auc(&mut samples).unwrap_or_else(|e| {
        debug!(?counts, "no AUC for this label mix");
        eprintln!("{}", e);
        process::exit(exit_code(&e));
    });

    if cli.json {
        let report = Report {
            samples: counts.total(),
            positives: counts.positives,
            negatives: counts.negatives,
            auc: score,
        };
        match serde_json::to_string(&report) {
            Ok(line) => println!("{}", line),
            Err(e) => {
                eprintln!("can't serialize report: {}", e);
                process::exit(EXIT_INPUT);
            }
        }
    } else {
        println!("AUC = {:.*}", cli.precision, score);
    }
}
