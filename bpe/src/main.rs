use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use env_logger::Env;
use log::LevelFilter;
use pairmerge::{read_text, MergeConfig, MergeOutcome, Merger, Symbolizer, DEFAULT_FIRST_ID};

#[derive(Parser, Debug)]
#[command(name = "pairmerge")]
#[command(about = "Compress text by repeatedly merging its most frequent symbol pair", long_about = None)]
#[command(version)]
struct Cli {
    /// Input text file ("-" reads stdin)
    #[arg(short, long, conflicts_with = "text", required_unless_present = "text")]
    input: Option<PathBuf>,

    /// Literal text to compress instead of a file
    #[arg(short, long)]
    text: Option<String>,

    /// Number of merge rounds
    #[arg(short = 'n', long, default_value_t = 10, allow_negative_numbers = true)]
    merges: i64,

    /// Start from UTF-8 bytes instead of code points
    #[arg(long)]
    bytes: bool,

    /// First id given to a merged symbol
    #[arg(long, default_value_t = DEFAULT_FIRST_ID)]
    first_id: u32,

    /// Print the full result as JSON
    #[arg(long)]
    json: bool,

    /// Fail if fewer merges than requested could run
    #[arg(long)]
    strict: bool,

    /// Show a progress bar
    #[arg(long)]
    progress: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity
    #[arg(short = 'q', long, action = ArgAction::Count)]
    quiet: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let text = load_text(&cli)?;
    let symbolizer = if cli.bytes {
        Symbolizer::Bytes
    } else {
        Symbolizer::CodePoints
    };
    let config = MergeConfig::new(cli.merges)?
        .with_first_id(cli.first_id)
        .with_symbolizer(symbolizer)
        .with_progress(cli.progress);

    let now = Instant::now();
    let outcome = Merger::new(config).run(&text)?;
    log::info!("merging took {:.2?}", now.elapsed());

    let outcome = if cli.strict {
        outcome.into_complete()?
    } else {
        outcome
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome);
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: u8) {
    let level = if quiet > 0 {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    builder.format_timestamp_millis();
    builder.filter_level(level);
    let _ = builder.try_init();
}

fn load_text(cli: &Cli) -> Result<String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }
    match cli.input.as_deref() {
        Some(path) if path.as_os_str() == "-" => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
        Some(path) => Ok(read_text(path)?),
        None => anyhow::bail!("either --input or --text is required"),
    }
}

fn print_outcome(outcome: &MergeOutcome) {
    let tokens: Vec<String> = outcome.ids.iter().map(|id| format!("[{}]", id)).collect();
    println!("{}", tokens.join(" "));

    for entry in outcome.vocab.iter() {
        println!("{} = {:?}", entry.id, entry.pair);
    }

    println!(
        "Merges {}/{} ({:?}), vocabulary size {}",
        outcome.rounds_completed,
        outcome.requested,
        outcome.status,
        outcome.vocab_size()
    );
    println!(
        "Compression {}/{} = {:.3}x",
        outcome.input_len,
        outcome.ids.len(),
        outcome.compression_ratio()
    );
}
