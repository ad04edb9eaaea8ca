mod cli_main;

use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use cli_main::{Cli, Commands};
use kmerscope::io::fasta::read_sequence;
use kmerscope::{composition, predict_function, search_kmer, AnalyzerConfig, KmerError};

fn emit<T: Serialize + std::fmt::Display>(value: &T, json: bool) -> Result<(), KmerError> {
    if json {
        let text = serde_json::to_string_pretty(value).map_err(|e| KmerError::Config(e.to_string()))?;
        println!("{}", text);
    } else {
        println!("{}", value);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), KmerError> {
    let cfg = match &cli.config {
        Some(path) => AnalyzerConfig::from_json_file(path)?,
        None => AnalyzerConfig::default(),
    };

    match cli.command {
        Commands::Load { input } => {
            let sequence = read_sequence(&input)?;
            if cli.json {
                println!("{}", serde_json::json!({ "length": sequence.len() }));
            } else {
                println!("Sequence loaded successfully!\n\nLength: {}", sequence.len());
            }
        }
        Commands::Search { input, kmer } => {
            let sequence = read_sequence(&input)?;
            let result = search_kmer(&sequence, &kmer, &cfg)?;
            emit(&result, cli.json)?;
        }
        Commands::Predict { input, k } => {
            let cfg = match k {
                Some(k) => cfg.with_embedding_k(k),
                None => cfg,
            };
            cfg.validate()?;
            let sequence = read_sequence(&input)?;
            let start = std::time::Instant::now();
            let prediction = predict_function(&sequence, &cfg)?;
            info!("Prediction completed in {:.2}s", start.elapsed().as_secs_f32());
            emit(&prediction, cli.json)?;
        }
        Commands::Gc { input } => {
            let sequence = read_sequence(&input)?;
            emit(&composition(&sequence)?, cli.json)?;
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Setting tracing default failed");

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
