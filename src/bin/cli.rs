use anyhow::Context;
use clap::{Parser, Subcommand};
use kissbot_fuzzy_sort::{score, FilterOptions, FuzzyEngine, MatchResult, StringSlice, WeightConfig};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fuzzy-sort")]
#[command(about = "KissBot fuzzy sorter CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with weights (missing fields use defaults)
    #[arg(short, long, global = true)]
    weights: Option<PathBuf>,

    /// Override one weight, e.g. --set camel_bonus=15
    #[arg(long = "set", value_name = "KEY=VALUE", global = true, allow_hyphen_values = true)]
    overrides: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank candidates (one per line) against a query
    Sort {
        /// Search query
        query: String,

        /// Candidates file (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Also print candidates that don't match
        #[arg(short, long)]
        all: bool,

        /// Drop matches scoring below this value
        #[arg(long, allow_hyphen_values = true)]
        min_score: Option<f64>,

        /// Maximum results
        #[arg(short = 'n', long)]
        max_results: Option<usize>,

        /// Print one JSON result per line
        #[arg(long)]
        json: bool,
    },

    /// Score a single candidate against a query
    Score {
        candidate: String,
        query: String,
    },

    /// Print the effective weights as JSON
    Weights,
}

fn load_weights(cli: &Cli) -> anyhow::Result<WeightConfig> {
    let mut weights = match &cli.weights {
        Some(path) => WeightConfig::from_json_file(path)
            .with_context(|| format!("Failed to load weights from {}", path.display()))?,
        None => WeightConfig::default(),
    };

    for setting in &cli.overrides {
        weights = weights.apply_override(setting)?;
    }

    tracing::debug!("Using weights: {}", weights);
    Ok(weights)
}

fn read_candidates(input: Option<&Path>) -> anyhow::Result<Vec<String>> {
    let reader: Box<dyn BufRead> = match input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut candidates = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            candidates.push(line);
        }
    }
    Ok(candidates)
}

fn print_result(result: &MatchResult, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", result.to_json()?);
    } else {
        let marker = if result.matched { ' ' } else { '-' };
        println!("{}{:>8.1}  {}", marker, result.score, result.sort_key);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let weights = load_weights(&cli)?;

    match cli.command {
        Commands::Sort {
            query,
            input,
            all,
            min_score,
            max_results,
            json,
        } => {
            let candidates = read_candidates(input.as_deref())?;
            tracing::info!("🔍 Ranking {} candidates against {:?}", candidates.len(), query);

            let engine = FuzzyEngine::new(weights).with_options(FilterOptions {
                min_score,
                max_results,
            });

            if all {
                let mut candidates = candidates;
                let results = engine.rank(&mut StringSlice(&mut candidates), &query);
                let limit = max_results.unwrap_or(results.len());
                for result in results.iter().take(limit) {
                    print_result(result, json)?;
                }
            } else {
                let kept = engine.filter_strings(candidates, &query);
                if kept.is_empty() {
                    tracing::warn!("No candidates match {:?}", query);
                }
                for ranked in &kept {
                    print_result(&ranked.result, json)?;
                }
            }
        }

        Commands::Score { candidate, query } => {
            let result = score(&candidate, &query, &weights);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::Weights => {
            println!("{}", serde_json::to_string_pretty(&weights)?);
        }
    }

    Ok(())
}
