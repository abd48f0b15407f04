//! News Bias Analyzer: binary entrypoint.
//! Runs the classification (`analyze`) or normalization (`preprocess`) batch
//! over a JSON file of article records.

use anyhow::{bail, Context, Result};
use news_bias_analyzer::{config, normalize, store, Article};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const USAGE: &str = "usage: news-bias-analyzer <analyze|preprocess> <input.json> <output.json>";

/// Compact logs by default, JSON lines with LOG_FORMAT=json.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().compact()).init();
    }
}

enum Command {
    Analyze,
    Preprocess,
}

struct Args {
    command: Command,
    input: PathBuf,
    output: PathBuf,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let command = match args.next().as_deref() {
        Some("analyze") => Command::Analyze,
        Some("preprocess") => Command::Preprocess,
        Some(other) => bail!("unknown command {other:?}\n{USAGE}"),
        None => bail!("{USAGE}"),
    };
    let (Some(input), Some(output), None) = (args.next(), args.next(), args.next()) else {
        bail!("{USAGE}");
    };
    Ok(Args {
        command,
        input: input.into(),
        output: output.into(),
    })
}

fn analyze(args: &Args) -> Result<()> {
    let classifier = config::load_config_default()?
        .build()
        .context("building classifier")?;
    let records = store::load_records(&args.input)?;
    let outcome = classifier.classify_batch(records);
    store::save_articles(&args.output, &outcome.articles)?;

    println!("{}", outcome.distribution);
    info!(output = %args.output.display(), "wrote annotated articles");
    Ok(())
}

fn preprocess(args: &Args) -> Result<()> {
    let mut articles: Vec<Article> = store::load_articles(&args.input)?;
    normalize::preprocess_batch(&mut articles);
    store::save_articles(&args.output, &articles)?;
    info!(output = %args.output.display(), "wrote preprocessed articles");
    Ok(())
}

fn main() -> ExitCode {
    // Load .env when present; no-op otherwise.
    let _ = dotenvy::dotenv();
    init_tracing();

    let result = parse_args(std::env::args().skip(1)).and_then(|args| match args.command {
        Command::Analyze => analyze(&args),
        Command::Preprocess => preprocess(&args),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = ?e, "run failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
