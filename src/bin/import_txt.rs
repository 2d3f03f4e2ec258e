// src/bin/import_txt.rs

use std::path::PathBuf;

use clap::Parser;
use problem_drill::{batch, config::Config, error::AppError, store::QuestionStore};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Converts directories of `.txt` question banks into the JSON store files.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory of objective (#CHOICE / #JUDGE) banks
    #[arg(long)]
    objective_dir: Option<PathBuf>,

    /// Directory of subjective (#SUBJECTIVE) banks
    #[arg(long)]
    subjective_dir: Option<PathBuf>,

    /// Store directory, defaults to DATA_DIR or `data`
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Append to the existing banks instead of replacing them
    #[arg(long)]
    append: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let mut config = Config::from_env();
    if let Some(data_dir) = args.data_dir.clone() {
        config.data_dir = data_dir;
    }

    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.rust_log))
        .with(fmt::layer().with_target(false))
        .init();

    if let Err(e) = run(&args, &config).await {
        tracing::error!("Import failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: &Args, config: &Config) -> Result<(), AppError> {
    let store = QuestionStore::new(config);

    if let Some(dir) = &args.objective_dir {
        let questions = batch::objective_from_dir(dir)?;
        let count = questions.len();
        if args.append {
            store.add_objective(questions).await?;
        } else {
            store.replace_objective(&questions).await?;
        }
        tracing::info!("Wrote {} objective questions to {}", count, config.objective_path().display());
    }

    if let Some(dir) = &args.subjective_dir {
        let questions = batch::subjective_from_dir(dir)?;
        let count = questions.len();
        if args.append {
            store.add_subjective(questions).await?;
        } else {
            store.replace_subjective(&questions).await?;
        }
        tracing::info!("Wrote {} subjective questions to {}", count, config.subjective_path().display());
    }

    Ok(())
}
