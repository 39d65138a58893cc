use colored::Colorize;
use env_logger::Env;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
mod libpanelik;
use crate::libpanelik::fixtures::{self, Dataset, FixtureError};

#[derive(Parser, Debug)]
#[command(name = "Eksporter")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the built-in dataset as JSON.
    Export {
        #[arg(short, long, default_value_t = fixtures::DEFAULT_SEED)]
        seed: u64,
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Check that a dataset JSON file can be shown.
    Check { file: PathBuf },
}

fn export(seed: u64, out: Option<PathBuf>) -> Result<(), FixtureError> {
    let dataset = fixtures::seeded(seed);
    let json = dataset.to_json()?;
    match out {
        Some(path) => {
            std::fs::write(&path, json)?;
            info!(
                "{}",
                format!(
                    "Wrote {} cards and {} quizzes to {:?}",
                    dataset.cards.len(),
                    dataset.quizzes.len(),
                    path
                )
                .green()
            );
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn check(file: PathBuf) -> Result<(), FixtureError> {
    let dataset = Dataset::load(&file)?;
    info!("{}", format!("Dataset at {:?}", file).blue());
    info!(
        "{}",
        format!("├ Cards: {}", dataset.cards.len()).blue()
    );
    for card in &dataset.cards {
        info!("{} {}", "│".blue(), format!("├ {}: {}", card.id, card.title).green());
    }
    info!(
        "{}",
        format!("└ Quizzes: {}", dataset.quizzes.len()).blue()
    );
    for quiz in &dataset.quizzes {
        info!(
            "  {}",
            format!(
                "├ {}: {} ({} questions, {})",
                quiz.id,
                quiz.title,
                quiz.questions.len(),
                quiz.status
            )
            .green()
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.as_str())).init();

    let result = match args.command {
        Commands::Export { seed, out } => export(seed, out),
        Commands::Check { file } => check(file),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(FixtureError::Invalid(problems)) => {
            for problem in problems {
                error!("{}", format!("✘ {}", problem).red().strikethrough());
            }
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("{}", format!("{}!", err).red());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exported_file_passes_check() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("panelik.json");

        export(11, Some(path.clone())).unwrap();
        check(path.clone()).unwrap();
        assert_eq!(Dataset::load(&path).unwrap(), fixtures::seeded(11));
    }

    #[test]
    fn check_rejects_duplicate_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dup.json");
        let mut dataset = fixtures::seeded(fixtures::DEFAULT_SEED);
        dataset.cards[1].id = dataset.cards[0].id.clone();
        std::fs::write(&path, dataset.to_json().unwrap()).unwrap();

        assert!(matches!(check(path), Err(FixtureError::Invalid(p)) if p.len() == 1));
    }

    #[test]
    fn check_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            check(dir.path().join("missing.json")),
            Err(FixtureError::Read(_))
        ));
    }
}
