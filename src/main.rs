use cfg_if::cfg_if;
use clap::Parser;
use env_logger::Env;
use log::{debug, info};
use std::path::PathBuf;
use thiserror::Error;

mod cli;
#[cfg(feature = "gui")]
mod gui;
mod libpanelik;

use crate::libpanelik::cards::Catalog;
use crate::libpanelik::editor::{LogSink, QuizBoard};
use crate::libpanelik::fixtures::{self, Dataset, FixtureError};

#[derive(Parser, Debug)]
#[command(name = "Panelik")]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "error")]
    log_level: String,
    /// Dataset JSON to show instead of the built-in cards and quizzes.
    #[arg(short, long, value_name = "FILE")]
    fixtures: Option<PathBuf>,
    #[arg(short, long, default_value_t = fixtures::DEFAULT_SEED)]
    seed: u64,
    /// Use the terminal instead of opening a window.
    #[arg(short, long, default_value = "false")]
    text: bool,
}

#[derive(Debug, Error)]
enum Error {
    #[error(transparent)]
    Fixtures(#[from] FixtureError),
    #[cfg(feature = "gui")]
    #[error("cannot open window")]
    Gui(#[from] eframe::Error),
}

fn load_dataset(args: &Args) -> Result<Dataset, Error> {
    let dataset = match &args.fixtures {
        Some(path) => Dataset::load(path)?,
        None => fixtures::seeded(args.seed),
    };
    info!(
        "[Setup] {} cards, {} quizzes",
        dataset.cards.len(),
        dataset.quizzes.len()
    );
    Ok(dataset)
}

fn run_text(dataset: Dataset) -> Result<(), Error> {
    let catalog = Catalog::new(dataset.cards);
    let mut board = QuizBoard::new(dataset.quizzes, LogSink);
    cli::cli_loop(std::io::stdin().lock(), &catalog, &mut board);
    Ok(())
}

cfg_if! {
    if #[cfg(feature = "gui")] {
        fn run(text: bool, dataset: Dataset) -> Result<(), Error> {
            if text {
                run_text(dataset)
            } else {
                gui::init_gui(dataset)
            }
        }
    } else {
        fn run(text: bool, dataset: Dataset) -> Result<(), Error> {
            if !text {
                debug!("[Setup] Built without `gui`, using the terminal.");
            }
            run_text(dataset)
        }
    }
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.as_str())).init();
    debug!("[Setup] {:?}", args);

    let dataset = load_dataset(&args)?;

    run(args.text, dataset)
}
