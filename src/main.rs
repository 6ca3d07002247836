use clap::Parser;
use std::process::ExitCode;
use std::time::Instant;

use rackfit::solver::{self, SolveStatus};
use rackfit::trie::DictionaryIndex;
use rackfit::word_list::WordList;

/// Rackfit letter-rack word finder
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// The pattern to solve: whitespace-separated segments, each either a
    /// bare letter run ("act") or "<length>:<letters>" ("3:acts")
    pattern: String,

    /// Path to the word list file (plain text; words split on non-letters)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    word_list: String,

    /// Maximum number of results to return
    #[arg(short = 'n', long, default_value_t = 100)]
    num_results_requested: usize,
}

/// Entry point of the rackfit CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("RACKFIT_DEBUG").is_ok();
    rackfit::log::init_logger(debug_enabled);

    log::debug!("Starting rackfit solver");

    if let Err(e) = try_main() {
        // Print the error message to stderr, with detailed formatting if it's a SolverError
        if let Some(solver_err) = e.downcast_ref::<solver::SolverError>() {
            eprintln!("Error: {}", solver_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the rackfit CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load and tokenize the word list, then build the length-sharded index.
/// 3. Solve the given pattern against the index.
/// 4. Print each match on stdout.
/// 5. Print performance metrics (timings, counts) on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // 1. Load the word list and build the index
    let t_load = Instant::now();
    let word_list = WordList::load_from_path(&cli.word_list)?;
    let index = DictionaryIndex::build(&word_list.words);
    let load_secs = t_load.elapsed().as_secs_f64();

    // 2. Solve the pattern against the index
    let t_solve = Instant::now();
    let result = solver::solve_pattern(&cli.pattern, &index, cli.num_results_requested)?;
    let solve_secs = t_solve.elapsed().as_secs_f64();

    // 3. Print each match on stdout
    for word in &result.matches {
        println!("{word}");
    }

    match result.status {
        SolveStatus::TimedOut { elapsed } => {
            eprintln!(
                "⚠️  Timed out after {:.1}s; some matches may not have been returned",
                elapsed.as_secs_f64()
            );
        }
        SolveStatus::FoundEnough => {
            eprintln!(
                "✓ Stopped after finding {}/{} requested matches",
                result.matches.len(),
                cli.num_results_requested
            );
        }
        SolveStatus::SearchExhausted => {
            eprintln!("✓ Search space exhausted (no more matches)");
        }
    }

    // 4. Print diagnostics (word count, timings, number of results) to stderr
    eprintln!(
        "Indexed {} words in {:.3}s; solved in {:.3}s ({} matches).",
        word_list.words.len(),
        load_secs,
        solve_secs,
        result.matches.len()
    );

    Ok(())
}
