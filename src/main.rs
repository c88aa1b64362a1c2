//! Letterforge - CLI
//!
//! Letter-pool word builder with TUI and CLI modes: pool management,
//! formability checks, and exhaustive permutation expansion.

use anyhow::Result;
use clap::{Parser, Subcommand};
use letterforge::{
    commands::{check_word, expand_words, run_bench, run_simple},
    output::{print_bench_result, print_check_result, print_expand_result},
};

#[derive(Parser)]
#[command(
    name = "letterforge",
    about = "Letter-pool word builder with exhaustive phrase permutation",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default - live pool, words, and permutations)
    Play,

    /// Simple CLI mode (interactive builder without TUI)
    Simple,

    /// Check whether a pool of letters can form a word
    Check {
        /// Letters available, in any format
        letters: String,

        /// Word to test
        word: String,
    },

    /// Expand a list of words into every concatenation ordering
    Expand {
        /// Words to permute (repeats allowed)
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Benchmark expansion across growing word counts
    Bench {
        /// Largest word count to time (n! orderings by then)
        #[arg(short = 'n', long, default_value = "7")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(),
        Commands::Simple => run_simple().map_err(|e| anyhow::anyhow!(e)),
        Commands::Check { letters, word } => run_check_command(&letters, &word),
        Commands::Expand { words } => run_expand_command(&words),
        Commands::Bench { limit } => {
            run_bench_command(limit);
            Ok(())
        }
    }
}

fn run_check_command(letters: &str, word: &str) -> Result<()> {
    let result = check_word(letters, word).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}

fn run_expand_command(words: &[String]) -> Result<()> {
    let result = expand_words(words).map_err(|e| anyhow::anyhow!(e))?;
    print_expand_result(&result);
    Ok(())
}

fn run_bench_command(limit: usize) {
    println!("Timing exhaustive expansion up to {limit} words...");
    let result = run_bench(limit);
    print_bench_result(&result);
}

fn run_play_command() -> Result<()> {
    use letterforge::interactive::{App, run_tui};

    let app = App::new();
    run_tui(app)
}
