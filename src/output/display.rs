//! Display functions for command results

use super::formatters::{comma_letters, human_duration, ratio_bar, spaced_letters};
use crate::commands::{BenchResult, CheckResult, ExpandResult};
use colored::Colorize;

/// Print the result of a formability check
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "FORMABILITY CHECK:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Pool: {}", spaced_letters(&result.pool_before));

    if result.formable {
        println!("\n{}", "✅ The pool can form it!".green().bold());
        match result.pool_after.as_deref() {
            Some("") | None => println!("   Left over:  (nothing, a perfect fit)"),
            Some(rest) => println!("   Left over:  {}", spaced_letters(rest)),
        }
    } else {
        println!("\n{}", "❌ The pool cannot form it".red().bold());
        println!(
            "   Missing:    {}",
            comma_letters(&result.missing).bright_yellow()
        );
    }
}

/// Print the result of a one-shot expansion
pub fn print_expand_result(result: &ExpandResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "EXPANSIONS:".bright_cyan().bold(),
        result
            .words
            .join(" + ")
            .to_uppercase()
            .bright_yellow()
            .bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n🔀 {} {} of {} {} in {}:\n",
        result.expansions.len().to_string().bright_yellow().bold(),
        if result.expansions.len() == 1 {
            "ordering"
        } else {
            "orderings"
        },
        result.words.len(),
        if result.words.len() == 1 {
            "word"
        } else {
            "words"
        },
        human_duration(result.duration)
    );

    for expansion in &result.expansions {
        println!("   {expansion}");
    }
}

/// Print the result of a benchmark
pub fn print_bench_result(result: &BenchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "EXPANSION BENCHMARK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let slowest = result
        .rows
        .iter()
        .map(|row| row.duration.as_secs_f64())
        .fold(0.0, f64::max);

    println!("\n📊 {}", "Orderings per word count:".bright_cyan().bold());
    for row in &result.rows {
        let bar = ratio_bar(row.duration.as_secs_f64(), slowest, 24);
        println!(
            "   {:>2} words  [{}] {} in {:>9}  ({:.0}/s)",
            row.word_count,
            bar.green(),
            format!("{:>10}", row.orderings).bright_yellow(),
            human_duration(row.duration),
            row.orderings_per_second
        );
    }

    let all_match = result.rows.iter().all(|row| row.orderings == row.expected);
    if all_match {
        println!(
            "\n{}",
            "✅ Every ordering count matches its factorial".green().bold()
        );
    } else {
        println!(
            "\n{}",
            "❌ An ordering count disagrees with its factorial!"
                .red()
                .bold()
        );
    }

    println!(
        "   Total time:       {:.2}s",
        result.total_duration.as_secs_f64()
    );
}
