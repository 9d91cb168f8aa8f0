use colored::Colorize;

use crate::summary::BatchSummary;

pub fn print_banner() {
    println!(
        "{}",
        "dequarantine - remove the quarantine attribute from files"
            .bold()
            .cyan()
    );
    println!();
}

pub fn print_processing(count: usize) {
    println!(
        "{}",
        format!("Processing {count} file(s)...").bold().white()
    );
}

pub fn print_path(path: &str) {
    println!("  {}", path.dimmed());
}

pub fn print_summary(summary: &BatchSummary) {
    println!();
    if summary.has_failures() {
        println!(
            "{} {}",
            format!("{}:", summary.title()).red().bold(),
            summary.message().red()
        );
    } else {
        println!(
            "{} {}",
            format!("{}:", summary.title()).green().bold(),
            summary.message().green()
        );
    }
    println!(
        "  {} removed, {} already clean, {} failed",
        summary.removed.to_string().green(),
        summary.not_present.to_string().yellow(),
        summary.failed.to_string().red()
    );
}
