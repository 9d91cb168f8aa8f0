mod app;
mod cli;
mod output;
mod processor;
mod summary;
mod utils;
mod xattr;

use std::path::PathBuf;
use std::sync::mpsc;

use clap::Parser;
use eframe::egui;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = cli::Cli::parse();
    if !cli.paths.is_empty() {
        run_headless(cli.paths);
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Dequarantine")
            .with_inner_size([420.0, 300.0])
            .with_min_inner_size([320.0, 220.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Dequarantine",
        options,
        Box::new(|cc| Ok(Box::new(app::DequarantineApp::new(cc)))),
    )
}

/// Process paths given on the command line without opening a window.
fn run_headless(paths: Vec<PathBuf>) {
    output::print_banner();
    output::print_processing(paths.len());
    for path in &paths {
        output::print_path(&utils::display_path(path));
    }

    let (tx, rx) = mpsc::channel();
    processor::process_files(paths, move |summary| {
        let _ = tx.send(summary);
    });

    // The coordinator delivers exactly one summary for a non-empty batch.
    if let Ok(summary) = rx.recv() {
        output::print_summary(&summary);
        if summary.has_failures() {
            std::process::exit(1);
        }
    }
}
