use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "dequarantine",
    about = "Remove the com.apple.quarantine attribute from files",
    version
)]
pub struct Cli {
    /// Files to process directly. With no paths, the drop-target window opens.
    pub paths: Vec<PathBuf>,
}
