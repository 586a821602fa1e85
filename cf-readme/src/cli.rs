//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Codeforces archive README updater
#[derive(Parser, Debug)]
#[command(
    name = "cf-readme",
    about = "Sync a Codeforces solutions README with your submissions and local files",
    version
)]
pub struct Args {
    /// Codeforces handle whose accepted submissions are fetched
    pub handle: String,

    /// Archive root containing README.md and the <rating>_rated directories
    #[arg(default_value = ".")]
    pub root: PathBuf,
}
