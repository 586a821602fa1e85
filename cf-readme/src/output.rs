//! Console output for run progress and the final summary

use crate::pipeline::RunSummary;
use std::time::Instant;

/// Prints progress lines and the run summary to stdout
pub struct OutputFormatter {
    start_time: Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Announce a pipeline stage
    pub fn print_step(&self, message: &str) {
        println!("{}", message);
    }

    /// Print counts and section status after a successful run
    pub fn print_summary(&self, summary: &RunSummary) {
        println!();
        println!("✅ {} updated successfully!", summary.document.display());
        println!("📊 Total problems: {}", summary.stats.total);
        for (label, count) in &summary.stats.by_difficulty {
            println!("   {}-rated: {}", label, count);
        }
        if !summary.stats.by_language.is_empty() {
            let languages: Vec<String> = summary
                .stats
                .by_language
                .iter()
                .map(|(ext, count)| format!("{} {}", ext, count))
                .collect();
            println!("🗂  Languages: {}", languages.join(", "));
        }
        println!("🌐 Accepted on Codeforces: {}", summary.remote_count);

        if !summary.inserted.is_empty() {
            println!("➕ Sections added: {}", summary.inserted.join(", "));
        }
        if !summary.missing.is_empty() {
            println!("⚠ Sections not found: {}", summary.missing.join(", "));
        }
        println!(
            "Elapsed wall-clock time: {:.2}s",
            self.start_time.elapsed().as_secs_f64()
        );
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new()
    }
}
