//! One synchronization run, from fetch to the final write

use crate::config::Config;
use crate::error::CliError;
use crate::fragments;
use crate::output::OutputFormatter;
use crate::patcher::{self, Rendered};
use crate::scanner::{self, Buckets, WELL_KNOWN_LABELS};
use crate::stats::{self, StatsSnapshot};
use cf_http_client::{CfClient, RemoteProblem};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// What a completed run did
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub document: PathBuf,
    pub stats: StatsSnapshot,
    pub remote_count: usize,
    pub inserted: Vec<String>,
    pub missing: Vec<String>,
}

/// Run every stage in order and overwrite the document once at the end
///
/// `date` is the stamp written into the document's last-updated marker.
pub fn run(
    config: &Config,
    client: &CfClient,
    date: &str,
    formatter: &OutputFormatter,
) -> Result<RunSummary, CliError> {
    let document = read_document(&config.document_path)?;

    formatter.print_step(&format!("Fetching Codeforces data for {}...", config.handle));
    let problems = fetch_remote(client, &config.handle);

    formatter.print_step("Scanning local solutions...");
    let buckets = scanner::scan(&config.root_dir);

    formatter.print_step("Generating statistics...");
    let stats = stats::aggregate(&buckets);

    formatter.print_step("Updating document...");
    let rendered = render(&problems, &buckets, &stats, date);
    let patched = patcher::patch(&document, &rendered)?;
    write_document(&config.document_path, &patched.text)?;

    Ok(RunSummary {
        document: config.document_path.clone(),
        stats,
        remote_count: problems.len(),
        inserted: patched.inserted,
        missing: patched.missing,
    })
}

/// Accepted problems for `handle`, empty when the fetch fails for any reason
pub fn fetch_remote(client: &CfClient, handle: &str) -> Vec<RemoteProblem> {
    match client.accepted_problems(handle) {
        Ok(problems) => {
            tracing::info!("Fetched {} accepted problem(s)", problems.len());
            problems
        }
        Err(e) => {
            tracing::error!("Error fetching submissions: {}", e);
            tracing::warn!("Continuing with local data only");
            Vec::new()
        }
    }
}

/// Generate every fragment the patcher needs
pub fn render(
    problems: &[RemoteProblem],
    buckets: &Buckets,
    stats: &StatsSnapshot,
    date: &str,
) -> Rendered {
    Rendered {
        total: stats.total,
        stats_block: fragments::stats_block(stats),
        tree: fragments::directory_tree(buckets),
        tables: WELL_KNOWN_LABELS
            .iter()
            .map(|&label| (label, fragments::problem_table(problems, buckets, label)))
            .collect(),
        date: date.to_string(),
    }
}

fn read_document(path: &Path) -> Result<String, CliError> {
    if !path.is_file() {
        return Err(CliError::DocumentMissing {
            path: path.to_path_buf(),
        });
    }
    Ok(fs::read_to_string(path)?)
}

/// Replace the document in one rename, keeping its permissions
///
/// A symlinked document is resolved first so the link target gets the new text.
fn write_document(path: &Path, text: &str) -> Result<(), CliError> {
    let target = fs::canonicalize(path)?;
    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let permissions = fs::metadata(&target)?.permissions();

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(text.as_bytes())?;
    tmp.as_file().set_permissions(permissions)?;
    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}
