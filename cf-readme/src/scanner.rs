//! Local solution scanner
//!
//! Walks the `<label>_rated` directories directly under the archive root and
//! groups the recognized solution files into difficulty buckets.

use crate::filename;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Labels whose sections always exist in the README, even with no directory
pub const WELL_KNOWN_LABELS: &[u32] = &[800, 900];

/// Suffix joining a label to its directory name
pub const DIRECTORY_SUFFIX: &str = "rated";

static DIRECTORY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?i)^(\d+)_{}$", DIRECTORY_SUFFIX)).unwrap());

/// A solution file found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalSolution {
    pub contest_id: String,
    pub index: String,
    pub display_name: String,
    /// Path relative to the archive root, always `/`-separated
    pub relative_path: String,
    pub extension: String,
    pub original_filename: String,
}

impl LocalSolution {
    /// Contest id as a number, for ordering and remote matching
    pub fn contest_number(&self) -> Option<u64> {
        self.contest_id.parse().ok()
    }
}

/// Solutions for one difficulty label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    /// Directory the solutions came from (`800_rated`)
    pub directory: String,
    pub solutions: Vec<LocalSolution>,
}

impl Bucket {
    fn empty(label: u32) -> Self {
        Self {
            directory: format!("{}_{}", label, DIRECTORY_SUFFIX),
            solutions: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }
}

/// Buckets keyed by numeric label, iterated in ascending label order
pub type Buckets = BTreeMap<u32, Bucket>;

/// Scan `root` for difficulty directories and their solutions
///
/// Never fails: an unreadable root or directory is logged and contributes no
/// bucket. The well-known labels are always present in the result.
pub fn scan(root: &Path) -> Buckets {
    let mut buckets = Buckets::new();

    match fs::read_dir(root) {
        Ok(entries) => {
            let mut entries: Vec<_> = entries.flatten().collect();
            entries.sort_by_key(|e| e.file_name());
            for entry in entries {
                let Some(dir_name) = entry.file_name().to_str().map(str::to_string) else {
                    continue;
                };
                let Some(label) = difficulty_label(&dir_name) else {
                    continue;
                };
                if !entry.file_type().is_ok_and(|t| t.is_dir()) {
                    continue;
                }

                let solutions = scan_directory(&entry.path(), &dir_name);
                // Two spellings of one label (800_rated, 800_Rated) share a bucket
                buckets
                    .entry(label)
                    .or_insert_with(|| Bucket {
                        directory: dir_name.clone(),
                        solutions: Vec::new(),
                    })
                    .solutions
                    .extend(solutions);
            }
        }
        Err(e) => tracing::warn!("Cannot read {}: {}", root.display(), e),
    }

    for bucket in buckets.values_mut() {
        sort_solutions(&mut bucket.solutions);
    }
    for &label in WELL_KNOWN_LABELS {
        buckets.entry(label).or_insert_with(|| Bucket::empty(label));
    }

    for (label, bucket) in &buckets {
        tracing::info!("{}: {} solution(s) in {}", label, bucket.len(), bucket.directory);
    }

    buckets
}

/// Label encoded in a directory name such as `800_rated`
fn difficulty_label(dir_name: &str) -> Option<u32> {
    DIRECTORY_PATTERN
        .captures(dir_name)
        .and_then(|c| c[1].parse().ok())
}

/// Parse every source file in one difficulty directory
fn scan_directory(dir: &Path, dir_name: &str) -> Vec<LocalSolution> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Cannot read {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut solutions = Vec::new();
    for entry in entries.flatten() {
        if !entry.file_type().is_ok_and(|t| t.is_file()) {
            continue;
        }
        let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if !filename::has_source_extension(&file_name) {
            continue;
        }

        match filename::parse(&file_name) {
            Some(parsed) => solutions.push(LocalSolution {
                contest_id: parsed.contest_id,
                index: parsed.index,
                display_name: parsed.display_name,
                relative_path: format!("{}/{}", dir_name, file_name),
                extension: parsed.extension,
                original_filename: file_name,
            }),
            None => tracing::warn!("Unrecognized filename skipped: {}/{}", dir_name, file_name),
        }
    }
    solutions
}

/// Order by numeric contest id, then index, then filename for a stable result
fn sort_solutions(solutions: &mut [LocalSolution]) {
    solutions.sort_by(|a, b| {
        a.contest_number()
            .cmp(&b.contest_number())
            .then_with(|| a.index.cmp(&b.index))
            .then_with(|| a.original_filename.cmp(&b.original_filename))
    });
}
