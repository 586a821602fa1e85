//! Markdown fragments spliced into the README

use crate::scanner::{Bucket, Buckets, LocalSolution, WELL_KNOWN_LABELS};
use crate::stats::StatsSnapshot;
use cf_http_client::{RemoteProblem, problem_url};
use itertools::Itertools;

/// Number of cells in a progress bar
pub const PROGRESS_CAP: usize = 5;

/// Files listed per directory before the tree is elided
pub const TREE_FILE_LIMIT: usize = 10;

/// Tags shown per table row
pub const TAG_LIMIT: usize = 3;

/// Tag used when nothing better is known about a problem
pub const DEFAULT_TAG: &str = "implementation";

/// First line of the fenced directory tree
pub const TREE_HEADER: &str = "📦 Codeforces-Solutions";

/// Heading of the statistics block
pub const STATS_HEADING: &str = "### 🏆 Statistics Dashboard";

/// Table body for a difficulty with no solutions yet
pub const COMING_SOON: &str = "*🚧 Coming soon...*";

/// Files always listed at the end of the tree
const ROOT_FILES: &[&str] = &["README.md", "update_readme.py"];

const FILLED: &str = "🟩";
const EMPTY: &str = "⬜";

const BRANCH: &str = "├── ";
const LEAF: &str = "└── ";
const PIPE: &str = "│   ";
const GAP: &str = "    ";

/// `count` filled cells followed by the remaining empty cells
pub fn progress_bar(count: usize) -> String {
    let filled = count.min(PROGRESS_CAP);
    format!(
        "{}{}",
        FILLED.repeat(filled),
        EMPTY.repeat(PROGRESS_CAP - filled)
    )
}

/// Section heading for a difficulty label
pub fn difficulty_heading(label: u32) -> String {
    let marker = match label {
        800 => "🟢",
        900 => "🔵",
        _ => "🟣",
    };
    format!("### {} {}-Rated Problems", marker, label)
}

/// Statistics heading and table
pub fn stats_block(stats: &StatsSnapshot) -> String {
    let mut lines = vec![
        STATS_HEADING.to_string(),
        String::new(),
        "| Metric | Count | Progress |".to_string(),
        "|--------|-------|----------|".to_string(),
        format!(
            "| **Total Problems** | {} | {} |",
            stats.total,
            progress_bar(stats.total)
        ),
    ];

    for &label in WELL_KNOWN_LABELS {
        let count = stats.count(label);
        let status = if count > 0 { "✅" } else { "⏳" };
        lines.push(format!("| **{}-Rated** | {} | {} |", label, count, status));
    }

    lines.join("\n")
}

/// Directory listing rendered inside the README's fenced tree block
///
/// Only non-empty buckets appear. Returns the lines between the fences.
pub fn directory_tree(buckets: &Buckets) -> String {
    let mut lines = vec![TREE_HEADER.to_string()];

    let visible: Vec<&Bucket> = buckets.values().filter(|b| !b.is_empty()).collect();
    for (i, bucket) in visible.iter().enumerate() {
        let last_bucket = i + 1 == visible.len();
        let (connector, prefix) = if last_bucket {
            (LEAF, GAP)
        } else {
            (BRANCH, PIPE)
        };
        lines.push(format!("{}📂 {}", connector, bucket.directory));

        let shown = bucket.solutions.len().min(TREE_FILE_LIMIT);
        for (j, solution) in bucket.solutions.iter().take(shown).enumerate() {
            let connector = if j + 1 == shown { LEAF } else { BRANCH };
            lines.push(format!(
                "{}{}{}",
                prefix, connector, solution.original_filename
            ));
        }
        if bucket.solutions.len() > shown {
            lines.push(format!(
                "{}{}... and {} more",
                prefix,
                GAP,
                bucket.solutions.len() - shown
            ));
        }
    }

    lines.extend(ROOT_FILES.iter().map(|f| format!("📄 {}", f)));
    lines.join("\n")
}

/// Problem table for one difficulty, or the placeholder when it is empty
pub fn problem_table(problems: &[RemoteProblem], buckets: &Buckets, label: u32) -> String {
    let Some(bucket) = buckets.get(&label).filter(|b| !b.is_empty()) else {
        return COMING_SOON.to_string();
    };

    let mut lines = vec![
        "| # | Problem | Difficulty | Status | Solution | Tags |".to_string(),
        "|---|---------|------------|--------|----------|------|".to_string(),
    ];

    for (n, solution) in bucket.solutions.iter().enumerate() {
        let (title, url, tags) = match find_remote(problems, solution) {
            Some(problem) => (
                format!("{}{} - {}", problem.contest_id, problem.index, problem.name),
                problem.url.clone(),
                format_tags(&problem.tags),
            ),
            None => (
                format!(
                    "{}{} - {}",
                    solution.contest_id, solution.index, solution.display_name
                ),
                problem_url(&solution.contest_id, &solution.index),
                format_tags(&[]),
            ),
        };

        lines.push(format!(
            "| {} | [{}]({}) | {} | ✅ Solved | [📝 Code](./{}) | {} |",
            n + 1,
            title,
            url,
            label,
            solution.relative_path,
            tags
        ));
    }

    lines.join("\n")
}

/// Remote problem with the same `(contest_id, index)` as a local solution
fn find_remote<'a>(
    problems: &'a [RemoteProblem],
    solution: &LocalSolution,
) -> Option<&'a RemoteProblem> {
    let contest_id = solution.contest_number()?;
    problems
        .iter()
        .find(|p| p.contest_id == contest_id && p.index == solution.index)
}

/// First few tags as inline code, or the default tag
fn format_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        return format!("`{}`", DEFAULT_TAG);
    }
    tags.iter()
        .take(TAG_LIMIT)
        .map(|t| format!("`{}`", t))
        .join(", ")
}
