//! README section replacement
//!
//! The document is treated as opaque text. Each generated fragment replaces
//! the span matched by one narrowly anchored pattern; a pattern that does not
//! match leaves the document as it is. A difficulty section keeps the user's
//! own heading line; only the body under it is regenerated.

use crate::error::CliError;
use crate::fragments::{self, STATS_HEADING, TREE_HEADER};
use regex::{Captures, NoExpand, Regex};
use std::sync::LazyLock;

static BADGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Problems%20Solved-\d+").unwrap());

// Runs up to the wrapper's closing tag; a heading or other HTML line first means no block
static STATS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?m)^{}\n(?:(?:[^#<\n][^\n]*)?\n)*?</div>",
        regex::escape(STATS_HEADING)
    ))
    .unwrap()
});

static TREE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?s)(```[^\n]*\n){}\n(?:.*?\n)?```",
        regex::escape(TREE_HEADER)
    ))
    .unwrap()
});

static DATE_STAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Last updated: <strong>[^<\n]*</strong>").unwrap());

static BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Everything the patcher writes into the document
#[derive(Debug, Clone)]
pub struct Rendered {
    pub total: usize,
    pub stats_block: String,
    pub tree: String,
    /// Problem table (or placeholder) per well-known label, in label order
    pub tables: Vec<(u32, String)>,
    /// Month stamp such as `October 2026`
    pub date: String,
}

/// Patched text plus which sections were found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patched {
    pub text: String,
    pub updated: Vec<String>,
    pub inserted: Vec<String>,
    pub missing: Vec<String>,
}

impl Patched {
    fn record(&mut self, section: impl Into<String>, found: bool) {
        let section = section.into();
        if found {
            tracing::debug!("Updated section: {}", section);
            self.updated.push(section);
        } else {
            tracing::debug!("Section not found, left unchanged: {}", section);
            self.missing.push(section);
        }
    }
}

/// Apply every substitution to `document` in a fixed order
pub fn patch(document: &str, rendered: &Rendered) -> Result<Patched, CliError> {
    let mut out = Patched::default();
    let mut text = document.to_string();

    let found = BADGE.is_match(&text);
    text = BADGE
        .replace_all(&text, NoExpand(&format!("Problems%20Solved-{}", rendered.total)))
        .into_owned();
    out.record("badge", found);

    let found = STATS.is_match(&text);
    text = STATS
        .replace(&text, NoExpand(&format!("{}\n\n</div>", rendered.stats_block)))
        .into_owned();
    out.record("statistics", found);

    text = patch_difficulty_sections(text, &rendered.tables, &mut out)?;

    let found = TREE.is_match(&text);
    text = TREE
        .replace(&text, |caps: &Captures| {
            format!("{}{}\n```", &caps[1], rendered.tree)
        })
        .into_owned();
    out.record("tree", found);

    let found = DATE_STAMP.is_match(&text);
    text = DATE_STAMP
        .replace_all(
            &text,
            NoExpand(&format!("Last updated: <strong>{}</strong>", rendered.date)),
        )
        .into_owned();
    out.record("date", found);

    out.text = normalize_blank_lines(&text);
    Ok(out)
}

/// Pattern for the section under a label's heading
///
/// The section ends before the next heading, HTML block or rule line.
fn section_pattern(label: u32) -> Result<Regex, CliError> {
    let pattern = format!(
        r"(?m)^(### [^\n]*\b{}-Rated Problems[^\n]*)(?:\n(?:[^#<\-\n][^\n]*)?)*",
        label
    );
    Ok(Regex::new(&pattern)?)
}

fn render_section(heading: &str, table: &str) -> String {
    format!("{}\n\n{}\n\n", heading, table)
}

/// Replace each difficulty section, inserting a missing one after its predecessor
fn patch_difficulty_sections(
    mut text: String,
    tables: &[(u32, String)],
    out: &mut Patched,
) -> Result<String, CliError> {
    let mut previous: Option<Regex> = None;

    for (label, table) in tables {
        let section = section_pattern(*label)?;
        let name = format!("{}-rated", label);

        if section.is_match(&text) {
            text = section
                .replace(&text, |caps: &Captures| render_section(&caps[1], table))
                .into_owned();
            out.record(name, true);
        } else if let Some(anchor) = previous
            .as_ref()
            .and_then(|p| p.find(&text))
            .map(|m| m.end())
        {
            let heading = fragments::difficulty_heading(*label);
            text.insert_str(anchor, &render_section(&heading, table));
            tracing::debug!("Inserted section: {}", name);
            out.inserted.push(name);
        } else {
            out.record(name, false);
            // Without its own section there is no anchor for the next label
            previous = None;
            continue;
        }

        previous = Some(section);
    }

    Ok(text)
}

/// Collapse runs of blank lines and end the text with one newline
fn normalize_blank_lines(text: &str) -> String {
    let collapsed = BLANK_RUNS.replace_all(text, "\n\n");
    let trimmed = collapsed.trim_end_matches('\n');
    if trimmed.is_empty() {
        return String::new();
    }
    format!("{}\n", trimmed)
}
