//! Solution filename recognition

use itertools::Itertools;
use regex::Regex;
use std::sync::LazyLock;

/// Source extensions accepted in difficulty directories
pub const SOURCE_EXTENSIONS: &[&str] = &["cpp", "c", "py", "java", "rs"];

/// Accepted naming conventions, tried in order; first match wins
///
/// Each pattern captures `id`, `index`, optional `name` and `ext`.
static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let ext = SOURCE_EXTENSIONS.join("|");
    [
        // 4A-Watermelon.cpp
        r"^(?P<id>\d+)(?P<index>[A-Z]\d?)-(?P<name>.+)\.(?P<ext>EXT)$",
        // 4A_Watermelon.cpp
        r"^(?P<id>\d+)(?P<index>[A-Z]\d?)_(?P<name>.+)\.(?P<ext>EXT)$",
        // 4A.cpp
        r"^(?P<id>\d+)(?P<index>[A-Z]\d?)\.(?P<ext>EXT)$",
    ]
    .iter()
    .map(|p| Regex::new(&p.replace("EXT", &ext)).unwrap())
    .collect()
});

/// Fields recovered from a recognized solution filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFilename {
    pub contest_id: String,
    pub index: String,
    pub display_name: String,
    pub extension: String,
}

/// Whether `filename` carries one of the accepted source extensions
pub fn has_source_extension(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .is_some_and(|(_, ext)| SOURCE_EXTENSIONS.contains(&ext))
}

/// Parse a solution filename, `None` if it follows no accepted convention
pub fn parse(filename: &str) -> Option<ParsedFilename> {
    let captures = PATTERNS.iter().find_map(|re| re.captures(filename))?;

    let contest_id = captures["id"].to_string();
    let index = captures["index"].to_string();
    let display_name = match captures.name("name") {
        Some(name) => normalize_name(name.as_str()),
        None => String::new(),
    };
    // A name made only of separators falls back to the problem id
    let display_name = if display_name.is_empty() {
        format!("{}{}", contest_id, index)
    } else {
        display_name
    };

    Some(ParsedFilename {
        contest_id,
        index,
        display_name,
        extension: captures["ext"].to_string(),
    })
}

/// Replace `_` and `-` with spaces and collapse whitespace
fn normalize_name(raw: &str) -> String {
    raw.replace(['_', '-'], " ").split_whitespace().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_underscore_convention() {
        let parsed = parse("71A_Way_Too_Long_Words.cpp").unwrap();
        assert_eq!(parsed.contest_id, "71");
        assert_eq!(parsed.index, "A");
        assert_eq!(parsed.display_name, "Way Too Long Words");
        assert_eq!(parsed.extension, "cpp");
    }

    #[test]
    fn test_dash_convention() {
        let parsed = parse("1520B1-Ordinary-Numbers.py").unwrap();
        assert_eq!(parsed.contest_id, "1520");
        assert_eq!(parsed.index, "B1");
        assert_eq!(parsed.display_name, "Ordinary Numbers");
        assert_eq!(parsed.extension, "py");
    }

    #[test]
    fn test_dash_pattern_has_priority() {
        // Both separators present; the character after the index decides
        let parsed = parse("4A-Water_melon.rs").unwrap();
        assert_eq!(parsed.index, "A");
        assert_eq!(parsed.display_name, "Water melon");

        let parsed = parse("4A_Water-melon.rs").unwrap();
        assert_eq!(parsed.display_name, "Water melon");
    }

    #[test]
    fn test_bare_id() {
        let parsed = parse("339A.java").unwrap();
        assert_eq!(parsed.contest_id, "339");
        assert_eq!(parsed.index, "A");
        assert_eq!(parsed.display_name, "339A");
    }

    #[test]
    fn test_separator_only_name_falls_back_to_id() {
        let parsed = parse("4A__.c").unwrap();
        assert_eq!(parsed.display_name, "4A");
    }

    #[test]
    fn test_unrecognized() {
        assert!(parse("README.md").is_none());
        assert!(parse("Watermelon.cpp").is_none());
        assert!(parse("4a_watermelon.cpp").is_none());
        assert!(parse("4A_Watermelon.txt").is_none());
        assert!(parse("4A Watermelon.cpp").is_none());
        assert!(parse("4A_Watermelon.cpp.bak").is_none());
    }

    #[test]
    fn test_has_source_extension() {
        assert!(has_source_extension("4A_Watermelon.cpp"));
        assert!(has_source_extension("notes.py"));
        assert!(!has_source_extension("README.md"));
        assert!(!has_source_extension("Makefile"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_accepted_names_round_trip_fields(
            contest_id in "[1-9][0-9]{0,4}",
            index in "[A-Z][1-9]?",
            words in prop::collection::vec("[A-Za-z0-9]{1,8}", 1..5),
            name_sep in prop::sample::select(vec!["_", "-"]),
            lead_sep in prop::sample::select(vec!["_", "-"]),
            ext in prop::sample::select(SOURCE_EXTENSIONS.to_vec()),
        ) {
            let filename = format!(
                "{}{}{}{}.{}",
                contest_id, index, lead_sep, words.join(name_sep), ext
            );
            let parsed = parse(&filename);
            prop_assert!(parsed.is_some(), "{} should be recognized", filename);

            let parsed = parsed.unwrap();
            prop_assert_eq!(&parsed.contest_id, &contest_id);
            prop_assert_eq!(&parsed.index, &index);
            prop_assert_eq!(&parsed.extension, ext);
            prop_assert!(!parsed.display_name.contains(['_', '-']));
            prop_assert_eq!(parsed.display_name, words.join(" "));
        }
    }
}
