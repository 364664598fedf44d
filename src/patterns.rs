//! The fixed recognizer set used by the extraction engine
//!
//! All four recognizers operate on raw text. They are compiled once and use
//! named capture groups so the assembly steps read fields by name rather than
//! by position.

use regex::Regex;
use std::sync::LazyLock;

/// Matches a public lint identifier following the declaration keyword.
///
/// Applied with search semantics: the macro invocation may wrap its arguments
/// across lines, so the scanner retries this on every line until it hits.
pub(crate) static LINT_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"pub\s+(?P<name>[A-Z_][A-Z_0-9]*)").expect("valid lint name pattern"));

/// Matches a lowercase group token of at least two characters.
pub(crate) static GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<group>[a-z_][a-z_0-9]+)").expect("valid group pattern"));

/// Matches the single aggregate configuration block and captures its interior.
pub(crate) static CONF_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"define_Conf! \{\n(?P<body>[^}]*)\n\}").expect("valid conf block pattern")
});

/// Matches one configuration entry inside the block interior: a doc-comment
/// line naming the lint, then a tuple line with the field name, quoted option
/// name, default expression, and type token.
pub(crate) static CONF_ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"/// Lint: (?P<lint>\w+)\. (?P<doc>.*)\n\s*\((?P<field>[^,]+),\s+"(?P<name>[^"]+)",\s+(?P<default>[^=)]+?)\s*=>\s+(?P<ty>.*)\),"#,
    )
    .expect("valid conf entry pattern")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lint_name_captures_identifier() {
        let caps = LINT_NAME_RE.captures("    pub APPROX_CONSTANT,").unwrap();
        assert_eq!(&caps["name"], "APPROX_CONSTANT");
    }

    #[test]
    fn test_lint_name_matches_mid_line() {
        let caps = LINT_NAME_RE
            .captures("declare_clippy_lint! { pub BOX_VEC,")
            .unwrap();
        assert_eq!(&caps["name"], "BOX_VEC");
    }

    #[test]
    fn test_lint_name_rejects_lowercase() {
        assert!(LINT_NAME_RE.captures("pub fn foo()").is_none());
    }

    #[test]
    fn test_group_captures_token() {
        let caps = GROUP_RE.captures("    correctness,").unwrap();
        assert_eq!(&caps["group"], "correctness");
    }

    #[test]
    fn test_group_needs_two_chars() {
        assert!(GROUP_RE.captures("    {").is_none());
        assert!(GROUP_RE.captures("a").is_none());
        assert!(GROUP_RE.captures("ab").is_some());
    }

    #[test]
    fn test_conf_block_captures_interior() {
        let text = "use foo;\n\ndefine_Conf! {\n    entry_one,\n    entry_two,\n}\n";
        let caps = CONF_BLOCK_RE.captures(text).unwrap();
        assert_eq!(&caps["body"], "    entry_one,\n    entry_two,");
    }

    #[test]
    fn test_conf_block_absent() {
        assert!(CONF_BLOCK_RE.captures("fn main() {}\n").is_none());
    }

    #[test]
    fn test_conf_entry_captures_all_fields() {
        let body = concat!(
            "    /// Lint: CYCLOMATIC_COMPLEXITY. The maximum complexity a function can have\n",
            "    (cyclomatic_complexity_threshold, \"cyclomatic_complexity_threshold\", 25 => u64),\n",
        );
        let caps = CONF_ENTRY_RE.captures(body).unwrap();
        assert_eq!(&caps["lint"], "CYCLOMATIC_COMPLEXITY");
        assert_eq!(
            &caps["doc"],
            "The maximum complexity a function can have"
        );
        assert_eq!(&caps["field"], "cyclomatic_complexity_threshold");
        assert_eq!(&caps["name"], "cyclomatic_complexity_threshold");
        assert_eq!(&caps["default"], "25");
        assert_eq!(&caps["ty"], "u64");
    }

    #[test]
    fn test_conf_entry_preserves_quoted_default() {
        let body = concat!(
            "    /// Lint: DOC_MARKDOWN. The prefix to strip\n",
            "    (doc_valid_idents, \"doc-valid-idents\", \"TiKV\" => String),\n",
        );
        let caps = CONF_ENTRY_RE.captures(body).unwrap();
        assert_eq!(&caps["default"], "\"TiKV\"");
        assert_eq!(&caps["ty"], "String");
    }

    #[test]
    fn test_conf_entry_multiple_non_overlapping() {
        let body = concat!(
            "    /// Lint: LINT_A. first option\n",
            "    (opt_a, \"opt-a\", 7 => u64),\n",
            "    /// Lint: LINT_B. second option\n",
            "    (opt_b, \"opt_b\", \"x\" => String),\n",
        );
        let entries: Vec<_> = CONF_ENTRY_RE.captures_iter(body).collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(&entries[0]["lint"], "LINT_A");
        assert_eq!(&entries[1]["lint"], "LINT_B");
    }
}
