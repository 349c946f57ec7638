//! Inclusion statement recognizer (`use` / `require`).
//!
//! Produces no tags of its own. Each recognized target becomes a
//! [`Recognition::Follow`] action; the engine resolves the module name and,
//! if the locator finds a file, enqueues it one level deeper.

use std::sync::LazyLock;

use regex::Regex;

use super::{Recognition, Recognizer, ScanContext};

/// `use`/`require` plus the Test::More `_ok` variants, and the rest of the
/// statement.
static INCLUDE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:use|require)(_ok)?\b\s*(.*)$").unwrap());

/// Strips quote-operator and bare quoting prefixes (`qw(`, `q{`, `('`, ...)
/// and captures the longest leading identifier run of the target.
static TARGET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(?:q[qw]?[('"{\[<]|['"({\[<])*([A-Za-z_][\w:]*)"#).unwrap());

/// Recognizes inclusion statements and turns their targets into follow
/// actions. Targets that are not module-shaped (version numbers, pragma
/// arguments) simply produce nothing.
pub struct IncludeRecognizer;

impl Recognizer for IncludeRecognizer {
    fn recognize(
        &self,
        statement: &str,
        _raw_line: &str,
        _line_number: usize,
        _ctx: &mut ScanContext,
    ) -> Vec<Recognition> {
        let Some(caps) = INCLUDE_PATTERN.captures(statement) else {
            return Vec::new();
        };
        let test_variant = caps.get(1).is_some();
        let rest = &caps[2];

        let tokens: Vec<&str> = rest.split_whitespace().collect();
        // `use_ok`/`require_ok` load one module; anything after the first
        // argument is test plumbing, not a target.
        let tokens = if test_variant && !tokens.is_empty() {
            &tokens[..1]
        } else {
            &tokens[..]
        };

        tokens
            .iter()
            .filter_map(|token| TARGET_PATTERN.captures(token))
            .map(|caps| Recognition::Follow {
                module: caps[1].to_string(),
            })
            .collect()
    }
}
