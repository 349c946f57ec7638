//! Subroutine declaration recognizer.

use std::sync::LazyLock;

use regex::Regex;

use crate::tag::{TagKind, TagRecord};

use super::{Recognition, Recognizer, ScanContext};

/// Matches the `sub` keyword followed immediately by an identifier,
/// anywhere in the statement.
static SUB_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bsub\s+(\w+)").unwrap());

/// Recognizes named subroutine declarations.
///
/// Subroutines outside any package are marked file-scoped. That is an
/// approximation, not a semantic guarantee, but it steers editors right in
/// the common case.
pub struct SubroutineRecognizer;

impl Recognizer for SubroutineRecognizer {
    fn recognize(
        &self,
        statement: &str,
        raw_line: &str,
        line_number: usize,
        ctx: &mut ScanContext,
    ) -> Vec<Recognition> {
        let Some(caps) = SUB_PATTERN.captures(statement) else {
            return Vec::new();
        };

        let mut tag = TagRecord::new(
            &caps[1],
            TagKind::Subroutine,
            &ctx.file,
            raw_line,
            line_number,
        );
        tag.scope = ctx.scope.clone();
        tag.is_file_scoped = ctx.scope.is_empty();

        ctx.has_seen_subroutine = true;

        vec![Recognition::Tag(tag)]
    }
}
