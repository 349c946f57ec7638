//! Variable declaration recognizer.
//!
//! The only stateful recognizer: a declaration that runs past its line
//! (`my ($x,` ...) leaves a continuation flag in the scan context so the
//! next line is consumed as part of the same statement instead of being
//! misread as something else.
//!
//! Known limitation, kept on purpose: identifiers on a continuation line
//! are not extracted, so `my ($x,\n $y);` yields only `x`, and declarations
//! spanning three or more lines are undercounted. Only the one-line
//! continuation is tracked at all.

use std::sync::LazyLock;

use regex::Regex;

use crate::tag::{TagKind, TagRecord};

use super::{Recognition, Recognizer, ScanContext};

/// The three local-declaration keywords.
static DECL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:my|our|local)\b").unwrap());

/// A sigil followed by an identifier.
static SIGIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[$@%](\w+)").unwrap());

/// Recognizes `my`/`our`/`local` variable declarations.
///
/// Top-of-file variables declared before any subroutine and outside any
/// package are treated as visible beyond the file; everything else is
/// file-scoped. Approximate, but good enough for navigation.
pub struct VariableRecognizer;

impl Recognizer for VariableRecognizer {
    fn recognize(
        &self,
        statement: &str,
        raw_line: &str,
        line_number: usize,
        ctx: &mut ScanContext,
    ) -> Vec<Recognition> {
        let continuation = ctx.declaration_continues;
        let declares = DECL_PATTERN.is_match(statement);
        if !continuation && !declares {
            return Vec::new();
        }

        ctx.declaration_continues = !statement.ends_with(';');

        if !declares {
            // Continuation line: consumed to keep the statement state
            // straight, but its identifiers are not extracted.
            return Vec::new();
        }

        // Drop the initializer so identifiers in the right-hand side of an
        // assignment are not misread as further declarations.
        let declaration = match statement.find('=') {
            Some(pos) => &statement[..pos],
            None => statement,
        };

        SIGIL_PATTERN
            .captures_iter(declaration)
            .map(|caps| {
                let mut tag = TagRecord::new(
                    &caps[1],
                    TagKind::Variable,
                    &ctx.file,
                    raw_line,
                    line_number,
                );
                tag.scope = ctx.scope.clone();
                tag.is_file_scoped = !ctx.scope.is_empty() || ctx.has_seen_subroutine;
                Recognition::Tag(tag)
            })
            .collect()
    }
}
