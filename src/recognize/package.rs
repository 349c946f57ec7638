//! Package declaration recognizer.

use std::sync::LazyLock;

use regex::Regex;

use crate::tag::{TagKind, TagRecord};

use super::{Recognition, Recognizer, ScanContext};

/// Matches `package Foo::Bar` at the start of a statement.
static PACKAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^package\s+([\w:]+)").unwrap());

/// Recognizes `package` declarations. A matched package becomes the
/// enclosing scope for every subsequent line of the file.
pub struct PackageRecognizer;

impl Recognizer for PackageRecognizer {
    fn recognize(
        &self,
        statement: &str,
        raw_line: &str,
        line_number: usize,
        ctx: &mut ScanContext,
    ) -> Vec<Recognition> {
        let Some(caps) = PACKAGE_PATTERN.captures(statement) else {
            return Vec::new();
        };
        let name = &caps[1];

        // A package is never file-local.
        let mut tag = TagRecord::new(name, TagKind::Package, &ctx.file, raw_line, line_number);
        tag.is_file_scoped = false;

        ctx.scope = name.to_string();

        vec![Recognition::Tag(tag)]
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn scan(statement: &str) -> (Vec<Recognition>, ScanContext) {
        let mut ctx = ScanContext::new(Path::new("/src/Foo.pm"), 1);
        let out = PackageRecognizer.recognize(statement, statement, 1, &mut ctx);
        (out, ctx)
    }

    #[test]
    fn test_package_sets_scope() {
        let (out, ctx) = scan("package Foo::Bar;");
        assert_eq!(ctx.scope, "Foo::Bar");
        match &out[..] {
            [Recognition::Tag(tag)] => {
                assert_eq!(tag.name, "Foo::Bar");
                assert_eq!(tag.kind, TagKind::Package);
                assert!(!tag.is_file_scoped);
            }
            other => panic!("unexpected recognition: {other:?}"),
        }
    }

    #[test]
    fn test_non_package_line_is_silent() {
        let (out, ctx) = scan("my $package = 1;");
        assert!(out.is_empty());
        assert!(ctx.scope.is_empty());
    }

    #[test]
    fn test_package_must_start_statement() {
        let (out, _) = scan("return package_name();");
        assert!(out.is_empty());
    }
}
