//! Tag records and their ctags-format serialization.
//!
//! A [`TagRecord`] is created during a single line's recognition pass and is
//! immutable once registered, except for `scope` and `is_file_scoped`, which
//! a recognizer assigns from the scan context available at that point.

use std::path::{Path, PathBuf};

/// Kind of symbol a tag describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// A `package Foo::Bar;` declaration.
    Package,
    /// A `sub name` declaration.
    Subroutine,
    /// A `my`/`our`/`local` declared variable.
    Variable,
}

impl TagKind {
    /// Single-letter kind marker used in the extended ctags fields.
    pub fn letter(&self) -> &'static str {
        match self {
            TagKind::Package => "p",
            TagKind::Subroutine => "s",
            TagKind::Variable => "v",
        }
    }
}

/// One discovered symbol, ready to be registered and rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRecord {
    /// Symbol identifier. Never empty.
    pub name: String,
    /// What the symbol is.
    pub kind: TagKind,
    /// Path of the file the symbol was found in.
    pub file: PathBuf,
    /// Escaped source line, safe to embed in a `/^...$/` search pattern.
    pub source_line: String,
    /// 1-based line number.
    pub line_number: usize,
    /// Enclosing package name, empty if none.
    pub scope: String,
    /// Visible only within its file (emits `file:` in extended mode).
    pub is_file_scoped: bool,
    /// Whether `render` emits the extended metadata fields.
    pub extended: bool,
}

impl TagRecord {
    /// Build a record from a raw source line. The line is trimmed of its
    /// trailing newline and escaped so it can sit inside a `/^...$/`
    /// pattern. Empty name, file, or line is a caller bug.
    pub fn new(
        name: impl Into<String>,
        kind: TagKind,
        file: &Path,
        raw_line: &str,
        line_number: usize,
    ) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "tag name must be non-empty");
        assert!(!file.as_os_str().is_empty(), "tag file must be non-empty");
        assert!(!raw_line.is_empty(), "tag source line must be non-empty");
        assert!(line_number >= 1, "tag line numbers are 1-based");

        Self {
            name,
            kind,
            file: file.to_path_buf(),
            source_line: escape_search_pattern(raw_line.trim_end_matches(['\n', '\r'])),
            line_number,
            scope: String::new(),
            is_file_scoped: false,
            extended: false,
        }
    }

    /// Render one line of the tags file:
    /// `NAME\tFILE\t/^LINE$/` plus, in extended mode,
    /// `;"\tKIND\tline:N[\tfile:][\tclass:SCOPE]`.
    pub fn render(&self) -> String {
        assert!(
            !self.name.is_empty() && !self.file.as_os_str().is_empty() && !self.source_line.is_empty(),
            "cannot render an incomplete tag"
        );

        let mut line = format!(
            "{}\t{}\t/^{}$/",
            self.name,
            self.file.display(),
            self.source_line
        );

        if self.extended {
            line.push_str(";\"");
            line.push('\t');
            line.push_str(self.kind.letter());
            line.push_str(&format!("\tline:{}", self.line_number));
            if self.is_file_scoped {
                line.push_str("\tfile:");
            }
            if !self.scope.is_empty() {
                line.push_str(&format!("\tclass:{}", self.scope));
            }
        }

        line
    }
}

/// Escape a line for embedding in a `/^...$/` search pattern: backslashes
/// and the `/` delimiter. Backslash goes first so delimiter escapes are not
/// double-escaped.
fn escape_search_pattern(line: &str) -> String {
    line.replace('\\', "\\\\").replace('/', "\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(raw: &str) -> TagRecord {
        TagRecord::new("baz", TagKind::Subroutine, Path::new("/src/Foo.pm"), raw, 3)
    }

    #[test]
    fn test_render_basic() {
        let tag = record("sub baz { }");
        assert_eq!(tag.render(), "baz\t/src/Foo.pm\t/^sub baz { }$/");
    }

    #[test]
    fn test_render_extended() {
        let mut tag = record("sub baz { }");
        tag.extended = true;
        tag.is_file_scoped = true;
        tag.scope = "Foo::Bar".to_string();
        assert_eq!(
            tag.render(),
            "baz\t/src/Foo.pm\t/^sub baz { }$/;\"\ts\tline:3\tfile:\tclass:Foo::Bar"
        );
    }

    #[test]
    fn test_trailing_newline_trimmed() {
        let tag = record("sub baz { }\n");
        assert_eq!(tag.source_line, "sub baz { }");
    }

    #[test]
    fn test_escaping_roundtrip() {
        let original = r"sub baz { my $p = 'a/b\c'; }";
        let tag = record(original);
        assert_eq!(tag.source_line, r"sub baz { my $p = 'a\/b\\c'; }");
        // Un-escaping the stored text reconstructs the trimmed original.
        let unescaped = tag.source_line.replace("\\/", "/").replace("\\\\", "\\");
        assert_eq!(unescaped, original);
    }

    #[test]
    #[should_panic(expected = "non-empty")]
    fn test_empty_name_panics() {
        TagRecord::new("", TagKind::Variable, Path::new("/f.pl"), "my $x;", 1);
    }
}
