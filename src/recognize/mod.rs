//! Line recognizers and the per-file scan context.
//!
//! Each recognizer is an independent line-analysis step implementing
//! [`Recognizer`]. The engine runs a fixed, ordered list of them over every
//! line, threading one mutable [`ScanContext`] per file. Recognizers never
//! talk to each other; the context is the only shared state.
//!
//! All recognizers consume the *statement* form of a line (comments
//! stripped, whitespace trimmed) but snapshot the raw line text into the
//! tag so editors can search for it verbatim.

use std::path::{Path, PathBuf};

use crate::tag::TagRecord;

mod include;
mod package;
mod subroutine;
mod variable;

pub use include::IncludeRecognizer;
pub use package::PackageRecognizer;
pub use subroutine::SubroutineRecognizer;
pub use variable::VariableRecognizer;

/// Mutable state threaded through recognizers within one file scan.
#[derive(Debug, Clone)]
pub struct ScanContext {
    /// File currently being scanned.
    pub file: PathBuf,
    /// Current enclosing package name, empty until a `package` line is seen.
    pub scope: String,
    /// Whether any subroutine declaration has been seen yet in this file.
    /// Monotonic within a file.
    pub has_seen_subroutine: bool,
    /// Set when a variable declaration ran past its line; makes the
    /// variable recognizer consume the following line as a continuation.
    pub declaration_continues: bool,
    /// Distance from an initially requested file; depth 1 = directly
    /// requested.
    pub depth: usize,
}

impl ScanContext {
    pub fn new(file: &Path, depth: usize) -> Self {
        Self {
            file: file.to_path_buf(),
            scope: String::new(),
            has_seen_subroutine: false,
            declaration_continues: false,
            depth,
        }
    }
}

/// What a recognizer produced for one line.
///
/// A materialized tag goes into the registry; a follow action only has a
/// side effect (resolve the module name and enqueue its file) and is never
/// stored.
#[derive(Debug, Clone)]
pub enum Recognition {
    /// A symbol to register.
    Tag(TagRecord),
    /// An inclusion target to resolve and scan at depth + 1.
    Follow { module: String },
}

/// One line-analysis step. Implementations must be stateless; any
/// cross-line state belongs in the [`ScanContext`].
pub trait Recognizer {
    fn recognize(
        &self,
        statement: &str,
        raw_line: &str,
        line_number: usize,
        ctx: &mut ScanContext,
    ) -> Vec<Recognition>;
}

/// The standard recognizer pipeline, in its fixed order. A derived indexer
/// can compose its own list instead.
pub fn default_recognizers(track_variables: bool) -> Vec<Box<dyn Recognizer>> {
    let mut recognizers: Vec<Box<dyn Recognizer>> = vec![
        Box::new(PackageRecognizer),
        Box::new(SubroutineRecognizer),
        Box::new(IncludeRecognizer),
    ];
    if track_variables {
        recognizers.push(Box::new(VariableRecognizer));
    }
    recognizers
}

/// Reduce a raw line to its statement form: drop everything from the first
/// unescaped `#` onward, then trim surrounding whitespace.
///
/// Deliberately naive: a `#` inside a string literal still starts a
/// comment. The raw line is kept separately for the search pattern, so the
/// damage is limited to recognition.
pub fn normalize(line: &str) -> String {
    let mut cut = line.len();
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if c == '#' && !escaped {
            cut = i;
            break;
        }
        escaped = c == '\\' && !escaped;
    }
    line[..cut].trim().to_string()
}
