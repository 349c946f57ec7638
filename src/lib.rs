#![forbid(unsafe_code)]

//! # pltags - Perl source tag indexer
//!
//! Scans Perl source line by line, recognizes declarations (packages,
//! subroutines, variables) and inclusion statements, and emits a sorted
//! Vim-compatible tags file. `use`/`require` targets are followed
//! transitively up to a bounded depth, so jumping into library code works
//! without indexing the whole dependency tree by hand.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::{Path, PathBuf};
//! use pltags::{Config, Indexer};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut indexer = Indexer::new(Config::default());
//!     indexer.process(&[PathBuf::from("lib/Foo/Bar.pm")], false)?;
//!     indexer.write(Path::new("tags"))?;
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod recognize;
pub mod registry;
pub mod resolve;
pub mod tag;

// Re-exports
pub use config::Config;
pub use error::{PltagsError, Result};
pub use index::Indexer;
pub use recognize::{Recognition, Recognizer, ScanContext};
pub use registry::TagRegistry;
pub use resolve::{FnLocator, ModuleLocator, PathLocator};
pub use tag::{TagKind, TagRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
