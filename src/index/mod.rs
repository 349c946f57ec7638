//! Indexing engine: discovery queue and the scan loop.

mod indexer;

pub use indexer::Indexer;
