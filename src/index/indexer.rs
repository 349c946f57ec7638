//! The incremental tagging engine.
//!
//! `process` seeds a depth-bounded worklist with the requested files and
//! drains it, scanning each file line by line through the recognizer
//! pipeline. Follow actions emitted by the include recognizer feed the
//! worklist back, so library code reachable through `use`/`require` gets
//! indexed without the caller naming it.
//!
//! Single-threaded: one engine owns one registry, files are read to
//! completion one at a time, and the depth bound (checked at enqueue time)
//! is the only safeguard against unbounded traversal.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{PltagsError, Result};
use crate::recognize::{default_recognizers, normalize, Recognition, Recognizer, ScanContext};
use crate::registry::{TagRegistry, Visit};
use crate::resolve::{ModuleLocator, PathLocator};

/// A pending file in the discovery queue.
#[derive(Debug, Clone)]
struct QueueEntry {
    path: PathBuf,
    depth: usize,
    refresh: bool,
}

/// The tagging engine. Owns the registry, the recognizer pipeline, and the
/// module locator; drives the discovery queue.
pub struct Indexer {
    config: Config,
    recognizers: Vec<Box<dyn Recognizer>>,
    locator: Box<dyn ModuleLocator>,
    registry: TagRegistry,
    // LIFO worklist; order among pending entries is not a guarantee, only
    // the depth bound and dedup are.
    queue: Vec<QueueEntry>,
}

impl Indexer {
    /// Engine with the standard pipeline and a lib-dir locator built from
    /// the config.
    pub fn new(config: Config) -> Self {
        let locator = Box::new(PathLocator::new(config.lib_dirs.clone()));
        Self::with_locator(config, locator)
    }

    /// Engine with an injected module locator.
    pub fn with_locator(config: Config, locator: Box<dyn ModuleLocator>) -> Self {
        let recognizers = default_recognizers(config.track_variables);
        Self::with_recognizers(config, locator, recognizers)
    }

    /// Engine with a custom recognizer pipeline. This is the extension
    /// point for derived indexers that add or replace recognizers.
    pub fn with_recognizers(
        config: Config,
        locator: Box<dyn ModuleLocator>,
        recognizers: Vec<Box<dyn Recognizer>>,
    ) -> Self {
        Self {
            config,
            recognizers,
            locator,
            registry: TagRegistry::new(),
            queue: Vec::new(),
        }
    }

    /// Index `files` and everything reachable from them within the depth
    /// bound. With `refresh`, previously indexed requested files are purged
    /// and rescanned; transitively discovered files are never re-forced.
    ///
    /// An empty file list or an unreadable file aborts the whole call.
    pub fn process(&mut self, files: &[PathBuf], refresh: bool) -> Result<()> {
        if files.is_empty() {
            return Err(PltagsError::NoInput);
        }

        for file in files {
            self.enqueue(file.clone(), 1, refresh);
        }
        while let Some(entry) = self.queue.pop() {
            self.scan_file(entry)?;
        }
        Ok(())
    }

    /// Render the registry in tags-file format.
    pub fn render(&self) -> String {
        self.registry.render()
    }

    /// Conditionally write the tags file; see [`TagRegistry::write`].
    pub fn write(&mut self, path: &Path) -> Result<()> {
        self.registry.write(path)
    }

    pub fn registry(&self) -> &TagRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut TagRegistry {
        &mut self.registry
    }

    /// Queue a file for scanning. Silently dropped beyond the depth bound;
    /// this cutoff is the engine's only traversal safeguard.
    fn enqueue(&mut self, path: PathBuf, depth: usize, refresh: bool) {
        if depth > self.config.max_depth {
            tracing::debug!(path = %path.display(), depth, "depth bound reached, not enqueueing");
            return;
        }
        self.queue.push(QueueEntry {
            path,
            depth,
            refresh,
        });
    }

    fn scan_file(&mut self, entry: QueueEntry) -> Result<()> {
        // The seen-skip happens before the file is ever opened.
        if self.registry.begin_file(&entry.path, entry.refresh) == Visit::Skip {
            tracing::debug!(path = %entry.path.display(), "already indexed, skipping");
            return Ok(());
        }

        let content =
            std::fs::read_to_string(&entry.path).map_err(|source| PltagsError::Unreadable {
                path: entry.path.clone(),
                source,
            })?;
        tracing::debug!(path = %entry.path.display(), depth = entry.depth, "scanning");

        let mut ctx = ScanContext::new(&entry.path, entry.depth);
        for (index, raw_line) in content.lines().enumerate() {
            let statement = normalize(raw_line);
            let mut recognitions = Vec::new();
            for recognizer in &self.recognizers {
                recognitions.extend(recognizer.recognize(&statement, raw_line, index + 1, &mut ctx));
            }
            for recognition in recognitions {
                match recognition {
                    Recognition::Tag(mut tag) => {
                        tag.extended = self.config.extended_output;
                        self.registry.insert(tag);
                    }
                    Recognition::Follow { module } => {
                        if let Some(path) = self.locator.resolve(&module) {
                            // Transitively discovered files are never
                            // force-rescanned.
                            self.enqueue(path, entry.depth + 1, false);
                        } else {
                            tracing::warn!(module = %module, "include target did not resolve");
                        }
                    }
                }
            }
        }

        Ok(())
    }
}
