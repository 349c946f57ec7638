//! Tag registry: dedup, ordering, and tags-file serialization.
//!
//! The registry maps tag names to per-file tag lists and keeps three pieces
//! of bookkeeping around them: a visitation ledger (`seen`) so files are
//! scanned once, a first-visit priority (`order`) used as the tie-break
//! among same-named tags, and a `dirty` flag that gates writing.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::tag::TagRecord;

/// Outcome of announcing a file to the registry before scanning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Already indexed and no refresh requested; skip without opening it.
    Skip,
    /// Proceed with the scan.
    Scan,
}

/// Registry of discovered tags across all scanned files.
#[derive(Debug, Default)]
pub struct TagRegistry {
    /// tag name -> file -> records, in registration order per file.
    tags: BTreeMap<String, HashMap<PathBuf, Vec<TagRecord>>>,
    /// First-visit priority per file. Never removed, even when a file's
    /// tags are purged, so a refreshed file keeps its relative position.
    order: HashMap<PathBuf, u64>,
    next_order: u64,
    /// Files already scanned; suppresses duplicate work.
    seen: HashSet<PathBuf>,
    /// Set on every structural mutation; cleared by a successful write.
    dirty: bool,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Announce a file before scanning. Handles the seen/refresh protocol:
    /// an already-seen file is skipped unless `refresh` is set, in which
    /// case its tags are purged (priority preserved) and it is rescanned.
    /// A new file gets the next priority number and is marked seen.
    pub fn begin_file(&mut self, file: &Path, refresh: bool) -> Visit {
        if self.seen.contains(file) {
            if !refresh {
                return Visit::Skip;
            }
            self.purge_file(file);
            return Visit::Scan;
        }

        self.seen.insert(file.to_path_buf());
        // A file forgotten and rescanned keeps its original priority.
        if !self.order.contains_key(file) {
            self.order.insert(file.to_path_buf(), self.next_order);
            self.next_order += 1;
        }
        Visit::Scan
    }

    /// Register one tag. An exact duplicate already present for the same
    /// name and file is dropped silently.
    pub fn insert(&mut self, tag: TagRecord) {
        let per_file = self
            .tags
            .entry(tag.name.clone())
            .or_default()
            .entry(tag.file.clone())
            .or_default();
        if per_file.contains(&tag) {
            return;
        }
        per_file.push(tag);
        self.dirty = true;
    }

    /// Delete every tag belonging to `file`, across all names. Names left
    /// without any file are dropped so the map does not grow across
    /// repeated refreshes. The file's `order` entry and seen status are
    /// untouched.
    pub fn purge_file(&mut self, file: &Path) {
        let mut removed = false;
        self.tags.retain(|_, per_file| {
            if per_file.remove(file).is_some() {
                removed = true;
            }
            !per_file.is_empty()
        });
        if removed {
            self.dirty = true;
        }
    }

    /// Drop `file` from the visitation ledger so the next scan reprocesses
    /// it even without a refresh request.
    pub fn forget(&mut self, file: &Path) {
        self.seen.remove(file);
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of registered tag records.
    pub fn tag_count(&self) -> usize {
        self.tags
            .values()
            .flat_map(|per_file| per_file.values())
            .map(Vec::len)
            .sum()
    }

    /// Number of files that have been scanned.
    pub fn file_count(&self) -> usize {
        self.seen.len()
    }

    /// Number of distinct tag names currently registered.
    pub fn name_count(&self) -> usize {
        self.tags.len()
    }

    /// All records registered under `name`, ordered by file visitation
    /// priority.
    pub fn tags_named(&self, name: &str) -> Vec<&TagRecord> {
        let Some(per_file) = self.tags.get(name) else {
            return Vec::new();
        };
        let mut files: Vec<(&PathBuf, &Vec<TagRecord>)> = per_file
            .iter()
            .filter(|(_, records)| !records.is_empty())
            .collect();
        files.sort_by_key(|(file, _)| self.order.get(*file).copied().unwrap_or(u64::MAX));
        files
            .into_iter()
            .flat_map(|(_, records)| records.iter())
            .collect()
    }

    /// Render the whole registry in tags-file format: names sorted
    /// lexicographically, same-named tags ordered by the visitation
    /// priority of their file, so tags from directly requested files come
    /// before tags from transitively discovered library code.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for name in self.tags.keys() {
            for tag in self.tags_named(name) {
                out.push_str(&tag.render());
                out.push('\n');
            }
        }
        out
    }

    /// Write the rendered registry to `path`. A no-op unless something
    /// changed since the last write or the target does not exist yet.
    pub fn write(&mut self, path: &Path) -> Result<()> {
        if !self.dirty && path.exists() {
            return Ok(());
        }
        std::fs::write(path, self.render())?;
        self.dirty = false;
        Ok(())
    }
}
