//! Generate command: index the given files and write the tags file.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::index::Indexer;

/// Options for the generate command.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Files to index.
    pub files: Vec<PathBuf>,
    /// Tags file output path.
    pub output: PathBuf,
    /// Purge and rescan the requested files if already indexed.
    pub refresh: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            output: PathBuf::from("tags"),
            refresh: false,
        }
    }
}

/// Execute the generate command.
pub fn execute_generate(options: GenerateOptions, config: Config) -> Result<()> {
    println!("{} Indexing {} file(s)...", style("→").cyan(), options.files.len());

    let mut indexer = Indexer::new(config);
    indexer.process(&options.files, options.refresh)?;

    // Create output directory if needed
    if let Some(parent) = options.output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    indexer.write(&options.output)?;
    println!(
        "{} Tags written to {}",
        style("✓").green(),
        options.output.display()
    );
    println!("  Files: {}", indexer.registry().file_count());
    println!("  Tags: {}", indexer.registry().tag_count());

    Ok(())
}
