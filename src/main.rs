#![forbid(unsafe_code)]
//! pltags command line interface

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;

use pltags::commands::{execute_generate, GenerateOptions};
use pltags::config::DEFAULT_CONFIG_FILE;
use pltags::resolve::split_search_path;
use pltags::Config;

#[derive(Parser)]
#[command(name = "pltags")]
#[command(about = "Perl source tag indexer - generates Vim-compatible tags files")]
#[command(version)]
struct Cli {
    /// Perl files to index
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Tags file output path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Library directory to search when resolving use/require targets
    /// (can specify multiple)
    #[arg(short = 'I', long = "lib-dir")]
    lib_dirs: Vec<PathBuf>,

    /// Extra library directories, PERL5LIB-style colon-separated
    #[arg(long, env = "PERL5LIB")]
    perl5lib: Option<String>,

    /// Maximum depth when following use/require statements
    #[arg(long)]
    max_depth: Option<usize>,

    /// Do not tag variable declarations
    #[arg(long)]
    no_variables: bool,

    /// Omit the extended ;" metadata fields from tag lines
    #[arg(long)]
    no_extended: bool,

    /// Rescan the requested files even if already indexed
    #[arg(short, long)]
    refresh: bool,

    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "pltags=debug" } else { "pltags=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli) {
        eprintln!("{} {:#}", style("✗").red(), err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::default()
    };

    // CLI flags override the config file.
    config.lib_dirs.extend(cli.lib_dirs);
    if let Some(perl5lib) = &cli.perl5lib {
        config.lib_dirs.extend(split_search_path(perl5lib));
    }
    if let Some(max_depth) = cli.max_depth {
        config.max_depth = max_depth;
    }
    if cli.no_variables {
        config.track_variables = false;
    }
    if cli.no_extended {
        config.extended_output = false;
    }

    let output = cli.output.unwrap_or_else(|| config.output.clone());
    execute_generate(
        GenerateOptions {
            files: cli.files,
            output,
            refresh: cli.refresh,
        },
        config,
    )
}
