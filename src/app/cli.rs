use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Resolve and validate the content-scan manifest of a utility-class pipeline"
)]
pub struct Cli {
    /// Path to the scan manifest (defaults to ./scan.toml under the root)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Project root the content patterns are resolved against
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Extra content patterns, merged with the manifest's (e.g. 'src/**/*.js')
    #[arg(long, num_args = 1..)]
    pub content: Option<Vec<String>>,

    /// Validate every pattern in the manifest and exit
    #[arg(long)]
    pub check: bool,

    /// Render the matched files as a directory tree instead of a flat list
    #[arg(long)]
    pub tree: bool,

    /// Write a starter manifest to ./scan.toml and exit
    #[arg(long)]
    pub init: bool,
}
