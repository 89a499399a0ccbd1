// Declare modules
pub mod cli;
pub mod config;
pub mod formatter;
pub mod models;
pub mod scanner;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::env;
use std::fs;
use std::path::Path;

use self::cli::Cli;
use self::config::{resolve_config, ScanConfig, MANIFEST_NAME};
use self::formatter::OutputGenerator;
use self::scanner::{compile_pattern, Scanner};

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Identify Project Root
    let root = match &args.root {
        Some(path) => path.clone(),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let root = root
        .canonicalize()
        .context(format!("Project root {:?} does not exist", root))?;

    if args.init {
        return init_manifest(&root);
    }

    // 3. Resolve Configuration
    let config = resolve_config(&args, &root)?;

    if args.check {
        return check_patterns(&config);
    }

    config.validate()?;

    // 4. Scan Directory
    let scanner = Scanner::new(root, &config)?;
    let entries = scanner.scan();

    if entries.is_empty() {
        log::warn!("⚠️ No files matched the content patterns.");
        return Ok(());
    }

    // 5. Generate Output
    let output = if args.tree {
        OutputGenerator::generate_tree(&entries)
    } else {
        OutputGenerator::generate_list(&entries)
    };

    // 6. Print to Stdout
    println!("{}", output);

    Ok(())
}

/// Writes the starter manifest, refusing to clobber an existing one.
fn init_manifest(root: &Path) -> Result<()> {
    let path = root.join(MANIFEST_NAME);
    if path.exists() {
        bail!("Manifest already exists at {:?}", path);
    }

    let raw = ScanConfig::starter().to_toml_string()?;
    fs::write(&path, raw).context(format!("Failed to write manifest at {:?}", path))?;
    log::info!("Wrote starter manifest to {:?}", path);
    Ok(())
}

/// Per-pattern verdict for --check; fails if any pattern is malformed.
fn check_patterns(config: &ScanConfig) -> Result<()> {
    if config.content.is_empty() {
        log::warn!("💡 Tip: the manifest has no content patterns; nothing will match.");
        return Ok(());
    }

    let mut bad = 0usize;
    for pattern in &config.content {
        if pattern.trim().is_empty() {
            println!("error  (empty pattern)");
            bad += 1;
            continue;
        }
        match compile_pattern(pattern) {
            Ok(_) => println!("ok     {}", pattern),
            Err(err) => {
                println!("error  {}: {}", pattern, err);
                bad += 1;
            }
        }
    }

    if bad > 0 {
        bail!("{} invalid content pattern(s)", bad);
    }
    Ok(())
}
