use crate::app::config::ScanConfig;
use crate::app::models::FileEntry;
use anyhow::{Context, Result};
use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use pathdiff::diff_paths;
use std::path::{Path, PathBuf};

/// Walks a project root and keeps the files matched by the manifest's
/// content patterns.
pub struct Scanner {
    root: PathBuf,
    content_set: GlobSet,
}

impl Scanner {
    pub fn new(root: PathBuf, config: &ScanConfig) -> Result<Self> {
        Ok(Self {
            content_set: build_globset(&config.content)?,
            root,
        })
    }

    /// Computes the union of files matched by all patterns, gitignore-aware,
    /// sorted by path for deterministic output.
    pub fn scan(&self) -> Vec<FileEntry> {
        let mut entries = Vec::new();

        let walker = WalkBuilder::new(&self.root)
            .hidden(false) // Allow hidden files if git doesn't ignore them
            .git_ignore(true)
            .build();

        for result in walker {
            match result {
                Ok(entry) => {
                    if let Some(processed) = self.process_entry(entry.path()) {
                        entries.push(processed);
                    }
                }
                Err(err) => log::warn!("Error walking entry: {}", err),
            }
        }

        entries.sort_by(|a, b| a.path.cmp(&b.path));
        entries
    }

    fn process_entry(&self, path: &Path) -> Option<FileEntry> {
        if path == self.root {
            return None;
        }

        // The walker runs with .hidden(false) to let things like .env or
        // .github through, so the .git directory must be skipped by hand.
        if path.components().any(|c| c.as_os_str() == ".git") {
            return None;
        }

        // The matched set is a set of files; directories only shape the walk.
        if path.is_dir() {
            return None;
        }

        let relative = diff_paths(path, &self.root)?;
        let relative_str = relative.to_string_lossy().replace('\\', "/");

        if !self.content_set.is_match(&relative_str) {
            return None;
        }

        Some(FileEntry {
            path: path.to_path_buf(),
            relative_path: relative_str,
        })
    }
}

/// Compiles one content pattern, stripping the conventional `./` prefix so
/// patterns written relative to the project root match root-relative paths.
/// `*` stays within a path segment; crossing directories takes `**`.
pub fn compile_pattern(pattern: &str) -> Result<Glob> {
    let normalized = pattern.strip_prefix("./").unwrap_or(pattern);
    GlobBuilder::new(normalized)
        .literal_separator(true)
        .build()
        .context(format!("Invalid glob pattern: {}", pattern))
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        builder.add(compile_pattern(pat)?);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "<div class=\"p-4\"></div>").unwrap();
    }

    fn scan_with(root: &Path, patterns: &[&str]) -> Vec<String> {
        let config = ScanConfig {
            content: patterns.iter().map(|s| s.to_string()).collect(),
            ..ScanConfig::default()
        };
        let scanner = Scanner::new(root.to_path_buf(), &config).unwrap();
        scanner
            .scan()
            .into_iter()
            .map(|entry| entry.relative_path)
            .collect()
    }

    #[test]
    fn matches_templates_and_excludes_static() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "templates/index.html");
        touch(dir.path(), "templates/partials/nav.jinja");
        touch(dir.path(), "static/app.js");

        let matched = scan_with(dir.path(), &["./templates/**/*.{html,jinja,js}"]);
        assert_eq!(
            matched,
            vec![
                "templates/index.html".to_string(),
                "templates/partials/nav.jinja".to_string()
            ]
        );
    }

    #[test]
    fn brace_alternation_covers_each_extension() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "templates/widget.js");
        touch(dir.path(), "templates/readme.md");

        let matched = scan_with(dir.path(), &["./templates/**/*.{html,jinja,js}"]);
        assert_eq!(matched, vec!["templates/widget.js".to_string()]);
    }

    #[test]
    fn union_of_multiple_patterns() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "templates/index.html");
        touch(dir.path(), "static/app.js");
        touch(dir.path(), "static/style.css");

        let matched = scan_with(
            dir.path(),
            &["templates/**/*.html", "static/**/*.js"],
        );
        assert_eq!(
            matched,
            vec![
                "static/app.js".to_string(),
                "templates/index.html".to_string()
            ]
        );
    }

    #[test]
    fn empty_pattern_set_matches_nothing() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "templates/index.html");

        let matched = scan_with(dir.path(), &[]);
        assert!(matched.is_empty());
    }

    #[test]
    fn leading_dot_slash_is_normalized() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "templates/index.html");

        assert_eq!(
            scan_with(dir.path(), &["./templates/**/*.html"]),
            scan_with(dir.path(), &["templates/**/*.html"]),
        );
    }

    #[test]
    fn single_star_stays_within_a_segment() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "templates/index.html");
        touch(dir.path(), "templates/partials/nav.html");

        let matched = scan_with(dir.path(), &["templates/*.html"]);
        assert_eq!(matched, vec!["templates/index.html".to_string()]);
    }

    #[test]
    fn unmatched_brace_fails_to_compile() {
        assert!(compile_pattern("templates/*.{html,jinja").is_err());
    }
}
