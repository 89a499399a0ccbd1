use crate::app::models::FileEntry;
use std::collections::HashSet;
use std::path::{Component, PathBuf};

pub struct OutputGenerator;

impl OutputGenerator {
    /// Flat listing, one root-relative path per line.
    pub fn generate_list(entries: &[FileEntry]) -> String {
        entries
            .iter()
            .map(|entry| entry.relative_path.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Indented tree view. Directories are derived from the matched paths,
    /// since the scan itself only yields files.
    pub fn generate_tree(entries: &[FileEntry]) -> String {
        let mut output = String::new();
        let mut printed_dirs = HashSet::new();

        for entry in entries {
            let relative = PathBuf::from(&entry.relative_path);
            let components: Vec<Component> = relative.components().collect();

            let mut current_path = PathBuf::new();
            for (i, component) in components.iter().enumerate().take(components.len() - 1) {
                current_path.push(component);
                if printed_dirs.insert(current_path.clone()) {
                    let indent = "    ".repeat(i);
                    output.push_str(&format!(
                        "{}{}/\n",
                        indent,
                        component.as_os_str().to_string_lossy()
                    ));
                }
            }

            if let Some(file_name) = relative.file_name() {
                let indent = "    ".repeat(components.len().saturating_sub(1));
                output.push_str(&format!("{}{}\n", indent, file_name.to_string_lossy()));
            }
        }

        output.trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(relative: &str) -> FileEntry {
        FileEntry {
            path: PathBuf::from(relative),
            relative_path: relative.to_string(),
        }
    }

    #[test]
    fn list_is_one_path_per_line() {
        let entries = vec![entry("templates/index.html"), entry("templates/nav.jinja")];
        assert_eq!(
            OutputGenerator::generate_list(&entries),
            "templates/index.html\ntemplates/nav.jinja"
        );
    }

    #[test]
    fn tree_derives_directories_from_paths() {
        let entries = vec![
            entry("templates/index.html"),
            entry("templates/partials/nav.jinja"),
        ];
        let expected = "\
templates/
    index.html
    partials/
        nav.jinja";
        assert_eq!(OutputGenerator::generate_tree(&entries), expected);
    }

    #[test]
    fn tree_of_nothing_is_empty() {
        assert_eq!(OutputGenerator::generate_tree(&[]), "");
    }
}
