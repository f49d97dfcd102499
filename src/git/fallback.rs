// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Recently modified file discovery.
//!
//! Fallback input source for directories where staged changes cannot be
//! read, either because there is no repository or because the index is
//! clean. The prediction engine treats every reported file as modified.

use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use walkdir::WalkDir;

use crate::config::SmartConfig;

/// Relative paths of files modified within the configured recency
/// window, newest first, capped at `config.max_files`.
///
/// Hidden entries (including `.git`) are skipped, as is anything
/// matching one of the configured exclude globs. Unreadable entries are
/// logged and skipped rather than surfaced as errors.
pub fn recent_files(dir: &Path, config: &SmartConfig) -> Vec<String> {
    let cutoff = Utc::now() - Duration::minutes(config.recency_minutes as i64);
    let excludes: Vec<glob::Pattern> = config
        .exclude
        .iter()
        .filter_map(|pattern| match glob::Pattern::new(pattern) {
            Ok(compiled) => Some(compiled),
            Err(e) => {
                tracing::debug!("Ignoring invalid exclude pattern {pattern:?}: {e}");
                None
            }
        })
        .collect();

    let mut candidates: Vec<(DateTime<Utc>, String)> = Vec::new();
    for entry in WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("Skipping unreadable entry: {e}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = match entry.path().strip_prefix(dir) {
            Ok(relative) => relative.to_string_lossy().into_owned(),
            Err(_) => continue,
        };
        if excludes.iter().any(|pattern| pattern.matches(&relative)) {
            continue;
        }

        let Some(modified) = modified_time(&entry) else {
            tracing::debug!("Skipping {relative}: modification time unavailable");
            continue;
        };
        if modified < cutoff {
            continue;
        }

        candidates.push((modified, relative));
    }

    candidates.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
    candidates.truncate(config.max_files);
    candidates.into_iter().map(|(_, path)| path).collect()
}

fn modified_time(entry: &walkdir::DirEntry) -> Option<DateTime<Utc>> {
    let metadata = entry.metadata().ok()?;
    metadata.modified().ok().map(DateTime::<Utc>::from)
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, path: &str) {
        let full = dir.path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full, "contents\n").unwrap();
    }

    #[test]
    fn test_lists_recent_files_relative() {
        let dir = TempDir::new().unwrap();
        write(&dir, "src/main.rs");
        write(&dir, "README.md");

        let files = recent_files(dir.path(), &SmartConfig::default());
        assert!(files.contains(&"src/main.rs".to_string()));
        assert!(files.contains(&"README.md".to_string()));
        assert!(files.iter().all(|f| !f.starts_with("./")));
    }

    #[test]
    fn test_skips_hidden_entries() {
        let dir = TempDir::new().unwrap();
        write(&dir, ".git/config");
        write(&dir, ".env");
        write(&dir, "visible.rs");

        let files = recent_files(dir.path(), &SmartConfig::default());
        assert_eq!(files, vec!["visible.rs".to_string()]);
    }

    #[test]
    fn test_honors_exclude_globs() {
        let dir = TempDir::new().unwrap();
        write(&dir, "target/debug/cmt");
        write(&dir, "node_modules/left-pad/index.js");
        write(&dir, "src/lib.rs");

        let files = recent_files(dir.path(), &SmartConfig::default());
        assert_eq!(files, vec!["src/lib.rs".to_string()]);
    }

    #[test]
    fn test_caps_at_max_files() {
        let dir = TempDir::new().unwrap();
        write(&dir, "one.rs");
        write(&dir, "two.rs");
        write(&dir, "three.rs");

        let config = SmartConfig {
            max_files: 2,
            ..SmartConfig::default()
        };
        assert_eq!(recent_files(dir.path(), &config).len(), 2);
    }

    #[test]
    fn test_newest_first() {
        let dir = TempDir::new().unwrap();
        write(&dir, "b.rs");
        write(&dir, "a.rs");

        let files = recent_files(dir.path(), &SmartConfig::default());
        assert_eq!(files.first(), Some(&"a.rs".to_string()));
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert!(recent_files(&missing, &SmartConfig::default()).is_empty());
    }
}
