// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Change-set aggregation from name-status listings.
//!
//! Parses `status<TAB>path` lines into per-status counters, file
//! categories, languages, and per-framework scope statistics. Collections
//! are ordered so aggregation is deterministic for identical input.

use std::collections::{BTreeMap, BTreeSet};

use crate::classify::{
    category_for_path, framework_for_path, language_for_path, scope_for_path, FileCategory,
};

use super::context::{classify_edit, extract_file_diff, EditContext};

/// Status of a single changed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChangeStatus {
    Added,
    Modified,
    Deleted,
}

impl ChangeStatus {
    /// Parse a git name-status code. Rename and copy statuses count as
    /// modifications; anything else is no status.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.chars().next()? {
            'A' => Some(ChangeStatus::Added),
            'M' => Some(ChangeStatus::Modified),
            'D' => Some(ChangeStatus::Deleted),
            'R' | 'C' => Some(ChangeStatus::Modified),
            _ => None,
        }
    }

    /// The single-letter code used in listings.
    pub fn as_code(&self) -> char {
        match self {
            ChangeStatus::Added => 'A',
            ChangeStatus::Modified => 'M',
            ChangeStatus::Deleted => 'D',
        }
    }
}

/// One changed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedFile {
    /// Change status.
    pub status: ChangeStatus,
    /// Path relative to the project root.
    pub path: String,
}

/// Per-scope statistics collected during aggregation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeStat {
    /// Number of files that resolved to this scope.
    pub count: usize,
    /// Statuses seen for this scope.
    pub statuses: BTreeSet<ChangeStatus>,
}

/// Aggregated view of a set of changes.
#[derive(Debug, Clone, Default)]
pub struct ChangeSet {
    /// All parsed files, in listing order.
    pub files: Vec<ChangedFile>,
    /// Count of added files.
    pub added: usize,
    /// Count of modified files.
    pub modified: usize,
    /// Count of deleted files.
    pub deleted: usize,
    /// Categories touched; each file contributes exactly one.
    pub categories: BTreeSet<FileCategory>,
    /// Languages touched; each file contributes at most one.
    pub languages: BTreeSet<&'static str>,
    /// Framework scope statistics, from per-path classification only.
    pub specific_scopes: BTreeMap<&'static str, ScopeStat>,
    /// Edit contexts, populated only when diff text was available.
    pub contexts: BTreeMap<String, EditContext>,
}

impl ChangeSet {
    /// Aggregate a name-status listing without diff text.
    pub fn from_name_status(listing: &str) -> Self {
        Self::from_listing(listing, "")
    }

    /// Aggregate a name-status listing plus the matching unified diff.
    ///
    /// Malformed lines are skipped. When the diff text is non-empty, every
    /// file gets an edit context.
    pub fn from_listing(listing: &str, diff: &str) -> Self {
        let mut changes = ChangeSet::default();

        for line in listing.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 2 {
                tracing::debug!("Skipping malformed listing line: {:?}", line);
                continue;
            }

            let Some(status) = ChangeStatus::from_code(fields[0]) else {
                tracing::debug!("Skipping unsupported status {:?}", fields[0]);
                continue;
            };

            // Renames and copies list the new path last.
            let path = match fields[0].chars().next() {
                Some('R') | Some('C') => fields[fields.len() - 1],
                _ => fields[1],
            };

            changes.record(status, path);
        }

        if !diff.trim().is_empty() {
            for file in &changes.files {
                let excerpt = extract_file_diff(diff, &file.path);
                let context = classify_edit(&excerpt, &file.path);
                changes.contexts.insert(file.path.clone(), context);
            }
        }

        changes
    }

    /// Aggregate a plain path list, treating every file as modified. Used
    /// by the file-system fallback, which has no diff.
    pub fn from_modified_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut changes = ChangeSet::default();
        for path in paths {
            let path = path.into();
            changes.record(ChangeStatus::Modified, &path);
        }
        changes
    }

    fn record(&mut self, status: ChangeStatus, path: &str) {
        self.files.push(ChangedFile {
            status,
            path: path.to_string(),
        });

        match status {
            ChangeStatus::Added => self.added += 1,
            ChangeStatus::Modified => self.modified += 1,
            ChangeStatus::Deleted => self.deleted += 1,
        }

        self.categories.insert(category_for_path(path));

        if let Some(language) = language_for_path(path) {
            self.languages.insert(language);
        }

        // Scope statistics come from path patterns alone; manifests only
        // influence the primary framework, not per-file attribution.
        if let Some(framework) = framework_for_path(path) {
            if let Some(scope) = scope_for_path(path, framework) {
                let stat = self.specific_scopes.entry(scope).or_default();
                stat.count += 1;
                stat.statuses.insert(status);
            }
        }
    }

    /// Whether the change set has no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate the changed paths.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|file| file.path.as_str())
    }

    /// Whether any file's edit context is a fix.
    pub fn has_fix_context(&self) -> bool {
        self.contexts.values().any(|ctx| *ctx == EditContext::Fix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "A\tapp/Models/User.php\nM\tapp/Http/Controllers/UserController.php\nD\tapp/Models/Legacy.php\n";

    #[test]
    fn test_status_from_code() {
        assert_eq!(ChangeStatus::from_code("A"), Some(ChangeStatus::Added));
        assert_eq!(ChangeStatus::from_code("M"), Some(ChangeStatus::Modified));
        assert_eq!(ChangeStatus::from_code("D"), Some(ChangeStatus::Deleted));
        assert_eq!(ChangeStatus::from_code("R100"), Some(ChangeStatus::Modified));
        assert_eq!(ChangeStatus::from_code("U"), None);
        assert_eq!(ChangeStatus::from_code(""), None);
    }

    #[test]
    fn test_counters_and_files() {
        let changes = ChangeSet::from_name_status(LISTING);
        assert_eq!(changes.files.len(), 3);
        assert_eq!(changes.added, 1);
        assert_eq!(changes.modified, 1);
        assert_eq!(changes.deleted, 1);
    }

    #[test]
    fn test_languages_and_categories() {
        let changes = ChangeSet::from_name_status("A\tsrc/app.ts\nM\tREADME.md\n");
        assert!(changes.languages.contains("typescript"));
        assert!(changes.languages.contains("markdown"));
        assert!(changes.categories.contains(&FileCategory::Code));
        assert!(changes.categories.contains(&FileCategory::Docs));
    }

    #[test]
    fn test_specific_scopes() {
        let changes = ChangeSet::from_name_status(LISTING);
        let models = changes.specific_scopes.get("models").unwrap();
        assert_eq!(models.count, 2);
        assert!(models.statuses.contains(&ChangeStatus::Added));
        assert!(models.statuses.contains(&ChangeStatus::Deleted));

        let controllers = changes.specific_scopes.get("controllers").unwrap();
        assert_eq!(controllers.count, 1);
        assert!(controllers.statuses.contains(&ChangeStatus::Modified));
    }

    #[test]
    fn test_scopes_can_span_frameworks() {
        let listing = "M\tapp/Http/Controllers/UserController.php\nM\tsrc/components/Button.tsx\n";
        let changes = ChangeSet::from_name_status(listing);
        assert!(changes.specific_scopes.contains_key("controllers"));
        assert!(changes.specific_scopes.contains_key("components"));
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let changes = ChangeSet::from_name_status("garbage\nA\tsrc/ok.rs\n\nX\tsrc/skipped.rs\n");
        assert_eq!(changes.files.len(), 1);
        assert_eq!(changes.files[0].path, "src/ok.rs");
    }

    #[test]
    fn test_rename_takes_new_path() {
        let changes = ChangeSet::from_name_status("R100\tsrc/old.rs\tsrc/new.rs\n");
        assert_eq!(changes.files.len(), 1);
        assert_eq!(changes.files[0].path, "src/new.rs");
        assert_eq!(changes.files[0].status, ChangeStatus::Modified);
        assert_eq!(changes.modified, 1);
    }

    #[test]
    fn test_contexts_only_with_diff() {
        let without = ChangeSet::from_name_status("M\tsrc/a.rs\n");
        assert!(without.contexts.is_empty());

        let diff = "--- a/src/a.rs\n+++ b/src/a.rs\n@@ -1 +1 @@\n-x\n+y\n";
        let with = ChangeSet::from_listing("M\tsrc/a.rs\n", diff);
        assert_eq!(with.contexts.get("src/a.rs"), Some(&EditContext::Fix));
        assert!(with.has_fix_context());
    }

    #[test]
    fn test_aggregation_is_deterministic() {
        let a = ChangeSet::from_name_status(LISTING);
        let b = ChangeSet::from_name_status(LISTING);
        assert_eq!(a.files, b.files);
        assert_eq!(a.specific_scopes, b.specific_scopes);
        assert_eq!(a.categories, b.categories);
    }

    #[test]
    fn test_empty_listing() {
        let changes = ChangeSet::from_name_status("");
        assert!(changes.is_empty());
        assert!(changes.specific_scopes.is_empty());
    }
}
