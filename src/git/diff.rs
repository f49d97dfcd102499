// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Staged change inspection.
//!
//! Reads the index of the repository containing a directory and renders
//! the staged changes in the two textual shapes the prediction engine
//! consumes: a name-status listing and a unified diff.

use std::path::Path;

use git2::{DiffFormat, DiffOptions, Repository};

use crate::error::{CmtError, GitError, Result};

/// Staged changes rendered as text.
#[derive(Debug, Clone, Default)]
pub struct StagedChanges {
    /// One `STATUS\tpath` line per staged file.
    pub name_status: String,

    /// Unified diff of the staged changes, with zero context lines.
    pub diff: String,
}

/// Collect the staged changes of the repository containing `dir`.
///
/// Returns [`GitError::NotARepository`] when `dir` is not inside a git
/// repository and [`GitError::NoStagedChanges`] when the index matches
/// HEAD. An unborn HEAD is treated as an empty tree, so every staged
/// file in a fresh repository shows up as an addition.
pub fn staged_changes(dir: &Path) -> Result<StagedChanges> {
    let repo = open_repository(dir)?;

    let head = repo.head().ok();
    let head_tree = head.as_ref().and_then(|h| h.peel_to_tree().ok());

    let mut options = DiffOptions::new();
    options.context_lines(0);

    let diff = repo
        .diff_tree_to_index(head_tree.as_ref(), None, Some(&mut options))
        .map_err(|e| {
            CmtError::Git(GitError::DiffFailed {
                message: e.message().to_string(),
            })
        })?;

    let name_status = render_name_status(&diff)?;
    if name_status.is_empty() {
        return Err(CmtError::Git(GitError::NoStagedChanges));
    }

    Ok(StagedChanges {
        name_status,
        diff: render_patch(&diff),
    })
}

fn open_repository(dir: &Path) -> Result<Repository> {
    Repository::discover(dir).map_err(|e| {
        if e.code() == git2::ErrorCode::NotFound {
            CmtError::Git(GitError::NotARepository)
        } else {
            CmtError::Git(GitError::OpenFailed {
                message: e.message().to_string(),
            })
        }
    })
}

/// Render one `STATUS\tpath` line per delta.
///
/// Rename detection is not enabled on the index diff, so every delta
/// maps onto added, modified or deleted.
fn render_name_status(diff: &git2::Diff<'_>) -> Result<String> {
    let mut listing = String::new();

    diff.foreach(
        &mut |delta, _| {
            let status = match delta.status() {
                git2::Delta::Added => 'A',
                git2::Delta::Deleted => 'D',
                _ => 'M',
            };
            let path = delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path());
            if let Some(path) = path {
                listing.push(status);
                listing.push('\t');
                listing.push_str(&path.to_string_lossy());
                listing.push('\n');
            }
            true
        },
        None,
        None,
        None,
    )
    .map_err(|e| {
        CmtError::Git(GitError::DiffFailed {
            message: e.message().to_string(),
        })
    })?;

    Ok(listing)
}

/// Render the diff as patch text.
///
/// File and hunk headers are emitted verbatim; content lines keep their
/// origin marker so added and removed lines read as `+` and `-`.
fn render_patch(diff: &git2::Diff<'_>) -> String {
    let mut patch = String::new();

    let _ = diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
        if let Ok(content) = std::str::from_utf8(line.content()) {
            match line.origin() {
                '+' | '-' | ' ' => patch.push(line.origin()),
                _ => {}
            }
            patch.push_str(content);
        }
        true
    });

    patch
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn test_repo() -> (TempDir, Repository) {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        let mut config = repo.config().unwrap();
        config.set_str("user.name", "tester").unwrap();
        config.set_str("user.email", "tester@example.com").unwrap();
        (dir, repo)
    }

    fn stage(repo: &Repository, path: &str, content: &str) {
        let full = repo.workdir().unwrap().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full, content).unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new(path)).unwrap();
        index.write().unwrap();
    }

    fn commit_index(repo: &Repository, message: &str) {
        let signature = repo.signature().unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();
        repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
            .unwrap();
    }

    #[test]
    fn test_directory_outside_repository() {
        let dir = TempDir::new().unwrap();
        let result = staged_changes(dir.path());
        assert!(matches!(
            result,
            Err(CmtError::Git(GitError::NotARepository))
        ));
    }

    #[test]
    fn test_clean_index_has_no_staged_changes() {
        let (dir, repo) = test_repo();
        stage(&repo, "README.md", "# hello\n");
        commit_index(&repo, "initial commit");

        let result = staged_changes(dir.path());
        assert!(matches!(
            result,
            Err(CmtError::Git(GitError::NoStagedChanges))
        ));
    }

    #[test]
    fn test_addition_on_unborn_head() {
        let (dir, repo) = test_repo();
        stage(&repo, "src/lib.rs", "pub fn hello() {}\n");

        let staged = staged_changes(dir.path()).unwrap();
        assert!(staged.name_status.contains("A\tsrc/lib.rs"));
        assert!(staged.diff.contains("+pub fn hello() {}"));
    }

    #[test]
    fn test_modification_lists_both_sides() {
        let (dir, repo) = test_repo();
        stage(&repo, "notes.txt", "old line\n");
        commit_index(&repo, "initial commit");
        stage(&repo, "notes.txt", "new line\n");

        let staged = staged_changes(dir.path()).unwrap();
        assert!(staged.name_status.contains("M\tnotes.txt"));
        assert!(staged.diff.contains("-old line"));
        assert!(staged.diff.contains("+new line"));
    }

    #[test]
    fn test_deletion_diffs_against_dev_null() {
        let (dir, repo) = test_repo();
        stage(&repo, "obsolete.rs", "fn gone() {}\n");
        commit_index(&repo, "initial commit");

        fs::remove_file(repo.workdir().unwrap().join("obsolete.rs")).unwrap();
        let mut index = repo.index().unwrap();
        index.remove_path(Path::new("obsolete.rs")).unwrap();
        index.write().unwrap();

        let staged = staged_changes(dir.path()).unwrap();
        assert!(staged.name_status.contains("D\tobsolete.rs"));
        assert!(staged.diff.contains("+++ /dev/null"));
    }

    #[test]
    fn test_listing_covers_every_staged_file() {
        let (dir, repo) = test_repo();
        stage(&repo, "a.txt", "a\n");
        commit_index(&repo, "initial commit");
        stage(&repo, "b.txt", "b\n");
        stage(&repo, "c.txt", "c\n");

        let staged = staged_changes(dir.path()).unwrap();
        assert!(staged.name_status.contains("A\tb.txt"));
        assert!(staged.name_status.contains("A\tc.txt"));
        assert!(!staged.name_status.contains("a.txt"));
    }
}
