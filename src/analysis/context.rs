// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Per-file edit context from unified diff text.
//!
//! Each changed file gets its hunk lines extracted from the full diff and
//! classified through a fixed cascade. The cascade order is part of the
//! contract: earlier rules win, so a tiny edit is a fix even when its text
//! mentions refactoring.

/// Classification of a single file's edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditContext {
    Fix,
    Feat,
    Refactor,
    Chore,
    Modify,
}

impl EditContext {
    /// Get the string representation of the context.
    pub fn as_str(&self) -> &'static str {
        match self {
            EditContext::Fix => "fix",
            EditContext::Feat => "feat",
            EditContext::Refactor => "refactor",
            EditContext::Chore => "chore",
            EditContext::Modify => "modify",
        }
    }
}

impl std::fmt::Display for EditContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Extract the hunk lines belonging to one file from a unified diff.
///
/// `---`/`+++` header lines delimit file spans: a header opens the span
/// when it contains the path and closes it otherwise (so a `+++ /dev/null`
/// header after a deletion closes the span again). Inside a span, lines
/// starting with `+`, `-`, or `@` are kept.
pub fn extract_file_diff(diff: &str, path: &str) -> String {
    let mut in_file = false;
    let mut excerpt: Vec<&str> = Vec::new();

    for line in diff.lines() {
        if line.starts_with("---") || line.starts_with("+++") {
            in_file = line.contains(path);
        } else if in_file
            && (line.starts_with('+') || line.starts_with('-') || line.starts_with('@'))
        {
            excerpt.push(line);
        }
    }

    excerpt.join("\n")
}

/// Classify a file's edit from its diff excerpt. First matching rule wins:
///
/// 1. three or fewer changed lines is a fix
/// 2. heavy churn on both sides is a refactor
/// 3. strongly additive is a feat
/// 4. configuration paths are chores
/// 5. fix/bug/error in the text is a fix
/// 6. refactor/optimize in the text is a refactor
/// 7. everything else is a plain modify
pub fn classify_edit(excerpt: &str, path: &str) -> EditContext {
    let added = excerpt.lines().filter(|line| line.starts_with('+')).count();
    let removed = excerpt.lines().filter(|line| line.starts_with('-')).count();
    let total = added + removed;

    if total <= 3 {
        return EditContext::Fix;
    }

    if removed > 8 && added > 8 {
        return EditContext::Refactor;
    }

    if added > removed * 2 {
        return EditContext::Feat;
    }

    if path.contains("config") || path.contains("setting") {
        return EditContext::Chore;
    }

    if excerpt.contains("fix") || excerpt.contains("bug") || excerpt.contains("error") {
        return EditContext::Fix;
    }

    if excerpt.contains("refactor") || excerpt.contains("optimize") {
        return EditContext::Refactor;
    }

    EditContext::Modify
}
