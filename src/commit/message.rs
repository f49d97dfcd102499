// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Conventional commit message assembly and validation.

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::{CommitType, RulesConfig};
use crate::error::{MessageError, Result};

lazy_static! {
    static ref CONVENTIONAL_FORMAT: Regex = Regex::new(
        r"^(feat|fix|docs|style|refactor|perf|test|build|ci|chore|revert)(\([^)]+\))?: .+"
    )
    .unwrap();
}

/// Scope names offered for completion in prompts and the scopes command.
const COMMON_SCOPES: &[&str] = &[
    "auth",
    "api",
    "ui",
    "database",
    "config",
    "deployment",
    "validation",
    "middleware",
    "router",
    "component",
    "style",
    "test",
    "docs",
    "build",
    "ci",
    "models",
    "controllers",
    "services",
    "utils",
    "hooks",
    "store",
    "views",
];

/// A conventional commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    /// The commit type.
    pub commit_type: CommitType,
    /// Optional scope.
    pub scope: Option<String>,
    /// Description without the type prefix. Empty descriptions render as
    /// the type's stock phrase.
    pub description: String,
    /// Whether the message carries a breaking change marker.
    pub breaking: bool,
}

impl CommitMessage {
    /// Create a message with an empty description.
    pub fn new(commit_type: CommitType) -> Self {
        Self {
            commit_type,
            scope: None,
            description: String::new(),
            breaking: false,
        }
    }

    /// Build from raw parts, rejecting unknown type names.
    pub fn from_parts(
        type_name: &str,
        scope: Option<&str>,
        description: Option<&str>,
        breaking: bool,
    ) -> Result<Self> {
        let commit_type: CommitType =
            type_name
                .parse()
                .map_err(|_| MessageError::UnknownType {
                    commit_type: type_name.to_string(),
                })?;

        let mut message = Self::new(commit_type).with_breaking(breaking);
        if let Some(scope) = scope {
            message = message.with_scope(scope);
        }
        if let Some(description) = description {
            message = message.with_description(description);
        }
        Ok(message)
    }

    /// Set the scope. Blank scopes are treated as absent.
    pub fn with_scope(mut self, scope: &str) -> Self {
        let scope = scope.trim();
        self.scope = if scope.is_empty() {
            None
        } else {
            Some(scope.to_string())
        };
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.trim().to_string();
        self
    }

    /// Set the breaking change flag.
    pub fn with_breaking(mut self, breaking: bool) -> Self {
        self.breaking = breaking;
        self
    }

    /// The `type(scope): description` first line.
    pub fn header(&self) -> String {
        let description = if self.description.is_empty() {
            default_description(self.commit_type, self.scope.as_deref())
        } else {
            self.description.clone()
        };

        match &self.scope {
            Some(scope) => format!("{}({}): {}", self.commit_type, scope, description),
            None => format!("{}: {}", self.commit_type, description),
        }
    }

    /// The complete message, with an open BREAKING CHANGE block when
    /// flagged so the author can fill in the details.
    pub fn format(&self) -> String {
        let mut message = self.header();
        if self.breaking {
            message.push_str("\n\nBREAKING CHANGE: ");
        }
        message
    }
}

/// Stock description for a type, used when the author supplies none.
pub fn default_description(commit_type: CommitType, scope: Option<&str>) -> String {
    use CommitType::*;

    let scope = scope.unwrap_or("component");
    match commit_type {
        Fix => format!("resolve {} issue", scope),
        Refactor => format!("restructure {} code", scope),
        Test => format!("add {} test coverage", scope),
        Docs => format!("update {} documentation", scope),
        Style => format!("update {} styles", scope),
        Chore => format!("update {} configuration", scope),
        Feat | Perf | Build | Ci | Revert => format!("add {} functionality", scope),
    }
}

/// Outcome of checking a message against the conventional rules.
#[derive(Debug, Clone, Default)]
pub struct Validation {
    /// Human-readable findings; empty means the message passed.
    pub issues: Vec<String>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check a raw message against the conventional commit rules.
pub fn validate(message: &str, rules: &RulesConfig) -> Validation {
    let mut issues = Vec::new();

    if !CONVENTIONAL_FORMAT.is_match(message) {
        issues.push("Message does not follow conventional commit format".to_string());
    }

    let first_line = message.lines().next().unwrap_or("");
    if first_line.chars().count() > rules.max_subject_length {
        issues.push(format!(
            "First line should be {} characters or less",
            rules.max_subject_length
        ));
    }

    if message.trim().is_empty() {
        issues.push("Commit message cannot be empty".to_string());
    }

    Validation { issues }
}

/// Up to five common scope names matching `input`.
pub fn suggest_scopes(input: Option<&str>) -> Vec<&'static str> {
    match input.map(str::trim).filter(|s| !s.is_empty()) {
        None => COMMON_SCOPES.iter().take(5).copied().collect(),
        Some(filter) => {
            let filter = filter.to_lowercase();
            COMMON_SCOPES
                .iter()
                .filter(|scope| scope.contains(&filter))
                .take(5)
                .copied()
                .collect()
        }
    }
}
