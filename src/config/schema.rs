// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from cmt.toml.

use serde::{Deserialize, Serialize};

/// The main configuration structure for cmt.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CmtConfig {
    /// Message rule configuration.
    pub rules: RulesConfig,

    /// Smart prediction configuration.
    pub smart: SmartConfig,

    /// UI/UX configuration.
    pub ui: UiConfig,
}

impl CmtConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Message rule configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Maximum length of the first message line.
    pub max_subject_length: usize,

    /// Maximum length of an interactively entered scope.
    pub max_scope_length: usize,

    /// Maximum length of an interactively entered description.
    pub max_description_length: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_subject_length: 72,
            max_scope_length: 20,
            max_description_length: 50,
        }
    }
}

/// Smart prediction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmartConfig {
    /// Recency window for the file-system fallback, in minutes.
    pub recency_minutes: u64,

    /// Maximum number of files the file-system fallback reports.
    pub max_files: usize,

    /// Glob patterns excluded from the file-system fallback.
    pub exclude: Vec<String>,
}

impl Default for SmartConfig {
    fn default() -> Self {
        Self {
            recency_minutes: 30,
            max_files: 10,
            exclude: vec![
                "node_modules/**".to_string(),
                "target/**".to_string(),
                "vendor/**".to_string(),
                "dist/**".to_string(),
                "build/**".to_string(),
            ],
        }
    }
}

/// UI/UX configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Whether to use colors.
    pub color: bool,

    /// Whether to show hints.
    pub hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            hints: true,
        }
    }
}

/// Conventional commit type.
///
/// A closed set; assembly rejects anything outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Build,
    Ci,
    Chore,
    Revert,
}

impl CommitType {
    /// Get the string representation of the commit type.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Perf => "perf",
            CommitType::Test => "test",
            CommitType::Build => "build",
            CommitType::Ci => "ci",
            CommitType::Chore => "chore",
            CommitType::Revert => "revert",
        }
    }

    /// Get a description of the commit type, used in interactive listings.
    pub fn description(&self) -> &'static str {
        match self {
            CommitType::Feat => "A new feature",
            CommitType::Fix => "A bug fix",
            CommitType::Docs => "Documentation only changes",
            CommitType::Style => "Changes that do not affect the meaning of the code",
            CommitType::Refactor => "A code change that neither fixes a bug nor adds a feature",
            CommitType::Perf => "A code change that improves performance",
            CommitType::Test => "Adding missing tests or correcting existing tests",
            CommitType::Build => "Changes that affect the build system or external dependencies",
            CommitType::Ci => "Changes to CI configuration files and scripts",
            CommitType::Chore => "Other changes that do not modify src or test files",
            CommitType::Revert => "Reverts a previous commit",
        }
    }

    /// Get all commit types, in catalog order.
    pub fn all() -> &'static [CommitType] {
        &[
            CommitType::Feat,
            CommitType::Fix,
            CommitType::Docs,
            CommitType::Style,
            CommitType::Refactor,
            CommitType::Perf,
            CommitType::Test,
            CommitType::Build,
            CommitType::Ci,
            CommitType::Chore,
            CommitType::Revert,
        ]
    }
}

impl std::str::FromStr for CommitType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "feat" | "feature" => Ok(CommitType::Feat),
            "fix" | "bugfix" => Ok(CommitType::Fix),
            "docs" | "doc" => Ok(CommitType::Docs),
            "style" => Ok(CommitType::Style),
            "refactor" => Ok(CommitType::Refactor),
            "perf" | "performance" => Ok(CommitType::Perf),
            "test" | "tests" => Ok(CommitType::Test),
            "build" => Ok(CommitType::Build),
            "ci" => Ok(CommitType::Ci),
            "chore" => Ok(CommitType::Chore),
            "revert" => Ok(CommitType::Revert),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
