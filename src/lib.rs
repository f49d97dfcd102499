// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! cmt - Smart conventional commit messages
//!
//! Predicts a conventional commit message from the changes in a Git
//! repository, without asking a model or the network. Staged changes are
//! classified by language, framework, and edit context, and a heuristic
//! cascade derives the commit type, scope, description, and a confidence
//! score.
//!
//! # Features
//!
//! - **Prediction Engine**: Commit type, scope, and description derived
//!   from a staged diff, with framework-aware phrasing
//! - **Filesystem Fallback**: Recently modified files stand in when
//!   nothing is staged or there is no repository
//! - **Interactive Composer**: Guided message assembly with live preview
//! - **Validator**: Conventional commit format checking for hooks and CI
//!
//! # Example
//!
//! ```no_run
//! use cmt::config::CmtConfig;
//! use cmt::smart::PredictionEngine;
//!
//! let config = CmtConfig::load().unwrap();
//! let mut engine = PredictionEngine::new(config);
//!
//! if let Some(prediction) = engine.analyze(std::path::Path::new(".")).unwrap() {
//!     println!("{}: {}", prediction.commit_type, prediction.description);
//! }
//! ```

// Module declarations
pub mod analysis;
pub mod classify;
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod smart;

// Re-exports for convenience
pub use config::CmtConfig;
pub use error::{CmtError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of cmt.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
