// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Provides the two input sources for prediction: staged changes read
//! from the repository index, and a recently-modified-file fallback for
//! directories where no staged changes are available.

pub mod fallback;

mod diff;

pub use diff::{staged_changes, StagedChanges};
