// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message assembly, validation, and guided composition.

mod compose;
mod message;
mod preview;

pub use compose::CommitComposer;
pub use message::{default_description, suggest_scopes, validate, CommitMessage, Validation};
pub use preview::CommitPreview;
