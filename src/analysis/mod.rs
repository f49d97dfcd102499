// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Change analysis module.
//!
//! This module turns raw change listings and diff text into the aggregate
//! facts the prediction engine works from.

mod changeset;
mod context;

pub use changeset::{ChangeSet, ChangeStatus, ChangedFile, ScopeStat};
pub use context::{classify_edit, extract_file_diff, EditContext};
