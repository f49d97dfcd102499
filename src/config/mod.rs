// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for cmt.
//!
//! This module handles loading and parsing configuration from files and
//! defaults.

mod loader;
mod schema;

pub use loader::{find_config_file, load_config, parse_config};
pub use schema::*;
