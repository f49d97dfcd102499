// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Path classification: languages, frameworks, and file categories.

pub mod framework;
pub mod language;

pub use framework::{
    detect_from_manifests, framework_for_path, framework_spec, primary_framework, scope_for_path,
    scopes_for, vote_framework, FrameworkSpec, FRAMEWORKS,
};
pub use language::{
    category_for_path, is_config_file, is_documentation_file, is_test_file, language_for_path,
    primary_language, FileCategory, LanguageSpec, LANGUAGES,
};
