// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Language classification from file paths.
//!
//! A static table maps file-name suffixes to languages. Table order is
//! significant: classification returns the first entry that matches, and
//! majority votes break ties toward the entry declared first.

/// A language entry in the static classification table.
#[derive(Debug, Clone, Copy)]
pub struct LanguageSpec {
    /// Canonical language name.
    pub name: &'static str,
    /// File-name suffixes that identify the language.
    pub extensions: &'static [&'static str],
    /// Path substrings that mark test files of this language.
    pub test_patterns: &'static [&'static str],
}

/// The language table, in declared precedence order.
pub const LANGUAGES: &[LanguageSpec] = &[
    LanguageSpec {
        name: "javascript",
        extensions: &[".js", ".jsx", ".mjs", ".cjs"],
        test_patterns: &[".test.", ".spec.", "test/", "__tests__/"],
    },
    LanguageSpec {
        name: "typescript",
        extensions: &[".ts", ".tsx", ".d.ts", ".mts", ".cts"],
        test_patterns: &[".test.", ".spec.", "test/", "__tests__/"],
    },
    LanguageSpec {
        name: "php",
        extensions: &[".php", ".php4", ".php5", ".php7", ".phtml"],
        test_patterns: &["Test.php", "test/", "tests/", "TestCase.php"],
    },
    LanguageSpec {
        name: "python",
        extensions: &[".py", ".pyw", ".pyx", ".pyc", ".pyo", ".pyd"],
        test_patterns: &["_test.py", "test_", ".spec.py", "tests/"],
    },
    LanguageSpec {
        name: "java",
        extensions: &[".java", ".class", ".jar"],
        test_patterns: &["Test.java", "test/", "tests/", "IT.java", "TestCase.java"],
    },
    LanguageSpec {
        name: "go",
        extensions: &[".go", ".mod", ".sum"],
        test_patterns: &["_test.go", "_suite_test.go", "test/"],
    },
    LanguageSpec {
        name: "ruby",
        extensions: &[".rb", ".rbw", ".rake", ".gemspec"],
        test_patterns: &["_spec.rb", "_test.rb", "spec/", "test/"],
    },
    LanguageSpec {
        name: "csharp",
        extensions: &[".cs", ".csx"],
        test_patterns: &["Test.cs", "Tests/", "test/", "Spec.cs"],
    },
    LanguageSpec {
        name: "cpp",
        extensions: &[".cpp", ".cc", ".cxx", ".c++", ".h", ".hpp", ".hh", ".hxx"],
        test_patterns: &["_test.", "_spec.", "test/", "tests/"],
    },
    LanguageSpec {
        name: "c",
        extensions: &[".c", ".h"],
        test_patterns: &["_test.", "_spec.", "test/", "tests/"],
    },
    LanguageSpec {
        name: "rust",
        extensions: &[".rs", ".rlib"],
        test_patterns: &["_test.rs", "_spec.rs", "tests/"],
    },
    LanguageSpec {
        name: "swift",
        extensions: &[".swift"],
        test_patterns: &["Test.swift", "Tests/", "test/"],
    },
    LanguageSpec {
        name: "kotlin",
        extensions: &[".kt", ".kts"],
        test_patterns: &["Test.kt", "test/", "tests/"],
    },
    LanguageSpec {
        name: "scala",
        extensions: &[".scala", ".sc"],
        test_patterns: &["Test.scala", "Spec.scala", "test/", "tests/"],
    },
    LanguageSpec {
        name: "perl",
        // Bare ".t" as a test marker would swallow every ".ts" path, so
        // only the unambiguous convention is kept.
        extensions: &[".pl", ".pm", ".t"],
        test_patterns: &["_test.pl", "test/"],
    },
    LanguageSpec {
        name: "r",
        extensions: &[".r", ".R", ".Rmd"],
        test_patterns: &["_test.R", "test_", "tests/"],
    },
    LanguageSpec {
        name: "haskell",
        extensions: &[".hs", ".lhs"],
        test_patterns: &["Test.hs", "Spec.hs", "test/"],
    },
    LanguageSpec {
        name: "elixir",
        extensions: &[".ex", ".exs"],
        test_patterns: &["_test.exs", "test/"],
    },
    LanguageSpec {
        name: "clojure",
        extensions: &[".clj", ".cljs", ".cljc"],
        test_patterns: &["_test.clj", "test/"],
    },
    LanguageSpec {
        name: "erlang",
        extensions: &[".erl", ".hrl"],
        test_patterns: &["_test.erl", "_SUITE.erl", "test/"],
    },
    LanguageSpec {
        name: "dart",
        extensions: &[".dart"],
        test_patterns: &["_test.dart", "test/"],
    },
    LanguageSpec {
        name: "lua",
        extensions: &[".lua"],
        test_patterns: &["_test.lua", "spec/", "test/"],
    },
    LanguageSpec {
        name: "shell",
        extensions: &[".sh", ".bash", ".zsh", ".fish"],
        test_patterns: &[".test.", "_test.", "test/"],
    },
    LanguageSpec {
        name: "html",
        extensions: &[".html", ".htm", ".xhtml"],
        test_patterns: &[".test.", "_test.", "test/"],
    },
    LanguageSpec {
        name: "css",
        extensions: &[".css", ".scss", ".sass", ".less", ".styl"],
        test_patterns: &[".test.", "_test.", "test/"],
    },
    LanguageSpec {
        name: "sql",
        extensions: &[".sql", ".psql"],
        test_patterns: &["_test.sql", "test/"],
    },
    LanguageSpec {
        name: "yaml",
        extensions: &[".yaml", ".yml"],
        test_patterns: &[".test.", "_test."],
    },
    LanguageSpec {
        name: "json",
        extensions: &[".json"],
        test_patterns: &[".test.", "_test."],
    },
    LanguageSpec {
        name: "xml",
        extensions: &[".xml", ".xsd", ".xsl"],
        test_patterns: &[".test.", "_test."],
    },
    LanguageSpec {
        name: "markdown",
        extensions: &[".md", ".markdown"],
        test_patterns: &[],
    },
    LanguageSpec {
        name: "docker",
        extensions: &["Dockerfile", ".dockerignore"],
        test_patterns: &[],
    },
    LanguageSpec {
        name: "makefile",
        extensions: &["Makefile", ".mk"],
        test_patterns: &[],
    },
    LanguageSpec {
        name: "config",
        extensions: &[".env", ".ini", ".cfg", ".conf", ".properties"],
        test_patterns: &[],
    },
];

/// Path substrings that mark well-known configuration files.
const CONFIG_MARKERS: &[&str] = &[
    "package.json",
    "composer.json",
    "requirements.txt",
    "pom.xml",
    "build.gradle",
    "go.mod",
    "gemfile",
    "web.config",
    "dockerfile",
    ".env",
    "config/",
    "settings.",
    "configuration.",
];

/// Path substrings that mark documentation files.
const DOC_MARKERS: &[&str] = &[".md", ".txt", ".rst", ".html", "readme", "docs/", "documentation/"];

/// Path substrings that mark stylesheet files.
const STYLE_MARKERS: &[&str] = &[".css", ".scss", ".less", ".styl"];

/// Classify a single path. Returns the first table entry with a matching
/// suffix, or `None` for unknown extensions.
pub fn language_for_path(path: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|spec| spec.extensions.iter().any(|ext| path.ends_with(ext)))
        .map(|spec| spec.name)
}

/// The dominant language over a set of paths.
///
/// Ties resolve to the language declared first in the table.
pub fn primary_language<'a, I>(paths: I) -> Option<&'static str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = vec![0usize; LANGUAGES.len()];
    for path in paths {
        if let Some(idx) = LANGUAGES
            .iter()
            .position(|spec| spec.extensions.iter().any(|ext| path.ends_with(ext)))
        {
            counts[idx] += 1;
        }
    }

    let mut best: Option<(usize, usize)> = None;
    for (idx, &count) in counts.iter().enumerate() {
        if count > 0 && best.map_or(true, |(_, c)| count > c) {
            best = Some((idx, count));
        }
    }
    best.map(|(idx, _)| LANGUAGES[idx].name)
}

/// Whether the path matches any language's test conventions.
pub fn is_test_file(path: &str) -> bool {
    LANGUAGES
        .iter()
        .any(|spec| spec.test_patterns.iter().any(|pat| path.contains(pat)))
}

/// Whether the path looks like a configuration file.
pub fn is_config_file(path: &str) -> bool {
    let lower = path.to_lowercase();
    CONFIG_MARKERS.iter().any(|pat| lower.contains(pat))
}

/// Whether the path looks like documentation.
pub fn is_documentation_file(path: &str) -> bool {
    let lower = path.to_lowercase();
    DOC_MARKERS.iter().any(|pat| lower.contains(pat))
}

/// High-level category a changed file belongs to.
///
/// Every file gets exactly one category; checks run in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileCategory {
    Test,
    Config,
    Docs,
    Style,
    Migration,
    Seed,
    Code,
}

impl FileCategory {
    /// Get the string representation of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileCategory::Test => "test",
            FileCategory::Config => "config",
            FileCategory::Docs => "docs",
            FileCategory::Style => "style",
            FileCategory::Migration => "migration",
            FileCategory::Seed => "seed",
            FileCategory::Code => "code",
        }
    }
}

impl std::fmt::Display for FileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Categorize a path. Precedence: test > config > docs > style > migration
/// > seed > code.
pub fn category_for_path(path: &str) -> FileCategory {
    if is_test_file(path) {
        FileCategory::Test
    } else if is_config_file(path) {
        FileCategory::Config
    } else if is_documentation_file(path) {
        FileCategory::Docs
    } else if STYLE_MARKERS.iter().any(|pat| path.contains(pat)) {
        FileCategory::Style
    } else if path.contains("migration") {
        FileCategory::Migration
    } else if path.contains("seed") || path.contains("factory") {
        FileCategory::Seed
    } else {
        FileCategory::Code
    }
}
