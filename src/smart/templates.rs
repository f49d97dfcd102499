// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Description phrase tables and rendering.
//!
//! Predicted descriptions come from fixed phrase tables keyed by framework,
//! scope, commit type, and change context. Each table entry holds several
//! equivalent phrasings; a [`VariantPicker`] chooses among them so output
//! varies between runs while tests stay deterministic.

use handlebars::Handlebars;
use lazy_static::lazy_static;
use rand::prelude::*;
use regex::Regex;
use serde_json::json;

use crate::config::CommitType;

/// How the predicted scope was touched, for phrase selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionContext {
    Add,
    Modify,
    Fix,
    Delete,
}

/// Chooses one phrasing out of `len` equivalent variants.
///
/// Implementations must return an index strictly below `len`.
pub trait VariantPicker {
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform random variant selection.
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Picker with a fixed seed, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl VariantPicker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        if len <= 1 {
            0
        } else {
            self.rng.gen_range(0..len)
        }
    }
}

/// Always selects the first variant. Used in tests and anywhere output
/// must be stable.
pub struct FirstPicker;

impl VariantPicker for FirstPicker {
    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}

lazy_static! {
    static ref RENDERER: Handlebars<'static> = {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry
    };
    static ref SCOPE_NOISE: Regex =
        Regex::new(r"migrations|seeds|factories|services|controllers|models|tests?").unwrap();
}

/// Strip framework scope nouns so phrases like "create {{scope}} model" do
/// not read "create models model". Empty results fall back to "component".
pub fn clean_scope(scope: &str) -> String {
    let cleaned = SCOPE_NOISE.replace_all(scope, "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        "component".to_string()
    } else {
        cleaned.to_string()
    }
}

fn render(template: &str, scope: &str) -> String {
    RENDERER
        .render_template(template, &json!({ "scope": scope }))
        .unwrap_or_else(|_| template.replace("{{scope}}", scope))
}

/// Pick and render a description for the given prediction facts.
///
/// Framework tables require an exact scope, type, and context match;
/// anything else falls through to the generic table, which substitutes
/// feat phrasing for unknown types and modify phrasing for unknown
/// contexts.
pub fn describe(
    framework: Option<&str>,
    commit_type: CommitType,
    scope_name: &str,
    context: DescriptionContext,
    picker: &mut dyn VariantPicker,
) -> String {
    if let Some(framework) = framework {
        let variants = match framework {
            "laravel" => laravel_variants(scope_name, commit_type, context),
            "react" => react_variants(scope_name, commit_type, context),
            "django" => django_variants(scope_name, commit_type, context),
            _ => None,
        };
        if let Some(variants) = variants {
            let index = picker.pick(variants.len());
            return render(variants[index], &clean_scope(scope_name));
        }
    }

    let variants = generic_variants(commit_type, context);
    let index = picker.pick(variants.len());
    render(variants[index], scope_name)
}

fn generic_variants(
    commit_type: CommitType,
    context: DescriptionContext,
) -> &'static [&'static str] {
    use CommitType::*;
    use DescriptionContext::{Add, Delete};

    match (commit_type, context) {
        (Feat, Add) => &[
            "add {{scope}} functionality",
            "implement {{scope}} feature",
            "create {{scope}}",
            "introduce {{scope}} capability",
        ],
        (Feat, _) => &[
            "enhance {{scope}} functionality",
            "improve {{scope}} feature",
            "extend {{scope}} capabilities",
        ],
        (Fix, Add) => &["add {{scope}} error handling", "implement {{scope}} fix"],
        (Fix, Delete) => &["remove {{scope}} bug", "eliminate {{scope}} issue"],
        (Fix, _) => &[
            "resolve {{scope}} issue",
            "fix {{scope}} bug",
            "correct {{scope}} behavior",
            "patch {{scope}} problem",
        ],
        (Refactor, Add) => &[
            "add {{scope}} improvements",
            "implement {{scope}} optimizations",
        ],
        (Refactor, Delete) => &["clean up {{scope}} code", "remove {{scope}} redundancies"],
        (Refactor, _) => &[
            "restructure {{scope}} code",
            "optimize {{scope}} implementation",
            "improve {{scope}} architecture",
            "reorganize {{scope}} structure",
        ],
        (Test, Add) => &["add {{scope}} test coverage", "implement {{scope}} tests"],
        (Test, _) => &[
            "update {{scope}} test cases",
            "improve {{scope}} test coverage",
        ],
        (Docs, Add) => &["add {{scope}} documentation", "create {{scope}} docs"],
        (Docs, _) => &["update {{scope}} documentation", "improve {{scope}} docs"],
        (Style, _) => &[
            "update {{scope}} styles",
            "improve {{scope}} appearance",
            "adjust {{scope}} styling",
        ],
        (Chore, Add) => &["add {{scope}} configuration", "set up {{scope}} settings"],
        (Chore, Delete) => &[
            "remove {{scope}} configuration",
            "clean up {{scope}} settings",
        ],
        (Chore, _) => &[
            "update {{scope}} configuration",
            "modify {{scope}} setup",
            "adjust {{scope}} settings",
        ],
        // Types without tables of their own borrow feat phrasing.
        (Perf | Build | Ci | Revert, context) => generic_variants(Feat, context),
    }
}

fn laravel_variants(
    scope: &str,
    commit_type: CommitType,
    context: DescriptionContext,
) -> Option<&'static [&'static str]> {
    use CommitType::*;
    use DescriptionContext::{Add, Modify};

    let variants: &'static [&'static str] = match (scope, commit_type, context) {
        ("migrations", Feat, Add) => &["create {{scope}} table", "add {{scope}} table structure"],
        ("migrations", Feat, Modify) => &[
            "update {{scope}} table structure",
            "modify {{scope}} migration",
        ],
        ("migrations", Refactor, Modify) => &[
            "refactor {{scope}} table structure",
            "optimize {{scope}} migration",
        ],
        ("seeds", Feat, Add) => &["add {{scope}} seed data", "populate {{scope}} data"],
        ("seeds", Feat, Modify) => &["update {{scope}} seed data", "modify {{scope}} seeder"],
        ("seeds", Chore, Modify) => &["update {{scope}} seed records", "adjust {{scope}} data"],
        ("factories", Feat, Add) => &["create {{scope}} factory", "add {{scope}} model factory"],
        ("factories", Feat, Modify) => &["update {{scope}} factory", "modify {{scope}} model factory"],
        ("services", Feat, Add) => &["implement {{scope}} service", "add {{scope}} business logic"],
        ("services", Fix, Modify) => &[
            "fix {{scope}} service logic",
            "resolve {{scope}} service issue",
        ],
        ("services", Refactor, Modify) => &[
            "refactor {{scope}} service",
            "optimize {{scope}} service logic",
        ],
        ("requests", Feat, Add) => &[
            "add {{scope}} validation rules",
            "create {{scope}} form request",
        ],
        ("requests", Fix, Modify) => &[
            "fix {{scope}} validation rules",
            "correct {{scope}} request validation",
        ],
        ("controllers", Feat, Add) => &["implement {{scope}} controller", "add {{scope}} endpoints"],
        ("controllers", Fix, Modify) => &[
            "fix {{scope}} controller logic",
            "resolve {{scope}} controller issue",
        ],
        ("controllers", Refactor, Modify) => &[
            "refactor {{scope}} controller",
            "optimize {{scope}} controller methods",
        ],
        ("models", Feat, Add) => &["create {{scope}} model", "add {{scope}} entity"],
        ("models", Fix, Modify) => &[
            "fix {{scope}} model relationships",
            "correct {{scope}} model attributes",
        ],
        ("models", Refactor, Modify) => &["refactor {{scope}} model", "optimize {{scope}} model queries"],
        ("events", Feat, Add) => &["add {{scope}} event", "create {{scope}} event class"],
        ("listeners", Feat, Add) => &["add {{scope}} event listener", "create {{scope}} listener"],
        ("tests", Test, Add) => &["add {{scope}} test coverage", "create {{scope}} tests"],
        ("tests", Fix, Modify) => &["fix {{scope}} test cases", "correct {{scope}} test assertions"],
        _ => return None,
    };

    Some(variants)
}

fn react_variants(
    scope: &str,
    commit_type: CommitType,
    context: DescriptionContext,
) -> Option<&'static [&'static str]> {
    use CommitType::*;
    use DescriptionContext::{Add, Modify};

    let variants: &'static [&'static str] = match (scope, commit_type, context) {
        ("components", Feat, Add) => &["create {{scope}} component", "add {{scope}} UI component"],
        ("components", Feat, Modify) => &[
            "update {{scope}} component",
            "enhance {{scope}} component functionality",
        ],
        ("components", Fix, Modify) => &[
            "fix {{scope}} component rendering",
            "resolve {{scope}} component issue",
        ],
        ("components", Refactor, Modify) => &[
            "refactor {{scope}} component",
            "optimize {{scope}} component performance",
        ],
        ("hooks", Feat, Add) => &[
            "create {{scope}} custom hook",
            "add {{scope}} hook functionality",
        ],
        ("hooks", Refactor, Modify) => &[
            "refactor {{scope}} hook logic",
            "optimize {{scope}} hook implementation",
        ],
        ("store", Feat, Add) => &[
            "implement {{scope}} store",
            "add {{scope}} state management",
        ],
        ("store", Refactor, Modify) => &[
            "refactor {{scope}} store structure",
            "optimize {{scope}} state management",
        ],
        _ => return None,
    };

    Some(variants)
}

fn django_variants(
    scope: &str,
    commit_type: CommitType,
    context: DescriptionContext,
) -> Option<&'static [&'static str]> {
    use CommitType::*;
    use DescriptionContext::{Add, Modify};

    let variants: &'static [&'static str] = match (scope, commit_type, context) {
        ("models", Feat, Add) => &["create {{scope}} model", "add {{scope}} database model"],
        ("models", Feat, Modify) => &[
            "update {{scope}} model fields",
            "modify {{scope}} model structure",
        ],
        ("views", Feat, Add) => &["implement {{scope}} view", "add {{scope}} view logic"],
        ("views", Feat, Modify) => &[
            "update {{scope}} view functionality",
            "modify {{scope}} view logic",
        ],
        ("migrations", Feat, Add) => &[
            "create {{scope}} migration",
            "add {{scope}} database migration",
        ],
        ("migrations", Feat, Modify) => &["update {{scope}} migration", "modify {{scope}} migration file"],
        _ => return None,
    };

    Some(variants)
}
