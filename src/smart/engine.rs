// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Heuristic commit message prediction.
//!
//! The engine looks at staged changes, classifies them by language,
//! framework, and edit context, and derives a conventional commit type,
//! scope, and description with a confidence score. When nothing is staged
//! it falls back to recently modified files on disk.

use std::collections::BTreeMap;
use std::path::Path;

use crate::analysis::{ChangeSet, ChangeStatus, ScopeStat};
use crate::classify::{primary_framework, primary_language, scope_for_path, scopes_for, FileCategory};
use crate::config::{CmtConfig, CommitType};
use crate::error::{CmtError, GitError, Result};
use crate::git::{self, fallback};

use super::templates::{self, DescriptionContext, RandomPicker, VariantPicker};

/// A predicted commit message with its supporting facts.
#[derive(Debug, Clone)]
pub struct Prediction {
    /// The predicted commit type.
    pub commit_type: CommitType,
    /// The predicted scope, when one could be derived.
    pub scope: Option<String>,
    /// The predicted description, without the type prefix.
    pub description: String,
    /// Confidence score between 0.5 and 0.95.
    pub confidence: f64,
    /// Dominant language of the changed files.
    pub language: Option<&'static str>,
    /// Detected framework, from manifests or the per-path vote.
    pub framework: Option<&'static str>,
}

/// An alternative reading of the same change set.
#[derive(Debug, Clone)]
pub struct Alternative {
    pub commit_type: CommitType,
    pub description: String,
    pub reason: &'static str,
}

impl Prediction {
    /// Alternative types worth offering alongside this prediction.
    ///
    /// Feat predictions get a fix alternative and refactor predictions a
    /// perf alternative; everything else stands alone.
    pub fn alternatives(&self) -> Vec<Alternative> {
        let scope = self.scope.as_deref().unwrap_or("component");
        let mut alternatives = Vec::new();

        match self.commit_type {
            CommitType::Feat => alternatives.push(Alternative {
                commit_type: CommitType::Fix,
                description: format!("resolve {} issue", scope),
                reason: "If this fixes a bug rather than adds features",
            }),
            CommitType::Refactor => alternatives.push(Alternative {
                commit_type: CommitType::Perf,
                description: format!("optimize {} performance", scope),
                reason: "If this improves performance",
            }),
            _ => {}
        }

        alternatives
    }
}

/// The prediction engine.
pub struct PredictionEngine {
    config: CmtConfig,
    picker: Box<dyn VariantPicker>,
}

impl PredictionEngine {
    /// Engine with random description variants.
    pub fn new(config: CmtConfig) -> Self {
        Self::with_picker(config, Box::new(RandomPicker::new()))
    }

    /// Engine with a caller-supplied variant picker.
    pub fn with_picker(config: CmtConfig, picker: Box<dyn VariantPicker>) -> Self {
        Self { config, picker }
    }

    /// Analyze the repository at `dir` and predict a commit message.
    ///
    /// Staged changes are preferred. An empty index, or no repository at
    /// all, falls back to files modified within the configured recency
    /// window. `None` means there was nothing to analyze.
    pub fn analyze(&mut self, dir: &Path) -> Result<Option<Prediction>> {
        match git::staged_changes(dir) {
            Ok(staged) => {
                let changes = ChangeSet::from_listing(&staged.name_status, &staged.diff);
                if !changes.is_empty() {
                    return Ok(self.predict(&changes, dir));
                }
                tracing::debug!("Staged listing held no usable files, scanning recent files");
            }
            Err(CmtError::Git(GitError::NotARepository | GitError::NoStagedChanges)) => {
                tracing::debug!("No staged changes available, scanning recent files");
            }
            Err(err) => return Err(err),
        }

        let recent = fallback::recent_files(dir, &self.config.smart);
        if recent.is_empty() {
            return Ok(None);
        }
        let changes = ChangeSet::from_modified_paths(recent);
        Ok(self.predict(&changes, dir))
    }

    /// Predict from a raw name-status listing and unified diff.
    ///
    /// Manifest probes run against `dir`. This is the deterministic core
    /// of [`analyze`](Self::analyze) and is directly usable for testing
    /// or scripting.
    pub fn analyze_listing(
        &mut self,
        name_status: &str,
        diff: &str,
        dir: &Path,
    ) -> Option<Prediction> {
        let changes = ChangeSet::from_listing(name_status, diff);
        self.predict(&changes, dir)
    }

    fn predict(&mut self, changes: &ChangeSet, dir: &Path) -> Option<Prediction> {
        if changes.is_empty() {
            return None;
        }

        let language = primary_language(changes.paths());
        let framework = primary_framework(changes.paths(), dir);

        let commit_type = framework
            .and_then(|name| framework_commit_type(changes, name))
            .unwrap_or_else(|| generic_commit_type(changes));

        let scope = predict_scope(changes, framework);
        let scope_name = scope.clone().unwrap_or_else(|| "component".to_string());
        let context = description_context(changes, scope.as_deref());
        let description = templates::describe(
            framework,
            commit_type,
            &scope_name,
            context,
            self.picker.as_mut(),
        );
        let confidence = confidence_score(framework, scope.as_deref(), changes);

        tracing::debug!(
            "Predicted {} (scope {:?}, context {:?}) at {:.2}",
            commit_type,
            scope,
            context,
            confidence
        );

        Some(Prediction {
            commit_type,
            scope,
            description,
            confidence,
            language,
            framework,
        })
    }
}

/// Framework-specific type rules.
///
/// Candidate scopes are visited in the framework's declared order and the
/// first rule that fires decides the type. Scopes without a rule, or whose
/// rule declines, pass through to the next candidate; when none fires the
/// generic rules take over.
fn framework_commit_type(changes: &ChangeSet, framework: &str) -> Option<CommitType> {
    let rule = match framework {
        "laravel" => laravel_rule,
        "react" => react_rule,
        "django" => django_rule,
        _ => return None,
    };

    for scope in scopes_for(framework) {
        if let Some(stat) = changes.specific_scopes.get(scope) {
            if let Some(commit_type) = rule(scope, stat, changes) {
                return Some(commit_type);
            }
        }
    }
    None
}

fn laravel_rule(scope: &str, stat: &ScopeStat, changes: &ChangeSet) -> Option<CommitType> {
    use CommitType::*;

    let added = stat.statuses.contains(&ChangeStatus::Added);
    let modified = stat.statuses.contains(&ChangeStatus::Modified);
    let few = changes.files.len() <= 2;

    match scope {
        "migrations" => {
            if added {
                Some(Feat)
            } else if modified {
                Some(Refactor)
            } else {
                None
            }
        }
        "seeds" | "factories" => {
            if added {
                Some(Feat)
            } else if modified {
                Some(Chore)
            } else {
                None
            }
        }
        "controllers" | "models" | "services" | "repositories" => Some(if added {
            Feat
        } else if few {
            Fix
        } else {
            Refactor
        }),
        "requests" | "rules" => Some(if added { Feat } else { Fix }),
        "events" | "listeners" => Some(if added { Feat } else { Refactor }),
        "tests" => Some(if added { Test } else { Fix }),
        _ => None,
    }
}

fn react_rule(scope: &str, stat: &ScopeStat, changes: &ChangeSet) -> Option<CommitType> {
    use CommitType::*;

    let added = stat.statuses.contains(&ChangeStatus::Added);
    let few = changes.files.len() <= 2;

    match scope {
        "components" => Some(if added {
            Feat
        } else if few {
            Fix
        } else {
            Refactor
        }),
        "hooks" | "store" => Some(if added { Feat } else { Refactor }),
        "styles" => Some(Style),
        _ => None,
    }
}

fn django_rule(scope: &str, stat: &ScopeStat, changes: &ChangeSet) -> Option<CommitType> {
    use CommitType::*;

    let added = stat.statuses.contains(&ChangeStatus::Added);
    let few = changes.files.len() <= 2;

    match scope {
        "models" | "views" => Some(if added {
            Feat
        } else if few {
            Fix
        } else {
            Refactor
        }),
        "migrations" => Some(if added { Feat } else { Refactor }),
        "tests" => Some(if added { Test } else { Fix }),
        _ => None,
    }
}

/// Generic type rules, applied in order until one fires.
fn generic_commit_type(changes: &ChangeSet) -> CommitType {
    use CommitType::*;

    if changes.deleted > changes.added + changes.modified {
        return Refactor;
    }

    if changes.added > changes.modified * 2 {
        return Feat;
    }

    if changes.modified > 0 && changes.files.len() <= 3 {
        return if changes.has_fix_context() {
            Fix
        } else {
            Refactor
        };
    }

    if changes.categories.contains(&FileCategory::Test) {
        return Test;
    }
    if changes.categories.contains(&FileCategory::Docs) {
        return Docs;
    }
    if changes.categories.contains(&FileCategory::Style) {
        return Style;
    }
    if changes.categories.contains(&FileCategory::Config) {
        return Chore;
    }
    if changes.categories.contains(&FileCategory::Migration) {
        return if changes.added > 0 { Feat } else { Refactor };
    }
    if changes.categories.contains(&FileCategory::Seed) {
        return if changes.added > 0 { Feat } else { Chore };
    }

    Refactor
}

/// Scope prediction.
///
/// Framework scope statistics win when present, then a recount of the
/// primary framework's declared scopes over all paths, then the most
/// common top-level directory. Count ties resolve to the lexicographically
/// smallest candidate.
fn predict_scope(changes: &ChangeSet, framework: Option<&str>) -> Option<String> {
    if !changes.specific_scopes.is_empty() {
        let counts: BTreeMap<&str, usize> = changes
            .specific_scopes
            .iter()
            .map(|(scope, stat)| (*scope, stat.count))
            .collect();
        return max_by_count(&counts).map(str::to_string);
    }

    if let Some(framework) = framework {
        let declared = scopes_for(framework);
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for path in changes.paths() {
            if let Some(scope) = scope_for_path(path, framework) {
                if declared.contains(&scope) {
                    *counts.entry(scope).or_default() += 1;
                }
            }
        }
        if let Some(scope) = max_by_count(&counts) {
            return Some(scope.to_string());
        }
    }

    top_level_dir_scope(changes)
}

/// The most common top-level directory among multi-segment paths.
fn top_level_dir_scope(changes: &ChangeSet) -> Option<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for path in changes.paths() {
        if let Some((top, _)) = path.split_once('/') {
            *counts.entry(top).or_default() += 1;
        }
    }
    max_by_count(&counts).map(str::to_string)
}

fn max_by_count<'a>(counts: &BTreeMap<&'a str, usize>) -> Option<&'a str> {
    let mut best: Option<(&str, usize)> = None;
    for (&key, &count) in counts {
        if best.map_or(true, |(_, current)| count > current) {
            best = Some((key, count));
        }
    }
    best.map(|(key, _)| key)
}

/// How the predicted scope was touched, for phrase selection.
fn description_context(changes: &ChangeSet, scope: Option<&str>) -> DescriptionContext {
    let Some(stat) = scope.and_then(|name| changes.specific_scopes.get(name)) else {
        return DescriptionContext::Modify;
    };

    if stat.statuses.contains(&ChangeStatus::Added) {
        DescriptionContext::Add
    } else if stat.statuses.contains(&ChangeStatus::Deleted) {
        DescriptionContext::Delete
    } else if stat.statuses.contains(&ChangeStatus::Modified) && changes.files.len() <= 2 {
        DescriptionContext::Fix
    } else {
        DescriptionContext::Modify
    }
}

/// Additive confidence score, capped at 0.95.
fn confidence_score(framework: Option<&str>, scope: Option<&str>, changes: &ChangeSet) -> f64 {
    let mut confidence: f64 = 0.5;

    if framework.is_some() {
        confidence += 0.2;
    }
    if !changes.files.is_empty() {
        confidence += 0.1;
    }
    if scope.is_some() {
        confidence += 0.1;
    }
    if !changes.specific_scopes.is_empty() {
        confidence += 0.2;
    }
    if changes.added + changes.modified > 0 {
        confidence += 0.1;
    }

    confidence.min(0.95)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smart::templates::FirstPicker;
    use std::fs;

    fn engine() -> PredictionEngine {
        PredictionEngine::with_picker(CmtConfig::default(), Box::new(FirstPicker))
    }

    fn predict(listing: &str, diff: &str, dir: &Path) -> Prediction {
        engine()
            .analyze_listing(listing, diff, dir)
            .expect("prediction")
    }

    #[test]
    fn test_laravel_model_addition() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("composer.json"),
            r#"{"require": {"laravel/framework": "^10.0"}}"#,
        )
        .unwrap();

        let prediction = predict("A\tapp/Models/Invoice.php\n", "", dir.path());
        assert_eq!(prediction.commit_type, CommitType::Feat);
        assert_eq!(prediction.scope.as_deref(), Some("models"));
        assert_eq!(prediction.description, "create component model");
        assert_eq!(prediction.framework, Some("laravel"));
        assert_eq!(prediction.language, Some("php"));
        assert!((prediction.confidence - 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_react_component_fix() {
        let dir = tempfile::tempdir().unwrap();
        let listing = "M\tsrc/components/Button.tsx\nM\tsrc/components/Input.tsx\n";

        let prediction = predict(listing, "", dir.path());
        assert_eq!(prediction.commit_type, CommitType::Fix);
        assert_eq!(prediction.scope.as_deref(), Some("components"));
        assert_eq!(prediction.framework, Some("react"));
        // No react table entry for a fix context, so generic phrasing.
        assert_eq!(prediction.description, "resolve components issue");
    }

    #[test]
    fn test_django_view_addition() {
        let dir = tempfile::tempdir().unwrap();
        let prediction = predict("A\tblog/views.py\n", "", dir.path());
        assert_eq!(prediction.commit_type, CommitType::Feat);
        assert_eq!(prediction.scope.as_deref(), Some("views"));
        assert_eq!(prediction.framework, Some("django"));
        assert_eq!(prediction.description, "implement views view");
    }

    #[test]
    fn test_deletion_dominant_changes() {
        let dir = tempfile::tempdir().unwrap();
        let listing = "D\tsrc/old.rs\nD\tsrc/legacy.rs\nA\tsrc/new.rs\n";

        let prediction = predict(listing, "", dir.path());
        assert_eq!(prediction.commit_type, CommitType::Refactor);
        assert_eq!(prediction.scope.as_deref(), Some("src"));
    }

    #[test]
    fn test_documentation_batch() {
        let dir = tempfile::tempdir().unwrap();
        let listing = "M\tdocs/intro.md\nM\tdocs/usage.md\nM\tdocs/api.md\nM\tdocs/faq.md\n";

        let prediction = predict(listing, "", dir.path());
        assert_eq!(prediction.commit_type, CommitType::Docs);
        assert_eq!(prediction.scope.as_deref(), Some("docs"));
        assert_eq!(prediction.description, "update docs documentation");
        assert!((prediction.confidence - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_small_edit_with_fix_context() {
        let dir = tempfile::tempdir().unwrap();
        let listing = "M\tcore/parser.go\n";
        let diff = "--- a/core/parser.go\n+++ b/core/parser.go\n@@ -10,1 +10,1 @@\n-return nil\n+return err\n";

        let prediction = predict(listing, diff, dir.path());
        assert_eq!(prediction.commit_type, CommitType::Fix);
        assert_eq!(prediction.scope.as_deref(), Some("core"));
    }

    #[test]
    fn test_small_edit_without_diff_reads_as_refactor() {
        let dir = tempfile::tempdir().unwrap();
        let prediction = predict("M\tnotes.txt\n", "", dir.path());
        assert_eq!(prediction.commit_type, CommitType::Refactor);
        assert_eq!(prediction.scope, None);
        assert_eq!(prediction.description, "restructure component code");
        assert!((prediction.confidence - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_empty_listing_predicts_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(engine().analyze_listing("", "", dir.path()).is_none());
    }

    #[test]
    fn test_manifest_overrides_path_vote() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("composer.json"),
            r#"{"require": {"laravel/framework": "^10.0"}}"#,
        )
        .unwrap();

        // Paths vote react, but the manifest pins laravel. The laravel
        // rules know nothing about a components scope, so the generic
        // rules decide the type.
        let listing = "A\tsrc/components/Button.tsx\nA\tsrc/components/Input.tsx\n";
        let prediction = predict(listing, "", dir.path());
        assert_eq!(prediction.framework, Some("laravel"));
        assert_eq!(prediction.commit_type, CommitType::Feat);
        assert_eq!(prediction.scope.as_deref(), Some("components"));
    }

    #[test]
    fn test_scope_ties_resolve_lexicographically() {
        let dir = tempfile::tempdir().unwrap();
        let listing = "M\tzebra/one.rs\nM\talpha/two.rs\n";

        let prediction = predict(listing, "", dir.path());
        assert_eq!(prediction.scope.as_deref(), Some("alpha"));
    }

    #[test]
    fn test_feat_prediction_offers_fix_alternative() {
        let dir = tempfile::tempdir().unwrap();
        let prediction = predict("A\tapp/Models/Invoice.php\n", "", dir.path());

        let alternatives = prediction.alternatives();
        assert_eq!(alternatives.len(), 1);
        assert_eq!(alternatives[0].commit_type, CommitType::Fix);
        assert_eq!(alternatives[0].description, "resolve models issue");
    }

    #[test]
    fn test_refactor_prediction_offers_perf_alternative() {
        let dir = tempfile::tempdir().unwrap();
        let listing = "D\tsrc/old.rs\nD\tsrc/legacy.rs\nA\tsrc/new.rs\n";
        let prediction = predict(listing, "", dir.path());

        let alternatives = prediction.alternatives();
        assert_eq!(alternatives.len(), 1);
        assert_eq!(alternatives[0].commit_type, CommitType::Perf);
        assert_eq!(alternatives[0].description, "optimize src performance");
    }

    #[test]
    fn test_fix_prediction_offers_no_alternative() {
        let dir = tempfile::tempdir().unwrap();
        let listing = "M\tsrc/components/Button.tsx\nM\tsrc/components/Input.tsx\n";
        let prediction = predict(listing, "", dir.path());
        assert!(prediction.alternatives().is_empty());
    }
}
