// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Framework classification from file paths and project manifests.
//!
//! A static table maps path patterns to frameworks and their scope
//! categories. Like the language table, declaration order is significant:
//! path classification returns the first framework with a matching pattern,
//! and manifest probes run in their own fixed order.

use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

/// A framework entry: ordered `(scope, pattern)` pairs plus the declared
/// scope list used by the prediction cascades.
pub struct FrameworkSpec {
    /// Canonical framework name.
    pub name: &'static str,
    /// Ordered scope patterns; the first match decides the scope.
    pub patterns: Vec<(&'static str, Regex)>,
    /// Declared scope order, used for cascade walks and scope suggestions.
    pub scopes: &'static [&'static str],
}

fn spec(
    name: &'static str,
    patterns: &[(&'static str, &str)],
    scopes: &'static [&'static str],
) -> FrameworkSpec {
    FrameworkSpec {
        name,
        patterns: patterns
            .iter()
            .map(|(scope, pattern)| (*scope, Regex::new(pattern).unwrap()))
            .collect(),
        scopes,
    }
}

lazy_static! {
    /// The framework table, in declared precedence order.
    pub static ref FRAMEWORKS: Vec<FrameworkSpec> = vec![
        spec(
            "laravel",
            &[
                ("controllers", r"app/Http/Controllers/(.+)\.php"),
                ("models", r"app/Models/(.+)\.php"),
                ("migrations", r"database/migrations/(.+)\.php"),
                ("seeds", r"database/seeders/(.+)\.php"),
                ("factories", r"database/factories/(.+)\.php"),
                ("requests", r"app/Http/Requests/(.+)\.php"),
                ("services", r"app/Services/(.+)\.php"),
                ("repositories", r"app/Repositories/(.+)\.php"),
                ("events", r"app/Events/(.+)\.php"),
                ("listeners", r"app/Listeners/(.+)\.php"),
                ("jobs", r"app/Jobs/(.+)\.php"),
                ("mail", r"app/Mail/(.+)\.php"),
                ("notifications", r"app/Notifications/(.+)\.php"),
                ("policies", r"app/Policies/(.+)\.php"),
                ("resources", r"app/Http/Resources/(.+)\.php"),
                ("rules", r"app/Rules/(.+)\.php"),
                ("middleware", r"app/Http/Middleware/(.+)\.php"),
                ("views", r"resources/views/(.+)\.blade\.php"),
                ("routes", r"routes/(.+)\.php"),
                ("config", r"config/(.+)\.php"),
                ("tests", r"tests/(.+)\.php"),
            ],
            &[
                "controllers", "models", "migrations", "seeds", "factories",
                "requests", "services", "repositories", "events", "listeners",
                "jobs", "mail", "notifications", "policies", "resources",
                "rules", "middleware", "views", "routes", "config", "tests",
            ],
        ),
        spec(
            "symfony",
            &[
                ("controllers", r"src/Controller/(.+)\.php"),
                ("entities", r"src/Entity/(.+)\.php"),
                ("repositories", r"src/Repository/(.+)\.php"),
                ("services", r"src/Service/(.+)\.php"),
                ("forms", r"src/Form/(.+)\.php"),
                ("events", r"src/Event/(.+)\.php"),
                ("listeners", r"src/EventListener/(.+)\.php"),
                ("commands", r"src/Command/(.+)\.php"),
                ("migrations", r"migrations/(.+)\.php"),
                ("templates", r"templates/(.+)\.twig"),
                ("config", r"config/(.+)\.yaml"),
            ],
            &[
                "controllers", "entities", "repositories", "services", "forms",
                "events", "listeners", "commands", "migrations", "templates", "config",
            ],
        ),
        spec(
            "react",
            &[
                ("components", r"src/components/(.+)\.(jsx|js|tsx|ts)"),
                ("hooks", r"src/hooks/(.+)\.(js|ts)"),
                ("pages", r"src/pages/(.+)\.(jsx|js|tsx|ts)"),
                ("store", r"src/store/(.+)\.(js|ts)"),
                ("services", r"src/services/(.+)\.(js|ts)"),
                ("utils", r"src/utils/(.+)\.(js|ts)"),
                ("contexts", r"src/contexts/(.+)\.(js|ts)"),
                ("constants", r"src/constants/(.+)\.(js|ts)"),
                ("types", r"src/types/(.+)\.(js|ts)"),
                ("styles", r"src/styles/(.+)\.(css|scss|sass|less)"),
                ("tests", r"src/.*\.(test|spec)\.(js|jsx|ts|tsx)"),
            ],
            &[
                "components", "hooks", "pages", "store", "services", "utils",
                "contexts", "constants", "types", "styles", "tests",
            ],
        ),
        spec(
            "vue",
            &[
                ("components", r"src/components/(.+)\.vue"),
                ("views", r"src/views/(.+)\.vue"),
                ("store", r"src/store/(.+)\.(js|ts)"),
                ("composables", r"src/composables/(.+)\.(js|ts)"),
                ("utils", r"src/utils/(.+)\.(js|ts)"),
                ("plugins", r"src/plugins/(.+)\.(js|ts)"),
                ("directives", r"src/directives/(.+)\.(js|ts)"),
                ("assets", r"src/assets/(.+)\.(css|scss|sass|less)"),
                ("tests", r"src/.*\.(test|spec)\.(js|ts)"),
            ],
            &[
                "components", "views", "store", "composables", "utils",
                "plugins", "directives", "assets", "tests",
            ],
        ),
        spec(
            "angular",
            &[
                ("components", r"src/app/components/(.+)\.(ts|html|scss)"),
                ("services", r"src/app/services/(.+)\.ts"),
                ("guards", r"src/app/guards/(.+)\.ts"),
                ("interceptors", r"src/app/interceptors/(.+)\.ts"),
                ("pipes", r"src/app/pipes/(.+)\.ts"),
                ("directives", r"src/app/directives/(.+)\.ts"),
                ("modules", r"src/app/modules/(.+)\.ts"),
                ("models", r"src/app/models/(.+)\.ts"),
                ("utils", r"src/app/utils/(.+)\.ts"),
                ("tests", r"src/.*\.spec\.ts"),
            ],
            &[
                "components", "services", "guards", "interceptors", "pipes",
                "directives", "modules", "models", "utils", "tests",
            ],
        ),
        spec(
            "nextjs",
            &[
                ("pages", r"pages/(.+)\.(jsx|js|tsx|ts)"),
                ("components", r"components/(.+)\.(jsx|js|tsx|ts)"),
                ("api", r"pages/api/(.+)\.(js|ts)"),
                ("styles", r"styles/(.+)\.(css|scss|sass|less)"),
                ("utils", r"utils/(.+)\.(js|ts)"),
                ("hooks", r"hooks/(.+)\.(js|ts)"),
                ("store", r"store/(.+)\.(js|ts)"),
            ],
            &["pages", "components", "api", "styles", "utils", "hooks", "store"],
        ),
        spec(
            "nuxt",
            &[
                ("pages", r"pages/(.+)\.vue"),
                ("components", r"components/(.+)\.vue"),
                ("composables", r"composables/(.+)\.(js|ts)"),
                ("plugins", r"plugins/(.+)\.(js|ts)"),
                ("middleware", r"middleware/(.+)\.(js|ts)"),
                ("store", r"store/(.+)\.(js|ts)"),
                ("utils", r"utils/(.+)\.(js|ts)"),
                ("api", r"api/(.+)\.(js|ts)"),
            ],
            &[
                "pages", "components", "composables", "plugins", "middleware",
                "store", "utils", "api",
            ],
        ),
        spec(
            "svelte",
            &[
                ("components", r"src/lib/components/(.+)\.svelte"),
                ("routes", r"src/routes/(.+)\.svelte"),
                ("stores", r"src/stores/(.+)\.(js|ts)"),
                ("utils", r"src/utils/(.+)\.(js|ts)"),
                ("actions", r"src/actions/(.+)\.(js|ts)"),
                ("tests", r"src/.*\.(test|spec)\.(js|ts)"),
            ],
            &["components", "routes", "stores", "utils", "actions", "tests"],
        ),
        spec(
            "solidjs",
            &[
                ("components", r"src/components/(.+)\.(jsx|js|tsx|ts)"),
                ("pages", r"src/pages/(.+)\.(jsx|js|tsx|ts)"),
                ("stores", r"src/stores/(.+)\.(js|ts)"),
                ("utils", r"src/utils/(.+)\.(js|ts)"),
                ("api", r"src/api/(.+)\.(js|ts)"),
            ],
            &["components", "pages", "stores", "utils", "api"],
        ),
        spec(
            "express",
            &[
                ("routes", r"routes/(.+)\.(js|ts)"),
                ("controllers", r"controllers/(.+)\.(js|ts)"),
                ("middleware", r"middleware/(.+)\.(js|ts)"),
                ("models", r"models/(.+)\.(js|ts)"),
                ("services", r"services/(.+)\.(js|ts)"),
                ("utils", r"utils/(.+)\.(js|ts)"),
                ("config", r"config/(.+)\.(js|ts)"),
                ("tests", r".*\.(test|spec)\.(js|ts)"),
            ],
            &[
                "routes", "controllers", "middleware", "models", "services",
                "utils", "config", "tests",
            ],
        ),
        spec(
            "nestjs",
            &[
                ("controllers", r"src/(.+)\.controller\.(ts|js)"),
                ("services", r"src/(.+)\.service\.(ts|js)"),
                ("modules", r"src/(.+)\.module\.(ts|js)"),
                ("entities", r"src/(.+)\.entity\.(ts|js)"),
                ("dtos", r"src/(.+)\.dto\.(ts|js)"),
                ("guards", r"src/(.+)\.guard\.(ts|js)"),
                ("interceptors", r"src/(.+)\.interceptor\.(ts|js)"),
                ("middleware", r"src/(.+)\.middleware\.(ts|js)"),
                ("tests", r".*\.spec\.(ts|js)"),
            ],
            &[
                "controllers", "services", "modules", "entities", "dtos",
                "guards", "interceptors", "middleware", "tests",
            ],
        ),
        spec(
            "fastify",
            &[
                ("routes", r"routes/(.+)\.(js|ts)"),
                ("plugins", r"plugins/(.+)\.(js|ts)"),
                ("services", r"services/(.+)\.(js|ts)"),
                ("utils", r"utils/(.+)\.(js|ts)"),
                ("schemas", r"schemas/(.+)\.(js|ts)"),
            ],
            &["routes", "plugins", "services", "utils", "schemas"],
        ),
        spec(
            "django",
            &[
                ("views", r"(\w+)/views\.py"),
                ("viewsets", r"(\w+)/viewsets\.py"),
                ("models", r"(\w+)/models\.py"),
                ("serializers", r"(\w+)/serializers\.py"),
                ("urls", r"(\w+)/urls\.py"),
                ("admin", r"(\w+)/admin\.py"),
                ("forms", r"(\w+)/forms\.py"),
                ("services", r"(\w+)/services\.py"),
                ("signals", r"(\w+)/signals\.py"),
                ("tasks", r"(\w+)/tasks\.py"),
                ("middleware", r"(\w+)/middleware\.py"),
                ("templates", r"templates/(.+)\.html"),
                ("migrations", r"migrations/(.+)\.py"),
                ("tests", r"(\w+)/tests\.py"),
            ],
            &[
                "views", "viewsets", "models", "serializers", "urls", "admin",
                "forms", "services", "signals", "tasks", "middleware",
                "templates", "migrations", "tests",
            ],
        ),
        spec(
            "flask",
            &[
                ("routes", r"(\w+)/routes\.py"),
                ("models", r"(\w+)/models\.py"),
                ("services", r"(\w+)/services\.py"),
                ("utils", r"(\w+)/utils\.py"),
                ("config", r"config\.py"),
                ("templates", r"templates/(.+)\.html"),
                ("tests", r"(\w+)/tests\.py"),
            ],
            &["routes", "models", "services", "utils", "config", "templates", "tests"],
        ),
        spec(
            "fastapi",
            &[
                ("routers", r"routers/(.+)\.py"),
                ("models", r"models/(.+)\.py"),
                ("schemas", r"schemas/(.+)\.py"),
                ("services", r"services/(.+)\.py"),
                ("dependencies", r"dependencies/(.+)\.py"),
                ("utils", r"utils/(.+)\.py"),
                ("tests", r"tests/(.+)\.py"),
            ],
            &["routers", "models", "schemas", "services", "dependencies", "utils", "tests"],
        ),
        spec(
            "spring",
            &[
                ("controllers", r"controller/(.+)\.java"),
                ("services", r"service/(.+)\.java"),
                ("repositories", r"repository/(.+)\.java"),
                ("entities", r"entity/(.+)\.java"),
                ("dtos", r"dto/(.+)\.java"),
                ("config", r"config/(.+)\.java"),
                ("security", r"security/(.+)\.java"),
                ("exceptions", r"exception/(.+)\.java"),
                ("utils", r"util/(.+)\.java"),
                ("tests", r"test/(.+)\.java"),
            ],
            &[
                "controllers", "services", "repositories", "entities", "dtos",
                "config", "security", "exceptions", "utils", "tests",
            ],
        ),
        spec(
            "javafx",
            &[
                ("controllers", r"controller/(.+)\.java"),
                ("models", r"model/(.+)\.java"),
                ("views", r"view/(.+)\.fxml"),
                ("utils", r"util/(.+)\.java"),
            ],
            &["controllers", "models", "views", "utils"],
        ),
        spec(
            "flutter",
            &[
                ("widgets", r"lib/widgets/(.+)\.dart"),
                ("pages", r"lib/pages/(.+)\.dart"),
                ("services", r"lib/services/(.+)\.dart"),
                ("models", r"lib/models/(.+)\.dart"),
                ("providers", r"lib/providers/(.+)\.dart"),
                ("utils", r"lib/utils/(.+)\.dart"),
                ("tests", r"test/(.+)\.dart"),
            ],
            &["widgets", "pages", "services", "models", "providers", "utils", "tests"],
        ),
        spec(
            "reactnative",
            &[
                ("components", r"src/components/(.+)\.(jsx|js|tsx|ts)"),
                ("screens", r"src/screens/(.+)\.(jsx|js|tsx|ts)"),
                ("navigation", r"src/navigation/(.+)\.(js|ts)"),
                ("services", r"src/services/(.+)\.(js|ts)"),
                ("utils", r"src/utils/(.+)\.(js|ts)"),
                ("store", r"src/store/(.+)\.(js|ts)"),
                ("tests", r"src/.*\.(test|spec)\.(js|ts)"),
            ],
            &["components", "screens", "navigation", "services", "utils", "store", "tests"],
        ),
        spec(
            "unity",
            &[
                ("scripts", r"Assets/Scripts/(.+)\.cs"),
                ("scenes", r"Assets/Scenes/(.+)\.unity"),
                ("prefabs", r"Assets/Prefabs/(.+)\.prefab"),
                ("materials", r"Assets/Materials/(.+)\.mat"),
                ("shaders", r"Assets/Shaders/(.+)\.shader"),
            ],
            &["scripts", "scenes", "prefabs", "materials", "shaders"],
        ),
        spec(
            "godot",
            &[
                ("scripts", r"src/(.+)\.gd"),
                ("scenes", r"scenes/(.+)\.tscn"),
                ("resources", r"resources/(.+)\.tres"),
            ],
            &["scripts", "scenes", "resources"],
        ),
        spec(
            "rails",
            &[
                ("controllers", r"app/controllers/(.+)\.rb"),
                ("models", r"app/models/(.+)\.rb"),
                ("views", r"app/views/(.+)\.erb"),
                ("services", r"app/services/(.+)\.rb"),
                ("jobs", r"app/jobs/(.+)\.rb"),
                ("mailers", r"app/mailers/(.+)\.rb"),
                ("helpers", r"app/helpers/(.+)\.rb"),
                ("tests", r"test/(.+)\.rb"),
                ("specs", r"spec/(.+)\.rb"),
            ],
            &[
                "controllers", "models", "views", "services", "jobs", "mailers",
                "helpers", "tests", "specs",
            ],
        ),
        spec(
            "gin",
            &[
                ("handlers", r"handlers/(.+)\.go"),
                ("services", r"services/(.+)\.go"),
                ("models", r"models/(.+)\.go"),
                ("middleware", r"middleware/(.+)\.go"),
                ("utils", r"utils/(.+)\.go"),
            ],
            &["handlers", "services", "models", "middleware", "utils"],
        ),
        spec(
            "echo",
            &[
                ("handlers", r"handlers/(.+)\.go"),
                ("services", r"services/(.+)\.go"),
                ("models", r"models/(.+)\.go"),
                ("middleware", r"middleware/(.+)\.go"),
            ],
            &["handlers", "services", "models", "middleware"],
        ),
        spec(
            "aspnet",
            &[
                ("controllers", r"Controllers/(.+)\.cs"),
                ("models", r"Models/(.+)\.cs"),
                ("services", r"Services/(.+)\.cs"),
                ("views", r"Views/(.+)\.cshtml"),
                ("viewmodels", r"ViewModels/(.+)\.cs"),
                ("repositories", r"Repositories/(.+)\.cs"),
                ("middleware", r"Middleware/(.+)\.cs"),
            ],
            &[
                "controllers", "models", "services", "views", "viewmodels",
                "repositories", "middleware",
            ],
        ),
    ];
}

/// A manifest probe: the framework is pinned when one of the files exists
/// and contains one of the needles.
struct ManifestProbe {
    framework: &'static str,
    files: &'static [&'static str],
    needles: &'static [&'static str],
}

/// Manifest probes, in fixed precedence order.
const MANIFEST_PROBES: &[ManifestProbe] = &[
    ManifestProbe {
        framework: "laravel",
        files: &["artisan", "composer.json"],
        needles: &["\"laravel/framework\"", "'laravel/framework'"],
    },
    ManifestProbe {
        framework: "react",
        files: &["package.json"],
        needles: &["\"react\"", "'react'"],
    },
    ManifestProbe {
        framework: "vue",
        files: &["package.json", "vue.config.js"],
        needles: &["\"vue\"", "'vue'", "\"nuxt\"", "'nuxt'"],
    },
    ManifestProbe {
        framework: "django",
        files: &["manage.py", "requirements.txt"],
        needles: &["Django", "django"],
    },
    ManifestProbe {
        framework: "spring",
        files: &["pom.xml", "build.gradle"],
        needles: &["spring-boot", "springframework"],
    },
    ManifestProbe {
        framework: "express",
        files: &["package.json", "app.js"],
        needles: &["\"express\"", "'express'"],
    },
    ManifestProbe {
        framework: "flask",
        files: &["app.py", "requirements.txt"],
        needles: &["Flask", "flask"],
    },
];

/// Look up a framework entry by name.
pub fn framework_spec(name: &str) -> Option<&'static FrameworkSpec> {
    FRAMEWORKS.iter().find(|spec| spec.name == name)
}

/// Classify a single path. Returns the first framework (declared order)
/// with any matching pattern.
pub fn framework_for_path(path: &str) -> Option<&'static str> {
    FRAMEWORKS
        .iter()
        .find(|spec| spec.patterns.iter().any(|(_, pattern)| pattern.is_match(path)))
        .map(|spec| spec.name)
}

/// The scope category of a path within a given framework, decided by the
/// first matching pattern. `None` when the path matches nothing or the
/// framework is unknown.
pub fn scope_for_path(path: &str, framework: &str) -> Option<&'static str> {
    let spec = framework_spec(framework)?;
    spec.patterns
        .iter()
        .find(|(_, pattern)| pattern.is_match(path))
        .map(|(scope, _)| *scope)
}

/// The declared scope list of a framework; empty for unknown names.
pub fn scopes_for(framework: &str) -> &'static [&'static str] {
    framework_spec(framework).map(|spec| spec.scopes).unwrap_or(&[])
}

/// Probe project manifests under `dir`. The first probe whose file exists
/// and carries a needle pins the framework; unreadable files and failed
/// content checks contribute no signal.
pub fn detect_from_manifests(dir: &Path) -> Option<&'static str> {
    for probe in MANIFEST_PROBES {
        for file in probe.files {
            let candidate = dir.join(file);
            if !candidate.is_file() {
                continue;
            }
            match std::fs::read_to_string(&candidate) {
                Ok(content) => {
                    if probe.needles.iter().any(|needle| content.contains(needle)) {
                        tracing::debug!(
                            "Manifest {:?} pins framework {}",
                            candidate,
                            probe.framework
                        );
                        return Some(probe.framework);
                    }
                }
                Err(err) => {
                    tracing::debug!("Skipping unreadable manifest {:?}: {}", candidate, err);
                }
            }
        }
    }
    None
}

/// The primary framework for a set of changed paths.
///
/// Manifest detection in `dir` takes precedence over the per-path vote.
/// Vote ties resolve to the framework declared first in the table.
pub fn primary_framework<'a, I>(paths: I, dir: &Path) -> Option<&'static str>
where
    I: IntoIterator<Item = &'a str>,
{
    if let Some(framework) = detect_from_manifests(dir) {
        return Some(framework);
    }
    vote_framework(paths)
}

/// Majority vote over per-path classification, without manifest probes.
pub fn vote_framework<'a, I>(paths: I) -> Option<&'static str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = vec![0usize; FRAMEWORKS.len()];
    for path in paths {
        if let Some(idx) = FRAMEWORKS
            .iter()
            .position(|spec| spec.patterns.iter().any(|(_, pattern)| pattern.is_match(path)))
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
    best.map(|(idx, _)| FRAMEWORKS[idx].name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_table_is_complete() {
        assert_eq!(FRAMEWORKS.len(), 25);
        for spec in FRAMEWORKS.iter() {
            assert!(!spec.patterns.is_empty(), "{} has no patterns", spec.name);
            assert!(!spec.scopes.is_empty(), "{} has no scopes", spec.name);
        }
    }

    #[test]
    fn test_framework_for_path() {
        assert_eq!(
            framework_for_path("app/Http/Controllers/UserController.php"),
            Some("laravel")
        );
        assert_eq!(
            framework_for_path("src/components/Button.tsx"),
            Some("react")
        );
        assert_eq!(framework_for_path("accounts/views.py"), Some("django"));
        assert_eq!(framework_for_path("lib/widgets/card.dart"), Some("flutter"));
        assert_eq!(framework_for_path("src/engine.rs"), None);
    }

    #[test]
    fn test_framework_declared_order_wins() {
        // "templates/home.html" matches both django and flask; django is
        // declared first.
        assert_eq!(framework_for_path("templates/home.html"), Some("django"));
        // "routes/web.php" belongs to laravel before anything else.
        assert_eq!(framework_for_path("routes/web.php"), Some("laravel"));
    }

    #[test]
    fn test_scope_for_path() {
        assert_eq!(
            scope_for_path("app/Http/Controllers/UserController.php", "laravel"),
            Some("controllers")
        );
        assert_eq!(
            scope_for_path("src/components/Button.tsx", "react"),
            Some("components")
        );
        assert_eq!(
            scope_for_path("app/Http/Controllers/UserController.php", "react"),
            None
        );
        assert_eq!(scope_for_path("anything.php", "not-a-framework"), None);
    }

    #[test]
    fn test_scope_pattern_order_within_framework() {
        // The laravel middleware pattern is declared before routes; a
        // middleware path must not fall through to a broader pattern.
        assert_eq!(
            scope_for_path("app/Http/Middleware/Authenticate.php", "laravel"),
            Some("middleware")
        );
        // Plain api tests match the dedicated tests pattern.
        assert_eq!(
            scope_for_path("tests/Feature/LoginTest.php", "laravel"),
            Some("tests")
        );
    }

    #[test]
    fn test_scopes_for() {
        assert_eq!(scopes_for("godot"), &["scripts", "scenes", "resources"]);
        assert!(scopes_for("unknown").is_empty());
    }

    #[test]
    fn test_detect_from_manifests_laravel() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("composer.json"),
            r#"{"require": {"laravel/framework": "^10.0"}}"#,
        )
        .unwrap();
        assert_eq!(detect_from_manifests(dir.path()), Some("laravel"));
    }

    #[test]
    fn test_detect_from_manifests_react() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("package.json"),
            r#"{"dependencies": {"react": "^18.0.0"}}"#,
        )
        .unwrap();
        assert_eq!(detect_from_manifests(dir.path()), Some("react"));
    }

    #[test]
    fn test_detect_from_manifests_needle_required() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("package.json"),
            r#"{"dependencies": {"left-pad": "1.0.0"}}"#,
        )
        .unwrap();
        assert_eq!(detect_from_manifests(dir.path()), None);
    }

    #[test]
    fn test_detect_from_manifests_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(detect_from_manifests(dir.path()), None);
    }

    #[test]
    fn test_primary_framework_manifest_overrides_vote() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("composer.json"),
            r#"{"require": {"laravel/framework": "^10.0"}}"#,
        )
        .unwrap();
        let paths = ["src/components/A.tsx", "src/components/B.tsx"];
        assert_eq!(
            primary_framework(paths.iter().copied(), dir.path()),
            Some("laravel")
        );
    }

    #[test]
    fn test_primary_framework_vote() {
        let dir = tempfile::tempdir().unwrap();
        let paths = [
            "src/components/A.tsx",
            "src/components/B.tsx",
            "app/Http/Controllers/C.php",
        ];
        assert_eq!(
            primary_framework(paths.iter().copied(), dir.path()),
            Some("react")
        );
    }

    #[test]
    fn test_vote_tie_uses_declared_order() {
        let paths = ["src/components/A.tsx", "app/Http/Controllers/C.php"];
        // One vote each; laravel is declared before react.
        assert_eq!(vote_framework(paths.iter().copied()), Some("laravel"));
    }
}
