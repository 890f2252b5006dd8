//! Integration tests for gomod-browser
//!
//! These tests run the manifest parser, module cache lookup and star
//! provider together the way the binary does before starting the UI.

use gomod_browser::{
    modcache::{populate_sizes, ModCache},
    parsers::{parse_go_mod, parse_go_mod_str, GoModParser},
    stars::{InMemoryStarProvider, StarProvider},
    BrowserError, Dependency, ManifestErrorKind,
};
use std::path::Path;

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn paths(deps: &[Dependency]) -> Vec<&str> {
    deps.iter().map(Dependency::path).collect()
}

// ============================================================================
// Parser Tests
// ============================================================================

mod parser_tests {
    use super::*;

    #[test]
    fn test_parse_fixture_direct_dependencies() {
        let deps = parse_go_mod(&fixture_path("go.mod")).expect("Failed to parse go.mod");

        assert_eq!(
            paths(&deps),
            vec![
                "github.com/cli/go-gh/v2",
                "github.com/charmbracelet/bubbletea",
                "golang.org/x/mod",
                "github.com/aws/aws-sdk-go-v2/service/s3",
                "github.com/google/uuid",
            ]
        );
        assert_eq!(deps[1].version(), "v1.3.4");
        assert_eq!(deps[4].version(), "v1.6.0");
    }

    #[test]
    fn test_fixture_repository_identifiers() {
        let deps = GoModParser::new(fixture_path("go.mod")).parse().unwrap();
        let repos: Vec<&str> = deps.iter().map(Dependency::repo_identifier).collect();
        assert_eq!(
            repos,
            vec![
                "cli/go-gh",
                "charmbracelet/bubbletea",
                "",
                "aws/aws-sdk-go-v2",
                "google/uuid",
            ]
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = parse_go_mod(&fixture_path("does-not-exist.mod")).unwrap_err();
        assert!(matches!(err, BrowserError::Io { .. }));
    }

    #[test]
    fn test_only_indirect_requirements_is_empty() {
        let deps = parse_go_mod_str(
            "module example.com/tool\n\nrequire golang.org/x/sys v0.30.0 // indirect\n",
        )
        .unwrap();
        assert!(deps.is_empty());
    }

    #[test]
    fn test_error_reports_line() {
        let err = parse_go_mod_str("module example.com/tool\n\nrequire (\n\tgolang.org/x/sys\n)\n")
            .unwrap_err();
        match err {
            BrowserError::Manifest { source, .. } => {
                assert!(matches!(source, ManifestErrorKind::MalformedRequire { line: 4, .. }));
            }
            other => panic!("expected manifest error, got {other:?}"),
        }
    }
}

// ============================================================================
// Startup Pipeline Tests
// ============================================================================

mod pipeline_tests {
    use super::*;

    #[test]
    fn test_refresh_then_sizes() {
        let mut deps = parse_go_mod(&fixture_path("go.mod")).unwrap();
        let provider = InMemoryStarProvider::new().with_starred(["cli/go-gh", "google/uuid"]);
        provider.refresh_starred_status(&mut deps).unwrap();

        let starred: Vec<bool> = deps.iter().map(Dependency::is_starred).collect();
        assert_eq!(starred, vec![true, false, false, false, true]);
        // One check per GitHub record; golang.org/x/mod is skipped.
        assert_eq!(provider.check_count(), 4);

        let cache_dir = tempfile::tempdir().unwrap();
        let module_dir = cache_dir.path().join("github.com/google/uuid@v1.6.0");
        std::fs::create_dir_all(&module_dir).unwrap();
        std::fs::write(module_dir.join("uuid.go"), vec![b'x'; 2048]).unwrap();

        let found = populate_sizes(&mut deps, &ModCache::new(cache_dir.path()));
        assert_eq!(found, 1);
        assert_eq!(deps[4].formatted_size(), "2.00 KB");
        assert_eq!(deps[0].formatted_size(), "unknown");
    }

    #[test]
    fn test_refresh_failure_stops_at_failing_record() {
        let mut deps = parse_go_mod(&fixture_path("go.mod")).unwrap();
        let provider = InMemoryStarProvider::new()
            .with_starred(["cli/go-gh", "google/uuid"])
            .fail_check_for("charmbracelet/bubbletea");

        let err = provider.refresh_starred_status(&mut deps).unwrap_err();
        assert!(err.to_string().contains("charmbracelet/bubbletea"));
        assert!(deps[0].is_starred());
        // Never reached.
        assert!(!deps[4].is_starred());
        assert_eq!(provider.check_count(), 2);
    }
}
