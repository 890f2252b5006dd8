//! Property tests for dependency classification.

use gomod_browser::Dependency;
use proptest::prelude::*;

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,11}"
}

/// A segment that is not a major-version suffix like `v2`.
fn plain_segment() -> impl Strategy<Value = String> {
    segment().prop_filter("major version segment", |s| {
        !(s.len() > 1 && s.starts_with('v') && s[1..].bytes().all(|b| b.is_ascii_digit()))
    })
}

fn host() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("golang.org".to_string()),
        Just("gopkg.in".to_string()),
        Just("gitlab.com".to_string()),
        Just("go.uber.org".to_string()),
        Just("example.com".to_string()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn non_github_has_no_repository(
        host in host(),
        rest in prop::collection::vec(segment(), 1..5),
        starred in any::<bool>(),
    ) {
        let path = format!("{host}/{}", rest.join("/"));
        let mut dep = Dependency::new(path.clone(), "v1.0.0");
        dep.set_starred(starred);

        prop_assert!(!dep.is_github());
        prop_assert_eq!(dep.repo_identifier(), "");
        prop_assert_eq!(dep.github_url(), "");
        prop_assert!(!dep.is_starred());
        prop_assert!(!dep.is_unstarred_github());
        prop_assert_eq!(dep.pkg_go_dev_url(), format!("https://pkg.go.dev/{path}"));
    }

    #[test]
    fn major_version_suffix_is_dropped(
        owner in segment(),
        repo in segment(),
        major in 2u32..100,
    ) {
        let dep = Dependency::new(format!("github.com/{owner}/{repo}/v{major}"), "v2.0.0");
        let expected = format!("{owner}/{repo}");
        prop_assert_eq!(dep.repo_identifier(), expected.as_str());
        prop_assert_eq!(dep.star_target(), Some(expected.as_str()));
    }

    #[test]
    fn owner_only_version_path_drops_suffix(
        owner in segment(),
        major in 2u32..100,
    ) {
        let dep = Dependency::new(format!("github.com/{owner}/v{major}"), "v2.0.0");
        prop_assert_eq!(dep.repo_identifier(), owner.as_str());
        prop_assert_eq!(dep.star_target(), None);
    }

    #[test]
    fn nested_version_path_keeps_subdirectories(
        owner in segment(),
        repo in segment(),
        sub in prop::collection::vec(segment(), 1..4),
        major in 2u32..100,
    ) {
        let base = format!("{owner}/{repo}/{}", sub.join("/"));
        let dep = Dependency::new(format!("github.com/{base}/v{major}"), "v2.0.0");
        prop_assert_eq!(dep.repo_identifier(), base.as_str());
    }

    #[test]
    fn subpackages_map_to_repository(
        owner in segment(),
        repo in plain_segment(),
        sub in prop::collection::vec(plain_segment(), 0..4),
    ) {
        let mut path = format!("github.com/{owner}/{repo}");
        for s in &sub {
            path.push('/');
            path.push_str(s);
        }
        let dep = Dependency::new(path, "v1.0.0");
        prop_assert_eq!(dep.repo_identifier(), format!("{owner}/{repo}"));
        prop_assert_eq!(dep.github_url(), format!("https://github.com/{owner}/{repo}"));
    }

    #[test]
    fn star_flag_tracks_last_update(
        updates in prop::collection::vec(any::<bool>(), 0..8),
    ) {
        let mut dep = Dependency::new("github.com/cli/go-gh/v2", "v2.11.2");
        for &u in &updates {
            dep.set_starred(u);
        }
        let last = updates.last().copied().unwrap_or(false);
        prop_assert_eq!(dep.is_starred(), last);
        prop_assert_eq!(dep.is_unstarred_github(), !last);
        prop_assert_eq!(dep.star_glyph(), if last { "★" } else { "☆" });
    }
}
