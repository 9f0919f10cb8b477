use rstest::rstest;

use super::*;
use crate::error::Error;
use assert_matches::assert_matches;

fn path(s: &str) -> Vec<String> {
    split_path(s, '/')
}

#[rstest]
#[case("/a/b/c", "/a/b/c", true)]
#[case("/a/b/c", "/a/.../c", true)]
#[case("/a/c", "/a/.../c", true)]
#[case("/a/x/y/z/c", "/a/.../c", true)]
#[case("/a/x/y/z/d", "/a/.../c", false)]
#[case("/a", "/a/...", true)]
#[case("/a/b/c", "/...", true)]
#[case("/", "/...", true)]
#[case("/x/a/y/b", "/.../a/.../b", true)]
#[case("/x/b/y/a", "/.../a/.../b", false)]
#[case("/geo/sphere1/shape", "/.../sphere*/*", true)]
#[case("/geo/sphere1", "/.../sphere*/*", false)]
#[case("/a/b/c", "/a/*", false)]
fn test_path_pattern(#[case] subject: &str, #[case] pattern: &str, #[case] expected: bool) {
    assert_eq!(PathPattern::new(pattern, '/').matches(&path(subject)), expected);
}

#[test]
fn test_path_pattern_dot_separator() {
    let pattern = PathPattern::new("a...b", '.');
    assert_eq!(pattern.components(), &["a", "...", "b"]);
    assert!(pattern.matches(&split_path("a.x.y.b", '.')));
    assert!(pattern.matches(&split_path("a.b", '.')));
    assert!(!pattern.matches(&split_path("a.x.y.c", '.')));
}

#[test]
fn test_path_pattern_leading_ellipsis_dot_separator() {
    let pattern = PathPattern::new("...shader", '.');
    assert_eq!(pattern.components(), &["...", "shader"]);
    assert!(pattern.matches(&split_path("obj.geo.shader", '.')));
    assert!(pattern.matches(&split_path("shader", '.')));
    assert!(!pattern.matches(&split_path("obj.geo.light", '.')));
}

#[test]
fn test_path_pattern_try_new() {
    assert!(PathPattern::try_new("/a/[bc]/d", '/').is_ok());
    assert_eq!(
        PathPattern::try_new("/a/[bc/d", '/'),
        Err(wildcard::Error::UnterminatedClass { offset: 0 })
    );
}

#[test]
fn test_name_filter_include() {
    let mut filter = NameFilter::new(MatchOptions::default());
    filter.include("[RGB] *.[RGB]").unwrap();

    assert!(filter.matches("R"));
    assert!(filter.matches("diffuse.G"));
    assert!(!filter.matches("diffuse.A"));
    assert!(!filter.matches("P"));
}

#[test]
fn test_name_filter_include_exclude() {
    let mut filter = NameFilter::new(MatchOptions::default());
    filter.include("*").unwrap().exclude("__* P").unwrap();

    assert!(filter.matches("Cd"));
    assert!(filter.matches("N"));
    assert!(!filter.matches("P"));
    assert!(!filter.matches("__topology"));
}

#[test]
fn test_name_filter_without_include() {
    let mut filter = NameFilter::new(MatchOptions::default());
    assert!(filter.matches("anything"));

    filter.exclude("any*").unwrap();
    assert!(!filter.matches("anything"));
    assert!(filter.matches("nothing"));
}

#[test]
fn test_name_filter_path_mode() {
    let mut filter = NameFilter::new(MatchOptions {
        mode: Mode::Path,
        ..Default::default()
    });
    filter.include("/geo/* /.../light?").unwrap();

    assert!(filter.matches("/geo/sphere"));
    assert!(filter.matches("/a/b/c/light1"));
    assert!(!filter.matches("/geo/sphere/shape"));
    assert!(!filter.matches("/a/b/c/light12"));
}

#[test]
fn test_name_filter_path_mode_separator() {
    let mut filter = NameFilter::new(MatchOptions {
        mode: Mode::Path,
        separator: '.',
        strict: false,
    });
    filter.include("shader...[RGB]").unwrap();

    assert!(filter.matches("shader.diffuse.R"));
    assert!(filter.matches("shader.R"));
    assert!(!filter.matches("shader.diffuse.A"));
}

#[test]
fn test_name_filter_strict() {
    let mut filter = NameFilter::new(MatchOptions {
        strict: true,
        ..Default::default()
    });
    assert_matches!(
        filter.include("a [bc"),
        Err(Error::Pattern(wildcard::Error::UnterminatedClass { offset: 0 }))
    );

    let mut filter = NameFilter::new(MatchOptions {
        mode: Mode::Path,
        strict: true,
        ..Default::default()
    });
    assert_matches!(filter.exclude("/a/[bc"), Err(Error::Pattern(_)));
}

#[test]
fn test_name_filter_lenient() {
    let mut filter = NameFilter::new(MatchOptions::default());
    filter.include("a [bc").unwrap();

    assert!(filter.matches("a"));
    assert!(!filter.matches("b"));
    assert!(!filter.matches("[bc"));
}
