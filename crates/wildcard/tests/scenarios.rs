use rstest::rstest;

use wildcard::{has_wildcards, matches, matches_multiple, matches_path, split_path};

// Subjects without spaces must give the same answer in multi-pattern mode.
#[rstest]
#[case("", "", true)]
#[case("a", "a", true)]
#[case("a", "*", true)]
#[case("ab", "a*", true)]
#[case("cat", "dog", false)]
#[case("dogfish", "*fish", true)]
#[case("dogcollar", "*fish", false)]
#[case("cat", "ca?", true)]
#[case("", "?", false)]
#[case("?", "?", true)]
#[case("a", "[abc]", true)]
#[case("catA", "cat[ABC]", true)]
#[case("catD", "cat[A-Z]", true)]
#[case("catD", "cat[CEF]", false)]
#[case("catD", "cat[!CEF]", true)]
#[case("catch22", "c*[0-9]2", true)]
#[case("x", "[!0-9]", true)]
#[case("_", "[-|]", false)]
#[case("_", "[!-|]", true)]
#[case("-", "[!-]", false)]
#[case("x-", "x[d-]", true)]
#[case("hyphen-ated", "*[-]ated", true)]
#[case(r"\", r"\\", true)]
#[case(r"d\", r"d\\", true)]
#[case("*", r"\*", true)]
#[case("a*", r"a\*", true)]
#[case("a", r"\a", true)]
#[case(r"\", r"\x", false)]
#[case("?", r"\?", true)]
fn test_single_and_multiple_agree(#[case] subject: &str, #[case] pattern: &str, #[case] expected: bool) {
    assert_eq!(matches(subject, pattern), expected, "{:?} vs {:?}", subject, pattern);
    assert_eq!(matches_multiple(subject, pattern), expected, "{:?} vs {:?}", subject, pattern);
}

#[test]
fn test_plain_patterns_compare_equal() {
    let words = ["", "a", "ab", "cat", "dog", "diffuse.R", "P"];
    for s in words {
        for p in words {
            assert!(!has_wildcards(p));
            assert_eq!(matches(s, p), s == p);
        }
    }
}

#[test]
fn test_negated_class_is_complement() {
    for body in ["abc", "CEF", "-|", "xyz-"] {
        for ch in ['a', 'b', 'C', 'D', '-', '|', '_', 'z'] {
            let s = ch.to_string();
            assert_eq!(
                matches(&s, &format!("[!{}]", body)),
                !matches(&s, &format!("[{}]", body)),
                "char {:?}, class {:?}",
                ch,
                body
            );
        }
    }
}

#[test]
fn test_path_scenarios() {
    let subject = split_path("/a/b/c", '/');
    assert!(matches_path(&subject, &split_path("/a/b/*", '/')));
    assert!(!matches_path(&subject, &split_path("/*", '/')));
    assert_eq!(split_path("/a/.../b*/d", '/'), ["a", "...", "b*", "d"]);
    assert_eq!(split_path("a.b.c", '.'), ["a", "b", "c"]);
    assert_eq!(split_path("a...b", '.'), ["a", "...", "b"]);
    assert!(split_path("", '/').is_empty());
}
