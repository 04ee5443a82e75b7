/// This file contains match tests for the built-in matchers.
/// Each test runs one matcher once at the start of an input and checks the recognized text, the
/// decoded value and the number of consumed runes.
use runelex::{Matcher, RuneCursor, RuneSource};

/// Test data for the match tests.
#[derive(Debug)]
struct TestData {
    matcher: fn() -> Matcher,
    input: &'static str,
    // Raw text and decoded value of the expected token, None if no match is expected.
    expected: Option<(&'static str, &'static str)>,
}

// Matching input, the decoded value equals the raw text.
macro_rules! td {
    ($matcher:expr, $input:expr, $text:expr) => {
        TestData {
            matcher: $matcher,
            input: $input,
            expected: Some(($text, $text)),
        }
    };
}

// Matching input with a decoded value.
macro_rules! tv {
    ($matcher:expr, $input:expr, $text:expr, $value:expr) => {
        TestData {
            matcher: $matcher,
            input: $input,
            expected: Some(($text, $value)),
        }
    };
}

// Input that must not match.
macro_rules! tn {
    ($matcher:expr, $input:expr) => {
        TestData {
            matcher: $matcher,
            input: $input,
            expected: None,
        }
    };
}

fn eq() -> Matcher {
    Matcher::contain("==")
}

fn empty() -> Matcher {
    Matcher::contain("")
}

const TEST_DATA: &[TestData] = &[
    // ---------------------------------------------------------------------------------------------
    // C line comments
    td!(Matcher::c_line_comment, "// abc\ndef", "// abc"),
    td!(Matcher::c_line_comment, "//", "//"),
    td!(Matcher::c_line_comment, "// a\r\nb", "// a"),
    td!(Matcher::c_line_comment, "// /* x */", "// /* x */"),
    tn!(Matcher::c_line_comment, "/ / x"),
    tn!(Matcher::c_line_comment, "/"),
    tn!(Matcher::c_line_comment, "# x"),
    tn!(Matcher::c_line_comment, ""),
    // ---------------------------------------------------------------------------------------------
    // Unix line comments
    td!(Matcher::unix_line_comment, "#!/bin/sh\necho", "#!/bin/sh"),
    td!(Matcher::unix_line_comment, "#\n", "#"),
    tn!(Matcher::unix_line_comment, "// x"),
    tn!(Matcher::unix_line_comment, "x#"),
    // ---------------------------------------------------------------------------------------------
    // C block comments
    td!(Matcher::c_block_comment, "/* a ** b */x", "/* a ** b */"),
    td!(Matcher::c_block_comment, "/**/", "/**/"),
    td!(Matcher::c_block_comment, "/***/", "/***/"),
    td!(Matcher::c_block_comment, "/****/ */", "/****/"),
    td!(Matcher::c_block_comment, "/* // */ x", "/* // */"),
    td!(Matcher::c_block_comment, "/* a\n b */", "/* a\n b */"),
    td!(Matcher::c_block_comment, "/* never closed", "/* never closed"),
    td!(Matcher::c_block_comment, "/* * / */", "/* * / */"),
    tn!(Matcher::c_block_comment, "/ * */"),
    tn!(Matcher::c_block_comment, "*/"),
    // ---------------------------------------------------------------------------------------------
    // Identifiers
    td!(Matcher::identifier, "_a1 b", "_a1"),
    td!(Matcher::identifier, "CamelCase9(", "CamelCase9"),
    td!(Matcher::identifier, "été", "été"),
    td!(Matcher::identifier, "_", "_"),
    td!(Matcher::identifier, "x² y", "x"),
    td!(Matcher::identifier, "a½", "a"),
    tn!(Matcher::identifier, "Ⅻ"),
    tn!(Matcher::identifier, "9lives"),
    tn!(Matcher::identifier, "$x"),
    tn!(Matcher::identifier, ""),
    // ---------------------------------------------------------------------------------------------
    // Literals
    td!(eq, "===", "=="),
    td!(eq, "== 1", "=="),
    tn!(eq, "=x"),
    tn!(eq, "="),
    tn!(eq, " =="),
    tn!(empty, "abc"),
    tn!(empty, ""),
    // ---------------------------------------------------------------------------------------------
    // Strings
    tv!(Matcher::string, r#""a\nb""#, r#""a\nb""#, "a\nb"),
    tv!(Matcher::string, r#"'a"b' c"#, r#"'a"b'"#, "a\"b"),
    tv!(Matcher::string, r#""a\"b""#, r#""a\"b""#, "a\"b"),
    tv!(Matcher::string, r#""\x41""#, r#""\x41""#, "\\x41"),
    tv!(Matcher::string, "'unterminated", "'unterminated", "unterminated"),
    tv!(Matcher::string, "\"line\nnext\"", "\"line\n", "line\n"),
    tv!(Matcher::string, "\"a\\\nb", "\"a\\\n", "a\\\n"),
    tv!(Matcher::string, "\"a\\", "\"a\\", "a\\"),
    tn!(Matcher::string, "\"\""),
    tn!(Matcher::string, "''"),
    tn!(Matcher::string, "`a`"),
    tn!(Matcher::string, "\"\n"),
];

#[test]
fn match_test() {
    let _ = env_logger::builder().is_test(true).try_init();

    for (index, test) in TEST_DATA.iter().enumerate() {
        let matcher = (test.matcher)();
        let mut cursor = RuneCursor::new(test.input);
        let token = matcher.scan(&mut cursor);
        match (test.expected, token) {
            (Some((text, value)), Some(token)) => {
                assert_eq!(token.text(), text, "#{index} {test:?}");
                assert_eq!(token.value(), value, "#{index} {test:?}");
                assert_eq!(*token.kind(), matcher.token_kind(), "#{index} {test:?}");
                assert_eq!(token.start(), 0, "#{index} {test:?}");
                assert_eq!(cursor.offset(), token.len(), "#{index} {test:?}");
                assert_eq!(token.len(), text.chars().count(), "#{index} {test:?}");
            }
            (None, None) => {
                assert_eq!(cursor.offset(), 0, "#{index} {test:?}");
            }
            (expected, token) => {
                panic!("#{index} {test:?}: expected {expected:?}, found {token:?}")
            }
        }
    }
}

#[test]
fn stateless_matchers_are_idempotent() {
    let inputs = ["// x", "# x", "abc", "==", "'s'"];
    let matchers = [
        Matcher::c_line_comment(),
        Matcher::unix_line_comment(),
        Matcher::identifier(),
        eq(),
        Matcher::string(),
    ];
    for matcher in &matchers {
        for input in inputs {
            let cursor = RuneCursor::new(input);
            let first = matcher.scan(&mut cursor.clone());
            let second = matcher.scan(&mut cursor.clone());
            assert_eq!(first, second, "{matcher:?} {input:?}");
        }
    }
}

#[test]
fn block_comment_matcher_has_no_leaking_state() {
    let matcher = Matcher::c_block_comment();
    for _ in 0..3 {
        let mut cursor = RuneCursor::new("/* a */b/**/");
        assert_eq!(matcher.scan(&mut cursor).unwrap().text(), "/* a */");
        assert!(matcher.scan(&mut cursor).is_none());
        cursor.consume(1);
        assert_eq!(matcher.scan(&mut cursor).unwrap().text(), "/**/");
        assert!(cursor.is_at_end());
    }
}
