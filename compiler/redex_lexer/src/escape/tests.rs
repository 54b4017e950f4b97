use super::*;
use pretty_assertions::assert_eq;

#[test]
fn known_escapes() {
    assert_eq!(unescape_string(r"a\nb"), "a\nb");
    assert_eq!(unescape_string(r"\r\t"), "\r\t");
    assert_eq!(unescape_string(r#"\"\'\\"#), "\"'\\");
}

#[test]
fn unknown_escape_is_kept() {
    assert_eq!(unescape_string(r"\q"), r"\q");
}

#[test]
fn trailing_backslash_is_kept() {
    assert_eq!(unescape_string("abc\\"), "abc\\");
}

#[test]
fn plain_text_unchanged() {
    assert_eq!(unescape_string("héllo"), "héllo");
}
