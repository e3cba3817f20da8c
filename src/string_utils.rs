use serde_json::Value;
use unicode_segmentation::UnicodeSegmentation;

use crate::constants::MAX_REPEAT_BYTES;
use crate::error::*;

/// Concatenates two strings into a new one.
///
/// # Examples
///
/// ```
/// use strkit::string_utils::concatenate;
///
/// assert_eq!(concatenate("aa", "bb"), "aabb");
/// assert_eq!(concatenate("", "bb"), "bb");
/// ```
pub fn concatenate(first: &str, second: &str) -> String {
    let mut result = String::with_capacity(first.len() + second.len());
    result.push_str(first);
    result.push_str(second);
    result
}

/// Returns the number of characters (Unicode scalar values) in the text.
///
/// # Examples
///
/// ```
/// use strkit::string_utils::length;
///
/// assert_eq!(length("aaaaa"), 5);
/// assert_eq!(length("é🦀"), 2);
/// assert_eq!(length(""), 0);
/// ```
pub fn length(text: &str) -> usize {
    text.chars().count()
}

/// Returns the number of user-perceived characters (extended grapheme clusters).
///
/// # Examples
///
/// ```
/// use strkit::string_utils::grapheme_length;
///
/// // 'e' followed by a combining acute accent
/// assert_eq!(grapheme_length("e\u{301}"), 1);
/// ```
pub fn grapheme_length(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Returns the first character of the text, if any.
pub fn first_char(text: &str) -> Option<char> {
    text.chars().next()
}

/// Removes leading and trailing whitespace.
///
/// # Examples
///
/// ```
/// use strkit::string_utils::trim_whitespace;
///
/// assert_eq!(trim_whitespace("\tHello, World! "), "Hello, World!");
/// ```
pub fn trim_whitespace(text: &str) -> &str {
    text.trim()
}

/// Repeats the text `count` times.
///
/// # Errors
///
/// Returns `Error::ArgsProcessingError` if the result would exceed
/// `MAX_REPEAT_BYTES`.
///
/// # Examples
///
/// ```
/// use strkit::string_utils::repeat;
///
/// assert_eq!(repeat("cat", 3).unwrap(), "catcatcat");
/// assert!(repeat("A", usize::MAX).is_err());
/// ```
pub fn repeat(text: &str, count: usize) -> Result<String> {
    match text.len().checked_mul(count) {
        Some(size) if size <= MAX_REPEAT_BYTES => Ok(text.repeat(count)),
        _ => Err(Error::ArgsProcessingError(format!(
            "repeating {} bytes {} times exceeds the {} bytes limit",
            text.len(),
            count,
            MAX_REPEAT_BYTES
        ))),
    }
}

/// Removes the first occurrence of `value` inside `text`.
///
/// An empty `value` or one not present leaves the text unchanged.
///
/// # Examples
///
/// ```
/// use strkit::string_utils::remove_first_occurrence;
///
/// assert_eq!(remove_first_occurrence("I like legends", "end"), "I like legs");
/// assert_eq!(remove_first_occurrence("ABABAB", "BA"), "ABAB");
/// ```
pub fn remove_first_occurrence(text: &str, value: &str) -> String {
    if value.is_empty() {
        return text.to_string();
    }
    text.replacen(value, "", 1)
}

/// Removes every angle bracket from a tag.
///
/// # Examples
///
/// ```
/// use strkit::string_utils::unbracket_tag;
///
/// assert_eq!(unbracket_tag("<span>"), "span");
/// ```
pub fn unbracket_tag(tag: &str) -> String {
    tag.chars().filter(|c| !matches!(c, '<' | '>')).collect()
}

/// Converts the text to upper case using the Unicode case mapping.
pub fn to_upper(text: &str) -> String {
    text.to_uppercase()
}

/// Splits a list of e-mails delimited by semicolons.
///
/// # Examples
///
/// ```
/// use strkit::string_utils::extract_emails;
///
/// assert_eq!(
///     extract_emails("angus.young@gmail.com;bon.scott@yahoo.com"),
///     vec!["angus.young@gmail.com", "bon.scott@yahoo.com"]
/// );
/// ```
pub fn extract_emails(list: &str) -> Vec<&str> {
    split_list(list, ";")
}

/// Splits the list using the given separator. An empty separator yields the
/// whole list as a single item.
pub fn split_list<'a>(list: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        return vec![list];
    }
    list.split(separator).collect()
}

/// Returns true only if the dynamic value holds a string.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strkit::string_utils::is_string;
///
/// assert!(is_string(&json!("test")));
/// assert!(!is_string(&json!(null)));
/// assert!(!is_string(&json!([])));
/// ```
pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_concatenate() {
        assert_eq!(concatenate("aa", "bb"), "aabb");
        assert_eq!(concatenate("aa", ""), "aa");
        assert_eq!(concatenate("", "bb"), "bb");
        assert_eq!(concatenate("", ""), "");
    }

    #[test]
    fn test_length() {
        assert_eq!(length("aaaaa"), 5);
        assert_eq!(length("b"), 1);
        assert_eq!(length(""), 0);
        assert_eq!(length("こんにちは"), 5);

        assert_eq!(grapheme_length("🦀-🦀é"), 4);
        assert_eq!(grapheme_length("e\u{301}e"), 2);
        assert_eq!(length("e\u{301}e"), 3);
    }

    #[test]
    fn test_first_char() {
        assert_eq!(first_char("John Doe"), Some('J'));
        assert_eq!(first_char("cat"), Some('c'));
        assert_eq!(first_char("🦀 crab"), Some('🦀'));
        assert_eq!(first_char(""), None);
    }

    #[test]
    fn test_trim_whitespace() {
        assert_eq!(trim_whitespace("  Abracadabra"), "Abracadabra");
        assert_eq!(trim_whitespace("cat"), "cat");
        assert_eq!(trim_whitespace("\tHello, World! "), "Hello, World!");
        assert_eq!(trim_whitespace(" \n\t "), "");
    }

    #[test]
    fn test_repeat() {
        assert_eq!(repeat("A", 5).unwrap(), "AAAAA");
        assert_eq!(repeat("cat", 3).unwrap(), "catcatcat");
        assert_eq!(repeat("cat", 0).unwrap(), "");
        assert_eq!(repeat("", usize::MAX).unwrap(), "");
    }

    #[test]
    fn test_repeat_too_large() {
        assert!(matches!(
            repeat("A", usize::MAX),
            Err(Error::ArgsProcessingError(_))
        ));
        assert!(matches!(
            repeat("cat", usize::MAX / 2),
            Err(Error::ArgsProcessingError(_))
        ));
        assert!(repeat("A", MAX_REPEAT_BYTES).is_ok());
        assert!(repeat("A", MAX_REPEAT_BYTES + 1).is_err());
    }

    #[test]
    fn test_remove_first_occurrence() {
        assert_eq!(
            remove_first_occurrence("To be or not to be", "not"),
            "To be or  to be"
        );
        assert_eq!(remove_first_occurrence("I like legends", "end"), "I like legs");
        assert_eq!(remove_first_occurrence("ABABAB", "BA"), "ABAB");
        assert_eq!(remove_first_occurrence("ABABAB", "C"), "ABABAB");
        assert_eq!(remove_first_occurrence("ABABAB", ""), "ABABAB");
    }

    #[test]
    fn test_unbracket_tag() {
        assert_eq!(unbracket_tag("<div>"), "div");
        assert_eq!(unbracket_tag("<span>"), "span");
        assert_eq!(unbracket_tag("<a>"), "a");
        assert_eq!(unbracket_tag("div"), "div");
    }

    #[test]
    fn test_to_upper() {
        assert_eq!(to_upper("Thunderstruck"), "THUNDERSTRUCK");
        assert_eq!(
            to_upper("abcdefghijklmnopqrstuvwxyz"),
            "ABCDEFGHIJKLMNOPQRSTUVWXYZ"
        );
        assert_eq!(to_upper("straße"), "STRASSE");
    }

    #[test]
    fn test_extract_emails() {
        assert_eq!(
            extract_emails(
                "angus.young@gmail.com;brian.johnson@hotmail.com;bon.scott@yahoo.com"
            ),
            vec![
                "angus.young@gmail.com",
                "brian.johnson@hotmail.com",
                "bon.scott@yahoo.com"
            ]
        );
        assert_eq!(extract_emails("info@gmail.com"), vec!["info@gmail.com"]);
        assert_eq!(split_list("a, b", ", "), vec!["a", "b"]);
        assert_eq!(split_list("a;b", ""), vec!["a;b"]);
    }

    #[test]
    fn test_is_string() {
        assert!(is_string(&json!("test")));
        assert!(is_string(&json!("")));
        assert!(!is_string(&json!(null)));
        assert!(!is_string(&json!([])));
        assert!(!is_string(&json!({})));
        assert!(!is_string(&json!(42)));
        assert!(!is_string(&json!(true)));
    }
}
