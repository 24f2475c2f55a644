//! String content and length validators
//!
//! Lengths count Unicode scalar values, not bytes.

use std::borrow::Cow;

use regex::Regex;

use crate::foundation::Validation;

fn char_len(value: &str) -> usize {
    value.chars().count()
}

// ============================================================================
// PRESENCE
// ============================================================================

/// Validates that a string is non-empty after trimming whitespace.
///
/// ```
/// use nebula_check::validators::text::required;
///
/// assert!(required("  ", "name").failed());
/// assert_eq!(required("Ada", "name").validators(), ["required"]);
/// ```
pub fn required(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(!value.trim().is_empty(), field, &["required"], || {
        "is required"
    })
}

/// Validates that a string is neither empty nor whitespace-only.
pub fn not_blank(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(!value.trim().is_empty(), field, &["notblank"], || {
        "must not be blank"
    })
}

// ============================================================================
// LENGTH
// ============================================================================

/// Validates a minimum length in characters.
pub fn min_len(value: &str, min: usize, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(char_len(value) >= min, field, &["min"], || {
        format!("must be at least {min} characters")
    })
}

/// Validates a maximum length in characters.
pub fn max_len(value: &str, max: usize, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(char_len(value) <= max, field, &["max"], || {
        format!("must be at most {max} characters")
    })
}

/// Validates an exact length in characters.
pub fn len(value: &str, exact: usize, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(char_len(value) == exact, field, &["len"], || {
        format!("must be exactly {exact} characters")
    })
}

/// Validates an inclusive length range in characters. Records `min` and `max`.
pub fn len_between(
    value: &str,
    min: usize,
    max: usize,
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    let length = char_len(value);
    Validation::check(
        (min..=max).contains(&length),
        field,
        &["min", "max"],
        || format!("must be between {min} and {max} characters"),
    )
}

// ============================================================================
// PATTERN AND SUBSTRING
// ============================================================================

/// Validates that a string matches `pattern`.
pub fn matches(value: &str, pattern: &Regex, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(pattern.is_match(value), field, &["match"], || {
        format!("must match pattern {}", pattern.as_str())
    })
}

/// Validates that a string does not match `pattern`.
pub fn not_matches(
    value: &str,
    pattern: &Regex,
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    Validation::check(!pattern.is_match(value), field, &["notmatch"], || {
        format!("must not match pattern {}", pattern.as_str())
    })
}

/// Validates that a string starts with `prefix`.
pub fn prefix(value: &str, prefix: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(value.starts_with(prefix), field, &["startswith"], || {
        format!("must start with {prefix:?}")
    })
}

/// Validates that a string ends with `suffix`.
pub fn suffix(value: &str, suffix: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(value.ends_with(suffix), field, &["endswith"], || {
        format!("must end with {suffix:?}")
    })
}

/// Validates that a string contains `needle`.
pub fn contains(value: &str, needle: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(value.contains(needle), field, &["contains"], || {
        format!("must contain {needle:?}")
    })
}

/// Validates that a string does not contain `needle`.
pub fn not_contains(
    value: &str,
    needle: &str,
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    Validation::check(!value.contains(needle), field, &["excludes"], || {
        format!("must not contain {needle:?}")
    })
}

/// Validates that a string equals one of `allowed`.
pub fn one_of<S: AsRef<str>>(
    value: &str,
    allowed: &[S],
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    let found = allowed.iter().any(|a| a.as_ref() == value);
    Validation::check(found, field, &["oneof"], || {
        format!("must be one of: {}", join(allowed))
    })
}

/// Validates that a string equals none of `disallowed`.
pub fn not_one_of<S: AsRef<str>>(
    value: &str,
    disallowed: &[S],
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    let found = disallowed.iter().any(|d| d.as_ref() == value);
    Validation::check(!found, field, &["notoneof"], || {
        format!("must not be one of: {}", join(disallowed))
    })
}

fn join<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

/// Validates that a string holds only ASCII letters.
pub fn alpha(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    let ok = value.chars().all(|c| c.is_ascii_alphabetic());
    Validation::check(ok, field, &["alpha"], || "must contain only letters")
}

/// Validates that a string holds only ASCII letters and digits.
pub fn alphanumeric(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    let ok = value.chars().all(|c| c.is_ascii_alphanumeric());
    Validation::check(ok, field, &["alphanum"], || {
        "must contain only letters and numbers"
    })
}

/// Validates that a string holds only ASCII digits.
pub fn numeric(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    let ok = value.chars().all(|c| c.is_ascii_digit());
    Validation::check(ok, field, &["numeric"], || "must contain only numbers")
}

/// Validates that a string holds only Unicode letters.
pub fn alpha_unicode(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    let ok = value.chars().all(char::is_alphabetic);
    Validation::check(ok, field, &["alphaunicode"], || "must contain only letters")
}

/// Validates that a string holds only Unicode letters and digits.
pub fn alphanumeric_unicode(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    let ok = value.chars().all(char::is_alphanumeric);
    Validation::check(ok, field, &["alphanumunicode"], || {
        "must contain only letters and numbers"
    })
}

/// Validates that a string is pure ASCII.
pub fn ascii(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(value.is_ascii(), field, &["ascii"], || {
        "must contain only ASCII characters"
    })
}

/// Validates that a string holds only printable ASCII (0x20 through 0x7E).
pub fn printable_ascii(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    let ok = value.chars().all(|c| (' '..='~').contains(&c));
    Validation::check(ok, field, &["printascii"], || {
        "must contain only printable ASCII characters"
    })
}

/// Validates that a string is unchanged by lowercasing.
pub fn lowercase(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(value == value.to_lowercase(), field, &["lowercase"], || {
        "must be lowercase"
    })
}

/// Validates that a string is unchanged by uppercasing.
pub fn uppercase(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(value == value.to_uppercase(), field, &["uppercase"], || {
        "must be uppercase"
    })
}

// ============================================================================
// SHAPE
// ============================================================================

/// Validates that a string holds no whitespace at all.
pub fn no_whitespace(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    let ok = !value.chars().any(char::is_whitespace);
    Validation::check(ok, field, &["nowhitespace"], || {
        "must not contain whitespace"
    })
}

/// Validates that a string has no leading or trailing whitespace.
pub fn trimmed(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(value == value.trim(), field, &["trimmed"], || {
        "must not have leading or trailing whitespace"
    })
}

/// Validates that a string holds no line breaks.
pub fn single_line(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    let ok = !value.contains(['\n', '\r']);
    Validation::check(ok, field, &["singleline"], || "must be a single line")
}

/// Validates an identifier: a letter or underscore, then letters, digits
/// or underscores.
pub fn identifier(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    let problem = identifier_problem(value);
    Validation::check(problem.is_none(), field, &["identifier"], || {
        problem.unwrap_or_default()
    })
}

fn identifier_problem(value: &str) -> Option<&'static str> {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return Some("must not be empty");
    };
    if !(first.is_alphabetic() || first == '_') {
        return Some("must start with a letter or underscore");
    }
    if chars.any(|c| !(c.is_alphanumeric() || c == '_')) {
        return Some("must contain only letters, numbers, and underscores");
    }
    None
}

/// Validates a URL slug: lowercase ASCII letters, digits and single
/// hyphens, not starting or ending with a hyphen.
pub fn slug(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    let problem = slug_problem(value);
    Validation::check(problem.is_none(), field, &["slug"], || {
        problem.unwrap_or_default()
    })
}

fn slug_problem(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some("must not be empty");
    }
    if value.starts_with('-') || value.ends_with('-') {
        return Some("must not start or end with a hyphen");
    }
    let allowed = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-';
    if !value.chars().all(allowed) {
        return Some("must contain only lowercase letters, numbers, and hyphens");
    }
    if value.contains("--") {
        return Some("must not contain consecutive hyphens");
    }
    None
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn message(v: &Validation) -> String {
        v.error().map(ToString::to_string).unwrap_or_default()
    }

    #[test]
    fn test_required_trims() {
        assert!(required("x", "f").passed());
        assert_eq!(message(&required(" \t", "f")), "f: is required");
        assert_eq!(message(&not_blank("", "f")), "f: must not be blank");
    }

    #[test]
    fn test_lengths_count_chars() {
        assert!(min_len("héllo", 5, "f").passed());
        assert!(max_len("日本語", 3, "f").passed());
        assert!(len("日本語", 3, "f").passed());
        assert_eq!(
            message(&min_len("ab", 3, "f")),
            "f: must be at least 3 characters"
        );
        assert_eq!(
            message(&len_between("abcdef", 2, 4, "f")),
            "f: must be between 2 and 4 characters"
        );
        assert_eq!(len_between("abc", 2, 4, "f").validators(), ["min", "max"]);
    }

    #[test]
    fn test_pattern() {
        let digits = Regex::new(r"^\d+$").unwrap();
        assert!(matches("123", &digits, "f").passed());
        assert_eq!(
            message(&matches("12a", &digits, "f")),
            r"f: must match pattern ^\d+$"
        );
        assert!(not_matches("abc", &digits, "f").passed());
    }

    #[test]
    fn test_substrings() {
        assert!(prefix("https://x", "https://", "f").passed());
        assert_eq!(
            message(&suffix("file.txt", ".rs", "f")),
            "f: must end with \".rs\""
        );
        assert!(contains("hello", "ell", "f").passed());
        assert!(not_contains("hello", "ell", "f").failed());
    }

    #[test]
    fn test_one_of_lists_allowed_values() {
        assert!(one_of("b", &["a", "b"], "f").passed());
        assert_eq!(
            message(&one_of("c", &["a", "b"], "f")),
            "f: must be one of: a, b"
        );
        assert_eq!(
            message(&not_one_of("a", &["a", "b"], "f")),
            "f: must not be one of: a, b"
        );
    }

    #[rstest]
    #[case::ascii_letters("abcXYZ", true, true, false)]
    #[case::digits("0123", false, true, true)]
    #[case::mixed("abc123", false, true, false)]
    #[case::accented("café", false, false, false)]
    #[case::empty("", true, true, true)]
    fn test_ascii_classes(
        #[case] value: &str,
        #[case] is_alpha: bool,
        #[case] is_alnum: bool,
        #[case] is_numeric: bool,
    ) {
        assert_eq!(alpha(value, "f").passed(), is_alpha);
        assert_eq!(alphanumeric(value, "f").passed(), is_alnum);
        assert_eq!(numeric(value, "f").passed(), is_numeric);
    }

    #[test]
    fn test_unicode_classes() {
        assert!(alpha_unicode("café", "f").passed());
        assert!(alpha_unicode("café1", "f").failed());
        assert!(alphanumeric_unicode("café1", "f").passed());
        assert!(ascii("plain", "f").passed());
        assert!(ascii("naïve", "f").failed());
        assert!(printable_ascii("a b~", "f").passed());
        assert!(printable_ascii("tab\t", "f").failed());
    }

    #[test]
    fn test_case() {
        assert!(lowercase("abc-1", "f").passed());
        assert!(lowercase("aBc", "f").failed());
        assert!(uppercase("ABC-1", "f").passed());
    }

    #[test]
    fn test_shape() {
        assert!(no_whitespace("a b", "f").failed());
        assert!(trimmed(" a", "f").failed());
        assert!(trimmed("a b", "f").passed());
        assert!(single_line("a\nb", "f").failed());
        assert!(single_line("a b", "f").passed());
    }

    #[rstest]
    #[case::plain("user_name1", None)]
    #[case::underscore("_private", None)]
    #[case::empty("", Some("must not be empty"))]
    #[case::digit_start("1abc", Some("must start with a letter or underscore"))]
    #[case::dash("a-b", Some("must contain only letters, numbers, and underscores"))]
    fn test_identifier(#[case] value: &str, #[case] expected: Option<&str>) {
        let v = identifier(value, "f");
        assert_eq!(v.error().map(|e| e.field_errors()[0].message().to_owned()).as_deref(), expected);
    }

    #[rstest]
    #[case::valid("my-post-1", None)]
    #[case::empty("", Some("must not be empty"))]
    #[case::leading("-post", Some("must not start or end with a hyphen"))]
    #[case::upper("My-post", Some("must contain only lowercase letters, numbers, and hyphens"))]
    #[case::double("my--post", Some("must not contain consecutive hyphens"))]
    fn test_slug(#[case] value: &str, #[case] expected: Option<&str>) {
        let v = slug(value, "f");
        assert_eq!(v.error().map(|e| e.field_errors()[0].message().to_owned()).as_deref(), expected);
    }
}
