//! String builders

use std::borrow::Cow;

use regex::Regex;

use super::Checks;
use crate::foundation::{Outcome, Report, Validation};
use crate::validators::{format, text};

// ============================================================================
// STRING BUILDER
// ============================================================================

/// Chains text and format checks on one string.
///
/// # Examples
///
/// ```
/// use nebula_check::builders::string;
///
/// let v = string("hello-world", "slug").required().slug().max_len(64).build();
/// assert!(v.unwrap().passed());
/// ```
#[derive(Debug, Clone)]
#[must_use = "builders do nothing unless built or aggregated"]
pub struct StrBuilder<'a> {
    value: &'a str,
    checks: Checks,
}

impl<'a> StrBuilder<'a> {
    /// Starts a chain for `value`.
    pub fn new(value: &'a str, field: impl Into<Cow<'static, str>>) -> Self {
        Self {
            value,
            checks: Checks::new(field),
        }
    }

    /// Returns the value under validation.
    #[must_use]
    pub fn value(&self) -> &'a str {
        self.value
    }

    /// Returns the field name.
    #[must_use]
    pub fn field(&self) -> &str {
        self.checks.field_name()
    }

    /// Applies `chain` only when `condition` holds.
    ///
    /// ```
    /// use nebula_check::builders::string;
    ///
    /// let strict = false;
    /// let v = string("x", "code").when(strict, |b| b.min_len(3)).build();
    /// assert!(v.is_none());
    /// ```
    #[must_use = "builder methods must be chained or built"]
    pub fn when(self, condition: bool, chain: impl FnOnce(Self) -> Self) -> Self {
        if condition { chain(self) } else { self }
    }

    /// Runs an arbitrary check with the value and field name.
    #[must_use = "builder methods must be chained or built"]
    pub fn check<R>(mut self, check: impl FnOnce(&'a str, Cow<'static, str>) -> R) -> Self
    where
        R: Into<Option<Validation>>,
    {
        let outcome = check(self.value, self.checks.field());
        self.checks.record(outcome);
        self
    }

    leaf_methods! {
        /// See [`text::required`].
        required => text::required;
        /// See [`text::not_blank`].
        not_blank => text::not_blank;
        /// See [`text::alpha`].
        alpha => text::alpha;
        /// See [`text::alphanumeric`].
        alphanumeric => text::alphanumeric;
        /// See [`text::numeric`].
        numeric => text::numeric;
        /// See [`text::alpha_unicode`].
        alpha_unicode => text::alpha_unicode;
        /// See [`text::alphanumeric_unicode`].
        alphanumeric_unicode => text::alphanumeric_unicode;
        /// See [`text::ascii`].
        ascii => text::ascii;
        /// See [`text::printable_ascii`].
        printable_ascii => text::printable_ascii;
        /// See [`text::lowercase`].
        lowercase => text::lowercase;
        /// See [`text::uppercase`].
        uppercase => text::uppercase;
        /// See [`text::no_whitespace`].
        no_whitespace => text::no_whitespace;
        /// See [`text::trimmed`].
        trimmed => text::trimmed;
        /// See [`text::single_line`].
        single_line => text::single_line;
        /// See [`text::identifier`].
        identifier => text::identifier;
        /// See [`text::slug`].
        slug => text::slug;

        /// See [`format::email`].
        email => format::email;
        /// See [`format::url`].
        url => format::url;
        /// See [`format::http_or_https`].
        http_or_https => format::http_or_https;
        /// See [`format::uuid`].
        uuid => format::uuid;
        /// See [`format::uuid4`].
        uuid4 => format::uuid4;
        /// See [`format::ip`].
        ip => format::ip;
        /// See [`format::ipv4`].
        ipv4 => format::ipv4;
        /// See [`format::ipv6`].
        ipv6 => format::ipv6;
        /// See [`format::cidr`].
        cidr => format::cidr;
        /// See [`format::mac`].
        mac => format::mac;
        /// See [`format::hostname`].
        hostname => format::hostname;
        /// See [`format::port`].
        port => format::port;
        /// See [`format::host_port`].
        host_port => format::host_port;
        /// See [`format::hex_color`].
        hex_color => format::hex_color;
        /// See [`format::hex_color_full`].
        hex_color_full => format::hex_color_full;
        /// See [`format::base64`].
        base64 => format::base64;
        /// See [`format::base64_url`].
        base64_url => format::base64_url;
        /// See [`format::json`].
        json => format::json;
        /// See [`format::semver`].
        semver => format::semver;
        /// See [`format::e164`].
        e164 => format::e164;
        /// See [`format::credit_card`].
        credit_card => format::credit_card;
        /// See [`format::latitude`].
        latitude => format::latitude;
        /// See [`format::longitude`].
        longitude => format::longitude;
        /// See [`format::country_code2`].
        country_code2 => format::country_code2;
        /// See [`format::country_code3`].
        country_code3 => format::country_code3;
        /// See [`format::language_code`].
        language_code => format::language_code;
        /// See [`format::currency_code`].
        currency_code => format::currency_code;
        /// See [`format::hex`].
        hex => format::hex;
        /// See [`format::data_uri`].
        data_uri => format::data_uri;
        /// See [`format::file_path`].
        file_path => format::file_path;
        /// See [`format::unix_path`].
        unix_path => format::unix_path;
    }

    /// See [`text::min_len`].
    #[must_use = "builder methods must be chained or built"]
    pub fn min_len(mut self, min: usize) -> Self {
        self.checks.record(text::min_len(self.value, min, self.checks.field()));
        self
    }

    /// See [`text::max_len`].
    #[must_use = "builder methods must be chained or built"]
    pub fn max_len(mut self, max: usize) -> Self {
        self.checks.record(text::max_len(self.value, max, self.checks.field()));
        self
    }

    /// See [`text::len`].
    #[must_use = "builder methods must be chained or built"]
    pub fn len(mut self, exact: usize) -> Self {
        self.checks.record(text::len(self.value, exact, self.checks.field()));
        self
    }

    /// See [`text::len_between`].
    #[must_use = "builder methods must be chained or built"]
    pub fn len_between(mut self, min: usize, max: usize) -> Self {
        let outcome = text::len_between(self.value, min, max, self.checks.field());
        self.checks.record(outcome);
        self
    }

    /// See [`text::matches`].
    #[must_use = "builder methods must be chained or built"]
    pub fn matches(mut self, pattern: &Regex) -> Self {
        self.checks.record(text::matches(self.value, pattern, self.checks.field()));
        self
    }

    /// See [`text::not_matches`].
    #[must_use = "builder methods must be chained or built"]
    pub fn not_matches(mut self, pattern: &Regex) -> Self {
        let outcome = text::not_matches(self.value, pattern, self.checks.field());
        self.checks.record(outcome);
        self
    }

    /// See [`text::prefix`].
    #[must_use = "builder methods must be chained or built"]
    pub fn prefix(mut self, prefix: &str) -> Self {
        self.checks.record(text::prefix(self.value, prefix, self.checks.field()));
        self
    }

    /// See [`text::suffix`].
    #[must_use = "builder methods must be chained or built"]
    pub fn suffix(mut self, suffix: &str) -> Self {
        self.checks.record(text::suffix(self.value, suffix, self.checks.field()));
        self
    }

    /// See [`text::contains`].
    #[must_use = "builder methods must be chained or built"]
    pub fn contains(mut self, needle: &str) -> Self {
        self.checks.record(text::contains(self.value, needle, self.checks.field()));
        self
    }

    /// See [`text::not_contains`].
    #[must_use = "builder methods must be chained or built"]
    pub fn not_contains(mut self, needle: &str) -> Self {
        let outcome = text::not_contains(self.value, needle, self.checks.field());
        self.checks.record(outcome);
        self
    }

    /// See [`text::one_of`].
    #[must_use = "builder methods must be chained or built"]
    pub fn one_of<S: AsRef<str>>(mut self, allowed: &[S]) -> Self {
        self.checks.record(text::one_of(self.value, allowed, self.checks.field()));
        self
    }

    /// See [`text::not_one_of`].
    #[must_use = "builder methods must be chained or built"]
    pub fn not_one_of<S: AsRef<str>>(mut self, disallowed: &[S]) -> Self {
        let outcome = text::not_one_of(self.value, disallowed, self.checks.field());
        self.checks.record(outcome);
        self
    }

    /// See [`format::url_with_scheme`].
    #[must_use = "builder methods must be chained or built"]
    pub fn url_with_scheme<S: AsRef<str>>(mut self, schemes: &[S]) -> Self {
        let outcome = format::url_with_scheme(self.value, schemes, self.checks.field());
        self.checks.record(outcome);
        self
    }

    /// Merges every recorded outcome; `None` if nothing was checked.
    #[must_use]
    pub fn build(self) -> Option<Validation> {
        self.checks.build()
    }
}

impl Outcome for StrBuilder<'_> {
    fn fold_into(self, report: &mut Report) -> bool {
        self.build().fold_into(report)
    }
}

/// Starts a [`StrBuilder`].
pub fn string(value: &str, field: impl Into<Cow<'static, str>>) -> StrBuilder<'_> {
    StrBuilder::new(value, field)
}

// ============================================================================
// OPTIONAL STRING BUILDER
// ============================================================================

/// A [`StrBuilder`] over a value that may be absent.
///
/// When absent, every method is a no-op and [`build`](Self::build) returns
/// `None`.
///
/// ```
/// use nebula_check::builders::opt_string;
///
/// let nickname: Option<&str> = None;
/// assert!(opt_string(nickname, "nickname").min_len(3).build().is_none());
///
/// let v = opt_string(Some("al"), "nickname").min_len(3).build().unwrap();
/// assert!(v.failed());
/// ```
#[derive(Debug, Clone)]
#[must_use = "builders do nothing unless built or aggregated"]
pub struct OptStrBuilder<'a> {
    inner: Option<StrBuilder<'a>>,
}

impl<'a> OptStrBuilder<'a> {
    /// Starts a chain for an optional `value`.
    pub fn new(value: Option<&'a str>, field: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner: value.map(|v| StrBuilder::new(v, field)),
        }
    }

    /// Returns true when there is a value to check.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.inner.is_some()
    }

    /// Applies `chain` only when the value is present and `condition` holds.
    #[must_use = "builder methods must be chained or built"]
    pub fn when(self, condition: bool, chain: impl FnOnce(StrBuilder<'a>) -> StrBuilder<'a>) -> Self {
        Self {
            inner: self.inner.map(|b| b.when(condition, chain)),
        }
    }

    /// Runs an arbitrary check when the value is present.
    #[must_use = "builder methods must be chained or built"]
    pub fn check<R>(self, check: impl FnOnce(&'a str, Cow<'static, str>) -> R) -> Self
    where
        R: Into<Option<Validation>>,
    {
        Self {
            inner: self.inner.map(|b| b.check(check)),
        }
    }

    optional_methods! {
        /// See [`StrBuilder::required`].
        required();
        /// See [`StrBuilder::not_blank`].
        not_blank();
        /// See [`StrBuilder::min_len`].
        min_len(min: usize);
        /// See [`StrBuilder::max_len`].
        max_len(max: usize);
        /// See [`StrBuilder::len`].
        len(exact: usize);
        /// See [`StrBuilder::len_between`].
        len_between(min: usize, max: usize);
        /// See [`StrBuilder::matches`].
        matches(pattern: &Regex);
        /// See [`StrBuilder::not_matches`].
        not_matches(pattern: &Regex);
        /// See [`StrBuilder::prefix`].
        prefix(prefix: &str);
        /// See [`StrBuilder::suffix`].
        suffix(suffix: &str);
        /// See [`StrBuilder::contains`].
        contains(needle: &str);
        /// See [`StrBuilder::not_contains`].
        not_contains(needle: &str);
        /// See [`StrBuilder::alpha`].
        alpha();
        /// See [`StrBuilder::alphanumeric`].
        alphanumeric();
        /// See [`StrBuilder::numeric`].
        numeric();
        /// See [`StrBuilder::alpha_unicode`].
        alpha_unicode();
        /// See [`StrBuilder::alphanumeric_unicode`].
        alphanumeric_unicode();
        /// See [`StrBuilder::ascii`].
        ascii();
        /// See [`StrBuilder::printable_ascii`].
        printable_ascii();
        /// See [`StrBuilder::lowercase`].
        lowercase();
        /// See [`StrBuilder::uppercase`].
        uppercase();
        /// See [`StrBuilder::no_whitespace`].
        no_whitespace();
        /// See [`StrBuilder::trimmed`].
        trimmed();
        /// See [`StrBuilder::single_line`].
        single_line();
        /// See [`StrBuilder::identifier`].
        identifier();
        /// See [`StrBuilder::slug`].
        slug();
        /// See [`StrBuilder::email`].
        email();
        /// See [`StrBuilder::url`].
        url();
        /// See [`StrBuilder::http_or_https`].
        http_or_https();
        /// See [`StrBuilder::uuid`].
        uuid();
        /// See [`StrBuilder::uuid4`].
        uuid4();
        /// See [`StrBuilder::ip`].
        ip();
        /// See [`StrBuilder::ipv4`].
        ipv4();
        /// See [`StrBuilder::ipv6`].
        ipv6();
        /// See [`StrBuilder::cidr`].
        cidr();
        /// See [`StrBuilder::mac`].
        mac();
        /// See [`StrBuilder::hostname`].
        hostname();
        /// See [`StrBuilder::port`].
        port();
        /// See [`StrBuilder::host_port`].
        host_port();
        /// See [`StrBuilder::hex_color`].
        hex_color();
        /// See [`StrBuilder::hex_color_full`].
        hex_color_full();
        /// See [`StrBuilder::base64`].
        base64();
        /// See [`StrBuilder::base64_url`].
        base64_url();
        /// See [`StrBuilder::json`].
        json();
        /// See [`StrBuilder::semver`].
        semver();
        /// See [`StrBuilder::e164`].
        e164();
        /// See [`StrBuilder::credit_card`].
        credit_card();
        /// See [`StrBuilder::latitude`].
        latitude();
        /// See [`StrBuilder::longitude`].
        longitude();
        /// See [`StrBuilder::country_code2`].
        country_code2();
        /// See [`StrBuilder::country_code3`].
        country_code3();
        /// See [`StrBuilder::language_code`].
        language_code();
        /// See [`StrBuilder::currency_code`].
        currency_code();
        /// See [`StrBuilder::hex`].
        hex();
        /// See [`StrBuilder::data_uri`].
        data_uri();
        /// See [`StrBuilder::file_path`].
        file_path();
        /// See [`StrBuilder::unix_path`].
        unix_path();
    }

    /// See [`StrBuilder::one_of`].
    #[must_use = "builder methods must be chained or built"]
    pub fn one_of<S: AsRef<str>>(self, allowed: &[S]) -> Self {
        Self {
            inner: self.inner.map(|b| b.one_of(allowed)),
        }
    }

    /// See [`StrBuilder::not_one_of`].
    #[must_use = "builder methods must be chained or built"]
    pub fn not_one_of<S: AsRef<str>>(self, disallowed: &[S]) -> Self {
        Self {
            inner: self.inner.map(|b| b.not_one_of(disallowed)),
        }
    }

    /// See [`StrBuilder::url_with_scheme`].
    #[must_use = "builder methods must be chained or built"]
    pub fn url_with_scheme<S: AsRef<str>>(self, schemes: &[S]) -> Self {
        Self {
            inner: self.inner.map(|b| b.url_with_scheme(schemes)),
        }
    }

    /// Merges every recorded outcome; `None` if absent or nothing was checked.
    #[must_use]
    pub fn build(self) -> Option<Validation> {
        self.inner.and_then(StrBuilder::build)
    }
}

impl Outcome for OptStrBuilder<'_> {
    fn fold_into(self, report: &mut Report) -> bool {
        self.build().fold_into(report)
    }
}

/// Starts an [`OptStrBuilder`].
pub fn opt_string(value: Option<&str>, field: impl Into<Cow<'static, str>>) -> OptStrBuilder<'_> {
    OptStrBuilder::new(value, field)
}

// ============================================================================
// TESTS
// ============================================================================
