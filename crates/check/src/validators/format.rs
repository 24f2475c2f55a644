//! Format validators for strings
//!
//! Parsing is delegated to real parsers wherever one exists: `url` for
//! URLs, `uuid` for UUIDs, `std::net` for addresses, `base64` and
//! `serde_json` for encodings, `semver` for versions. Regular expressions
//! cover the remaining shapes.

use std::borrow::Cow;
use std::net::{IpAddr, Ipv6Addr};
use std::sync::LazyLock;

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, URL_SAFE};

use crate::foundation::Validation;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

static HOSTNAME_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

static HEX_COLOR_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
});

static E164_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^\+[1-9]\d{1,14}$").unwrap());

// ============================================================================
// INTERNET
// ============================================================================

/// Validates an email address.
pub fn email(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(EMAIL_REGEX.is_match(value), field, &["email"], || {
        "must be a valid email address"
    })
}

fn parse_absolute_url(value: &str) -> Option<url::Url> {
    url::Url::parse(value)
        .ok()
        .filter(|u| u.host_str().is_some_and(|h| !h.is_empty()))
}

/// Validates an absolute URL with a host.
pub fn url(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(parse_absolute_url(value).is_some(), field, &["url"], || {
        "must be a valid URL"
    })
}

/// Validates an absolute URL whose scheme is one of `schemes` (case-insensitive).
pub fn url_with_scheme<S: AsRef<str>>(
    value: &str,
    schemes: &[S],
    field: impl Into<Cow<'static, str>>,
) -> Validation {
    let field = field.into();
    let Some(parsed) = parse_absolute_url(value) else {
        return Validation::fail(field, "must be a valid URL", "url");
    };
    let allowed = schemes
        .iter()
        .any(|s| s.as_ref().eq_ignore_ascii_case(parsed.scheme()));
    Validation::check(allowed, field, &["url"], || {
        let names: Vec<&str> = schemes.iter().map(AsRef::as_ref).collect();
        format!("must have scheme: {}", names.join(", "))
    })
}

/// Validates an `http` or `https` URL.
pub fn http_or_https(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    url_with_scheme(value, &["http", "https"], field)
}

/// Validates a hostname (RFC 1123 labels, at most 253 characters).
pub fn hostname(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    let ok = value.len() <= 253 && HOSTNAME_REGEX.is_match(value);
    Validation::check(ok, field, &["hostname"], || "must be a valid hostname")
}

fn parse_port(value: &str) -> Option<u16> {
    value.parse::<u16>().ok().filter(|&p| p != 0)
}

/// Validates a port number written as a string (1-65535).
pub fn port(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(parse_port(value).is_some(), field, &["port"], || {
        "must be a valid port number (1-65535)"
    })
}

/// Splits `host:port` or `[v6-host]:port`. The port may be empty.
fn split_host_port(value: &str) -> Option<(&str, &str)> {
    let (host, port) = if let Some(rest) = value.strip_prefix('[') {
        let (host, after) = rest.split_once(']')?;
        (host, after.strip_prefix(':')?)
    } else {
        let (host, port) = value.rsplit_once(':')?;
        if host.contains(':') {
            return None;
        }
        (host, port)
    };
    let stray = |s: &str| s.contains(['[', ']']);
    if stray(host) || stray(port) {
        return None;
    }
    Some((host, port))
}

/// Validates a `host:port` pair.
pub fn host_port(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    let problem = match split_host_port(value) {
        None => Some("must be a valid host:port"),
        Some(("", _)) => Some("host must not be empty"),
        Some((_, port)) if parse_port(port).is_none() => {
            Some("port must be a valid number (1-65535)")
        }
        Some(_) => None,
    };
    Validation::check(problem.is_none(), field, &["hostport"], || {
        problem.unwrap_or_default()
    })
}

// ============================================================================
// ADDRESSES
// ============================================================================

fn ipv4_mapped(addr: &Ipv6Addr) -> bool {
    addr.to_ipv4_mapped().is_some()
}

/// Validates an IPv4 or IPv6 address.
pub fn ip(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(value.parse::<IpAddr>().is_ok(), field, &["ip"], || {
        "must be a valid IP address"
    })
}

/// Validates an IPv4 address, including the IPv4-mapped IPv6 form.
pub fn ipv4(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    let ok = match value.parse::<IpAddr>() {
        Ok(IpAddr::V4(_)) => true,
        Ok(IpAddr::V6(v6)) => ipv4_mapped(&v6),
        Err(_) => false,
    };
    Validation::check(ok, field, &["ipv4"], || "must be a valid IPv4 address")
}

/// Validates an IPv6 address that is not IPv4-mapped.
pub fn ipv6(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    let ok = matches!(value.parse::<IpAddr>(), Ok(IpAddr::V6(v6)) if !ipv4_mapped(&v6));
    Validation::check(ok, field, &["ipv6"], || "must be a valid IPv6 address")
}

fn is_cidr(value: &str) -> bool {
    let Some((addr, prefix)) = value.split_once('/') else {
        return false;
    };
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let Ok(prefix) = prefix.parse::<u8>() else {
        return false;
    };
    match addr.parse::<IpAddr>() {
        Ok(IpAddr::V4(_)) => prefix <= 32,
        Ok(IpAddr::V6(_)) => prefix <= 128,
        Err(_) => false,
    }
}

/// Validates CIDR notation, e.g. `10.0.0.0/8` or `2001:db8::/32`.
pub fn cidr(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(is_cidr(value), field, &["cidr"], || {
        "must be a valid CIDR notation"
    })
}

fn is_mac(value: &str) -> bool {
    let separator = match value.as_bytes().get(2) {
        Some(b':') => ':',
        Some(b'-') => '-',
        _ => return false,
    };
    let parts: Vec<&str> = value.split(separator).collect();
    parts.len() == 6
        && parts
            .iter()
            .all(|p| p.len() == 2 && p.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// Validates a 48-bit MAC address with `:` or `-` separators.
pub fn mac(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(is_mac(value), field, &["mac"], || "must be a valid MAC address")
}

// ============================================================================
// IDENTIFIERS AND ENCODINGS
// ============================================================================

fn parse_hyphenated_uuid(value: &str) -> Option<uuid::Uuid> {
    if value.len() != 36 {
        return None;
    }
    uuid::Uuid::try_parse(value)
        .ok()
        .filter(|u| u.get_variant() == uuid::Variant::RFC4122)
}

/// Validates a hyphenated RFC 4122 UUID of version 1 through 5.
pub fn uuid(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    let ok = parse_hyphenated_uuid(value).is_some_and(|u| (1..=5).contains(&u.get_version_num()));
    Validation::check(ok, field, &["uuid"], || "must be a valid UUID")
}

/// Validates a hyphenated RFC 4122 version-4 UUID.
pub fn uuid4(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    let ok = parse_hyphenated_uuid(value).is_some_and(|u| u.get_version_num() == 4);
    Validation::check(ok, field, &["uuid4"], || "must be a valid UUID v4")
}

/// Validates `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
pub fn hex_color(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(HEX_COLOR_REGEX.is_match(value), field, &["hexcolor"], || {
        "must be a valid hex color"
    })
}

/// Validates exactly `#RRGGBB`.
pub fn hex_color_full(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    let ok = value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()));
    Validation::check(ok, field, &["hexcolor"], || {
        "must be a valid hex color (#RRGGBB)"
    })
}

/// Validates padded standard base64.
pub fn base64(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(STANDARD.decode(value).is_ok(), field, &["base64"], || {
        "must be valid base64"
    })
}

/// Validates padded URL-safe base64.
pub fn base64_url(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(URL_SAFE.decode(value).is_ok(), field, &["base64url"], || {
        "must be valid URL-safe base64"
    })
}

/// Validates a JSON document.
pub fn json(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    let ok = serde_json::from_str::<serde_json::Value>(value).is_ok();
    Validation::check(ok, field, &["json"], || "must be valid JSON")
}

/// Validates a semantic version, with an optional leading `v`.
pub fn semver(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    let version = value.strip_prefix('v').unwrap_or(value);
    Validation::check(semver::Version::parse(version).is_ok(), field, &["semver"], || {
        "must be a valid semantic version"
    })
}

/// Validates an E.164 phone number.
pub fn e164(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(E164_REGEX.is_match(value), field, &["e164"], || {
        "must be a valid E.164 phone number"
    })
}

fn luhn(digits: &[u8]) -> bool {
    let parity = digits.len() % 2;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            let d = u32::from(d - b'0');
            if i % 2 == parity {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    sum.is_multiple_of(10)
}

/// Validates a card number by length and Luhn checksum. Spaces and dashes
/// are ignored.
pub fn credit_card(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    let digits: Vec<u8> = value.bytes().filter(|b| !matches!(b, b' ' | b'-')).collect();
    let ok = (13..=19).contains(&digits.len())
        && digits.iter().all(u8::is_ascii_digit)
        && luhn(&digits);
    Validation::check(ok, field, &["creditcard"], || {
        "must be a valid credit card number"
    })
}

/// Validates a hexadecimal string. The empty string passes.
pub fn hex(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    let ok = value.bytes().all(|b| b.is_ascii_hexdigit());
    Validation::check(ok, field, &["hex"], || "must be a valid hexadecimal string")
}

/// Validates a `data:` URI with a payload separator.
pub fn data_uri(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    let ok = value.starts_with("data:") && value.contains(',');
    Validation::check(ok, field, &["datauri"], || "must be a valid data URI")
}

/// Validates a non-empty path without NUL bytes.
pub fn file_path(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    let ok = !value.is_empty() && !value.contains('\0');
    Validation::check(ok, field, &["filepath"], || "must be a valid file path")
}

/// Validates a non-empty Unix path without NUL bytes.
pub fn unix_path(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    let ok = !value.is_empty() && !value.contains('\0');
    Validation::check(ok, field, &["unixpath"], || "must be a valid Unix path")
}

// ============================================================================
// GEOGRAPHY AND STANDARDS
// ============================================================================

fn parse_finite(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Validates a latitude in degrees (-90 to 90).
pub fn latitude(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    let ok = parse_finite(value).is_some_and(|v| (-90.0..=90.0).contains(&v));
    Validation::check(ok, field, &["latitude"], || {
        "must be a valid latitude (-90 to 90)"
    })
}

/// Validates a longitude in degrees (-180 to 180).
pub fn longitude(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    let ok = parse_finite(value).is_some_and(|v| (-180.0..=180.0).contains(&v));
    Validation::check(ok, field, &["longitude"], || {
        "must be a valid longitude (-180 to 180)"
    })
}

fn letters(value: &str, len: usize, upper: bool) -> bool {
    value.len() == len
        && value.bytes().all(|b| {
            if upper {
                b.is_ascii_uppercase()
            } else {
                b.is_ascii_lowercase()
            }
        })
}

/// Validates the shape of an ISO 3166-1 alpha-2 country code (`"DE"`).
pub fn country_code2(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(letters(value, 2, true), field, &["iso3166_1_alpha2"], || {
        "must be a valid ISO 3166-1 alpha-2 country code"
    })
}

/// Validates the shape of an ISO 3166-1 alpha-3 country code (`"DEU"`).
pub fn country_code3(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(letters(value, 3, true), field, &["iso3166_1_alpha3"], || {
        "must be a valid ISO 3166-1 alpha-3 country code"
    })
}

/// Validates the shape of an ISO 639-1 language code (`"de"`).
pub fn language_code(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(letters(value, 2, false), field, &["iso639_1"], || {
        "must be a valid ISO 639-1 language code"
    })
}

/// Validates the shape of an ISO 4217 currency code (`"EUR"`).
pub fn currency_code(value: &str, field: impl Into<Cow<'static, str>>) -> Validation {
    Validation::check(letters(value, 3, true), field, &["iso4217"], || {
        "must be a valid ISO 4217 currency code"
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user@example.com", true)]
    #[case("first.last+tag@sub.example.org", true)]
    #[case::dotless_domain("ada@example", true)]
    #[case("", false)]
    #[case::missing_domain("ada@", false)]
    #[case("no-at-sign", false)]
    #[case("user@-bad.com", false)]
    fn test_email(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(email(value, "email").passed(), ok);
    }

    #[rstest]
    #[case("https://example.com/path?q=1", true)]
    #[case("ftp://files.example.com", true)]
    #[case("example.com", false)]
    #[case("mailto:user@example.com", false)]
    #[case("", false)]
    fn test_url(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(url(value, "u").passed(), ok);
    }

    #[test]
    fn test_url_with_scheme() {
        assert!(http_or_https("HTTPS://example.com", "u").passed());
        let v = http_or_https("ftp://example.com", "u");
        assert_eq!(
            v.error().unwrap().to_string(),
            "u: must have scheme: http, https"
        );
        let v = http_or_https("not a url", "u");
        assert_eq!(v.error().unwrap().to_string(), "u: must be a valid URL");
    }

    #[rstest]
    #[case("example.com", true)]
    #[case("localhost", true)]
    #[case("-bad.com", false)]
    #[case("bad_name.com", false)]
    fn test_hostname(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(hostname(value, "h").passed(), ok);
    }

    #[test]
    fn test_hostname_rejects_overlong() {
        let long = format!("{}com", "a.".repeat(130));
        assert_eq!(long.len(), 263);
        assert!(hostname(&long, "h").failed());
    }

    #[rstest]
    #[case("80", true)]
    #[case("65535", true)]
    #[case("0", false)]
    #[case("65536", false)]
    #[case("http", false)]
    fn test_port(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(port(value, "p").passed(), ok);
    }

    #[rstest]
    #[case::plain("example.com:8080", None)]
    #[case::ipv6("[::1]:443", None)]
    #[case::stray_bracket("exa]mple.com:80", Some("must be a valid host:port"))]
    #[case::unclosed_ipv6("[::1:443", Some("must be a valid host:port"))]
    #[case::no_port("example.com", Some("must be a valid host:port"))]
    #[case::bare_ipv6("::1:443", Some("must be a valid host:port"))]
    #[case::empty_host(":8080", Some("host must not be empty"))]
    #[case::bad_port("example.com:http", Some("port must be a valid number (1-65535)"))]
    #[case::empty_port("example.com:", Some("port must be a valid number (1-65535)"))]
    fn test_host_port(#[case] value: &str, #[case] expected: Option<&str>) {
        let v = host_port(value, "addr");
        let message = v.error().map(|e| e.field_errors()[0].message().to_owned());
        assert_eq!(message.as_deref(), expected);
    }

    #[rstest]
    #[case("192.168.0.1", true, true, false)]
    #[case("::1", true, false, true)]
    #[case("::ffff:10.0.0.1", true, true, false)]
    #[case("256.0.0.1", false, false, false)]
    #[case("01.2.3.4", false, false, false)]
    fn test_ip_families(
        #[case] value: &str,
        #[case] any: bool,
        #[case] v4: bool,
        #[case] v6: bool,
    ) {
        assert_eq!(ip(value, "ip").passed(), any);
        assert_eq!(ipv4(value, "ip").passed(), v4);
        assert_eq!(ipv6(value, "ip").passed(), v6);
    }

    #[rstest]
    #[case("10.0.0.0/8", true)]
    #[case("2001:db8::/32", true)]
    #[case("10.0.0.0/33", false)]
    #[case("10.0.0.0/+8", false)]
    #[case("10.0.0.0", false)]
    fn test_cidr(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(cidr(value, "net").passed(), ok);
    }

    #[rstest]
    #[case("00:1A:2b:3C:4d:5E", true)]
    #[case("00-1A-2B-3C-4D-5E", true)]
    #[case("00:1A-2B:3C:4D:5E", false)]
    #[case("001A.2B3C.4D5E", false)]
    fn test_mac(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(mac(value, "mac").passed(), ok);
    }

    #[test]
    fn test_uuid_versions() {
        let v4 = "550e8400-e29b-41d4-a716-446655440000";
        let v1 = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";
        assert!(uuid(v4, "id").passed());
        assert!(uuid(v1, "id").passed());
        assert!(uuid4(v4, "id").passed());
        assert!(uuid4(v1, "id").failed());
        assert!(uuid("550e8400e29b41d4a716446655440000", "id").failed());
        assert!(uuid("00000000-0000-0000-0000-000000000000", "id").failed());
    }

    #[test]
    fn test_colors() {
        assert!(hex_color("#fff", "c").passed());
        assert!(hex_color("#11223344", "c").passed());
        assert!(hex_color("#1234", "c").failed());
        assert!(hex_color_full("#a1b2c3", "c").passed());
        assert!(hex_color_full("#abc", "c").failed());
    }

    #[test]
    fn test_encodings() {
        assert!(base64("aGVsbG8=", "b").passed());
        assert!(base64("aGVsbG8", "b").failed());
        assert!(base64_url("-_8=", "b").passed());
        assert!(base64("-_8=", "b").failed());
        assert!(json(r#"{"a": [1, 2]}"#, "j").passed());
        assert!(json("{", "j").failed());
        assert!(json("", "j").failed());
        assert!(json("null", "j").passed());
        assert!(json(" 42 ", "j").passed());
        assert!(json("1 2", "j").failed());
    }

    #[test]
    fn test_luhn_checksum() {
        assert!(luhn(b"79927398713"));
        assert!(!luhn(b"79927398710"));
        assert!(luhn(b"0"));
    }

    #[rstest]
    #[case("1.2.3", true)]
    #[case("v1.0.0-rc.1+build.5", true)]
    #[case("1.2", false)]
    #[case("01.2.3", false)]
    fn test_semver(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(semver(value, "version").passed(), ok);
    }

    #[test]
    fn test_phone_and_card() {
        assert!(e164("+14155552671", "phone").passed());
        assert!(e164("14155552671", "phone").failed());
        assert!(credit_card("4111 1111 1111 1111", "card").passed());
        assert!(credit_card("4111-1111-1111-1112", "card").failed());
        assert!(credit_card("4111", "card").failed());
    }

    #[test]
    fn test_misc_strings() {
        assert!(hex("deadBEEF", "h").passed());
        assert!(hex("xyz", "h").failed());
        assert!(data_uri("data:text/plain;base64,SGk=", "d").passed());
        assert!(data_uri("data:text/plain", "d").failed());
        assert!(file_path("/tmp/x", "p").passed());
        assert!(unix_path("", "p").failed());
        assert!(file_path("a\0b", "p").failed());
    }

    #[test]
    fn test_coordinates() {
        assert!(latitude("45.5", "lat").passed());
        assert!(latitude("-91", "lat").failed());
        assert!(latitude("NaN", "lat").failed());
        assert!(longitude("179.99", "lon").passed());
        assert!(longitude("inf", "lon").failed());
    }

    #[test]
    fn test_standard_codes() {
        assert!(country_code2("DE", "c").passed());
        assert!(country_code2("de", "c").failed());
        assert!(country_code3("DEU", "c").passed());
        assert!(language_code("en", "l").passed());
        assert!(language_code("EN", "l").failed());
        assert!(currency_code("EUR", "cur").passed());
        assert_eq!(
            currency_code("eu", "cur").validators(),
            ["iso4217"]
        );
    }
}
