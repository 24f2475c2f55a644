//! Builder behaviour observed through reports.

use nebula_check::builders::{
    integer, number, opt_integer, opt_slice, opt_string, opt_strings, slice, string, strings,
};
use nebula_check::validators::{option, text};
use nebula_check::{Validation, all, first};
use pretty_assertions::assert_eq;
use rstest::rstest;

struct Profile<'a> {
    username: &'a str,
    email: &'a str,
    website: Option<&'a str>,
    age: Option<i32>,
    tags: &'a [&'a str],
}

fn valid_profile() -> Profile<'static> {
    Profile {
        username: "ada_l",
        email: "ada@example.com",
        website: Some("https://ada.dev"),
        age: Some(36),
        tags: &["math", "engines"],
    }
}

fn validate(p: &Profile<'_>) -> nebula_check::Report {
    all!(
        string(p.username, "username").required().len_between(3, 20).identifier(),
        string(p.email, "email").required().email(),
        opt_string(p.website, "website").http_or_https(),
        opt_integer(p.age, "age").between(13, 120),
        strings(p.tags, "tags").max_items(5).unique().each(|t| t.not_blank().max_len(20)),
    )
}

#[test]
fn valid_profile_passes_and_tracks_every_field() {
    let report = validate(&valid_profile());
    assert!(report.is_ok());
    for field in ["username", "email", "website", "age", "tags"] {
        assert!(report.was_validated(field), "{field} not tracked");
    }
    assert_eq!(
        report.validators("tags"),
        ["maxitems", "unique", "notblank", "max", "notblank", "max"]
    );
}

#[test]
fn absent_optionals_are_not_tracked() {
    let profile = Profile {
        website: None,
        age: None,
        ..valid_profile()
    };
    let report = validate(&profile);
    assert!(report.is_ok());
    assert!(!report.was_validated("website"));
    assert!(!report.was_validated("age"));
}

#[test]
fn invalid_profile_reports_element_paths() {
    let profile = Profile {
        username: "1x",
        tags: &["ok", "ok", " "],
        ..valid_profile()
    };
    let report = validate(&profile);
    assert_eq!(
        report.field_names(),
        vec!["username", "username", "tags", "tags[2]"]
    );
}

#[test]
fn optional_builder_never_invokes_check_when_absent() {
    let report = all!(
        opt_string(None, "nickname")
            .required()
            .min_len(2)
            .check(|_, _| -> Validation { panic!("invoked on absent string") }),
        opt_integer(None::<u32>, "retries")
            .when(true, |b| b.check(|_, _| -> Validation { panic!("invoked on absent integer") })),
        opt_slice(None::<&[u8]>, "bytes").each(|_, _| -> Validation { panic!("invoked on absent slice") }),
        opt_strings(None::<&[String]>, "names").each(|_| panic!("invoked on absent strings")),
    );
    assert!(report.is_ok());
    assert!(report.applied().is_empty());
}

#[rstest]
#[case::below(-5, false)]
#[case::inside(25, true)]
#[case::above(150, false)]
fn number_between(#[case] age: i32, #[case] ok: bool) {
    let v = number(age, "age").between(0, 120).build().unwrap();
    assert_eq!(v.passed(), ok);
    assert_eq!(v.validators(), ["min", "max"]);
}

#[test]
fn when_branches_only_on_condition() {
    let is_admin = true;
    let v = string("ab", "password")
        .required()
        .when(is_admin, |b| b.min_len(12))
        .build()
        .unwrap();
    assert_eq!(v.validators(), ["required", "min"]);

    let v = string("ab", "password")
        .required()
        .when(!is_admin, |b| b.min_len(12))
        .build()
        .unwrap();
    assert_eq!(v.validators(), ["required"]);
}

#[test]
fn first_stops_at_the_first_failing_builder() {
    let report = first!(
        string("ada", "name").required(),
        integer(-1, "age").non_negative(),
        string("", "email").required(),
    );
    assert_eq!(report.field_names(), vec!["age"]);
    assert!(!report.was_validated("email"));
}

#[test]
fn builders_mix_with_leaf_helpers() {
    let manager: Option<&str> = Some("");
    let report = all!(
        option::required_then(manager, |m| text::required(m, "manager"), "manager"),
        slice(&[1, 2, 3], "ids").unique().min_items(1),
    );
    assert_eq!(report.validators("manager"), ["required", "required"]);
    assert_eq!(report.field_names(), vec!["manager"]);
}
