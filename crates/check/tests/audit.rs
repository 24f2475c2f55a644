//! Tag audit against reports built from builders.

use nebula_check::audit::{self, Inspect, TaggedField, UncheckedField};
use nebula_check::builders::{opt_string, string};
use nebula_check::{FieldError, all};
use pretty_assertions::assert_eq;

struct CreateUser {
    email: String,
    password: String,
    nickname: Option<String>,
}

impl Inspect for CreateUser {
    fn tagged_fields() -> Vec<TaggedField> {
        vec![
            TaggedField::new("Email").json("email").validate("required,email"),
            TaggedField::new("Password").json("password,omitempty").validate("required,min=12"),
            TaggedField::new("Nickname").json("nickname").validate("omitempty,max=20"),
            TaggedField::new("CreatedAt").json("created_at"),
        ]
    }
}

impl CreateUser {
    fn validate(&self) -> nebula_check::Report {
        audit::audit_for::<Self>(all!(
            string(&self.email, "email").required().email(),
            opt_string(self.nickname.as_deref(), "nickname").max_len(20),
        ))
    }
}

#[test]
fn forgotten_fields_are_reported() {
    let user = CreateUser {
        email: "ada@example.com".into(),
        password: "correct horse battery staple".into(),
        nickname: None,
    };
    assert!(!user.password.is_empty());

    let report = user.validate();
    let messages: Vec<String> = report.field_errors().iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        vec![
            "password: tagged but not validated (validate: required,min=12)",
            "nickname: tagged but not validated (validate: omitempty,max=20)",
        ]
    );
    assert_eq!(report.validators("email"), ["required", "email"]);
}

#[test]
fn unchecked_lists_misses_without_touching_the_report() {
    let report = all!(string("x", "email").required());
    let missing = audit::unchecked(&report, &CreateUser::tagged_fields());
    let fields: Vec<&str> = missing.iter().map(|m| m.field.as_str()).collect();
    assert_eq!(fields, vec!["password", "nickname"]);
    assert_eq!(missing[0].struct_field, "Password");
}

#[test]
fn fully_validated_report_is_unchanged() {
    let report = all!(
        string("a@b.co", "email").required().email(),
        string("long enough pass", "password").min_len(12),
        string("ada", "Nickname").max_len(20),
    );
    let audited = audit::audit_for::<CreateUser>(report.clone());
    assert_eq!(audited, report);
}

#[test]
fn unchecked_field_renders_like_its_field_error() {
    let missing = UncheckedField {
        field: "password".into(),
        struct_field: "Password".into(),
        tag: "required".into(),
    };
    let error = FieldError::from(missing.clone());
    assert_eq!(error.field(), "password");
    assert_eq!(error.to_string(), missing.to_string());
}
