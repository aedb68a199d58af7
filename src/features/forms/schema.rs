//! Declarative field constraints and the validator that applies them.
//! Constraints carry their own error messages so pages stay free of
//! validation wording. The validator is pure: same values, same errors.

use std::collections::BTreeMap;

/// Input kind for a declared field; maps directly to the HTML input type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
}

impl FieldKind {
    /// The `type` attribute value for the rendered input element.
    pub(crate) fn input_type(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Password => "password",
        }
    }
}

/// A single constraint with its user-facing violation message.
#[derive(Clone, Debug)]
pub enum Constraint {
    /// Value must be non-empty after trimming.
    Required { message: String },
    /// Value must be at least `min` characters long.
    MinLength { min: usize, message: String },
    /// Value must look like `local@domain` with a dot inside the domain.
    Email { message: String },
    /// Value must strictly equal the value of `other`. The error is
    /// attached to this field, not to `other`.
    Equals {
        other: &'static str,
        message: String,
    },
}

/// One field of a form: name, input kind, ordered constraints, and whether
/// the value is part of the submitted payload.
#[derive(Clone, Debug)]
pub struct FieldDef {
    pub(crate) name: &'static str,
    pub(crate) kind: FieldKind,
    pub(crate) constraints: Vec<Constraint>,
    pub(crate) in_payload: bool,
}

impl FieldDef {
    pub fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            constraints: Vec::new(),
            in_payload: true,
        }
    }

    pub fn required(mut self, message: &str) -> Self {
        self.constraints.push(Constraint::Required {
            message: message.to_string(),
        });
        self
    }

    pub fn min_length(mut self, min: usize, message: &str) -> Self {
        self.constraints.push(Constraint::MinLength {
            min,
            message: message.to_string(),
        });
        self
    }

    pub fn email(mut self, message: &str) -> Self {
        self.constraints.push(Constraint::Email {
            message: message.to_string(),
        });
        self
    }

    pub fn equals(mut self, other: &'static str, message: &str) -> Self {
        self.constraints.push(Constraint::Equals {
            other,
            message: message.to_string(),
        });
        self
    }

    /// Keeps the field out of the submitted payload (confirm-only fields).
    pub fn exclude_from_payload(mut self) -> Self {
        self.in_payload = false;
        self
    }
}

/// Ordered set of field definitions for one form.
#[derive(Clone, Debug)]
pub struct FormSchema {
    pub(crate) fields: Vec<FieldDef>,
}

impl FormSchema {
    pub fn builder() -> FormSchemaBuilder {
        FormSchemaBuilder { fields: Vec::new() }
    }

    pub(crate) fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Validates `values` against every field. The returned map holds the
    /// first violated constraint per field, in declaration order; a missing
    /// entry means the field is valid.
    pub fn validate(
        &self,
        values: &BTreeMap<&'static str, String>,
    ) -> BTreeMap<&'static str, String> {
        let mut errors = BTreeMap::new();
        for field in &self.fields {
            let value = values.get(field.name).map(String::as_str).unwrap_or("");
            if let Some(message) = first_violation(field, value, values) {
                errors.insert(field.name, message);
            }
        }
        errors
    }
}

/// Builder enforcing schema invariants: unique field names and `Equals`
/// constraints that reference a declared field.
pub struct FormSchemaBuilder {
    fields: Vec<FieldDef>,
}

impl FormSchemaBuilder {
    pub fn field(mut self, field: FieldDef) -> Self {
        debug_assert!(
            !self.fields.iter().any(|existing| existing.name == field.name),
            "duplicate field name in schema: {}",
            field.name
        );
        self.fields.push(field);
        self
    }

    pub fn build(self) -> FormSchema {
        #[cfg(debug_assertions)]
        for field in &self.fields {
            for constraint in &field.constraints {
                if let Constraint::Equals { other, .. } = constraint {
                    debug_assert!(
                        self.fields.iter().any(|candidate| candidate.name == *other),
                        "equals constraint on {} references unknown field {other}",
                        field.name
                    );
                }
            }
        }
        FormSchema {
            fields: self.fields,
        }
    }
}

/// Returns the message of the first violated constraint, if any.
fn first_violation(
    field: &FieldDef,
    value: &str,
    values: &BTreeMap<&'static str, String>,
) -> Option<String> {
    for constraint in &field.constraints {
        match constraint {
            Constraint::Required { message } => {
                if value.trim().is_empty() {
                    return Some(message.clone());
                }
            }
            Constraint::MinLength { min, message } => {
                if value.chars().count() < *min {
                    return Some(message.clone());
                }
            }
            Constraint::Email { message } => {
                if !is_email(value) {
                    return Some(message.clone());
                }
            }
            Constraint::Equals { other, message } => {
                let other_value = values.get(*other).map(String::as_str).unwrap_or("");
                if value != other_value {
                    return Some(message.clone());
                }
            }
        }
    }
    None
}

/// Minimal email shape check: `local@domain` where the domain contains a dot
/// that is neither its first nor last character.
fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&'static str, &str)]) -> BTreeMap<&'static str, String> {
        pairs
            .iter()
            .map(|(name, value)| (*name, (*value).to_string()))
            .collect()
    }

    fn login_schema() -> FormSchema {
        FormSchema::builder()
            .field(
                FieldDef::new("email", FieldKind::Email)
                    .required("Email is required")
                    .email("Invalid email address"),
            )
            .field(
                FieldDef::new("password", FieldKind::Password)
                    .required("Password is required")
                    .min_length(6, "Password must be at least 6 characters long"),
            )
            .build()
    }

    #[test]
    fn valid_state_yields_empty_error_map() {
        let schema = login_schema();
        let state = values(&[("email", "x@y.com"), ("password", "123456")]);
        assert!(schema.validate(&state).is_empty());
    }

    #[test]
    fn every_violation_is_reported() {
        let schema = login_schema();
        let state = values(&[("email", "not-an-email"), ("password", "abc")]);
        let errors = schema.validate(&state);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors["email"], "Invalid email address");
        assert_eq!(
            errors["password"],
            "Password must be at least 6 characters long"
        );
    }

    #[test]
    fn first_constraint_in_declaration_order_wins() {
        let schema = login_schema();
        // Empty password violates both Required and MinLength; Required is
        // declared first so its message is shown.
        let state = values(&[("email", "x@y.com"), ("password", "")]);
        let errors = schema.validate(&state);
        assert_eq!(errors["password"], "Password is required");
    }

    #[test]
    fn validation_is_idempotent() {
        let schema = login_schema();
        let state = values(&[("email", "bad"), ("password", "short")]);
        assert_eq!(schema.validate(&state), schema.validate(&state));
    }

    #[test]
    fn email_shapes() {
        assert!(is_email("a@b.co"));
        assert!(is_email("first.last@sub.domain.org"));
        assert!(!is_email(""));
        assert!(!is_email("ab.co"));
        assert!(!is_email("a@b"));
        assert!(!is_email("@b.co"));
        assert!(!is_email("a@"));
        assert!(!is_email("a@.co"));
        assert!(!is_email("a@co."));
        assert!(!is_email("a@b@c.co"));
        assert!(!is_email("a b@c.co"));
    }

    #[test]
    fn min_length_counts_characters_not_bytes() {
        let schema = FormSchema::builder()
            .field(FieldDef::new("name", FieldKind::Text).min_length(4, "Too short"))
            .build();
        let state = values(&[("name", "åäöü")]);
        assert!(schema.validate(&state).is_empty());
    }

    #[test]
    fn equality_error_attaches_to_confirm_field() {
        let schema = FormSchema::builder()
            .field(FieldDef::new("password", FieldKind::Password))
            .field(
                FieldDef::new("confirmPassword", FieldKind::Password)
                    .equals("password", "Passwords do not match"),
            )
            .build();

        let mismatched = values(&[("password", "secret1"), ("confirmPassword", "secret2")]);
        let errors = schema.validate(&mismatched);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["confirmPassword"], "Passwords do not match");

        let matched = values(&[("password", "secret1"), ("confirmPassword", "secret1")]);
        assert!(schema.validate(&matched).is_empty());
    }

    #[test]
    fn empty_equals_empty_is_not_a_mismatch() {
        let schema = FormSchema::builder()
            .field(FieldDef::new("password", FieldKind::Password))
            .field(
                FieldDef::new("confirmPassword", FieldKind::Password)
                    .equals("password", "Passwords do not match"),
            )
            .build();
        let state = values(&[("password", ""), ("confirmPassword", "")]);
        assert!(schema.validate(&state).is_empty());
    }

    #[test]
    fn required_fires_before_equality_on_empty_confirm() {
        let schema = FormSchema::builder()
            .field(FieldDef::new("password", FieldKind::Password))
            .field(
                FieldDef::new("confirmPassword", FieldKind::Password)
                    .required("Confirm password is required")
                    .equals("password", "Passwords do not match"),
            )
            .build();
        let state = values(&[("password", "secret1"), ("confirmPassword", "")]);
        let errors = schema.validate(&state);
        assert_eq!(errors["confirmPassword"], "Confirm password is required");
    }
}
