//! Form controller: owns field values, per-field errors, and the in-flight
//! flag that backs the double-submit guard. Pages hold one controller inside
//! a reactive signal and feed it input/blur/submit events; the controller
//! decides whether a submission may leave the page.

use crate::features::forms::schema::{FieldKind, FormSchema};
use serde_json::Value;
use std::collections::BTreeMap;

/// JSON object sent to the Submission Client, keyed by schema field names.
pub type SubmitPayload = serde_json::Map<String, Value>;

/// Outcome of a submit attempt, decided before any network activity.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitGate {
    /// Validation passed and no request is in flight; the payload may be
    /// submitted. The controller is now marked in flight.
    Ready(SubmitPayload),
    /// At least one field failed validation; errors are set, nothing is sent.
    Invalid,
    /// A previous submission has not completed yet; nothing is sent.
    InFlight,
}

/// Read-only snapshot of one field for input binding.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldBinding {
    pub value: String,
    pub error: Option<String>,
}

pub struct FormController {
    schema: FormSchema,
    values: BTreeMap<&'static str, String>,
    errors: BTreeMap<&'static str, String>,
    in_flight: bool,
}

impl FormController {
    pub fn new(schema: FormSchema) -> Self {
        let values = schema
            .fields
            .iter()
            .map(|field| (field.name, String::new()))
            .collect();
        Self {
            schema,
            values,
            errors: BTreeMap::new(),
            in_flight: false,
        }
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    /// Input kind declared for the field; defaults to text for unknown names.
    pub fn kind(&self, name: &str) -> FieldKind {
        self.schema
            .field(name)
            .map(|field| field.kind)
            .unwrap_or(FieldKind::Text)
    }

    /// Snapshot of a field's current value and error for rendering.
    pub fn bind(&self, name: &str) -> FieldBinding {
        FieldBinding {
            value: self.value(name).to_string(),
            error: self.error(name).map(str::to_string),
        }
    }

    /// Records a keystroke. A field that already shows an error is
    /// revalidated immediately so the message clears once the input is fixed;
    /// otherwise validation waits for blur or submit.
    pub fn input(&mut self, name: &'static str, value: String) {
        if self.values.contains_key(name) {
            self.values.insert(name, value);
            if self.errors.contains_key(name) {
                self.revalidate_field(name);
            }
        }
    }

    /// Validates a single field when focus leaves it.
    pub fn blur(&mut self, name: &'static str) {
        if self.values.contains_key(name) {
            self.revalidate_field(name);
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Gates a submit attempt: refuses while a request is in flight, runs the
    /// validator, and only hands out a payload when every field is valid.
    pub fn try_begin_submit(&mut self) -> SubmitGate {
        if self.in_flight {
            return SubmitGate::InFlight;
        }

        self.errors = self.schema.validate(&self.values);
        if !self.errors.is_empty() {
            return SubmitGate::Invalid;
        }

        self.in_flight = true;
        SubmitGate::Ready(self.payload())
    }

    /// Re-arms the form after the in-flight request completed, in success or
    /// failure. The user may always retry.
    pub fn finish_submit(&mut self) {
        self.in_flight = false;
    }

    fn payload(&self) -> SubmitPayload {
        self.schema
            .fields
            .iter()
            .filter(|field| field.in_payload)
            .map(|field| {
                (
                    field.name.to_string(),
                    Value::String(self.value(field.name).to_string()),
                )
            })
            .collect()
    }

    fn revalidate_field(&mut self, name: &'static str) {
        let all = self.schema.validate(&self.values);
        match all.get(name) {
            Some(message) => {
                self.errors.insert(name, message.clone());
            }
            None => {
                self.errors.remove(name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::forms::schema::{FieldDef, FieldKind, FormSchema};

    fn register_schema() -> FormSchema {
        FormSchema::builder()
            .field(
                FieldDef::new("name", FieldKind::Text)
                    .required("Name is required")
                    .min_length(6, "Name must be at least 6 characters long"),
            )
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
            .field(
                FieldDef::new("confirmPassword", FieldKind::Password)
                    .required("Confirm password is required")
                    .min_length(6, "Confirm password must be at least 6 characters long")
                    .equals("password", "Passwords do not match"),
            )
            .build()
    }

    fn filled_register_form() -> FormController {
        let mut form = FormController::new(register_schema());
        form.input("name", "Alice1".to_string());
        form.input("email", "a@b.co".to_string());
        form.input("password", "secret1".to_string());
        form.input("confirmPassword", "secret1".to_string());
        form
    }

    #[test]
    fn valid_form_hands_out_payload_once() {
        let mut form = filled_register_form();

        let gate = form.try_begin_submit();
        let SubmitGate::Ready(payload) = gate else {
            panic!("expected Ready, got {gate:?}");
        };
        assert_eq!(payload["name"], "Alice1");
        assert_eq!(payload["email"], "a@b.co");
        assert_eq!(payload["password"], "secret1");
        assert_eq!(payload["confirmPassword"], "secret1");
        assert!(form.is_in_flight());

        // Double-submit guard: a second attempt while in flight is refused.
        assert_eq!(form.try_begin_submit(), SubmitGate::InFlight);
    }

    #[test]
    fn finish_submit_rearms_the_form() {
        let mut form = filled_register_form();
        assert!(matches!(form.try_begin_submit(), SubmitGate::Ready(_)));
        form.finish_submit();
        assert!(!form.is_in_flight());
        assert!(matches!(form.try_begin_submit(), SubmitGate::Ready(_)));
    }

    #[test]
    fn invalid_form_never_hands_out_a_payload() {
        let mut form = FormController::new(register_schema());
        form.input("name", "Alice1".to_string());
        form.input("email", "a@b.co".to_string());
        form.input("password", "secret1".to_string());
        form.input("confirmPassword", "secret2".to_string());

        assert_eq!(form.try_begin_submit(), SubmitGate::Invalid);
        assert_eq!(form.error("confirmPassword"), Some("Passwords do not match"));
        assert!(!form.is_in_flight());

        // The gate stays closed until the mismatch is fixed.
        assert_eq!(form.try_begin_submit(), SubmitGate::Invalid);
    }

    #[test]
    fn blur_validates_only_the_left_field() {
        let mut form = FormController::new(register_schema());
        form.input("name", "Al".to_string());
        form.blur("name");

        assert_eq!(
            form.error("name"),
            Some("Name must be at least 6 characters long")
        );
        assert_eq!(form.error("email"), None);
        assert_eq!(form.error("password"), None);
    }

    #[test]
    fn typing_clears_an_existing_error_once_fixed() {
        let mut form = FormController::new(register_schema());
        form.input("email", "broken".to_string());
        form.blur("email");
        assert_eq!(form.error("email"), Some("Invalid email address"));

        // Still broken: the error is recomputed, not dropped.
        form.input("email", "broken@".to_string());
        assert_eq!(form.error("email"), Some("Invalid email address"));

        form.input("email", "a@b.co".to_string());
        assert_eq!(form.error("email"), None);
    }

    #[test]
    fn bind_snapshots_value_and_error() {
        let mut form = FormController::new(register_schema());
        form.input("password", "abc".to_string());
        form.blur("password");

        let binding = form.bind("password");
        assert_eq!(binding.value, "abc");
        assert_eq!(
            binding.error.as_deref(),
            Some("Password must be at least 6 characters long")
        );
    }

    #[test]
    fn payload_skips_excluded_fields() {
        let schema = FormSchema::builder()
            .field(FieldDef::new("password", FieldKind::Password).required("Required"))
            .field(
                FieldDef::new("confirm", FieldKind::Password)
                    .equals("password", "Passwords do not match")
                    .exclude_from_payload(),
            )
            .build();
        let mut form = FormController::new(schema);
        form.input("password", "secret1".to_string());
        form.input("confirm", "secret1".to_string());

        let SubmitGate::Ready(payload) = form.try_begin_submit() else {
            panic!("expected Ready");
        };
        assert!(payload.contains_key("password"));
        assert!(!payload.contains_key("confirm"));
    }

    #[test]
    fn unknown_field_names_are_ignored() {
        let mut form = FormController::new(register_schema());
        form.input("bogus", "value".to_string());
        form.blur("bogus");
        assert_eq!(form.value("bogus"), "");
        assert_eq!(form.error("bogus"), None);
        assert_eq!(form.kind("bogus"), FieldKind::Text);
    }
}
