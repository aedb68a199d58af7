//! Schema-driven form engine shared by every auth page. A page declares a
//! `FormSchema` (field kinds, constraints, error messages) and drives a
//! `FormController` that owns values, per-field errors, and the submit gate.
//! Validation is pure and local; nothing here touches the network.
//!
//! Re-validation policy: fields validate on blur and on submit. While a field
//! already shows an error, every keystroke revalidates it so the message
//! clears as soon as the input is fixed.

pub(crate) mod controller;
pub(crate) mod schema;

pub(crate) use controller::{FormController, SubmitGate, SubmitPayload};
pub(crate) use schema::{FieldDef, FieldKind, FormSchema};
