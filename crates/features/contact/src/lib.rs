//! Contact feature slice.
//!
//! Inline field validation and the submission state machine of the contact page. Delivery is
//! left to a [`Submitter`]; the bundled [`TracingSubmitter`] only logs the payload.
mod error;
mod field;
mod form;
mod rules;
mod submitter;

pub use crate::error::{ContactError, ContactErrorExt};
pub use crate::field::{FORM_GROUP, FieldKind, FieldSpec, contact_fields, validate_field};
pub use crate::form::{
    CONTACT_FORM, ContactForm, FAILURE_MESSAGE, FORM_ERROR, FORM_SUCCESS, FormState, RESET_BUTTON, SUBMIT_BUTTON,
};
pub use crate::rules::{MIN_PHONE_DIGITS, is_valid_email, is_valid_phone};
pub use crate::submitter::{ContactSubmission, Submitter, TracingSubmitter};
use dpi_kernel::domain::capabilities::Capabilities;
use dpi_kernel::domain::dom::Scope;

/// Mount the contact form if the page has one.
///
/// The form is returned typed rather than boxed: the page drives its submissions.
#[must_use]
pub fn init(scope: &Scope, _capabilities: Capabilities) -> Option<ContactForm> {
    ContactForm::mount(scope)
}
