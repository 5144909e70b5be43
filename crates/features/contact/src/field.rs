use crate::rules::{is_valid_email, is_valid_phone};
use dpi_kernel::domain::constants::CLASS_ERROR;
use dpi_kernel::domain::dom::{ElementId, Node, Patch, PatchSink, Scope};

/// Wrapper class whose `error` state styles a field and its label.
pub const FORM_GROUP: &str = "form-group";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Textarea,
    Checkbox,
}

/// Validation rule for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: ElementId,
    pub kind: FieldKind,
    /// Message when a required field is empty (or a checkbox unchecked). `None` means optional.
    pub required: Option<&'static str>,
    /// Message when the value does not match the kind's format.
    pub invalid: Option<&'static str>,
}

impl FieldSpec {
    pub fn new(id: impl Into<ElementId>, kind: FieldKind) -> Self {
        Self { id: id.into(), kind, required: None, invalid: None }
    }

    #[must_use]
    pub const fn required(mut self, message: &'static str) -> Self {
        self.required = Some(message);
        self
    }

    #[must_use]
    pub const fn invalid(mut self, message: &'static str) -> Self {
        self.invalid = Some(message);
        self
    }

    /// Element showing this field's message.
    #[must_use]
    pub fn error_slot(&self) -> ElementId {
        ElementId::new(format!("{}Error", self.id))
    }

    /// The failure message for `node`, if any.
    #[must_use]
    pub fn check(&self, node: &Node) -> Option<&'static str> {
        if self.kind == FieldKind::Checkbox {
            return if node.checked { None } else { self.required };
        }

        let value = node.value.trim();
        if value.is_empty() {
            return self.required;
        }

        let well_formed = match self.kind {
            FieldKind::Email => is_valid_email(value),
            FieldKind::Tel => is_valid_phone(value),
            FieldKind::Text | FieldKind::Textarea | FieldKind::Checkbox => true,
        };
        if well_formed { None } else { self.invalid }
    }
}

/// The contact page fields with their messages.
#[must_use]
pub fn contact_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("name", FieldKind::Text).required("Please enter your name"),
        FieldSpec::new("email", FieldKind::Email)
            .required("Please enter your email address")
            .invalid("Please enter a valid email address"),
        FieldSpec::new("phone", FieldKind::Tel).invalid("Please enter a valid phone number"),
        FieldSpec::new("subject", FieldKind::Text).required("Please enter a subject"),
        FieldSpec::new("message", FieldKind::Textarea).required("Please enter your message"),
        FieldSpec::new("privacy", FieldKind::Checkbox).required("You must accept the privacy policy"),
    ]
}

/// Validates one field and renders its error state. A field missing from the page passes.
pub fn validate_field(spec: &FieldSpec, scope: &Scope, sink: &mut impl PatchSink) -> bool {
    let Some(node) = scope.get(&spec.id) else { return true };
    let failure = spec.check(node);

    let slot = spec.error_slot();
    if scope.contains(&slot) {
        sink.emit(Patch::text(&slot, failure.unwrap_or_default()));
        sink.emit(Patch::style(&slot, "display", if failure.is_some() { "block" } else { "none" }));
    }
    if let Some(group) = scope.closest_with_class(&spec.id, FORM_GROUP) {
        sink.emit(Patch::class(&group.id, CLASS_ERROR, failure.is_some()));
    }

    failure.is_none()
}
