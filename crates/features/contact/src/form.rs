use crate::error::ContactError;
use crate::field::{FieldKind, FieldSpec, contact_fields, validate_field};
use crate::submitter::{ContactSubmission, Submitter};
use dpi_kernel::domain::constants::{CLASS_LOADING, DISABLED};
use dpi_kernel::domain::dom::{ElementId, Patch, PatchSink, Scope};
use dpi_kernel::domain::event::Event;
use dpi_kernel::domain::registry::{Behavior, Context};
use tracing::{debug, warn};

pub const CONTACT_FORM: &str = "contactForm";
pub const FORM_SUCCESS: &str = "formSuccess";
pub const FORM_ERROR: &str = "formError";
pub const SUBMIT_BUTTON: &str = "submit-btn";
pub const RESET_BUTTON: &str = "form-reset";

pub const FAILURE_MESSAGE: &str = "Sorry, your message could not be sent. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    /// Waiting on the submitter. Further submits are ignored.
    Submitting,
    /// Terminal until reset.
    Succeeded,
    /// The form is usable again and shows the failure message.
    Failed,
}

/// Contact form: per-field validation and a single submission per user action.
#[derive(Debug)]
pub struct ContactForm {
    form: ElementId,
    fields: Vec<FieldSpec>,
    submit: Option<ElementId>,
    state: FormState,
    errored: Vec<ElementId>,
    queued: Option<ContactSubmission>,
}

impl ContactForm {
    pub fn new(form: impl Into<ElementId>, fields: Vec<FieldSpec>) -> Self {
        Self {
            form: form.into(),
            fields,
            submit: None,
            state: FormState::Editing,
            errored: Vec::new(),
            queued: None,
        }
    }

    /// Mounts on `#contactForm` with the contact page fields.
    #[must_use]
    pub fn mount(scope: &Scope) -> Option<Self> {
        let form = ElementId::from(CONTACT_FORM);
        scope.get(&form)?;
        let submit = scope.descendants_with_class(&form, SUBMIT_BUTTON).next().map(|n| n.id.clone());
        debug!(submit = submit.is_some(), "Contact form mounted");
        Some(Self { submit, ..Self::new(form, contact_fields()) })
    }

    #[must_use]
    pub const fn state(&self) -> FormState {
        self.state
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Validates every field. On failure focuses and scrolls to the first bad one.
    pub fn validate_all(&mut self, scope: &Scope, sink: &mut impl PatchSink) -> bool {
        self.errored = self
            .fields
            .iter()
            .filter(|spec| !validate_field(spec, scope, sink))
            .map(|spec| spec.id.clone())
            .collect();

        if let Some(first) = self.errored.first() {
            sink.emit(Patch::ScrollIntoView { target: first.clone() });
            sink.emit(Patch::Focus { target: first.clone() });
            return false;
        }
        true
    }

    /// First half of a submission: validate and lock the form.
    ///
    /// Returns the payload to hand to a [`Submitter`], or `None` when the form is invalid or a
    /// submission is already in flight or done.
    pub fn begin_submit(&mut self, scope: &Scope, sink: &mut impl PatchSink) -> Option<ContactSubmission> {
        if matches!(self.state, FormState::Submitting | FormState::Succeeded) {
            debug!(state = ?self.state, "Ignoring submit");
            return None;
        }
        if scope.contains(&FORM_ERROR.into()) {
            sink.emit(Patch::style(&FORM_ERROR.into(), "display", "none"));
        }
        if !self.validate_all(scope, sink) {
            self.state = FormState::Editing;
            return None;
        }

        self.state = FormState::Submitting;
        self.render_busy(true, sink);
        Some(self.collect(scope))
    }

    /// Second half: apply the submitter's outcome.
    pub fn complete_submit(&mut self, outcome: Result<(), ContactError>, scope: &Scope, sink: &mut impl PatchSink) {
        if self.state != FormState::Submitting {
            return;
        }
        self.render_busy(false, sink);

        match outcome {
            Ok(()) => {
                self.state = FormState::Succeeded;
                sink.emit(Patch::style(&self.form, "display", "none"));
                self.clear_fields(scope, sink);
                let success = ElementId::from(FORM_SUCCESS);
                if scope.contains(&success) {
                    sink.emit(Patch::style(&success, "display", "block"));
                    sink.emit(Patch::ScrollIntoView { target: success });
                }
            },
            Err(err) => {
                warn!(%err, "Contact submission failed");
                self.state = FormState::Failed;
                let error = ElementId::from(FORM_ERROR);
                if scope.contains(&error) {
                    sink.emit(Patch::text(&error, FAILURE_MESSAGE));
                    sink.emit(Patch::style(&error, "display", "block"));
                }
            },
        }
    }

    /// Validates, awaits `submitter` once, and renders the outcome.
    pub async fn submit<S: Submitter>(
        &mut self,
        scope: &Scope,
        submitter: &S,
        sink: &mut (impl PatchSink + Send),
    ) -> FormState {
        if let Some(submission) = self.begin_submit(scope, sink) {
            let outcome = submitter.submit(&submission).await;
            self.complete_submit(outcome, scope, sink);
        }
        self.state
    }

    /// Payload prepared by a `Submit` event, waiting for a submitter.
    pub fn take_submission(&mut self) -> Option<ContactSubmission> {
        self.queued.take()
    }

    /// Shows an empty form again after a success.
    pub fn reset(&mut self, scope: &Scope, sink: &mut impl PatchSink) {
        self.state = FormState::Editing;
        self.errored.clear();
        self.queued = None;
        sink.emit(Patch::style(&self.form, "display", ""));
        for id in [FORM_SUCCESS, FORM_ERROR].map(ElementId::from) {
            if scope.contains(&id) {
                sink.emit(Patch::style(&id, "display", "none"));
            }
        }
        self.clear_fields(scope, sink);
    }

    fn render_busy(&self, busy: bool, sink: &mut impl PatchSink) {
        let Some(submit) = &self.submit else { return };
        if busy {
            sink.emit(Patch::attribute(submit, DISABLED, "true"));
        } else {
            sink.emit(Patch::RemoveAttribute { target: submit.clone(), name: DISABLED.to_owned() });
        }
        sink.emit(Patch::class(submit, CLASS_LOADING, busy));
    }

    fn clear_fields(&self, scope: &Scope, sink: &mut impl PatchSink) {
        for spec in self.fields.iter().filter(|spec| scope.contains(&spec.id)) {
            if spec.kind == FieldKind::Checkbox {
                sink.emit(Patch::SetChecked { target: spec.id.clone(), checked: false });
            } else {
                sink.emit(Patch::SetValue { target: spec.id.clone(), value: String::new() });
            }
        }
    }

    fn collect(&self, scope: &Scope) -> ContactSubmission {
        let value = |id: &str| scope.get(&id.into()).map(|n| n.value.trim().to_owned()).unwrap_or_default();
        ContactSubmission {
            name: value("name"),
            email: value("email"),
            phone: value("phone"),
            subject: value("subject"),
            message: value("message"),
            privacy: scope.get(&"privacy".into()).is_some_and(|n| n.checked),
        }
    }

    fn revalidate(&mut self, target: &ElementId, scope: &Scope, sink: &mut impl PatchSink) {
        let Some(spec) = self.fields.iter().find(|spec| &spec.id == target) else { return };
        if validate_field(spec, scope, sink) {
            self.errored.retain(|id| id != target);
        } else if !self.errored.contains(target) {
            self.errored.push(target.clone());
        }
    }
}

impl Behavior for ContactForm {
    fn name(&self) -> &'static str {
        "contact-form"
    }

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>) {
        let scope = cx.scope();
        match event {
            Event::Blur { target } => self.revalidate(target, scope, cx),
            Event::Input { target, .. } if self.errored.contains(target) => self.revalidate(target, scope, cx),
            Event::Submit { target } if scope.is_within(target, &self.form) => {
                if let Some(submission) = self.begin_submit(scope, cx) {
                    self.queued = Some(submission);
                }
            },
            Event::Click { target } => {
                let on_reset = scope.closest_with_class(target, RESET_BUTTON).is_some();
                if on_reset && self.state == FormState::Succeeded {
                    self.reset(scope, cx);
                } else if self.state == FormState::Failed && scope.is_within(target, &FORM_ERROR.into()) {
                    cx.emit(Patch::style(&FORM_ERROR.into(), "display", "none"));
                }
            },
            _ => {},
        }
    }
}
