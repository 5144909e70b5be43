use crate::error::{PageError, PageErrorExt};
use crate::features;
use dpi_contact::{ContactForm, FormState, Submitter};
use dpi_domain::capabilities::Capabilities;
use dpi_domain::dom::{Patch, Scope};
use dpi_domain::event::Event;
use dpi_domain::geometry::Viewport;
use dpi_domain::registry::{Behavior, BoxedBehavior, Context};
use std::time::Duration;
use tracing::{debug, trace};

type SliceInit = fn(&Scope, Capabilities) -> Vec<BoxedBehavior>;

/// One loaded page with its mounted behaviors.
///
/// The scope doubles as the document: every patch a behavior emits is applied to it before
/// being handed back to the host.
#[derive(Debug)]
pub struct Page {
    scope: Scope,
    capabilities: Capabilities,
    viewport: Viewport,
    behaviors: Vec<BoxedBehavior>,
    contact: Option<ContactForm>,
}

impl Page {
    /// Mounts every slice whose elements exist in `scope`.
    #[must_use]
    pub fn new(scope: Scope, capabilities: Capabilities) -> Self {
        let slices: [SliceInit; 4] = [
            features::navigation::init,
            features::disclosure::init,
            features::reveal::init,
            features::showcase::init,
        ];
        let behaviors: Vec<_> = slices.into_iter().flat_map(|init| init(&scope, capabilities)).collect();
        let contact = features::contact::init(&scope, capabilities);

        debug!(
            behaviors = behaviors.len(),
            contact = contact.is_some(),
            path = %scope.document.location_path,
            "Page mounted"
        );
        Self { scope, capabilities, viewport: Viewport::default(), behaviors, contact }
    }

    /// Builds a page from the host's JSON snapshot of the document.
    pub fn from_json(snapshot: &str, capabilities: Capabilities) -> Result<Self, PageError> {
        let scope: Scope = serde_json::from_str(snapshot).context("Parsing page snapshot")?;
        Ok(Self::new(scope, capabilities))
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub const fn scope(&self) -> &Scope {
        &self.scope
    }

    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Names of the mounted behaviors in dispatch order, the contact form last.
    #[must_use]
    pub fn behaviors(&self) -> Vec<&'static str> {
        let contact = self.contact.as_ref().map(|_| "contact-form");
        self.behaviors.iter().map(|b| b.name()).chain(contact).collect()
    }

    #[must_use]
    pub fn contact_state(&self) -> Option<FormState> {
        self.contact.as_ref().map(ContactForm::state)
    }

    /// Feeds one event to every behavior and returns the patches they emitted, already applied
    /// to the page scope.
    pub fn dispatch(&mut self, now: Duration, event: &Event) -> Vec<Patch> {
        self.observe(event);

        let mut patches = Vec::new();
        let mut cx = Context::new(now, self.viewport, self.capabilities, &self.scope, &mut patches);
        for behavior in &mut self.behaviors {
            behavior.handle(event, &mut cx);
        }
        if let Some(form) = &mut self.contact {
            form.handle(event, &mut cx);
        }

        trace!(?event, patches = patches.len(), "Event dispatched");
        self.apply(&patches);
        patches
    }

    /// Runs one complete contact submission through `submitter`.
    pub async fn submit_contact<S: Submitter>(&mut self, submitter: &S) -> Vec<Patch> {
        let mut patches = Vec::new();
        if let Some(form) = &mut self.contact {
            form.submit(&self.scope, submitter, &mut patches).await;
        }
        self.apply(&patches);
        patches
    }

    /// Delivers the submission prepared by a `Submit` event, if one is waiting.
    pub async fn flush_submissions<S: Submitter>(&mut self, submitter: &S) -> Vec<Patch> {
        let mut patches = Vec::new();
        let Some(form) = &mut self.contact else { return patches };
        if let Some(submission) = form.take_submission() {
            let outcome = submitter.submit(&submission).await;
            form.complete_submit(outcome, &self.scope, &mut patches);
        }
        self.apply(&patches);
        patches
    }

    /// Records what the host already changed before behaviors see the event.
    fn observe(&mut self, event: &Event) {
        match event {
            Event::Scroll { top } => self.scope.document.scroll_top = *top,
            Event::Resize { viewport, layout } => {
                self.viewport = *viewport;
                for update in layout {
                    if !self.scope.reflow(update) {
                        debug!(element = %update.target, "Layout update for unknown element");
                    }
                }
            },
            Event::Input { target, value, checked } => {
                if let Some(node) = self.scope.get_mut(target) {
                    match checked {
                        Some(checked) => node.checked = *checked,
                        None => node.value.clone_from(value),
                    }
                }
            },
            _ => {},
        }
    }

    fn apply(&mut self, patches: &[Patch]) {
        for patch in patches {
            self.scope.apply(patch);
        }
    }
}
