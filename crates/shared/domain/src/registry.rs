//! Behavior contract.
//! Every interactive widget on a page is a [`Behavior`] mounted against the page [`Scope`].

use crate::capabilities::Capabilities;
use crate::dom::{Patch, PatchSink, Scope};
use crate::event::Event;
use crate::geometry::Viewport;
use std::fmt::Debug;
use std::time::Duration;

/// What a behavior sees while handling one event.
#[derive(Debug)]
pub struct Context<'a> {
    now: Duration,
    viewport: Viewport,
    capabilities: Capabilities,
    scope: &'a Scope,
    patches: &'a mut Vec<Patch>,
}

impl<'a> Context<'a> {
    pub fn new(
        now: Duration,
        viewport: Viewport,
        capabilities: Capabilities,
        scope: &'a Scope,
        patches: &'a mut Vec<Patch>,
    ) -> Self {
        Self { now, viewport, capabilities, scope, patches }
    }

    /// Time since page load.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    #[must_use]
    pub const fn scope(&self) -> &'a Scope {
        self.scope
    }

    #[must_use]
    pub const fn scroll_top(&self) -> f64 {
        self.scope.document.scroll_top
    }

    pub fn emit(&mut self, patch: Patch) {
        self.patches.push(patch);
    }

    pub fn extend(&mut self, patches: impl IntoIterator<Item = Patch>) {
        self.patches.extend(patches);
    }
}

impl PatchSink for Context<'_> {
    fn emit(&mut self, patch: Patch) {
        self.patches.push(patch);
    }
}

/// An interactive widget driven purely by events.
pub trait Behavior: Debug + Send {
    /// Stable label used in logs.
    fn name(&self) -> &'static str;

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>);
}

/// A mounted behavior as the page owns it.
pub type BoxedBehavior = Box<dyn Behavior>;
