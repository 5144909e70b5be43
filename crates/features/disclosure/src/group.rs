use crate::error::DisclosureError;
use dpi_kernel::domain::constants::{ARIA_CONTROLS, ARIA_EXPANDED, DATA_ACCORDION};
use dpi_kernel::domain::dom::{ElementId, Node, Patch, Scope};
use dpi_kernel::domain::event::Event;
use dpi_kernel::domain::registry::{Behavior, Context};
use dpi_kernel::timing::Debouncer;
use std::time::Duration;
use tracing::{debug, warn};

/// Quiet period before panel heights are recomputed after a resize.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

/// How many panels of one group may be open at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Expanding one trigger collapses its siblings (FAQ).
    Single,
    /// Every trigger toggles on its own (project details accordion).
    Multiple,
}

impl Policy {
    /// `data-accordion="multiple"` on the trigger or an ancestor opts into [`Policy::Multiple`].
    #[must_use]
    pub fn for_trigger(scope: &Scope, trigger: &ElementId) -> Self {
        let marked = |node: &Node| node.attribute(DATA_ACCORDION) == Some("multiple");
        let own = scope.get(trigger).is_some_and(marked);
        if own || scope.ancestors(trigger).into_iter().any(marked) { Self::Multiple } else { Self::Single }
    }
}

/// One trigger/panel pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disclosure {
    pub trigger: ElementId,
    pub panel: ElementId,
    pub expanded: bool,
}

/// A set of disclosures sharing a policy.
#[derive(Debug, Clone)]
pub struct DisclosureGroup {
    name: &'static str,
    policy: Policy,
    items: Vec<Disclosure>,
    resize: Debouncer,
}

impl DisclosureGroup {
    /// Builds the group from `(trigger, panel, marker)` triples, where `marker` is the parsed
    /// `aria-expanded` value if the trigger carried one.
    ///
    /// Without any marker the first trigger starts expanded. Under [`Policy::Single`] only the
    /// first `true` marker is honored.
    pub fn new(
        name: &'static str,
        policy: Policy,
        entries: impl IntoIterator<Item = (ElementId, ElementId, Option<bool>)>,
    ) -> Self {
        let entries: Vec<_> = entries.into_iter().collect();
        let any_marker = entries.iter().any(|(_, _, marker)| marker.is_some());

        let mut open_seen = false;
        let mut items = Vec::with_capacity(entries.len());
        for (index, (trigger, panel, marker)) in entries.into_iter().enumerate() {
            let wanted = if any_marker { marker.unwrap_or(false) } else { index == 0 };
            let expanded = wanted && (policy == Policy::Multiple || !open_seen);
            open_seen |= expanded;
            items.push(Disclosure { trigger, panel, expanded });
        }

        Self { name, policy, items, resize: Debouncer::new(RESIZE_DEBOUNCE) }
    }

    /// Mounts every element carrying `trigger_class`. Triggers without a panel are skipped;
    /// `None` when nothing is left.
    #[must_use]
    pub fn mount(scope: &Scope, name: &'static str, trigger_class: &str, policy: Policy) -> Option<Self> {
        Self::mount_where(scope, name, trigger_class, policy, |_| true)
    }

    /// Like [`Self::mount`], keeping only the triggers `accept` lets through.
    #[must_use]
    pub fn mount_where(
        scope: &Scope,
        name: &'static str,
        trigger_class: &str,
        policy: Policy,
        accept: impl Fn(&Node) -> bool,
    ) -> Option<Self> {
        let entries: Vec<_> = scope
            .by_class(trigger_class)
            .filter(|trigger| accept(trigger))
            .filter_map(|trigger| match panel_for(scope, &trigger.id) {
                Ok(panel) => {
                    let marker = trigger.attribute(ARIA_EXPANDED).map(|v| v == "true");
                    Some((trigger.id.clone(), panel, marker))
                },
                Err(err) => {
                    warn!(group = name, %err, "Skipping trigger");
                    None
                },
            })
            .collect();

        if entries.is_empty() {
            return None;
        }
        debug!(group = name, triggers = entries.len(), "Disclosure group mounted");
        Some(Self::new(name, policy, entries))
    }

    #[must_use]
    pub const fn policy(&self) -> Policy {
        self.policy
    }

    #[must_use]
    pub fn items(&self) -> &[Disclosure] {
        &self.items
    }

    #[must_use]
    pub fn is_expanded(&self, trigger: &ElementId) -> bool {
        self.items.iter().any(|d| &d.trigger == trigger && d.expanded)
    }

    pub fn expanded(&self) -> impl Iterator<Item = &ElementId> {
        self.items.iter().filter(|d| d.expanded).map(|d| &d.trigger)
    }

    /// Flips `trigger`. Expanding under [`Policy::Single`] collapses every sibling.
    pub fn toggle(&mut self, trigger: &ElementId) -> Result<(), DisclosureError> {
        let index = self.items.iter().position(|d| &d.trigger == trigger).ok_or_else(|| {
            DisclosureError::UnknownTrigger { message: trigger.to_string().into(), context: None }
        })?;

        let expand = !self.items[index].expanded;
        if expand && self.policy == Policy::Single {
            for item in &mut self.items {
                item.expanded = false;
            }
        }
        self.items[index].expanded = expand;
        Ok(())
    }

    /// Trigger and panel state for every item.
    #[must_use]
    pub fn render(&self, scope: &Scope) -> Vec<Patch> {
        self.items.iter().flat_map(|d| render_item(scope, d)).collect()
    }

    /// Heights of the open panels only.
    fn render_heights(&self, scope: &Scope) -> Vec<Patch> {
        self.items
            .iter()
            .filter(|d| d.expanded)
            .map(|d| Patch::style(&d.panel, "max-height", panel_height(scope, &d.panel)))
            .collect()
    }

    fn trigger_for(&self, scope: &Scope, target: &ElementId) -> Option<ElementId> {
        self.items.iter().find(|d| scope.is_within(target, &d.trigger)).map(|d| d.trigger.clone())
    }
}

impl Behavior for DisclosureGroup {
    fn name(&self) -> &'static str {
        self.name
    }

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>) {
        let scope = cx.scope();
        let target = match event {
            Event::Ready => {
                cx.extend(self.render(scope));
                return;
            },
            Event::Resize { .. } => {
                self.resize.schedule(cx.now());
                return;
            },
            Event::Tick => {
                if self.resize.poll(cx.now()) {
                    cx.extend(self.render_heights(scope));
                }
                return;
            },
            Event::Click { target } => target,
            Event::Key { target: Some(target), key } if key.activates() => target,
            _ => return,
        };

        let Some(trigger) = self.trigger_for(scope, target) else { return };
        if self.toggle(&trigger).is_ok() {
            cx.extend(self.render(scope));
        }
    }
}

/// `aria-controls` names the panel; otherwise the next sibling is the panel.
pub fn panel_for(scope: &Scope, trigger: &ElementId) -> Result<ElementId, DisclosureError> {
    let node = scope.get(trigger).ok_or_else(|| DisclosureError::UnknownTrigger {
        message: trigger.to_string().into(),
        context: None,
    })?;

    let panel = match node.attribute(ARIA_CONTROLS) {
        Some(id) => scope.get(&ElementId::from(id)),
        None => scope.next_sibling(trigger),
    };

    panel.map(|p| p.id.clone()).ok_or_else(|| DisclosureError::MissingPanel {
        message: trigger.to_string().into(),
        context: node.attribute(ARIA_CONTROLS).map(|id| format!("aria-controls=\"{id}\"").into()),
    })
}

fn panel_height(scope: &Scope, panel: &ElementId) -> String {
    let height = scope.get(panel).map_or(0.0, |n| n.scroll_height);
    format!("{height}px")
}

fn render_item(scope: &Scope, item: &Disclosure) -> [Patch; 2] {
    let height = if item.expanded { panel_height(scope, &item.panel) } else { "0".to_owned() };
    [
        Patch::attribute(&item.trigger, ARIA_EXPANDED, if item.expanded { "true" } else { "false" }),
        Patch::style(&item.panel, "max-height", height),
    ]
}
