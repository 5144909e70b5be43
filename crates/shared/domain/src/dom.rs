//! Headless document snapshot.
//!
//! Behaviors never touch a live DOM. They read a [`Scope`] (the elements of one page, in
//! document order) and answer with [`Patch`]es. A browser host applies the patches to the real
//! document; tests and server-side previews apply them to the [`Scope`] itself.

use crate::geometry::Rect;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Element `id` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One element of the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Node {
    pub id: ElementId,
    pub tag: String,
    pub parent: Option<ElementId>,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    pub styles: BTreeMap<String, String>,
    pub text: String,
    /// Current value of form controls.
    pub value: String,
    pub checked: bool,
    pub rect: Rect,
    /// Natural content height (`scrollHeight`).
    pub scroll_height: f64,
}

impl Node {
    pub fn new(id: impl Into<ElementId>, tag: impl Into<String>) -> Self {
        Self { id: id.into(), tag: tag.into(), ..Self::default() }
    }

    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
        self
    }

    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    #[must_use]
    pub const fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    #[must_use]
    pub fn child_of(mut self, parent: impl Into<ElementId>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    #[must_use]
    pub const fn rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    #[must_use]
    pub const fn scroll_height(mut self, height: f64) -> Self {
        self.scroll_height = height;
        self
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }
}

/// Document-level state that does not belong to a single element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentState {
    pub scroll_top: f64,
    pub body_scroll_locked: bool,
    pub focused: Option<ElementId>,
    /// `location.pathname` of the page.
    pub location_path: String,
    pub location_hash: Option<String>,
    /// Calendar year on the host clock, for copyright lines.
    pub year: Option<i32>,
}

/// Geometry the host measured again after a reflow.
///
/// Fields left out keep the value already recorded in the scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutUpdate {
    pub target: ElementId,
    pub rect: Option<Rect>,
    pub scroll_height: Option<f64>,
}

impl LayoutUpdate {
    pub fn new(target: impl Into<ElementId>) -> Self {
        Self { target: target.into(), ..Self::default() }
    }

    #[must_use]
    pub const fn rect(mut self, rect: Rect) -> Self {
        self.rect = Some(rect);
        self
    }

    #[must_use]
    pub const fn scroll_height(mut self, height: f64) -> Self {
        self.scroll_height = Some(height);
        self
    }
}

/// The elements one page exposes to its behaviors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scope {
    nodes: Vec<Node>,
    pub document: DocumentState,
}

impl Scope {
    pub fn new(nodes: impl IntoIterator<Item = Node>) -> Self {
        Self { nodes: nodes.into_iter().collect(), document: DocumentState::default() }
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[must_use]
    pub fn get(&self, id: &ElementId) -> Option<&Node> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    pub fn get_mut(&mut self, id: &ElementId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| &n.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &ElementId) -> bool {
        self.get(id).is_some()
    }

    pub fn by_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes.iter().filter(move |n| n.has_class(class))
    }

    pub fn with_attribute<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes.iter().filter(move |n| n.attributes.contains_key(name))
    }

    pub fn children<'a>(&'a self, parent: &'a ElementId) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes.iter().filter(move |n| n.parent.as_ref() == Some(parent))
    }

    /// Next element with the same parent, in document order.
    #[must_use]
    pub fn next_sibling(&self, id: &ElementId) -> Option<&Node> {
        let position = self.nodes.iter().position(|n| &n.id == id)?;
        let parent = self.nodes[position].parent.as_ref();
        self.nodes[position + 1..].iter().find(|n| n.parent.as_ref() == parent)
    }

    /// Parent chain from the closest ancestor outwards.
    #[must_use]
    pub fn ancestors(&self, id: &ElementId) -> Vec<&Node> {
        let mut chain = Vec::new();
        let mut cursor = self.get(id).and_then(|n| n.parent.as_ref());
        while let Some(parent) = cursor {
            // Malformed snapshots may contain parent cycles.
            if chain.len() >= self.nodes.len() {
                break;
            }
            let Some(node) = self.get(parent) else { break };
            chain.push(node);
            cursor = node.parent.as_ref();
        }
        chain
    }

    /// The element itself or its closest ancestor carrying `class` (`Element.closest`).
    #[must_use]
    pub fn closest_with_class(&self, id: &ElementId, class: &str) -> Option<&Node> {
        let node = self.get(id)?;
        if node.has_class(class) {
            return Some(node);
        }
        self.ancestors(id).into_iter().find(|n| n.has_class(class))
    }

    /// Whether `id` is `ancestor` or nested inside it.
    #[must_use]
    pub fn is_within(&self, id: &ElementId, ancestor: &ElementId) -> bool {
        id == ancestor || self.ancestors(id).iter().any(|n| &n.id == ancestor)
    }

    pub fn descendants_with_class<'a>(
        &'a self,
        root: &'a ElementId,
        class: &'a str,
    ) -> impl Iterator<Item = &'a Node> + 'a {
        self.by_class(class).filter(move |n| &n.id != root && self.is_within(&n.id, root))
    }

    /// Records re-measured geometry. Returns `false` when the element is unknown.
    pub fn reflow(&mut self, update: &LayoutUpdate) -> bool {
        let Some(node) = self.get_mut(&update.target) else { return false };
        if let Some(rect) = update.rect {
            node.rect = rect;
        }
        if let Some(height) = update.scroll_height {
            node.scroll_height = height;
        }
        true
    }

    /// Applies one patch. Patches aimed at missing elements are ignored.
    pub fn apply(&mut self, patch: &Patch) {
        match patch {
            Patch::ScrollTo { top } => self.document.scroll_top = top.max(0.0),
            Patch::LockBodyScroll { locked } => self.document.body_scroll_locked = *locked,
            Patch::PushHistory { hash } => self.document.location_hash = Some(hash.clone()),
            Patch::Focus { target } => {
                if self.contains(target) {
                    self.document.focused = Some(target.clone());
                }
            },
            Patch::ScrollIntoView { target } => {
                if let Some(top) = self.get(target).map(|n| n.rect.top) {
                    self.document.scroll_top = top.max(0.0);
                }
            },
            _ => {
                let Some(node) = patch.target().and_then(|t| self.get_mut(t)) else { return };
                patch.apply_to(node);
            },
        }
    }
}

/// A render operation emitted by a behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Patch {
    SetAttribute { target: ElementId, name: String, value: String },
    RemoveAttribute { target: ElementId, name: String },
    /// An empty `value` clears the inline property.
    SetStyle { target: ElementId, property: String, value: String },
    SetClass { target: ElementId, class: String, enabled: bool },
    SetText { target: ElementId, text: String },
    SetValue { target: ElementId, value: String },
    SetChecked { target: ElementId, checked: bool },
    Focus { target: ElementId },
    ScrollIntoView { target: ElementId },
    ScrollTo { top: f64 },
    LockBodyScroll { locked: bool },
    PushHistory { hash: String },
}

impl Patch {
    pub fn attribute(target: &ElementId, name: &str, value: impl Into<String>) -> Self {
        Self::SetAttribute { target: target.clone(), name: name.to_owned(), value: value.into() }
    }

    pub fn style(target: &ElementId, property: &str, value: impl Into<String>) -> Self {
        Self::SetStyle { target: target.clone(), property: property.to_owned(), value: value.into() }
    }

    #[must_use]
    pub fn class(target: &ElementId, class: &str, enabled: bool) -> Self {
        Self::SetClass { target: target.clone(), class: class.to_owned(), enabled }
    }

    pub fn text(target: &ElementId, text: impl Into<String>) -> Self {
        Self::SetText { target: target.clone(), text: text.into() }
    }

    /// The element this patch mutates, if it is element-scoped.
    #[must_use]
    pub const fn target(&self) -> Option<&ElementId> {
        match self {
            Self::SetAttribute { target, .. }
            | Self::RemoveAttribute { target, .. }
            | Self::SetStyle { target, .. }
            | Self::SetClass { target, .. }
            | Self::SetText { target, .. }
            | Self::SetValue { target, .. }
            | Self::SetChecked { target, .. }
            | Self::Focus { target }
            | Self::ScrollIntoView { target } => Some(target),
            Self::ScrollTo { .. } | Self::LockBodyScroll { .. } | Self::PushHistory { .. } => None,
        }
    }

    fn apply_to(&self, node: &mut Node) {
        match self {
            Self::SetAttribute { name, value, .. } => {
                node.attributes.insert(name.clone(), value.clone());
            },
            Self::RemoveAttribute { name, .. } => {
                node.attributes.remove(name);
            },
            Self::SetStyle { property, value, .. } if value.is_empty() => {
                node.styles.remove(property);
            },
            Self::SetStyle { property, value, .. } => {
                node.styles.insert(property.clone(), value.clone());
            },
            Self::SetClass { class, enabled: true, .. } => {
                if !node.has_class(class) {
                    node.classes.push(class.clone());
                }
            },
            Self::SetClass { class, enabled: false, .. } => node.classes.retain(|c| c != class),
            Self::SetText { text, .. } => node.text.clone_from(text),
            Self::SetValue { value, .. } => node.value.clone_from(value),
            Self::SetChecked { checked, .. } => node.checked = *checked,
            Self::Focus { .. }
            | Self::ScrollIntoView { .. }
            | Self::ScrollTo { .. }
            | Self::LockBodyScroll { .. }
            | Self::PushHistory { .. } => {},
        }
    }
}

/// Destination for patches: a buffer for a browser host, or a [`Scope`] applying them in place.
pub trait PatchSink {
    fn emit(&mut self, patch: Patch);
}

impl PatchSink for Vec<Patch> {
    fn emit(&mut self, patch: Patch) {
        self.push(patch);
    }
}

impl PatchSink for Scope {
    fn emit(&mut self, patch: Patch) {
        self.apply(&patch);
    }
}
