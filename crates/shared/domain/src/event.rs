use crate::dom::{ElementId, LayoutUpdate};
use crate::geometry::Viewport;
use serde::{Deserialize, Serialize};

/// Keys behaviors react to. Everything else collapses into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Enter,
    Space,
    Escape,
    Tab,
    Other,
}

impl Key {
    /// Maps a `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            "Escape" | "Esc" => Self::Escape,
            "Tab" => Self::Tab,
            _ => Self::Other,
        }
    }

    /// Keys that activate a focused button.
    #[must_use]
    pub const fn activates(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

/// Something the host observed and forwards to every mounted behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Event {
    /// Document finished loading; behaviors mount their initial state.
    Ready,
    Click { target: ElementId },
    Key { target: Option<ElementId>, key: Key },
    /// `checked` is set for checkboxes and radios, whose `value` does not track their state.
    Input {
        target: ElementId,
        value: String,
        #[serde(default)]
        checked: Option<bool>,
    },
    Blur { target: ElementId },
    /// A form is about to submit (button click or Enter in a field).
    Submit { target: ElementId },
    Scroll { top: f64 },
    /// Window resized. `layout` carries elements the host measured again after the reflow.
    Resize {
        viewport: Viewport,
        #[serde(default)]
        layout: Vec<LayoutUpdate>,
    },
    /// IntersectionObserver callback for one observed element.
    Intersection { target: ElementId, ratio: f64 },
    /// Animation frame or timer wake-up; behaviors poll their schedules.
    Tick,
}
