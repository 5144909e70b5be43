use crate::error::{ShowcaseError, ShowcaseErrorExt};
use dpi_kernel::domain::constants::DATA_ROTATE;
use dpi_kernel::domain::dom::{ElementId, Patch, Scope};
use dpi_kernel::domain::event::Event;
use dpi_kernel::domain::registry::{Behavior, Context};
use dpi_kernel::timing::Schedule;
use std::time::Duration;
use tracing::{debug, warn};

pub const TEXT_ROTATOR: &str = "text-rotator";
pub const ROTATING_TEXT: &str = "rotating-text";

/// Delay after page load before the rotation interval starts.
pub const LEAD_IN: Duration = Duration::from_secs(1);
pub const ROTATE_EVERY: Duration = Duration::from_secs(3);
/// Fade-out length before the word is swapped.
pub const SWAP_AFTER: Duration = Duration::from_millis(500);
/// Gap between the swap and the fade-in.
pub const FADE_BACK_AFTER: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Swap,
    FadeIn,
}

/// Hero headline cycling through the words listed in `data-rotate`.
#[derive(Debug)]
pub struct TextRotator {
    text: ElementId,
    words: Vec<String>,
    index: usize,
    next_rotation: Option<Duration>,
    steps: Schedule<Step>,
}

impl TextRotator {
    pub fn new(text: impl Into<ElementId>, words: Vec<String>) -> Self {
        Self { text: text.into(), words, index: 0, next_rotation: None, steps: Schedule::new() }
    }

    /// Reads the first `.text-rotator`. `Ok(None)` when the page has none or lists no words.
    pub fn from_markup(scope: &Scope) -> Result<Option<Self>, ShowcaseError> {
        let Some(rotator) = scope.by_class(TEXT_ROTATOR).next() else { return Ok(None) };
        let raw = rotator.attribute(DATA_ROTATE).unwrap_or_default();
        let words: Vec<String> = serde_json::from_str(raw).context(DATA_ROTATE)?;
        if words.is_empty() {
            return Ok(None);
        }

        let text = scope.descendants_with_class(&rotator.id, ROTATING_TEXT).next().ok_or_else(|| {
            ShowcaseError::MissingElement { message: ROTATING_TEXT.into(), context: Some(rotator.id.to_string().into()) }
        })?;
        Ok(Some(Self::new(text.id.clone(), words)))
    }

    /// Like [`Self::from_markup`], logging and skipping broken markup.
    #[must_use]
    pub fn mount(scope: &Scope) -> Option<Self> {
        match Self::from_markup(scope) {
            Ok(rotator) => {
                if let Some(rotator) = &rotator {
                    debug!(words = rotator.words.len(), "Text rotator mounted");
                }
                rotator
            },
            Err(err) => {
                warn!(%err, "Text rotator not mounted");
                None
            },
        }
    }

    /// The word currently shown.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.words[self.index]
    }

    fn rotate(&mut self, at: Duration) -> Patch {
        self.steps.at(at + SWAP_AFTER, Step::Swap);
        self.steps.at(at + SWAP_AFTER + FADE_BACK_AFTER, Step::FadeIn);
        Patch::style(&self.text, "opacity", "0")
    }

    fn render(&mut self, step: Step) -> Patch {
        match step {
            Step::Swap => {
                self.index = (self.index + 1) % self.words.len();
                Patch::text(&self.text, self.words[self.index].as_str())
            },
            Step::FadeIn => Patch::style(&self.text, "opacity", "1"),
        }
    }
}

impl Behavior for TextRotator {
    fn name(&self) -> &'static str {
        "text-rotator"
    }

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>) {
        let now = cx.now();
        match (event, self.next_rotation) {
            (Event::Ready, None) => self.next_rotation = Some(now + LEAD_IN + ROTATE_EVERY),
            (_, Some(due)) if now >= due => {
                let fade_out = self.rotate(due);
                cx.emit(fade_out);
                self.next_rotation = Some(due + ROTATE_EVERY);
            },
            _ => {},
        }

        for step in self.steps.drain_due(now) {
            let patch = self.render(step);
            cx.emit(patch);
        }
    }
}
