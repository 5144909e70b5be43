use dpi_kernel::domain::constants::{CLASS_ACTIVE, DATA_CATEGORY, DATA_FILTER};
use dpi_kernel::domain::dom::{ElementId, Patch, Scope};
use dpi_kernel::domain::event::Event;
use dpi_kernel::domain::registry::{Behavior, Context};
use dpi_kernel::timing::Schedule;
use std::time::Duration;
use tracing::debug;

pub const FILTER_BUTTON: &str = "filter-btn";
pub const PORTFOLIO_ITEM: &str = "portfolio-item";
pub const PORTFOLIO_GRID: &str = "portfolio-grid";
/// Filter value matching every category.
pub const FILTER_ALL: &str = "all";

/// Fade-out length before a filtered item leaves the layout.
pub const HIDE_AFTER: Duration = Duration::from_millis(300);
/// Gap between `display: block` and the fade-in, so the transition runs.
pub const FADE_IN_AFTER: Duration = Duration::from_millis(10);
/// Delay between consecutive items on the first fade-in.
pub const MOUNT_STAGGER: Duration = Duration::from_millis(100);

const ITEM_TRANSITION: &str = "opacity 0.5s ease, transform 0.5s ease";
const OFFSET_HIDDEN: &str = "translateY(20px)";
const OFFSET_SHOWN: &str = "translateY(0)";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    FadeIn(ElementId),
    Hide(ElementId),
}

impl Step {
    fn item(&self) -> &ElementId {
        match self {
            Self::FadeIn(item) | Self::Hide(item) => item,
        }
    }

    fn render(&self) -> Vec<Patch> {
        match self {
            Self::FadeIn(item) => {
                vec![Patch::style(item, "opacity", "1"), Patch::style(item, "transform", OFFSET_SHOWN)]
            },
            Self::Hide(item) => vec![Patch::style(item, "display", "none")],
        }
    }
}

#[derive(Debug, Clone)]
struct Item {
    id: ElementId,
    category: String,
}

/// Category buttons over the portfolio grid.
#[derive(Debug)]
pub struct PortfolioFilter {
    buttons: Vec<(ElementId, String)>,
    items: Vec<Item>,
    grid: Option<ElementId>,
    active: Option<String>,
    steps: Schedule<Step>,
}

impl PortfolioFilter {
    /// Needs at least one `.portfolio-item`. Buttons without `data-filter` are ignored.
    #[must_use]
    pub fn mount(scope: &Scope) -> Option<Self> {
        let items: Vec<_> = scope
            .by_class(PORTFOLIO_ITEM)
            .map(|n| Item { id: n.id.clone(), category: n.attribute(DATA_CATEGORY).unwrap_or_default().to_owned() })
            .collect();
        if items.is_empty() {
            return None;
        }

        let buttons: Vec<_> = scope
            .by_class(FILTER_BUTTON)
            .filter_map(|n| Some((n.id.clone(), n.attribute(DATA_FILTER)?.to_owned())))
            .collect();
        let grid = scope.by_class(PORTFOLIO_GRID).next().map(|n| n.id.clone());
        debug!(items = items.len(), buttons = buttons.len(), "Portfolio filter mounted");

        Some(Self { buttons, items, grid, active: None, steps: Schedule::new() })
    }

    /// Last applied filter value.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Ids of the items `filter` keeps, in document order.
    pub fn matching<'a>(&'a self, filter: &'a str) -> impl Iterator<Item = &'a ElementId> + 'a {
        self.items.iter().filter(move |item| matches(filter, &item.category)).map(|item| &item.id)
    }

    /// Applies `filter` at `now` and returns the immediate patches. Fades are scheduled.
    pub fn apply(&mut self, button: &ElementId, filter: &str, now: Duration) -> Vec<Patch> {
        let mut patches: Vec<_> =
            self.buttons.iter().map(|(id, _)| Patch::class(id, CLASS_ACTIVE, id == button)).collect();

        for item in &self.items {
            // A newer filter wins over fades still pending from an older one.
            self.steps.cancel_where(|step| step.item() == &item.id);
            if matches(filter, &item.category) {
                patches.push(Patch::style(&item.id, "display", "block"));
                self.steps.at(now + FADE_IN_AFTER, Step::FadeIn(item.id.clone()));
            } else {
                patches.push(Patch::style(&item.id, "opacity", "0"));
                patches.push(Patch::style(&item.id, "transform", OFFSET_HIDDEN));
                self.steps.at(now + HIDE_AFTER, Step::Hide(item.id.clone()));
            }
        }

        if let Some(grid) = &self.grid {
            patches.push(Patch::ScrollIntoView { target: grid.clone() });
        }
        self.active = Some(filter.to_owned());
        debug!(filter, "Portfolio filtered");
        patches
    }

    fn stagger_in(&mut self, now: Duration) -> Vec<Patch> {
        let mut patches = Vec::with_capacity(self.items.len() * 3);
        for (index, item) in self.items.iter().enumerate() {
            patches.push(Patch::style(&item.id, "transition", ITEM_TRANSITION));
            patches.push(Patch::style(&item.id, "opacity", "0"));
            patches.push(Patch::style(&item.id, "transform", OFFSET_HIDDEN));
            self.steps.at(now + MOUNT_STAGGER * index as u32, Step::FadeIn(item.id.clone()));
        }
        patches
    }
}

impl Behavior for PortfolioFilter {
    fn name(&self) -> &'static str {
        "portfolio-filter"
    }

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>) {
        let scope = cx.scope();
        match event {
            Event::Ready => {
                let patches = self.stagger_in(cx.now());
                cx.extend(patches);
            },
            Event::Click { target } => {
                let pressed = self
                    .buttons
                    .iter()
                    .find(|(button, _)| scope.is_within(target, button))
                    .map(|(button, filter)| (button.clone(), filter.clone()));
                if let Some((button, filter)) = pressed {
                    let patches = self.apply(&button, &filter, cx.now());
                    cx.extend(patches);
                }
            },
            _ => {},
        }

        for step in self.steps.drain_due(cx.now()) {
            cx.extend(step.render());
        }
    }
}

fn matches(filter: &str, category: &str) -> bool {
    filter == FILTER_ALL || filter == category
}
