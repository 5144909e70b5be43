use crate::visibility::observed_ratios;
use dpi_kernel::domain::constants::CLASS_AOS_ANIMATE;
use dpi_kernel::domain::dom::{ElementId, Patch, Scope};
use dpi_kernel::domain::event::Event;
use dpi_kernel::domain::registry::{Behavior, Context};
use dpi_kernel::timing::Schedule;
use std::time::Duration;
use tracing::debug;

pub const TIMELINE_PROGRESS: &str = "timeline-progress";
pub const TIMELINE_ITEM: &str = "timeline-item";
pub const TIMELINE_THRESHOLD: f64 = 0.2;
pub const ITEM_STAGGER: Duration = Duration::from_millis(200);

/// Impact timeline: the progress bar fills and items animate in one after another.
#[derive(Debug)]
pub struct Timeline {
    progress: ElementId,
    items: Vec<ElementId>,
    triggered: bool,
    schedule: Schedule<ElementId>,
}

impl Timeline {
    #[must_use]
    pub fn mount(scope: &Scope) -> Option<Self> {
        let progress = scope.by_class(TIMELINE_PROGRESS).next()?.id.clone();
        let items = scope.by_class(TIMELINE_ITEM).map(|n| n.id.clone()).collect();
        Some(Self { progress, items, triggered: false, schedule: Schedule::new() })
    }

    #[must_use]
    pub const fn is_triggered(&self) -> bool {
        self.triggered
    }

    fn trigger(&mut self, now: Duration) -> Patch {
        self.triggered = true;
        for (index, item) in self.items.iter().enumerate() {
            self.schedule.at(now + ITEM_STAGGER * index as u32, item.clone());
        }
        debug!(items = self.items.len(), "Timeline triggered");
        Patch::style(&self.progress, "height", "100%")
    }
}

impl Behavior for Timeline {
    fn name(&self) -> &'static str {
        "timeline"
    }

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>) {
        if !self.triggered {
            let hit = observed_ratios(event, cx, [&self.progress])
                .into_iter()
                .any(|(_, ratio)| ratio >= TIMELINE_THRESHOLD);
            if hit {
                let fill = self.trigger(cx.now());
                cx.emit(fill);
            }
        }

        let due = self.schedule.drain_due(cx.now());
        cx.extend(due.iter().map(|item| Patch::class(item, CLASS_AOS_ANIMATE, true)));
    }
}
