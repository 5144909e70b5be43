use dpi_kernel::domain::dom::{ElementId, Patch, Scope};
use dpi_kernel::domain::event::Event;
use dpi_kernel::domain::registry::{Behavior, Context};
use std::time::Duration;

pub const TESTIMONIAL: &str = "testimonial";
pub const SLIDE_INTERVAL: Duration = Duration::from_secs(5);

const SLIDE_ANIMATION: &str = "fadeIn 0.5s ease-in-out";

/// Shows one testimonial at a time and advances on a fixed interval.
#[derive(Debug)]
pub struct TestimonialCarousel {
    slides: Vec<ElementId>,
    current: usize,
    next_at: Option<Duration>,
}

impl TestimonialCarousel {
    /// Needs more than one `.testimonial`.
    #[must_use]
    pub fn mount(scope: &Scope) -> Option<Self> {
        let slides: Vec<_> = scope.by_class(TESTIMONIAL).map(|n| n.id.clone()).collect();
        (slides.len() > 1).then_some(Self { slides, current: 0, next_at: None })
    }

    #[must_use]
    pub fn current(&self) -> &ElementId {
        &self.slides[self.current]
    }

    fn render(&self) -> Vec<Patch> {
        let mut patches = Vec::with_capacity(self.slides.len() + 1);
        for (index, slide) in self.slides.iter().enumerate() {
            if index == self.current {
                patches.push(Patch::style(slide, "display", "block"));
                patches.push(Patch::style(slide, "animation", SLIDE_ANIMATION));
            } else {
                patches.push(Patch::style(slide, "display", "none"));
            }
        }
        patches
    }
}

impl Behavior for TestimonialCarousel {
    fn name(&self) -> &'static str {
        "testimonial-carousel"
    }

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>) {
        let now = cx.now();
        match (event, self.next_at) {
            (Event::Ready, None) => {
                self.next_at = Some(now + SLIDE_INTERVAL);
                cx.extend(self.render());
            },
            (Event::Tick, Some(mut due)) if now >= due => {
                while now >= due {
                    self.current = (self.current + 1) % self.slides.len();
                    due += SLIDE_INTERVAL;
                }
                self.next_at = Some(due);
                cx.extend(self.render());
            },
            _ => {},
        }
    }
}
