use crate::error::{RevealError, RevealErrorExt};
use crate::format::NumberFormat;
use crate::visibility::observed_ratios;
use dpi_kernel::animation::{AnimationDriver, Tween};
use dpi_kernel::domain::constants::{DATA_COUNT, DATA_DECIMALS, DATA_DURATION, DATA_VALUE};
use dpi_kernel::domain::dom::{ElementId, Node, Patch, Scope};
use dpi_kernel::domain::event::Event;
use dpi_kernel::domain::registry::{Behavior, Context};
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Classes whose text is a statistic to count up, besides anything carrying `data-count`.
pub const COUNTER_CLASSES: [&str; 3] = ["stat-number", "result-number", "metric-value"];

/// A number that counts up from `start` to `end` once it scrolls into view.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterTarget {
    pub element: ElementId,
    pub start: f64,
    pub end: f64,
    pub duration: Duration,
    pub format: NumberFormat,
    /// Text kept around the number, e.g. `$` or `%`.
    pub prefix: String,
    pub suffix: String,
}

impl CounterTarget {
    #[must_use]
    pub fn new(element: ElementId, end: f64) -> Self {
        Self {
            element,
            start: 0.0,
            end,
            duration: DEFAULT_DURATION,
            format: NumberFormat::for_target(end),
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    /// Reads the target from `data-count`, then `data-value`, then the element text.
    ///
    /// Decimal places follow the digits written in the source, unless `data-decimals` says
    /// otherwise.
    pub fn from_node(node: &Node) -> Result<Self, RevealError> {
        let mut target = if let Some(raw) = node.attribute(DATA_COUNT) {
            Self::from_source(node, raw).context("Reading data-count")?
        } else if let Some(raw) = node.attribute(DATA_VALUE) {
            Self::from_source(node, raw).context("Reading data-value")?
        } else {
            let (prefix, number, suffix) = split_number(&node.text)
                .ok_or_else(|| RevealError::from(format!("no number in {:?}", node.text)))?;
            let mut target = Self::from_source(node, number).context("Reading text")?;
            target.prefix = prefix.to_owned();
            target.suffix = suffix.to_owned();
            target
        };

        if let Some(raw) = node.attribute(DATA_DECIMALS) {
            let places = raw.trim().parse::<u8>().context("Reading data-decimals")?;
            target.format = NumberFormat::with_places(places);
        }

        if let Some(raw) = node.attribute(DATA_DURATION) {
            let ms = parse_number(raw).context("Reading data-duration")?;
            if let Ok(duration) = Duration::try_from_secs_f64(ms / 1000.0) {
                target.duration = duration;
            }
        }
        Ok(target)
    }

    fn from_source(node: &Node, raw: &str) -> Result<Self, std::num::ParseFloatError> {
        let mut target = Self::new(node.id.clone(), parse_number(raw)?);
        target.format = NumberFormat::from_source(raw);
        Ok(target)
    }

    #[must_use]
    pub fn render(&self, value: f64) -> String {
        format!("{}{}{}", self.prefix, self.format.format(value), self.suffix)
    }
}

fn parse_number(raw: &str) -> Result<f64, std::num::ParseFloatError> {
    raw.trim().replace(',', "").parse::<f64>()
}

/// Splits `"$1,200+"` into `("$", "1,200", "+")`.
fn split_number(text: &str) -> Option<(&str, &str, &str)> {
    let text = text.trim();
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let end = text[start..]
        .find(|c: char| !(c.is_ascii_digit() || c == ',' || c == '.'))
        .map_or(text.len(), |offset| start + offset);
    let number = text[start..end].trim_end_matches(['.', ',']);
    let end = start + number.len();
    Some((&text[..start], number, &text[end..]))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Pending,
    Triggered,
}

/// Counters of one page, each firing once.
#[derive(Debug)]
pub struct Counters {
    targets: Vec<(CounterTarget, Phase)>,
    threshold: f64,
    driver: AnimationDriver,
}

impl Counters {
    pub fn new(targets: impl IntoIterator<Item = CounterTarget>) -> Self {
        Self {
            targets: targets.into_iter().map(|t| (t, Phase::Pending)).collect(),
            threshold: DEFAULT_THRESHOLD,
            driver: AnimationDriver::new(),
        }
    }

    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Collects `[data-count]` elements and the statistic classes. Malformed ones are skipped.
    #[must_use]
    pub fn mount(scope: &Scope) -> Option<Self> {
        let mut seen: Vec<&ElementId> = Vec::new();
        let candidates = scope
            .with_attribute(DATA_COUNT)
            .chain(COUNTER_CLASSES.iter().flat_map(|class| scope.by_class(class)));

        let mut targets = Vec::new();
        for node in candidates {
            if seen.contains(&&node.id) {
                continue;
            }
            seen.push(&node.id);
            match CounterTarget::from_node(node) {
                Ok(target) => targets.push(target),
                Err(err) => warn!(element = %node.id, %err, "Skipping counter"),
            }
        }

        if targets.is_empty() {
            return None;
        }
        debug!(counters = targets.len(), "Counters mounted");
        Some(Self::new(targets))
    }

    #[must_use]
    pub fn is_triggered(&self, element: &ElementId) -> bool {
        self.targets.iter().any(|(t, phase)| &t.element == element && *phase == Phase::Triggered)
    }

    /// Starts the count for `element` if it is still pending. Returns whether it started.
    pub fn trigger(&mut self, element: &ElementId, now: Duration) -> bool {
        let Some((target, phase)) =
            self.targets.iter_mut().find(|(t, phase)| &t.element == element && *phase == Phase::Pending)
        else {
            return false;
        };
        *phase = Phase::Triggered;
        let tween = Tween::linear(target.start, target.end, now, target.duration);
        self.driver.start(target.element.clone(), tween)
    }

    fn frames(&mut self, now: Duration) -> Vec<Patch> {
        self.driver
            .sample(now)
            .into_iter()
            .filter_map(|frame| {
                let (target, _) = self.targets.iter().find(|(t, _)| t.element == frame.target)?;
                Some(Patch::text(&target.element, target.render(frame.value)))
            })
            .collect()
    }
}

impl Behavior for Counters {
    fn name(&self) -> &'static str {
        "counters"
    }

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>) {
        if matches!(event, Event::Tick) {
            if !self.driver.is_idle() {
                let frames = self.frames(cx.now());
                cx.extend(frames);
            }
            return;
        }

        let pending: Vec<ElementId> = self
            .targets
            .iter()
            .filter(|(_, phase)| *phase == Phase::Pending)
            .map(|(t, _)| t.element.clone())
            .collect();

        for (element, ratio) in observed_ratios(event, cx, &pending) {
            if ratio >= self.threshold && self.trigger(&element, cx.now()) {
                debug!(%element, "Counter triggered");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_prefix_and_suffix() {
        assert_eq!(split_number("98%"), Some(("", "98", "%")));
        assert_eq!(split_number(" $1,200+ "), Some(("$", "1,200", "+")));
        assert_eq!(split_number("4.8."), Some(("", "4.8", ".")));
        assert_eq!(split_number("N/A"), None);
    }

    #[test]
    fn attribute_wins_over_text() {
        let node = Node::new("stat", "span").attr(DATA_COUNT, "12000").attr(DATA_DURATION, "500").text("0");
        let target = CounterTarget::from_node(&node).expect("valid counter");
        assert!((target.end - 12_000.0).abs() < f64::EPSILON);
        assert_eq!(target.duration, Duration::from_millis(500));
        assert_eq!(target.render(target.end), "12,000");
    }

    #[test]
    fn text_target_keeps_decorations() {
        let node = Node::new("rate", "span").class("stat-number").text("99.9%");
        let target = CounterTarget::from_node(&node).expect("valid counter");
        assert_eq!(target.format, NumberFormat::Fixed(1));
        assert_eq!(target.render(50.0), "50.0%");
    }

    #[test]
    fn two_place_targets_end_on_their_own_text() {
        for raw in ["99.95", "2.25", "0.05"] {
            let node = Node::new("stat", "span").attr(DATA_COUNT, raw);
            let target = CounterTarget::from_node(&node).expect("valid counter");
            assert_eq!(target.render(target.end), raw);
        }

        let node = Node::new("rate", "span").class("stat-number").text("$1,250.50 saved");
        let target = CounterTarget::from_node(&node).expect("valid counter");
        assert_eq!(target.render(target.end), "$1250.50 saved");
    }

    #[test]
    fn decimals_attribute_overrides_source() {
        let node = Node::new("stat", "span").attr(DATA_VALUE, "4.8").attr(DATA_DECIMALS, "2");
        let target = CounterTarget::from_node(&node).expect("valid counter");
        assert_eq!(target.render(target.end), "4.80");

        let node = Node::new("stat", "span").attr(DATA_VALUE, "4.8").attr(DATA_DECIMALS, "many");
        let err = CounterTarget::from_node(&node).expect_err("not a place count");
        assert!(err.to_string().starts_with("Counter markup error (Reading data-decimals)"));
    }

    #[test]
    fn malformed_attribute_carries_context() {
        let node = Node::new("stat", "span").attr(DATA_COUNT, "lots");
        let err = CounterTarget::from_node(&node).expect_err("not a number");
        assert!(err.to_string().starts_with("Counter markup error (Reading data-count)"));
    }
}
