use dpi_kernel::domain::capabilities::Capabilities;
use dpi_kernel::domain::dom::ElementId;
use dpi_kernel::domain::event::Event;
use dpi_kernel::domain::registry::Context;

/// Intersection ratios an event reports for `targets`.
///
/// With an IntersectionObserver the host forwards `Intersection` events. Without one the
/// ratio is computed from layout on load, scroll and resize.
pub(crate) fn observed_ratios<'t>(
    event: &Event,
    cx: &Context<'_>,
    targets: impl IntoIterator<Item = &'t ElementId>,
) -> Vec<(ElementId, f64)> {
    match event {
        Event::Intersection { target, ratio } => targets
            .into_iter()
            .filter(|id| *id == target)
            .map(|id| (id.clone(), *ratio))
            .collect(),
        Event::Ready | Event::Scroll { .. } | Event::Resize { .. }
            if !cx.capabilities().contains(Capabilities::INTERSECTION_OBSERVER) =>
        {
            let scope = cx.scope();
            targets
                .into_iter()
                .filter_map(|id| {
                    let rect = scope.get(id)?.rect;
                    Some((id.clone(), rect.intersection_ratio(cx.viewport(), cx.scroll_top())))
                })
                .collect()
        },
        _ => Vec::new(),
    }
}
