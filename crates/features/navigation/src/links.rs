use dpi_kernel::domain::constants::{CLASS_ACTIVE, HREF};
use dpi_kernel::domain::dom::{ElementId, Patch, Scope};
use dpi_kernel::domain::event::Event;
use dpi_kernel::domain::registry::{Behavior, Context};

pub const NAV_LINK: &str = "nav-link";
/// A section counts as current once its top is within this distance of the scroll offset.
pub const SECTION_OFFSET: f64 = 100.0;

/// Highlights the `.nav-link[href="#id"]` of the section being read.
#[derive(Debug)]
pub struct ActiveSection {
    sections: Vec<ElementId>,
    links: Vec<(ElementId, String)>,
    current: Option<String>,
}

impl ActiveSection {
    #[must_use]
    pub fn mount(scope: &Scope) -> Option<Self> {
        let links: Vec<_> = scope
            .by_class(NAV_LINK)
            .filter_map(|n| Some((n.id.clone(), n.attribute(HREF)?.strip_prefix('#')?.to_owned())))
            .collect();
        let sections: Vec<_> = scope.nodes().iter().filter(|n| n.tag == "section").map(|n| n.id.clone()).collect();
        (!links.is_empty() && !sections.is_empty()).then_some(Self { sections, links, current: None })
    }

    /// Id of the last section whose top, less the offset, has been scrolled past.
    #[must_use]
    pub fn current_section(&self, scope: &Scope, scroll_top: f64) -> Option<String> {
        self.sections
            .iter()
            .rev()
            .filter_map(|id| scope.get(id))
            .find(|n| scroll_top >= n.rect.top - SECTION_OFFSET)
            .map(|n| n.id.to_string())
    }
}

impl Behavior for ActiveSection {
    fn name(&self) -> &'static str {
        "active-section"
    }

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>) {
        let top = match event {
            Event::Ready => cx.scroll_top(),
            Event::Scroll { top } => *top,
            _ => return,
        };

        let current = self.current_section(cx.scope(), top);
        if current == self.current {
            return;
        }
        for (link, target) in &self.links {
            cx.emit(Patch::class(link, CLASS_ACTIVE, current.as_deref() == Some(target.as_str())));
        }
        self.current = current;
    }
}

/// Marks the nav link pointing at the current page once on load.
#[derive(Debug)]
pub struct CurrentPage {
    links: Vec<(ElementId, String)>,
}

impl CurrentPage {
    #[must_use]
    pub fn mount(scope: &Scope) -> Option<Self> {
        let links: Vec<_> = scope
            .by_class(NAV_LINK)
            .filter_map(|n| n.attribute(HREF).filter(|h| !h.starts_with('#')).map(|h| (n.id.clone(), h.to_owned())))
            .collect();
        (!links.is_empty()).then_some(Self { links })
    }
}

/// Last path segment, `index.html` for the site root.
#[must_use]
pub fn page_name(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some("") | None => "index.html",
        Some(name) => name,
    }
}

impl Behavior for CurrentPage {
    fn name(&self) -> &'static str {
        "current-page"
    }

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>) {
        if !matches!(event, Event::Ready) {
            return;
        }
        let page = page_name(&cx.scope().document.location_path);
        for (link, href) in &self.links {
            let current = href == page || (page == "index.html" && href == "./");
            cx.emit(Patch::class(link, CLASS_ACTIVE, current));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_names() {
        assert_eq!(page_name(""), "index.html");
        assert_eq!(page_name("/"), "index.html");
        assert_eq!(page_name("/services.html"), "services.html");
        assert_eq!(page_name("/work/project-details.html"), "project-details.html");
    }
}
