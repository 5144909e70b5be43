use serde::{Deserialize, Serialize};

/// Visible area of the browser window in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const DESKTOP: Self = Self { width: 1280.0, height: 800.0 };

    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::DESKTOP
    }
}

/// Layout box in document coordinates (not relative to the current scroll position).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self { top, left, width, height }
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Top edge relative to the viewport, like `getBoundingClientRect().top`.
    #[must_use]
    pub fn client_top(&self, scroll_top: f64) -> f64 {
        self.top - scroll_top
    }

    /// Fraction of this box inside the viewport, in `0.0..=1.0`.
    ///
    /// A box without area counts as fully visible when its top edge is on screen.
    #[must_use]
    pub fn intersection_ratio(&self, viewport: Viewport, scroll_top: f64) -> f64 {
        let view_bottom = scroll_top + viewport.height;
        let area = self.width * self.height;
        if area <= 0.0 {
            return if self.top >= scroll_top && self.top <= view_bottom { 1.0 } else { 0.0 };
        }

        let visible_height = (self.bottom().min(view_bottom) - self.top.max(scroll_top)).max(0.0);
        let visible_width = (self.right().min(viewport.width) - self.left.max(0.0)).max(0.0);
        ((visible_height * visible_width) / area).clamp(0.0, 1.0)
    }

    /// Whether the whole box is on screen.
    #[must_use]
    pub fn fully_visible(&self, viewport: Viewport, scroll_top: f64) -> bool {
        self.top >= scroll_top
            && self.left >= 0.0
            && self.bottom() <= scroll_top + viewport.height
            && self.right() <= viewport.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_visible_box() {
        let rect = Rect::new(700.0, 0.0, 100.0, 200.0);
        let ratio = rect.intersection_ratio(Viewport::new(1000.0, 800.0), 0.0);
        assert!((ratio - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn scrolled_past_box_is_hidden() {
        let rect = Rect::new(100.0, 0.0, 100.0, 100.0);
        assert!(rect.intersection_ratio(Viewport::DESKTOP, 500.0).abs() < f64::EPSILON);
        assert!(!rect.fully_visible(Viewport::DESKTOP, 500.0));
    }

    #[test]
    fn empty_box_uses_top_edge() {
        let rect = Rect::new(300.0, 0.0, 0.0, 0.0);
        assert!((rect.intersection_ratio(Viewport::DESKTOP, 0.0) - 1.0).abs() < f64::EPSILON);
        assert!(rect.intersection_ratio(Viewport::DESKTOP, 400.0).abs() < f64::EPSILON);
    }
}
