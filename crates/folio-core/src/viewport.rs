//! Viewport intersection for fade-in reveal and lazy image loading.
//!
//! Element positions are measured relative to the top of the visible area,
//! so `top < 0` means the element starts above the fold.

use std::collections::HashSet;

/// Minimum visible fraction before an element fades in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Bottom edge of the reveal band is pulled up by this many pixels.
pub const REVEAL_BOTTOM_MARGIN: f64 = 50.0;

/// Visible area of the scroll container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub height: f64,
}

impl Viewport {
    pub fn new(height: f64) -> Self {
        Self { height }
    }

    /// Whether `rect` shows at least `threshold` of itself inside the
    /// viewport shrunk by `bottom_margin` at the bottom.
    pub fn intersects(&self, rect: ElementRect, threshold: f64, bottom_margin: f64) -> bool {
        let band_bottom = self.height - bottom_margin;
        let bottom = rect.bottom();

        if rect.top > band_bottom || bottom < 0.0 {
            return false;
        }
        if threshold <= 0.0 || rect.height <= 0.0 {
            return true;
        }

        let visible = bottom.min(band_bottom) - rect.top.max(0.0);
        visible / rect.height >= threshold
    }
}

/// Element box relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRect {
    pub top: f64,
    pub height: f64,
}

impl ElementRect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Elements that have faded in. Reveal is one-way.
#[derive(Debug, Clone, Default)]
pub struct RevealSet {
    revealed: HashSet<String>,
}

impl RevealSet {
    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    /// Returns `true` the first time `id` becomes visible.
    pub fn observe(&mut self, id: &str, rect: ElementRect, viewport: Viewport) -> bool {
        if self.revealed.contains(id) {
            return false;
        }
        if !viewport.intersects(rect, REVEAL_THRESHOLD, REVEAL_BOTTOM_MARGIN) {
            return false;
        }
        self.revealed.insert(id.to_string())
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

/// Image whose source is deferred until it scrolls into view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazyImage {
    data_src: Option<String>,
    src: Option<String>,
}

impl LazyImage {
    pub fn new(data_src: impl Into<String>) -> Self {
        Self {
            data_src: Some(data_src.into()),
            src: None,
        }
    }

    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    /// Still waiting to be observed in view.
    pub fn is_pending(&self) -> bool {
        self.data_src.is_some()
    }

    /// Promote the deferred source once the image touches the viewport.
    /// Returns `true` when the source was promoted by this call.
    pub fn observe(&mut self, rect: ElementRect, viewport: Viewport) -> bool {
        if self.data_src.is_none() || !viewport.intersects(rect, 0.0, 0.0) {
            return false;
        }
        self.src = self.data_src.take();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Viewport = Viewport { height: 800.0 };

    #[test]
    fn test_intersects_threshold() {
        // 100px tall, 10px inside the band (band ends at 750)
        assert!(VIEW.intersects(ElementRect::new(740.0, 100.0), 0.1, 50.0));
        assert!(!VIEW.intersects(ElementRect::new(745.0, 100.0), 0.1, 50.0));
        // below the band entirely
        assert!(!VIEW.intersects(ElementRect::new(760.0, 100.0), 0.1, 50.0));
        // mostly scrolled past the top
        assert!(VIEW.intersects(ElementRect::new(-85.0, 100.0), 0.1, 50.0));
        assert!(!VIEW.intersects(ElementRect::new(-95.0, 100.0), 0.1, 50.0));
    }

    #[test]
    fn test_zero_height_element() {
        assert!(VIEW.intersects(ElementRect::new(100.0, 0.0), 0.1, 50.0));
        assert!(!VIEW.intersects(ElementRect::new(790.0, 0.0), 0.1, 50.0));
    }

    #[test]
    fn test_reveal_is_one_way() {
        let mut set = RevealSet::default();
        assert!(!set.observe("card-1", ElementRect::new(900.0, 200.0), VIEW));
        assert!(!set.is_revealed("card-1"));

        assert!(set.observe("card-1", ElementRect::new(300.0, 200.0), VIEW));
        assert!(set.is_revealed("card-1"));

        // scrolled back out of view
        assert!(!set.observe("card-1", ElementRect::new(2000.0, 200.0), VIEW));
        assert!(set.is_revealed("card-1"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_taller_viewport_reveals_without_scrolling() {
        let rect = ElementRect::new(700.0, 200.0);
        let short = Viewport::new(600.0);
        let tall = Viewport::new(1200.0);

        let mut set = RevealSet::default();
        let mut img = LazyImage::new("assets/relay.png");
        assert!(!set.observe("card-2", rect, short));
        assert!(!img.observe(rect, short));

        // same scroll position, window resized
        assert!(set.observe("card-2", rect, tall));
        assert!(img.observe(rect, tall));
        assert_eq!(img.src(), Some("assets/relay.png"));
    }

    #[test]
    fn test_lazy_image_promotes_once() {
        let mut img = LazyImage::new("assets/atlas.png");
        assert!(img.is_pending());
        assert!(!img.observe(ElementRect::new(1200.0, 300.0), VIEW));
        assert_eq!(img.src(), None);

        assert!(img.observe(ElementRect::new(790.0, 300.0), VIEW));
        assert_eq!(img.src(), Some("assets/atlas.png"));
        assert!(!img.is_pending());

        assert!(!img.observe(ElementRect::new(0.0, 300.0), VIEW));
        assert_eq!(img.src(), Some("assets/atlas.png"));
    }
}
