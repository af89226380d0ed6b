//! Navigation state: mobile menu, navbar tone, active section tracking.

/// Scroll offset past which the navbar turns solid.
pub const NAVBAR_SOLID_AFTER: f64 = 100.0;

/// Sections count as active this far before their top edge.
pub const ACTIVE_SECTION_LEAD: f64 = 100.0;

/// Height kept clear above an anchor target (the fixed navbar).
pub const ANCHOR_OFFSET: f64 = 80.0;

/// Mobile navigation menu. The menu and its toggle share one flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Called whenever a nav link is followed.
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Navbar background, driven by scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavbarTone {
    #[default]
    Translucent,
    Solid,
}

impl NavbarTone {
    pub fn for_scroll(scroll_y: f64) -> Self {
        if scroll_y > NAVBAR_SOLID_AFTER {
            NavbarTone::Solid
        } else {
            NavbarTone::Translucent
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            NavbarTone::Translucent => "rgba(10, 10, 10, 0.8)",
            NavbarTone::Solid => "rgba(10, 10, 10, 0.95)",
        }
    }
}

/// Position of a page section inside the scroll container.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, offset_top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            offset_top,
            height,
        }
    }

    fn contains(&self, scroll_y: f64) -> bool {
        let top = self.offset_top - ACTIVE_SECTION_LEAD;
        scroll_y > top && scroll_y <= top + self.height
    }
}

/// Section whose nav link is highlighted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveSection {
    current: Option<String>,
}

impl ActiveSection {
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Recompute from the scroll offset. The last matching section wins;
    /// with no match the previous highlight stays. Returns whether it changed.
    pub fn update(&mut self, scroll_y: f64, sections: &[SectionBounds]) -> bool {
        let Some(hit) = sections.iter().rev().find(|s| s.contains(scroll_y)) else {
            return false;
        };

        if self.current.as_deref() == Some(hit.id.as_str()) {
            return false;
        }
        self.current = Some(hit.id.clone());
        true
    }

    /// Whether a link pointing at `href` (e.g. `#about`) is highlighted.
    pub fn is_link_active(&self, href: &str) -> bool {
        match (self.current.as_deref(), href.strip_prefix('#')) {
            (Some(current), Some(target)) => current == target,
            _ => false,
        }
    }
}

/// Scroll offset that brings a section at `offset_top` just below the navbar.
pub fn anchor_scroll_target(offset_top: f64) -> f64 {
    (offset_top - ANCHOR_OFFSET).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 600.0),
            SectionBounds::new("about", 600.0, 500.0),
            SectionBounds::new("projects", 1100.0, 900.0),
        ]
    }

    #[test]
    fn test_menu_toggle_and_close() {
        let mut menu = NavMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_navbar_tone_threshold() {
        assert_eq!(NavbarTone::for_scroll(0.0), NavbarTone::Translucent);
        assert_eq!(NavbarTone::for_scroll(100.0), NavbarTone::Translucent);
        assert_eq!(NavbarTone::for_scroll(100.5), NavbarTone::Solid);
        assert_eq!(NavbarTone::Solid.background(), "rgba(10, 10, 10, 0.95)");
    }

    #[test]
    fn test_active_section_tracks_scroll() {
        let mut active = ActiveSection::default();
        assert!(active.update(10.0, &sections()));
        assert_eq!(active.current(), Some("home"));

        // the 100px lead moves about's range to (500, 1000]
        assert!(active.update(550.0, &sections()));
        assert_eq!(active.current(), Some("about"));
        assert!(active.is_link_active("#about"));
        assert!(!active.is_link_active("#home"));
        assert!(!active.is_link_active("about"));

        assert!(!active.update(560.0, &sections()));
    }

    #[test]
    fn test_active_section_kept_without_match() {
        let mut active = ActiveSection::default();
        active.update(1500.0, &sections());
        assert_eq!(active.current(), Some("projects"));

        assert!(!active.update(5000.0, &sections()));
        assert_eq!(active.current(), Some("projects"));
    }

    #[test]
    fn test_active_section_last_match_wins() {
        let overlapping = vec![
            SectionBounds::new("a", 100.0, 1000.0),
            SectionBounds::new("b", 200.0, 1000.0),
        ];
        let mut active = ActiveSection::default();
        active.update(300.0, &overlapping);
        assert_eq!(active.current(), Some("b"));
    }

    #[test]
    fn test_anchor_scroll_target() {
        assert_eq!(anchor_scroll_target(600.0), 520.0);
        assert_eq!(anchor_scroll_target(20.0), 0.0);
    }
}
