//! Navigation Bar Component
//!
//! Fixed top bar with section links. On narrow windows the links collapse
//! into a menu opened by the hamburger toggle.

use dioxus::prelude::*;
use folio_core::NavMenu;

use crate::context::use_page;
use crate::layout::scroll_to_section;

/// A section reachable from the navbar.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl NavLocation {
    pub const ALL: [NavLocation; 5] = [
        NavLocation::Home,
        NavLocation::About,
        NavLocation::Skills,
        NavLocation::Projects,
        NavLocation::Contact,
    ];

    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Home => "Home",
            NavLocation::About => "About",
            NavLocation::Skills => "Skills",
            NavLocation::Projects => "Projects",
            NavLocation::Contact => "Contact",
        }
    }

    /// DOM id of the target section
    pub fn section_id(&self) -> &'static str {
        match self {
            NavLocation::Home => "home",
            NavLocation::About => "about",
            NavLocation::Skills => "skills",
            NavLocation::Projects => "projects",
            NavLocation::Contact => "contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.section_id())
    }
}

/// Navigation bar
///
/// - Background turns solid once the page is scrolled
/// - The link for the section in view is highlighted
/// - Following a link scrolls smoothly and closes the mobile menu
#[component]
pub fn NavBar(
    /// Brand text on the left
    brand: String,
) -> Element {
    let page = use_page();
    let mut menu = use_signal(NavMenu::default);

    let tone = (page.tone)();
    let menu_open = menu().is_open();

    let mut follow = move |location: NavLocation| {
        menu.write().close();
        spawn(scroll_to_section(page, location.section_id().to_string()));
    };

    rsx! {
        nav {
            id: "navbar",
            class: "navbar",
            style: "background: {tone.background()};",

            a {
                class: "nav-brand",
                href: "#home",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    follow(NavLocation::Home);
                },
                "{brand}"
            }

            ul {
                id: "nav-menu",
                class: if menu_open { "nav-menu active" } else { "nav-menu" },
                for location in NavLocation::ALL {
                    li { key: "{location.section_id()}",
                        a {
                            class: if page.active.read().is_link_active(&location.href()) { "nav-link active" } else { "nav-link" },
                            href: "{location.href()}",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                follow(location);
                            },
                            "{location.display_name()}"
                        }
                    }
                }
            }

            button {
                id: "nav-toggle",
                class: if menu_open { "nav-toggle active" } else { "nav-toggle" },
                onclick: move |_| menu.write().toggle(),
                "aria-label": "Toggle navigation",
                span { class: "bar" }
                span { class: "bar" }
                span { class: "bar" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::content::SECTION_IDS;

    #[test]
    fn test_locations_match_page_sections() {
        let ids: Vec<&str> = NavLocation::ALL.iter().map(|l| l.section_id()).collect();
        assert_eq!(ids, SECTION_IDS);
        assert_eq!(NavLocation::Projects.href(), "#projects");
    }
}
