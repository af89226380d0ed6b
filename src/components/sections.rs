//! Portfolio page sections, rendered from the loaded content.

use dioxus::prelude::*;
use folio_core::content::{Contact, Project, SkillGroup, Stat};

use super::{CopyButton, DetailsButton, LazyImg, PageSection, ProfileImage, Reveal};
use crate::context::use_content;

/// Initials for the avatar placeholder ("Alex Rivera" -> "AR").
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
pub fn HeroSection() -> Element {
    let content = use_content();
    let owner = content.read().owner.clone();

    rsx! {
        PageSection { id: "home", class: "hero",
            div { class: "hero-content",
                ProfileImage { initials: initials(&owner.name) }
                h1 { class: "hero-title", "{owner.name}" }
                p { class: "hero-role", "{owner.role}" }
                if !owner.tagline.is_empty() {
                    p { class: "hero-tagline", "{owner.tagline}" }
                }
            }
        }
    }
}

#[component]
pub fn AboutSection() -> Element {
    let content = use_content();
    let about = content.read().about.clone();
    let stats = content.read().stats.clone();

    rsx! {
        PageSection { id: "about", class: "section",
            h2 { class: "section-title", "About" }
            div { class: "about-text",
                for (i, paragraph) in about.iter().enumerate() {
                    p { key: "{i}", "{paragraph}" }
                }
            }
            div { class: "stats",
                for (i, stat) in stats.into_iter().enumerate() {
                    StatItem { key: "{i}", index: i, stat }
                }
            }
        }
    }
}

#[component]
fn StatItem(index: usize, stat: Stat) -> Element {
    rsx! {
        Reveal { id: "stat-{index}", class: "stat-item",
            span { class: "stat-value", "{stat.value}" }
            span { class: "stat-label", "{stat.label}" }
        }
    }
}

#[component]
pub fn SkillsSection() -> Element {
    let content = use_content();
    let groups: Vec<SkillGroup> = content.read().skills.clone();

    rsx! {
        PageSection { id: "skills", class: "section",
            h2 { class: "section-title", "Skills" }
            div { class: "skills-grid",
                for (i, group) in groups.into_iter().enumerate() {
                    Reveal { key: "{i}", id: "skill-{i}", class: "skill-item",
                        h3 { "{group.title}" }
                        ul {
                            for item in group.items.iter() {
                                li { key: "{item}", "{item}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProjectsSection() -> Element {
    let content = use_content();
    let projects = content.read().projects.clone();

    rsx! {
        PageSection { id: "projects", class: "section",
            h2 { class: "section-title", "Projects" }
            div { class: "projects-grid",
                for project in projects {
                    ProjectCard { key: "{project.id}", project }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    rsx! {
        Reveal { id: "project-{project.id}", class: "project-card",
            if let Some(image) = project.image.clone() {
                LazyImg {
                    id: "{project.id}",
                    data_src: image,
                    alt: "{project.title}",
                }
            }
            div { class: "project-body",
                h3 { class: "project-title", "{project.title}" }
                p { class: "project-summary", "{project.summary}" }
                div { class: "project-tags",
                    for tag in project.tags.iter() {
                        span { key: "{tag}", class: "tag", "{tag}" }
                    }
                }
                DetailsButton { project_id: project.id.clone() }
            }
        }
    }
}

#[component]
pub fn ContactSection() -> Element {
    let content = use_content();
    let contacts = content.read().contacts.clone();

    rsx! {
        PageSection { id: "contact", class: "section",
            h2 { class: "section-title", "Contact" }
            div { class: "contact-list",
                for (i, contact) in contacts.into_iter().enumerate() {
                    ContactItem { key: "{i}", index: i, contact }
                }
            }
        }
    }
}

#[component]
fn ContactItem(index: usize, contact: Contact) -> Element {
    rsx! {
        Reveal { id: "contact-{index}", class: "contact-item",
            span { class: "contact-label", "{contact.label}" }
            if let Some(href) = contact.href.clone() {
                a { class: "contact-value", href: "{href}", "{contact.value}" }
            } else {
                span { class: "contact-value", "{contact.value}" }
            }
            CopyButton { text: contact.value.clone() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Alex Rivera"), "AR");
        assert_eq!(initials("ada"), "A");
        assert_eq!(initials("Jean Luc Picard"), "JL");
        assert_eq!(initials("   "), "");
    }
}
