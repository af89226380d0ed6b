//! UI Components for Folio.

mod alert;
mod copy_button;
mod nav_bar;
mod profile_image;
mod project_modal;
mod reveal;
mod sections;

pub use copy_button::CopyButton;
pub use nav_bar::NavBar;
pub use profile_image::ProfileImage;
pub use project_modal::{DetailsButton, ProjectModal};
pub use reveal::{LazyImg, PageSection, Reveal};
pub use sections::{AboutSection, ContactSection, HeroSection, ProjectsSection, SkillsSection};
