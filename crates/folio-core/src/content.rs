//! Portfolio page content.
//!
//! Everything the page displays is described by one JSON document. A
//! default is compiled in; the desktop app may load another from disk.
//! Project details are written in Markdown and rendered to HTML once, at
//! load, into the records the project modal reads.

use std::path::Path;

use pulldown_cmark::{html, Options, Parser};
use serde::{Deserialize, Serialize};

use crate::error::FolioResult;
use crate::modal::ProjectCatalog;
use crate::types::ProjectDetailRecord;

/// Compiled-in content document.
pub const DEFAULT_CONTENT: &str = include_str!("../assets/portfolio.json");

/// Section ids in page order, matching the nav links (`#home`, ...).
pub const SECTION_IDS: [&str; 5] = ["home", "about", "skills", "projects", "contact"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub owner: Owner,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub summary: String,
    /// Card image, loaded lazily
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Markdown shown in the details modal
    #[serde(default)]
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub label: String,
    /// Text placed on the clipboard by the copy button
    pub value: String,
    #[serde(default)]
    pub href: Option<String>,
}

impl PortfolioContent {
    pub fn from_json(json: &str) -> FolioResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a content document from disk.
    pub fn load(path: impl AsRef<Path>) -> FolioResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The compiled-in document.
    pub fn embedded() -> FolioResult<Self> {
        Self::from_json(DEFAULT_CONTENT)
    }

    /// Render every project's details into modal records.
    ///
    /// Projects without details get no record, so their details button
    /// opens nothing.
    pub fn detail_records(&self) -> Vec<ProjectDetailRecord> {
        self.projects
            .iter()
            .filter(|p| !p.details.trim().is_empty())
            .map(|p| ProjectDetailRecord::new(&p.id, render_markdown(&p.details)))
            .collect()
    }

    pub fn catalog(&self) -> ProjectCatalog {
        ProjectCatalog::new(self.detail_records())
    }
}

/// Markdown to an HTML fragment.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(source, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_parses() {
        let content = PortfolioContent::embedded().unwrap();
        assert!(!content.owner.name.is_empty());
        assert!(!content.projects.is_empty());
        assert_eq!(content.detail_records().len(), content.projects.len());
    }

    #[test]
    fn test_minimal_document() {
        let content = PortfolioContent::from_json(
            r#"{ "owner": { "name": "Ada", "role": "Engineer" } }"#,
        )
        .unwrap();
        assert_eq!(content.owner.tagline, "");
        assert!(content.projects.is_empty());
        assert!(content.catalog().is_empty());
    }

    #[test]
    fn test_details_rendered_to_html() {
        let content = PortfolioContent::from_json(
            r####"{
                "owner": { "name": "Ada", "role": "Engineer" },
                "projects": [
                    { "id": "atlas", "title": "Atlas", "summary": "Maps",
                      "details": "### Atlas\n\nBuilt with ~~love~~ **Rust**." },
                    { "id": "draft", "title": "Draft", "summary": "WIP" }
                ]
            }"####,
        )
        .unwrap();

        let catalog = content.catalog();
        assert_eq!(catalog.len(), 1);
        let record = catalog.find("atlas").unwrap();
        assert!(record.markup.contains("<h3>Atlas</h3>"));
        assert!(record.markup.contains("<del>love</del>"));
        assert!(record.markup.contains("<strong>Rust</strong>"));
        assert!(catalog.find("draft").is_none());
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let err = PortfolioContent::from_json("{").unwrap_err();
        assert!(matches!(err, crate::FolioError::Serialization(_)));
    }
}
