//! Project details modal.
//!
//! Two states, `Closed` and `Open`. Opening copies a project's detail
//! markup into the content area; closing has three triggers (close button,
//! backdrop click, Escape) that all end in [`ModalController::close`].
//! Page scrolling is locked exactly while the modal is open.

use crate::types::ProjectDetailRecord;

/// Key name that closes the modal.
pub const ESCAPE_KEY: &str = "Escape";

/// Visibility of the modal dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Element a pointer click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed overlay around the dialog
    Backdrop,
    /// Anywhere inside the dialog content
    Content,
}

/// Pre-rendered project detail records, looked up by project id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectCatalog {
    records: Vec<ProjectDetailRecord>,
}

impl ProjectCatalog {
    pub fn new(records: Vec<ProjectDetailRecord>) -> Self {
        Self { records }
    }

    /// First record tagged with `project_id`.
    pub fn find(&self, project_id: &str) -> Option<&ProjectDetailRecord> {
        self.records.iter().find(|r| r.project_id == project_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Modal dialog controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalController {
    catalog: ProjectCatalog,
    state: ModalState,
    content: String,
}

impl ModalController {
    pub fn new(catalog: ProjectCatalog) -> Self {
        Self {
            catalog,
            state: ModalState::Closed,
            content: String::new(),
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    /// Whether the page behind the modal may scroll.
    pub fn scroll_enabled(&self) -> bool {
        !self.is_open()
    }

    /// Markup currently in the content area.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Open the modal for `project_id`.
    ///
    /// An unknown id leaves everything untouched and returns `false`.
    pub fn open(&mut self, project_id: &str) -> bool {
        let Some(record) = self.catalog.find(project_id) else {
            tracing::trace!(project_id, "no detail record for project");
            return false;
        };

        self.content.clone_from(&record.markup);
        self.state = ModalState::Open;
        tracing::debug!(project_id, "project modal opened");
        true
    }

    /// Close the modal and restore page scrolling. Idempotent.
    pub fn close(&mut self) {
        if self.is_open() {
            tracing::debug!("project modal closed");
        }
        self.state = ModalState::Closed;
    }

    /// Pointer click inside the modal element tree.
    pub fn click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Backdrop {
            self.close();
        }
    }

    /// Escape pressed anywhere in the document. Returns whether it closed
    /// the modal.
    pub fn handle_escape(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.close();
        true
    }

    /// Document-level key press by key name. Returns whether the key was
    /// consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        key == ESCAPE_KEY && self.handle_escape()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> ModalController {
        ModalController::new(ProjectCatalog::new(vec![
            ProjectDetailRecord::new("atlas", "<h3>Atlas</h3>"),
            ProjectDetailRecord::new("beacon", "<h3>Beacon</h3>"),
        ]))
    }

    #[test]
    fn test_starts_closed_with_scroll() {
        let modal = controller();
        assert_eq!(modal.state(), ModalState::Closed);
        assert!(modal.scroll_enabled());
        assert_eq!(modal.content(), "");
    }

    #[test]
    fn test_open_known_project() {
        let mut modal = controller();
        assert!(modal.open("atlas"));
        assert!(modal.is_open());
        assert!(!modal.scroll_enabled());
        assert_eq!(modal.content(), "<h3>Atlas</h3>");
    }

    #[test]
    fn test_open_unknown_project_is_noop() {
        let mut modal = controller();
        assert!(!modal.open("missing"));
        assert_eq!(modal.state(), ModalState::Closed);
        assert!(modal.scroll_enabled());

        modal.open("beacon");
        assert!(!modal.open("missing"));
        assert_eq!(modal.content(), "<h3>Beacon</h3>");
        assert!(modal.is_open());
    }

    #[test]
    fn test_reopen_overwrites_content() {
        let mut modal = controller();
        modal.open("atlas");
        modal.close();
        modal.open("beacon");
        assert_eq!(modal.content(), "<h3>Beacon</h3>");
    }

    #[test]
    fn test_close_triggers() {
        let mut modal = controller();

        modal.open("atlas");
        modal.close();
        assert!(!modal.is_open());
        assert!(modal.scroll_enabled());

        modal.open("atlas");
        modal.click(ClickTarget::Backdrop);
        assert!(!modal.is_open());

        modal.open("atlas");
        assert!(modal.handle_key(ESCAPE_KEY));
        assert!(!modal.is_open());
        assert!(modal.scroll_enabled());
    }

    #[test]
    fn test_content_click_keeps_open() {
        let mut modal = controller();
        modal.open("atlas");
        modal.click(ClickTarget::Content);
        assert!(modal.is_open());
        assert!(!modal.scroll_enabled());
    }

    #[test]
    fn test_keys_while_closed_or_other_keys() {
        let mut modal = controller();
        assert!(!modal.handle_key(ESCAPE_KEY));
        assert_eq!(modal.state(), ModalState::Closed);

        modal.open("atlas");
        assert!(!modal.handle_key("Enter"));
        assert!(modal.is_open());
    }

    #[test]
    fn test_handle_escape() {
        let mut modal = controller();
        assert!(!modal.handle_escape());

        modal.open("beacon");
        assert!(modal.handle_escape());
        assert_eq!(modal.state(), ModalState::Closed);
        assert!(modal.scroll_enabled());
        assert!(!modal.handle_escape());
    }

    #[test]
    fn test_repeated_close_is_harmless() {
        let mut modal = controller();
        modal.close();
        modal.close();
        modal.click(ClickTarget::Backdrop);
        assert_eq!(modal.state(), ModalState::Closed);
        assert!(modal.scroll_enabled());
    }
}
