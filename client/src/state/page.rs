//! Presentation state of the greeting page.
//!
//! DESIGN
//! ======
//! Every region the lifecycle controller shows, hides or fills lives in one
//! plain `PageState` value. Components render from it; the controller only
//! mutates it through `PageView`, so the same controller runs against a
//! reactive signal in the browser and a plain cell in tests.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use leptos::prelude::*;

/// Which modal dialog is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    /// Informational outcome (`#result-modal`).
    Result,
    /// Failure outcome (`#error-modal`).
    Error,
}

/// Dismissal behavior of a modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModalConfig {
    /// Show the dark backdrop; clicking it dismisses the modal.
    pub backdrop: bool,
    /// Dismiss on Escape.
    pub keyboard: bool,
}

/// Fixed configuration used for every modal on the page.
pub const MODAL_CONFIG: ModalConfig = ModalConfig { backdrop: true, keyboard: false };

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Modal {
    pub kind: ModalKind,
    pub text: String,
    pub config: ModalConfig,
}

impl Modal {
    #[must_use]
    pub fn result(text: impl Into<String>) -> Self {
        Self { kind: ModalKind::Result, text: text.into(), config: MODAL_CONFIG }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: ModalKind::Error, text: text.into(), config: MODAL_CONFIG }
    }
}

/// Everything the page shows, in one place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    pub signin_button_visible: bool,
    pub userinfo_visible: bool,
    /// Account email shown in the user-info panel.
    pub email_text: String,
    pub page_wrapper_visible: bool,
    /// Template context of the update-greeting section; `None` when cleared.
    pub update_greeting: Option<String>,
    pub greeting_form_bound: bool,
    pub update_form_bound: bool,
    pub signout_bound: bool,
    pub modal: Option<Modal>,
}

impl PageState {
    /// Sign-in button and user info are never shown together.
    #[must_use]
    pub fn auth_regions_consistent(&self) -> bool {
        !(self.signin_button_visible && self.userinfo_visible)
    }
}

/// Write access to the page for the lifecycle controller.
pub trait PageView {
    fn apply(&self, f: impl FnOnce(&mut PageState));
    fn snapshot(&self) -> PageState;
}

impl PageView for RwSignal<PageState> {
    fn apply(&self, f: impl FnOnce(&mut PageState)) {
        self.update(f);
    }

    fn snapshot(&self) -> PageState {
        self.get_untracked()
    }
}
