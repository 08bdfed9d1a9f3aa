//! Client-side state for the greeting page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `page` holds what is on screen, `error` normalises whatever ends up in the
//! error modal.

pub mod error;
pub mod page;
