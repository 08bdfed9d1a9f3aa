//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render regions of the greeting page straight from the shared
//! `PageState` signal and report user intent through callbacks.

pub mod modal;
pub mod update_greeting;
