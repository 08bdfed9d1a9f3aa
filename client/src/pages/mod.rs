//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! `lifecycle` owns the page's orchestration and is independent of the DOM;
//! `greet` renders it and delegates details to `components`.

pub mod greet;
pub mod lifecycle;
