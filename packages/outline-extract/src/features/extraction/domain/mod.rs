//! Extraction domain models

mod hierarchy;

pub use hierarchy::{Diagnostic, DiagnosticKind, Hierarchy};
