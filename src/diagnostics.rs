//! Diagnostics
//!
//! Warnings produced while compiling content types. Each diagnostic carries a
//! human readable message whose wording is stable; tooling downstream matches
//! on these strings, so the templates must not change.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Diagnostic Codes
// =============================================================================

/// Diagnostic code for categorizing warnings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticCode {
    /// Content type codename can't become a class name
    SkippedContentType,
    /// Element codename can't become a property identifier
    InvalidElementIdentifier,
    /// Two elements resolve to the same property codename
    DuplicateElement,
    /// Element type has no mapping in the active dialect
    UnknownElementType,
    /// Nothing was left to generate
    NoContentTypes,
}

impl DiagnosticCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SkippedContentType => "W001",
            Self::InvalidElementIdentifier => "W002",
            Self::DuplicateElement => "W003",
            Self::UnknownElementType => "W004",
            Self::NoContentTypes => "W005",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Diagnostic Item
// =============================================================================

/// A single diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticItem {
    pub code: DiagnosticCode,
    /// Human-readable message, verbatim
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
}

impl DiagnosticItem {
    pub fn skipped_content_type(codename: &str) -> Self {
        Self {
            code: DiagnosticCode::SkippedContentType,
            message: format!(
                "Skipping Content Type '{}'. Can't create a valid identifier from its name.",
                codename
            ),
            content_type: Some(codename.to_string()),
            element: None,
        }
    }

    pub fn invalid_element_identifier(content_type: &str, codename: &str) -> Self {
        Self {
            code: DiagnosticCode::InvalidElementIdentifier,
            message: format!(
                "Can't create a valid identifier from '{}'. Skipping element.",
                codename
            ),
            content_type: Some(content_type.to_string()),
            element: Some(codename.to_string()),
        }
    }

    pub fn duplicate_element(class_name: &str, codename: &str) -> Self {
        Self {
            code: DiagnosticCode::DuplicateElement,
            message: format!(
                "Element '{}' is already present in Content Type '{}'.",
                codename, class_name
            ),
            content_type: Some(class_name.to_string()),
            element: Some(codename.to_string()),
        }
    }

    pub fn unknown_element_type(kind: &str, class_name: &str, codename: &str) -> Self {
        Self {
            code: DiagnosticCode::UnknownElementType,
            message: format!(
                "Skipping unknown Content Element type '{}'. (Content Type: '{}', Element Codename: '{}').",
                kind, class_name, codename
            ),
            content_type: Some(class_name.to_string()),
            element: Some(codename.to_string()),
        }
    }

    pub fn no_content_types(project_id: &str) -> Self {
        Self {
            code: DiagnosticCode::NoContentTypes,
            message: format!("No content type available for the project ({}).", project_id),
            content_type: None,
            element: None,
        }
    }
}

impl fmt::Display for DiagnosticItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// =============================================================================
// Sinks
// =============================================================================

/// Receives diagnostics in the order they are produced
pub trait DiagnosticSink {
    fn report(&mut self, item: DiagnosticItem);
}

/// Any `FnMut(&str)` is a sink receiving the verbatim message
impl<F: FnMut(&str)> DiagnosticSink for F {
    fn report(&mut self, item: DiagnosticItem) {
        self(&item.message)
    }
}

/// Collection of diagnostics from a compiler run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Diagnostics {
    items: Vec<DiagnosticItem>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[DiagnosticItem] {
        &self.items
    }

    /// Messages in the order they were reported
    pub fn messages(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.message.as_str()).collect()
    }

    pub fn count(&self, code: DiagnosticCode) -> usize {
        self.items.iter().filter(|item| item.code == code).count()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl DiagnosticSink for Diagnostics {
    fn report(&mut self, item: DiagnosticItem) {
        self.items.push(item);
    }
}
