//! Codegen Configuration
//!
//! Two output dialects share one pipeline:
//! - Delivery: lightweight read models, weak interfaces for linked items
//! - Management: strict element wrapper types carrying element ids
//!
//! Structured flags pick a richer type for rich text, date-time and linked
//! items; each flag only affects its own element kind.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ModelError;
use crate::schema::ElementKind;

// =============================================================================
// Dialect
// =============================================================================

/// Output dialect selecting the element type mapping table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Delivery,
    Management,
}

impl Dialect {
    /// Wrap a type name in this dialect's collection type
    pub fn collection_of(&self, item_type: &str) -> String {
        format!("IEnumerable<{}>", item_type)
    }

    /// Type of the implicit `system` property, if the dialect has one
    pub fn system_property_type(&self) -> Option<&'static str> {
        match self {
            Dialect::Delivery => Some("IContentItemSystemAttributes"),
            Dialect::Management => None,
        }
    }
}

// =============================================================================
// Structured Model Flags
// =============================================================================

bitflags! {
    /// Element kinds that resolve to structured content types
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StructuredModelFlags: u32 {
        /// Every kind that has a structured variant
        const ALL = 1 << 0;
        const RICH_TEXT = 1 << 1;
        const DATE_TIME = 1 << 2;
        const MODULAR_CONTENT = 1 << 3;
    }
}

impl StructuredModelFlags {
    /// Whether `kind` should resolve to its structured variant
    pub fn applies_to(&self, kind: &ElementKind) -> bool {
        let flag = match kind {
            ElementKind::RichText => Self::RICH_TEXT,
            ElementKind::DateTime => Self::DATE_TIME,
            ElementKind::LinkedItems => Self::MODULAR_CONTENT,
            _ => return false,
        };
        self.intersects(flag | Self::ALL)
    }

    /// Parse a list of flag names such as `["RichText", "DateTime"]`
    pub fn from_names<I, S>(names: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().try_fold(Self::empty(), |flags, name| {
            let flag = match name.as_ref().trim() {
                "" => Self::empty(),
                "True" | "true" | "All" | "all" => Self::ALL,
                "RichText" | "rich_text" => Self::RICH_TEXT,
                "DateTime" | "date_time" => Self::DATE_TIME,
                "ModularContent" | "modular_content" | "LinkedItems" | "linked_items" => {
                    Self::MODULAR_CONTENT
                }
                other => {
                    return Err(ModelError::InvalidArgument(format!(
                        "unknown structured model flag '{}'",
                        other
                    )))
                }
            };
            Ok(flags | flag)
        })
    }
}

impl FromStr for StructuredModelFlags {
    type Err = ModelError;

    /// Comma separated flag names, e.g. `RichText,DateTime`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_names(s.split(','))
    }
}

// =============================================================================
// Dialect Options
// =============================================================================

/// Options steering type resolution for one compiler run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DialectOptions {
    pub dialect: Dialect,
    pub structured: StructuredModelFlags,
    /// Emit strongly typed linked item properties in a separate class variant
    pub typed_links: bool,
}

impl DialectOptions {
    pub fn delivery() -> Self {
        Self {
            dialect: Dialect::Delivery,
            ..Self::default()
        }
    }

    pub fn management() -> Self {
        Self {
            dialect: Dialect::Management,
            ..Self::default()
        }
    }

    pub fn with_structured(mut self, structured: StructuredModelFlags) -> Self {
        self.structured = structured;
        self
    }

    pub fn with_typed_links(mut self, typed_links: bool) -> Self {
        self.typed_links = typed_links;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_only_affect_their_kind() {
        let date_time = StructuredModelFlags::DATE_TIME;
        assert!(date_time.applies_to(&ElementKind::DateTime));
        assert!(!date_time.applies_to(&ElementKind::RichText));
        assert!(!date_time.applies_to(&ElementKind::LinkedItems));
    }

    #[test]
    fn test_all_flag_covers_structured_kinds() {
        let all = StructuredModelFlags::ALL;
        assert!(all.applies_to(&ElementKind::RichText));
        assert!(all.applies_to(&ElementKind::DateTime));
        assert!(all.applies_to(&ElementKind::LinkedItems));
        assert!(!all.applies_to(&ElementKind::Text));
        assert!(!all.applies_to(&ElementKind::Subpages));
    }

    #[test]
    fn test_parse_flag_names() {
        let flags: StructuredModelFlags = "RichText, ModularContent".parse().unwrap();
        assert_eq!(
            flags,
            StructuredModelFlags::RICH_TEXT | StructuredModelFlags::MODULAR_CONTENT
        );
        assert_eq!(
            StructuredModelFlags::from_names(["True"]).unwrap(),
            StructuredModelFlags::ALL
        );
        assert!("Sparkles".parse::<StructuredModelFlags>().is_err());
    }

    #[test]
    fn test_dialect_system_property() {
        assert_eq!(
            Dialect::Delivery.system_property_type(),
            Some("IContentItemSystemAttributes")
        );
        assert_eq!(Dialect::Management.system_property_type(), None);
        assert_eq!(Dialect::Delivery.collection_of("Article"), "IEnumerable<Article>");
    }
}
