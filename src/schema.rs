//! Schema types fetched from the content management API
//!
//! These are the read-only inputs of a compiler run. They are parsed eagerly
//! into typed structs at the boundary; an element type the generator does not
//! know survives parsing as [`ElementKind::Unknown`] so the compiler can report it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type tag of a content element
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ElementKind {
    Text,
    RichText,
    Number,
    MultipleChoice,
    DateTime,
    Asset,
    /// Wire name `modular_content`
    LinkedItems,
    Subpages,
    Taxonomy,
    UrlSlug,
    Custom,
    /// Documentation only, never becomes a property
    Guidelines,
    /// Reference to a content type snippet
    Snippet,
    /// Type tag this generator has no mapping for
    Unknown(String),
}

impl ElementKind {
    /// Wire name of this kind
    pub fn as_str(&self) -> &str {
        match self {
            ElementKind::Text => "text",
            ElementKind::RichText => "rich_text",
            ElementKind::Number => "number",
            ElementKind::MultipleChoice => "multiple_choice",
            ElementKind::DateTime => "date_time",
            ElementKind::Asset => "asset",
            ElementKind::LinkedItems => "modular_content",
            ElementKind::Subpages => "subpages",
            ElementKind::Taxonomy => "taxonomy",
            ElementKind::UrlSlug => "url_slug",
            ElementKind::Custom => "custom",
            ElementKind::Guidelines => "guidelines",
            ElementKind::Snippet => "snippet",
            ElementKind::Unknown(tag) => tag,
        }
    }

    /// Whether this kind references other content items
    pub fn is_item_reference(&self) -> bool {
        matches!(self, ElementKind::LinkedItems | ElementKind::Subpages)
    }
}

impl From<String> for ElementKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "text" => ElementKind::Text,
            "rich_text" => ElementKind::RichText,
            "number" => ElementKind::Number,
            "multiple_choice" => ElementKind::MultipleChoice,
            "date_time" => ElementKind::DateTime,
            "asset" => ElementKind::Asset,
            "modular_content" | "linked_items" => ElementKind::LinkedItems,
            "subpages" => ElementKind::Subpages,
            "taxonomy" => ElementKind::Taxonomy,
            "url_slug" => ElementKind::UrlSlug,
            "custom" => ElementKind::Custom,
            "guidelines" => ElementKind::Guidelines,
            "snippet" => ElementKind::Snippet,
            _ => ElementKind::Unknown(tag),
        }
    }
}

impl From<ElementKind> for String {
    fn from(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Unknown(tag) => tag,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to another schema object, either by id or by codename
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference {
    Id { id: String },
    Codename { codename: String },
}

impl Reference {
    pub fn id(id: impl Into<String>) -> Self {
        Reference::Id { id: id.into() }
    }

    pub fn codename(codename: impl Into<String>) -> Self {
        Reference::Codename {
            codename: codename.into(),
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Id { id } => write!(f, "id '{}'", id),
            Reference::Codename { codename } => write!(f, "codename '{}'", codename),
        }
    }
}

/// Condition of an item count limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitCondition {
    AtLeast,
    AtMost,
    Exactly,
}

/// Bound on how many items a linked items or subpages element may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemCountLimit {
    pub condition: LimitCondition,
    pub value: u32,
}

impl ItemCountLimit {
    pub fn at_least(value: u32) -> Self {
        Self { condition: LimitCondition::AtLeast, value }
    }

    pub fn at_most(value: u32) -> Self {
        Self { condition: LimitCondition::AtMost, value }
    }

    pub fn exactly(value: u32) -> Self {
        Self { condition: LimitCondition::Exactly, value }
    }

    /// Limit in effect for an element; a missing limit means "at least one"
    pub fn effective(limit: Option<ItemCountLimit>) -> Self {
        limit.unwrap_or_else(|| Self::at_least(1))
    }

    /// True when the element can hold at most one item
    pub fn is_single_item(&self) -> bool {
        self.value == 1
            && matches!(self.condition, LimitCondition::AtMost | LimitCondition::Exactly)
    }
}

/// A single content element of a content type or snippet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSchema {
    pub codename: String,

    #[serde(rename = "type")]
    pub kind: ElementKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Content types a linked items or subpages element accepts
    #[serde(default, alias = "allowed_types", skip_serializing_if = "Vec::is_empty")]
    pub allowed_content_types: Vec<Reference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_count_limit: Option<ItemCountLimit>,
}

impl ElementSchema {
    pub fn new(codename: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            codename: codename.into(),
            kind,
            id: None,
            external_id: None,
            name: None,
            allowed_content_types: Vec::new(),
            item_count_limit: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    pub fn with_allowed_types(mut self, allowed: impl IntoIterator<Item = Reference>) -> Self {
        self.allowed_content_types = allowed.into_iter().collect();
        self
    }

    pub fn with_item_count_limit(mut self, limit: ItemCountLimit) -> Self {
        self.item_count_limit = Some(limit);
        self
    }
}

/// A content type: a named, ordered list of elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentTypeSchema {
    pub id: String,
    pub codename: String,
    pub name: String,
    #[serde(default)]
    pub elements: Vec<ElementSchema>,
}

impl ContentTypeSchema {
    pub fn new(id: impl Into<String>, codename: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            codename: codename.into(),
            name: name.into(),
            elements: Vec::new(),
        }
    }

    pub fn with_element(mut self, element: ElementSchema) -> Self {
        self.elements.push(element);
        self
    }

    /// Whether this content type is the target of a reference
    pub fn matches(&self, reference: &Reference) -> bool {
        match reference {
            Reference::Id { id } => &self.id == id,
            Reference::Codename { codename } => &self.codename == codename,
        }
    }
}

/// A content type snippet: a reusable group of elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnippetSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub codename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub elements: Vec<ElementSchema>,
}

impl SnippetSchema {
    pub fn new(codename: impl Into<String>) -> Self {
        Self {
            id: None,
            codename: codename.into(),
            name: None,
            elements: Vec::new(),
        }
    }

    pub fn with_element(mut self, element: ElementSchema) -> Self {
        self.elements.push(element);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_kind_wire_names() {
        let element: ElementSchema =
            serde_json::from_str(r#"{"codename": "related", "type": "modular_content"}"#).unwrap();
        assert_eq!(element.kind, ElementKind::LinkedItems);

        let unknown: ElementSchema =
            serde_json::from_str(r#"{"codename": "x", "type": "hologram"}"#).unwrap();
        assert_eq!(unknown.kind, ElementKind::Unknown("hologram".to_string()));
        assert_eq!(unknown.kind.to_string(), "hologram");
    }

    #[test]
    fn test_reference_forms() {
        let element: ElementSchema = serde_json::from_str(
            r#"{
                "codename": "related",
                "type": "modular_content",
                "allowed_content_types": [{"id": "abc"}, {"codename": "article"}],
                "item_count_limit": {"condition": "exactly", "value": 1}
            }"#,
        )
        .unwrap();

        assert_eq!(
            element.allowed_content_types,
            vec![Reference::id("abc"), Reference::codename("article")]
        );
        assert_eq!(element.item_count_limit, Some(ItemCountLimit::exactly(1)));
    }

    #[test]
    fn test_effective_limit() {
        assert_eq!(ItemCountLimit::effective(None), ItemCountLimit::at_least(1));
        assert!(ItemCountLimit::at_most(1).is_single_item());
        assert!(ItemCountLimit::exactly(1).is_single_item());
        assert!(!ItemCountLimit::at_least(1).is_single_item());
        assert!(!ItemCountLimit::at_most(3).is_single_item());
    }

    #[test]
    fn test_content_type_matches_reference() {
        let article = ContentTypeSchema::new("t-1", "article", "Article");
        assert!(article.matches(&Reference::id("t-1")));
        assert!(article.matches(&Reference::codename("article")));
        assert!(!article.matches(&Reference::codename("t-1")));
    }
}
