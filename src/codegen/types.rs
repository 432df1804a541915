//! Element Type Resolution
//!
//! Maps an element kind to the target type name for the active dialect.
//! Each dialect has its own fixed table; the delivery table additionally has
//! a structured variant for rich text, date-time and linked items.

use crate::error::{ModelError, Result};
use crate::schema::ElementKind;

use super::config::{Dialect, DialectOptions};

/// Lookup key into a dialect table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeKey<'a> {
    pub kind: &'a ElementKind,
    pub structured: bool,
}

impl<'a> TypeKey<'a> {
    /// Key for `kind` under the given options
    pub fn for_kind(kind: &'a ElementKind, options: &DialectOptions) -> Self {
        let structured =
            options.dialect == Dialect::Delivery && options.structured.applies_to(kind);
        Self { kind, structured }
    }
}

/// Resolve the target type name of an element kind.
///
/// Fails with [`ModelError::UnsupportedElementType`] for kinds without a
/// table entry, which includes guidelines and snippet references.
pub fn resolve_element_type(kind: &ElementKind, options: &DialectOptions) -> Result<String> {
    let key = TypeKey::for_kind(kind, options);
    let type_name = match options.dialect {
        Dialect::Delivery => delivery_type(key),
        Dialect::Management => management_type(key.kind),
    };

    type_name
        .map(str::to_string)
        .ok_or_else(|| ModelError::UnsupportedElementType {
            kind: kind.to_string(),
        })
}

fn delivery_type(key: TypeKey<'_>) -> Option<&'static str> {
    let type_name = match (key.kind, key.structured) {
        (ElementKind::Text, _) => "string",
        (ElementKind::RichText, false) => "string",
        (ElementKind::RichText, true) => "IRichTextContent",
        (ElementKind::Number, _) => "decimal?",
        (ElementKind::MultipleChoice, _) => "IEnumerable<IMultipleChoiceOption>",
        (ElementKind::DateTime, false) => "DateTime?",
        (ElementKind::DateTime, true) => "IDateTimeContent",
        (ElementKind::Asset, _) => "IEnumerable<IAsset>",
        (ElementKind::LinkedItems, false) => "IEnumerable<object>",
        (ElementKind::LinkedItems, true) => "IEnumerable<IContentItem>",
        (ElementKind::Subpages, _) => "IEnumerable<object>",
        (ElementKind::Taxonomy, _) => "IEnumerable<ITaxonomyTerm>",
        (ElementKind::UrlSlug, _) => "string",
        (ElementKind::Custom, _) => "string",
        (ElementKind::Guidelines | ElementKind::Snippet | ElementKind::Unknown(_), _) => {
            return None
        }
    };
    Some(type_name)
}

fn management_type(kind: &ElementKind) -> Option<&'static str> {
    let type_name = match kind {
        ElementKind::Text => "TextElement",
        ElementKind::RichText => "RichTextElement",
        ElementKind::Number => "NumberElement",
        ElementKind::MultipleChoice => "MultipleChoiceElement",
        ElementKind::DateTime => "DateTimeElement",
        ElementKind::Asset => "AssetElement",
        ElementKind::LinkedItems => "LinkedItemsElement",
        ElementKind::Subpages => "SubpagesElement",
        ElementKind::Taxonomy => "TaxonomyElement",
        ElementKind::UrlSlug => "UrlSlugElement",
        ElementKind::Custom => "CustomElement",
        ElementKind::Guidelines | ElementKind::Snippet | ElementKind::Unknown(_) => return None,
    };
    Some(type_name)
}
