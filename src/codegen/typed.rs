//! Typed Link Resolution
//!
//! Resolves a linked items or subpages element to a strongly typed property
//! when its shape allows it:
//!
//! | allowed types | item count limit        | result                               |
//! |---------------|-------------------------|--------------------------------------|
//! | exactly one   | exactly 1 / at most 1   | single reference `Target`            |
//! | exactly one   | anything else (or none) | collection `IEnumerable<Target>`     |
//! | none or many  | any                     | `None`, caller keeps the weak type   |
//!
//! A collection property is keyed `{element}_{TargetClass}` so it cannot
//! clash with the element's own weak property. A single reference is keyed
//! by the target's codename.

use crate::error::{ModelError, Result};
use crate::schema::{ContentTypeSchema, ElementSchema, ItemCountLimit};

use super::class::Property;
use super::config::DialectOptions;
use super::names::sanitize;

/// Try to resolve a strongly typed property for a linked items or subpages element.
///
/// Returns `Ok(None)` when the element may link more than one content type.
/// Fails with [`ModelError::AllowedTypeNotFound`] when an allowed type is
/// missing from `content_types`, and with [`ModelError::UnsupportedOperation`]
/// when typed links are disabled.
pub fn try_resolve_typed_link(
    element: &ElementSchema,
    content_types: &[ContentTypeSchema],
    options: &DialectOptions,
) -> Result<Option<Property>> {
    if !element.kind.is_item_reference() {
        return Err(ModelError::InvalidArgument(format!(
            "element '{}' of type '{}' does not link content items",
            element.codename, element.kind
        )));
    }
    if content_types.is_empty() {
        return Err(ModelError::InvalidArgument(
            "typed link resolution needs the content types of the project".to_string(),
        ));
    }
    if !options.typed_links {
        return Err(ModelError::UnsupportedOperation(
            "typed link resolution is disabled".to_string(),
        ));
    }

    let allowed = resolve_allowed_types(element, content_types)?;
    let target = match allowed.as_slice() {
        [target] => *target,
        _ => {
            tracing::debug!(
                element = %element.codename,
                allowed = allowed.len(),
                "no single allowed type, keeping weak type"
            );
            return Ok(None);
        }
    };

    let class_name = sanitize(&target.codename)?;
    let limit = ItemCountLimit::effective(element.item_count_limit);

    let property = if limit.is_single_item() {
        let type_name = class_name.to_string();
        Property::new(target.codename.clone(), class_name, type_name)
    } else {
        let codename = format!("{}_{}", element.codename, class_name);
        let identifier = sanitize(&codename)?;
        let type_name = options.dialect.collection_of(class_name.as_str());
        Property::new(codename, identifier, type_name)
    };

    Ok(Some(property))
}

fn resolve_allowed_types<'a>(
    element: &ElementSchema,
    content_types: &'a [ContentTypeSchema],
) -> Result<Vec<&'a ContentTypeSchema>> {
    element
        .allowed_content_types
        .iter()
        .map(|reference| {
            content_types
                .iter()
                .find(|content_type| content_type.matches(reference))
                .ok_or_else(|| ModelError::AllowedTypeNotFound {
                    reference: reference.to_string(),
                    element: element.codename.clone(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ElementKind, Reference};

    fn universe() -> Vec<ContentTypeSchema> {
        vec![
            ContentTypeSchema::new("t-article", "article", "Article"),
            ContentTypeSchema::new("t-author", "author", "Author"),
        ]
    }

    fn typed() -> DialectOptions {
        DialectOptions::delivery().with_typed_links(true)
    }

    fn related(allowed: Vec<Reference>) -> ElementSchema {
        ElementSchema::new("related", ElementKind::LinkedItems).with_allowed_types(allowed)
    }

    #[test]
    fn test_single_type_unbounded_is_collection() {
        let element = related(vec![Reference::codename("article")]);
        let property = try_resolve_typed_link(&element, &universe(), &typed())
            .unwrap()
            .unwrap();

        assert_eq!(property.codename, "related_Article");
        assert_eq!(property.identifier, "RelatedArticle");
        assert_eq!(property.type_name, "IEnumerable<Article>");
    }

    #[test]
    fn test_single_type_at_least_is_collection() {
        let element = related(vec![Reference::id("t-article")])
            .with_item_count_limit(ItemCountLimit::at_least(2));
        let property = try_resolve_typed_link(&element, &universe(), &typed())
            .unwrap()
            .unwrap();
        assert_eq!(property.type_name, "IEnumerable<Article>");
    }

    #[test]
    fn test_single_type_single_item_is_reference() {
        for limit in [ItemCountLimit::exactly(1), ItemCountLimit::at_most(1)] {
            let element = related(vec![Reference::codename("article")]).with_item_count_limit(limit);
            let property = try_resolve_typed_link(&element, &universe(), &typed())
                .unwrap()
                .unwrap();

            assert_eq!(property.codename, "article");
            assert_eq!(property.identifier, "Article");
            assert_eq!(property.type_name, "Article");
        }
    }

    #[test]
    fn test_multiple_types_are_not_typed() {
        for limit in [None, Some(ItemCountLimit::exactly(1)), Some(ItemCountLimit::at_least(1))] {
            let mut element = related(vec![Reference::codename("article"), Reference::id("t-author")]);
            element.item_count_limit = limit;
            assert!(try_resolve_typed_link(&element, &universe(), &typed())
                .unwrap()
                .is_none());
        }
    }

    #[test]
    fn test_no_allowed_types_are_not_typed() {
        let element = related(vec![]);
        assert!(try_resolve_typed_link(&element, &universe(), &typed())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_unknown_allowed_type() {
        let element = related(vec![Reference::codename("article"), Reference::id("t-gone")]);
        match try_resolve_typed_link(&element, &universe(), &typed()) {
            Err(ModelError::AllowedTypeNotFound { reference, element }) => {
                assert_eq!(reference, "id 't-gone'");
                assert_eq!(element, "related");
            }
            other => panic!("Expected AllowedTypeNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_subpages_resolve_like_linked_items() {
        let element = ElementSchema::new("children", ElementKind::Subpages)
            .with_allowed_types(vec![Reference::codename("article")]);
        let property = try_resolve_typed_link(&element, &universe(), &typed())
            .unwrap()
            .unwrap();
        assert_eq!(property.codename, "children_Article");
    }

    #[test]
    fn test_preconditions() {
        let element = related(vec![Reference::codename("article")]);

        assert!(matches!(
            try_resolve_typed_link(&element, &universe(), &DialectOptions::delivery()),
            Err(ModelError::UnsupportedOperation(_))
        ));
        assert!(matches!(
            try_resolve_typed_link(&element, &[], &typed()),
            Err(ModelError::InvalidArgument(_))
        ));

        let text = ElementSchema::new("title", ElementKind::Text);
        assert!(matches!(
            try_resolve_typed_link(&text, &universe(), &typed()),
            Err(ModelError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_inputs_are_untouched() {
        let types = universe();
        let before = types.clone();
        let element = related(vec![Reference::codename("author")]);
        try_resolve_typed_link(&element, &types, &typed()).unwrap();
        assert_eq!(types, before);
    }
}
