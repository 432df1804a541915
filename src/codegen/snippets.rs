//! Snippet Expansion
//!
//! Flattens a snippet reference element into the concrete elements of the
//! referenced snippet. Guidelines never survive expansion.

use crate::error::{ModelError, Result};
use crate::schema::{ElementKind, ElementSchema, SnippetSchema};

/// Expand a snippet reference element.
///
/// Returns `Ok(None)` when `element` is not a snippet reference. Fails with
/// [`ModelError::MissingSnippet`] when no snippet has the element's codename.
pub fn expand_snippet<'a>(
    element: &ElementSchema,
    snippets: &'a [SnippetSchema],
) -> Result<Option<Vec<&'a ElementSchema>>> {
    if element.kind != ElementKind::Snippet {
        return Ok(None);
    }

    let snippet = snippets
        .iter()
        .find(|snippet| snippet.codename == element.codename)
        .ok_or_else(|| ModelError::MissingSnippet {
            codename: element.codename.clone(),
        })?;

    let elements: Vec<&ElementSchema> = snippet
        .elements
        .iter()
        .filter(|e| e.kind != ElementKind::Guidelines)
        .collect();

    tracing::debug!(
        snippet = %snippet.codename,
        elements = elements.len(),
        "expanded snippet"
    );

    Ok(Some(elements))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata_snippet() -> SnippetSchema {
        SnippetSchema::new("metadata")
            .with_element(ElementSchema::new("metadata__title", ElementKind::Text))
            .with_element(ElementSchema::new("metadata__howto", ElementKind::Guidelines))
            .with_element(ElementSchema::new("metadata__keywords", ElementKind::Taxonomy))
    }

    #[test]
    fn test_non_snippet_is_not_expanded() {
        let element = ElementSchema::new("title", ElementKind::Text);
        assert!(expand_snippet(&element, &[metadata_snippet()]).unwrap().is_none());
    }

    #[test]
    fn test_expansion_drops_guidelines() {
        let snippets = [metadata_snippet()];
        let element = ElementSchema::new("metadata", ElementKind::Snippet);
        let expanded = expand_snippet(&element, &snippets).unwrap().unwrap();

        let codenames: Vec<&str> = expanded.iter().map(|e| e.codename.as_str()).collect();
        assert_eq!(codenames, vec!["metadata__title", "metadata__keywords"]);
    }

    #[test]
    fn test_missing_snippet() {
        let element = ElementSchema::new("seo", ElementKind::Snippet);

        for snippets in [vec![], vec![metadata_snippet()]] {
            match expand_snippet(&element, &snippets) {
                Err(ModelError::MissingSnippet { codename }) => assert_eq!(codename, "seo"),
                other => panic!("Expected MissingSnippet, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_empty_snippet_expands_to_nothing() {
        let snippets = [SnippetSchema::new("empty")
            .with_element(ElementSchema::new("empty__note", ElementKind::Guidelines))];
        let element = ElementSchema::new("empty", ElementKind::Snippet);
        assert!(expand_snippet(&element, &snippets).unwrap().unwrap().is_empty());
    }
}
