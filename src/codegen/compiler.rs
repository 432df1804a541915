//! Schema Compiler
//!
//! Walks content types → snippets → elements and builds one [`ClassModel`]
//! per content type, plus a typed variant holding strongly typed linked item
//! properties when typed links are enabled.
//!
//! Failure scope:
//! - invalid content type codename: the content type is skipped
//! - invalid element codename, unknown element type, duplicate property:
//!   the element is skipped
//! - missing snippet, unknown allowed type: the run fails
//!
//! Every skip is reported to the diagnostic sink and logged.
//! Content types are compiled independently of each other; only the shared,
//! read-only content type list is consulted across types.

use tracing::{debug, info, warn};

use crate::diagnostics::{DiagnosticItem, DiagnosticSink, Diagnostics};
use crate::error::{ModelError, Result};
use crate::schema::{ContentTypeSchema, ElementKind, ElementSchema, SnippetSchema};

use super::class::{ClassModel, Property};
use super::config::DialectOptions;
use super::names::sanitize;
use super::snippets::expand_snippet;
use super::typed::try_resolve_typed_link;
use super::types::resolve_element_type;

// =============================================================================
// Compiled Output
// =============================================================================

/// Appended to the class name of the typed variant
pub const TYPED_CLASS_SUFFIX: &str = "Typed";

/// Finished class models of one content type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledContentType {
    model: ClassModel,
    typed: Option<ClassModel>,
}

impl CompiledContentType {
    /// Class with the weakly typed element properties
    pub fn model(&self) -> &ClassModel {
        &self.model
    }

    /// Class variant with strongly typed linked item properties, if any
    pub fn typed_model(&self) -> Option<&ClassModel> {
        self.typed.as_ref()
    }

    pub fn codename(&self) -> &str {
        self.model.source_codename()
    }
}

// =============================================================================
// Schema Compiler
// =============================================================================

/// Compiles fetched schemas into class models
pub struct SchemaCompiler<'a> {
    content_types: &'a [ContentTypeSchema],
    snippets: &'a [SnippetSchema],
    options: DialectOptions,
}

impl<'a> SchemaCompiler<'a> {
    pub fn new(
        content_types: &'a [ContentTypeSchema],
        snippets: &'a [SnippetSchema],
        options: DialectOptions,
    ) -> Self {
        Self {
            content_types,
            snippets,
            options,
        }
    }

    pub fn options(&self) -> &DialectOptions {
        &self.options
    }

    /// Compile every content type, reporting skips to `sink`
    pub fn compile(&self, sink: &mut dyn DiagnosticSink) -> Result<Vec<CompiledContentType>> {
        let mut compiled = Vec::with_capacity(self.content_types.len());
        for content_type in self.content_types {
            if let Some(output) = self.compile_content_type(content_type, sink)? {
                compiled.push(output);
            }
        }

        info!(
            content_types = self.content_types.len(),
            compiled = compiled.len(),
            "schema compilation finished"
        );
        Ok(compiled)
    }

    /// Compile every content type, collecting diagnostics
    pub fn compile_collecting(&self) -> Result<(Vec<CompiledContentType>, Diagnostics)> {
        let mut diagnostics = Diagnostics::new();
        let compiled = self.compile(&mut diagnostics)?;
        Ok((compiled, diagnostics))
    }

    /// Compile one content type.
    ///
    /// Returns `Ok(None)` when the content type was skipped.
    pub fn compile_content_type(
        &self,
        content_type: &ContentTypeSchema,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Option<CompiledContentType>> {
        let class_name = match sanitize(&content_type.codename) {
            Ok(class_name) => class_name,
            Err(ModelError::InvalidIdentifier { .. }) => {
                report(sink, DiagnosticItem::skipped_content_type(&content_type.codename));
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let typed_name = class_name.with_suffix(TYPED_CLASS_SUFFIX);
        let mut model = ClassModel::with_class_name(&content_type.codename, class_name);
        let mut typed = ClassModel::with_class_name(&content_type.codename, typed_name);

        for element in self.concrete_elements(content_type)? {
            self.add_element(&mut model, &mut typed, element, sink)?;
        }

        if let Some(system_type) = self.options.dialect.system_property_type() {
            model.add_system_property_if_absent(system_type);
        }

        info!(
            content_type = %content_type.codename,
            class = %model.class_name(),
            properties = model.properties().len(),
            typed_properties = typed.properties().len(),
            "compiled content type"
        );

        Ok(Some(CompiledContentType {
            model,
            typed: (!typed.is_empty()).then_some(typed),
        }))
    }

    /// Elements of a content type with snippets expanded and guidelines dropped
    fn concrete_elements<'s>(
        &'s self,
        content_type: &'s ContentTypeSchema,
    ) -> Result<Vec<&'s ElementSchema>> {
        let mut elements = Vec::with_capacity(content_type.elements.len());
        for element in &content_type.elements {
            match expand_snippet(element, self.snippets)? {
                Some(expanded) => elements.extend(expanded),
                None if element.kind == ElementKind::Guidelines => {}
                None => elements.push(element),
            }
        }
        Ok(elements)
    }

    fn add_element(
        &self,
        model: &mut ClassModel,
        typed: &mut ClassModel,
        element: &ElementSchema,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<()> {
        let type_name = match resolve_element_type(&element.kind, &self.options) {
            Ok(type_name) => type_name,
            Err(ModelError::UnsupportedElementType { kind }) => {
                report(
                    sink,
                    DiagnosticItem::unknown_element_type(
                        &kind,
                        model.class_name().as_str(),
                        &element.codename,
                    ),
                );
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let property = match Property::from_element(element, type_name) {
            Ok(property) => property,
            Err(ModelError::InvalidIdentifier { .. }) => {
                report(
                    sink,
                    DiagnosticItem::invalid_element_identifier(
                        model.source_codename(),
                        &element.codename,
                    ),
                );
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        debug!(
            class = %model.class_name(),
            element = %element.codename,
            type_name = %property.type_name,
            "resolved element"
        );

        let class_name = model.class_name().to_string();
        if !add_property(model, property, true, &class_name, sink)? {
            return Ok(());
        }

        if self.options.typed_links && element.kind.is_item_reference() {
            match try_resolve_typed_link(element, self.content_types, &self.options) {
                Ok(Some(property)) => {
                    add_property(typed, property, false, &class_name, sink)?;
                }
                Ok(None) => {}
                // The base property stays; only the typed one is dropped
                Err(ModelError::InvalidIdentifier { text }) => {
                    warn!(
                        class = %class_name,
                        element = %element.codename,
                        target = %text,
                        "no typed property, target has no valid identifier"
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }
}

/// Add a property, reporting a collision instead of failing.
///
/// Collisions are reported against `content_type`, the base class name, for
/// the typed variant too. Returns whether the property was added.
fn add_property(
    model: &mut ClassModel,
    property: Property,
    with_constant: bool,
    content_type: &str,
    sink: &mut dyn DiagnosticSink,
) -> Result<bool> {
    let codename = property.codename.clone();
    let added = model
        .add_property(property)
        .and_then(|()| {
            if with_constant {
                model.add_property_codename_constant(codename.clone())
            } else {
                Ok(())
            }
        });

    match added {
        Ok(()) => Ok(true),
        Err(ModelError::DuplicateProperty { .. })
        | Err(ModelError::DuplicatePropertyCodenameConstant { .. }) => {
            report(sink, DiagnosticItem::duplicate_element(content_type, &codename));
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

fn report(sink: &mut dyn DiagnosticSink, item: DiagnosticItem) {
    warn!(code = %item.code, "{}", item.message);
    sink.report(item);
}
