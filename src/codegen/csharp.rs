//! C# Class Renderer
//!
//! Renders finished class models as C# partial classes.
//!
//! Key constraints:
//! - This module ONLY receives ClassModel + RenderContext - no raw schema
//! - Identifiers and type names are already resolved by the compiler

use super::class::{ClassModel, Property};
use super::compiler::CompiledContentType;
use super::config::Dialect;
use super::names::sanitize;

// =============================================================================
// Public API
// =============================================================================

/// Settings shared by every rendered file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub namespace: String,
    pub dialect: Dialect,
}

impl RenderContext {
    pub fn new(namespace: impl Into<String>, dialect: Dialect) -> Self {
        Self {
            namespace: namespace.into(),
            dialect,
        }
    }
}

/// Turns class models into source text
pub trait Renderer {
    /// File extension of rendered sources, without the dot
    fn extension(&self) -> &'static str;

    fn render_class(&self, model: &ClassModel, ctx: &RenderContext) -> String;

    fn render_typed_class(&self, model: &ClassModel, ctx: &RenderContext) -> String;

    /// Lookup from content type codename to generated class
    fn render_type_provider(&self, compiled: &[CompiledContentType], ctx: &RenderContext) -> String;
}

/// Renderer for C# partial classes
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpRenderer;

/// Class name of the rendered type provider
pub const TYPE_PROVIDER_CLASS: &str = "CustomTypeProvider";

const HEADER: &str = "\
// <auto-generated>
// This code was generated by a tool.
//
// Changes to this file may cause incorrect behavior and will be lost if
// the code is regenerated.
// </auto-generated>
";

impl Renderer for CSharpRenderer {
    fn extension(&self) -> &'static str {
        "cs"
    }

    fn render_class(&self, model: &ClassModel, ctx: &RenderContext) -> String {
        let mut body = String::new();

        body.push_str(&format!(
            "        public const string Codename = \"{}\";\n",
            escape(model.source_codename())
        ));
        for codename in model.property_codename_constants() {
            body.push_str(&format!(
                "        public const string {} = \"{}\";\n",
                constant_name(model, codename),
                escape(codename)
            ));
        }

        for property in model.properties() {
            body.push('\n');
            emit_property(&mut body, property, ctx.dialect);
        }

        wrap_class(model, ctx, &body)
    }

    fn render_typed_class(&self, model: &ClassModel, ctx: &RenderContext) -> String {
        let mut body = String::new();
        for (index, property) in model.properties().iter().enumerate() {
            if index > 0 {
                body.push('\n');
            }
            emit_property(&mut body, property, ctx.dialect);
        }
        wrap_class(model, ctx, &body)
    }

    fn render_type_provider(&self, compiled: &[CompiledContentType], ctx: &RenderContext) -> String {
        let mut output = String::new();
        output.push_str(HEADER);
        output.push('\n');
        output.push_str("using System;\n");
        output.push_str("using System.Collections.Generic;\n");
        output.push_str("using System.Linq;\n");
        output.push_str(&format!("using {};\n\n", abstractions_namespace(ctx.dialect)));
        output.push_str(&format!("namespace {}\n{{\n", ctx.namespace));
        output.push_str(&format!(
            "    public class {} : ITypeProvider\n    {{\n",
            TYPE_PROVIDER_CLASS
        ));
        output.push_str(
            "        private static readonly Dictionary<Type, string> _codenames = new Dictionary<Type, string>\n",
        );
        output.push_str("        {\n");
        for content_type in compiled {
            let model = content_type.model();
            output.push_str(&format!(
                "            {{typeof({}), \"{}\"}},\n",
                model.class_name(),
                escape(model.source_codename())
            ));
        }
        output.push_str("        };\n\n");
        output.push_str("        public Type GetType(string contentType)\n        {\n");
        output.push_str(
            "            return _codenames.Keys.FirstOrDefault(type => GetCodename(type).Equals(contentType));\n",
        );
        output.push_str("        }\n\n");
        output.push_str("        public string GetCodename(Type contentType)\n        {\n");
        output.push_str(
            "            return _codenames.TryGetValue(contentType, out var codename) ? codename : null;\n",
        );
        output.push_str("        }\n");
        output.push_str("    }\n}\n");
        output
    }
}

// =============================================================================
// Emission Helpers
// =============================================================================

fn wrap_class(model: &ClassModel, ctx: &RenderContext, body: &str) -> String {
    let mut output = String::new();
    output.push_str(HEADER);
    output.push('\n');
    output.push_str("using System;\n");
    output.push_str("using System.Collections.Generic;\n");
    output.push_str(&format!("using {};\n", abstractions_namespace(ctx.dialect)));
    if ctx.dialect == Dialect::Management {
        output.push_str("using Newtonsoft.Json;\n");
    }
    output.push('\n');
    output.push_str(&format!("namespace {}\n{{\n", ctx.namespace));
    output.push_str(&format!("    public partial class {}\n    {{\n", model.class_name()));
    output.push_str(body);
    output.push_str("    }\n}\n");
    output
}

fn emit_property(output: &mut String, property: &Property, dialect: Dialect) {
    if dialect == Dialect::Management {
        output.push_str(&format!("        [JsonProperty(\"{}\")]\n", escape(&property.codename)));
        if let Some(ref id) = property.id {
            output.push_str(&format!("        [KontentElementId(\"{}\")]\n", escape(id)));
        }
        if let Some(ref external_id) = property.external_id {
            output.push_str(&format!("        [KontentElementExternalId(\"{}\")]\n", escape(external_id)));
        }
    }
    output.push_str(&format!(
        "        public {} {} {{ get; set; }}\n",
        property.type_name, property.identifier
    ));
}

/// Constant name for a codename, preferring the owning property's name
fn constant_name(model: &ClassModel, codename: &str) -> String {
    match model.property(codename) {
        Some(property) => property.codename_constant_name(),
        None => match sanitize(codename) {
            Ok(identifier) => format!("{}Codename", identifier),
            Err(_) => "InvalidCodename".to_string(),
        },
    }
}

/// Escape text for a regular C# string literal
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn abstractions_namespace(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::Delivery => "Kontent.Ai.Delivery.Abstractions",
        Dialect::Management => "Kontent.Ai.Management.Models.LanguageVariants.Elements",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::config::DialectOptions;
    use crate::codegen::SchemaCompiler;
    use crate::schema::{ContentTypeSchema, ElementKind, ElementSchema, Reference};

    fn compiled(options: DialectOptions) -> Vec<CompiledContentType> {
        let article = ContentTypeSchema::new("t-1", "article", "Article")
            .with_element(ElementSchema::new("title", ElementKind::Text).with_id("e-1"))
            .with_element(
                ElementSchema::new("related", ElementKind::LinkedItems)
                    .with_allowed_types(vec![Reference::codename("article")]),
            );
        let (compiled, _) = SchemaCompiler::new(&[article], &[], options)
            .compile_collecting()
            .unwrap();
        compiled
    }

    #[test]
    fn test_render_delivery_class() {
        let ctx = RenderContext::new("Models", Dialect::Delivery);
        let code = CSharpRenderer.render_class(compiled(DialectOptions::delivery())[0].model(), &ctx);

        assert!(code.starts_with("// <auto-generated>"));
        assert!(code.contains("namespace Models\n{"));
        assert!(code.contains("    public partial class Article\n"));
        assert!(code.contains("public const string Codename = \"article\";"));
        assert!(code.contains("public const string TitleCodename = \"title\";"));
        assert!(code.contains("public string Title { get; set; }"));
        assert!(code.contains("public IContentItemSystemAttributes System { get; set; }"));
        assert!(!code.contains("JsonProperty"));
    }

    #[test]
    fn test_render_management_class() {
        let ctx = RenderContext::new("Models", Dialect::Management);
        let code = CSharpRenderer.render_class(compiled(DialectOptions::management())[0].model(), &ctx);

        assert!(code.contains("[JsonProperty(\"title\")]"));
        assert!(code.contains("[KontentElementId(\"e-1\")]"));
        assert!(code.contains("public TextElement Title { get; set; }"));
        assert!(!code.contains("System { get; set; }"));
    }

    #[test]
    fn test_render_typed_class() {
        let ctx = RenderContext::new("Models", Dialect::Delivery);
        let compiled = compiled(DialectOptions::delivery().with_typed_links(true));
        let code = CSharpRenderer.render_typed_class(compiled[0].typed_model().unwrap(), &ctx);

        assert!(code.contains("public IEnumerable<Article> RelatedArticle { get; set; }"));
        assert!(!code.contains("Codename"));
    }

    #[test]
    fn test_typed_class_is_a_separate_class() {
        let ctx = RenderContext::new("Models", Dialect::Delivery);
        let compiled = compiled(DialectOptions::delivery().with_typed_links(true));
        let code = CSharpRenderer.render_typed_class(compiled[0].typed_model().unwrap(), &ctx);

        assert!(code.contains("    public partial class ArticleTyped\n"));
        assert!(!code.contains("public partial class Article\n"));
    }

    #[test]
    fn test_string_literals_are_escaped() {
        assert_eq!(escape(r#"ext "id" \ 1"#), r#"ext \"id\" \\ 1"#);

        let page = ContentTypeSchema::new("t-1", "page", "Page").with_element(
            ElementSchema::new("title", ElementKind::Text).with_external_id(r#"legacy "title""#),
        );
        let (compiled, _) = SchemaCompiler::new(&[page], &[], DialectOptions::management())
            .compile_collecting()
            .unwrap();
        let ctx = RenderContext::new("Models", Dialect::Management);
        let code = CSharpRenderer.render_class(compiled[0].model(), &ctx);

        assert!(code.contains(r#"[KontentElementExternalId("legacy \"title\"")]"#));
    }

    #[test]
    fn test_render_type_provider() {
        let ctx = RenderContext::new("Models", Dialect::Delivery);
        let code = CSharpRenderer.render_type_provider(&compiled(DialectOptions::delivery()), &ctx);

        assert!(code.contains("public class CustomTypeProvider : ITypeProvider"));
        assert!(code.contains("{typeof(Article), \"article\"},"));
    }
}
