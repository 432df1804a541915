//! Code Generation
//!
//! Resolves content type schemas into class models and renders them.
//!
//! Architecture:
//! - names / types / snippets / typed: pure resolvers, no shared state
//! - class: the per-content-type builder enforcing property uniqueness
//! - compiler: orchestrates the resolvers and reports diagnostics
//! - csharp: renders finished class models; never sees raw schema
//!
//! The key constraint: renderers only read finished [`ClassModel`]s.

pub mod class;
pub mod compiler;
pub mod config;
pub mod csharp;
pub mod names;
pub mod snippets;
pub mod typed;
pub mod types;

pub use class::{ClassModel, Property, SYSTEM_CODENAME};
pub use compiler::{CompiledContentType, SchemaCompiler};
pub use config::{Dialect, DialectOptions, StructuredModelFlags};
pub use csharp::{CSharpRenderer, RenderContext, Renderer};
pub use names::{is_valid_identifier, sanitize, Identifier};
pub use snippets::expand_snippet;
pub use typed::try_resolve_typed_link;
pub use types::{resolve_element_type, TypeKey};
