//! Content Model Generator
//!
//! Compiles the content type schemas of a headless CMS project into strongly
//! typed class models and renders them as source files.
//!
//! ## Features
//!
//! - **Identifier Sanitizing**: Arbitrary codenames become PascalCase identifiers
//! - **Two Dialects**: Loose delivery models or strict management models
//! - **Snippet Expansion**: Snippet elements are inlined into their content type
//! - **Typed Links**: Optional strongly typed linked item properties
//! - **Diagnostics**: Every skipped content type or element is reported
//!
//! ## Architecture
//!
//! ```text
//! schema/
//! ├── types/*.json       ──┐
//! └── snippets/*.json    ──┤ provider
//!                          ▼
//!                   codegen::compiler ──▶ diagnostics
//!                          ▼
//!                   codegen::csharp
//!                          ▼
//!                       output
//! ```

pub mod codegen;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod generator;
pub mod output;
pub mod provider;
pub mod schema;

pub use codegen::{ClassModel, CompiledContentType, Dialect, DialectOptions, Property, SchemaCompiler};
pub use config::GeneratorConfig;
pub use diagnostics::{DiagnosticCode, DiagnosticItem, DiagnosticSink, Diagnostics};
pub use error::{ModelError, Result};
pub use generator::{GenerationReport, ModelGenerator};
pub use output::{GeneratedFile, OutputWriter};
pub use provider::{DirectorySchemaProvider, SchemaProvider, StaticSchemaProvider};
pub use schema::{ContentTypeSchema, ElementKind, ElementSchema, ItemCountLimit, Reference, SnippetSchema};
