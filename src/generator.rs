//! Generation Pipeline
//!
//! provider → compiler → renderer → writer.
//!
//! Compiler diagnostics are forwarded to the caller's sink. When nothing
//! compiles, a single "no content types" diagnostic is emitted and no file is
//! written.

use std::path::PathBuf;
use tracing::{info, warn};

use crate::codegen::{CSharpRenderer, CompiledContentType, RenderContext, Renderer, SchemaCompiler};
use crate::config::GeneratorConfig;
use crate::diagnostics::{DiagnosticItem, DiagnosticSink, Diagnostics};
use crate::error::Result;
use crate::output::{GeneratedFile, OutputWriter};
use crate::provider::{DirectorySchemaProvider, SchemaProvider};

/// Summary of one generator run
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Content types that produced a class
    pub content_types: usize,
    /// Paths written, or that would have been written on a dry run
    pub files: Vec<PathBuf>,
    pub diagnostics: Diagnostics,
}

/// Drives a full generation run
pub struct ModelGenerator<P, R = CSharpRenderer> {
    config: GeneratorConfig,
    provider: P,
    renderer: R,
    dry_run: bool,
}

impl ModelGenerator<DirectorySchemaProvider> {
    /// Generator reading schemas from `config.schema_dir`
    pub fn from_config(config: GeneratorConfig) -> Self {
        let provider = DirectorySchemaProvider::new(config.schema_dir.clone());
        Self::new(config, provider, CSharpRenderer)
    }
}

impl<P: SchemaProvider, R: Renderer> ModelGenerator<P, R> {
    pub fn new(config: GeneratorConfig, provider: P, renderer: R) -> Self {
        Self {
            config,
            provider,
            renderer,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Project id, or the schema directory when no id is configured
    fn project_label(&self) -> String {
        if self.config.project_id.trim().is_empty() {
            self.config.schema_dir.display().to_string()
        } else {
            self.config.project_id.clone()
        }
    }

    fn writer(&self) -> OutputWriter {
        OutputWriter::new(
            self.config.output_dir.clone(),
            self.config.file_name_suffix.clone(),
            self.renderer.extension(),
        )
        .with_dry_run(self.dry_run)
    }

    /// Load and compile every content type
    pub fn compile(&self, sink: &mut dyn DiagnosticSink) -> Result<Vec<CompiledContentType>> {
        self.config.validate()?;
        let options = self.config.dialect_options()?;
        let content_types = self.provider.content_types()?;
        let snippets = self.provider.snippets()?;

        let compiled = SchemaCompiler::new(&content_types, &snippets, options).compile(sink)?;
        if compiled.is_empty() {
            let item = DiagnosticItem::no_content_types(&self.project_label());
            warn!(code = %item.code, "{}", item.message);
            sink.report(item);
        }
        Ok(compiled)
    }

    /// Render the files of a run without writing them
    pub fn render(&self, sink: &mut dyn DiagnosticSink) -> Result<Vec<GeneratedFile>> {
        let compiled = self.compile(sink)?;
        Ok(self.render_compiled(&compiled))
    }

    fn render_compiled(&self, compiled: &[CompiledContentType]) -> Vec<GeneratedFile> {
        if compiled.is_empty() {
            return Vec::new();
        }

        let writer = self.writer();
        let ctx = RenderContext::new(self.config.namespace.clone(), self.config.dialect());
        let mut files = Vec::new();

        for content_type in compiled {
            let model = content_type.model();
            files.push(GeneratedFile::new(
                writer.model_file_name(model.class_name().as_str()),
                self.renderer.render_class(model, &ctx),
            ));
            if let Some(typed) = content_type.typed_model() {
                files.push(GeneratedFile::new(
                    writer.typed_file_name(model.class_name().as_str()),
                    self.renderer.render_typed_class(typed, &ctx),
                ));
            }
        }

        if self.config.with_type_provider {
            files.push(GeneratedFile::new(
                writer.support_file_name(crate::codegen::csharp::TYPE_PROVIDER_CLASS),
                self.renderer.render_type_provider(compiled, &ctx),
            ));
        }
        files
    }

    /// Run the pipeline, forwarding diagnostics to `sink`
    pub fn run_with_sink(&self, sink: &mut dyn DiagnosticSink) -> Result<Vec<PathBuf>> {
        let compiled = self.compile(sink)?;
        let files = self.render_compiled(&compiled);
        if files.is_empty() {
            return Ok(Vec::new());
        }
        self.writer().write_all(&files)
    }

    /// Run the pipeline, collecting diagnostics into the report
    pub fn run(&self) -> Result<GenerationReport> {
        let mut diagnostics = Diagnostics::new();
        let compiled = self.compile(&mut diagnostics)?;
        let files = self.render_compiled(&compiled);
        let paths = if files.is_empty() {
            Vec::new()
        } else {
            self.writer().write_all(&files)?
        };

        info!(
            content_types = compiled.len(),
            files = paths.len(),
            diagnostics = diagnostics.len(),
            "generation finished"
        );
        Ok(GenerationReport {
            content_types: compiled.len(),
            files: paths,
            diagnostics,
        })
    }
}
