//! Output Writing
//!
//! Writes rendered sources to the output directory. File names follow
//! `{ClassName}.{suffix}.{ext}` for models and `{ClassName}.Typed.{suffix}.{ext}`
//! for typed variants. An empty suffix drops the middle segment.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::Result;

/// A rendered source file, not yet on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub file_name: String,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }
}

/// Writes generated files into one directory
#[derive(Debug, Clone)]
pub struct OutputWriter {
    output_dir: PathBuf,
    file_name_suffix: String,
    extension: String,
    dry_run: bool,
}

impl OutputWriter {
    pub fn new(output_dir: impl Into<PathBuf>, file_name_suffix: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            file_name_suffix: file_name_suffix.into(),
            extension: extension.into(),
            dry_run: false,
        }
    }

    /// Log what would be written without touching the filesystem
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn model_file_name(&self, class_name: &str) -> String {
        self.file_name(&[class_name])
    }

    pub fn typed_file_name(&self, class_name: &str) -> String {
        self.file_name(&[class_name, "Typed"])
    }

    /// File name of a support class such as the type provider
    pub fn support_file_name(&self, class_name: &str) -> String {
        format!("{}.{}", class_name, self.extension)
    }

    fn file_name(&self, stem: &[&str]) -> String {
        let mut parts: Vec<&str> = stem.to_vec();
        if !self.file_name_suffix.is_empty() {
            parts.push(&self.file_name_suffix);
        }
        parts.push(&self.extension);
        parts.join(".")
    }

    /// Write all files, returning the paths written (or that would be written)
    pub fn write_all(&self, files: &[GeneratedFile]) -> Result<Vec<PathBuf>> {
        if !self.dry_run {
            fs::create_dir_all(&self.output_dir)?;
        }

        let mut written = Vec::with_capacity(files.len());
        for file in files {
            let path = self.output_dir.join(&file.file_name);
            if self.dry_run {
                info!(path = %path.display(), bytes = file.content.len(), "dry run, not writing");
            } else {
                fs::write(&path, &file.content)?;
                debug!(path = %path.display(), "wrote generated file");
            }
            written.push(path);
        }

        info!(
            count = written.len(),
            dir = %self.output_dir.display(),
            dry_run = self.dry_run,
            "output complete"
        );
        Ok(written)
    }
}
