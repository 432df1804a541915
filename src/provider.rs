//! Schema Providers
//!
//! Supplies the content types and snippets of a project to the compiler.
//!
//! The directory provider reads JSON documents laid out as:
//! - `<dir>/types/**/*.json`: one content type, or an array of them
//! - `<dir>/snippets/**/*.json`: one snippet, or an array of them
//!
//! Files are visited in file name order so generation is deterministic.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::{ModelError, Result};
use crate::schema::{ContentTypeSchema, SnippetSchema};

/// Source of project schemas
pub trait SchemaProvider {
    fn content_types(&self) -> Result<Vec<ContentTypeSchema>>;

    fn snippets(&self) -> Result<Vec<SnippetSchema>>;
}

/// Reads schemas exported to a directory
#[derive(Debug, Clone)]
pub struct DirectorySchemaProvider {
    root: PathBuf,
}

impl DirectorySchemaProvider {
    pub const TYPES_DIR: &'static str = "types";
    pub const SNIPPETS_DIR: &'static str = "snippets";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SchemaProvider for DirectorySchemaProvider {
    fn content_types(&self) -> Result<Vec<ContentTypeSchema>> {
        if !self.root.is_dir() {
            return Err(ModelError::InvalidArgument(format!(
                "schema directory '{}' does not exist",
                self.root.display()
            )));
        }
        let content_types = load_documents(&self.root.join(Self::TYPES_DIR))?;
        info!(count = content_types.len(), root = %self.root.display(), "loaded content types");
        Ok(content_types)
    }

    fn snippets(&self) -> Result<Vec<SnippetSchema>> {
        let snippets = load_documents(&self.root.join(Self::SNIPPETS_DIR))?;
        info!(count = snippets.len(), root = %self.root.display(), "loaded snippets");
        Ok(snippets)
    }
}

/// In-memory provider, mostly for embedding and tests
#[derive(Debug, Clone, Default)]
pub struct StaticSchemaProvider {
    pub content_types: Vec<ContentTypeSchema>,
    pub snippets: Vec<SnippetSchema>,
}

impl StaticSchemaProvider {
    pub fn new(content_types: Vec<ContentTypeSchema>, snippets: Vec<SnippetSchema>) -> Self {
        Self {
            content_types,
            snippets,
        }
    }
}

impl SchemaProvider for StaticSchemaProvider {
    fn content_types(&self) -> Result<Vec<ContentTypeSchema>> {
        Ok(self.content_types.clone())
    }

    fn snippets(&self) -> Result<Vec<SnippetSchema>> {
        Ok(self.snippets.clone())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

/// Load every `.json` document under `dir`. A missing directory yields nothing.
fn load_documents<T: DeserializeOwned>(dir: &Path) -> Result<Vec<T>> {
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "schema directory absent");
        return Ok(Vec::new());
    }

    let mut documents = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| ModelError::Io(e.into()))?;
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        if path.extension().map(|ext| ext != "json").unwrap_or(true) {
            continue;
        }

        debug!(path = %path.display(), "reading schema document");
        let content = fs::read_to_string(path)?;
        match serde_json::from_str::<OneOrMany<T>>(&content) {
            Ok(OneOrMany::Many(items)) => documents.extend(items),
            Ok(OneOrMany::One(item)) => documents.push(item),
            Err(_) => {
                // Re-parse as a single document for a precise error location
                let item: T = serde_json::from_str(&content)?;
                documents.push(item);
            }
        }
    }
    Ok(documents)
}
