//! Configuration management for the model generator
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (model-generator.toml)
//! - Environment variables (MODELGEN__*)
//!
//! ## Example config file (model-generator.toml):
//! ```toml
//! project_id = "975bf280-fd91-488c-994c-2f04416e5ee3"
//! namespace = "Acme.Models"
//! output_dir = "./Models"
//! schema_dir = "./schema"
//! file_name_suffix = "Generated"
//! management_api = false
//! extended_models = true
//! structured_model = ["RichText", "DateTime"]
//! with_type_provider = true
//! ```

use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::codegen::{Dialect, DialectOptions, StructuredModelFlags};
use crate::error::{ModelError, Result};

/// Main configuration for the model generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Project the schemas were fetched from (used in diagnostics)
    #[serde(default)]
    pub project_id: String,

    /// Namespace of generated classes
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Directory generated files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Directory holding `types/` and `snippets/` JSON documents
    #[serde(default = "default_schema_dir")]
    pub schema_dir: PathBuf,

    /// Suffix inserted before the file extension
    #[serde(default = "default_file_name_suffix")]
    pub file_name_suffix: String,

    /// Generate strict management models instead of delivery models
    #[serde(default)]
    pub management_api: bool,

    /// Generate typed linked item variants
    #[serde(default)]
    pub extended_models: bool,

    /// Element kinds resolved to structured types
    #[serde(default)]
    pub structured_model: Vec<String>,

    /// Also generate a content type to class lookup
    #[serde(default)]
    pub with_type_provider: bool,
}

// Default value functions
fn default_namespace() -> String {
    "ContentModels".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_schema_dir() -> PathBuf {
    PathBuf::from("schema")
}

fn default_file_name_suffix() -> String {
    "Generated".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            namespace: default_namespace(),
            output_dir: default_output_dir(),
            schema_dir: default_schema_dir(),
            file_name_suffix: default_file_name_suffix(),
            management_api: false,
            extended_models: false,
            structured_model: Vec::new(),
            with_type_provider: false,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration, adding a specific file on top of the defaults
    pub fn load_from(config_path: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_locations = [
            "model-generator.toml",
            ".model-generator.toml",
            "config/model-generator.toml",
        ];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        if let Some(config_dir) = directories::ProjectDirs::from("dev", "content-models", "model-generator") {
            let xdg_config = config_dir.config_dir().join("model-generator.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("MODELGEN")
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("structured_model")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn dialect(&self) -> Dialect {
        if self.management_api {
            Dialect::Management
        } else {
            Dialect::Delivery
        }
    }

    /// Parsed structured model flags
    pub fn structured_flags(&self) -> Result<StructuredModelFlags> {
        StructuredModelFlags::from_names(&self.structured_model)
    }

    /// Dialect options for the compiler
    pub fn dialect_options(&self) -> Result<DialectOptions> {
        Ok(DialectOptions {
            dialect: self.dialect(),
            structured: self.structured_flags()?,
            typed_links: self.extended_models,
        })
    }

    /// Check settings that can't be expressed in the types
    pub fn validate(&self) -> Result<()> {
        if self.namespace.trim().is_empty() {
            return Err(ModelError::InvalidArgument("namespace must not be empty".to_string()));
        }
        if !self.namespace.split('.').all(crate::codegen::is_valid_identifier) {
            return Err(ModelError::InvalidArgument(format!(
                "namespace '{}' is not a valid dotted identifier",
                self.namespace
            )));
        }
        self.structured_flags()?;
        Ok(())
    }
}
