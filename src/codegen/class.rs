//! Class Model
//!
//! One class model per content type. Properties are unique by codename and
//! keep insertion order; codename constants are unique without exception.
//! The reserved `system` property is the only one that may be replaced.

use serde::Serialize;

use crate::error::{ModelError, Result};
use crate::schema::ElementSchema;

use super::names::{sanitize, Identifier};

/// Codename of the reserved system property
pub const SYSTEM_CODENAME: &str = "system";

// =============================================================================
// Property
// =============================================================================

/// A typed member of a generated class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    /// Schema key of the element
    pub codename: String,
    /// Member name in generated code
    pub identifier: Identifier,
    /// Resolved target type
    pub type_name: String,
    /// Element id, rendered by the management dialect only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    /// Replaces the default `Codename` suffix of the constant name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codename_suffix: Option<String>,
}

impl Property {
    pub fn new(codename: impl Into<String>, identifier: Identifier, type_name: impl Into<String>) -> Self {
        Self {
            codename: codename.into(),
            identifier,
            type_name: type_name.into(),
            id: None,
            external_id: None,
            codename_suffix: None,
        }
    }

    /// Build a property for an element, sanitizing its codename
    pub fn from_element(element: &ElementSchema, type_name: impl Into<String>) -> Result<Self> {
        let identifier = sanitize(&element.codename)?;
        Ok(Self {
            id: element.id.clone(),
            external_id: element.external_id.clone(),
            ..Self::new(element.codename.clone(), identifier, type_name)
        })
    }

    /// The implicit `system` property
    pub fn system(type_name: impl Into<String>) -> Self {
        Self::new(SYSTEM_CODENAME, Identifier::from_static("System"), type_name)
    }

    pub fn with_codename_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.codename_suffix = Some(suffix.into());
        self
    }

    /// Name of the codename constant for this property
    pub fn codename_constant_name(&self) -> String {
        format!(
            "{}{}",
            self.identifier,
            self.codename_suffix.as_deref().unwrap_or("Codename")
        )
    }

    pub fn is_system(&self) -> bool {
        self.codename == SYSTEM_CODENAME
    }
}

// =============================================================================
// Class Model
// =============================================================================

/// Accumulates properties and codename constants for one content type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassModel {
    source_codename: String,
    class_name: Identifier,
    properties: Vec<Property>,
    property_codename_constants: Vec<String>,
}

impl ClassModel {
    /// Start a class model, deriving the class name from `codename`
    pub fn new(codename: impl Into<String>) -> Result<Self> {
        let codename = codename.into();
        let class_name = sanitize(&codename)?;
        Ok(Self::with_class_name(codename, class_name))
    }

    pub fn with_class_name(codename: impl Into<String>, class_name: Identifier) -> Self {
        Self {
            source_codename: codename.into(),
            class_name,
            properties: Vec::new(),
            property_codename_constants: Vec::new(),
        }
    }

    /// Add a property.
    ///
    /// A second `system` property replaces the first in place; any other
    /// repeated codename fails with [`ModelError::DuplicateProperty`].
    pub fn add_property(&mut self, property: Property) -> Result<()> {
        match self.position(&property.codename) {
            Some(index) if property.is_system() => {
                self.properties[index] = property;
                Ok(())
            }
            Some(_) => Err(ModelError::DuplicateProperty {
                codename: property.codename,
                class_name: self.class_name.to_string(),
            }),
            None => {
                self.properties.push(property);
                Ok(())
            }
        }
    }

    /// Add the implicit `system` property unless one is present
    pub fn add_system_property_if_absent(&mut self, type_name: &str) {
        if self.position(SYSTEM_CODENAME).is_none() {
            self.properties.push(Property::system(type_name));
        }
    }

    /// Register a codename constant; duplicates always fail, `system` included
    pub fn add_property_codename_constant(&mut self, codename: impl Into<String>) -> Result<()> {
        let codename = codename.into();
        if self.property_codename_constants.contains(&codename) {
            return Err(ModelError::DuplicatePropertyCodenameConstant {
                codename,
                class_name: self.class_name.to_string(),
            });
        }
        self.property_codename_constants.push(codename);
        Ok(())
    }

    fn position(&self, codename: &str) -> Option<usize> {
        self.properties.iter().position(|p| p.codename == codename)
    }

    pub fn source_codename(&self) -> &str {
        &self.source_codename
    }

    pub fn class_name(&self) -> &Identifier {
        &self.class_name
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn property(&self, codename: &str) -> Option<&Property> {
        self.position(codename).map(|index| &self.properties[index])
    }

    pub fn property_codename_constants(&self) -> &[String] {
        &self.property_codename_constants
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
