//! Schema-side view of a service description document: fragments, element
//! declarations with namespaced attributes, and the recognized annotation
//! vocabulary.

pub mod reader;

pub use reader::{InMemorySchemaReader, SchemaDocumentReader, SchemaReaderError};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Namespace the recognized semantic annotation attribute lives in.
pub const SAWSDL_NAMESPACE: &str = "http://www.w3.org/ns/sawsdl";

/// Local name of the recognized semantic annotation attribute.
pub const MODEL_REFERENCE_ATTRIBUTE: &str = "modelReference";

/// The single recognized annotation vocabulary: a namespace URI plus the
/// local name of the attribute carrying a concept IRI.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct AnnotationVocabulary {
    /// Namespace URI the annotation attribute is scoped to.
    pub namespace: String,
    /// Local name of the annotation attribute.
    pub attribute: String,
}

impl Default for AnnotationVocabulary {
    fn default() -> Self {
        Self {
            namespace: SAWSDL_NAMESPACE.to_owned(),
            attribute: MODEL_REFERENCE_ATTRIBUTE.to_owned(),
        }
    }
}

/// Namespace-qualified attribute name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct QName {
    namespace: String,
    local: String,
}

impl QName {
    /// Creates a qualified name from a namespace URI and a local part.
    #[must_use]
    pub fn new(namespace: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            local: local.into(),
        }
    }

    /// Returns the namespace URI.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the local part.
    #[must_use]
    pub fn local(&self) -> &str {
        &self.local
    }
}

/// A named element declaration inside a schema fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaElement {
    name: String,
    attributes: BTreeMap<QName, String>,
}

impl SchemaElement {
    /// Creates an element declaration with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Attaches a namespaced attribute to the element.
    #[must_use]
    pub fn with_attribute(
        mut self,
        namespace: impl Into<String>,
        local: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.attributes
            .insert(QName::new(namespace, local), value.into());
        self
    }

    /// Returns the declared element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up an attribute by namespace URI and local name.
    #[must_use]
    pub fn attribute(&self, namespace: &str, local: &str) -> Option<&str> {
        self.attributes
            .get(&QName::new(namespace, local))
            .map(String::as_str)
    }
}

/// One schema fragment extracted from a service description document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaFragment {
    target_namespace: Option<String>,
    elements: Vec<SchemaElement>,
}

impl SchemaFragment {
    /// Creates a fragment holding the supplied element declarations.
    #[must_use]
    pub fn new(elements: Vec<SchemaElement>) -> Self {
        Self {
            target_namespace: None,
            elements,
        }
    }

    /// Sets the fragment's target namespace.
    #[must_use]
    pub fn with_target_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.target_namespace = Some(namespace.into());
        self
    }

    /// Returns the fragment's target namespace, if declared.
    #[must_use]
    pub fn target_namespace(&self) -> Option<&str> {
        self.target_namespace.as_deref()
    }

    /// Returns the element whose declared name matches `name` exactly.
    #[must_use]
    pub fn element(&self, name: &str) -> Option<&SchemaElement> {
        self.elements.iter().find(|element| element.name() == name)
    }

    /// Returns every element declaration in document order.
    #[must_use]
    pub fn elements(&self) -> &[SchemaElement] {
        &self.elements
    }
}
