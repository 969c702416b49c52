use std::collections::BTreeMap;

use async_trait::async_trait;
use thiserror::Error;

use super::SchemaFragment;

/// Read access to the schema fragments of a service description document.
///
/// Parsing the document format is the implementor's concern; the suggestion
/// core only iterates fragments and matches element names.
#[async_trait]
pub trait SchemaDocumentReader {
    /// Associated error type allowing infrastructure specific failures.
    type Error;

    /// Returns every schema fragment declared by the identified document.
    async fn schema_fragments(&self, service: &str) -> Result<Vec<SchemaFragment>, Self::Error>;
}

/// Errors raised by schema document readers.
#[derive(Debug, Error)]
pub enum SchemaReaderError {
    /// No document is known under the requested identifier.
    #[error("unknown service description `{service}`")]
    UnknownDocument { service: String },
    /// The document exists but could not be read or parsed.
    #[error("failed to read service description `{service}`: {reason}")]
    Read { service: String, reason: String },
}

/// Reader backed by documents registered up front.
#[derive(Default)]
pub struct InMemorySchemaReader {
    documents: BTreeMap<String, Vec<SchemaFragment>>,
}

impl InMemorySchemaReader {
    /// Creates an empty reader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a document's schema fragments under the given identifier.
    pub fn register(&mut self, service: impl Into<String>, fragments: Vec<SchemaFragment>) {
        self.documents.insert(service.into(), fragments);
    }
}

#[async_trait]
impl SchemaDocumentReader for InMemorySchemaReader {
    type Error = SchemaReaderError;

    async fn schema_fragments(&self, service: &str) -> Result<Vec<SchemaFragment>, Self::Error> {
        self.documents
            .get(service)
            .cloned()
            .ok_or_else(|| SchemaReaderError::UnknownDocument {
                service: service.to_owned(),
            })
    }
}
