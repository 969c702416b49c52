use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use super::entities::{Class, Ontology};
use super::value_objects::Iri;

/// Read access to loaded ontologies, keyed by ontology identifier.
///
/// This is the one shared, cross-call dependency of the suggestion core.
/// Implementors must be internally synchronized: concurrent first requests
/// for the same identifier must not load the document twice or expose a
/// partially initialized ontology.
///
/// Concept and individual identifiers crossing this boundary are [`Iri`]
/// value objects and therefore constrained to RFC 3987 syntax; stores with
/// laxer identifiers must map them to valid IRIs before exposing them here.
#[async_trait]
pub trait OntologyAccess {
    /// Associated error type allowing infrastructure specific failures.
    type Error;

    /// Resolves a concept by IRI within the identified ontology.
    async fn concept(&self, ontology: &str, iri: &Iri) -> Result<Class, Self::Error>;

    /// Returns the human-readable label of a class, if it has a usable one.
    async fn label(&self, ontology: &str, class: &Iri) -> Result<Option<String>, Self::Error>;

    /// Enumerates the immediate specializations of a concept.
    async fn direct_subclasses(&self, ontology: &str, concept: &Iri)
        -> Result<Vec<Iri>, Self::Error>;

    /// Enumerates the individuals asserted as direct members of a concept.
    async fn individuals(&self, ontology: &str, concept: &Iri) -> Result<Vec<Iri>, Self::Error>;
}

/// Resolves an ontology identifier to a fully loaded ontology document.
///
/// Document format concerns (OWL parsing, network retrieval) live behind
/// this seam; the registry only caches whatever the loader produces.
#[async_trait]
pub trait OntologyLoader {
    /// Loads the ontology identified by `ontology`.
    async fn load(&self, ontology: &str) -> Result<Ontology, OntologyAccessError>;
}

/// Errors raised by ontology access infrastructure.
#[derive(Debug, Error)]
pub enum OntologyAccessError {
    /// The ontology document could not be loaded.
    #[error("failed to load ontology `{ontology}`: {reason}")]
    Load { ontology: String, reason: String },
    /// The requested concept is not declared in the ontology.
    #[error("ontology `{ontology}` has no concept `{iri}`")]
    UnknownConcept { ontology: String, iri: Iri },
    /// Instance membership could not be computed for the concept.
    #[error("cannot compute membership of `{concept}` in ontology `{ontology}`: {reason}")]
    Membership {
        ontology: String,
        concept: Iri,
        reason: String,
    },
    /// Accessing a configured ontology seed path failed.
    #[error("failed to access ontology seed `{path}`: {source}")]
    SeedIo {
        path: PathBuf,
        source: std::io::Error,
    },
}
