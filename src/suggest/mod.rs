//! The resolution-and-aggregation core: maps a parameter name to its
//! semantic annotation, resolves the annotation to an ontology concept, and
//! concatenates the concept's individual local names with the labels of its
//! direct subclasses into one ordered suggestion list.

pub mod annotation;
pub mod enumerate;
pub mod service;

pub use annotation::AnnotationResolver;
pub use enumerate::{enumerate_individuals, enumerate_subclass_labels};
pub use service::{OntologyHandle, SchemaReaderHandle, SuggestionService};

use thiserror::Error;

use crate::ontology::access::OntologyAccessError;
use crate::ontology::value_objects::{Iri, IriError};
use crate::schema::SchemaReaderError;

/// Failures surfaced by the suggestion pipeline.
///
/// A parameter without a usable annotation is not a failure; it yields an
/// empty suggestion list. Every variant reaches the caller as an explicit
/// value, nothing is logged-and-swallowed.
#[derive(Debug, Error)]
pub enum SuggestError {
    /// No schema fragment declares an element with the requested name.
    #[error("parameter `{parameter}` not found in any schema fragment of `{service}`")]
    ParameterNotFound { service: String, parameter: String },
    /// The schema document reader could not produce fragments.
    #[error("failed to read schema fragments of `{service}`")]
    SchemaRead {
        service: String,
        #[source]
        source: SchemaReaderError,
    },
    /// The annotation attribute did not hold a syntactically valid IRI.
    #[error("annotation `{iri}` on parameter `{parameter}` is not a valid IRI")]
    InvalidAnnotation {
        parameter: String,
        iri: String,
        #[source]
        source: IriError,
    },
    /// The annotation IRI did not resolve to a concept, or the ontology
    /// failed to load.
    #[error("cannot resolve `{iri}` to a concept in ontology `{ontology}`")]
    ConceptResolution {
        ontology: String,
        iri: Iri,
        #[source]
        source: OntologyAccessError,
    },
    /// Instance membership could not be computed for the resolved concept.
    #[error("cannot enumerate individuals of `{concept}` in ontology `{ontology}`")]
    IndividualEnumeration {
        ontology: String,
        concept: Iri,
        #[source]
        source: OntologyAccessError,
    },
    /// Direct subclasses could not be enumerated for the resolved concept.
    #[error("cannot enumerate direct subclasses of `{concept}` in ontology `{ontology}`")]
    SubclassEnumeration {
        ontology: String,
        concept: Iri,
        #[source]
        source: OntologyAccessError,
    },
}
