//! In-memory ontology domain: IRI value objects, class and individual
//! aggregates, and the process-wide registry that loads and caches ontology
//! documents behind the [`OntologyAccess`] seam.

pub mod access;
pub mod entities;
pub mod registry;
pub mod value_objects;

pub use access::{OntologyAccess, OntologyAccessError, OntologyLoader};
pub use entities::{Class, Individual, Ontology, OntologyError};
pub use registry::{LoaderHandle, OntologyRegistry, StaticOntologyLoader};
pub use value_objects::{local_name, Iri, IriError};
