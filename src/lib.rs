//! Ontology-grounded input value suggestions for semantically annotated
//! web services.
//!
//! Given a service description identifier, a parameter name and an ontology
//! identifier, [`SuggestionService`] resolves the parameter's SAWSDL
//! `modelReference` annotation to an ontology concept and returns the local
//! names of the concept's individuals followed by the labels of its direct
//! subclasses, as one ordered suggestion list.
//!
//! Schema access and ontology access are injected behind the
//! [`schema::SchemaDocumentReader`] and [`ontology::OntologyAccess`] traits;
//! the crate ships in-memory adapters for both so embedders and tests can
//! assemble documents in code.

pub mod config;
pub mod ontology;
pub mod schema;
pub mod suggest;

pub use suggest::{SuggestError, SuggestionService};
