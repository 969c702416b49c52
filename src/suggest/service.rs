use std::sync::Arc;

use crate::ontology::access::{OntologyAccess, OntologyAccessError};
use crate::ontology::value_objects::Iri;
use crate::schema::{AnnotationVocabulary, SchemaDocumentReader, SchemaReaderError};

use super::annotation::AnnotationResolver;
use super::enumerate::{enumerate_individuals, enumerate_subclass_labels};
use super::SuggestError;

/// Type alias simplifying schema reader trait object usage inside the service.
pub type SchemaReaderHandle =
    dyn SchemaDocumentReader<Error = SchemaReaderError> + Send + Sync + 'static;
/// Type alias simplifying ontology access trait object usage inside the service.
pub type OntologyHandle = dyn OntologyAccess<Error = OntologyAccessError> + Send + Sync + 'static;

/// Orchestrates annotation resolution, concept resolution and the two
/// enumeration strategies into one ordered suggestion list.
///
/// The service holds no per-call state; everything it returns is derived
/// from the injected reader and ontology access handles.
pub struct SuggestionService {
    annotations: AnnotationResolver,
    ontologies: Arc<OntologyHandle>,
}

impl SuggestionService {
    /// Creates a service recognizing the default SAWSDL `modelReference`
    /// annotation vocabulary.
    #[must_use]
    pub fn new(reader: Arc<SchemaReaderHandle>, ontologies: Arc<OntologyHandle>) -> Self {
        Self::with_vocabulary(reader, ontologies, AnnotationVocabulary::default())
    }

    /// Creates a service recognizing a custom annotation vocabulary.
    #[must_use]
    pub fn with_vocabulary(
        reader: Arc<SchemaReaderHandle>,
        ontologies: Arc<OntologyHandle>,
        vocabulary: AnnotationVocabulary,
    ) -> Self {
        Self {
            annotations: AnnotationResolver::new(reader, vocabulary),
            ontologies,
        }
    }

    /// Suggests candidate input values for one service parameter.
    ///
    /// Individual local names come first, then subclass labels, each group
    /// in the ontology service's enumeration order; no deduplication, no
    /// sorting, no truncation. A parameter without a usable annotation
    /// yields an empty list.
    ///
    /// # Errors
    ///
    /// [`SuggestError::ParameterNotFound`] when no schema fragment declares
    /// the parameter, [`SuggestError::ConceptResolution`] when the
    /// annotation does not resolve in the ontology, and
    /// [`SuggestError::IndividualEnumeration`] /
    /// [`SuggestError::SubclassEnumeration`] when the ontology service
    /// cannot enumerate the respective group.
    pub async fn suggest_param_values(
        &self,
        service: &str,
        parameter: &str,
        ontology: &str,
    ) -> Result<Vec<String>, SuggestError> {
        let Some(annotation) = self.annotations.resolve(service, parameter).await? else {
            tracing::debug!(service, parameter, "parameter carries no semantic annotation");
            return Ok(Vec::new());
        };

        let iri =
            Iri::new(annotation.clone()).map_err(|source| SuggestError::InvalidAnnotation {
                parameter: parameter.to_owned(),
                iri: annotation,
                source,
            })?;
        let concept = self
            .ontologies
            .concept(ontology, &iri)
            .await
            .map_err(|source| SuggestError::ConceptResolution {
                ontology: ontology.to_owned(),
                iri: iri.clone(),
                source,
            })?;
        tracing::debug!(service, parameter, concept = %concept.id(), "resolved parameter annotation");

        let mut values =
            enumerate_individuals(self.ontologies.as_ref(), ontology, concept.id()).await?;
        values.extend(
            enumerate_subclass_labels(self.ontologies.as_ref(), ontology, concept.id()).await?,
        );
        Ok(values)
    }
}
