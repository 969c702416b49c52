use std::sync::Arc;

use crate::schema::AnnotationVocabulary;

use super::service::SchemaReaderHandle;
use super::SuggestError;

/// Resolves a parameter name to its semantic annotation IRI string, if any.
pub struct AnnotationResolver {
    reader: Arc<SchemaReaderHandle>,
    vocabulary: AnnotationVocabulary,
}

impl AnnotationResolver {
    /// Creates a resolver reading annotations in the given vocabulary.
    #[must_use]
    pub fn new(reader: Arc<SchemaReaderHandle>, vocabulary: AnnotationVocabulary) -> Self {
        Self { reader, vocabulary }
    }

    /// Scans every schema fragment of `service` for an element named
    /// `parameter` and reads its annotation attribute.
    ///
    /// When several fragments declare the same element name the last match
    /// wins; the ambiguity is reported through a warning event. An absent or
    /// empty annotation attribute yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// [`SuggestError::ParameterNotFound`] when no fragment declares the
    /// element, [`SuggestError::SchemaRead`] when the reader fails.
    pub async fn resolve(
        &self,
        service: &str,
        parameter: &str,
    ) -> Result<Option<String>, SuggestError> {
        let fragments = self
            .reader
            .schema_fragments(service)
            .await
            .map_err(|source| SuggestError::SchemaRead {
                service: service.to_owned(),
                source,
            })?;

        let mut candidate = None;
        for fragment in &fragments {
            let Some(element) = fragment.element(parameter) else {
                continue;
            };
            if candidate.is_some() {
                tracing::warn!(
                    service,
                    parameter,
                    "parameter declared in more than one schema fragment; keeping the last match"
                );
            }
            candidate = Some(element);
        }

        let Some(element) = candidate else {
            return Err(SuggestError::ParameterNotFound {
                service: service.to_owned(),
                parameter: parameter.to_owned(),
            });
        };

        Ok(element
            .attribute(&self.vocabulary.namespace, &self.vocabulary.attribute)
            .filter(|value| !value.is_empty())
            .map(ToOwned::to_owned))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{AnnotationResolver, SuggestError};
    use crate::schema::{
        AnnotationVocabulary, InMemorySchemaReader, SchemaElement, SchemaFragment,
        SAWSDL_NAMESPACE,
    };

    const SERVICE: &str = "http://example.org/blast.sawsdl";

    fn resolver(fragments: Vec<SchemaFragment>) -> AnnotationResolver {
        let mut reader = InMemorySchemaReader::new();
        reader.register(SERVICE, fragments);
        AnnotationResolver::new(Arc::new(reader), AnnotationVocabulary::default())
    }

    #[tokio::test]
    async fn reads_the_annotation_attribute() {
        let resolver = resolver(vec![SchemaFragment::new(vec![SchemaElement::new("program")
            .with_attribute(SAWSDL_NAMESPACE, "modelReference", "urn:concept")])]);

        let annotation = resolver
            .resolve(SERVICE, "program")
            .await
            .expect("resolution");
        assert_eq!(annotation.as_deref(), Some("urn:concept"));
    }

    #[tokio::test]
    async fn absent_and_empty_annotations_resolve_to_none() {
        let resolver = resolver(vec![SchemaFragment::new(vec![
            SchemaElement::new("plain"),
            SchemaElement::new("blank").with_attribute(SAWSDL_NAMESPACE, "modelReference", ""),
        ])]);

        assert!(resolver
            .resolve(SERVICE, "plain")
            .await
            .expect("resolution")
            .is_none());
        assert!(resolver
            .resolve(SERVICE, "blank")
            .await
            .expect("resolution")
            .is_none());
    }

    #[tokio::test]
    async fn missing_parameter_fails() {
        let resolver = resolver(vec![SchemaFragment::new(vec![SchemaElement::new("other")])]);
        let err = resolver
            .resolve(SERVICE, "program")
            .await
            .expect_err("no match");
        assert!(matches!(err, SuggestError::ParameterNotFound { .. }));
    }

    #[tokio::test]
    async fn last_fragment_wins_on_duplicate_declarations() {
        let resolver = resolver(vec![
            SchemaFragment::new(vec![SchemaElement::new("program").with_attribute(
                SAWSDL_NAMESPACE,
                "modelReference",
                "urn:first",
            )]),
            SchemaFragment::new(vec![SchemaElement::new("program").with_attribute(
                SAWSDL_NAMESPACE,
                "modelReference",
                "urn:second",
            )]),
        ]);

        let annotation = resolver
            .resolve(SERVICE, "program")
            .await
            .expect("resolution");
        assert_eq!(annotation.as_deref(), Some("urn:second"));
    }

    #[tokio::test]
    async fn reader_failures_surface_as_schema_read() {
        let resolver = AnnotationResolver::new(
            Arc::new(InMemorySchemaReader::new()),
            AnnotationVocabulary::default(),
        );
        let err = resolver
            .resolve(SERVICE, "program")
            .await
            .expect_err("unknown document");
        assert!(matches!(err, SuggestError::SchemaRead { .. }));
    }
}
