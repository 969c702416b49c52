use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::config::OntologySettings;

use super::access::{OntologyAccess, OntologyAccessError, OntologyLoader};
use super::entities::{Class, Ontology};
use super::value_objects::Iri;

/// Type alias simplifying loader trait object usage inside the registry.
pub type LoaderHandle = dyn OntologyLoader + Send + Sync + 'static;

/// Process-wide ontology cache keyed by ontology identifier.
///
/// Each distinct identifier is loaded at most once per registry; the cache
/// lock is held across the load so concurrent first requests wait for a
/// single load instead of duplicating it.
pub struct OntologyRegistry {
    loader: Arc<LoaderHandle>,
    loaded: Mutex<BTreeMap<String, Arc<Ontology>>>,
}

impl std::fmt::Debug for OntologyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OntologyRegistry").finish_non_exhaustive()
    }
}

impl OntologyRegistry {
    /// Creates an empty registry delegating loads to `loader`.
    #[must_use]
    pub fn new(loader: Arc<LoaderHandle>) -> Self {
        Self {
            loader,
            loaded: Mutex::new(BTreeMap::new()),
        }
    }

    /// Builds a registry from configuration settings.
    ///
    /// Every configured seed path is validated up front so a misconfigured
    /// deployment fails at boot rather than on the first suggestion request.
    pub fn from_config(
        settings: &OntologySettings,
        loader: Arc<LoaderHandle>,
    ) -> Result<Self, OntologyAccessError> {
        for path in &settings.seeds {
            validate_seed_path(path)?;
        }
        Ok(Self::new(loader))
    }

    /// Returns the ontology for `ontology`, loading it on first request.
    ///
    /// The cache lock is held across the load, so a first request serializes
    /// against all other loads, including those for distinct identifiers; a
    /// loader doing slow I/O for many identifiers should prefer per-key
    /// locking over this registry.
    pub async fn get_or_load(&self, ontology: &str) -> Result<Arc<Ontology>, OntologyAccessError> {
        let mut loaded = self.loaded.lock().await;
        if let Some(existing) = loaded.get(ontology) {
            return Ok(Arc::clone(existing));
        }
        tracing::debug!(ontology, "loading ontology");
        let fresh = Arc::new(self.loader.load(ontology).await?);
        loaded.insert(ontology.to_owned(), Arc::clone(&fresh));
        Ok(fresh)
    }
}

fn validate_seed_path(path: &Path) -> Result<(), OntologyAccessError> {
    fs::metadata(path)
        .map(|_| ())
        .map_err(|source| OntologyAccessError::SeedIo {
            path: path.to_path_buf(),
            source,
        })
}

#[async_trait]
impl OntologyAccess for OntologyRegistry {
    type Error = OntologyAccessError;

    async fn concept(&self, ontology: &str, iri: &Iri) -> Result<Class, Self::Error> {
        let loaded = self.get_or_load(ontology).await?;
        loaded
            .class(iri)
            .cloned()
            .ok_or_else(|| OntologyAccessError::UnknownConcept {
                ontology: ontology.to_owned(),
                iri: iri.clone(),
            })
    }

    async fn label(&self, ontology: &str, class: &Iri) -> Result<Option<String>, Self::Error> {
        let loaded = self.get_or_load(ontology).await?;
        Ok(loaded
            .class(class)
            .and_then(|class| class.label().map(ToOwned::to_owned)))
    }

    async fn direct_subclasses(
        &self,
        ontology: &str,
        concept: &Iri,
    ) -> Result<Vec<Iri>, Self::Error> {
        let loaded = self.get_or_load(ontology).await?;
        if loaded.class(concept).is_none() {
            return Err(OntologyAccessError::UnknownConcept {
                ontology: ontology.to_owned(),
                iri: concept.clone(),
            });
        }
        Ok(loaded
            .direct_subclasses_of(concept)
            .into_iter()
            .map(|class| class.id().clone())
            .collect())
    }

    async fn individuals(&self, ontology: &str, concept: &Iri) -> Result<Vec<Iri>, Self::Error> {
        let loaded = self.get_or_load(ontology).await?;
        if loaded.class(concept).is_none() {
            return Err(OntologyAccessError::Membership {
                ontology: ontology.to_owned(),
                concept: concept.clone(),
                reason: "concept is not declared in the ontology".to_owned(),
            });
        }
        Ok(loaded
            .members_of(concept)
            .into_iter()
            .map(|individual| individual.id().clone())
            .collect())
    }
}

/// Loader backed by ontologies registered up front.
///
/// Suits tests and embedders that assemble aggregates in code instead of
/// parsing documents.
#[derive(Default)]
pub struct StaticOntologyLoader {
    ontologies: BTreeMap<String, Ontology>,
}

impl StaticOntologyLoader {
    /// Creates an empty loader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an ontology under the given identifier.
    pub fn register(&mut self, ontology: impl Into<String>, document: Ontology) {
        self.ontologies.insert(ontology.into(), document);
    }
}

#[async_trait]
impl OntologyLoader for StaticOntologyLoader {
    async fn load(&self, ontology: &str) -> Result<Ontology, OntologyAccessError> {
        self.ontologies
            .get(ontology)
            .cloned()
            .ok_or_else(|| OntologyAccessError::Load {
                ontology: ontology.to_owned(),
                reason: "no ontology document registered under this identifier".to_owned(),
            })
    }
}
