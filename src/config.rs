//! Settings consumed when wiring the suggestion pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schema::AnnotationVocabulary;

/// Top-level settings for embedders wiring the suggestion pipeline.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Recognized annotation vocabulary; defaults to SAWSDL `modelReference`.
    pub annotation: AnnotationVocabulary,
    /// Ontology registry settings.
    pub ontology: OntologySettings,
}

/// Settings for the ontology registry.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct OntologySettings {
    /// Ontology documents the deployment expects to be loadable; validated
    /// when the registry is built.
    pub seeds: Vec<PathBuf>,
}

impl Settings {
    /// Reads settings from a YAML file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its content is not valid settings YAML.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("failed to read settings file `{path}`")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The settings file content could not be parsed.
    #[error("failed to parse settings file `{path}`")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
