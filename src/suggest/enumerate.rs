use crate::ontology::value_objects::Iri;

use super::service::OntologyHandle;
use super::SuggestError;

/// Enumerates the local names of the individuals asserted as members of
/// `concept`, in the ontology service's enumeration order.
///
/// # Errors
///
/// [`SuggestError::IndividualEnumeration`] when membership cannot be
/// computed; never a silently empty list.
pub async fn enumerate_individuals(
    access: &OntologyHandle,
    ontology: &str,
    concept: &Iri,
) -> Result<Vec<String>, SuggestError> {
    let members = access.individuals(ontology, concept).await.map_err(|source| {
        SuggestError::IndividualEnumeration {
            ontology: ontology.to_owned(),
            concept: concept.clone(),
            source,
        }
    })?;

    Ok(members
        .iter()
        .map(|member| member.local_name().to_owned())
        .collect())
}

/// Enumerates display strings for the direct specializations of `concept`,
/// in the ontology service's enumeration order.
///
/// A subclass contributes its label when it has a non-empty one, else the
/// local name derived from its IRI; a subclass with neither contributes no
/// entry. A failed label lookup counts as "no label" and never fails the
/// call.
///
/// # Errors
///
/// [`SuggestError::SubclassEnumeration`] when the subclasses themselves
/// cannot be enumerated.
pub async fn enumerate_subclass_labels(
    access: &OntologyHandle,
    ontology: &str,
    concept: &Iri,
) -> Result<Vec<String>, SuggestError> {
    let subclasses = access
        .direct_subclasses(ontology, concept)
        .await
        .map_err(|source| SuggestError::SubclassEnumeration {
            ontology: ontology.to_owned(),
            concept: concept.clone(),
            source,
        })?;

    let mut entries = Vec::with_capacity(subclasses.len());
    for subclass in subclasses {
        match access.label(ontology, &subclass).await.ok().flatten() {
            Some(label) if !label.is_empty() => entries.push(label),
            _ => {
                let name = subclass.local_name();
                if !name.is_empty() {
                    entries.push(name.to_owned());
                }
            }
        }
    }

    Ok(entries)
}
