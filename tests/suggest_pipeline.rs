use std::sync::Arc;

use sawsdl_suggest::ontology::{
    Class, Individual, Iri, Ontology, OntologyRegistry, StaticOntologyLoader,
};
use sawsdl_suggest::schema::{InMemorySchemaReader, SchemaElement, SchemaFragment, SAWSDL_NAMESPACE};
use sawsdl_suggest::{SuggestError, SuggestionService};

const SERVICE: &str = "http://example.org/wublast.sawsdl";
const ONTOLOGY: &str = "http://example.org/webService.owl";
const PROGRAM_CONCEPT: &str = "http://example.org/webService#BlastProgram";
const SEARCH_CONCEPT: &str = "http://example.org/webService#Search";

fn iri(text: &str) -> Iri {
    Iri::new(text).expect("valid iri")
}

fn annotated(name: &str, concept: &str) -> SchemaElement {
    SchemaElement::new(name).with_attribute(SAWSDL_NAMESPACE, "modelReference", concept)
}

/// Ontology with a program concept (two individuals) and a search concept
/// (two labeled/unlabeled subclasses plus one opaque one).
fn blast_ontology() -> Ontology {
    let mut document = Ontology::new(iri("http://example.org/webService"));

    let program = iri(PROGRAM_CONCEPT);
    document
        .add_class(Class::new(program.clone()))
        .expect("program concept");
    for member in ["blastn", "blastp"] {
        let mut individual = Individual::new(iri(&format!(
            "http://example.org/webService#{member}"
        )));
        individual.assert_type(program.clone());
        document.add_individual(individual).expect("individual");
    }

    let search = iri(SEARCH_CONCEPT);
    document
        .add_class(Class::new(search.clone()))
        .expect("search concept");
    let mut nucleotide = Class::new(iri("http://example.org/webService#NucleotideSearch"))
        .with_label("Nucleotide Search");
    nucleotide.add_parent(search.clone());
    document.add_class(nucleotide).expect("nucleotide search");
    let mut protein =
        Class::new(iri("http://example.org/webService#ProteinSearch")).with_label("");
    protein.add_parent(search.clone());
    document.add_class(protein).expect("protein search");

    document
}

fn suggestion_service(fragments: Vec<SchemaFragment>, document: Ontology) -> SuggestionService {
    let mut reader = InMemorySchemaReader::new();
    reader.register(SERVICE, fragments);
    let mut loader = StaticOntologyLoader::new();
    loader.register(ONTOLOGY, document);
    SuggestionService::new(
        Arc::new(reader),
        Arc::new(OntologyRegistry::new(Arc::new(loader))),
    )
}

#[tokio::test]
async fn unknown_parameter_fails_with_parameter_not_found() {
    let service = suggestion_service(
        vec![SchemaFragment::new(vec![annotated(
            "program",
            PROGRAM_CONCEPT,
        )])],
        blast_ontology(),
    );

    let err = service
        .suggest_param_values(SERVICE, "missing", ONTOLOGY)
        .await
        .expect_err("unknown parameter");
    assert!(matches!(err, SuggestError::ParameterNotFound { .. }));
}

#[tokio::test]
async fn parameter_matching_is_case_sensitive() {
    let service = suggestion_service(
        vec![SchemaFragment::new(vec![annotated(
            "program",
            PROGRAM_CONCEPT,
        )])],
        blast_ontology(),
    );

    let err = service
        .suggest_param_values(SERVICE, "Program", ONTOLOGY)
        .await
        .expect_err("case mismatch");
    assert!(matches!(err, SuggestError::ParameterNotFound { .. }));
}

#[tokio::test]
async fn unannotated_parameter_yields_empty_suggestions() {
    let service = suggestion_service(
        vec![SchemaFragment::new(vec![
            SchemaElement::new("plain"),
            SchemaElement::new("blank").with_attribute(SAWSDL_NAMESPACE, "modelReference", ""),
        ])],
        blast_ontology(),
    );

    let plain = service
        .suggest_param_values(SERVICE, "plain", ONTOLOGY)
        .await
        .expect("no annotation is not an error");
    assert!(plain.is_empty());

    let blank = service
        .suggest_param_values(SERVICE, "blank", ONTOLOGY)
        .await
        .expect("empty annotation is not an error");
    assert!(blank.is_empty());
}

#[tokio::test]
async fn individuals_are_suggested_by_local_name() {
    let service = suggestion_service(
        vec![SchemaFragment::new(vec![annotated(
            "program",
            PROGRAM_CONCEPT,
        )])],
        blast_ontology(),
    );

    let values = service
        .suggest_param_values(SERVICE, "program", ONTOLOGY)
        .await
        .expect("suggestions");
    assert_eq!(values, vec!["blastn".to_owned(), "blastp".to_owned()]);
}

#[tokio::test]
async fn subclasses_fall_back_from_label_to_local_name() {
    let service = suggestion_service(
        vec![SchemaFragment::new(vec![annotated(
            "search",
            SEARCH_CONCEPT,
        )])],
        blast_ontology(),
    );

    let values = service
        .suggest_param_values(SERVICE, "search", ONTOLOGY)
        .await
        .expect("suggestions");
    assert_eq!(
        values,
        vec!["Nucleotide Search".to_owned(), "ProteinSearch".to_owned()]
    );
}

#[tokio::test]
async fn opaque_subclass_identifiers_are_suggested_in_full() {
    let mut document = blast_ontology();
    let mut opaque = Class::new(iri("urn:blast:opaque-id-123"));
    opaque.add_parent(iri(SEARCH_CONCEPT));
    document.add_class(opaque).expect("opaque subclass");

    let service = suggestion_service(
        vec![SchemaFragment::new(vec![annotated(
            "search",
            SEARCH_CONCEPT,
        )])],
        document,
    );

    let values = service
        .suggest_param_values(SERVICE, "search", ONTOLOGY)
        .await
        .expect("suggestions");
    assert!(values.contains(&"urn:blast:opaque-id-123".to_owned()));
}

#[tokio::test]
async fn individuals_always_precede_subclass_entries() {
    // Individual `zeta` sorts after subclass label `Alpha Search` in every
    // lexical ordering, so the grouping, not the ordering, must place it first.
    let mut document = Ontology::new(iri("http://example.org/webService"));
    let concept = iri(SEARCH_CONCEPT);
    document
        .add_class(Class::new(concept.clone()))
        .expect("concept");
    let mut subclass = Class::new(iri("http://example.org/webService#AlphaSearch"))
        .with_label("Alpha Search");
    subclass.add_parent(concept.clone());
    document.add_class(subclass).expect("subclass");
    let mut member = Individual::new(iri("http://example.org/webService#zeta"));
    member.assert_type(concept.clone());
    document.add_individual(member).expect("member");

    let service = suggestion_service(
        vec![SchemaFragment::new(vec![annotated(
            "search",
            SEARCH_CONCEPT,
        )])],
        document,
    );

    let values = service
        .suggest_param_values(SERVICE, "search", ONTOLOGY)
        .await
        .expect("suggestions");
    assert_eq!(values, vec!["zeta".to_owned(), "Alpha Search".to_owned()]);
}

#[tokio::test]
async fn last_fragment_wins_when_parameter_is_declared_twice() {
    let service = suggestion_service(
        vec![
            SchemaFragment::new(vec![annotated("program", SEARCH_CONCEPT)]),
            SchemaFragment::new(vec![annotated("program", PROGRAM_CONCEPT)]),
        ],
        blast_ontology(),
    );

    let values = service
        .suggest_param_values(SERVICE, "program", ONTOLOGY)
        .await
        .expect("suggestions");
    assert_eq!(values, vec!["blastn".to_owned(), "blastp".to_owned()]);
}

#[tokio::test]
async fn repeated_calls_return_identical_sequences() {
    let service = suggestion_service(
        vec![SchemaFragment::new(vec![annotated(
            "program",
            PROGRAM_CONCEPT,
        )])],
        blast_ontology(),
    );

    let first = service
        .suggest_param_values(SERVICE, "program", ONTOLOGY)
        .await
        .expect("first call");
    let second = service
        .suggest_param_values(SERVICE, "program", ONTOLOGY)
        .await
        .expect("second call");
    assert_eq!(first, second);
}

#[tokio::test]
async fn unresolvable_annotations_fail_with_concept_resolution() {
    let service = suggestion_service(
        vec![SchemaFragment::new(vec![annotated(
            "program",
            "http://example.org/webService#Unknown",
        )])],
        blast_ontology(),
    );

    let err = service
        .suggest_param_values(SERVICE, "program", ONTOLOGY)
        .await
        .expect_err("unknown concept");
    assert!(matches!(err, SuggestError::ConceptResolution { .. }));
}

#[tokio::test]
async fn unloadable_ontologies_fail_with_concept_resolution() {
    let service = suggestion_service(
        vec![SchemaFragment::new(vec![annotated(
            "program",
            PROGRAM_CONCEPT,
        )])],
        blast_ontology(),
    );

    let err = service
        .suggest_param_values(SERVICE, "program", "http://example.org/missing.owl")
        .await
        .expect_err("unknown ontology");
    assert!(matches!(err, SuggestError::ConceptResolution { .. }));
}

#[tokio::test]
async fn malformed_annotations_fail_with_invalid_annotation() {
    let service = suggestion_service(
        vec![SchemaFragment::new(vec![annotated(
            "program",
            "not a valid iri",
        )])],
        blast_ontology(),
    );

    let err = service
        .suggest_param_values(SERVICE, "program", ONTOLOGY)
        .await
        .expect_err("malformed annotation");
    assert!(matches!(err, SuggestError::InvalidAnnotation { .. }));
}
