//! Catalogue of SSSOM slots and their value types.

/// Version of the SSSOM data model the checks follow.
pub const SSSOM_VERSION: &str = "1.0";

/// Permitted values of `subject_type`, `predicate_type` and `object_type`.
pub const ENTITY_TYPES: &[&str] = &[
    "owl class",
    "owl object property",
    "owl data property",
    "owl annotation property",
    "owl named individual",
    "skos concept",
    "rdfs resource",
    "rdfs class",
    "rdfs literal",
    "rdfs datatype",
    "rdf property",
    "composed entity",
];

/// Permitted values of `mapping_cardinality`.
pub const MAPPING_CARDINALITIES: &[&str] = &["1:1", "1:n", "n:1", "1:0", "0:1", "n:n"];

/// Permitted values of `predicate_modifier`.
pub const PREDICATE_MODIFIERS: &[&str] = &["Not"];

/// Local names of the SEMAPV terms accepted as `mapping_justification`.
pub const SEMAPV_JUSTIFICATIONS: &[&str] = &[
    "LexicalMatching",
    "LogicalReasoning",
    "CompositeMatching",
    "UnspecifiedMatching",
    "SemanticSimilarityThresholdMatching",
    "LexicalSimilarityThresholdMatching",
    "MappingChaining",
    "MappingReview",
    "ManualMappingCuration",
    "MappingInversion",
    "StructuralMatching",
    "InstanceBasedMatching",
    "BackgroundKnowledgeBasedMatching",
];

/// Value type of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// Free text.
    Text,
    /// Compact URI, expanded through the prefix map.
    Curie,
    /// Absolute URI.
    Uri,
    /// Decimal number in `[0, 1]`.
    Score,
    /// ISO 8601 calendar date.
    Date,
    /// One of a fixed set of values.
    Enum(&'static [&'static str]),
    /// Nested structure (metadata only).
    Structured,
}

/// Definition of a single slot.
#[derive(Debug, Clone, Copy)]
pub struct SlotSpec {
    pub name: &'static str,
    pub kind: SlotKind,
    pub required: bool,
    /// Values are separated by `|` in the TSV.
    pub multivalued: bool,
    /// RDF property used in graph serialisations.
    pub property: &'static str,
}

const fn slot(name: &'static str, kind: SlotKind, property: &'static str) -> SlotSpec {
    SlotSpec {
        name,
        kind,
        required: false,
        multivalued: false,
        property,
    }
}

const fn required(name: &'static str, kind: SlotKind, property: &'static str) -> SlotSpec {
    SlotSpec {
        name,
        kind,
        required: true,
        multivalued: false,
        property,
    }
}

const fn multi(name: &'static str, kind: SlotKind, property: &'static str) -> SlotSpec {
    SlotSpec {
        name,
        kind,
        required: false,
        multivalued: true,
        property,
    }
}

/// Slots allowed as TSV columns.
pub const MAPPING_SLOTS: &[SlotSpec] = &[
    slot("record_id", SlotKind::Curie, "sssom:record_id"),
    required("subject_id", SlotKind::Curie, "owl:annotatedSource"),
    slot("subject_label", SlotKind::Text, "sssom:subject_label"),
    slot("subject_category", SlotKind::Text, "sssom:subject_category"),
    slot("subject_type", SlotKind::Enum(ENTITY_TYPES), "sssom:subject_type"),
    slot("subject_source", SlotKind::Curie, "sssom:subject_source"),
    slot("subject_source_version", SlotKind::Text, "sssom:subject_source_version"),
    multi("subject_preprocessing", SlotKind::Curie, "sssom:subject_preprocessing"),
    multi("subject_match_field", SlotKind::Curie, "sssom:subject_match_field"),
    required("predicate_id", SlotKind::Curie, "owl:annotatedProperty"),
    slot("predicate_label", SlotKind::Text, "sssom:predicate_label"),
    slot("predicate_modifier", SlotKind::Enum(PREDICATE_MODIFIERS), "sssom:predicate_modifier"),
    slot("predicate_type", SlotKind::Enum(ENTITY_TYPES), "sssom:predicate_type"),
    required("object_id", SlotKind::Curie, "owl:annotatedTarget"),
    slot("object_label", SlotKind::Text, "sssom:object_label"),
    slot("object_category", SlotKind::Text, "sssom:object_category"),
    slot("object_type", SlotKind::Enum(ENTITY_TYPES), "sssom:object_type"),
    slot("object_source", SlotKind::Curie, "sssom:object_source"),
    slot("object_source_version", SlotKind::Text, "sssom:object_source_version"),
    multi("object_preprocessing", SlotKind::Curie, "sssom:object_preprocessing"),
    multi("object_match_field", SlotKind::Curie, "sssom:object_match_field"),
    required("mapping_justification", SlotKind::Curie, "sssom:mapping_justification"),
    multi("author_id", SlotKind::Curie, "pav:authoredBy"),
    multi("author_label", SlotKind::Text, "sssom:author_label"),
    multi("reviewer_id", SlotKind::Curie, "sssom:reviewer_id"),
    multi("reviewer_label", SlotKind::Text, "sssom:reviewer_label"),
    multi("creator_id", SlotKind::Curie, "dcterms:creator"),
    multi("creator_label", SlotKind::Text, "sssom:creator_label"),
    slot("license", SlotKind::Uri, "dcterms:license"),
    slot("mapping_provider", SlotKind::Uri, "sssom:mapping_provider"),
    slot("mapping_source", SlotKind::Curie, "sssom:mapping_source"),
    slot("mapping_tool", SlotKind::Text, "sssom:mapping_tool"),
    slot("mapping_tool_version", SlotKind::Text, "sssom:mapping_tool_version"),
    slot("mapping_date", SlotKind::Date, "pav:authoredOn"),
    slot("publication_date", SlotKind::Date, "dcterms:created"),
    slot("confidence", SlotKind::Score, "sssom:confidence"),
    slot("reviewer_agreement", SlotKind::Score, "sssom:reviewer_agreement"),
    multi("curation_rule", SlotKind::Curie, "sssom:curation_rule"),
    multi("curation_rule_text", SlotKind::Text, "sssom:curation_rule_text"),
    slot("mapping_cardinality", SlotKind::Enum(MAPPING_CARDINALITIES), "sssom:mapping_cardinality"),
    multi("match_string", SlotKind::Text, "sssom:match_string"),
    slot("semantic_similarity_score", SlotKind::Score, "sssom:semantic_similarity_score"),
    slot("semantic_similarity_measure", SlotKind::Text, "sssom:semantic_similarity_measure"),
    slot("similarity_score", SlotKind::Score, "sssom:similarity_score"),
    slot("similarity_measure", SlotKind::Text, "sssom:similarity_measure"),
    slot("issue_tracker_item", SlotKind::Curie, "sssom:issue_tracker_item"),
    multi("see_also", SlotKind::Text, "rdfs:seeAlso"),
    slot("other", SlotKind::Text, "sssom:other"),
    slot("comment", SlotKind::Text, "rdfs:comment"),
];

/// Slots allowed in the `#` metadata block.
pub const MAPPING_SET_SLOTS: &[SlotSpec] = &[
    slot("curie_map", SlotKind::Structured, "sssom:curie_map"),
    required("mapping_set_id", SlotKind::Uri, "sssom:mapping_set_id"),
    slot("mapping_set_version", SlotKind::Text, "owl:versionInfo"),
    multi("mapping_set_source", SlotKind::Uri, "prov:wasDerivedFrom"),
    slot("mapping_set_title", SlotKind::Text, "dcterms:title"),
    slot("mapping_set_description", SlotKind::Text, "dcterms:description"),
    multi("creator_id", SlotKind::Curie, "dcterms:creator"),
    multi("creator_label", SlotKind::Text, "sssom:creator_label"),
    required("license", SlotKind::Uri, "dcterms:license"),
    slot("subject_type", SlotKind::Enum(ENTITY_TYPES), "sssom:subject_type"),
    slot("subject_source", SlotKind::Curie, "sssom:subject_source"),
    slot("subject_source_version", SlotKind::Text, "sssom:subject_source_version"),
    slot("object_type", SlotKind::Enum(ENTITY_TYPES), "sssom:object_type"),
    slot("object_source", SlotKind::Curie, "sssom:object_source"),
    slot("object_source_version", SlotKind::Text, "sssom:object_source_version"),
    slot("mapping_provider", SlotKind::Uri, "sssom:mapping_provider"),
    slot("mapping_tool", SlotKind::Text, "sssom:mapping_tool"),
    slot("mapping_tool_version", SlotKind::Text, "sssom:mapping_tool_version"),
    slot("mapping_date", SlotKind::Date, "pav:authoredOn"),
    slot("publication_date", SlotKind::Date, "dcterms:created"),
    multi("subject_match_field", SlotKind::Curie, "sssom:subject_match_field"),
    multi("object_match_field", SlotKind::Curie, "sssom:object_match_field"),
    multi("subject_preprocessing", SlotKind::Curie, "sssom:subject_preprocessing"),
    multi("object_preprocessing", SlotKind::Curie, "sssom:object_preprocessing"),
    multi("see_also", SlotKind::Text, "rdfs:seeAlso"),
    slot("issue_tracker", SlotKind::Uri, "sssom:issue_tracker"),
    slot("other", SlotKind::Text, "sssom:other"),
    slot("comment", SlotKind::Text, "rdfs:comment"),
    slot("extension_definitions", SlotKind::Structured, "sssom:extension_definitions"),
    slot("sssom_version", SlotKind::Text, "sssom:sssom_version"),
];

/// Look up a mapping (column) slot by name.
pub fn mapping_slot(name: &str) -> Option<&'static SlotSpec> {
    MAPPING_SLOTS.iter().find(|s| s.name == name)
}

/// Look up a mapping-set (metadata) slot by name.
pub fn mapping_set_slot(name: &str) -> Option<&'static SlotSpec> {
    MAPPING_SET_SLOTS.iter().find(|s| s.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_mapping_slots() {
        let required: Vec<&str> = MAPPING_SLOTS
            .iter()
            .filter(|s| s.required)
            .map(|s| s.name)
            .collect();

        assert_eq!(
            required,
            vec!["subject_id", "predicate_id", "object_id", "mapping_justification"]
        );
    }

    #[test]
    fn test_slot_lookup() {
        assert_eq!(mapping_slot("confidence").unwrap().kind, SlotKind::Score);
        assert!(mapping_slot("author_id").unwrap().multivalued);
        assert!(mapping_slot("curie_map").is_none());
        assert!(mapping_set_slot("license").unwrap().required);
    }
}
