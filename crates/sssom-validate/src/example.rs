//! Example mapping set shown in the form before the user pastes their own.

/// A small, valid SSSOM/TSV mapping set.
pub fn generate_example() -> String {
    let metadata = [
        "curie_map:",
        "  HP: http://purl.obolibrary.org/obo/HP_",
        "  MP: http://purl.obolibrary.org/obo/MP_",
        "  orcid: https://orcid.org/",
        "mapping_set_id: https://w3id.org/sssom/mappings/example.sssom.tsv",
        "mapping_set_description: Example mappings between HP and MP",
        "license: https://creativecommons.org/publicdomain/zero/1.0/",
    ];
    let columns = [
        "subject_id",
        "subject_label",
        "predicate_id",
        "object_id",
        "object_label",
        "mapping_justification",
        "author_id",
        "confidence",
    ];
    let rows = [
        [
            "HP:0000118",
            "Phenotypic abnormality",
            "skos:exactMatch",
            "MP:0000001",
            "mammalian phenotype",
            "semapv:ManualMappingCuration",
            "orcid:0000-0002-7356-1779",
            "0.9",
        ],
        [
            "HP:0001507",
            "Growth abnormality",
            "skos:exactMatch",
            "MP:0005378",
            "growth/size/body region phenotype",
            "semapv:ManualMappingCuration",
            "orcid:0000-0002-7356-1779",
            "0.85",
        ],
        [
            "HP:0000707",
            "Abnormality of the nervous system",
            "skos:broadMatch",
            "MP:0003631",
            "nervous system phenotype",
            "semapv:LexicalMatching",
            "orcid:0000-0002-7356-1779",
            "0.7",
        ],
    ];

    let mut text = String::new();
    for line in metadata {
        text.push('#');
        text.push_str(line);
        text.push('\n');
    }
    text.push_str(&columns.join("\t"));
    text.push('\n');
    for row in rows {
        text.push_str(&row.join("\t"));
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MappingSetDocument;

    #[test]
    fn test_example_parses() {
        let doc = MappingSetDocument::parse(&generate_example()).unwrap();
        assert_eq!(doc.rows.len(), 3);
        assert_eq!(doc.columns.len(), 8);
        assert!(doc.prefix_map().contains("orcid"));
    }
}
