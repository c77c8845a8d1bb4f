//! CURIE parsing and prefix expansion.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_yaml::Value;

/// Prefixes every SSSOM document may use without declaring them.
pub const BUILTIN_PREFIXES: &[(&str, &str)] = &[
    ("dcterms", "http://purl.org/dc/terms/"),
    ("linkml", "https://w3id.org/linkml/"),
    ("oboInOwl", "http://www.geneontology.org/formats/oboInOwl#"),
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("pav", "http://purl.org/pav/"),
    ("prov", "http://www.w3.org/ns/prov#"),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("semapv", "https://w3id.org/semapv/vocab/"),
    ("skos", "http://www.w3.org/2004/02/skos/core#"),
    ("sssom", "https://w3id.org/sssom/"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
];

static CURIE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z_][A-Za-z0-9_.\-]*):(\S+)$").unwrap());

/// Split a CURIE into prefix and local part.
///
/// Absolute IRIs (`scheme://...`) are not CURIEs.
pub fn split_curie(value: &str) -> Option<(&str, &str)> {
    let caps = CURIE_PATTERN.captures(value)?;
    let prefix = caps.get(1)?.as_str();
    let local = caps.get(2)?.as_str();
    if local.starts_with("//") {
        return None;
    }
    Some((prefix, local))
}

/// Whether `value` is syntactically a CURIE.
pub fn is_curie(value: &str) -> bool {
    split_curie(value).is_some()
}

/// Prefix to namespace IRI bindings, in declaration order.
#[derive(Debug, Clone)]
pub struct PrefixMap {
    prefixes: IndexMap<String, String>,
}

impl PrefixMap {
    /// Only the built-in prefixes.
    pub fn builtin() -> Self {
        Self {
            prefixes: BUILTIN_PREFIXES
                .iter()
                .map(|(p, ns)| (p.to_string(), ns.to_string()))
                .collect(),
        }
    }

    /// Built-in prefixes overlaid with the document's `curie_map`.
    ///
    /// Entries whose key or value is not a string are ignored here; the
    /// schema check reports them.
    pub fn from_metadata(metadata: &IndexMap<String, Value>) -> Self {
        let mut map = Self::builtin();
        if let Some(Value::Mapping(curie_map)) = metadata.get("curie_map") {
            for (prefix, namespace) in curie_map {
                if let (Value::String(prefix), Value::String(namespace)) = (prefix, namespace) {
                    map.prefixes.insert(prefix.clone(), namespace.clone());
                }
            }
        }
        map
    }

    /// Whether `prefix` is bound.
    pub fn contains(&self, prefix: &str) -> bool {
        self.prefixes.contains_key(prefix)
    }

    /// Namespace bound to `prefix`.
    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(|s| s.as_str())
    }

    /// Expand a CURIE to an IRI.
    pub fn expand(&self, curie: &str) -> Option<String> {
        let (prefix, local) = split_curie(curie)?;
        self.namespace(prefix).map(|ns| format!("{}{}", ns, local))
    }

    /// All bindings in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes.iter().map(|(p, ns)| (p.as_str(), ns.as_str()))
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

impl Default for PrefixMap {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_curie() {
        assert_eq!(split_curie("HP:0000118"), Some(("HP", "0000118")));
        assert_eq!(split_curie("skos:exactMatch"), Some(("skos", "exactMatch")));
        assert_eq!(split_curie("orcid:0000-0002-7356-1779"), Some(("orcid", "0000-0002-7356-1779")));
        assert_eq!(split_curie("http://purl.obolibrary.org/obo/HP_1"), None);
        assert_eq!(split_curie("HP 0000118"), None);
        assert_eq!(split_curie("HP:"), None);
        assert_eq!(split_curie(":123"), None);
    }

    #[test]
    fn test_expand_with_curie_map() {
        let metadata: IndexMap<String, Value> = serde_yaml::from_str(
            "curie_map:\n  HP: http://purl.obolibrary.org/obo/HP_\n",
        )
        .unwrap();
        let map = PrefixMap::from_metadata(&metadata);

        assert_eq!(
            map.expand("HP:0000118").as_deref(),
            Some("http://purl.obolibrary.org/obo/HP_0000118")
        );
        assert_eq!(
            map.expand("skos:exactMatch").as_deref(),
            Some("http://www.w3.org/2004/02/skos/core#exactMatch")
        );
        assert_eq!(map.expand("MP:0000001"), None);
    }
}
