//! SSSOM document model: slot catalogue, prefixes and the parsed TSV.

mod curie;
mod document;
mod slots;

pub use curie::{BUILTIN_PREFIXES, PrefixMap, is_curie, split_curie};
pub use document::{MappingRow, MappingSetDocument};
pub use slots::{
    ENTITY_TYPES, MAPPING_CARDINALITIES, MAPPING_SET_SLOTS, MAPPING_SLOTS, PREDICATE_MODIFIERS,
    SEMAPV_JUSTIFICATIONS, SSSOM_VERSION, SlotKind, SlotSpec, mapping_set_slot, mapping_slot,
};
