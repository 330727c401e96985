//! Prefix tables.
//!
//! A prefix table maps 16-bit codes to OID prefixes. Two of them take part in every
//! translation:
//!
//! - [`builtin`] - 39 fixed entries, compiled in
//! - [`PrefixTable`] - the schema's custom entries, loaded from the `prefixMap` attribute
//!   with [`parse_prefix_map`] and written back with [`serialize_prefix_map`]
//!
//! [`MergedPrefixTable`] answers lookups against both, and [`PrefixTableHandle`] keeps the
//! current custom table swappable while readers hold on to their snapshots.

pub mod builtin;
mod merged;
mod prefixmap;
mod snapshot;
mod table;

pub use merged::MergedPrefixTable;
pub use prefixmap::{
    parse_prefix_map, parse_prefix_map_with, serialize_prefix_map, PREFIX_MAP_HEADER_SIZE,
    PREFIX_MAP_RECORD_HEADER_SIZE,
};
pub use snapshot::PrefixTableHandle;
pub use table::PrefixTable;

use crate::oid::Oid;

/// One record of a prefix table: `prefix` stands for the OID subtree `oid_prefix`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrefixEntry {
    /// The 16-bit code, the high half of an ATTRTYP
    pub prefix: u16,
    /// The OID prefix the code stands for
    pub oid_prefix: Oid,
}

impl PrefixEntry {
    /// Create a new entry.
    #[must_use]
    pub fn new(prefix: u16, oid_prefix: Oid) -> Self {
        PrefixEntry { prefix, oid_prefix }
    }
}
