//! The custom prefix table of a schema.

use std::collections::HashMap;

use log::warn;

use crate::{
    oid::Oid,
    prefix::{builtin, parse_prefix_map_with, serialize_prefix_map, PrefixEntry},
    Error, ResolverConfig, Result,
};

/// A schema's custom prefix table.
///
/// Keeps its entries in insertion order (the order they are serialized in) and indexes them
/// by code and by OID prefix. Codes are unique; when built from records that reuse a code,
/// the first record wins and later ones are dropped with a warning.
///
/// A table is never patched while it is shared. Edits ([`PrefixTable::insert`],
/// [`PrefixTable::assign`]) happen on an owned copy, which is then installed as a whole,
/// see [`crate::prefix::PrefixTableHandle::replace`].
///
/// # Examples
///
/// ```rust
/// use attrtyp::prefix::PrefixTable;
///
/// let mut table = PrefixTable::new();
/// let prefix = table.assign(&"1.3.6.1.4.1.34195.1".parse()?)?;
/// assert_eq!(prefix, 0x0027);
/// assert_eq!(table.get(prefix).unwrap().to_string(), "1.3.6.1.4.1.34195.1");
///
/// let reloaded = PrefixTable::from_prefix_map(&table.to_prefix_map()?)?;
/// assert_eq!(reloaded.entries(), table.entries());
/// # Ok::<(), attrtyp::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PrefixTable {
    entries: Vec<PrefixEntry>,
    by_prefix: HashMap<u16, usize>,
    by_oid: HashMap<Oid, u16>,
}

impl PrefixTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from records, in order.
    ///
    /// Entries colliding with the built-in table are kept, but logged; which side answers is
    /// decided by the [`crate::CollisionPolicy`] of the merged view.
    pub fn from_entries(entries: impl IntoIterator<Item = PrefixEntry>) -> Self {
        let mut table = PrefixTable::new();

        for entry in entries {
            if table.by_prefix.contains_key(&entry.prefix) {
                warn!(
                    "ignoring duplicate prefix 0x{:04x} => {}",
                    entry.prefix, entry.oid_prefix
                );
                continue;
            }

            if builtin::lookup(entry.prefix).is_some() {
                warn!(
                    "custom prefix 0x{:04x} => {} reuses a built-in code",
                    entry.prefix, entry.oid_prefix
                );
            }
            if let Some(builtin_prefix) = builtin::reverse_lookup(entry.oid_prefix.arcs()) {
                warn!(
                    "custom prefix 0x{:04x} duplicates built-in prefix 0x{:04x} ({})",
                    entry.prefix, builtin_prefix, entry.oid_prefix
                );
            }

            table.push(entry);
        }

        table
    }

    /// Parses a `prefixMap` blob with the default configuration.
    ///
    /// # Errors
    /// See [`crate::prefix::parse_prefix_map_with`].
    pub fn from_prefix_map(data: &[u8]) -> Result<Self> {
        Self::from_prefix_map_with(data, &ResolverConfig::default())
    }

    /// Parses a `prefixMap` blob.
    ///
    /// # Errors
    /// See [`crate::prefix::parse_prefix_map_with`].
    pub fn from_prefix_map_with(data: &[u8], config: &ResolverConfig) -> Result<Self> {
        Ok(Self::from_entries(parse_prefix_map_with(data, config)?))
    }

    /// Serializes the table into a `prefixMap` blob.
    ///
    /// # Errors
    /// See [`crate::prefix::serialize_prefix_map`].
    pub fn to_prefix_map(&self) -> Result<Vec<u8>> {
        serialize_prefix_map(&self.entries)
    }

    /// The OID prefix for `prefix`.
    #[must_use]
    pub fn get(&self, prefix: u16) -> Option<&Oid> {
        self.by_prefix
            .get(&prefix)
            .map(|&index| &self.entries[index].oid_prefix)
    }

    /// The code whose OID prefix equals `arcs` exactly.
    ///
    /// If several codes share an OID prefix, the first one in table order is returned.
    #[must_use]
    pub fn find(&self, arcs: &[u32]) -> Option<u16> {
        self.by_oid.get(arcs).copied()
    }

    /// Returns `true` if the code is present.
    #[must_use]
    pub fn contains_prefix(&self, prefix: u16) -> bool {
        self.by_prefix.contains_key(&prefix)
    }

    /// All entries in table order.
    #[must_use]
    pub fn entries(&self) -> &[PrefixEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds a new entry.
    ///
    /// # Errors
    /// - [`crate::Error::PrefixConflict`] if `prefix` is a built-in code or already present,
    ///   or `oid_prefix` is already present under another code
    /// - [`crate::Error::InvalidArcSequence`] if `oid_prefix` cannot be BER encoded (it
    ///   could not be written back into the `prefixMap`)
    pub fn insert(&mut self, prefix: u16, oid_prefix: Oid) -> Result<()> {
        if builtin::is_builtin_prefix(prefix) || self.contains_prefix(prefix) {
            return Err(Error::PrefixConflict(prefix));
        }
        if let Some(existing) = self.find(oid_prefix.arcs()) {
            return Err(Error::PrefixConflict(existing));
        }
        oid_prefix.to_ber()?;

        self.push(PrefixEntry::new(prefix, oid_prefix));
        Ok(())
    }

    /// Returns the code for `oid_prefix`, adding an entry if neither this table nor the
    /// built-in table has one.
    ///
    /// New codes are the lowest free ones above the built-in range.
    ///
    /// # Errors
    /// - [`crate::Error::PrefixSpaceExhausted`] if every code is taken
    /// - [`crate::Error::InvalidArcSequence`] if `oid_prefix` cannot be BER encoded
    pub fn assign(&mut self, oid_prefix: &Oid) -> Result<u16> {
        if let Some(prefix) = builtin::reverse_lookup(oid_prefix.arcs()) {
            return Ok(prefix);
        }
        if let Some(prefix) = self.find(oid_prefix.arcs()) {
            return Ok(prefix);
        }

        let first_free = (builtin::BUILTIN_PREFIX_COUNT as u16..=u16::MAX)
            .find(|prefix| !self.contains_prefix(*prefix))
            .ok_or(Error::PrefixSpaceExhausted)?;

        self.insert(first_free, oid_prefix.clone())?;
        Ok(first_free)
    }

    fn push(&mut self, entry: PrefixEntry) {
        self.by_prefix.insert(entry.prefix, self.entries.len());
        self.by_oid
            .entry(entry.oid_prefix.clone())
            .or_insert(entry.prefix);
        self.entries.push(entry);
    }
}

impl FromIterator<PrefixEntry> for PrefixTable {
    fn from_iter<T: IntoIterator<Item = PrefixEntry>>(iter: T) -> Self {
        PrefixTable::from_entries(iter)
    }
}
