use std::sync::Arc;

use arc_swap::ArcSwap;
use log::debug;

use crate::{
    prefix::{MergedPrefixTable, PrefixTable},
    ResolverConfig, Result,
};

/// Holds the current custom prefix table of a schema.
///
/// Readers take a [`MergedPrefixTable`] snapshot and keep translating against it for as long
/// as they like; a concurrent [`PrefixTableHandle::reload`] or [`PrefixTableHandle::replace`]
/// publishes a new table without disturbing them. Loads are lock-free.
///
/// # Examples
///
/// ```rust
/// use attrtyp::{decode, PrefixTableHandle, ResolverConfig};
///
/// let handle = PrefixTableHandle::new(ResolverConfig::default());
/// let before = handle.snapshot();
///
/// let blob = [
///     0x01, 0x00, 0x00, 0x00, 0x16, 0x00, 0x00, 0x00, 0x3B, 0x64, 0x0A, 0x00,
///     0x2B, 0x06, 0x01, 0x04, 0x01, 0x82, 0x8B, 0x13, 0x01, 0x45,
/// ];
/// handle.reload(&blob)?;
///
/// assert_eq!(decode(&handle.snapshot(), 0x643B_0001)?, "1.3.6.1.4.1.34195.1.69.1");
/// assert!(decode(&before, 0x643B_0001).is_err());
/// # Ok::<(), attrtyp::Error>(())
/// ```
#[derive(Debug)]
pub struct PrefixTableHandle {
    current: ArcSwap<PrefixTable>,
    config: ResolverConfig,
}

impl PrefixTableHandle {
    /// Creates a handle holding an empty custom table.
    #[must_use]
    pub fn new(config: ResolverConfig) -> Self {
        PrefixTableHandle {
            current: ArcSwap::from_pointee(PrefixTable::new()),
            config,
        }
    }

    /// Creates a handle from a `prefixMap` blob.
    ///
    /// # Errors
    /// See [`crate::prefix::parse_prefix_map_with`].
    pub fn from_prefix_map(data: &[u8], config: ResolverConfig) -> Result<Self> {
        let table = PrefixTable::from_prefix_map_with(data, &config)?;
        Ok(PrefixTableHandle {
            current: ArcSwap::from_pointee(table),
            config,
        })
    }

    /// Parses `data` and publishes it as the new custom table.
    ///
    /// On error the current table stays in place.
    ///
    /// # Errors
    /// See [`crate::prefix::parse_prefix_map_with`].
    pub fn reload(&self, data: &[u8]) -> Result<()> {
        let table = PrefixTable::from_prefix_map_with(data, &self.config)?;
        self.replace(table);
        Ok(())
    }

    /// Publishes `table` as the new custom table.
    pub fn replace(&self, table: impl Into<Arc<PrefixTable>>) {
        let table = table.into();
        debug!("publishing prefix table with {} custom entries", table.len());
        self.current.store(table);
    }

    /// The custom table as of now.
    #[must_use]
    pub fn current(&self) -> Arc<PrefixTable> {
        self.current.load_full()
    }

    /// A merged view of the current custom table, unaffected by later swaps.
    #[must_use]
    pub fn snapshot(&self) -> MergedPrefixTable {
        MergedPrefixTable::with_config(self.current.load_full(), &self.config)
    }

    /// The configuration used for parsing and merging.
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }
}

impl Default for PrefixTableHandle {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}
