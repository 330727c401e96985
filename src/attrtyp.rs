//! Compact attribute references and their translation to OIDs.
//!
//! An [`AttrTyp`] packs an OID into 32 bits: the high half is a prefix code standing for
//! everything but the last arc, the low half is that last arc. Translation needs a
//! [`MergedPrefixTable`] to look the code up in.
//!
//! # Examples
//!
//! ```rust
//! use attrtyp::{decode, encode, MergedPrefixTable};
//!
//! let table = MergedPrefixTable::builtin_only();
//! assert_eq!(decode(&table, 0x0008_000C)?, "2.5.5.12");
//! assert_eq!(encode(&table, "2.5.6.2")?, 0x0001_0002);
//! # Ok::<(), attrtyp::Error>(())
//! ```

use std::fmt;

use crate::{oid::Oid, Error, MergedPrefixTable, Result};

/// A compact attribute reference, `0xPPPPIIII`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct AttrTyp(pub u32);

impl AttrTyp {
    /// Create a new reference from its raw value.
    #[must_use]
    pub fn new(value: u32) -> Self {
        AttrTyp(value)
    }

    /// Combine a prefix code and an item.
    #[must_use]
    pub fn from_parts(prefix: u16, item: u16) -> Self {
        AttrTyp((u32::from(prefix) << 16) | u32::from(item))
    }

    /// Get the raw value.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Get the prefix code (high 16 bits).
    #[must_use]
    pub fn prefix(&self) -> u16 {
        (self.0 >> 16) as u16
    }

    /// Get the item (low 16 bits), the last arc of the OID.
    #[must_use]
    pub fn item(&self) -> u16 {
        (self.0 & 0xFFFF) as u16
    }
}

impl From<u32> for AttrTyp {
    fn from(value: u32) -> Self {
        AttrTyp(value)
    }
}

impl From<AttrTyp> for u32 {
    fn from(attrtyp: AttrTyp) -> Self {
        attrtyp.0
    }
}

impl fmt::Debug for AttrTyp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AttrTyp(0x{:08x}, prefix: 0x{:04x}, item: {})",
            self.0,
            self.prefix(),
            self.item()
        )
    }
}

impl fmt::Display for AttrTyp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

impl MergedPrefixTable {
    /// Expand a reference into its OID.
    ///
    /// # Errors
    /// Returns [`crate::Error::UnknownPrefix`] if neither table knows the prefix code.
    pub fn resolve(&self, attrtyp: AttrTyp) -> Result<Oid> {
        let prefix = attrtyp.prefix();
        let arcs = self
            .lookup(prefix)
            .ok_or_else(|| Error::UnknownPrefix(format!("0x{prefix:04x} in {attrtyp}")))?;

        let mut oid = Vec::with_capacity(arcs.len() + 1);
        oid.extend_from_slice(arcs);
        oid.push(u32::from(attrtyp.item()));
        Ok(Oid::from(oid))
    }

    /// Compress an OID into a reference.
    ///
    /// Only an OID exactly one arc below a known prefix can be compressed.
    ///
    /// # Errors
    /// - [`crate::Error::ArcOutOfRange`] if the last arc does not fit into 16 bits
    /// - [`crate::Error::UnknownPrefix`] if no table has the OID minus its last arc as prefix
    pub fn attrtyp(&self, oid: &Oid) -> Result<AttrTyp> {
        let Some((parent, last)) = oid.split_last() else {
            return Err(Error::UnknownPrefix("empty OID".to_string()));
        };

        let item = u16::try_from(last).map_err(|_| Error::ArcOutOfRange(u64::from(last)))?;
        let prefix = self
            .reverse_lookup(parent)
            .ok_or_else(|| Error::UnknownPrefix(format!("no prefix for the parent of {oid}")))?;

        Ok(AttrTyp::from_parts(prefix, item))
    }
}

/// Translate a compact reference into dotted-decimal OID text.
///
/// # Errors
/// Returns [`crate::Error::UnknownPrefix`] if neither table knows the prefix code.
pub fn decode(table: &MergedPrefixTable, reference: u32) -> Result<String> {
    Ok(table.resolve(AttrTyp(reference))?.to_string())
}

/// Translate dotted-decimal OID text into a compact reference.
///
/// # Errors
/// - [`crate::Error::InvalidOidSyntax`] or [`crate::Error::ArcOutOfRange`] if the text does
///   not parse, see [`Oid::parse`]
/// - [`crate::Error::ArcOutOfRange`] if the last arc does not fit into 16 bits
/// - [`crate::Error::UnknownPrefix`] if no table has the OID minus its last arc as prefix
pub fn encode(table: &MergedPrefixTable, oid: &str) -> Result<u32> {
    let oid = Oid::parse(oid)?;
    Ok(table.attrtyp(&oid)?.value())
}
