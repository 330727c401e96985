//! Object identifiers and their BER arc encoding.
//!
//! [`Oid`] is an owned arc sequence with a strict dotted-decimal text form: decimal
//! components separated by `.`, no empty components, no leading zeros, at least two
//! components. [`encode_oid`] and [`decode_oid`] convert arc sequences to and from their
//! BER bytes.
//!
//! # Examples
//!
//! ```rust
//! use attrtyp::oid::Oid;
//!
//! let oid: Oid = "1.2.840.113556.1.4.1".parse()?;
//! assert_eq!(oid.len(), 7);
//! assert_eq!(oid.to_string(), "1.2.840.113556.1.4.1");
//!
//! let (parent, last) = oid.split_last().unwrap();
//! assert_eq!(parent, &[1, 2, 840, 113556, 1, 4]);
//! assert_eq!(last, 1);
//! # Ok::<(), attrtyp::Error>(())
//! ```

mod ber;

pub use ber::{decode_oid, encode_oid};

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// An object identifier, stored as its sequence of arcs.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Oid(Vec<u32>);

impl Oid {
    /// Create an OID from arc values.
    pub fn new(arcs: impl IntoIterator<Item = u32>) -> Self {
        Oid(arcs.into_iter().collect())
    }

    /// Create an OID from a slice of arcs.
    #[must_use]
    pub fn from_slice(arcs: &[u32]) -> Self {
        Oid(arcs.to_vec())
    }

    /// Parse the dotted-decimal text form.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidOidSyntax`] for empty input, empty or non-numeric
    /// components, components with leading zeros, or fewer than two components, and
    /// [`crate::Error::ArcOutOfRange`] for a component that does not fit into `u32`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attrtyp::{oid::Oid, Error};
    ///
    /// assert_eq!(Oid::parse("2.5.5.12")?.arcs(), &[2, 5, 5, 12]);
    /// assert!(matches!(Oid::parse("2.5..12"), Err(Error::InvalidOidSyntax(_))));
    /// assert!(matches!(Oid::parse("2.05"), Err(Error::InvalidOidSyntax(_))));
    /// assert!(matches!(Oid::parse("2"), Err(Error::InvalidOidSyntax(_))));
    /// # Ok::<(), attrtyp::Error>(())
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let mut arcs = Vec::new();

        for component in text.split('.') {
            let valid = !component.is_empty()
                && component.bytes().all(|b| b.is_ascii_digit())
                && (component.len() == 1 || !component.starts_with('0'));
            if !valid {
                return Err(Error::InvalidOidSyntax(text.to_string()));
            }

            // all digits, so the only way to fail is overflow
            let value: u64 = component
                .parse()
                .map_err(|_| Error::ArcOutOfRange(u64::MAX))?;
            let arc = u32::try_from(value).map_err(|_| Error::ArcOutOfRange(value))?;
            arcs.push(arc);
        }

        if arcs.len() < 2 {
            return Err(Error::InvalidOidSyntax(text.to_string()));
        }

        Ok(Oid(arcs))
    }

    /// Decode BER content bytes. See [`decode_oid`].
    ///
    /// # Errors
    /// Returns [`crate::Error::MalformedBerEncoding`] on a malformed stream.
    pub fn from_ber(data: &[u8]) -> Result<Self> {
        decode_oid(data)
    }

    /// Encode into BER content bytes. See [`encode_oid`].
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArcSequence`] if the arcs cannot be BER encoded.
    pub fn to_ber(&self) -> Result<Vec<u8>> {
        encode_oid(&self.0)
    }

    /// Get the arc values.
    #[must_use]
    pub fn arcs(&self) -> &[u32] {
        &self.0
    }

    /// Get the number of arcs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the OID has no arcs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Split into the arcs before the last one and the last arc.
    #[must_use]
    pub fn split_last(&self) -> Option<(&[u32], u32)> {
        self.0.split_last().map(|(last, parent)| (parent, *last))
    }

    /// The OID one level below this one.
    #[must_use]
    pub fn child(&self, arc: u32) -> Self {
        let mut arcs = Vec::with_capacity(self.0.len() + 1);
        arcs.extend_from_slice(&self.0);
        arcs.push(arc);
        Oid(arcs)
    }

    /// Check if this OID starts with the given arcs.
    #[must_use]
    pub fn starts_with(&self, prefix: &[u32]) -> bool {
        self.0.starts_with(prefix)
    }
}

/// Render arcs in dotted-decimal form.
pub(crate) fn write_dotted(f: &mut impl fmt::Write, arcs: &[u32]) -> fmt::Result {
    for (i, arc) in arcs.iter().enumerate() {
        if i > 0 {
            f.write_char('.')?;
        }
        write!(f, "{arc}")?;
    }
    Ok(())
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dotted(f, &self.0)
    }
}

impl fmt::Debug for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oid({self})")
    }
}

impl FromStr for Oid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Oid::parse(s)
    }
}

impl From<Vec<u32>> for Oid {
    fn from(arcs: Vec<u32>) -> Self {
        Oid(arcs)
    }
}

impl From<&[u32]> for Oid {
    fn from(arcs: &[u32]) -> Self {
        Oid::from_slice(arcs)
    }
}

// Vec<u32> and [u32] hash alike, which keeps HashMap<Oid, _> lookups by slice valid
impl Borrow<[u32]> for Oid {
    fn borrow(&self) -> &[u32] {
        &self.0
    }
}

impl AsRef<[u32]> for Oid {
    fn as_ref(&self) -> &[u32] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(Oid::parse("0.0").unwrap().arcs(), &[0, 0]);
        assert_eq!(Oid::parse("2.5.4.0").unwrap().arcs(), &[2, 5, 4, 0]);
        assert_eq!(
            Oid::parse("1.3.6.1.4.1.34195.1.69.420").unwrap().arcs(),
            &[1, 3, 6, 1, 4, 1, 34195, 1, 69, 420]
        );
        assert_eq!(
            Oid::parse("2.4294967295").unwrap().arcs(),
            &[2, u32::MAX]
        );
    }

    #[test]
    fn test_parse_syntax_errors() {
        for text in [
            "", ".", "2", "2.", ".2.5", "2..5", "2.5.a", "2.-5", "2.+5", "2.5 ", " 2.5", "02.5",
            "2.05", "2.5.00", "2,5",
        ] {
            assert!(
                matches!(Oid::parse(text), Err(Error::InvalidOidSyntax(_))),
                "'{text}' should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_overflow() {
        assert!(matches!(
            Oid::parse("2.4294967296"),
            Err(Error::ArcOutOfRange(4_294_967_296))
        ));
        assert!(matches!(
            Oid::parse("2.5.99999999999999999999999"),
            Err(Error::ArcOutOfRange(_))
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        let oid = Oid::new([0, 9, 2342, 19200300, 100]);
        assert_eq!(oid.to_string(), "0.9.2342.19200300.100");
        assert_eq!(oid.to_string().parse::<Oid>().unwrap(), oid);
        assert_eq!(format!("{oid:?}"), "Oid(0.9.2342.19200300.100)");
    }

    #[test]
    fn test_split_last_and_child() {
        let oid = Oid::new([2, 5, 6]);
        let child = oid.child(2);
        assert_eq!(child.arcs(), &[2, 5, 6, 2]);
        assert!(child.starts_with(oid.arcs()));

        let (parent, last) = child.split_last().unwrap();
        assert_eq!(parent, oid.arcs());
        assert_eq!(last, 2);

        assert!(Oid::default().split_last().is_none());
    }

    #[test]
    fn test_ber_methods() {
        let oid = Oid::new([2, 5, 5, 12]);
        let bytes = oid.to_ber().unwrap();
        assert_eq!(bytes, [0x55, 0x05, 0x0C]);
        assert_eq!(Oid::from_ber(&bytes).unwrap(), oid);
    }
}
