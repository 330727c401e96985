//! Schema bootstrap helpers.
//!
//! Reading a directory database starts without a schema: the columns of the object table are
//! named after attribute ids, so the handful of attributes needed to locate the schema
//! objects has to be known up front. This module carries those ids ([`wellknown`]), the
//! attribute value syntaxes ([`AttributeSyntax`]) and the column naming scheme
//! ([`column_name`], [`parse_column_name`]).
//!
//! # Examples
//!
//! ```rust
//! use attrtyp::{decode, schema::{column_name, wellknown, AttributeSyntax}, MergedPrefixTable};
//!
//! let table = MergedPrefixTable::builtin_only();
//! assert_eq!(decode(&table, wellknown::LDAP_DISPLAY_NAME.value())?, "1.2.840.113556.1.2.460");
//! assert_eq!(
//!     column_name(wellknown::LDAP_DISPLAY_NAME, AttributeSyntax::UnicodeString),
//!     "ATTm131532"
//! );
//! # Ok::<(), attrtyp::Error>(())
//! ```

mod column;
mod syntax;

pub use column::{column_name, parse_column_name};
pub use syntax::AttributeSyntax;

/// ATTRTYPs of the attributes and classes needed to find the schema.
pub mod wellknown {
    use crate::AttrTyp;

    /// `objectClass`, `2.5.4.0`
    pub const OBJECT_CLASS: AttrTyp = AttrTyp(0x0000_0000);
    /// `name` (RDN of every object), `1.2.840.113556.1.4.1`
    pub const NAME: AttrTyp = AttrTyp(0x0009_0001);
    /// `governsID` of a class, `1.2.840.113556.1.2.22`
    pub const GOVERNS_ID: AttrTyp = AttrTyp(0x0002_0016);
    /// `attributeID` of an attribute, `1.2.840.113556.1.2.30`
    pub const ATTRIBUTE_ID: AttrTyp = AttrTyp(0x0002_001E);
    /// `attributeSyntax` of an attribute, `1.2.840.113556.1.2.32`
    pub const ATTRIBUTE_SYNTAX: AttrTyp = AttrTyp(0x0002_0020);
    /// `lDAPDisplayName`, `1.2.840.113556.1.2.460`
    pub const LDAP_DISPLAY_NAME: AttrTyp = AttrTyp(0x0002_01CC);
    /// `prefixMap` of the schema container, `1.2.840.113556.1.4.538`
    pub const PREFIX_MAP: AttrTyp = AttrTyp(0x0009_021A);

    /// Class `dMD`, the schema container, `1.2.840.113556.1.3.9`
    pub const DMD: AttrTyp = AttrTyp(0x0003_0009);
    /// Class `classSchema`, `1.2.840.113556.1.3.13`
    pub const CLASS_SCHEMA: AttrTyp = AttrTyp(0x0003_000D);
    /// Class `attributeSchema`, `1.2.840.113556.1.3.14`
    pub const ATTRIBUTE_SCHEMA: AttrTyp = AttrTyp(0x0003_000E);
}
