use strum::{EnumCount, EnumIter, IntoEnumIterator};

use crate::{oid::Oid, AttrTyp};

/// Prefix code of `2.5.5`, the arc all attribute syntaxes hang off.
const SYNTAX_PREFIX: u16 = 0x0008;

/// The value syntax of a schema attribute (`attributeSyntax`).
///
/// Each syntax is the OID `2.5.5.N`, stored in the schema as the ATTRTYP `0x0008_00NN`.
/// The syntax also selects the letter of the attribute's database column, see
/// [`crate::schema::column_name`].
///
/// ## Reference
/// * [MS-ADTS 3.1.1.2.2.2](https://learn.microsoft.com/en-us/openspecs/windows_protocols/ms-adts/7cda533e-d7a4-4aec-a517-91d02ff4a1aa) - LDAP Representations
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumIter, EnumCount)]
pub enum AttributeSyntax {
    /// `2.5.5.0`, no valid syntax
    Undefined = 0,
    /// `2.5.5.1`, `Object(DS-DN)`
    DistinguishedName = 1,
    /// `2.5.5.2`, `String(Object-Identifier)`
    ObjectIdentifier = 2,
    /// `2.5.5.3`, `String(Teletex)` compared case-sensitively
    CaseExactString = 3,
    /// `2.5.5.4`, `String(Teletex)`
    CaseIgnoreString = 4,
    /// `2.5.5.5`, `String(Printable)` or `String(IA5)`
    PrintableString = 5,
    /// `2.5.5.6`, `String(Numeric)`
    NumericString = 6,
    /// `2.5.5.7`, `Object(DN-Binary)` or `Object(OR-Name)`
    DnBinary = 7,
    /// `2.5.5.8`, `Boolean`
    Boolean = 8,
    /// `2.5.5.9`, `Integer` or `Enumeration`
    Integer = 9,
    /// `2.5.5.10`, `String(Octet)` or `Object(Replica-Link)`
    OctetString = 10,
    /// `2.5.5.11`, `String(UTC-Time)` or `String(Generalized-Time)`
    Time = 11,
    /// `2.5.5.12`, `String(Unicode)`
    UnicodeString = 12,
    /// `2.5.5.13`, `Object(Presentation-Address)`
    PresentationAddress = 13,
    /// `2.5.5.14`, `Object(DN-String)` or `Object(Access-Point)`
    DnString = 14,
    /// `2.5.5.15`, `String(NT-Sec-Desc)`
    NtSecurityDescriptor = 15,
    /// `2.5.5.16`, `LargeInteger`
    LargeInteger = 16,
    /// `2.5.5.17`, `String(Sid)`
    Sid = 17,
}

impl AttributeSyntax {
    /// The syntax with the given number (the last arc of `2.5.5.N`).
    #[must_use]
    pub fn from_index(index: u16) -> Option<Self> {
        AttributeSyntax::iter().find(|syntax| syntax.index() == index)
    }

    /// The syntax an `attributeSyntax` value stands for.
    #[must_use]
    pub fn from_attrtyp(attrtyp: AttrTyp) -> Option<Self> {
        if attrtyp.prefix() != SYNTAX_PREFIX {
            return None;
        }
        Self::from_index(attrtyp.item())
    }

    /// The database column letter, `'a'` for [`AttributeSyntax::Undefined`] onwards.
    #[must_use]
    pub fn from_column_letter(letter: char) -> Option<Self> {
        let index = u32::from(letter).checked_sub(u32::from('a'))?;
        Self::from_index(u16::try_from(index).ok()?)
    }

    /// The number `N` of `2.5.5.N`.
    #[must_use]
    pub fn index(self) -> u16 {
        self as u16
    }

    /// The `attributeSyntax` value.
    #[must_use]
    pub fn attrtyp(self) -> AttrTyp {
        AttrTyp::from_parts(SYNTAX_PREFIX, self.index())
    }

    /// The full OID, `2.5.5.N`.
    #[must_use]
    pub fn oid(self) -> Oid {
        Oid::new([2, 5, 5, u32::from(self.index())])
    }

    /// The letter between `ATT` and the attribute id in the database column name.
    #[must_use]
    pub fn column_letter(self) -> char {
        // at most 'a' + 17
        char::from(b'a' + self as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntaxes_are_dense() {
        assert_eq!(AttributeSyntax::COUNT, 18);
        for (index, syntax) in AttributeSyntax::iter().enumerate() {
            assert_eq!(usize::from(syntax.index()), index);
            assert_eq!(AttributeSyntax::from_index(syntax.index()), Some(syntax));
        }
        assert_eq!(AttributeSyntax::from_index(18), None);
    }

    #[test]
    fn test_attrtyp_and_oid() {
        let syntax = AttributeSyntax::UnicodeString;
        assert_eq!(syntax.attrtyp(), AttrTyp(0x0008_000C));
        assert_eq!(syntax.oid().to_string(), "2.5.5.12");
        assert_eq!(AttributeSyntax::from_attrtyp(AttrTyp(0x0008_000C)), Some(syntax));

        assert_eq!(AttributeSyntax::from_attrtyp(AttrTyp(0x0009_000C)), None);
        assert_eq!(AttributeSyntax::from_attrtyp(AttrTyp(0x0008_0012)), None);
    }

    #[test]
    fn test_column_letters() {
        assert_eq!(AttributeSyntax::Undefined.column_letter(), 'a');
        assert_eq!(AttributeSyntax::ObjectIdentifier.column_letter(), 'c');
        assert_eq!(AttributeSyntax::UnicodeString.column_letter(), 'm');
        assert_eq!(AttributeSyntax::Sid.column_letter(), 'r');

        for syntax in AttributeSyntax::iter() {
            assert_eq!(
                AttributeSyntax::from_column_letter(syntax.column_letter()),
                Some(syntax)
            );
        }
        assert_eq!(AttributeSyntax::from_column_letter('s'), None);
        assert_eq!(AttributeSyntax::from_column_letter('A'), None);
    }
}
