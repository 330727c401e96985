use crate::{schema::AttributeSyntax, AttrTyp, Error, Result};

const COLUMN_PREFIX: &str = "ATT";

/// The database column holding `attribute`, e.g. `ATTm589825` for `name`.
///
/// The attribute id is written as a signed 32-bit number, so ids at and above `0x8000_0000`
/// come out negative.
///
/// ```rust
/// use attrtyp::{schema::{column_name, AttributeSyntax}, AttrTyp};
///
/// assert_eq!(column_name(AttrTyp(0), AttributeSyntax::ObjectIdentifier), "ATTc0");
/// assert_eq!(column_name(AttrTyp(0x9000_0001), AttributeSyntax::Integer), "ATTj-1879048191");
/// ```
#[must_use]
pub fn column_name(attribute: AttrTyp, syntax: AttributeSyntax) -> String {
    format!(
        "{COLUMN_PREFIX}{}{}",
        syntax.column_letter(),
        attribute.value() as i32
    )
}

/// Split a column name back into syntax and attribute id.
///
/// # Errors
/// Returns [`crate::Error::InvalidColumnName`] if `name` is not `ATT`, a syntax letter and a
/// signed 32-bit decimal number in the form [`column_name`] writes it, without zero padding
/// or `-0`.
pub fn parse_column_name(name: &str) -> Result<(AttributeSyntax, AttrTyp)> {
    let invalid = || Error::InvalidColumnName(name.to_string());

    let rest = name.strip_prefix(COLUMN_PREFIX).ok_or_else(invalid)?;
    let mut chars = rest.chars();
    let syntax = chars
        .next()
        .and_then(AttributeSyntax::from_column_letter)
        .ok_or_else(invalid)?;

    let digits = chars.as_str();
    let unsigned = digits.strip_prefix('-').unwrap_or(digits);
    // i32::from_str would also take a leading '+' and zero padding
    if unsigned.is_empty()
        || !unsigned.bytes().all(|b| b.is_ascii_digit())
        || (unsigned.len() > 1 && unsigned.starts_with('0'))
        || digits == "-0"
    {
        return Err(invalid());
    }
    let id: i32 = digits.parse().map_err(|_| invalid())?;

    Ok((syntax, AttrTyp(id as u32)))
}
