//! BER encoding of OID arcs (X.690 Section 8.19).
//!
//! The first two arcs are folded into one sub-identifier (`40 * a0 + a1`, or `80 + a1`
//! under the `2` root); that value and every following arc are written as big-endian
//! base-128 groups with the continuation bit set on all but the last byte.
//!
//! ```rust
//! use attrtyp::oid::{decode_oid, encode_oid};
//!
//! let bytes = encode_oid(&[1, 3, 6, 1, 4, 1, 34195, 1, 69])?;
//! assert_eq!(bytes, [0x2B, 0x06, 0x01, 0x04, 0x01, 0x82, 0x8B, 0x13, 0x01, 0x45]);
//! assert_eq!(decode_oid(&bytes)?.arcs(), &[1, 3, 6, 1, 4, 1, 34195, 1, 69]);
//! # Ok::<(), attrtyp::Error>(())
//! ```

use crate::{io::Parser, oid::Oid, Error, Result};

/// Fold the first two arcs into the leading sub-identifier.
fn combine_leading_arcs(arcs: &[u32]) -> Result<u64> {
    let [first, second, ..] = *arcs else {
        return Err(Error::InvalidArcSequence(format!(
            "need at least two arcs, got {}",
            arcs.len()
        )));
    };

    match first {
        0 | 1 if second > 39 => Err(Error::InvalidArcSequence(format!(
            "second arc {second} exceeds 39 under root {first}"
        ))),
        0 | 1 => Ok(40 * u64::from(first) + u64::from(second)),
        2 => Ok(80 + u64::from(second)),
        _ => Err(Error::InvalidArcSequence(format!(
            "first arc must be 0, 1 or 2, got {first}"
        ))),
    }
}

/// Append `value` as one big-endian base-128 group.
fn write_base128(out: &mut Vec<u8>, value: u64) {
    let groups = (u64::BITS - value.leading_zeros()).div_ceil(7).max(1);

    for i in (0..groups).rev() {
        let mut byte = ((value >> (i * 7)) & 0x7F) as u8;
        if i > 0 {
            byte |= 0x80;
        }
        out.push(byte);
    }
}

/// Encode a sequence of OID arcs into BER content bytes.
///
/// # Errors
/// Returns [`crate::Error::InvalidArcSequence`] if there are fewer than two arcs, the first
/// arc is not 0, 1 or 2, or the second arc exceeds 39 under the 0 and 1 roots.
pub fn encode_oid(arcs: &[u32]) -> Result<Vec<u8>> {
    let leading = combine_leading_arcs(arcs)?;

    let mut out = Vec::with_capacity(arcs.len() + 4);
    write_base128(&mut out, leading);
    for &arc in &arcs[2..] {
        write_base128(&mut out, u64::from(arc));
    }

    Ok(out)
}

/// Decode BER content bytes into an [`Oid`].
///
/// # Errors
/// Returns [`crate::Error::MalformedBerEncoding`] if the input is empty, ends inside a group,
/// overflows the 64-bit accumulator, or yields an arc that does not fit into `u32`.
pub fn decode_oid(data: &[u8]) -> Result<Oid> {
    if data.is_empty() {
        return Err(malformed_ber_error!("empty OID encoding"));
    }

    let mut parser = Parser::new(data);
    let mut arcs = Vec::with_capacity(data.len() + 1);

    let leading = read_group(&mut parser)?;
    let (first, second) = if leading < 80 {
        (leading / 40, leading % 40)
    } else {
        (2, leading - 80)
    };
    arcs.push(narrow_arc(first, 0)?);
    arcs.push(narrow_arc(second, 0)?);

    while parser.has_more_data() {
        let offset = parser.pos();
        let value = read_group(&mut parser)?;
        arcs.push(narrow_arc(value, offset)?);
    }

    Ok(Oid::from(arcs))
}

fn read_group(parser: &mut Parser<'_>) -> Result<u64> {
    let offset = parser.pos();
    parser.read_base128().map_err(|err| match err {
        Error::OutOfBounds => malformed_ber_error!(
            "group starting at offset {} is cut off by the end of the data",
            offset
        ),
        other => other,
    })
}

fn narrow_arc(value: u64, offset: usize) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        malformed_ber_error!("arc {} at offset {} does not fit into 32 bits", value, offset)
    })
}
