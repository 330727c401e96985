//! The binary `prefixMap` attribute.
//!
//! The schema stores its custom prefix table as one binary value. All integers are
//! little-endian:
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 4 | number of records |
//! | 4 | 4 | total length of the blob, header included |
//! | 8 | ... | records |
//!
//! Each record is `prefix: u16`, `oid_length: u16` and `oid_length` bytes of BER encoded
//! OID prefix.
//!
//! # Examples
//!
//! ```rust
//! use attrtyp::prefix::{parse_prefix_map, serialize_prefix_map, PrefixEntry};
//! use attrtyp::oid::Oid;
//!
//! let entries = vec![PrefixEntry::new(0x643B, "1.3.6.1.4.1.34195.1.69".parse::<Oid>()?)];
//! let blob = serialize_prefix_map(&entries)?;
//! assert_eq!(blob.len(), 8 + 4 + 10);
//! assert_eq!(parse_prefix_map(&blob)?, entries);
//! # Ok::<(), attrtyp::Error>(())
//! ```

use log::{debug, trace};

use crate::{
    io::{write_bytes_at, write_le_at, Parser},
    oid::decode_oid,
    prefix::PrefixEntry,
    Error, ResolverConfig, Result,
};

/// Size of the `count` + `totalLength` header.
pub const PREFIX_MAP_HEADER_SIZE: usize = 8;

/// Size of the `prefix` + `oidLength` fields in front of every record's OID bytes.
pub const PREFIX_MAP_RECORD_HEADER_SIZE: usize = 4;

/// Parse a `prefixMap` blob with the default (strict) configuration.
///
/// # Errors
/// See [`parse_prefix_map_with`].
pub fn parse_prefix_map(data: &[u8]) -> Result<Vec<PrefixEntry>> {
    parse_prefix_map_with(data, &ResolverConfig::default())
}

/// Parse a `prefixMap` blob into its records, preserving their order.
///
/// The record framing is walked and checked against the declared length before any OID is
/// looked at, so a blob with a wrong length reports that rather than a bad record inside it.
/// No deduplication takes place here; duplicate codes are a concern of the table built
/// from the records.
///
/// # Errors
/// Checked in this order:
/// - [`crate::Error::TruncatedPrefixMap`] if the blob is shorter than its header, or a record
///   header or a record's OID bytes run past the end of the data
/// - [`crate::Error::LengthMismatch`] if header plus records disagree with the declared total
///   length, or with the buffer length (unless `config.allow_trailing_bytes` permits extra
///   bytes behind the records)
/// - [`crate::Error::InvalidEntry`] if a record has a zero OID length or its OID bytes do not
///   decode
pub fn parse_prefix_map_with(data: &[u8], config: &ResolverConfig) -> Result<Vec<PrefixEntry>> {
    if data.len() < PREFIX_MAP_HEADER_SIZE {
        return Err(Error::TruncatedPrefixMap(format!(
            "{} bytes cannot hold the {} byte header",
            data.len(),
            PREFIX_MAP_HEADER_SIZE
        )));
    }

    let mut parser = Parser::new(data);
    let count = parser.read_le::<u32>()?;
    let declared = parser.read_le::<u32>()?;

    // every record needs at least its header, don't trust `count` for the allocation
    let capacity = (count as usize).min(parser.remaining() / PREFIX_MAP_RECORD_HEADER_SIZE);
    let mut records = Vec::with_capacity(capacity);
    let mut expected = PREFIX_MAP_HEADER_SIZE;

    for index in 0..count as usize {
        let record_offset = parser.pos();

        let (prefix, oid_length) = parser
            .transactional(|p| Ok((p.read_le::<u16>()?, p.read_le::<u16>()?)))
            .map_err(|_| {
                Error::TruncatedPrefixMap(format!(
                    "record #{index} header at offset {record_offset} runs past the end of {} bytes",
                    data.len()
                ))
            })?;

        let oid_bytes = parser.read_bytes(usize::from(oid_length)).map_err(|_| {
            Error::TruncatedPrefixMap(format!(
                "record #{index} declares {oid_length} OID bytes, only {} remain",
                parser.remaining()
            ))
        })?;

        expected += PREFIX_MAP_RECORD_HEADER_SIZE + usize::from(oid_length);
        records.push((prefix, oid_bytes));
    }

    let trailing_ok = config.allow_trailing_bytes && expected < data.len();
    if expected != declared as usize || (expected != data.len() && !trailing_ok) {
        return Err(Error::LengthMismatch {
            declared,
            expected,
            actual: data.len(),
        });
    }

    let mut entries = Vec::with_capacity(records.len());
    for (index, (prefix, oid_bytes)) in records.into_iter().enumerate() {
        if oid_bytes.is_empty() {
            return Err(invalid_entry_error!(index, "prefix 0x{:04x} has an empty OID", prefix));
        }

        let oid_prefix = decode_oid(oid_bytes)
            .map_err(|err| invalid_entry_error!(index, "prefix 0x{:04x} - {}", prefix, err))?;

        trace!("prefixMap record #{index}: 0x{prefix:04x} => {oid_prefix}");
        entries.push(PrefixEntry { prefix, oid_prefix });
    }

    debug!(
        "parsed prefixMap with {} entries ({} bytes)",
        entries.len(),
        expected
    );

    Ok(entries)
}

/// Serialize entries into a `prefixMap` blob, the inverse of [`parse_prefix_map`].
///
/// # Errors
/// - [`crate::Error::InvalidArcSequence`] if an OID prefix cannot be BER encoded
/// - [`crate::Error::InvalidEntry`] if an encoded OID prefix is longer than `u16::MAX` bytes,
///   or the blob would outgrow the 32-bit count and length fields
pub fn serialize_prefix_map(entries: &[PrefixEntry]) -> Result<Vec<u8>> {
    let mut encoded = Vec::with_capacity(entries.len());
    let mut total = PREFIX_MAP_HEADER_SIZE;

    for (index, entry) in entries.iter().enumerate() {
        let bytes = entry.oid_prefix.to_ber()?;
        let Ok(oid_length) = u16::try_from(bytes.len()) else {
            return Err(invalid_entry_error!(
                index,
                "encoded OID prefix of {} bytes exceeds {}",
                bytes.len(),
                u16::MAX
            ));
        };

        total += PREFIX_MAP_RECORD_HEADER_SIZE + bytes.len();
        if u32::try_from(total).is_err() {
            return Err(invalid_entry_error!(
                index,
                "prefixMap would exceed the 32-bit length field"
            ));
        }

        encoded.push((entry.prefix, oid_length, bytes));
    }

    let count = u32::try_from(entries.len())
        .map_err(|_| invalid_entry_error!(entries.len(), "too many entries for a prefixMap"))?;

    let mut data = vec![0u8; total];
    let mut offset = 0;

    write_le_at(&mut data, &mut offset, count)?;
    write_le_at(&mut data, &mut offset, total as u32)?;
    for (prefix, oid_length, bytes) in &encoded {
        write_le_at(&mut data, &mut offset, *prefix)?;
        write_le_at(&mut data, &mut offset, *oid_length)?;
        write_bytes_at(&mut data, &mut offset, bytes)?;
    }

    debug!(
        "serialized prefixMap with {} entries ({} bytes)",
        entries.len(),
        total
    );

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{oid::Oid, test::fixtures::*};

    #[test]
    fn test_parse_reference_blob() {
        let entries = parse_prefix_map(&reference_prefix_map()).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].prefix, 0x643B);
        assert_eq!(entries[0].oid_prefix.to_string(), "1.3.6.1.4.1.34195.1.69");
        assert_eq!(entries[1].prefix, 0x563D);
        assert_eq!(entries[1].oid_prefix.to_string(), "1.3.6.1.4.1.34195.1.420");
    }

    #[test]
    fn test_serialize_reproduces_reference_blob() {
        let entries = parse_prefix_map(&reference_prefix_map()).unwrap();
        assert_eq!(serialize_prefix_map(&entries).unwrap(), reference_prefix_map());
    }

    #[test]
    fn test_empty_map() {
        let blob = serialize_prefix_map(&[]).unwrap();
        assert_eq!(blob, [0, 0, 0, 0, 8, 0, 0, 0]);
        assert!(parse_prefix_map(&blob).unwrap().is_empty());
    }

    #[test]
    fn test_short_header() {
        for len in 0..PREFIX_MAP_HEADER_SIZE {
            let blob = vec![0u8; len];
            assert!(matches!(
                parse_prefix_map(&blob),
                Err(Error::TruncatedPrefixMap(_))
            ));
        }
    }

    #[test]
    fn test_declared_length_disagrees() {
        let mut blob = reference_prefix_map();
        blob[4] = 0x26;
        assert!(matches!(
            parse_prefix_map(&blob),
            Err(Error::LengthMismatch {
                declared: 0x26,
                expected: 0x25,
                actual: 0x25
            })
        ));
    }

    #[test]
    fn test_truncated_mid_record() {
        let blob = reference_prefix_map();

        // inside the second record's OID bytes
        assert!(matches!(
            parse_prefix_map(&blob[..blob.len() - 3]),
            Err(Error::TruncatedPrefixMap(_))
        ));

        // inside the second record's header
        assert!(matches!(
            parse_prefix_map(&blob[..8 + 14 + 2]),
            Err(Error::TruncatedPrefixMap(_))
        ));
    }

    #[test]
    fn test_record_count_exceeds_data() {
        let mut blob = reference_prefix_map();
        blob[0] = 3;
        assert!(matches!(
            parse_prefix_map(&blob),
            Err(Error::TruncatedPrefixMap(_))
        ));

        let mut blob = reference_prefix_map();
        blob[0] = 1;
        assert!(matches!(
            parse_prefix_map(&blob),
            Err(Error::LengthMismatch { expected: 22, .. })
        ));
    }

    #[test]
    fn test_length_checked_before_records() {
        // declared 0x99 bytes, 12 supplied, and the only record has an empty OID
        let blob = [
            0x01, 0x00, 0x00, 0x00, 0x99, 0x00, 0x00, 0x00, 0x3B, 0x64, 0x00, 0x00,
        ];
        assert_eq!(
            parse_prefix_map(&blob),
            Err(Error::LengthMismatch {
                declared: 0x99,
                expected: 12,
                actual: 12
            })
        );

        // same for a record whose OID does not decode
        let mut blob = reference_prefix_map();
        let last = blob.len() - 1;
        blob[last] |= 0x80;
        blob.push(0x00);
        assert!(matches!(
            parse_prefix_map(&blob),
            Err(Error::LengthMismatch { actual: 0x26, .. })
        ));
    }

    #[test]
    fn test_zero_length_oid() {
        let blob = [
            0x01, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x3B, 0x64, 0x00, 0x00,
        ];
        assert!(matches!(
            parse_prefix_map(&blob),
            Err(Error::InvalidEntry { index: 0, .. })
        ));
    }

    #[test]
    fn test_undecodable_oid() {
        // second record's OID ends with a continuation byte
        let mut blob = reference_prefix_map();
        let last = blob.len() - 1;
        blob[last] = 0x80 | blob[last];
        assert!(matches!(
            parse_prefix_map(&blob),
            Err(Error::InvalidEntry { index: 1, .. })
        ));
    }

    #[test]
    fn test_trailing_bytes() {
        let mut blob = reference_prefix_map();
        blob.extend_from_slice(&[0, 0, 0, 0]);

        assert!(matches!(
            parse_prefix_map(&blob),
            Err(Error::LengthMismatch {
                declared: 0x25,
                expected: 0x25,
                actual: 0x29
            })
        ));

        let entries = parse_prefix_map_with(&blob, &ResolverConfig::lenient()).unwrap();
        assert_eq!(entries.len(), 2);

        // lenient still insists on the declared length
        blob[4] = 0x29;
        assert!(matches!(
            parse_prefix_map_with(&blob, &ResolverConfig::lenient()),
            Err(Error::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let entries = vec![
            PrefixEntry::new(0x7000, Oid::new([1, 2, 3])),
            PrefixEntry::new(0x7000, Oid::new([1, 2, 4])),
        ];
        let blob = serialize_prefix_map(&entries).unwrap();
        assert_eq!(parse_prefix_map(&blob).unwrap(), entries);
    }

    #[test]
    fn test_serialize_rejects_unencodable() {
        let entries = vec![PrefixEntry::new(0x7000, Oid::new([7, 1]))];
        assert!(matches!(
            serialize_prefix_map(&entries),
            Err(Error::InvalidArcSequence(_))
        ));

        // 1.2 followed by 13108 five-byte arcs is longer than u16::MAX
        let mut arcs = vec![1, 2];
        arcs.extend(std::iter::repeat(u32::MAX).take(13_108));
        let entries = vec![PrefixEntry::new(0x7000, Oid::from(arcs))];
        assert!(matches!(
            serialize_prefix_map(&entries),
            Err(Error::InvalidEntry { index: 0, .. })
        ));
    }
}
