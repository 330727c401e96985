//! End-to-end translation through the public API: a schema's `prefixMap` is loaded, merged
//! with the built-in table and used to translate in both directions.

use attrtyp::prelude::*;
use attrtyp::schema::wellknown;

const REFERENCE_PREFIX_MAP: [u8; 37] = [
    0x02, 0x00, 0x00, 0x00, 0x25, 0x00, 0x00, 0x00, //
    0x3B, 0x64, 0x0A, 0x00, 0x2B, 0x06, 0x01, 0x04, 0x01, 0x82, 0x8B, 0x13, 0x01, 0x45, //
    0x3D, 0x56, 0x0B, 0x00, 0x2B, 0x06, 0x01, 0x04, 0x01, 0x82, 0x8B, 0x13, 0x01, 0x83, 0x24,
];

fn reference_table() -> MergedPrefixTable {
    MergedPrefixTable::new(PrefixTable::from_prefix_map(&REFERENCE_PREFIX_MAP).unwrap())
}

#[test]
fn builtin_translations() {
    let table = MergedPrefixTable::builtin_only();

    assert_eq!(decode(&table, 0x0008_000C).unwrap(), "2.5.5.12");
    assert_eq!(decode(&table, 0x0001_0002).unwrap(), "2.5.6.2");
    assert_eq!(encode(&table, "2.5.5.12").unwrap(), 0x0008_000C);
    assert_eq!(encode(&table, "2.5.6.2").unwrap(), 0x0001_0002);
}

#[test]
fn custom_translations() {
    let table = reference_table();

    assert_eq!(
        decode(&table, 0x643B_01A4).unwrap(),
        "1.3.6.1.4.1.34195.1.69.420"
    );
    assert_eq!(
        decode(&table, 0x563D_0045).unwrap(),
        "1.3.6.1.4.1.34195.1.420.69"
    );
    assert_eq!(
        encode(&table, "1.3.6.1.4.1.34195.1.69.420").unwrap(),
        0x643B_01A4
    );

    // the built-in half is still there
    assert_eq!(decode(&table, 0x0008_000C).unwrap(), "2.5.5.12");
}

#[test]
fn translation_errors() {
    let table = reference_table();

    assert_eq!(
        encode(&table, "2.5.6.99999"),
        Err(Error::ArcOutOfRange(99_999))
    );
    assert!(matches!(
        encode(&table, "2.5.6.2.7"),
        Err(Error::UnknownPrefix(_))
    ));
    assert!(matches!(
        encode(&table, "1.3.6.1.4.1.34195.1.69.420.1"),
        Err(Error::UnknownPrefix(_))
    ));
    assert!(matches!(
        decode(&table, 0x7FFF_0001),
        Err(Error::UnknownPrefix(_))
    ));
    assert!(matches!(
        encode(&table, "not an oid"),
        Err(Error::InvalidOidSyntax(_))
    ));
}

#[test]
fn prefix_map_errors() {
    let mut wrong_length = REFERENCE_PREFIX_MAP;
    wrong_length[4] = 0x24;
    assert!(matches!(
        PrefixTable::from_prefix_map(&wrong_length),
        Err(Error::LengthMismatch { declared: 0x24, .. })
    ));

    for len in 9..REFERENCE_PREFIX_MAP.len() {
        let result = PrefixTable::from_prefix_map(&REFERENCE_PREFIX_MAP[..len]);
        assert!(
            matches!(
                result,
                Err(Error::TruncatedPrefixMap(_) | Error::InvalidEntry { .. })
            ),
            "cut at {len}: {result:?}"
        );
    }
}

#[test]
fn assigned_prefix_survives_serialization() {
    let table = reference_table();
    let mut custom = table.custom().clone();

    let oid_prefix: Oid = "1.3.6.1.4.1.34195.1.70".parse().unwrap();
    let prefix = custom.assign(&oid_prefix).unwrap();
    let blob = custom.to_prefix_map().unwrap();

    let reloaded = MergedPrefixTable::new(PrefixTable::from_prefix_map(&blob).unwrap());
    let reference = encode(&reloaded, "1.3.6.1.4.1.34195.1.70.5").unwrap();
    assert_eq!(reference, AttrTyp::from_parts(prefix, 5).value());
    assert_eq!(decode(&reloaded, reference).unwrap(), "1.3.6.1.4.1.34195.1.70.5");
}

#[test]
fn handle_reload() {
    let handle = PrefixTableHandle::new(ResolverConfig::default());
    let before = handle.snapshot();

    handle.reload(&REFERENCE_PREFIX_MAP).unwrap();
    let after = handle.snapshot();

    assert!(decode(&before, 0x643B_01A4).is_err());
    assert_eq!(
        decode(&after, 0x643B_01A4).unwrap(),
        "1.3.6.1.4.1.34195.1.69.420"
    );

    // a broken blob leaves the loaded table in place
    assert!(handle.reload(&REFERENCE_PREFIX_MAP[..20]).is_err());
    assert!(decode(&handle.snapshot(), 0x643B_01A4).is_ok());
}

#[test]
fn schema_bootstrap_columns() {
    let table = MergedPrefixTable::builtin_only();

    let syntax = AttributeSyntax::from_attrtyp(AttrTyp(0x0008_000C)).unwrap();
    assert_eq!(syntax, AttributeSyntax::UnicodeString);
    assert_eq!(column_name(wellknown::NAME, syntax), "ATTm589825");
    assert_eq!(
        parse_column_name("ATTc131094").unwrap(),
        (AttributeSyntax::ObjectIdentifier, wellknown::GOVERNS_ID)
    );
    assert_eq!(
        decode(&table, wellknown::PREFIX_MAP.value()).unwrap(),
        "1.2.840.113556.1.4.538"
    );
}
