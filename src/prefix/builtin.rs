//! The built-in prefix table.
//!
//! These 39 entries are identical on every directory server and never appear in the
//! `prefixMap` attribute. Codes `0x0000..=0x0026` are reserved for them; custom entries are
//! expected to live outside that range.

/// Number of entries in the built-in table.
pub const BUILTIN_PREFIX_COUNT: usize = 39;

/// Prefix code => OID prefix arcs, ordered by code.
static BUILTIN_PREFIXES: [(u16, &[u32]); BUILTIN_PREFIX_COUNT] = [
    (0x0000, &[2, 5, 4]),
    (0x0001, &[2, 5, 6]),
    (0x0002, &[1, 2, 840, 113556, 1, 2]),
    (0x0003, &[1, 2, 840, 113556, 1, 3]),
    (0x0004, &[2, 16, 840, 1, 101, 2, 2, 1]),
    (0x0005, &[2, 16, 840, 1, 101, 2, 2, 3]),
    (0x0006, &[2, 16, 840, 1, 101, 2, 1, 5]),
    (0x0007, &[2, 16, 840, 1, 101, 2, 1, 4]),
    (0x0008, &[2, 5, 5]),
    (0x0009, &[1, 2, 840, 113556, 1, 4]),
    (0x000A, &[1, 2, 840, 113556, 1, 5]),
    (0x000B, &[1, 2, 840, 113556, 1, 4, 260]),
    (0x000C, &[1, 2, 840, 113556, 1, 5, 56]),
    (0x000D, &[1, 2, 840, 113556, 1, 4, 262]),
    (0x000E, &[1, 2, 840, 113556, 1, 5, 57]),
    (0x000F, &[1, 2, 840, 113556, 1, 4, 263]),
    (0x0010, &[1, 2, 840, 113556, 1, 5, 58]),
    (0x0011, &[1, 2, 840, 113556, 1, 5, 73]),
    (0x0012, &[1, 2, 840, 113556, 1, 4, 305]),
    (0x0013, &[0, 9, 2342, 19200300, 100]),
    (0x0014, &[2, 16, 840, 1, 113730, 3]),
    (0x0015, &[0, 9, 2342, 19200300, 100, 1]),
    (0x0016, &[2, 16, 840, 1, 113730, 3, 1]),
    (0x0017, &[1, 2, 840, 113556, 1, 5, 7000]),
    (0x0018, &[2, 5, 21]),
    (0x0019, &[2, 5, 18]),
    (0x001A, &[2, 5, 20]),
    (0x001B, &[1, 3, 6, 1, 4, 1, 1466, 101, 119]),
    (0x001C, &[2, 16, 840, 1, 113730, 3, 2]),
    (0x001D, &[1, 3, 6, 1, 4, 1, 250, 1]),
    (0x001E, &[1, 2, 840, 113549, 1, 9]),
    (0x001F, &[0, 9, 2342, 19200300, 100, 4]),
    (0x0020, &[1, 2, 840, 113556, 1, 6, 23]),
    (0x0021, &[1, 2, 840, 113556, 1, 6, 18, 1]),
    (0x0022, &[1, 2, 840, 113556, 1, 6, 18, 2]),
    (0x0023, &[1, 2, 840, 113556, 1, 6, 13, 3]),
    (0x0024, &[1, 2, 840, 113556, 1, 6, 13, 4]),
    (0x0025, &[1, 3, 6, 1, 1, 1, 1]),
    (0x0026, &[1, 3, 6, 1, 1, 1, 2]),
];

/// Returns `true` if `prefix` is one of the reserved built-in codes.
#[must_use]
pub fn is_builtin_prefix(prefix: u16) -> bool {
    usize::from(prefix) < BUILTIN_PREFIX_COUNT
}

/// Look up the OID prefix of a built-in code.
///
/// # Examples
///
/// ```rust
/// use attrtyp::prefix::builtin;
///
/// assert_eq!(builtin::lookup(0x0008), Some(&[2, 5, 5][..]));
/// assert_eq!(builtin::lookup(0x0027), None);
/// ```
#[must_use]
pub fn lookup(prefix: u16) -> Option<&'static [u32]> {
    // codes are dense and ordered, so the code is the index
    BUILTIN_PREFIXES
        .get(usize::from(prefix))
        .map(|(_, arcs)| *arcs)
}

/// Find the built-in code whose OID prefix equals `arcs` exactly.
#[must_use]
pub fn reverse_lookup(arcs: &[u32]) -> Option<u16> {
    BUILTIN_PREFIXES
        .iter()
        .find(|(_, prefix_arcs)| *prefix_arcs == arcs)
        .map(|(prefix, _)| *prefix)
}

/// Iterate over all built-in entries in code order.
pub fn entries() -> impl Iterator<Item = (u16, &'static [u32])> {
    BUILTIN_PREFIXES.iter().copied()
}
