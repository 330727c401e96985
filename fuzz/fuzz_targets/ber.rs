#![no_main]

use libfuzzer_sys::fuzz_target;
use attrtyp::oid::{decode_oid, encode_oid};

fuzz_target!(|data: &[u8]| {
    if let Ok(oid) = decode_oid(data) {
        // padded groups decode fine but encode canonically, so compare arcs
        let encoded = encode_oid(oid.arcs()).unwrap();
        assert_eq!(decode_oid(&encoded).unwrap(), oid);
    }
});
