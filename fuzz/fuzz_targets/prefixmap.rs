#![no_main]

use libfuzzer_sys::fuzz_target;
use attrtyp::{PrefixTable, ResolverConfig};

fuzz_target!(|data: &[u8]| {
    if let Ok(table) = PrefixTable::from_prefix_map_with(data, &ResolverConfig::lenient()) {
        // whatever parses must serialize again
        let _ = table.to_prefix_map().unwrap();
    }
});
