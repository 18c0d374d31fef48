#![no_main]
use libfuzzer_sys::fuzz_target;
use uri_value::encoding::{decode, normalize, table::*};

fuzz_target!(|data: &str| {
    let dec = decode(data);

    for table in [SEGMENT_ENCODE, QUERY_ENCODE, FRAGMENT_ENCODE, PATH] {
        let once = normalize(data, table);
        assert!(table.validate(once.as_bytes()));
        assert_eq!(decode(&once).as_bytes(), dec.as_bytes());
        assert_eq!(normalize(&once, table), once);
    }
});
