#![no_main]
use libfuzzer_sys::fuzz_target;
use uri_value::Uri;

fuzz_target!(|data: &str| {
    let Ok(u1) = Uri::parse(data) else {
        return;
    };
    let s1 = u1.to_string();
    let u2 = Uri::parse(&s1).unwrap();
    assert_eq!(s1, u2.to_string());

    // User information and port are only written out along with a host.
    if u1.has_authority() || (u1.user_info().is_empty() && u1.port().is_none()) {
        assert_eq!(u1, u2);
    }
});
