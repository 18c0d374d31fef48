#![no_main]
use libfuzzer_sys::{arbitrary::Arbitrary, fuzz_target};
use uri_value::{Uri, UriErrorKind};

#[derive(Arbitrary, Debug)]
struct Components<'a> {
    scheme: &'a str,
    user: &'a str,
    password: Option<&'a str>,
    host: &'a str,
    port: Option<u32>,
    path: &'a str,
    query: &'a str,
    fragment: &'a str,
}

fuzz_target!(|c: Components<'_>| {
    let base = Uri::new()
        .with_scheme(c.scheme)
        .with_user_info(c.user, c.password)
        .with_host(c.host);
    let before = base.clone();

    let uri = match base.with_port(c.port) {
        Ok(uri) => uri,
        Err(e) => {
            assert_eq!(e.kind(), UriErrorKind::InvalidPort);
            assert!(c.port.map_or(false, |p| p > 65535));
            assert_eq!(base, before);
            return;
        }
    };
    if let Some(port) = uri.port() {
        assert_ne!(Some(port), uri.default_port());
    }
    assert_eq!(uri.with_scheme("").with_scheme(uri.scheme()), uri);

    let Ok(uri) = uri.with_path(c.path) else {
        return;
    };
    let Ok(uri) = uri.with_query(c.query) else {
        return;
    };
    let uri = uri.with_fragment(c.fragment);

    assert_eq!(uri.authority().is_empty(), uri.host().is_empty());
    if uri.has_authority() {
        let mut auth = String::new();
        if !uri.user_info().is_empty() {
            auth.push_str(uri.user_info());
            auth.push('@');
        }
        auth.push_str(uri.host());
        if let Some(port) = uri.port() {
            auth.push(':');
            auth.push_str(&port.to_string());
        }
        assert_eq!(uri.authority(), auth);
    }

    // Stored components are already in canonical form.
    let again = uri
        .with_path(uri.path_raw().as_str())
        .and_then(|u| u.with_query(uri.query_raw().as_str()))
        .unwrap()
        .with_fragment(uri.fragment_raw().as_str());
    assert_eq!(again, uri);

    let s = uri.to_string();
    if uri.has_authority() {
        assert!(s.contains(uri.authority()));
    }
});
