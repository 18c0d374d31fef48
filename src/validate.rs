//! Component validation.
//!
//! Only the port, the path and the query are checked. Scheme, host, user
//! information and fragment are accepted as they come.

use crate::{
    encoding::table::{PATH_FORBIDDEN, QUERY_TOKEN},
    error::{Result, UriError, UriErrorKind},
};

/// Returns immediately with an error.
macro_rules! err {
    ($index:expr, $kind:ident) => {
        return Err(UriError::new($index, UriErrorKind::$kind))
    };
}

/// Checks that a port fits in the range `0..=65535`.
pub(crate) fn port(port: u32) -> Result<u16> {
    match u16::try_from(port) {
        Ok(port) => Ok(port),
        Err(_) => err!(0, InvalidPort),
    }
}

/// Parses the digits of a port.
///
/// An empty port is no port. A value too large for `u32` saturates,
/// so it fails the range check that follows.
pub(crate) fn port_digits(s: &str) -> Result<Option<u32>> {
    if s.is_empty() {
        return Ok(None);
    }
    let mut value: u32 = 0;
    for (i, x) in s.bytes().enumerate() {
        if !x.is_ascii_digit() {
            err!(i, InvalidPort);
        }
        value = value.saturating_mul(10).saturating_add((x - b'0') as u32);
    }
    Ok(Some(value))
}

/// Checks that a path contains none of `* ? " < > | :`.
pub(crate) fn path(path: &str) -> Result<()> {
    match path.bytes().position(|x| PATH_FORBIDDEN.allows(x)) {
        Some(i) => err!(i, InvalidPath),
        None => Ok(()),
    }
}

/// Checks that a query is empty or has the form `key[=value](&key[=value])*`,
/// where a key is one or more of `[A-Za-z0-9_-]` and a value zero or more.
pub(crate) fn query(query: &str) -> Result<()> {
    let s = query.as_bytes();
    if s.is_empty() {
        return Ok(());
    }

    let skip_token = |mut i: usize| {
        while i < s.len() && QUERY_TOKEN.allows(s[i]) {
            i += 1;
        }
        i
    };

    let mut i = 0;
    loop {
        let key_end = skip_token(i);
        if key_end == i {
            err!(i, InvalidQuery);
        }
        i = key_end;

        if i < s.len() && s[i] == b'=' {
            i = skip_token(i + 1);
        }

        match s.get(i) {
            None => return Ok(()),
            Some(b'&') => i += 1,
            Some(_) => err!(i, InvalidQuery),
        }
    }
}
