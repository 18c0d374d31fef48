//! Canonical forms of components.
//!
//! These functions assume that the input has already passed validation.

use crate::encoding::{
    self,
    table::{FRAGMENT_ENCODE, QUERY_ENCODE, SEGMENT_ENCODE},
};
use alloc::string::String;
use core::fmt::Write;

pub(crate) fn scheme(scheme: &str) -> String {
    scheme.to_ascii_lowercase()
}

pub(crate) fn host(host: &str) -> String {
    host.to_ascii_lowercase()
}

/// Joins a user name and a password into the `user[:password]` form.
///
/// An empty password is the same as none. The user information is empty
/// only when both the user and the password are.
pub(crate) fn user_info(user: &str, password: Option<&str>) -> String {
    match password {
        Some(password) if !password.is_empty() => {
            let mut buf = String::with_capacity(user.len() + 1 + password.len());
            buf.push_str(user);
            buf.push(':');
            buf.push_str(password);
            buf
        }
        _ => user.into(),
    }
}

/// Elides a port equal to the well-known port of the scheme.
pub(crate) fn port(port: u16, default: Option<u16>) -> Option<u16> {
    (Some(port) != default).then_some(port)
}

/// Trims the slashes around a path and normalizes its encoding.
///
/// An absolute path keeps a single leading slash. Empty segments are dropped,
/// so `/a//b/` becomes `/a/b`. Each segment is decoded and encoded again,
/// which keeps an encoded slash inside a segment apart from the delimiters.
pub(crate) fn path(path: &str) -> String {
    let mut buf = String::with_capacity(path.len());
    if path.starts_with('/') {
        buf.push('/');
    }
    let mut segments = path.split('/').filter(|seg| !seg.is_empty());
    if let Some(first) = segments.next() {
        encoding::encode_to(encoding::decode(first).as_bytes(), SEGMENT_ENCODE, &mut buf);
        for seg in segments {
            buf.push('/');
            encoding::encode_to(encoding::decode(seg).as_bytes(), SEGMENT_ENCODE, &mut buf);
        }
    }
    buf
}

pub(crate) fn query(query: &str) -> String {
    encoding::normalize(query, QUERY_ENCODE)
}

pub(crate) fn fragment(fragment: &str) -> String {
    encoding::normalize(fragment, FRAGMENT_ENCODE)
}

/// Derives the authority from its parts.
///
/// The authority is empty if and only if the host is empty.
pub(crate) fn authority(user_info: &str, host: &str, port: Option<u16>) -> String {
    let mut buf = String::new();
    if host.is_empty() {
        return buf;
    }
    if !user_info.is_empty() {
        buf.push_str(user_info);
        buf.push('@');
    }
    buf.push_str(host);
    if let Some(port) = port {
        // Writing to a `String` never fails.
        let _ = write!(buf, ":{}", port);
    }
    buf
}
