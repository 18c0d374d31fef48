use super::table::{Table, HEXDIG};
use alloc::{string::String, vec::Vec};

const fn gen_octet_table(hi: bool) -> [u8; 256] {
    let mut out = [0xFF; 256];
    let shift = (hi as u8) * 4;

    let mut i = 0;
    while i < 10 {
        out[(i + b'0') as usize] = i << shift;
        i += 1;
    }
    while i < 16 {
        out[(i - 10 + b'A') as usize] = i << shift;
        out[(i - 10 + b'a') as usize] = i << shift;
        i += 1;
    }
    out
}

static OCTET_TABLE_HI: &[u8; 256] = &gen_octet_table(true);
static OCTET_TABLE_LO: &[u8; 256] = &gen_octet_table(false);

/// Decodes a percent-encoded octet.
fn decode_octet(mut hi: u8, mut lo: u8) -> Option<u8> {
    hi = OCTET_TABLE_HI[hi as usize];
    lo = OCTET_TABLE_LO[lo as usize];
    if hi & 1 == 0 && lo & 0x80 == 0 {
        Some(hi | lo)
    } else {
        None
    }
}

/// Decodes a percent-encoded byte sequence.
///
/// A `%` that does not start a valid octet is copied as is.
/// Returns `None` if there is nothing to decode.
pub(crate) fn decode(s: &[u8]) -> Option<Vec<u8>> {
    // Skip bytes that are not '%'.
    let mut i = s.iter().position(|&x| x == b'%')?;

    let mut buf = Vec::with_capacity(s.len());
    buf.extend_from_slice(&s[..i]);

    let mut decoded_any = false;
    while i < s.len() {
        let x = s[i];
        if x == b'%' && i + 2 < s.len() {
            if let Some(octet) = decode_octet(s[i + 1], s[i + 2]) {
                buf.push(octet);
                decoded_any = true;
                i += 3;
                continue;
            }
        }
        buf.push(x);
        i += 1;
    }

    decoded_any.then_some(buf)
}

/// Percent-encodes a byte sequence with a table, appending to a buffer.
///
/// Every byte not allowed unencoded by the table is encoded,
/// including any `%`.
pub(crate) fn encode_to(s: &[u8], table: &Table, buf: &mut String) {
    buf.reserve(s.len());
    for &x in s {
        table.encode(x, buf);
    }
}

/// Checks that every `%` in the bytes starts a valid percent-encoded octet.
pub(crate) const fn validate_estr(s: &[u8]) -> bool {
    let mut i = 0;
    while i < s.len() {
        if s[i] == b'%' {
            if i + 2 >= s.len() || HEXDIG.get(s[i + 1]) & HEXDIG.get(s[i + 2]) == 0 {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}
