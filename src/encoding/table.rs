//! Byte pattern tables from RFC 3986.
//!
//! The predefined table constants in this module are documented with
//! the ABNF notation of [RFC 2234]. Tables that are specific to this crate
//! (the path character exclusions, the query token grammar, and the
//! per-component encode sets) are listed after the RFC ones.
//!
//! [RFC 2234]: https://datatracker.ietf.org/doc/html/rfc2234/

use alloc::string::String;

const fn gen_hex_table() -> [u8; 512] {
    const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

    let mut i = 0;
    let mut out = [0; 512];
    while i < 256 {
        out[i * 2] = HEX_DIGITS[i >> 4];
        out[i * 2 + 1] = HEX_DIGITS[i & 0b1111];
        i += 1;
    }
    out
}

const HEX_TABLE: &[u8; 512] = &gen_hex_table();

/// A table determining the byte patterns allowed in a string.
///
/// It is guaranteed that the unencoded bytes allowed are ASCII and that
/// an unencoded `%` is not allowed.
#[derive(Clone, Copy, Debug)]
pub struct Table {
    arr: [u8; 256],
    allows_enc: bool,
}

impl Table {
    /// Generates a table that only allows the given unencoded bytes.
    ///
    /// # Panics
    ///
    /// Panics if any of the bytes is not ASCII or is `%`.
    pub const fn gen(mut bytes: &[u8]) -> Table {
        let mut arr = [0; 256];
        while let [cur, rem @ ..] = bytes {
            assert!(cur.is_ascii() && *cur != b'%', "non-ASCII or %");
            arr[*cur as usize] = 1;
            bytes = rem;
        }
        Table {
            arr,
            allows_enc: false,
        }
    }

    /// Marks this table as allowing percent-encoded octets.
    pub const fn enc(mut self) -> Table {
        self.allows_enc = true;
        self
    }

    /// Combines two tables into one.
    ///
    /// Returns a new table that allows all the byte patterns allowed
    /// either by `self` or by `other`.
    pub const fn or(mut self, other: &Table) -> Table {
        let mut i = 0;
        while i < 128 {
            self.arr[i] |= other.arr[i];
            i += 1;
        }
        self.allows_enc |= other.allows_enc;
        self
    }

    /// Subtracts from this table.
    ///
    /// Returns a new table that allows all the byte patterns allowed
    /// by `self` but not allowed by `other`.
    pub const fn sub(mut self, other: &Table) -> Table {
        let mut i = 0;
        while i < 128 {
            if other.arr[i] != 0 {
                self.arr[i] = 0;
            }
            i += 1;
        }
        if other.allows_enc {
            self.allows_enc = false;
        }
        self
    }

    /// Returns `true` if the table is a subset of another, i.e., `other`
    /// allows at least all the byte patterns allowed by `self`.
    pub const fn is_subset(&self, other: &Table) -> bool {
        let mut i = 0;
        while i < 128 {
            if self.arr[i] != 0 && other.arr[i] == 0 {
                return false;
            }
            i += 1;
        }
        !self.allows_enc || other.allows_enc
    }

    /// Returns the specified table value.
    #[inline]
    pub(crate) const fn get(&self, x: u8) -> u8 {
        self.arr[x as usize]
    }

    /// Returns `true` if the given unencoded byte is allowed by the table.
    #[inline]
    pub const fn allows(&self, x: u8) -> bool {
        self.get(x) != 0
    }

    /// Returns `true` if percent-encoded octets are allowed by the table.
    #[inline]
    pub const fn allows_enc(&self) -> bool {
        self.allows_enc
    }

    /// Pushes a byte to the buffer, percent-encoding it if it is not allowed.
    #[inline]
    pub(crate) fn encode(&self, x: u8, buf: &mut String) {
        if self.allows(x) {
            buf.push(x as char);
        } else {
            buf.push('%');
            buf.push(HEX_TABLE[x as usize * 2] as char);
            buf.push(HEX_TABLE[x as usize * 2 + 1] as char);
        }
    }

    /// Returns the index of the first byte not allowed by the table.
    ///
    /// Percent-encoded octets count as allowed only if the table allows them.
    pub(crate) const fn first_disallowed(&self, s: &[u8]) -> Option<usize> {
        let mut i = 0;
        while i < s.len() {
            let x = s[i];
            if x == b'%' && self.allows_enc {
                if i + 2 >= s.len() || HEXDIG.get(s[i + 1]) & HEXDIG.get(s[i + 2]) == 0 {
                    return Some(i);
                }
                i += 3;
            } else if self.allows(x) {
                i += 1;
            } else {
                return Some(i);
            }
        }
        None
    }

    /// Validates the given byte sequence with the table.
    #[inline]
    pub const fn validate(&self, s: &[u8]) -> bool {
        self.first_disallowed(s).is_none()
    }
}

const fn gen(bytes: &[u8]) -> Table {
    Table::gen(bytes)
}

/// ALPHA = A-Z / a-z
pub const ALPHA: &Table = &gen(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

/// DIGIT = 0-9
pub const DIGIT: &Table = &gen(b"0123456789");

/// HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"
///                / "a" / "b" / "c" / "d" / "e" / "f"
pub const HEXDIG: &Table = &DIGIT.or(&gen(b"ABCDEFabcdef"));

/// reserved = gen-delims / sub-delims
pub const RESERVED: &Table = &GEN_DELIMS.or(SUB_DELIMS);

/// gen-delims = ":" / "/" / "?" / "#" / "[" / "]" / "@"
pub const GEN_DELIMS: &Table = &gen(b":/?#[]@");

/// sub-delims = "!" / "$" / "&" / "'" / "(" / ")"
///            / "*" / "+" / "," / ";" / "="
pub const SUB_DELIMS: &Table = &gen(b"!$&'()*+,;=");

/// unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"
pub const UNRESERVED: &Table = &ALPHA.or(DIGIT).or(&gen(b"-._~"));

/// pchar = unreserved / pct-encoded / sub-delims / ":" / "@"
pub const PCHAR: &Table = &UNRESERVED.or(SUB_DELIMS).or(&gen(b":@")).enc();

/// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
pub const SCHEME: &Table = &ALPHA.or(DIGIT).or(&gen(b"+-."));

/// path = *( pchar / "/" )
pub const PATH: &Table = &PCHAR.or(&gen(b"/"));

/// query = *( pchar / "/" / "?" )
pub const QUERY: &Table = &PCHAR.or(&gen(b"/?"));

/// fragment = *( pchar / "/" / "?" )
pub const FRAGMENT: &Table = QUERY;

/// Characters rejected in a path: `"*" / "?" / DQUOTE / "<" / ">" / "|" / ":"`
pub const PATH_FORBIDDEN: &Table = &gen(b"*?\"<>|:");

/// query-token = 1*( ALPHA / DIGIT / "_" / "-" )
pub const QUERY_TOKEN: &Table = &ALPHA.or(DIGIT).or(&gen(b"_-"));

/// The encode set of a stored path segment: `pchar` without the rejected characters.
///
/// A path joined from segments encoded with this table always passes
/// path validation again, and a decoded `/` stays encoded as `%2F`.
pub const SEGMENT_ENCODE: &Table = &PCHAR.sub(PATH_FORBIDDEN);

/// The encode set of a stored query.
pub const QUERY_ENCODE: &Table = QUERY;

/// The encode set of a stored fragment.
pub const FRAGMENT_ENCODE: &Table = FRAGMENT;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_encode_set() {
        assert!(SEGMENT_ENCODE.is_subset(PCHAR));
        assert!(!SEGMENT_ENCODE.allows(b'/'));
        assert!(SEGMENT_ENCODE.allows(b'@'));
        assert!(SEGMENT_ENCODE.allows_enc());
        for &x in b"*?\"<>|:" {
            assert!(!SEGMENT_ENCODE.allows(x));
        }
    }

    #[test]
    fn first_disallowed() {
        assert_eq!(PATH.first_disallowed(b"/a/b%20c"), None);
        assert_eq!(PATH.first_disallowed(b"/a%2"), Some(2));
        assert_eq!(SEGMENT_ENCODE.first_disallowed(b"a:b"), Some(1));
        assert_eq!(QUERY_TOKEN.first_disallowed(b"a-b_c%41"), Some(5));
        // NUL is not allowed unencoded.
        assert!(!QUERY.validate(b"\0"));
    }
}
