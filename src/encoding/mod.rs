//! Percent-encoding utilities.
//!
//! Every percent-encoded component of a [`Uri`] is stored in the canonical form
//! produced by [`normalize`]: the input is first [decoded](decode), then
//! [encoded](encode) again with the table of the component. Decoding is lenient,
//! so a stray `%` survives as `%25` instead of being rejected.
//!
//! [`Uri`]: crate::Uri
//!
//! # Examples
//!
//! ```
//! use uri_value::encoding::{decode, encode, normalize, table};
//!
//! let once = normalize("a b%20c/%7e", table::SEGMENT_ENCODE);
//! assert_eq!(once, "a%20b%20c%2F~");
//! // Normalizing twice changes nothing.
//! assert_eq!(normalize(&once, table::SEGMENT_ENCODE), once);
//!
//! assert_eq!(encode("100%", table::QUERY), "100%25");
//! assert_eq!(decode("%E6%B5%8B").into_string().unwrap(), "测");
//! ```

mod imp;
pub mod table;

pub use table::Table;

use alloc::{
    borrow::Cow,
    string::{FromUtf8Error, String},
    vec::Vec,
};
use core::{fmt, hash, iter::FusedIterator};
use ref_cast::{ref_cast_custom, RefCastCustom};

/// Percent-encodes a byte sequence with a table.
///
/// Every byte not allowed unencoded by the table is encoded, including any `%`.
/// Hexadecimal digits are written in uppercase.
pub fn encode<S: AsRef<[u8]> + ?Sized>(s: &S, table: &Table) -> String {
    let mut buf = String::new();
    encode_to(s, table, &mut buf);
    buf
}

/// Percent-encodes a byte sequence with a table, appending to a buffer.
///
/// Note that the buffer is not cleared prior to encoding.
pub fn encode_to<S: AsRef<[u8]> + ?Sized>(s: &S, table: &Table, buf: &mut String) {
    imp::encode_to(s.as_ref(), table, buf)
}

/// Decodes a percent-encoded string.
///
/// A `%` that is not followed by two hexadecimal digits is kept as is.
pub fn decode(s: &str) -> Decode<'_> {
    match imp::decode(s.as_bytes()) {
        Some(vec) => Decode::Dst(vec),
        None => Decode::Src(s),
    }
}

/// Decodes a string and encodes the result again with a table.
///
/// This is the canonical form in which components are stored,
/// and it is idempotent:
///
/// ```
/// use uri_value::encoding::{normalize, table::FRAGMENT_ENCODE};
///
/// let v = "x%2541%%y z";
/// let once = normalize(v, FRAGMENT_ENCODE);
/// assert_eq!(normalize(&once, FRAGMENT_ENCODE), once);
/// ```
pub fn normalize(s: &str, table: &Table) -> String {
    encode(decode(s).as_bytes(), table)
}

/// Percent-encoded string slices.
///
/// It is guaranteed that every `%` in an `EStr` starts a percent-encoded octet.
///
/// # Examples
///
/// ```
/// use uri_value::encoding::EStr;
///
/// let s = EStr::new("name=%E5%BC%A0%E4%B8%89").unwrap();
/// assert_eq!(s.decode().into_string().unwrap(), "name=张三");
/// assert!(EStr::new("100%").is_none());
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct EStr {
    inner: str,
}

impl EStr {
    #[ref_cast_custom]
    pub(crate) const fn new_validated(s: &str) -> &EStr;

    /// Converts a string slice to an `EStr`, returning `None` if
    /// the string is not properly encoded.
    #[inline]
    pub const fn new(s: &str) -> Option<&EStr> {
        if imp::validate_estr(s.as_bytes()) {
            Some(EStr::new_validated(s))
        } else {
            None
        }
    }

    /// Yields the underlying string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns `true` if the `EStr` has a length of zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Decodes the `EStr`.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_value::encoding::EStr;
    ///
    /// let dec = EStr::new("%C2%BF").unwrap().decode();
    /// assert_eq!(dec.as_bytes(), &[0xc2, 0xbf]);
    /// assert_eq!(dec.into_string()?, "¿");
    /// # Ok::<_, std::string::FromUtf8Error>(())
    /// ```
    #[inline]
    pub fn decode(&self) -> Decode<'_> {
        decode(&self.inner)
    }

    /// Returns an iterator over subslices of the `EStr` separated by the given delimiter.
    ///
    /// # Panics
    ///
    /// Panics if the delimiter is not a [reserved] character.
    ///
    /// [reserved]: https://datatracker.ietf.org/doc/html/rfc3986/#section-2.2
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_value::encoding::EStr;
    ///
    /// assert!(EStr::new("a,b,c").unwrap().split(',').eq(["a", "b", "c"]));
    /// assert!(EStr::new(",").unwrap().split(',').eq(["", ""]));
    /// ```
    #[inline]
    pub fn split(&self, delim: char) -> Split<'_> {
        assert!(
            delim.is_ascii() && table::RESERVED.allows(delim as u8),
            "splitting with non-reserved character"
        );

        Split {
            s: &self.inner,
            delim,
            finished: false,
        }
    }
}

impl AsRef<str> for EStr {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq for EStr {
    #[inline]
    fn eq(&self, other: &EStr) -> bool {
        self.inner == other.inner
    }
}

impl PartialEq<str> for EStr {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<EStr> for str {
    #[inline]
    fn eq(&self, other: &EStr) -> bool {
        self == other.as_str()
    }
}

impl Eq for EStr {}

impl hash::Hash for EStr {
    #[inline]
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.inner.hash(state)
    }
}

impl fmt::Debug for EStr {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for EStr {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

/// A wrapper of percent-decoded bytes.
///
/// This enum is created by [`decode`] and by the [`decode`](EStr::decode) method on [`EStr`].
#[derive(Clone, Debug)]
pub enum Decode<'a> {
    /// No percent-encoded octets are decoded.
    Src(&'a str),
    /// One or more percent-encoded octets are decoded.
    Dst(Vec<u8>),
}

impl<'a> Decode<'a> {
    /// Returns a reference to the decoded bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Src(s) => s.as_bytes(),
            Self::Dst(vec) => vec,
        }
    }

    /// Returns `true` if anything is decoded.
    #[inline]
    pub fn decoded_any(&self) -> bool {
        matches!(self, Self::Dst(_))
    }

    /// Converts the decoded bytes to a string.
    ///
    /// An error is returned if the decoded bytes are not valid UTF-8.
    #[inline]
    pub fn into_string(self) -> Result<Cow<'a, str>, FromUtf8Error> {
        match self {
            Self::Src(s) => Ok(Cow::Borrowed(s)),
            Self::Dst(vec) => String::from_utf8(vec).map(Cow::Owned),
        }
    }

    /// Converts the decoded bytes to a string lossily.
    pub fn into_string_lossy(self) -> Cow<'a, str> {
        match self {
            Self::Src(s) => Cow::Borrowed(s),
            Self::Dst(vec) => match String::from_utf8(vec) {
                Ok(string) => Cow::Owned(string),
                Err(e) => Cow::Owned(String::from_utf8_lossy(e.as_bytes()).into_owned()),
            },
        }
    }
}

/// An iterator over subslices of an [`EStr`] separated by a delimiter.
///
/// This struct is created by the [`split`] method on [`EStr`].
///
/// [`split`]: EStr::split
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Split<'a> {
    s: &'a str,
    delim: char,
    pub(crate) finished: bool,
}

impl<'a> Iterator for Split<'a> {
    type Item = &'a EStr;

    #[inline]
    fn next(&mut self) -> Option<&'a EStr> {
        if self.finished {
            return None;
        }

        let head;
        match self.s.find(self.delim) {
            Some(i) => {
                head = &self.s[..i];
                self.s = &self.s[i + 1..];
            }
            None => {
                self.finished = true;
                head = self.s;
            }
        }
        // Splitting at a reserved character leaves a properly encoded string.
        Some(EStr::new_validated(head))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (1, Some(self.s.len() + 1))
        }
    }
}

impl<'a> DoubleEndedIterator for Split<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a EStr> {
        if self.finished {
            return None;
        }

        let tail;
        match self.s.rfind(self.delim) {
            Some(i) => {
                tail = &self.s[i + 1..];
                self.s = &self.s[..i];
            }
            None => {
                self.finished = true;
                tail = self.s;
            }
        }
        // Splitting at a reserved character leaves a properly encoded string.
        Some(EStr::new_validated(tail))
    }
}

impl FusedIterator for Split<'_> {}
