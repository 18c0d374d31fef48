use crate::{DefaultPorts, Uri, UriError};
use alloc::string::{String, ToString};
use core::str::FromStr;

#[cfg(feature = "serde")]
use alloc::collections::BTreeMap;
#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

impl FromStr for Uri {
    type Err = UriError;

    /// Equivalent to [`Uri::parse`].
    #[inline]
    fn from_str(s: &str) -> Result<Uri, UriError> {
        Uri::parse(s)
    }
}

impl TryFrom<&str> for Uri {
    type Error = UriError;

    /// Equivalent to [`Uri::parse`].
    #[inline]
    fn try_from(s: &str) -> Result<Uri, UriError> {
        Uri::parse(s)
    }
}

impl TryFrom<String> for Uri {
    type Error = UriError;

    /// Equivalent to [`Uri::parse`].
    #[inline]
    fn try_from(s: String) -> Result<Uri, UriError> {
        Uri::parse(&s)
    }
}

impl From<Uri> for String {
    /// Consumes the `Uri` and yields its canonical string form.
    #[inline]
    fn from(uri: Uri) -> String {
        uri.to_string()
    }
}

#[cfg(feature = "serde")]
impl Serialize for Uri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Uri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Uri::parse(&s)
            .map_err(|e| de::Error::custom(format_args!("failed to parse {s:?} as URI: {e}")))
    }
}

#[cfg(feature = "serde")]
impl Serialize for DefaultPorts {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for DefaultPorts {
    /// Reads a map from schemes to ports, merged over the built-in entries.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = BTreeMap::<String, u16>::deserialize(deserializer)?;
        Ok(map.into_iter().collect())
    }
}
