//! Well-known ports of schemes.

use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
};

/// Schemes with a well-known port that every table knows about.
const BUILTIN: &[(&str, u16)] = &[("http", 80), ("https", 443)];

/// Looks up a scheme in the built-in table.
pub(crate) fn builtin(scheme: &str) -> Option<u16> {
    BUILTIN
        .iter()
        .find(|(name, _)| *name == scheme)
        .map(|&(_, port)| port)
}

/// A table mapping schemes to their well-known ports.
///
/// A port equal to the well-known port of the scheme is elided from a [`Uri`],
/// and [`Uri::known_port`] falls back to it when no port is present.
///
/// The table always starts with `http` (80) and `https` (443) and may be extended
/// or overridden. Scheme names are matched case-insensitively.
///
/// [`Uri`]: crate::Uri
/// [`Uri::known_port`]: crate::Uri::known_port
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use uri_value::{DefaultPorts, Uri};
///
/// let ports = DefaultPorts::new().with("ftp", 21).with("ws", 80);
/// assert_eq!(ports.get("FTP"), Some(21));
/// assert_eq!(ports.get("https"), Some(443));
/// assert_eq!(ports.get("gopher"), None);
///
/// let uri = Uri::parse_with("ftp://example.com:21/pub", Arc::new(ports))?;
/// assert_eq!(uri.port(), None);
/// assert_eq!(uri.to_string(), "ftp://example.com/pub");
/// # Ok::<_, uri_value::UriError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefaultPorts {
    map: BTreeMap<String, u16>,
}

impl DefaultPorts {
    /// Creates a table with the built-in entries.
    pub fn new() -> DefaultPorts {
        DefaultPorts {
            map: BUILTIN
                .iter()
                .map(|&(name, port)| (name.to_string(), port))
                .collect(),
        }
    }

    /// Adds or replaces the well-known port of a scheme, returning the table.
    #[must_use]
    pub fn with(mut self, scheme: &str, port: u16) -> DefaultPorts {
        self.insert(scheme, port);
        self
    }

    /// Adds or replaces the well-known port of a scheme.
    ///
    /// Returns the previous port of the scheme, if any.
    pub fn insert(&mut self, scheme: &str, port: u16) -> Option<u16> {
        self.map.insert(scheme.to_ascii_lowercase(), port)
    }

    /// Removes a scheme from the table, returning its port.
    pub fn remove(&mut self, scheme: &str) -> Option<u16> {
        self.map.remove(&scheme.to_ascii_lowercase())
    }

    /// Returns the well-known port of a scheme.
    pub fn get(&self, scheme: &str) -> Option<u16> {
        match self.map.get(scheme) {
            Some(&port) => Some(port),
            None if scheme.bytes().any(|x| x.is_ascii_uppercase()) => {
                self.map.get(&scheme.to_ascii_lowercase()).copied()
            }
            None => None,
        }
    }

    /// Returns an iterator over the entries, ordered by scheme.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u16)> + '_ {
        self.map.iter().map(|(name, &port)| (name.as_str(), port))
    }
}

impl Default for DefaultPorts {
    fn default() -> DefaultPorts {
        DefaultPorts::new()
    }
}

impl<S: AsRef<str>> Extend<(S, u16)> for DefaultPorts {
    fn extend<I: IntoIterator<Item = (S, u16)>>(&mut self, iter: I) {
        for (scheme, port) in iter {
            self.insert(scheme.as_ref(), port);
        }
    }
}

impl<S: AsRef<str>> FromIterator<(S, u16)> for DefaultPorts {
    /// Creates a table with the built-in entries extended by the given ones.
    fn from_iter<I: IntoIterator<Item = (S, u16)>>(iter: I) -> DefaultPorts {
        let mut ports = DefaultPorts::new();
        ports.extend(iter);
        ports
    }
}
