use crate::{Uri, UriError, UriErrorKind};
use core::fmt::{self, Write};

impl fmt::Display for UriErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UriErrorKind::InvalidPort => "invalid port",
            UriErrorKind::InvalidPath => "invalid character in path",
            UriErrorKind::InvalidQuery => "invalid query",
        })
    }
}

impl fmt::Display for UriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at index {}", self.kind, self.index)
    }
}

impl fmt::Debug for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uri")
            .field("scheme", &self.scheme())
            .field("user_info", &self.user_info())
            .field("host", &self.host())
            .field("port", &self.port())
            .field("path", &self.path_raw())
            .field("query", &self.query_raw())
            .field("fragment", &self.fragment_raw())
            .finish()
    }
}

impl fmt::Display for Uri {
    /// Writes the canonical string form of the URI.
    ///
    /// The path is adjusted so that the output stays unambiguous:
    /// a rootless path after an authority gains a leading slash, and a path
    /// starting with `//` without an authority keeps a single leading slash.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scheme = self.scheme();
        if !scheme.is_empty() {
            f.write_str(scheme)?;
            f.write_char(':')?;
        }

        let authority = self.authority();
        let mut path = self.path_raw().as_str();
        if !authority.is_empty() {
            f.write_str("//")?;
            f.write_str(authority)?;
            if !path.is_empty() && !path.starts_with('/') {
                f.write_char('/')?;
            }
        } else if path.starts_with("//") {
            path = path.trim_start_matches('/');
            f.write_char('/')?;
        }
        f.write_str(path)?;

        let query = self.query_raw();
        if !query.is_empty() {
            f.write_char('?')?;
            f.write_str(query.as_str())?;
        }

        let fragment = self.fragment_raw();
        if !fragment.is_empty() {
            f.write_char('#')?;
            f.write_str(fragment.as_str())?;
        }
        Ok(())
    }
}
