use crate::{
    encoding::table::{ALPHA, SCHEME},
    error::Result,
    ports::DefaultPorts,
    validate, Uri,
};
use alloc::{string::String, sync::Arc};

/// Scheme prepended to a copy of the input when its authority would
/// otherwise be taken for a path.
const PLACEHOLDER: &str = "http://";

/// A slice of the input together with its offset in the input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Span<'a> {
    pub(crate) s: &'a str,
    pub(crate) start: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct RawAuthority<'a> {
    pub(crate) user: &'a str,
    pub(crate) password: Option<&'a str>,
    pub(crate) host: &'a str,
    pub(crate) port: Option<Span<'a>>,
}

/// Components of a URI reference before validation and normalization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct RawParts<'a> {
    pub(crate) scheme: Option<&'a str>,
    pub(crate) authority: Option<RawAuthority<'a>>,
    pub(crate) path: Span<'a>,
    pub(crate) query: Option<Span<'a>>,
    pub(crate) fragment: Option<Span<'a>>,
}

/// Reads through the input, splitting it into components.
///
/// # Invariants
///
/// `pos <= len`, `pos` is non-decreasing and on a character boundary.
struct Reader<'a> {
    s: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(s: &'a str) -> Self {
        Reader { s, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.s[self.pos..]
    }

    fn skip(&mut self, n: usize) {
        self.pos += n;
        debug_assert!(self.pos <= self.s.len());
    }

    // Any call to this method must keep the invariants.
    fn read_until(&mut self, delims: &[char]) -> Span<'a> {
        let rest = self.rest();
        let len = rest.find(delims).unwrap_or(rest.len());
        let span = Span {
            s: &rest[..len],
            start: self.pos,
        };
        self.skip(len);
        span
    }

    fn read_str(&mut self, prefix: &str) -> bool {
        let res = self.rest().starts_with(prefix);
        if res {
            self.skip(prefix.len());
        }
        res
    }
}

/// Returns the length of the scheme at the start of the input, if any.
///
/// A scheme is followed by `:`. A name followed by `:` and nothing but digits
/// up to the end of the authority is a host and a port rather than a scheme.
fn scheme_len(s: &str) -> Option<usize> {
    let i = s.find(|c| matches!(c, ':' | '/' | '?' | '#'))?;
    let (name, rest) = s.split_at(i);
    if !rest.starts_with(':') {
        return None;
    }
    match name.as_bytes() {
        [first, rem @ ..] if ALPHA.allows(*first) && SCHEME.validate(rem) => {}
        _ => return None,
    }

    let rest = &rest[1..];
    let port = &rest[..rest.find(['/', '?', '#']).unwrap_or(rest.len())];
    if !port.is_empty() && port.bytes().all(|x| x.is_ascii_digit()) {
        return None;
    }
    Some(i)
}

fn split_authority<'a>(auth: Span<'a>) -> RawAuthority<'a> {
    let (user_info, host_port, host_start) = match auth.s.rfind('@') {
        Some(i) => (Some(&auth.s[..i]), &auth.s[i + 1..], auth.start + i + 1),
        None => (None, auth.s, auth.start),
    };

    let (user, password) = match user_info {
        Some(ui) => match ui.split_once(':') {
            Some((user, password)) => (user, Some(password)),
            None => (ui, None),
        },
        None => ("", None),
    };

    // A colon inside an IP literal does not start the port.
    let colon = match host_port.rfind(']') {
        Some(j) => host_port[j..].find(':').map(|k| j + k),
        None => host_port.rfind(':'),
    };

    match colon {
        Some(i) => RawAuthority {
            user,
            password,
            host: &host_port[..i],
            port: Some(Span {
                s: &host_port[i + 1..],
                start: host_start + i + 1,
            }),
        },
        None => RawAuthority {
            user,
            password,
            host: host_port,
            port: None,
        },
    }
}

/// Splits a URI reference into its components following
/// [Appendix B of RFC 3986][1]. This never fails.
///
/// [1]: https://datatracker.ietf.org/doc/html/rfc3986/#appendix-B
pub(crate) fn split(s: &str) -> RawParts<'_> {
    let mut reader = Reader::new(s);
    let mut out = RawParts::default();

    if let Some(len) = scheme_len(s) {
        out.scheme = Some(&s[..len]);
        reader.skip(len + 1);
    }

    if reader.read_str("//") {
        let auth = reader.read_until(&['/', '?', '#']);
        out.authority = Some(split_authority(auth));
    }

    out.path = reader.read_until(&['?', '#']);

    if reader.read_str("?") {
        out.query = Some(reader.read_until(&['#']));
    }

    if reader.read_str("#") {
        out.fragment = Some(Span {
            s: reader.rest(),
            start: reader.pos,
        });
    }
    out
}

/// Returns `true` if the authority and path of the input are to be read
/// from a copy prefixed with a placeholder scheme.
///
/// Without a scheme, a leading host like `example.com/a` is otherwise
/// read as the first segment of a path.
fn needs_placeholder(s: &str, parts: &RawParts<'_>) -> bool {
    !s.is_empty() && parts.scheme.is_none() && !s.contains("://") && !s.starts_with('/')
}

pub(crate) fn parse(s: &str, ports: Option<Arc<DefaultPorts>>) -> Result<Uri> {
    let parts = split(s);

    let copy: String;
    let (hier, offset) = if needs_placeholder(s, &parts) {
        tracing::trace!(input = s, "reading authority behind a placeholder scheme");
        let mut buf = String::with_capacity(PLACEHOLDER.len() + s.len());
        buf.push_str(PLACEHOLDER);
        buf.push_str(s);
        copy = buf;
        (split(&copy), PLACEHOLDER.len())
    } else {
        (parts, 0)
    };

    let mut uri = Uri {
        ports,
        ..Uri::new()
    };
    uri.set_scheme(parts.scheme.unwrap_or(""));

    if let Some(auth) = hier.authority {
        uri.set_user_info(auth.user, auth.password);
        if let Some(port) = auth.port {
            let start = port.start - offset;
            let value = validate::port_digits(port.s)
                .map_err(|e| crate::rejected("port", &port.s, e).shift(start))?;
            uri.set_port(value).map_err(|e| e.shift(start))?;
        }
        uri.set_host(auth.host);
    }

    uri.set_path(hier.path.s)
        .map_err(|e| e.shift(hier.path.start - offset))?;

    if let Some(query) = parts.query {
        uri.set_query(query.s).map_err(|e| e.shift(query.start))?;
    }
    if let Some(fragment) = parts.fragment {
        uri.set_fragment(fragment.s);
    }

    tracing::trace!(input = s, uri = %uri, "parsed URI");
    Ok(uri)
}
