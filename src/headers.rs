//! The `headers` module provides the `HeaderValue` type used to represent the individual
//! comma-separated segments of a HTTP header (media types, languages, charsets, encodings,
//! ETags and the like), along with the date parsing/formatting and header-name canonicalization
//! utilities the engine needs to stay faithful to HTTP/1.1.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use itertools::Itertools;

use crate::content_negotiation::{Charset, Encoding, MediaLanguage, MediaType};

/// Shorthand for parsing a string (or anything that looks like one) into a `HeaderValue`.
#[macro_export]
macro_rules! h {
    ($e:expr) => {
        $crate::headers::HeaderValue::parse_string($e)
    };
}

/// One comma-separated segment of a header value, plus any `;name=value` parameters that
/// followed it (such as a `q` weighting) and whether the core value was a quoted-string.
#[derive(Debug, Clone)]
pub struct HeaderValue {
    /// The header value, with surrounding quotes removed (unless it is a weak ETag, which
    /// keeps its `W/` prefix and quotes intact so that `weak_etag` can strip them later)
    pub value: String,
    /// Any `name=value` parameters that followed the value, separated by `;`
    pub params: HashMap<String, String>,
    /// If the value should be rendered with surrounding double quotes
    pub quote: bool,
}

impl HeaderValue {
    /// Creates a header value with no parameters from anything that looks like a string
    pub fn basic<S: AsRef<str>>(value: S) -> HeaderValue {
        HeaderValue {
            value: value.as_ref().to_string(),
            params: HashMap::new(),
            quote: false,
        }
    }

    /// Parses one raw header segment, e.g. `text/html; q=0.8`, `"abc123"` or `W/"abc123"`,
    /// splitting off any parameters and unquoting the value unless it is a weak ETag.
    pub fn parse_string<S: AsRef<str>>(value: S) -> HeaderValue {
        let value = value.as_ref();
        let parts = value.split(';').map(|p| p.trim()).collect_vec();
        let main = parts.first().cloned().unwrap_or_default();
        let (value, quote) = if main.starts_with("W/") {
            (main.to_string(), false)
        } else if main.len() >= 2 && main.starts_with('"') && main.ends_with('"') {
            (main[1..main.len() - 1].to_string(), true)
        } else {
            (main.to_string(), false)
        };
        let params = parts.iter().skip(1).fold(HashMap::new(), |mut acc, param| {
            if param.is_empty() {
                return acc;
            }
            match param.find('=') {
                Some(idx) => {
                    let (name, val) = param.split_at(idx);
                    acc.insert(
                        name.trim().to_string(),
                        val[1..].trim().trim_matches('"').to_string(),
                    );
                }
                None => {
                    acc.insert(param.to_string(), String::new());
                }
            }
            acc
        });
        HeaderValue { value, params, quote }
    }

    /// Returns a copy of this header value marked to be rendered with surrounding quotes
    pub fn quote(mut self) -> HeaderValue {
        self.quote = true;
        self
    }

    /// Returns a copy of this header value marked to be rendered without surrounding quotes
    pub fn unquote(mut self) -> HeaderValue {
        self.quote = false;
        self
    }

    /// If this is a weak ETag (`W/"..."`), returns the unquoted tag value
    pub fn weak_etag(&self) -> Option<String> {
        if self.value.starts_with("W/") {
            Some(self.value[2..].trim_matches('"').to_string())
        } else {
            None
        }
    }

    /// Interprets this header value as a media type, applying any `q` parameter as its weight
    pub fn as_media_type(&self) -> MediaType {
        let media_type = MediaType::parse_string(&self.value);
        match self.params.get("q") {
            Some(q) => media_type.with_weight(q),
            None => media_type,
        }
    }

    /// Interprets this header value as a media language, applying any `q` parameter as its weight
    pub fn as_media_language(&self) -> MediaLanguage {
        let language = MediaLanguage::parse_string(&self.value);
        match self.params.get("q") {
            Some(q) => language.with_weight(q),
            None => language,
        }
    }

    /// Interprets this header value as a charset, applying any `q` parameter as its weight
    pub fn as_charset(&self) -> Charset {
        let charset = Charset::parse_string(&self.value);
        match self.params.get("q") {
            Some(q) => charset.with_weight(q),
            None => charset,
        }
    }

    /// Interprets this header value as an encoding, applying any `q` parameter as its weight
    pub fn as_encoding(&self) -> Encoding {
        let encoding = Encoding::parse_string(&self.value);
        match self.params.get("q") {
            Some(q) => encoding.with_weight(q),
            None => encoding,
        }
    }
}

impl fmt::Display for HeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.quote {
            write!(f, "\"{}\"", self.value)?;
        } else {
            write!(f, "{}", self.value)?;
        }
        for (name, val) in self.params.iter().sorted() {
            write!(f, "; {}={}", name, val)?;
        }
        Ok(())
    }
}

impl PartialEq for HeaderValue {
    fn eq(&self, other: &HeaderValue) -> bool {
        self.value == other.value && self.params == other.params && self.quote == other.quote
    }
}

impl Eq for HeaderValue {}

impl PartialEq<str> for HeaderValue {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl<'a> PartialEq<&'a str> for HeaderValue {
    fn eq(&self, other: &&'a str) -> bool {
        self.value == *other
    }
}

impl PartialEq<String> for HeaderValue {
    fn eq(&self, other: &String) -> bool {
        &self.value == other
    }
}

impl Hash for HeaderValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.quote.hash(state);
    }
}

const RFC1123_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";
const RFC850_FORMAT: &str = "%A, %d-%b-%y %H:%M:%S GMT";
const ASCTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Parses an HTTP date in any of the three legal formats accepted by `If-*-Since` headers:
/// the RFC 1123 form (`Sun, 06 Nov 1994 08:49:37 GMT`), the obsolete RFC 850 form
/// (`Sunday, 06-Nov-94 08:49:37 GMT`), or ANSI C's `asctime()` form
/// (`Sun Nov  6 08:49:37 1994`). Returns `None` if the value matches none of them, which
/// callers should treat as if the header were absent.
pub fn parse_http_date(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc2822(value) {
        return Some(datetime);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, RFC850_FORMAT) {
        return Some(FixedOffset::east(0).from_utc_datetime(&naive));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, ASCTIME_FORMAT) {
        return Some(FixedOffset::east(0).from_utc_datetime(&naive));
    }
    None
}

/// Formats a date/time using the canonical HTTP date format (RFC 1123), the first of the
/// three accepted formats.
pub fn format_http_date(value: &DateTime<FixedOffset>) -> String {
    value.with_timezone(&Utc).format(RFC1123_FORMAT).to_string()
}

/// Canonicalizes a header name to Title-Case on word boundaries separated by `-`
/// (e.g. `content-type` -> `Content-Type`, `WWW-AUTHENTICATE` -> `WWW-Authenticate`... except
/// every boundary is re-capitalised, so `WWW-Authenticate` is what you get either way).
pub fn title_case(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .join("-")
}

/// Merges a partial header fragment into an accumulating header map, per the engine's
/// merge rule: any key present in `overlay` replaces the corresponding key in `base`.
pub fn merge_header_maps(
    base: &mut HashMap<String, Vec<String>>,
    overlay: HashMap<String, Vec<String>>,
) {
    for (key, value) in overlay {
        base.insert(key, value);
    }
}
