//! Scanner for the `data:` URI grammar.
//!
//! ```text
//! "data:" mime-type [ ";charset=" charset | ";filename=" escaped-name ]{0,2} ";base64," payload
//! ```
//!
//! The two optional fields may come in either order, each at most once.
//! Keywords match ASCII case-insensitively. Every segment (mime type, field
//! value) runs up to the next keyword marker, so a mime type such as
//! `text/plain;format=flowed` survives intact while `;charset=` always starts
//! a field.
//!
//! The scanner only splits text into borrowed parts; decoding the payload is
//! left to [`DataUri::parse`](crate::DataUri::parse).

use crate::{Error, Result};

pub const SCHEME: &str = "data:";
pub const CHARSET: &str = ";charset=";
pub const FILENAME: &str = ";filename=";
pub const BASE64: &str = ";base64,";

/// The borrowed pieces of one data URI line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocatorParts<'a> {
    pub mime_type: &'a str,
    pub character_set: Option<&'a str>,
    pub filename: Option<&'a str>,
    /// Still base64 encoded; may be empty.
    pub payload: &'a str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Marker {
    Charset,
    Filename,
    Base64,
}

impl Marker {
    const ALL: [Marker; 3] = [Marker::Charset, Marker::Filename, Marker::Base64];

    const fn keyword(self) -> &'static str {
        match self {
            Marker::Charset => CHARSET,
            Marker::Filename => FILENAME,
            Marker::Base64 => BASE64,
        }
    }
}

#[inline]
fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len() && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Finds the first keyword marker at or after byte offset `from`.
fn find_marker(line: &str, from: usize) -> Option<(usize, Marker)> {
    line[from..].match_indices(';').find_map(|(offset, _)| {
        let at = from + offset;
        Marker::ALL
            .into_iter()
            .find(|marker| starts_with_ignore_case(&line[at..], marker.keyword()))
            .map(|marker| (at, marker))
    })
}

/// Scans a single line. `line_no` is only used for error reporting.
pub fn scan_line(line: &str, line_no: usize) -> Result<LocatorParts<'_>> {
    if !starts_with_ignore_case(line, SCHEME) {
        return Err(Error::malformed(line_no, 1, "missing `data:` scheme"));
    }

    let start = SCHEME.len();
    let (mut at, mut marker) = find_marker(line, start)
        .ok_or_else(|| Error::malformed(line_no, start + 1, "missing `;base64,` marker"))?;
    if at == start {
        return Err(Error::malformed(line_no, start + 1, "empty mime type"));
    }
    let mime_type = &line[start..at];

    let mut character_set = None;
    let mut filename = None;

    loop {
        let (slot, name) = match marker {
            Marker::Base64 => {
                return Ok(LocatorParts {
                    mime_type,
                    character_set,
                    filename,
                    payload: &line[at + BASE64.len()..],
                });
            }
            Marker::Charset => (&mut character_set, "charset"),
            Marker::Filename => (&mut filename, "filename"),
        };

        if slot.is_some() {
            return Err(Error::malformed(
                line_no,
                at + 1,
                &format!("`{}` appears more than once", name),
            ));
        }

        let value_start = at + marker.keyword().len();
        let (next, next_marker) = find_marker(line, value_start).ok_or_else(|| {
            Error::malformed(line_no, value_start + 1, "missing `;base64,` marker")
        })?;
        if next == value_start {
            return Err(Error::malformed(
                line_no,
                value_start + 1,
                &format!("empty `{}` value", name),
            ));
        }

        *slot = Some(&line[value_start..next]);
        at = next;
        marker = next_marker;
    }
}

/// Scans `input` line by line and returns the first line that matches.
///
/// When no line matches, the error describes the first line.
pub fn scan(input: &str) -> Result<LocatorParts<'_>> {
    let mut first_error = None;

    for (index, line) in input.lines().enumerate() {
        match scan_line(line, index + 1) {
            Ok(parts) => return Ok(parts),
            Err(err) => {
                first_error.get_or_insert(err);
            }
        }
    }

    Err(first_error.unwrap_or_else(|| Error::malformed(1, 1, "empty input")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal() {
        let parts = scan("data:text/plain;base64,QQ==").unwrap();
        assert_eq!(parts.mime_type, "text/plain");
        assert_eq!(parts.character_set, None);
        assert_eq!(parts.filename, None);
        assert_eq!(parts.payload, "QQ==");
    }

    #[test]
    fn test_field_order_is_free() {
        let a = scan("data:text/plain;charset=utf-8;filename=a.txt;base64,QQ==").unwrap();
        let b = scan("data:text/plain;filename=a.txt;charset=utf-8;base64,QQ==").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.character_set, Some("utf-8"));
        assert_eq!(a.filename, Some("a.txt"));
    }

    #[test]
    fn test_keywords_ignore_case() {
        let parts = scan("DATA:image/png;Charset=latin1;FILENAME=x.png;Base64,AA==").unwrap();
        assert_eq!(parts.mime_type, "image/png");
        assert_eq!(parts.character_set, Some("latin1"));
        assert_eq!(parts.filename, Some("x.png"));
        assert_eq!(parts.payload, "AA==");
    }

    #[test]
    fn test_mime_parameters_stay_in_mime() {
        let parts = scan("data:text/plain;format=flowed;charset=utf-8;base64,QQ==").unwrap();
        assert_eq!(parts.mime_type, "text/plain;format=flowed");
        assert_eq!(parts.character_set, Some("utf-8"));
    }

    #[test]
    fn test_repeated_field_is_rejected() {
        let err = scan("data:text/plain;charset=a;charset=b;base64,QQ==").unwrap_err();
        match err {
            Error::MalformedLocator { line, col, msg } => {
                assert_eq!(line, 1);
                assert_eq!(col, 26);
                assert!(msg.contains("charset"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(scan("data:a;filename=x;charset=y;filename=z;base64,").is_err());
    }

    #[test]
    fn test_missing_pieces() {
        assert!(matches!(
            scan("not-a-uri"),
            Err(Error::MalformedLocator { col: 1, .. })
        ));
        assert!(matches!(
            scan("data:text/plain,hello"),
            Err(Error::MalformedLocator { col: 6, .. })
        ));
        assert!(scan("data:;base64,QQ==").is_err());
        assert!(scan("data:text/plain;charset=;base64,QQ==").is_err());
        assert!(scan("").is_err());
    }

    #[test]
    fn test_empty_payload() {
        let parts = scan("data:application/octet-stream;base64,").unwrap();
        assert_eq!(parts.payload, "");
    }

    #[test]
    fn test_multiline_input() {
        let input = "leading text\r\ndata:text/plain;base64,QUI=\r\ntrailing";
        let parts = scan(input).unwrap();
        assert_eq!(parts.payload, "QUI=");

        let err = scan("first\ndata:oops").unwrap_err();
        assert!(matches!(err, Error::MalformedLocator { line: 1, .. }));
    }
}
