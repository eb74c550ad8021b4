//! The [`DataUri`] type: parsing, canonical formatting, and Serde support.
//!
//! ## Canonical Form
//!
//! A data URI always formats as
//!
//! ```text
//! data:<mime>[;charset=<charset>][;filename=<percent-encoded name>];base64,<payload>
//! ```
//!
//! Charset comes before filename no matter which order the parsed text used.
//! The filename is percent-encoded on output and kept as-is on input, so a name
//! containing a space comes back from a round trip in its escaped form.
//!
//! ## Examples
//!
//! ```rust
//! use serde_datauri::DataUri;
//!
//! let uri = DataUri::new(b"AB".to_vec(), "text/plain").with_filename("a b.txt");
//! assert_eq!(uri.to_string(), "data:text/plain;filename=a%20b.txt;base64,QUI=");
//!
//! let parsed = DataUri::parse(&uri.to_string()).unwrap();
//! assert_eq!(parsed.binary, b"AB");
//! assert_eq!(parsed.filename.as_deref(), Some("a%20b.txt"));
//! ```

use crate::grammar::{self, BASE64, CHARSET, FILENAME, SCHEME};
use crate::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

/// A binary payload with its declared content type, optional character set,
/// and optional file name.
///
/// Only the file name is escaped on output. `mime_type` and `character_set`
/// are written verbatim, so they must not contain a line break or any of the
/// markers `;charset=`, `;filename=`, `;base64,` if the text is to parse back
/// into the same value. `mime_type` must also be non-empty: the default value
/// formats as `data:;base64,`, which [`DataUri::parse`] rejects.
///
/// # Examples
///
/// ```rust
/// use serde_datauri::DataUri;
///
/// let uri: DataUri = "data:text/plain;filename=a.txt;charset=utf-8;base64,QQ=="
///     .parse()
///     .unwrap();
/// assert_eq!(uri.mime_type, "text/plain");
/// assert_eq!(uri.character_set.as_deref(), Some("utf-8"));
/// assert_eq!(
///     uri.to_string(),
///     "data:text/plain;charset=utf-8;filename=a.txt;base64,QQ=="
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct DataUri {
    pub binary: Vec<u8>,
    pub mime_type: String,
    pub character_set: Option<String>,
    pub filename: Option<String>,
}

impl DataUri {
    /// Creates a data URI with no character set and no file name.
    #[must_use]
    pub fn new(binary: impl Into<Vec<u8>>, mime_type: impl Into<String>) -> Self {
        DataUri {
            binary: binary.into(),
            mime_type: mime_type.into(),
            character_set: None,
            filename: None,
        }
    }

    /// Sets the declared file name (unescaped; escaping happens on output).
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Sets the declared character set.
    #[must_use]
    pub fn with_character_set(mut self, character_set: impl Into<String>) -> Self {
        self.character_set = Some(character_set.into());
        self
    }

    /// Parses a data URI.
    ///
    /// Multi-line input is accepted; the first line that follows the grammar
    /// is used. The file name is not percent-decoded. Whitespace inside the
    /// payload is skipped before decoding.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedLocator`] if no line matches the grammar
    /// - [`Error::InvalidPayloadEncoding`] if the payload is not standard base64
    pub fn parse(input: &str) -> Result<Self> {
        let parts = grammar::scan(input)?;
        let payload: Vec<u8> = parts
            .payload
            .bytes()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        let binary = STANDARD
            .decode(&payload)
            .map_err(Error::invalid_payload)?;

        tracing::trace!(
            mime_type = parts.mime_type,
            bytes = binary.len(),
            "parsed data URI"
        );

        Ok(DataUri {
            binary,
            mime_type: parts.mime_type.to_string(),
            character_set: parts.character_set.map(str::to_string),
            filename: parts.filename.map(str::to_string),
        })
    }

    /// Like [`DataUri::parse`], but returns `None` instead of an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_datauri::DataUri;
    ///
    /// assert!(DataUri::try_parse("data:text/plain;base64,QQ==").is_some());
    /// assert!(DataUri::try_parse("not-a-uri").is_none());
    /// ```
    #[must_use]
    pub fn try_parse(input: &str) -> Option<Self> {
        match Self::parse(input) {
            Ok(uri) => Some(uri),
            Err(err) => {
                tracing::debug!(error = %err, "rejected data URI");
                None
            }
        }
    }

    /// Reads a file into a data URI.
    ///
    /// The MIME type is guessed from the file extension and falls back to
    /// `application/octet-stream`. The file name becomes the declared name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileNotAccessible`] if the file cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let binary = fs::read(path).map_err(|e| {
            Error::file_not_accessible(&path.display().to_string(), &e.to_string())
        })?;
        let mime_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        tracing::trace!(
            path = %path.display(),
            mime_type = %mime_type,
            bytes = binary.len(),
            "loaded data URI from file"
        );

        Ok(DataUri {
            binary,
            mime_type,
            character_set: None,
            filename: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
        })
    }

    /// Reads a UTF-8 text stream into a data URI with charset `utf-8`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_datauri::DataUri;
    /// use std::io::Cursor;
    ///
    /// let uri = DataUri::from_reader(Cursor::new("hi"), "note.txt", "text/plain").unwrap();
    /// assert_eq!(uri.to_string(), "data:text/plain;charset=utf-8;filename=note.txt;base64,aGk=");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if reading fails or the stream is not valid UTF-8.
    pub fn from_reader<R>(mut reader: R, filename: &str, content_type: &str) -> Result<Self>
    where
        R: io::Read,
    {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| Error::io(&e.to_string()))?;

        Ok(DataUri {
            binary: text.into_bytes(),
            mime_type: content_type.to_string(),
            character_set: Some("utf-8".to_string()),
            filename: Some(filename.to_string()).filter(|name| !name.trim().is_empty()),
        })
    }

    /// Returns the payload as standard, padded base64.
    #[must_use]
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.binary)
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", SCHEME, self.mime_type)?;
        if let Some(character_set) = non_blank(&self.character_set) {
            write!(f, "{}{}", CHARSET, character_set)?;
        }
        if let Some(filename) = non_blank(&self.filename) {
            write!(f, "{}{}", FILENAME, urlencoding::encode(filename))?;
        }
        write!(f, "{}{}", BASE64, self.to_base64())
    }
}

impl FromStr for DataUri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DataUri::parse(s)
    }
}

impl TryFrom<&str> for DataUri {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        DataUri::parse(value)
    }
}

impl TryFrom<String> for DataUri {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        DataUri::parse(&value)
    }
}

impl Serialize for DataUri {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DataUri {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DataUriVisitor;

        impl<'de> de::Visitor<'de> for DataUriVisitor {
            type Value = DataUri;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a base64 data URI string")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                DataUri::parse(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(DataUriVisitor)
    }
}
