//! # serde_datauri
//!
//! Two small value types that make heterogeneous data serialize the same way
//! in every Serde format:
//!
//! - [`DataUri`]: a binary payload with its content type, optional charset and
//!   optional file name, carried as a single `data:` URI string.
//! - [`ScalarValue`]: a boolean, number, timestamp, enum symbol or string kept
//!   only as its canonical text.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! serde_datauri = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Data URIs
//!
//! ```rust
//! use serde_datauri::DataUri;
//!
//! let uri = DataUri::parse("data:text/plain;filename=a.txt;charset=utf-8;base64,QUI=").unwrap();
//! assert_eq!(uri.binary, b"AB");
//!
//! // Formatting always puts the charset first.
//! assert_eq!(
//!     uri.to_string(),
//!     "data:text/plain;charset=utf-8;filename=a.txt;base64,QUI="
//! );
//!
//! assert!(DataUri::try_parse("not-a-uri").is_none());
//! ```
//!
//! ### Scalar Values
//!
//! ```rust
//! use serde_datauri::ScalarValue;
//!
//! let flag = ScalarValue::from(true);
//! assert_eq!(flag.as_str(), Some("true"));
//! assert!(flag.equals("TRUE"));
//! assert!(ScalarValue::from(7i32).equals(7u64));
//! ```
//!
//! ### With Serde
//!
//! Both types serialize as plain strings, so they drop into any record or
//! markup format:
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_datauri::{DataUri, ScalarValue};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Attachment {
//!     file: DataUri,
//!     size: ScalarValue,
//! }
//!
//! let attachment = Attachment {
//!     file: DataUri::new(b"AB".to_vec(), "text/plain"),
//!     size: ScalarValue::from(2u32),
//! };
//!
//! let json = serde_json::to_string(&attachment).unwrap();
//! assert_eq!(json, r#"{"file":"data:text/plain;base64,QUI=","size":"2"}"#);
//!
//! let back: Attachment = serde_json::from_str(&json).unwrap();
//! assert_eq!(back, attachment);
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Parsing is a pure function of its input; a failed parse returns no partial value
//! - Scalar construction and comparison never fail or panic

pub mod data_uri;
pub mod error;
pub mod grammar;
pub mod options;
pub mod symbol;
pub mod value;

pub use data_uri::DataUri;
pub use error::{Error, Result};
pub use options::{Comparison, DecimalSeparator, ScalarOptions};
pub use value::{Canonical, Displayed, ScalarValue, Symbol};

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Document {
        attachment: Option<DataUri>,
        flag: ScalarValue,
    }

    #[test]
    fn test_json_roundtrip() {
        let document = Document {
            attachment: Some(
                DataUri::new(vec![1, 2, 3], "application/octet-stream").with_filename("blob.bin"),
            ),
            flag: ScalarValue::from(false),
        };

        let json = serde_json::to_string(&document).unwrap();
        assert_eq!(
            json,
            r#"{"attachment":"data:application/octet-stream;filename=blob.bin;base64,AQID","flag":"false"}"#
        );

        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, document);
    }

    #[test]
    fn test_json_nulls() {
        let back: Document = serde_json::from_str(r#"{"attachment":null,"flag":null}"#).unwrap();
        assert_eq!(back.attachment, None);
        assert!(back.flag.is_absent());

        let json = serde_json::to_string(&back).unwrap();
        assert_eq!(json, r#"{"attachment":null,"flag":null}"#);
    }
}
