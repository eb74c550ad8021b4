//! Parsing and formatting data URIs.
//!
//! Run with: cargo run --example data_uri

use serde::{Deserialize, Serialize};
use serde_datauri::DataUri;
use std::error::Error;
use std::io::Cursor;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Upload {
    owner: String,
    file: DataUri,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Either field order parses; output always puts the charset first.
    let uri =
        DataUri::parse("data:text/plain;filename=notes.txt;charset=utf-8;base64,aGkgdGhlcmU=")?;
    println!("mime:     {}", uri.mime_type);
    println!("charset:  {:?}", uri.character_set);
    println!("filename: {:?}", uri.filename);
    println!("payload:  {}", String::from_utf8_lossy(&uri.binary));
    println!("canonical: {}\n", uri);

    // File names are percent-encoded on output.
    let spaced = DataUri::from_reader(Cursor::new("hello"), "my notes.txt", "text/plain")?;
    println!("from reader: {}\n", spaced);

    // Inside a document the URI is just a string.
    let upload = Upload {
        owner: "alice".to_string(),
        file: uri,
    };
    let json = serde_json::to_string_pretty(&upload)?;
    println!("JSON:\n{}\n", json);

    let upload_back: Upload = serde_json::from_str(&json)?;
    assert_eq!(upload, upload_back);
    println!("✓ Round-trip successful");

    match DataUri::try_parse("data:text/plain;base64,***") {
        Some(_) => println!("unexpected success"),
        None => println!("✓ Invalid payload rejected"),
    }

    Ok(())
}
