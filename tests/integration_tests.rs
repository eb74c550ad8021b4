use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_datauri::{DataUri, ScalarValue, Symbol};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Message {
    subject: String,
    attachments: Vec<DataUri>,
    thumbnail: Option<DataUri>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Setting {
    key: String,
    value: ScalarValue,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Copy)]
enum Mode {
    Fast,
    Safe,
}

#[test]
fn test_message_roundtrip() {
    let message = Message {
        subject: "report".to_string(),
        attachments: vec![
            DataUri::new(b"col1,col2\n1,2\n".to_vec(), "text/csv")
                .with_character_set("utf-8")
                .with_filename("report.csv"),
            DataUri::new(vec![0x89, 0x50, 0x4e, 0x47], "image/png"),
        ],
        thumbnail: None,
    };

    let json = serde_json::to_string(&message).unwrap();
    println!("Message JSON: {}", json);
    assert!(json.contains("data:text/csv;charset=utf-8;filename=report.csv;base64,"));
    assert!(json.contains("\"data:image/png;base64,iVBORw==\""));

    let back: Message = serde_json::from_str(&json).unwrap();
    assert_eq!(back, message);
}

#[test]
fn test_either_field_order_on_the_wire() {
    let a: DataUri =
        serde_json::from_str(r#""data:text/plain;charset=utf-8;filename=a.txt;base64,QQ==""#)
            .unwrap();
    let b: DataUri =
        serde_json::from_str(r#""data:text/plain;filename=a.txt;charset=utf-8;base64,QQ==""#)
            .unwrap();
    assert_eq!(a, b);

    // Re-serializing normalizes to charset before filename.
    assert_eq!(
        serde_json::to_string(&b).unwrap(),
        r#""data:text/plain;charset=utf-8;filename=a.txt;base64,QQ==""#
    );
}

#[test]
fn test_invalid_data_uri_in_document() {
    let result: Result<Message, _> = serde_json::from_str(
        r#"{"subject":"x","attachments":["data:text/plain;base64,***"],"thumbnail":null}"#,
    );
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Invalid data URI payload"));

    let result: Result<DataUri, _> = serde_json::from_str("42");
    assert!(result.is_err());
}

#[test]
fn test_settings_with_mixed_scalars() {
    let settings = vec![
        Setting {
            key: "enabled".to_string(),
            value: ScalarValue::from(true),
        },
        Setting {
            key: "retries".to_string(),
            value: ScalarValue::from(3u8),
        },
        Setting {
            key: "ratio".to_string(),
            value: ScalarValue::from(0.75f64),
        },
        Setting {
            key: "since".to_string(),
            value: ScalarValue::from(Utc.with_ymd_and_hms(2023, 6, 1, 8, 0, 0).unwrap()),
        },
        Setting {
            key: "mode".to_string(),
            value: ScalarValue::from_symbol(&Mode::Safe),
        },
        Setting {
            key: "unset".to_string(),
            value: ScalarValue::empty(),
        },
    ];

    let json = serde_json::to_string(&settings).unwrap();
    assert_eq!(
        json,
        concat!(
            r#"[{"key":"enabled","value":"true"},"#,
            r#"{"key":"retries","value":"3"},"#,
            r#"{"key":"ratio","value":"0.75"},"#,
            r#"{"key":"since","value":"2023-06-01T08:00:00.0000000Z"},"#,
            r#"{"key":"mode","value":"Safe"},"#,
            r#"{"key":"unset","value":null}]"#
        )
    );

    let back: Vec<Setting> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, settings);
    assert!(back[0].value.equals(true));
    assert!(back[1].value.equals(3i64));
    assert!(back[4].value.equals(Symbol(Mode::Safe)));
    assert!(!back[4].value.equals(Symbol(Mode::Fast)));
}

#[test]
fn test_scalar_accepts_native_json_primitives() {
    let values: Vec<ScalarValue> =
        serde_json::from_str(r#"[true, 12, -4, 2.5, "text", null]"#).unwrap();
    let texts: Vec<Option<&str>> = values.iter().map(ScalarValue::as_str).collect();
    assert_eq!(
        texts,
        vec![
            Some("true"),
            Some("12"),
            Some("-4"),
            Some("2.5"),
            Some("text"),
            None
        ]
    );

    let result: Result<ScalarValue, _> = serde_json::from_str("[1]");
    assert!(result.is_err());
}

#[test]
fn test_scalar_is_raw_text_on_output() {
    // Already-canonical text is wrapped as-is, with no validation.
    let value: ScalarValue = serde_json::from_str(r#""TRUE""#).unwrap();
    assert_eq!(serde_json::to_string(&value).unwrap(), r#""TRUE""#);
    assert!(value.equals(true));
    assert_ne!(value, ScalarValue::from(true));
}
