//! Mixing primitive kinds behind one string representation.
//!
//! Run with: cargo run --example scalar_values

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_datauri::{Comparison, ScalarOptions, ScalarValue, Symbol};
use std::collections::BTreeMap;
use std::error::Error;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
enum Tier {
    Free,
    Pro,
}

#[derive(Debug, Serialize, Deserialize)]
struct Profile {
    attributes: BTreeMap<String, ScalarValue>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut attributes = BTreeMap::new();
    attributes.insert("verified".to_string(), ScalarValue::from(true));
    attributes.insert("logins".to_string(), ScalarValue::from(128u32));
    attributes.insert("score".to_string(), ScalarValue::from(4.75f64));
    attributes.insert("joined".to_string(), ScalarValue::from(Utc::now()));
    attributes.insert("tier".to_string(), ScalarValue::from_symbol(&Tier::Pro));

    let profile = Profile { attributes };
    let json = serde_json::to_string_pretty(&profile)?;
    println!("JSON:\n{}\n", json);

    let back: Profile = serde_json::from_str(&json)?;
    let tier = &back.attributes["tier"];
    println!("tier == Pro:  {}", tier.equals(Symbol(Tier::Pro)));
    println!("tier == Free: {}", tier.equals(Symbol(Tier::Free)));
    println!("tier == \"PRO\" (default, case-insensitive): {}", tier.equals("PRO"));

    let ordinal = ScalarOptions::new().with_comparison(Comparison::Ordinal);
    println!(
        "tier == \"PRO\" (ordinal): {}",
        tier.equals_with("PRO", &ordinal)
    );

    let logins = &back.attributes["logins"];
    println!("logins == 128i64: {}", logins.equals(128i64));

    Ok(())
}
