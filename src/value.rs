//! Format-preserving scalar values.
//!
//! A [`ScalarValue`] stores one primitive as its canonical text and nothing
//! else. The source type only picks the canonicalization rule when the value
//! is built; afterwards booleans, numbers, timestamps and strings all look the
//! same to a serializer: a plain string.
//!
//! ## Canonicalization Table
//!
//! | Source | Canonical text |
//! |--------|----------------|
//! | `str`, `String`, `char` | unchanged |
//! | `bool` | `true` / `false` |
//! | integers, `BigInt` | base-10 digits, no grouping |
//! | `f32`, `f64` | shortest round-trip decimal, separator from [`ScalarOptions`]; `Infinity`, `-Infinity`, `NaN` |
//! | `DateTime<Utc>` | `2024-01-15T10:30:00.0000000Z` |
//! | `DateTime<FixedOffset>`, `DateTime<Local>` | `2024-01-15T10:30:00.0000000+02:00` |
//! | `NaiveDateTime` | `2024-01-15T10:30:00.0000000` |
//! | [`Symbol`] | declared variant name |
//! | [`Displayed`] | `to_string()` |
//! | `Option<T>` | `None` gives an absent value |
//!
//! ## Equality
//!
//! [`ScalarValue::equals`] never parses the stored text back. It canonicalizes
//! the other side with the same table and compares the two texts:
//!
//! ```rust
//! use serde_datauri::ScalarValue;
//!
//! let value = ScalarValue::from(true);
//! assert!(value.equals(true));
//! assert!(value.equals("TRUE"));
//! assert!(ScalarValue::from(1i32).equals(1i64));
//! assert!(!ScalarValue::from(1i32).equals(1.5f64));
//! ```

use crate::options::{DecimalSeparator, ScalarOptions};
use crate::symbol::symbol_name;
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Timelike, Utc};
use num_bigint::BigInt;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// Name used when a scalar is serialized as a newtype; markup backends use it
/// as the element name.
const NEWTYPE_NAME: &str = "string";

/// A rule that turns a source value into canonical text.
///
/// `None` means "absent" and is only produced by empty optionals.
pub trait Canonical {
    fn canonical(&self, options: &ScalarOptions) -> Option<String>;
}

impl<T> Canonical for &T
where
    T: ?Sized + Canonical,
{
    fn canonical(&self, options: &ScalarOptions) -> Option<String> {
        (**self).canonical(options)
    }
}

impl Canonical for str {
    fn canonical(&self, _options: &ScalarOptions) -> Option<String> {
        Some(self.to_string())
    }
}

impl Canonical for String {
    fn canonical(&self, _options: &ScalarOptions) -> Option<String> {
        Some(self.clone())
    }
}

impl Canonical for Cow<'_, str> {
    fn canonical(&self, _options: &ScalarOptions) -> Option<String> {
        Some(self.to_string())
    }
}

impl Canonical for char {
    fn canonical(&self, _options: &ScalarOptions) -> Option<String> {
        Some(self.to_string())
    }
}

impl Canonical for bool {
    fn canonical(&self, _options: &ScalarOptions) -> Option<String> {
        Some(if *self { "true" } else { "false" }.to_string())
    }
}

macro_rules! canonical_integer {
    ($($ty:ty),*) => {
        $(
            impl Canonical for $ty {
                fn canonical(&self, _options: &ScalarOptions) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

canonical_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, BigInt);

fn canonical_float(value: f64, text: String, separator: DecimalSeparator) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let separator = separator.as_char();
    text.chars()
        .map(|c| if c == '.' { separator } else { c })
        .collect()
}

impl Canonical for f32 {
    fn canonical(&self, options: &ScalarOptions) -> Option<String> {
        // Display on the f32 itself keeps the shortest f32 digits (0.1, not 0.10000000149011612).
        Some(canonical_float(
            f64::from(*self),
            self.to_string(),
            options.decimal_separator,
        ))
    }
}

impl Canonical for f64 {
    fn canonical(&self, options: &ScalarOptions) -> Option<String> {
        Some(canonical_float(
            *self,
            self.to_string(),
            options.decimal_separator,
        ))
    }
}

/// Seven fractional digits, 100ns resolution.
fn round_trip(naive: &NaiveDateTime, offset: &str) -> String {
    format!(
        "{}.{:07}{}",
        naive.format("%Y-%m-%dT%H:%M:%S"),
        naive.nanosecond() % 1_000_000_000 / 100,
        offset
    )
}

impl Canonical for DateTime<Utc> {
    fn canonical(&self, _options: &ScalarOptions) -> Option<String> {
        Some(round_trip(&self.naive_utc(), "Z"))
    }
}

impl Canonical for DateTime<FixedOffset> {
    fn canonical(&self, _options: &ScalarOptions) -> Option<String> {
        Some(round_trip(
            &self.naive_local(),
            &self.format("%:z").to_string(),
        ))
    }
}

impl Canonical for DateTime<Local> {
    fn canonical(&self, _options: &ScalarOptions) -> Option<String> {
        Some(round_trip(
            &self.naive_local(),
            &self.format("%:z").to_string(),
        ))
    }
}

impl Canonical for NaiveDateTime {
    fn canonical(&self, _options: &ScalarOptions) -> Option<String> {
        Some(round_trip(self, ""))
    }
}

impl<T> Canonical for Option<T>
where
    T: Canonical,
{
    fn canonical(&self, options: &ScalarOptions) -> Option<String> {
        self.as_ref().and_then(|value| value.canonical(options))
    }
}

impl Canonical for ScalarValue {
    fn canonical(&self, _options: &ScalarOptions) -> Option<String> {
        self.raw.clone()
    }
}

/// An enumerated symbol, canonicalized to its declared variant name.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_datauri::{ScalarValue, Symbol};
///
/// #[derive(Serialize)]
/// enum Level { Low, High }
///
/// let value = ScalarValue::new(Symbol(Level::High));
/// assert_eq!(value.as_str(), Some("High"));
/// assert!(value.equals(Symbol(Level::High)));
/// assert!(value.equals("high"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Symbol<T>(pub T);

impl<T> Canonical for Symbol<T>
where
    T: Serialize,
{
    fn canonical(&self, _options: &ScalarOptions) -> Option<String> {
        match symbol_name(&self.0) {
            Ok(name) => Some(name),
            Err(err) => {
                tracing::debug!(error = %err, "symbol has no declared name");
                None
            }
        }
    }
}

/// Any `Display` value, canonicalized to its `to_string()` output once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Displayed<T>(pub T);

impl<T> Canonical for Displayed<T>
where
    T: fmt::Display,
{
    fn canonical(&self, _options: &ScalarOptions) -> Option<String> {
        Some(self.0.to_string())
    }
}

/// A primitive value kept only as its canonical text.
///
/// # Examples
///
/// ```rust
/// use serde_datauri::ScalarValue;
///
/// let count = ScalarValue::from(42u32);
/// assert_eq!(count.to_string(), "42");
///
/// let empty = ScalarValue::from(None::<bool>);
/// assert!(empty.is_absent());
/// assert_eq!(empty, ScalarValue::default());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ScalarValue {
    raw: Option<String>,
}

impl ScalarValue {
    /// Canonicalizes `source` with default options.
    #[must_use]
    pub fn new<T: Canonical>(source: T) -> Self {
        Self::with_options(source, &ScalarOptions::default())
    }

    /// Canonicalizes `source` with the given options.
    #[must_use]
    pub fn with_options<T: Canonical>(source: T, options: &ScalarOptions) -> Self {
        ScalarValue {
            raw: source.canonical(options),
        }
    }

    /// Wraps text that is already canonical, e.g. read from a document.
    #[must_use]
    pub fn from_raw(text: impl Into<String>) -> Self {
        ScalarValue {
            raw: Some(text.into()),
        }
    }

    /// The absent value.
    #[must_use]
    pub const fn empty() -> Self {
        ScalarValue { raw: None }
    }

    /// Canonicalizes an enum variant to its declared name.
    ///
    /// Values that are not unit variants produce the absent value.
    #[must_use]
    pub fn from_symbol<T>(symbol: &T) -> Self
    where
        T: ?Sized + Serialize,
    {
        Self::new(Symbol(symbol))
    }

    /// Canonicalizes any `Display` value through `to_string()`.
    #[must_use]
    pub fn from_display<T>(value: &T) -> Self
    where
        T: ?Sized + fmt::Display,
    {
        Self::new(Displayed(value))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Returns `true` if there is no text at all (not the same as `""`).
    #[inline]
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.raw.is_none()
    }

    #[must_use]
    pub fn into_inner(self) -> Option<String> {
        self.raw
    }

    /// Compares against `other` using the default, case-insensitive mode.
    #[must_use]
    pub fn equals<T: Canonical>(&self, other: T) -> bool {
        self.equals_with(other, &ScalarOptions::default())
    }

    /// Canonicalizes `other` with `options` and compares the texts with
    /// `options.comparison`.
    ///
    /// Two absent values are equal; an absent and a present value are not.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_datauri::{DecimalSeparator, ScalarOptions, ScalarValue};
    ///
    /// let comma = ScalarOptions::new().with_decimal_separator(DecimalSeparator::Comma);
    /// let value = ScalarValue::from_raw("1,5");
    /// assert!(value.equals_with(1.5f64, &comma));
    /// assert!(!value.equals(1.5f64));
    /// ```
    #[must_use]
    pub fn equals_with<T: Canonical>(&self, other: T, options: &ScalarOptions) -> bool {
        match (self.raw.as_deref(), other.canonical(options).as_deref()) {
            (Some(left), Some(right)) => options.comparison.equal(left, right),
            (None, None) => true,
            _ => false,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw.as_deref().unwrap_or_default())
    }
}

macro_rules! scalar_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ScalarValue {
                fn from(value: $ty) -> Self {
                    ScalarValue::new(value)
                }
            }

            impl From<Option<$ty>> for ScalarValue {
                fn from(value: Option<$ty>) -> Self {
                    ScalarValue::new(value)
                }
            }
        )*
    };
}

scalar_from!(
    bool,
    char,
    String,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    BigInt,
    DateTime<Utc>,
    DateTime<FixedOffset>,
    DateTime<Local>,
    NaiveDateTime
);

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::new(value)
    }
}

impl From<Option<&str>> for ScalarValue {
    fn from(value: Option<&str>) -> Self {
        ScalarValue::new(value)
    }
}

impl From<ScalarValue> for Option<String> {
    fn from(value: ScalarValue) -> Self {
        value.raw
    }
}

impl Serialize for ScalarValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.raw {
            Some(raw) => serializer.serialize_newtype_struct(NEWTYPE_NAME, raw.as_str()),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for ScalarValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScalarValueVisitor;

        impl<'de> de::Visitor<'de> for ScalarValueVisitor {
            type Value = ScalarValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string, boolean, number, or null")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(ScalarValue::from_raw(value))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(ScalarValue::from_raw(value))
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(ScalarValue::new(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(ScalarValue::new(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(ScalarValue::new(value))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(ScalarValue::new(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(ScalarValue::empty())
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(ScalarValue::empty())
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_any(ScalarValueVisitor)
            }

            fn visit_newtype_struct<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_any(ScalarValueVisitor)
            }
        }

        deserializer.deserialize_newtype_struct(NEWTYPE_NAME, ScalarValueVisitor)
    }
}
