//! Configuration for scalar value canonicalization and comparison.
//!
//! This module provides:
//!
//! - [`ScalarOptions`]: Main configuration struct
//! - [`DecimalSeparator`]: Separator used when canonicalizing floating-point numbers
//! - [`Comparison`]: How two canonical texts are compared
//!
//! The defaults are locale-independent: floats use `.` and comparison ignores
//! case. Nothing here reads the process locale; a caller that needs
//! comma-decimal output asks for it explicitly.
//!
//! ## Examples
//!
//! ```rust
//! use serde_datauri::{Comparison, DecimalSeparator, ScalarOptions, ScalarValue};
//!
//! let options = ScalarOptions::new().with_decimal_separator(DecimalSeparator::Comma);
//! let value = ScalarValue::with_options(2.5f64, &options);
//! assert_eq!(value.as_str(), Some("2,5"));
//!
//! let strict = ScalarOptions::new().with_comparison(Comparison::Ordinal);
//! assert!(!ScalarValue::from("True").equals_with(true, &strict));
//! ```

/// Decimal separator for floating-point canonicalization.
///
/// # Examples
///
/// ```rust
/// use serde_datauri::DecimalSeparator;
///
/// assert_eq!(DecimalSeparator::Period.as_char(), '.');
/// assert_eq!(DecimalSeparator::Comma.as_char(), ',');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DecimalSeparator {
    #[default]
    Period,
    Comma,
}

impl DecimalSeparator {
    /// Returns the separator character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            DecimalSeparator::Period => '.',
            DecimalSeparator::Comma => ',',
        }
    }
}

/// Text comparison mode used by scalar equality.
///
/// - **Ordinal**: exact, byte-for-byte
/// - **AsciiIgnoreCase**: ASCII letters compare case-insensitively
/// - **IgnoreCase**: full Unicode lowercase comparison (default)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Comparison {
    Ordinal,
    AsciiIgnoreCase,
    #[default]
    IgnoreCase,
}

impl Comparison {
    /// Compares two texts under this mode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_datauri::Comparison;
    ///
    /// assert!(Comparison::IgnoreCase.equal("ÄPFEL", "äpfel"));
    /// assert!(!Comparison::AsciiIgnoreCase.equal("ÄPFEL", "äpfel"));
    /// assert!(Comparison::AsciiIgnoreCase.equal("TRUE", "true"));
    /// assert!(!Comparison::Ordinal.equal("TRUE", "true"));
    /// ```
    #[must_use]
    pub fn equal(self, left: &str, right: &str) -> bool {
        match self {
            Comparison::Ordinal => left == right,
            Comparison::AsciiIgnoreCase => left.eq_ignore_ascii_case(right),
            Comparison::IgnoreCase => {
                left == right
                    || left
                        .chars()
                        .flat_map(char::to_lowercase)
                        .eq(right.chars().flat_map(char::to_lowercase))
            }
        }
    }
}

/// Options controlling how primitives become canonical text and how texts
/// are compared.
///
/// # Examples
///
/// ```rust
/// use serde_datauri::{Comparison, DecimalSeparator, ScalarOptions};
///
/// let options = ScalarOptions::new();
/// assert_eq!(options.decimal_separator, DecimalSeparator::Period);
/// assert_eq!(options.comparison, Comparison::IgnoreCase);
///
/// let options = ScalarOptions::invariant();
/// assert_eq!(options.comparison, Comparison::Ordinal);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ScalarOptions {
    pub decimal_separator: DecimalSeparator,
    pub comparison: Comparison,
}

impl ScalarOptions {
    /// Creates default options (period separator, case-insensitive comparison).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for exact comparison with invariant number formatting.
    #[must_use]
    pub fn invariant() -> Self {
        ScalarOptions {
            comparison: Comparison::Ordinal,
            ..Default::default()
        }
    }

    /// Sets the decimal separator used for floats.
    #[must_use]
    pub fn with_decimal_separator(mut self, separator: DecimalSeparator) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Sets the comparison mode used by [`ScalarValue::equals_with`](crate::ScalarValue::equals_with).
    #[must_use]
    pub fn with_comparison(mut self, comparison: Comparison) -> Self {
        self.comparison = comparison;
        self
    }
}
