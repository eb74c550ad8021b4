//! Declared-name capture for enumerated symbols.
//!
//! Rust enums carry no runtime names, but their `Serialize` impls do: a unit
//! variant reaches the serializer as `serialize_unit_variant(.., "Name")`.
//! [`symbol_name`] runs a value through a serializer that keeps that name and
//! refuses everything else, so `#[serde(rename = "...")]` and
//! `#[serde(rename_all = "...")]` are honoured for free.
//!
//! ```rust
//! use serde::Serialize;
//! use serde_datauri::symbol::symbol_name;
//!
//! #[derive(Serialize)]
//! enum Colour {
//!     Red,
//!     #[serde(rename = "dark-blue")]
//!     DarkBlue,
//! }
//!
//! assert_eq!(symbol_name(&Colour::Red).unwrap(), "Red");
//! assert_eq!(symbol_name(&Colour::DarkBlue).unwrap(), "dark-blue");
//! ```

use crate::{Error, Result};
use serde::ser::{self, Impossible, Serialize};

/// Returns the declared name of a unit enum variant.
///
/// Newtype wrappers and `Some` are looked through. Strings are accepted as
/// already-named symbols.
///
/// # Errors
///
/// Returns an error for any value that does not serialize as a unit variant
/// or a string.
pub fn symbol_name<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    value.serialize(SymbolNameSerializer)
}

struct SymbolNameSerializer;

fn not_a_symbol(found: &str) -> Error {
    Error::custom(format!("expected a unit enum variant, found {}", found))
}

impl ser::Serializer for SymbolNameSerializer {
    type Ok = String;
    type Error = Error;

    type SerializeSeq = Impossible<String, Error>;
    type SerializeTuple = Impossible<String, Error>;
    type SerializeTupleStruct = Impossible<String, Error>;
    type SerializeTupleVariant = Impossible<String, Error>;
    type SerializeMap = Impossible<String, Error>;
    type SerializeStruct = Impossible<String, Error>;
    type SerializeStructVariant = Impossible<String, Error>;

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String> {
        Ok(variant.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_some<T>(self, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_bool(self, _v: bool) -> Result<String> {
        Err(not_a_symbol("bool"))
    }

    fn serialize_i8(self, _v: i8) -> Result<String> {
        Err(not_a_symbol("integer"))
    }

    fn serialize_i16(self, _v: i16) -> Result<String> {
        Err(not_a_symbol("integer"))
    }

    fn serialize_i32(self, _v: i32) -> Result<String> {
        Err(not_a_symbol("integer"))
    }

    fn serialize_i64(self, _v: i64) -> Result<String> {
        Err(not_a_symbol("integer"))
    }

    fn serialize_u8(self, _v: u8) -> Result<String> {
        Err(not_a_symbol("integer"))
    }

    fn serialize_u16(self, _v: u16) -> Result<String> {
        Err(not_a_symbol("integer"))
    }

    fn serialize_u32(self, _v: u32) -> Result<String> {
        Err(not_a_symbol("integer"))
    }

    fn serialize_u64(self, _v: u64) -> Result<String> {
        Err(not_a_symbol("integer"))
    }

    fn serialize_f32(self, _v: f32) -> Result<String> {
        Err(not_a_symbol("float"))
    }

    fn serialize_f64(self, _v: f64) -> Result<String> {
        Err(not_a_symbol("float"))
    }

    fn serialize_char(self, _v: char) -> Result<String> {
        Err(not_a_symbol("char"))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String> {
        Err(not_a_symbol("bytes"))
    }

    fn serialize_none(self) -> Result<String> {
        Err(not_a_symbol("none"))
    }

    fn serialize_unit(self) -> Result<String> {
        Err(not_a_symbol("unit"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<String> {
        Err(not_a_symbol(name))
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        Err(not_a_symbol(&format!("newtype variant {}::{}", name, variant)))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(not_a_symbol("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(not_a_symbol("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(not_a_symbol(name))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(not_a_symbol(&format!("tuple variant {}::{}", name, variant)))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(not_a_symbol("map"))
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(not_a_symbol(name))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(not_a_symbol(&format!("struct variant {}::{}", name, variant)))
    }
}
