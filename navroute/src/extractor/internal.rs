//! Implements the Serde `Deserializer` used by the extractors. The data source is a list of
//! `(name, value)` pairs, where an absent value stands for an optional binding that was not
//! supplied.

use std::fmt::Display;
use std::str::FromStr;

use serde::de::{
    Deserialize, DeserializeSeed, Deserializer, EnumAccess, MapAccess, VariantAccess, Visitor,
};
use serde::forward_to_deserialize_any;

use super::ExtractorError;

/// Implements `Deserializer` functions which parse the current value with `FromStr` and hand
/// the result to the named visitor function.
macro_rules! parse_value_types {
    ($($trait_fn:ident => $visitor_fn:ident),+ $(,)?) => {
        $(
            fn $trait_fn<V>(self, visitor: V) -> Result<V::Value, Self::Error>
            where
                V: Visitor<'de>,
            {
                visitor.$visitor_fn(self.parse()?)
            }
        )+
    };
}

/// Implements a `Deserializer` function which always fails with `UnexpectedValueType`. The
/// arguments following `self` are given in parentheses.
macro_rules! reject_value_type {
    ($trait_fn:ident, $name:expr, ($($arg_i:ident : $arg_t:ty),+)) => {
        fn $trait_fn<V>(self, $($arg_i: $arg_t),+) -> Result<V::Value, Self::Error>
        where
            V: Visitor<'de>,
        {
            Err(ExtractorError::UnexpectedValueType($name))
        }
    };
}

/// Deserializes a value of type `T` from `(name, value)` pairs.
pub(super) fn from_pairs<'de, T, I>(pairs: I) -> Result<T, ExtractorError>
where
    T: Deserialize<'de>,
    I: Iterator<Item = (&'de str, Option<&'de str>)>,
{
    T::deserialize(ExtractorDeserializer { pairs })
}

/// The top level of the serde side of extraction. Only structured targets are accepted, and
/// `ExtractorDeserializerAccess` loops through the pairs populating them.
struct ExtractorDeserializer<I> {
    pairs: I,
}

impl<'de, I> Deserializer<'de> for ExtractorDeserializer<I>
where
    I: Iterator<Item = (&'de str, Option<&'de str>)>,
{
    type Error = ExtractorError;

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_map(ExtractorDeserializerAccess {
            pairs: self.pairs,
            current: None,
        })
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_map(visitor)
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    // Key/value pairs only become structured values, never a single one.
    fn deserialize_any<V>(self, _visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        Err(ExtractorError::UnexpectedTargetType("a struct or map is required"))
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 u8 u16 u32 u64 f32 f64 char str string bytes
        byte_buf option seq tuple tuple_struct enum identifier ignored_any
    }
}

/// Iterates through the pairs, yielding each key and then its value.
struct ExtractorDeserializerAccess<'de, I> {
    pairs: I,
    current: Option<Option<&'de str>>,
}

impl<'de, I> MapAccess<'de> for ExtractorDeserializerAccess<'de, I>
where
    I: Iterator<Item = (&'de str, Option<&'de str>)>,
{
    type Error = ExtractorError;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>, Self::Error>
    where
        K: DeserializeSeed<'de>,
    {
        match self.pairs.next() {
            Some((key, value)) => {
                self.current = Some(value);
                seed.deserialize(DeserializeKey { key }).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value, Self::Error>
    where
        V: DeserializeSeed<'de>,
    {
        match self.current.take() {
            Some(value) => seed.deserialize(DeserializeValue { value }),
            None => Err(ExtractorError::NoCurrentItem),
        }
    }
}

/// Deserializes a binding name or query key into an identifier or string.
struct DeserializeKey<'de> {
    key: &'de str,
}

impl<'de> Deserializer<'de> for DeserializeKey<'de> {
    type Error = ExtractorError;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_borrowed_str(self.key)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 u8 u16 u32 u64 f32 f64 char str string bytes
        byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

/// Deserializes a single value into the field type, parsing it with `FromStr` where the field
/// is a primitive. An absent value is only accepted by `Option` fields.
struct DeserializeValue<'de> {
    value: Option<&'de str>,
}

impl<'de> DeserializeValue<'de> {
    fn required(&self) -> Result<&'de str, ExtractorError> {
        self.value.ok_or(ExtractorError::NoValue)
    }

    fn parse<T>(&self) -> Result<T, ExtractorError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let value = self.required()?;
        value
            .parse()
            .map_err(|e: T::Err| ExtractorError::ParseError(format!("{}: {:?}", e, value)))
    }
}

impl<'de> Deserializer<'de> for DeserializeValue<'de> {
    type Error = ExtractorError;

    parse_value_types! {
        deserialize_bool => visit_bool,
        deserialize_i8 => visit_i8,
        deserialize_i16 => visit_i16,
        deserialize_i32 => visit_i32,
        deserialize_i64 => visit_i64,
        deserialize_u8 => visit_u8,
        deserialize_u16 => visit_u16,
        deserialize_u32 => visit_u32,
        deserialize_u64 => visit_u64,
        deserialize_f32 => visit_f32,
        deserialize_f64 => visit_f64,
        deserialize_char => visit_char,
    }

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Some(value) => visitor.visit_borrowed_str(value),
            None => visitor.visit_none(),
        }
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_borrowed_str(self.required()?)
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_bytes<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_borrowed_bytes(self.required()?.as_bytes())
    }

    fn deserialize_byte_buf<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_bytes(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Some(_) => visitor.visit_some(self),
            None => visitor.visit_none(),
        }
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    fn deserialize_newtype_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_enum(ValueEnum {
            value: self.required()?,
        })
    }

    reject_value_type!(deserialize_seq, "sequence", (_visitor: V));
    reject_value_type!(deserialize_map, "map", (_visitor: V));
    reject_value_type!(deserialize_identifier, "identifier", (_visitor: V));
    reject_value_type!(deserialize_tuple, "tuple", (_len: usize, _visitor: V));
    reject_value_type!(
        deserialize_tuple_struct,
        "tuple struct",
        (_name: &'static str, _len: usize, _visitor: V)
    );
    reject_value_type!(
        deserialize_struct,
        "struct",
        (_name: &'static str, _fields: &'static [&'static str], _visitor: V)
    );
}

struct ValueEnum<'de> {
    value: &'de str,
}

impl<'de> EnumAccess<'de> for ValueEnum<'de> {
    type Error = ExtractorError;
    type Variant = UnitVariant;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant), Self::Error>
    where
        V: DeserializeSeed<'de>,
    {
        let variant_name = seed.deserialize(DeserializeKey { key: self.value })?;
        Ok((variant_name, UnitVariant))
    }
}

struct UnitVariant;

impl<'de> VariantAccess<'de> for UnitVariant {
    type Error = ExtractorError;

    fn unit_variant(self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn newtype_variant_seed<T>(self, _seed: T) -> Result<T::Value, Self::Error>
    where
        T: DeserializeSeed<'de>,
    {
        Err(ExtractorError::UnexpectedEnumVariantType(
            "enum newtype variants are unsupported in extractors",
        ))
    }

    fn tuple_variant<V>(self, _len: usize, _visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        Err(ExtractorError::UnexpectedEnumVariantType(
            "enum tuple variants are unsupported in extractors",
        ))
    }

    fn struct_variant<V>(
        self,
        _fields: &'static [&'static str],
        _visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        Err(ExtractorError::UnexpectedEnumVariantType(
            "enum struct variants are unsupported in extractors",
        ))
    }
}
