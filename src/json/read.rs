//! Struct-aware JSON tree reader
//!
//! Mirrors the writer: struct fields are looked up under their policy-renamed
//! key (falling back to the declared name), and with `IgnoreCondition::WhenDefault`
//! a field missing from the object decodes as the zero value of its type
//! (`None`, `false`, `0`, empty string or collection). Map keys are never
//! renamed.

use super::{IgnoreCondition, JsonOptions};
use serde::de::value::StringDeserializer;
use serde::de::{
    self, DeserializeSeed, Deserializer, EnumAccess, IntoDeserializer, MapAccess, SeqAccess,
    Unexpected, VariantAccess, Visitor,
};
use serde::forward_to_deserialize_any;
use serde_json::{Error, Map, Value};

pub(super) struct ValueReader<'a> {
    value: Value,
    options: &'a JsonOptions,
}

impl<'a> ValueReader<'a> {
    pub(super) fn new(value: Value, options: &'a JsonOptions) -> Self {
        Self { value, options }
    }
}

enum Member {
    Present(Value),
    Omitted,
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

/// Pair each declared field with its wire member; unknown keys are kept as-is
/// so `deny_unknown_fields` and `flatten` still see them.
fn struct_members(
    mut object: Map<String, Value>,
    fields: &'static [&'static str],
    options: &JsonOptions,
) -> Vec<(String, Member)> {
    let mut members = Vec::with_capacity(object.len().max(fields.len()));
    for field in fields {
        let wire = options.rename(field);
        match object.remove(&wire).or_else(|| object.remove(*field)) {
            Some(value) => members.push((field.to_string(), Member::Present(value))),
            None if options.ignore == IgnoreCondition::WhenDefault => {
                members.push((field.to_string(), Member::Omitted))
            }
            None => {}
        }
    }
    members.extend(object.into_iter().map(|(k, v)| (k, Member::Present(v))));
    members
}

fn visit_array<'de, V: Visitor<'de>>(
    items: Vec<Value>,
    options: &JsonOptions,
    visitor: V,
) -> Result<V::Value, Error> {
    let len = items.len();
    let mut seq = SeqReader {
        items: items.into_iter(),
        options,
    };
    let out = visitor.visit_seq(&mut seq)?;
    if seq.items.as_slice().is_empty() {
        Ok(out)
    } else {
        Err(de::Error::invalid_length(len, &"fewer elements in array"))
    }
}

fn visit_members<'de, V: Visitor<'de>>(
    members: Vec<(String, Member)>,
    options: &JsonOptions,
    visitor: V,
) -> Result<V::Value, Error> {
    visitor.visit_map(MapReader {
        members: members.into_iter(),
        pending: None,
        options,
    })
}

impl<'de> Deserializer<'de> for ValueReader<'_> {
    type Error = Error;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        match self.value {
            Value::Array(items) => visit_array(items, self.options, visitor),
            Value::Object(object) => {
                let members = object
                    .into_iter()
                    .map(|(k, v)| (k, Member::Present(v)))
                    .collect();
                visit_members(members, self.options, visitor)
            }
            other => other.deserialize_any(visitor),
        }
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        match self.value {
            Value::Null => visitor.visit_none(),
            value => visitor.visit_some(ValueReader::new(value, self.options)),
        }
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Error> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Error> {
        match self.value {
            Value::Object(object) => {
                let members = struct_members(object, fields, self.options);
                visit_members(members, self.options, visitor)
            }
            other => ValueReader::new(other, self.options).deserialize_any(visitor),
        }
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Error> {
        match self.value {
            Value::String(variant) => visitor.visit_enum(EnumReader {
                variant,
                content: None,
                options: self.options,
            }),
            Value::Object(object) => {
                let mut entries = object.into_iter();
                match (entries.next(), entries.next()) {
                    (Some((variant, content)), None) => visitor.visit_enum(EnumReader {
                        variant,
                        content: Some(content),
                        options: self.options,
                    }),
                    _ => Err(de::Error::invalid_value(
                        Unexpected::Map,
                        &"map with a single key",
                    )),
                }
            }
            other => Err(de::Error::invalid_type(
                unexpected(&other),
                &"string or map",
            )),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map identifier
        ignored_any
    }
}

struct SeqReader<'a> {
    items: std::vec::IntoIter<Value>,
    options: &'a JsonOptions,
}

impl<'de> SeqAccess<'de> for SeqReader<'_> {
    type Error = Error;

    fn next_element_seed<T: DeserializeSeed<'de>>(
        &mut self,
        seed: T,
    ) -> Result<Option<T::Value>, Error> {
        match self.items.next() {
            Some(value) => seed.deserialize(ValueReader::new(value, self.options)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.items.len())
    }
}

struct MapReader<'a> {
    members: std::vec::IntoIter<(String, Member)>,
    pending: Option<Member>,
    options: &'a JsonOptions,
}

impl<'de> MapAccess<'de> for MapReader<'_> {
    type Error = Error;

    fn next_key_seed<K: DeserializeSeed<'de>>(
        &mut self,
        seed: K,
    ) -> Result<Option<K::Value>, Error> {
        match self.members.next() {
            Some((key, member)) => {
                self.pending = Some(member);
                let key: StringDeserializer<Error> = key.into_deserializer();
                seed.deserialize(key).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V: DeserializeSeed<'de>>(&mut self, seed: V) -> Result<V::Value, Error> {
        match self.pending.take() {
            Some(Member::Present(value)) => seed.deserialize(ValueReader::new(value, self.options)),
            Some(Member::Omitted) => seed.deserialize(OmittedReader {
                options: self.options,
            }),
            None => Err(de::Error::custom("map value requested before its key")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.members.len())
    }
}

struct EnumReader<'a> {
    variant: String,
    content: Option<Value>,
    options: &'a JsonOptions,
}

impl<'de, 'a> EnumAccess<'de> for EnumReader<'a> {
    type Error = Error;
    type Variant = VariantReader<'a>;

    fn variant_seed<V: DeserializeSeed<'de>>(
        self,
        seed: V,
    ) -> Result<(V::Value, VariantReader<'a>), Error> {
        let variant: StringDeserializer<Error> = self.variant.into_deserializer();
        let tag = seed.deserialize(variant)?;
        Ok((
            tag,
            VariantReader {
                content: self.content,
                options: self.options,
            },
        ))
    }
}

struct VariantReader<'a> {
    content: Option<Value>,
    options: &'a JsonOptions,
}

impl<'a> VariantReader<'a> {
    fn require(self, expected: &'static str) -> Result<ValueReader<'a>, Error> {
        match self.content {
            Some(value) => Ok(ValueReader::new(value, self.options)),
            None => Err(de::Error::invalid_type(Unexpected::UnitVariant, &expected)),
        }
    }
}

impl<'de> VariantAccess<'de> for VariantReader<'_> {
    type Error = Error;

    fn unit_variant(self) -> Result<(), Error> {
        match self.content {
            None | Some(Value::Null) => Ok(()),
            Some(other) => Err(de::Error::invalid_type(unexpected(&other), &"unit variant")),
        }
    }

    fn newtype_variant_seed<T: DeserializeSeed<'de>>(self, seed: T) -> Result<T::Value, Error> {
        seed.deserialize(self.require("newtype variant")?)
    }

    fn tuple_variant<V: Visitor<'de>>(self, _len: usize, visitor: V) -> Result<V::Value, Error> {
        self.require("tuple variant")?.deserialize_any(visitor)
    }

    fn struct_variant<V: Visitor<'de>>(
        self,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Error> {
        self.require("struct variant")?
            .deserialize_struct("", fields, visitor)
    }
}

/// Stands in for a struct field the writer left out.
struct OmittedReader<'a> {
    options: &'a JsonOptions,
}

macro_rules! zero_integer {
    ($($method:ident => $visit:ident),* $(,)?) => {
        $(
            fn $method<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
                visitor.$visit(0)
            }
        )*
    };
}

impl<'de> Deserializer<'de> for OmittedReader<'_> {
    type Error = Error;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_unit()
    }

    fn deserialize_bool<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_bool(false)
    }

    zero_integer! {
        deserialize_i8 => visit_i64,
        deserialize_i16 => visit_i64,
        deserialize_i32 => visit_i64,
        deserialize_i64 => visit_i64,
        deserialize_i128 => visit_i64,
        deserialize_u8 => visit_u64,
        deserialize_u16 => visit_u64,
        deserialize_u32 => visit_u64,
        deserialize_u64 => visit_u64,
        deserialize_u128 => visit_u64,
    }

    fn deserialize_f32<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_f64(0.0)
    }

    fn deserialize_f64<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_f64(0.0)
    }

    fn deserialize_str<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_str("")
    }

    fn deserialize_string<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_str("")
    }

    fn deserialize_bytes<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_bytes(&[])
    }

    fn deserialize_byte_buf<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_bytes(&[])
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_none()
    }

    fn deserialize_unit<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Error> {
        visitor.visit_unit()
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Error> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visit_array(Vec::new(), self.options, visitor)
    }

    fn deserialize_tuple<V: Visitor<'de>>(self, _len: usize, visitor: V) -> Result<V::Value, Error> {
        visit_array(Vec::new(), self.options, visitor)
    }

    fn deserialize_tuple_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value, Error> {
        visit_array(Vec::new(), self.options, visitor)
    }

    fn deserialize_map<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visit_members(Vec::new(), self.options, visitor)
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Error> {
        ValueReader::new(Value::Object(Map::new()), self.options)
            .deserialize_struct(name, fields, visitor)
    }

    forward_to_deserialize_any! {
        char enum identifier ignored_any
    }
}
