//! Struct-aware JSON tree writer
//!
//! Produces the same tree as `serde_json::to_value`, except that struct and
//! struct-variant field names go through the naming policy and default-valued
//! fields are dropped per the ignore condition. Map keys, map values and
//! sequence elements are written untouched.

use super::JsonOptions;
use serde::ser::{self, Serialize, Serializer};
use serde_json::{Error, Map, Value};
use std::cell::Cell;

pub(super) struct ValueWriter<'a> {
    options: &'a JsonOptions,
    // Set once the value turns out to be `Some(_)`.
    optional: Option<&'a Cell<bool>>,
}

impl<'a> ValueWriter<'a> {
    pub(super) fn new(options: &'a JsonOptions) -> Self {
        Self {
            options,
            optional: None,
        }
    }
}

fn custom(msg: &str) -> Error {
    ser::Error::custom(msg)
}

fn map_key(key: Value) -> Result<String, Error> {
    match key {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(custom("map key must be a string")),
    }
}

macro_rules! forward_to_value_serializer {
    ($($method:ident($ty:ty)),* $(,)?) => {
        $(
            fn $method(self, v: $ty) -> Result<Value, Error> {
                serde_json::value::Serializer.$method(v)
            }
        )*
    };
}

impl<'a> Serializer for ValueWriter<'a> {
    type Ok = Value;
    type Error = Error;
    type SerializeSeq = SeqWriter<'a>;
    type SerializeTuple = SeqWriter<'a>;
    type SerializeTupleStruct = SeqWriter<'a>;
    type SerializeTupleVariant = TupleVariantWriter<'a>;
    type SerializeMap = MapWriter<'a>;
    type SerializeStruct = StructWriter<'a>;
    type SerializeStructVariant = StructVariantWriter<'a>;

    forward_to_value_serializer! {
        serialize_bool(bool),
        serialize_i8(i8),
        serialize_i16(i16),
        serialize_i32(i32),
        serialize_i64(i64),
        serialize_i128(i128),
        serialize_u8(u8),
        serialize_u16(u16),
        serialize_u32(u32),
        serialize_u64(u64),
        serialize_u128(u128),
        serialize_f32(f32),
        serialize_f64(f64),
        serialize_char(char),
        serialize_str(&str),
        serialize_bytes(&[u8]),
    }

    fn serialize_none(self) -> Result<Value, Error> {
        Ok(Value::Null)
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Value, Error> {
        if let Some(flag) = self.optional {
            flag.set(true);
        }
        value.serialize(ValueWriter::new(self.options))
    }

    fn serialize_unit(self) -> Result<Value, Error> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value, Error> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
    ) -> Result<Value, Error> {
        Ok(Value::String(variant.to_owned()))
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Value, Error> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value, Error> {
        let mut map = Map::new();
        map.insert(
            variant.to_owned(),
            value.serialize(ValueWriter::new(self.options))?,
        );
        Ok(Value::Object(map))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SeqWriter<'a>, Error> {
        Ok(SeqWriter {
            options: self.options,
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqWriter<'a>, Error> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SeqWriter<'a>, Error> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<TupleVariantWriter<'a>, Error> {
        Ok(TupleVariantWriter {
            variant,
            items: self.serialize_seq(Some(len))?,
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<MapWriter<'a>, Error> {
        Ok(MapWriter {
            options: self.options,
            map: Map::new(),
            next_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<StructWriter<'a>, Error> {
        Ok(StructWriter {
            options: self.options,
            map: Map::new(),
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<StructVariantWriter<'a>, Error> {
        Ok(StructVariantWriter {
            variant,
            fields: StructWriter {
                options: self.options,
                map: Map::new(),
            },
        })
    }
}

pub(super) struct SeqWriter<'a> {
    options: &'a JsonOptions,
    items: Vec<Value>,
}

impl ser::SerializeSeq for SeqWriter<'_> {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Error> {
        self.items.push(value.serialize(ValueWriter::new(self.options))?);
        Ok(())
    }

    fn end(self) -> Result<Value, Error> {
        Ok(Value::Array(self.items))
    }
}

impl ser::SerializeTuple for SeqWriter<'_> {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Error> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, Error> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SeqWriter<'_> {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Error> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, Error> {
        ser::SerializeSeq::end(self)
    }
}

pub(super) struct TupleVariantWriter<'a> {
    variant: &'static str,
    items: SeqWriter<'a>,
}

impl ser::SerializeTupleVariant for TupleVariantWriter<'_> {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Error> {
        ser::SerializeSeq::serialize_element(&mut self.items, value)
    }

    fn end(self) -> Result<Value, Error> {
        let mut map = Map::new();
        map.insert(self.variant.to_owned(), ser::SerializeSeq::end(self.items)?);
        Ok(Value::Object(map))
    }
}

pub(super) struct MapWriter<'a> {
    options: &'a JsonOptions,
    map: Map<String, Value>,
    next_key: Option<String>,
}

impl ser::SerializeMap for MapWriter<'_> {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<(), Error> {
        self.next_key = Some(map_key(key.serialize(ValueWriter::new(self.options))?)?);
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Error> {
        let key = self
            .next_key
            .take()
            .ok_or_else(|| custom("map value written before its key"))?;
        let value = value.serialize(ValueWriter::new(self.options))?;
        self.map.insert(key, value);
        Ok(())
    }

    fn end(self) -> Result<Value, Error> {
        Ok(Value::Object(self.map))
    }
}

pub(super) struct StructWriter<'a> {
    options: &'a JsonOptions,
    map: Map<String, Value>,
}

impl ser::SerializeStruct for StructWriter<'_> {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), Error> {
        let optional = Cell::new(false);
        let value = value.serialize(ValueWriter {
            options: self.options,
            optional: Some(&optional),
        })?;
        if !self.options.omits(&value, optional.get()) {
            self.map.insert(self.options.rename(key), value);
        }
        Ok(())
    }

    fn end(self) -> Result<Value, Error> {
        Ok(Value::Object(self.map))
    }
}

pub(super) struct StructVariantWriter<'a> {
    variant: &'static str,
    fields: StructWriter<'a>,
}

impl ser::SerializeStructVariant for StructVariantWriter<'_> {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), Error> {
        ser::SerializeStruct::serialize_field(&mut self.fields, key, value)
    }

    fn end(self) -> Result<Value, Error> {
        let mut map = Map::new();
        map.insert(self.variant.to_owned(), ser::SerializeStruct::end(self.fields)?);
        Ok(Value::Object(map))
    }
}
