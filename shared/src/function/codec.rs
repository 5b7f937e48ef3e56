use std::{collections::HashMap, marker::PhantomData, sync::Arc};

use volley_serde::{BitReader, BitWrite, Serde, SerdeErr};

use super::{
    error::CodecError,
    param_type::ParamType,
    param_value::{CustomParam, DynParam, ParamValue},
};

/// Encodes and decodes the values of one parameter type
pub trait ParamCodec: Send + Sync {
    /// Value a slot of this type holds before anything is set
    fn default_value(&self) -> ParamValue;

    /// Whether `value` can be written by this codec. Called after the value's
    /// runtime type has been matched against the declared type.
    fn accepts(&self, value: &ParamValue) -> bool {
        let _ = value;
        true
    }

    fn ser(&self, value: &ParamValue, writer: &mut dyn BitWrite);

    fn de(&self, reader: &mut BitReader) -> Result<ParamValue, SerdeErr>;
}

/// Lookup table from parameter type to codec. The default table holds codecs
/// for every builtin `ParamType`.
#[derive(Clone)]
pub struct CodecTable {
    codecs: HashMap<ParamType, Arc<dyn ParamCodec>>,
}

impl Default for CodecTable {
    fn default() -> Self {
        let mut table = Self::empty();
        for param_type in ParamType::BUILTIN {
            table.add_codec(param_type, BuiltinCodec { param_type });
        }
        table
    }
}

impl CodecTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table without any codecs, not even the builtin ones
    pub fn empty() -> Self {
        Self {
            codecs: HashMap::new(),
        }
    }

    /// Registers (or replaces) the codec for a parameter type
    pub fn add_codec<C: ParamCodec + 'static>(
        &mut self,
        param_type: ParamType,
        codec: C,
    ) -> &mut Self {
        self.codecs.insert(param_type, Arc::new(codec));
        self
    }

    /// Registers `T` as the custom parameter type `name`, using its `Serde`
    /// implementation as the wire format
    pub fn add_serde<T>(&mut self, name: &'static str) -> &mut Self
    where
        T: Serde + Default + DynParam,
    {
        self.add_codec(
            ParamType::Custom(name),
            SerdeCodec::<T> {
                name,
                phantom: PhantomData,
            },
        )
    }

    pub fn get(&self, param_type: &ParamType) -> Option<&dyn ParamCodec> {
        self.codecs.get(param_type).map(|codec| codec.as_ref())
    }

    pub fn supports(&self, param_type: &ParamType) -> bool {
        self.codecs.contains_key(param_type)
    }

    pub fn default_value(&self, param_type: &ParamType) -> Result<ParamValue, CodecError> {
        self.codec(param_type).map(|codec| codec.default_value())
    }

    /// Checks `values` against `types` without writing anything
    pub fn check(&self, values: &[ParamValue], types: &[ParamType]) -> Result<(), CodecError> {
        if values.len() != types.len() {
            return Err(CodecError::ArityMismatch {
                expected: types.len(),
                found: values.len(),
            });
        }

        for (slot, (value, param_type)) in values.iter().zip(types).enumerate() {
            let codec = self.codec(param_type)?;
            if value.param_type() != *param_type || !codec.accepts(value) {
                return Err(CodecError::TypeMismatch {
                    slot,
                    expected: *param_type,
                    found: value.param_type(),
                });
            }
        }

        Ok(())
    }

    /// Appends `values` in slot order. Every value is checked before the first
    /// bit is written, so a failed call leaves `writer` untouched.
    pub fn encode(
        &self,
        values: &[ParamValue],
        types: &[ParamType],
        writer: &mut dyn BitWrite,
    ) -> Result<(), CodecError> {
        self.check(values, types)?;

        for (value, param_type) in values.iter().zip(types) {
            self.codec(param_type)?.ser(value, writer);
        }

        Ok(())
    }

    /// Reads exactly `types.len()` values in order
    pub fn decode(
        &self,
        reader: &mut BitReader,
        types: &[ParamType],
    ) -> Result<Vec<ParamValue>, CodecError> {
        let mut values = Vec::with_capacity(types.len());

        for (slot, param_type) in types.iter().enumerate() {
            let codec = self.codec(param_type)?;
            let value = codec.de(reader).map_err(|_| {
                if reader.overran() {
                    CodecError::TruncatedInput { slot }
                } else {
                    CodecError::MalformedValue {
                        slot,
                        param_type: *param_type,
                    }
                }
            })?;
            if value.param_type() != *param_type {
                return Err(CodecError::MalformedValue {
                    slot,
                    param_type: *param_type,
                });
            }
            values.push(value);
        }

        Ok(values)
    }

    /// Bits `encode` would write for already checked values
    pub fn bit_length(&self, values: &[ParamValue]) -> Result<u32, CodecError> {
        let mut counter = volley_serde::BitCounter::new(0, 0, u32::MAX);
        for value in values {
            self.codec(&value.param_type())?.ser(value, &mut counter);
        }
        Ok(counter.bits_needed())
    }

    fn codec(&self, param_type: &ParamType) -> Result<&dyn ParamCodec, CodecError> {
        self.get(param_type).ok_or(CodecError::UnsupportedType {
            param_type: *param_type,
        })
    }
}

// Builtin layouts are whole bytes, so a truncated envelope can never be
// mistaken for zero padding.
struct BuiltinCodec {
    param_type: ParamType,
}

impl ParamCodec for BuiltinCodec {
    fn default_value(&self) -> ParamValue {
        ParamValue::builtin_default(&self.param_type).unwrap_or(ParamValue::Bool(false))
    }

    fn ser(&self, value: &ParamValue, writer: &mut dyn BitWrite) {
        match value {
            ParamValue::Bool(inner) => u8::from(*inner).ser(writer),
            ParamValue::U8(inner) => inner.ser(writer),
            ParamValue::I8(inner) => inner.ser(writer),
            ParamValue::U16(inner) => inner.ser(writer),
            ParamValue::I16(inner) => inner.ser(writer),
            ParamValue::U32(inner) => inner.ser(writer),
            ParamValue::I32(inner) => inner.ser(writer),
            ParamValue::U64(inner) => inner.ser(writer),
            ParamValue::I64(inner) => inner.ser(writer),
            ParamValue::F32(inner) => inner.ser(writer),
            ParamValue::F64(inner) => inner.ser(writer),
            ParamValue::String(inner) => inner.ser(writer),
            ParamValue::Bytes(inner) => inner.ser(writer),
            ParamValue::Vec2(inner) => inner.ser(writer),
            ParamValue::Vec3(inner) => inner.ser(writer),
            ParamValue::Quat(inner) => inner.ser(writer),
            // custom values never pass the type check for a builtin slot
            ParamValue::Custom(_) => {}
        }
    }

    fn de(&self, reader: &mut BitReader) -> Result<ParamValue, SerdeErr> {
        let value = match self.param_type {
            ParamType::Bool => match u8::de(reader)? {
                0 => ParamValue::Bool(false),
                1 => ParamValue::Bool(true),
                _ => return Err(SerdeErr),
            },
            ParamType::U8 => ParamValue::U8(Serde::de(reader)?),
            ParamType::I8 => ParamValue::I8(Serde::de(reader)?),
            ParamType::U16 => ParamValue::U16(Serde::de(reader)?),
            ParamType::I16 => ParamValue::I16(Serde::de(reader)?),
            ParamType::U32 => ParamValue::U32(Serde::de(reader)?),
            ParamType::I32 => ParamValue::I32(Serde::de(reader)?),
            ParamType::U64 => ParamValue::U64(Serde::de(reader)?),
            ParamType::I64 => ParamValue::I64(Serde::de(reader)?),
            ParamType::F32 => ParamValue::F32(Serde::de(reader)?),
            ParamType::F64 => ParamValue::F64(Serde::de(reader)?),
            ParamType::String => ParamValue::String(Serde::de(reader)?),
            ParamType::Bytes => ParamValue::Bytes(Serde::de(reader)?),
            ParamType::Vec2 => ParamValue::Vec2(Serde::de(reader)?),
            ParamType::Vec3 => ParamValue::Vec3(Serde::de(reader)?),
            ParamType::Quat => ParamValue::Quat(Serde::de(reader)?),
            ParamType::Custom(_) => return Err(SerdeErr),
        };
        Ok(value)
    }
}

struct SerdeCodec<T> {
    name: &'static str,
    phantom: PhantomData<fn() -> T>,
}

impl<T: Serde + Default + DynParam> ParamCodec for SerdeCodec<T> {
    fn default_value(&self) -> ParamValue {
        ParamValue::Custom(CustomParam::new(self.name, T::default()))
    }

    fn accepts(&self, value: &ParamValue) -> bool {
        matches!(value, ParamValue::Custom(custom) if custom.is::<T>())
    }

    fn ser(&self, value: &ParamValue, writer: &mut dyn BitWrite) {
        if let ParamValue::Custom(custom) = value {
            if let Some(inner) = custom.downcast_ref::<T>() {
                inner.ser(writer);
            }
        }
    }

    fn de(&self, reader: &mut BitReader) -> Result<ParamValue, SerdeErr> {
        let inner = T::de(reader)?;
        Ok(ParamValue::Custom(CustomParam::new(self.name, inner)))
    }
}
