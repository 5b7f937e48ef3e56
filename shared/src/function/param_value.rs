use std::{any::Any, fmt};

use super::param_type::ParamType;

/// Type-erased value held by a parameter slot
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Bool(bool),
    U8(u8),
    I8(i8),
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    U64(u64),
    I64(i64),
    F32(f32),
    F64(f64),
    String(String),
    Bytes(Vec<u8>),
    Vec2([f32; 2]),
    Vec3([f32; 3]),
    Quat([f32; 4]),
    Custom(CustomParam),
}

impl ParamValue {
    /// The runtime type of this value
    pub fn param_type(&self) -> ParamType {
        match self {
            ParamValue::Bool(_) => ParamType::Bool,
            ParamValue::U8(_) => ParamType::U8,
            ParamValue::I8(_) => ParamType::I8,
            ParamValue::U16(_) => ParamType::U16,
            ParamValue::I16(_) => ParamType::I16,
            ParamValue::U32(_) => ParamType::U32,
            ParamValue::I32(_) => ParamType::I32,
            ParamValue::U64(_) => ParamType::U64,
            ParamValue::I64(_) => ParamType::I64,
            ParamValue::F32(_) => ParamType::F32,
            ParamValue::F64(_) => ParamType::F64,
            ParamValue::String(_) => ParamType::String,
            ParamValue::Bytes(_) => ParamType::Bytes,
            ParamValue::Vec2(_) => ParamType::Vec2,
            ParamValue::Vec3(_) => ParamType::Vec3,
            ParamValue::Quat(_) => ParamType::Quat,
            ParamValue::Custom(custom) => ParamType::Custom(custom.type_name()),
        }
    }

    /// Zero value of a builtin type. Custom types get theirs from their codec.
    pub fn builtin_default(param_type: &ParamType) -> Option<Self> {
        let value = match param_type {
            ParamType::Bool => ParamValue::Bool(false),
            ParamType::U8 => ParamValue::U8(0),
            ParamType::I8 => ParamValue::I8(0),
            ParamType::U16 => ParamValue::U16(0),
            ParamType::I16 => ParamValue::I16(0),
            ParamType::U32 => ParamValue::U32(0),
            ParamType::I32 => ParamValue::I32(0),
            ParamType::U64 => ParamValue::U64(0),
            ParamType::I64 => ParamValue::I64(0),
            ParamType::F32 => ParamValue::F32(0.0),
            ParamType::F64 => ParamValue::F64(0.0),
            ParamType::String => ParamValue::String(String::new()),
            ParamType::Bytes => ParamValue::Bytes(Vec::new()),
            ParamType::Vec2 => ParamValue::Vec2([0.0; 2]),
            ParamType::Vec3 => ParamValue::Vec3([0.0; 3]),
            ParamType::Quat => ParamValue::Quat([0.0, 0.0, 0.0, 1.0]),
            ParamType::Custom(_) => return None,
        };
        Some(value)
    }
}

/// Object-safe view of a custom parameter value
pub trait DynParam: Any + fmt::Debug + Send + Sync {
    fn clone_box(&self) -> Box<dyn DynParam>;
    fn dyn_eq(&self, other: &dyn DynParam) -> bool;
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + fmt::Debug + Clone + PartialEq + Send + Sync> DynParam for T {
    fn clone_box(&self) -> Box<dyn DynParam> {
        Box::new(self.clone())
    }

    fn dyn_eq(&self, other: &dyn DynParam) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| other == self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A value of a type registered into a `CodecTable` at runtime
pub struct CustomParam {
    type_name: &'static str,
    value: Box<dyn DynParam>,
}

impl CustomParam {
    pub fn new<T: DynParam>(type_name: &'static str, value: T) -> Self {
        Self {
            type_name,
            value: Box::new(value),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.as_any().downcast_ref::<T>()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.value.as_any().is::<T>()
    }
}

impl Clone for CustomParam {
    fn clone(&self) -> Self {
        Self {
            type_name: self.type_name,
            value: self.value.clone_box(),
        }
    }
}

impl PartialEq for CustomParam {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name && self.value.dyn_eq(other.value.as_ref())
    }
}

impl fmt::Debug for CustomParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.type_name, self.value)
    }
}
