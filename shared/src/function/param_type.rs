use std::fmt;

/// Semantic type of one function parameter slot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamType {
    Bool,
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
    String,
    Bytes,
    Vec2,
    Vec3,
    Quat,
    /// A type registered into a `CodecTable` under this name
    Custom(&'static str),
}

impl ParamType {
    pub const BUILTIN: [ParamType; 16] = [
        ParamType::Bool,
        ParamType::U8,
        ParamType::I8,
        ParamType::U16,
        ParamType::I16,
        ParamType::U32,
        ParamType::I32,
        ParamType::U64,
        ParamType::I64,
        ParamType::F32,
        ParamType::F64,
        ParamType::String,
        ParamType::Bytes,
        ParamType::Vec2,
        ParamType::Vec3,
        ParamType::Quat,
    ];

    pub fn is_custom(&self) -> bool {
        matches!(self, ParamType::Custom(_))
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Custom(name) => write!(f, "{}", name),
            builtin => write!(f, "{:?}", builtin),
        }
    }
}
