use super::{param_type::ParamType, param_value::ParamValue};

/// A Rust type usable as a typed function parameter
pub trait Param: Sized {
    fn param_type() -> ParamType;
    fn into_param(self) -> ParamValue;
    fn from_param(value: &ParamValue) -> Option<Self>;
}

macro_rules! impl_param {
    ($impl_type:ty, $variant:ident) => {
        impl Param for $impl_type {
            fn param_type() -> ParamType {
                ParamType::$variant
            }

            fn into_param(self) -> ParamValue {
                ParamValue::$variant(self)
            }

            fn from_param(value: &ParamValue) -> Option<Self> {
                match value {
                    ParamValue::$variant(inner) => Some(inner.clone()),
                    _ => None,
                }
            }
        }
    };
}

impl_param!(bool, Bool);
impl_param!(u8, U8);
impl_param!(i8, I8);
impl_param!(u16, U16);
impl_param!(i16, I16);
impl_param!(u32, U32);
impl_param!(i32, I32);
impl_param!(u64, U64);
impl_param!(i64, I64);
impl_param!(f32, F32);
impl_param!(f64, F64);
impl_param!(String, String);
impl_param!(Vec<u8>, Bytes);
impl_param!([f32; 2], Vec2);
impl_param!([f32; 3], Vec3);
impl_param!([f32; 4], Quat);

/// Builds a `Vec<ParamValue>` from typed values
///
/// ```
/// use volley_shared::{params, ParamValue};
///
/// let values = params![5i32, "hi".to_string()];
/// assert_eq!(values[0], ParamValue::I32(5));
/// ```
#[macro_export]
macro_rules! params {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::Param::into_param($value)),*]
    };
}

/// Implements `Param` for a type registered with `CodecTable::add_serde`
/// under the given name
///
/// ```
/// use volley_shared::{custom_param, Param, ParamType};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Team(u8);
///
/// custom_param!(Team, "Team");
///
/// assert_eq!(Team::param_type(), ParamType::Custom("Team"));
/// ```
#[macro_export]
macro_rules! custom_param {
    ($impl_type:ty, $name:expr) => {
        impl $crate::Param for $impl_type {
            fn param_type() -> $crate::ParamType {
                $crate::ParamType::Custom($name)
            }

            fn into_param(self) -> $crate::ParamValue {
                $crate::ParamValue::Custom($crate::CustomParam::new($name, self))
            }

            fn from_param(value: &$crate::ParamValue) -> Option<Self> {
                match value {
                    $crate::ParamValue::Custom(custom) if custom.type_name() == $name => {
                        custom.downcast_ref::<$impl_type>().cloned()
                    }
                    _ => None,
                }
            }
        }
    };
}
