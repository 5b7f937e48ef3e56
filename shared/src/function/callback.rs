use super::{error::CodecError, param::Param, param_type::ParamType, param_value::ParamValue};

/// A callback with its typed unpacking already baked in
pub type ErasedCallback = Box<dyn FnMut(&[ParamValue]) -> Result<(), CodecError> + Send + Sync>;

/// Implemented for closures of up to ten `Param` arguments. The adapter is
/// built once, when the function is registered.
pub trait FunctionCallback<Args>: Send + Sync + 'static {
    fn param_types() -> Vec<ParamType>;
    fn into_erased(self) -> ErasedCallback;
}

fn unpack<A: Param>(values: &[ParamValue], slot: usize) -> Result<A, CodecError> {
    let Some(value) = values.get(slot) else {
        return Err(CodecError::ArityMismatch {
            expected: slot + 1,
            found: values.len(),
        });
    };
    A::from_param(value).ok_or_else(|| CodecError::TypeMismatch {
        slot,
        expected: A::param_type(),
        found: value.param_type(),
    })
}

macro_rules! impl_function_callback {
    ($count:expr; $($arg:ident $slot:tt),*) => {
        impl<Func, $($arg: Param + 'static),*> FunctionCallback<($($arg,)*)> for Func
        where
            Func: FnMut($($arg),*) + Send + Sync + 'static,
        {
            fn param_types() -> Vec<ParamType> {
                vec![$($arg::param_type()),*]
            }

            #[allow(unused_variables)]
            fn into_erased(mut self) -> ErasedCallback {
                Box::new(move |values: &[ParamValue]| {
                    if values.len() != $count {
                        return Err(CodecError::ArityMismatch {
                            expected: $count,
                            found: values.len(),
                        });
                    }
                    (self)($(unpack::<$arg>(values, $slot)?),*);
                    Ok(())
                })
            }
        }
    };
}

impl_function_callback!(0;);
impl_function_callback!(1; A0 0);
impl_function_callback!(2; A0 0, A1 1);
impl_function_callback!(3; A0 0, A1 1, A2 2);
impl_function_callback!(4; A0 0, A1 1, A2 2, A3 3);
impl_function_callback!(5; A0 0, A1 1, A2 2, A3 3, A4 4);
impl_function_callback!(6; A0 0, A1 1, A2 2, A3 3, A4 4, A5 5);
impl_function_callback!(7; A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6);
impl_function_callback!(8; A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6, A7 7);
impl_function_callback!(9; A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6, A7 7, A8 8);
impl_function_callback!(10; A0 0, A1 1, A2 2, A3 3, A4 4, A5 5, A6 6, A7 7, A8 8, A9 9);

/// Wraps an untyped callback, for functions whose parameter list is only known
/// at runtime. Arity is not capped.
pub(crate) fn erase_dynamic<F>(mut callback: F) -> ErasedCallback
where
    F: FnMut(&[ParamValue]) + Send + Sync + 'static,
{
    Box::new(move |values: &[ParamValue]| {
        callback(values);
        Ok(())
    })
}
