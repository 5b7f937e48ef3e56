use std::fmt;

use super::{
    callback::{erase_dynamic, ErasedCallback, FunctionCallback},
    codec::CodecTable,
    error::{CodecError, RegistryError},
    param_type::ParamType,
    param_value::ParamValue,
};
use crate::types::FunctionId;

/// Schema of one remotely invokable function: its id, its ordered parameter
/// types, and the callback they are handed to.
///
/// Each descriptor also owns one value slot per parameter. The slots are
/// scratch space shared by every call, so a `set_parameters` / `fire` cycle
/// must finish before the next one begins. `&mut self` enforces this within a
/// thread; callers sharing a descriptor across threads must serialize access
/// themselves.
pub struct FunctionDescriptor {
    id: FunctionId,
    param_types: Vec<ParamType>,
    values: Vec<ParamValue>,
    defaults: Vec<ParamValue>,
    callback: ErasedCallback,
}

impl FunctionDescriptor {
    /// Creates a descriptor from a typed closure, deriving the parameter list
    /// from its signature
    ///
    /// ```
    /// use volley_shared::{CodecTable, FunctionDescriptor, ParamType};
    ///
    /// let codecs = CodecTable::default();
    /// let descriptor = FunctionDescriptor::new(&codecs, 3, |damage: i32, source: String| {
    ///     println!("{} took {} damage", source, damage);
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(descriptor.param_types(), &[ParamType::I32, ParamType::String]);
    /// ```
    pub fn new<Args, F: FunctionCallback<Args>>(
        codecs: &CodecTable,
        id: FunctionId,
        callback: F,
    ) -> Result<Self, RegistryError> {
        Self::from_erased(codecs, id, F::param_types(), callback.into_erased())
    }

    /// Creates a descriptor for a parameter list only known at runtime
    pub fn dynamic<F>(
        codecs: &CodecTable,
        id: FunctionId,
        param_types: Vec<ParamType>,
        callback: F,
    ) -> Result<Self, RegistryError>
    where
        F: FnMut(&[ParamValue]) + Send + Sync + 'static,
    {
        Self::from_erased(codecs, id, param_types, erase_dynamic(callback))
    }

    pub(crate) fn from_erased(
        codecs: &CodecTable,
        id: FunctionId,
        param_types: Vec<ParamType>,
        callback: ErasedCallback,
    ) -> Result<Self, RegistryError> {
        let mut defaults = Vec::with_capacity(param_types.len());
        for (slot, param_type) in param_types.iter().enumerate() {
            let default = codecs.default_value(param_type).map_err(|_| {
                RegistryError::UnsupportedType {
                    function_id: id,
                    slot,
                    param_type: *param_type,
                }
            })?;
            defaults.push(default);
        }

        Ok(Self {
            id,
            param_types,
            values: defaults.clone(),
            defaults,
            callback,
        })
    }

    pub fn id(&self) -> FunctionId {
        self.id
    }

    pub fn arity(&self) -> usize {
        self.param_types.len()
    }

    pub fn param_types(&self) -> &[ParamType] {
        &self.param_types
    }

    /// Current slot values, in declared order
    pub fn values(&self) -> &[ParamValue] {
        &self.values
    }

    /// Copies `values` into the slots in order. Slots past the end of a short
    /// vector are reset to their type's default rather than keeping whatever
    /// the previous call left there. Nothing is changed if any value is
    /// rejected.
    pub fn set_parameters(&mut self, values: Vec<ParamValue>) -> Result<(), CodecError> {
        if values.len() > self.param_types.len() {
            return Err(CodecError::ArityMismatch {
                expected: self.param_types.len(),
                found: values.len(),
            });
        }

        for (slot, (value, param_type)) in values.iter().zip(&self.param_types).enumerate() {
            if value.param_type() != *param_type {
                return Err(CodecError::TypeMismatch {
                    slot,
                    expected: *param_type,
                    found: value.param_type(),
                });
            }
        }

        let supplied = values.len();
        for (slot, value) in values.into_iter().enumerate() {
            self.values[slot] = value;
        }
        for slot in supplied..self.values.len() {
            self.values[slot] = self.defaults[slot].clone();
        }

        Ok(())
    }

    /// Slots filled straight from a decoder, which has already read them
    /// according to `param_types`
    pub(crate) fn set_decoded(&mut self, values: Vec<ParamValue>) {
        debug_assert_eq!(values.len(), self.values.len());
        self.values = values;
    }

    /// Runs the callback with the current slot values
    pub fn fire(&mut self) -> Result<(), CodecError> {
        (self.callback)(&self.values)
    }
}

impl fmt::Debug for FunctionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionDescriptor")
            .field("id", &self.id)
            .field("param_types", &self.param_types)
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}
