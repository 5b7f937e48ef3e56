use std::collections::HashMap;

use log::info;

use super::{
    callback::FunctionCallback, codec::CodecTable, descriptor::FunctionDescriptor,
    error::RegistryError,
};
use crate::types::FunctionId;

/// Every function one behaviour exposes, keyed by id.
///
/// Both ends of a connection must build identical registries: ids are what
/// travels on the wire, so a function registered on only one side produces
/// `FunctionNotFound` on the other. Registration is closed with `lock()` once
/// setup is complete, after which the registry is read-only apart from the
/// per-descriptor parameter slots.
#[derive(Debug, Default)]
pub struct FunctionRegistry {
    functions: HashMap<FunctionId, FunctionDescriptor>,
    names: HashMap<String, FunctionId>,
    next_id: FunctionId,
    locked: bool,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a descriptor under its own id
    pub fn register(
        &mut self,
        codecs: &CodecTable,
        descriptor: FunctionDescriptor,
    ) -> Result<FunctionId, RegistryError> {
        self.try_check_lock()?;

        let function_id = descriptor.id();
        if self.functions.contains_key(&function_id) {
            return Err(RegistryError::DuplicateFunctionId { function_id });
        }
        for (slot, param_type) in descriptor.param_types().iter().enumerate() {
            if !codecs.supports(param_type) {
                return Err(RegistryError::UnsupportedType {
                    function_id,
                    slot,
                    param_type: *param_type,
                });
            }
        }

        self.functions.insert(function_id, descriptor);
        if function_id >= self.next_id {
            self.next_id = function_id.wrapping_add(1);
        }
        Ok(function_id)
    }

    /// Builds a descriptor from a typed closure, assigns it the next free id
    /// and records `name` for later lookup with `function_id()`
    pub fn register_named<Args, F: FunctionCallback<Args>>(
        &mut self,
        codecs: &CodecTable,
        name: &str,
        callback: F,
    ) -> Result<FunctionId, RegistryError> {
        self.try_check_lock()?;

        if self.names.contains_key(name) {
            return Err(RegistryError::DuplicateFunctionName {
                name: name.to_string(),
            });
        }

        let function_id = self.next_function_id();
        let descriptor = FunctionDescriptor::new(codecs, function_id, callback)?;
        self.register(codecs, descriptor)?;
        self.names.insert(name.to_string(), function_id);
        Ok(function_id)
    }

    /// The id `register_named` would assign next
    pub fn next_function_id(&self) -> FunctionId {
        let mut function_id = self.next_id;
        while self.functions.contains_key(&function_id) {
            function_id = function_id.wrapping_add(1);
        }
        function_id
    }

    pub fn function_id(&self, name: &str) -> Option<FunctionId> {
        self.names.get(name).copied()
    }

    pub fn get(&self, function_id: FunctionId) -> Option<&FunctionDescriptor> {
        self.functions.get(&function_id)
    }

    pub fn get_mut(&mut self, function_id: FunctionId) -> Option<&mut FunctionDescriptor> {
        self.functions.get_mut(&function_id)
    }

    pub fn try_get_mut(
        &mut self,
        function_id: FunctionId,
    ) -> Result<&mut FunctionDescriptor, RegistryError> {
        self.functions
            .get_mut(&function_id)
            .ok_or(RegistryError::FunctionNotFound { function_id })
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn try_lock(&mut self) -> Result<(), RegistryError> {
        self.try_check_lock()?;
        self.locked = true;
        info!("FunctionRegistry locked with {} functions", self.functions.len());
        Ok(())
    }

    pub fn lock(&mut self) {
        self.check_lock();
        self.locked = true;
        info!("FunctionRegistry locked with {} functions", self.functions.len());
    }

    /// Returns Err if the registry is locked
    pub fn try_check_lock(&self) -> Result<(), RegistryError> {
        if self.locked {
            Err(RegistryError::AlreadyLocked)
        } else {
            Ok(())
        }
    }

    /// Panics if the registry is locked
    pub fn check_lock(&self) {
        if self.locked {
            panic!("FunctionRegistry already locked!");
        }
    }
}
