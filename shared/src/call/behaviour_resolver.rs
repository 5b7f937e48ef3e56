use crate::{call::call_target::CallTarget, function::registry::FunctionRegistry, types::ObjectRef};

/// A behaviour found by its `ObjectRef`, split into its identity and its
/// functions so both can be borrowed at once
pub struct ResolvedBehaviour<'a> {
    pub target: &'a dyn CallTarget,
    pub functions: &'a mut FunctionRegistry,
}

/// Lookup from the owner reference of a received envelope to the local
/// behaviour it addresses
pub trait BehaviourResolver {
    fn resolve(&mut self, owner: &ObjectRef) -> Option<ResolvedBehaviour<'_>>;
}
