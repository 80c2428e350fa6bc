#[allow(unused_imports)]
use crate::core::prelude::*;

use std::any::Any;
use std::collections::HashMap;

/// Opaque handle to an object owned by the native engine.
///
/// The scripting layer never dereferences a handle; it only passes it back
/// across the boundary (e.g. to a [`ComponentFactory`]).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NativeHandle(u64);

impl NativeHandle {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        NativeHandle(raw)
    }

    #[must_use]
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

/// Builds a typed component wrapper around a native item handle.
pub type ComponentFactory = fn(NativeHandle) -> Box<dyn Any>;

/// Explicit type-name → constructor registry for reconstructing typed
/// components from the native boundary.
///
/// The native side reports each component as a type-name string plus an
/// opaque item handle; [`resolve`](ComponentRegistry::resolve) looks the
/// name up here and invokes the registered factory. Every resolvable type
/// must be registered up front (normally at startup) — there is no
/// reflection fallback, and an unknown name is a descriptive error rather
/// than a crash.
#[derive(Default)]
pub struct ComponentRegistry {
    factories: HashMap<String, ComponentFactory>,
}

impl ComponentRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory for `type_name`. Registering the same name twice
    /// replaces the previous factory.
    pub fn register(&mut self, type_name: impl Into<String>, factory: ComponentFactory) {
        let type_name = type_name.into();
        if self
            .factories
            .insert(type_name.clone(), factory)
            .is_some()
        {
            warn!("ComponentRegistry: replacing existing factory for {type_name}");
        }
    }

    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.factories.contains_key(type_name)
    }

    /// Reconstructs the component named by `type_name` around `item`.
    ///
    /// Fails with an error naming the offending type if no factory is
    /// registered for it.
    pub fn resolve(&self, type_name: &str, item: NativeHandle) -> Result<Box<dyn Any>> {
        let factory = self
            .factories
            .get(type_name)
            .with_context(|| format!("no component factory registered for type {type_name}"))?;
        Ok(factory(item))
    }
}
