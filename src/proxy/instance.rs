// Sat Aug 29 2026 - Alex

use crate::error::ProxyError;
use crate::proxy::TypeProxy;
use crate::registry::{self, Reflect, Reflected, TypeDescriptor};
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// Instance-side proxy: a resolved descriptor plus the wrapped object.
/// The descriptor and the wrapped instance never change after
/// construction; reads go through `&self`, mutation through `&mut self`.
pub struct InstanceProxy {
    desc: Arc<TypeDescriptor>,
    instance: Box<dyn Reflect>,
}

impl InstanceProxy {
    /// Wrap an existing object; the descriptor is inferred from it.
    pub fn wrap(instance: impl Reflect) -> Self {
        let instance: Box<dyn Reflect> = Box::new(instance);
        Self {
            desc: instance.descriptor(),
            instance,
        }
    }

    pub fn wrap_boxed(instance: Box<dyn Reflect>) -> Self {
        Self {
            desc: instance.descriptor(),
            instance,
        }
    }

    /// Construct a new instance by generic parameter, routing `args`
    /// through constructor resolution (exact parameter-type match first,
    /// unique-arity fallback, loud failure otherwise).
    pub fn new<T: Reflected>(args: &[Value]) -> Result<Self, ProxyError> {
        let desc = T::type_descriptor();
        let instance = desc.construct(args)?;
        Ok(Self { desc, instance })
    }

    /// Resolve by (library, class) through the global registry, then
    /// construct.
    pub fn from_named(library: &str, class: &str, args: &[Value]) -> Result<Self, ProxyError> {
        let desc = registry::resolve(library, class)?;
        let instance = desc.construct(args)?;
        Ok(Self { desc, instance })
    }

    /// Construct from an already-resolved type proxy.
    pub fn from_type_proxy(proxy: &TypeProxy, args: &[Value]) -> Result<Self, ProxyError> {
        let desc = proxy.descriptor().clone();
        let instance = desc.construct(args)?;
        Ok(Self { desc, instance })
    }

    pub fn descriptor(&self) -> &Arc<TypeDescriptor> {
        &self.desc
    }

    pub fn type_name(&self) -> &str {
        self.desc.name()
    }

    pub fn qualified_name(&self) -> String {
        self.desc.qualified_name()
    }

    /// Borrow the wrapped instance as its concrete type.
    pub fn instance<T: 'static>(&self) -> Option<&T> {
        self.instance.as_any().downcast_ref::<T>()
    }

    pub fn instance_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.instance.as_any_mut().downcast_mut::<T>()
    }

    /// Unwrap back into the concrete type, consuming the proxy.
    pub fn into_instance<T: 'static>(self) -> Result<T, ProxyError> {
        let qualified = self.desc.qualified_name();
        self.instance
            .into_any()
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| ProxyError::mismatch(std::any::type_name::<T>(), qualified))
    }

    /// Invoke an instance method by name.
    pub fn invoke(&mut self, name: &str, args: &[Value]) -> Result<Value, ProxyError> {
        self.desc.invoke(self.instance.as_any_mut(), name, args)
    }

    /// Read an instance property by name.
    pub fn get_value(&self, name: &str) -> Result<Value, ProxyError> {
        self.desc.get(self.instance.as_any(), name, &[])
    }

    pub fn get_value_at(&self, name: &str, index: &[Value]) -> Result<Value, ProxyError> {
        self.desc.get(self.instance.as_any(), name, index)
    }

    /// Write an instance property by name.
    pub fn set_value(&mut self, name: &str, value: Value) -> Result<(), ProxyError> {
        self.desc.set(self.instance.as_any_mut(), name, value, &[])
    }

    pub fn set_value_at(
        &mut self,
        name: &str,
        value: Value,
        index: &[Value],
    ) -> Result<(), ProxyError> {
        self.desc.set(self.instance.as_any_mut(), name, value, index)
    }
}

impl fmt::Debug for InstanceProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceProxy")
            .field("type", &self.desc.qualified_name())
            .finish()
    }
}
