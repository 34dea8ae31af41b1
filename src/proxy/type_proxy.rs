// Sat Aug 29 2026 - Alex

use crate::error::ProxyError;
use crate::registry::{self, Reflected, TypeDescriptor};
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// Static-side proxy: resolves a type and reaches its static members by
/// string name. Immutable after construction.
#[derive(Clone)]
pub struct TypeProxy {
    desc: Arc<TypeDescriptor>,
}

impl TypeProxy {
    /// Resolve by generic parameter.
    pub fn of<T: Reflected>() -> Self {
        Self {
            desc: T::type_descriptor(),
        }
    }

    /// Resolve by direct descriptor handle.
    pub fn from_descriptor(desc: Arc<TypeDescriptor>) -> Self {
        Self { desc }
    }

    /// Resolve by (library, class) pair through the global registry.
    /// A missing library and a missing class fail distinguishably.
    pub fn for_named(library: &str, class: &str) -> Result<Self, ProxyError> {
        Ok(Self {
            desc: registry::resolve(library, class)?,
        })
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

    /// Invoke a static method by name.
    pub fn invoke(&self, name: &str, args: &[Value]) -> Result<Value, ProxyError> {
        self.desc.invoke_static(name, args)
    }

    /// Read a static property by name.
    pub fn get_value(&self, name: &str) -> Result<Value, ProxyError> {
        self.desc.get_static(name, &[])
    }

    pub fn get_value_at(&self, name: &str, index: &[Value]) -> Result<Value, ProxyError> {
        self.desc.get_static(name, index)
    }

    /// Write a static property by name.
    pub fn set_value(&self, name: &str, value: Value) -> Result<(), ProxyError> {
        self.desc.set_static(name, value, &[])
    }

    pub fn set_value_at(&self, name: &str, value: Value, index: &[Value]) -> Result<(), ProxyError> {
        self.desc.set_static(name, value, index)
    }
}

impl fmt::Debug for TypeProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeProxy")
            .field("type", &self.desc.qualified_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{StaticProperty, TypeDescriptorBuilder};
    use once_cell::sync::Lazy;
    use std::sync::atomic::{AtomicI64, Ordering};

    #[derive(Debug, Clone, PartialEq)]
    struct Counter;

    static COUNT: AtomicI64 = AtomicI64::new(0);

    impl Reflected for Counter {
        fn type_descriptor() -> Arc<TypeDescriptor> {
            static DESC: Lazy<Arc<TypeDescriptor>> = Lazy::new(|| {
                Arc::new(
                    TypeDescriptorBuilder::new::<Counter>("type_proxy_tests", "Counter")
                        .static_method("add", |args| {
                            let total: i64 =
                                args.iter().filter_map(|v| v.as_int()).sum();
                            Ok(Value::from(total))
                        })
                        .static_property(StaticProperty::read_write(
                            "count",
                            || Value::from(COUNT.load(Ordering::SeqCst)),
                            |v| {
                                COUNT.store(i64::try_from(v)?, Ordering::SeqCst);
                                Ok(())
                            },
                        ))
                        .build(),
                )
            });
            DESC.clone()
        }
    }

    #[test]
    fn test_invoke_static_method() {
        let proxy = TypeProxy::of::<Counter>();
        let result = proxy.invoke("add", &[Value::Int(2), Value::Int(3)]).unwrap();
        assert_eq!(result, Value::Int(5));
    }

    #[test]
    fn test_static_property_roundtrip() {
        let proxy = TypeProxy::of::<Counter>();
        proxy.set_value("count", Value::Int(7)).unwrap();
        assert_eq!(proxy.get_value("count").unwrap(), Value::Int(7));
    }

    #[test]
    fn test_missing_static_member() {
        let proxy = TypeProxy::of::<Counter>();
        let err = proxy.invoke("no_such_method", &[]).unwrap_err();
        assert_eq!(
            err,
            ProxyError::MemberNotFound {
                type_name: "type_proxy_tests::Counter".to_string(),
                member: "no_such_method".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        let proxy = TypeProxy::of::<Counter>();
        assert_eq!(proxy.invoke("", &[]).unwrap_err(), ProxyError::EmptyMemberName);
        assert_eq!(proxy.get_value("").unwrap_err(), ProxyError::EmptyMemberName);
    }

    #[test]
    fn test_for_named_lookup_errors() {
        registry::install::<Counter>();

        assert!(TypeProxy::for_named("type_proxy_tests", "Counter").is_ok());
        assert_eq!(
            TypeProxy::for_named("NoSuchLibrary", "Counter").unwrap_err(),
            ProxyError::LibraryNotFound("NoSuchLibrary".to_string())
        );
        assert_eq!(
            TypeProxy::for_named("type_proxy_tests", "NoSuchClass").unwrap_err(),
            ProxyError::TypeNotFound {
                library: "type_proxy_tests".to_string(),
                class: "NoSuchClass".to_string(),
            }
        );
    }

    #[test]
    fn test_debug_names_the_resolved_type() {
        let proxy = TypeProxy::of::<Counter>();
        assert_eq!(
            format!("{:?}", proxy),
            "TypeProxy { type: \"type_proxy_tests::Counter\" }"
        );
    }

    #[test]
    fn test_qualified_name() {
        let proxy = TypeProxy::of::<Counter>();
        assert_eq!(proxy.qualified_name(), "type_proxy_tests::Counter");
        assert_eq!(proxy.type_name(), "Counter");
    }
}
