// Sat Aug 29 2026 - Alex

use crate::error::ProxyError;
use crate::registry::{Reflected, TypeDescriptor};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

/// Name-indexed store of type descriptors, grouped by library.
pub struct TypeRegistry {
    libraries: IndexMap<String, IndexMap<String, Arc<TypeDescriptor>>>,
    by_type_id: HashMap<TypeId, Arc<TypeDescriptor>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self {
            libraries: IndexMap::new(),
            by_type_id: HashMap::new(),
        }
    }

    /// Install a descriptor under its library and type name. Installing
    /// the same descriptor twice is a no-op.
    pub fn install(&mut self, desc: Arc<TypeDescriptor>) {
        log::debug!("installing {}", desc.qualified_name());
        self.by_type_id.insert(desc.type_id(), desc.clone());
        self.libraries
            .entry(desc.library().to_string())
            .or_default()
            .insert(desc.name().to_string(), desc);
    }

    /// Resolve by (library, class) pair. A missing library and a missing
    /// class inside a known library are distinct failures.
    pub fn resolve(&self, library: &str, class: &str) -> Result<Arc<TypeDescriptor>, ProxyError> {
        let types = self
            .libraries
            .get(library)
            .ok_or_else(|| ProxyError::LibraryNotFound(library.to_string()))?;
        types
            .get(class)
            .cloned()
            .ok_or_else(|| ProxyError::TypeNotFound {
                library: library.to_string(),
                class: class.to_string(),
            })
    }

    pub fn resolve_type_id(&self, id: TypeId) -> Option<Arc<TypeDescriptor>> {
        self.by_type_id.get(&id).cloned()
    }

    pub fn is_installed(&self, library: &str, class: &str) -> bool {
        self.libraries
            .get(library)
            .map_or(false, |types| types.contains_key(class))
    }

    pub fn libraries(&self) -> Vec<String> {
        self.libraries.keys().cloned().collect()
    }

    pub fn types_in(&self, library: &str) -> Result<Vec<String>, ProxyError> {
        self.libraries
            .get(library)
            .map(|types| types.keys().cloned().collect())
            .ok_or_else(|| ProxyError::LibraryNotFound(library.to_string()))
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: Lazy<RwLock<TypeRegistry>> = Lazy::new(|| RwLock::new(TypeRegistry::new()));

/// Install `T` into the process-global registry so it can be resolved by
/// (library, class) name.
pub fn install<T: Reflected>() {
    GLOBAL.write().install(T::type_descriptor());
}

pub fn resolve(library: &str, class: &str) -> Result<Arc<TypeDescriptor>, ProxyError> {
    GLOBAL.read().resolve(library, class)
}

pub fn is_installed(library: &str, class: &str) -> bool {
    GLOBAL.read().is_installed(library, class)
}

pub fn libraries() -> Vec<String> {
    GLOBAL.read().libraries()
}

pub fn types_in(library: &str) -> Result<Vec<String>, ProxyError> {
    GLOBAL.read().types_in(library)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use crate::registry::Property;

    #[derive(Debug, Clone, PartialEq)]
    struct Gadget {
        id: i64,
    }

    impl Reflected for Gadget {
        fn type_descriptor() -> Arc<TypeDescriptor> {
            static DESC: Lazy<Arc<TypeDescriptor>> = Lazy::new(|| {
                Arc::new(
                    TypeDescriptor::builder::<Gadget>("registry_tests", "Gadget")
                        .property(Property::readonly::<Gadget, _>("id", |g| Value::from(g.id)))
                        .build(),
                )
            });
            DESC.clone()
        }
    }

    #[test]
    fn test_install_and_resolve() {
        let _ = env_logger::builder().is_test(true).try_init();
        install::<Gadget>();
        let desc = resolve("registry_tests", "Gadget").unwrap();
        assert_eq!(desc.qualified_name(), "registry_tests::Gadget");
        assert!(is_installed("registry_tests", "Gadget"));
    }

    #[test]
    fn test_lookup_errors_are_distinguishable() {
        install::<Gadget>();

        let err = resolve("no_such_library", "Gadget").unwrap_err();
        assert_eq!(err, ProxyError::LibraryNotFound("no_such_library".to_string()));

        let err = resolve("registry_tests", "NoSuchClass").unwrap_err();
        assert_eq!(
            err,
            ProxyError::TypeNotFound {
                library: "registry_tests".to_string(),
                class: "NoSuchClass".to_string(),
            }
        );
    }

    #[test]
    fn test_double_install_is_idempotent() {
        install::<Gadget>();
        install::<Gadget>();
        let types = types_in("registry_tests").unwrap();
        assert_eq!(types.iter().filter(|t| *t == "Gadget").count(), 1);
    }

    #[test]
    fn test_resolve_by_type_id() {
        let mut registry = TypeRegistry::new();
        registry.install(Gadget::type_descriptor());
        let desc = registry
            .resolve_type_id(std::any::TypeId::of::<Gadget>())
            .unwrap();
        assert_eq!(desc.name(), "Gadget");
    }
}
