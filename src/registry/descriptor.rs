// Thu Aug 27 2026 - Alex

use crate::error::ProxyError;
use crate::registry::Reflect;
use crate::value::Value;
use indexmap::IndexMap;
use std::any::{Any, TypeId};
use std::fmt;

pub type GetterFn = Box<dyn Fn(&dyn Any, &[Value]) -> Result<Value, ProxyError> + Send + Sync>;
pub type SetterFn = Box<dyn Fn(&mut dyn Any, Value, &[Value]) -> Result<(), ProxyError> + Send + Sync>;
pub type MethodFn = Box<dyn Fn(&mut dyn Any, &[Value]) -> Result<Value, ProxyError> + Send + Sync>;
pub type StaticMethodFn = Box<dyn Fn(&[Value]) -> Result<Value, ProxyError> + Send + Sync>;
pub type StaticGetterFn = Box<dyn Fn(&[Value]) -> Result<Value, ProxyError> + Send + Sync>;
pub type StaticSetterFn = Box<dyn Fn(Value, &[Value]) -> Result<(), ProxyError> + Send + Sync>;
pub type ConstructorFn = Box<dyn Fn(&[Value]) -> Result<Box<dyn Reflect>, ProxyError> + Send + Sync>;

fn reject_index(index: &[Value]) -> Result<(), ProxyError> {
    if index.is_empty() {
        Ok(())
    } else {
        Err(ProxyError::mismatch(
            "no index arguments",
            format!("{} index argument(s)", index.len()),
        ))
    }
}

fn downcast_ref<T: Any>(obj: &dyn Any) -> Result<&T, ProxyError> {
    obj.downcast_ref::<T>()
        .ok_or_else(|| ProxyError::mismatch(std::any::type_name::<T>(), "foreign instance"))
}

fn downcast_mut<T: Any>(obj: &mut dyn Any) -> Result<&mut T, ProxyError> {
    obj.downcast_mut::<T>()
        .ok_or_else(|| ProxyError::mismatch(std::any::type_name::<T>(), "foreign instance"))
}

/// A named instance property: a typed getter and/or setter closed over
/// the concrete type.
pub struct Property {
    name: String,
    getter: Option<GetterFn>,
    setter: Option<SetterFn>,
}

impl Property {
    pub fn readonly<T, G>(name: &str, get: G) -> Self
    where
        T: Any,
        G: Fn(&T) -> Value + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            getter: Some(Box::new(move |obj, index| {
                reject_index(index)?;
                Ok(get(downcast_ref::<T>(obj)?))
            })),
            setter: None,
        }
    }

    pub fn read_write<T, G, S>(name: &str, get: G, set: S) -> Self
    where
        T: Any,
        G: Fn(&T) -> Value + Send + Sync + 'static,
        S: Fn(&mut T, Value) -> Result<(), ProxyError> + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            getter: Some(Box::new(move |obj, index| {
                reject_index(index)?;
                Ok(get(downcast_ref::<T>(obj)?))
            })),
            setter: Some(Box::new(move |obj, value, index| {
                reject_index(index)?;
                set(downcast_mut::<T>(obj)?, value)
            })),
        }
    }

    /// Indexed variant: the accessors receive the index arguments as-is.
    pub fn read_indexed<T, G>(name: &str, get: G) -> Self
    where
        T: Any,
        G: Fn(&T, &[Value]) -> Result<Value, ProxyError> + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            getter: Some(Box::new(move |obj, index| get(downcast_ref::<T>(obj)?, index))),
            setter: None,
        }
    }

    pub fn read_write_indexed<T, G, S>(name: &str, get: G, set: S) -> Self
    where
        T: Any,
        G: Fn(&T, &[Value]) -> Result<Value, ProxyError> + Send + Sync + 'static,
        S: Fn(&mut T, Value, &[Value]) -> Result<(), ProxyError> + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            getter: Some(Box::new(move |obj, index| get(downcast_ref::<T>(obj)?, index))),
            setter: Some(Box::new(move |obj, value, index| {
                set(downcast_mut::<T>(obj)?, value, index)
            })),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_readable(&self) -> bool {
        self.getter.is_some()
    }

    pub fn is_writable(&self) -> bool {
        self.setter.is_some()
    }
}

/// A named static property backed by registered closures.
pub struct StaticProperty {
    name: String,
    getter: Option<StaticGetterFn>,
    setter: Option<StaticSetterFn>,
}

impl StaticProperty {
    pub fn readonly<G>(name: &str, get: G) -> Self
    where
        G: Fn() -> Value + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            getter: Some(Box::new(move |index| {
                reject_index(index)?;
                Ok(get())
            })),
            setter: None,
        }
    }

    pub fn read_write<G, S>(name: &str, get: G, set: S) -> Self
    where
        G: Fn() -> Value + Send + Sync + 'static,
        S: Fn(Value) -> Result<(), ProxyError> + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            getter: Some(Box::new(move |index| {
                reject_index(index)?;
                Ok(get())
            })),
            setter: Some(Box::new(move |value, index| {
                reject_index(index)?;
                set(value)
            })),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

struct Method {
    handler: MethodFn,
}

struct StaticMethod {
    handler: StaticMethodFn,
}

/// One registered constructor: a parameter type tag per position plus the
/// factory closure.
pub struct Constructor {
    params: Vec<&'static str>,
    handler: ConstructorFn,
}

impl Constructor {
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    fn matches_exact(&self, args: &[Value]) -> bool {
        self.params.len() == args.len()
            && self
                .params
                .iter()
                .zip(args)
                .all(|(param, arg)| arg.is_null() || *param == "any" || *param == arg.type_name())
    }
}

/// Capability descriptor for one registered type: every member a proxy
/// may reach by string name.
pub struct TypeDescriptor {
    library: String,
    name: String,
    type_id: TypeId,
    properties: IndexMap<String, Property>,
    methods: IndexMap<String, Method>,
    static_methods: IndexMap<String, StaticMethod>,
    static_properties: IndexMap<String, StaticProperty>,
    constructors: Vec<Constructor>,
}

impl TypeDescriptor {
    pub fn builder<T: Any>(library: &str, name: &str) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder::new::<T>(library, name)
    }

    pub fn library(&self) -> &str {
        &self.library
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.library, self.name)
    }

    pub fn property_names(&self) -> Vec<String> {
        self.properties.keys().cloned().collect()
    }

    pub fn method_names(&self) -> Vec<String> {
        self.methods.keys().cloned().collect()
    }

    pub fn static_property_names(&self) -> Vec<String> {
        self.static_properties.keys().cloned().collect()
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn constructor_count(&self) -> usize {
        self.constructors.len()
    }

    fn member_not_found(&self, member: &str) -> ProxyError {
        ProxyError::MemberNotFound {
            type_name: self.qualified_name(),
            member: member.to_string(),
        }
    }

    fn checked_name<'a>(&self, name: &'a str) -> Result<&'a str, ProxyError> {
        if name.trim().is_empty() {
            Err(ProxyError::EmptyMemberName)
        } else {
            Ok(name)
        }
    }

    pub fn property(&self, name: &str) -> Result<&Property, ProxyError> {
        let name = self.checked_name(name)?;
        self.properties
            .get(name)
            .ok_or_else(|| self.member_not_found(name))
    }

    pub fn static_property(&self, name: &str) -> Result<&StaticProperty, ProxyError> {
        let name = self.checked_name(name)?;
        self.static_properties
            .get(name)
            .ok_or_else(|| self.member_not_found(name))
    }

    /// Read an instance property off `obj` by name.
    pub fn get(&self, obj: &dyn Any, name: &str, index: &[Value]) -> Result<Value, ProxyError> {
        let prop = self.property(name)?;
        log::trace!("get {}.{}", self.qualified_name(), name);
        let getter = prop.getter.as_ref().ok_or_else(|| ProxyError::NotReadable {
            type_name: self.qualified_name(),
            property: name.to_string(),
        })?;
        getter(obj, index)
    }

    /// Write an instance property on `obj` by name.
    pub fn set(
        &self,
        obj: &mut dyn Any,
        name: &str,
        value: Value,
        index: &[Value],
    ) -> Result<(), ProxyError> {
        let prop = self.property(name)?;
        log::trace!("set {}.{}", self.qualified_name(), name);
        let setter = prop.setter.as_ref().ok_or_else(|| ProxyError::NotWritable {
            type_name: self.qualified_name(),
            property: name.to_string(),
        })?;
        setter(obj, value, index)
    }

    /// Invoke an instance method on `obj` by name.
    pub fn invoke(
        &self,
        obj: &mut dyn Any,
        name: &str,
        args: &[Value],
    ) -> Result<Value, ProxyError> {
        let name = self.checked_name(name)?;
        let method = self
            .methods
            .get(name)
            .ok_or_else(|| self.member_not_found(name))?;
        log::trace!("invoke {}.{}({} args)", self.qualified_name(), name, args.len());
        (method.handler)(obj, args)
    }

    pub fn invoke_static(&self, name: &str, args: &[Value]) -> Result<Value, ProxyError> {
        let name = self.checked_name(name)?;
        let method = self
            .static_methods
            .get(name)
            .ok_or_else(|| self.member_not_found(name))?;
        log::trace!("invoke static {}::{}", self.qualified_name(), name);
        (method.handler)(args)
    }

    pub fn get_static(&self, name: &str, index: &[Value]) -> Result<Value, ProxyError> {
        let prop = self.static_property(name)?;
        let getter = prop.getter.as_ref().ok_or_else(|| ProxyError::NotReadable {
            type_name: self.qualified_name(),
            property: name.to_string(),
        })?;
        getter(index)
    }

    pub fn set_static(&self, name: &str, value: Value, index: &[Value]) -> Result<(), ProxyError> {
        let prop = self.static_property(name)?;
        let setter = prop.setter.as_ref().ok_or_else(|| ProxyError::NotWritable {
            type_name: self.qualified_name(),
            property: name.to_string(),
        })?;
        setter(value, index)
    }

    /// Pick the constructor for `args`: exact parameter-type match first,
    /// then a unique-arity fallback. Several same-arity candidates with no
    /// exact match is an error, never an arbitrary pick.
    pub fn resolve_constructor(&self, args: &[Value]) -> Result<&Constructor, ProxyError> {
        if let Some(ctor) = self.constructors.iter().find(|c| c.matches_exact(args)) {
            return Ok(ctor);
        }

        let candidates: Vec<&Constructor> = self
            .constructors
            .iter()
            .filter(|c| c.arity() == args.len())
            .collect();

        match candidates.len() {
            0 => Err(ProxyError::NoMatchingConstructor {
                type_name: self.qualified_name(),
                arity: args.len(),
            }),
            1 => Ok(candidates[0]),
            n => Err(ProxyError::AmbiguousConstructor {
                type_name: self.qualified_name(),
                arity: args.len(),
                candidates: n,
            }),
        }
    }

    pub fn construct(&self, args: &[Value]) -> Result<Box<dyn Reflect>, ProxyError> {
        let ctor = self.resolve_constructor(args)?;
        log::debug!(
            "constructing {} with {} argument(s)",
            self.qualified_name(),
            args.len()
        );
        (ctor.handler)(args)
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("qualified_name", &self.qualified_name())
            .field("properties", &self.properties.keys().collect::<Vec<_>>())
            .field("methods", &self.methods.keys().collect::<Vec<_>>())
            .field("constructors", &self.constructors.len())
            .finish()
    }
}

/// Builder assembling a [`TypeDescriptor`] member by member.
pub struct TypeDescriptorBuilder {
    library: String,
    name: String,
    type_id: TypeId,
    properties: IndexMap<String, Property>,
    methods: IndexMap<String, Method>,
    static_methods: IndexMap<String, StaticMethod>,
    static_properties: IndexMap<String, StaticProperty>,
    constructors: Vec<Constructor>,
}

impl TypeDescriptorBuilder {
    pub fn new<T: Any>(library: &str, name: &str) -> Self {
        Self {
            library: library.to_string(),
            name: name.to_string(),
            type_id: TypeId::of::<T>(),
            properties: IndexMap::new(),
            methods: IndexMap::new(),
            static_methods: IndexMap::new(),
            static_properties: IndexMap::new(),
            constructors: Vec::new(),
        }
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.insert(property.name.clone(), property);
        self
    }

    pub fn static_property(mut self, property: StaticProperty) -> Self {
        self.static_properties.insert(property.name.clone(), property);
        self
    }

    pub fn method<T, F>(mut self, name: &str, f: F) -> Self
    where
        T: Any,
        F: Fn(&mut T, &[Value]) -> Result<Value, ProxyError> + Send + Sync + 'static,
    {
        let handler: MethodFn = Box::new(move |obj, args| f(downcast_mut::<T>(obj)?, args));
        self.methods.insert(name.to_string(), Method { handler });
        self
    }

    pub fn static_method<F>(mut self, name: &str, f: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, ProxyError> + Send + Sync + 'static,
    {
        self.static_methods
            .insert(name.to_string(), StaticMethod { handler: Box::new(f) });
        self
    }

    pub fn constructor<T, F>(mut self, params: &[&'static str], f: F) -> Self
    where
        T: Reflect,
        F: Fn(&[Value]) -> Result<T, ProxyError> + Send + Sync + 'static,
    {
        let handler: ConstructorFn =
            Box::new(move |args| Ok(Box::new(f(args)?) as Box<dyn Reflect>));
        self.constructors.push(Constructor {
            params: params.to_vec(),
            handler,
        });
        self
    }

    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor {
            library: self.library,
            name: self.name,
            type_id: self.type_id,
            properties: self.properties,
            methods: self.methods,
            static_methods: self.static_methods,
            static_properties: self.static_properties,
            constructors: self.constructors,
        }
    }
}
