// Thu Aug 27 2026 - Alex

pub mod descriptor;
pub mod global;
pub mod macros;
pub mod reflect;

pub use descriptor::{
    Constructor, ConstructorFn, GetterFn, MethodFn, Property, SetterFn, StaticGetterFn,
    StaticMethodFn, StaticProperty, StaticSetterFn, TypeDescriptor, TypeDescriptorBuilder,
};
pub use global::{install, is_installed, libraries, resolve, types_in, TypeRegistry};
pub use reflect::{Reflect, Reflected};
