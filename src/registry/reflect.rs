// Thu Aug 27 2026 - Alex

use crate::registry::TypeDescriptor;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Static side of the capability registry: a type that can hand out its
/// own descriptor. Implemented by `reflect_struct!` or by hand with
/// `TypeDescriptorBuilder`.
pub trait Reflected: Any + Sized {
    fn type_descriptor() -> Arc<TypeDescriptor>;
}

/// Object-safe counterpart of [`Reflected`], used wherever an instance of
/// unknown concrete type flows through a proxy or comparison.
pub trait Reflect: Any {
    /// Descriptor of the concrete type behind this reference.
    fn descriptor(&self) -> Arc<TypeDescriptor>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Whole-object equality: equal iff `other` is the same concrete type
    /// and the two values compare equal.
    fn dyn_eq(&self, other: &dyn Reflect) -> bool;
}

impl<T: Reflected + PartialEq> Reflect for T {
    fn descriptor(&self) -> Arc<TypeDescriptor> {
        T::type_descriptor()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn dyn_eq(&self, other: &dyn Reflect) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .map_or(false, |o| self == o)
    }
}

impl fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} instance>", self.descriptor().qualified_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Reflected;
    use crate::registry::TypeDescriptor;
    use crate::value::Value;

    #[derive(Debug, Clone, PartialEq)]
    struct Token {
        id: i64,
    }

    impl Reflected for Token {
        fn type_descriptor() -> Arc<TypeDescriptor> {
            Arc::new(
                TypeDescriptor::builder::<Token>("reflect_tests", "Token")
                    .constructor::<Token, _>(&["int"], |args| {
                        Ok(Token {
                            id: args[0].as_int().unwrap_or(0),
                        })
                    })
                    .build(),
            )
        }
    }

    #[test]
    fn test_dyn_eq_downcasts() {
        let a = Token { id: 1 };
        let b = Token { id: 1 };
        let c = Token { id: 2 };

        let a: &dyn Reflect = &a;
        assert!(a.dyn_eq(&b));
        assert!(!a.dyn_eq(&c));
    }

    #[test]
    fn test_boxed_instance_debug_names_the_type() {
        let instance = Token::type_descriptor()
            .construct(&[Value::Int(3)])
            .unwrap();
        assert_eq!(format!("{:?}", instance), "<reflect_tests::Token instance>");
    }
}
