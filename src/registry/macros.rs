// Sat Aug 29 2026 - Alex

/// Generates a [`Reflected`](crate::registry::Reflected) impl for a plain
/// struct: one read-write property per field, plus a positional
/// constructor taking every field in declared order.
///
/// Field types need `Clone`, `Into<Value>` and `TryFrom<Value>`; the
/// struct itself needs `PartialEq` (whole-object equality for the
/// plain/plain comparison path).
///
/// ```
/// use testproxy::reflect_struct;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Widget {
///     name: String,
///     count: i64,
/// }
///
/// reflect_struct!(Widget in "widgets" {
///     fields { name: String, count: i64 }
/// });
/// ```
///
/// An optional `methods` block registers instance methods:
///
/// ```ignore
/// reflect_struct!(Widget in "widgets" {
///     fields { name: String, count: i64 }
///     methods {
///         bump => |w: &mut Widget, _args: &[Value]| {
///             w.count += 1;
///             Ok(Value::from(w.count))
///         }
///     }
/// });
/// ```
#[macro_export]
macro_rules! reflect_struct {
    ($ty:ident in $lib:literal {
        fields { $($field:ident : $ftype:ty),* $(,)? }
        $(methods { $($method:ident => $handler:expr),* $(,)? })?
    }) => {
        impl $crate::registry::Reflected for $ty {
            fn type_descriptor() -> ::std::sync::Arc<$crate::registry::TypeDescriptor> {
                static DESCRIPTOR: $crate::once_cell::sync::Lazy<
                    ::std::sync::Arc<$crate::registry::TypeDescriptor>,
                > = $crate::once_cell::sync::Lazy::new(|| {
                    let builder =
                        $crate::registry::TypeDescriptor::builder::<$ty>($lib, stringify!($ty));
                    $(
                        let builder = builder.property(
                            $crate::registry::Property::read_write::<$ty, _, _>(
                                stringify!($field),
                                |o: &$ty| $crate::Value::from(o.$field.clone()),
                                |o: &mut $ty, v: $crate::Value| {
                                    o.$field =
                                        <$ftype as ::std::convert::TryFrom<$crate::Value>>::try_from(v)?;
                                    Ok(())
                                },
                            ),
                        );
                    )*
                    $($(
                        let builder = builder.method::<$ty, _>(stringify!($method), $handler);
                    )*)?
                    let builder = builder.constructor::<$ty, _>(
                        &[$(<$ftype as $crate::value::ValueTyped>::VALUE_TYPE),*],
                        |args: &[$crate::Value]| {
                            let mut values = args.iter().cloned();
                            Ok($ty {
                                $(
                                    $field: <$ftype as ::std::convert::TryFrom<$crate::Value>>::try_from(
                                        values.next().unwrap_or($crate::Value::Null),
                                    )?,
                                )*
                            })
                        },
                    );
                    ::std::sync::Arc::new(builder.build())
                });
                DESCRIPTOR.clone()
            }
        }
    };
}
