// Thu Aug 27 2026 - Alex

//! Test-assistance proxies: register a type's members once, then let unit
//! tests construct instances, invoke methods and read/write properties by
//! string name, and compare "proxied" objects against expected values
//! property-by-property.

pub mod assert;
pub mod compare;
pub mod error;
pub mod proxy;
pub mod registry;
pub mod value;

pub use assert::{AssertFailure, ProxyAssert};
pub use compare::{InstanceProxyComparer, Operand};
pub use error::ProxyError;
pub use proxy::{InstanceProxy, TypeProxy};
pub use registry::{Reflect, Reflected, TypeDescriptor, TypeDescriptorBuilder};
pub use value::Value;

#[doc(hidden)]
pub use once_cell;
