// Sat Aug 29 2026 - Alex

pub mod instance;
pub mod type_proxy;

pub use instance::InstanceProxy;
pub use type_proxy::TypeProxy;
