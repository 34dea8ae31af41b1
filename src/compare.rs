// Sat Aug 29 2026 - Alex

use crate::error::ProxyError;
use crate::proxy::InstanceProxy;
use crate::registry::Reflect;
use crate::value::Value;
use std::cmp::Ordering;

/// One comparison operand, tagged once at entry instead of re-inspecting
/// the object on every property.
#[derive(Clone, Copy)]
pub enum Operand<'a> {
    Proxied(&'a InstanceProxy),
    Plain(&'a dyn Reflect),
}

impl<'a> Operand<'a> {
    pub(crate) fn get(&self, name: &str) -> Result<Value, ProxyError> {
        match self {
            Operand::Proxied(proxy) => proxy.get_value(name),
            Operand::Plain(obj) => obj.descriptor().get(obj.as_any(), name, &[]),
        }
    }

    pub(crate) fn property_names(&self) -> Vec<String> {
        match self {
            Operand::Proxied(proxy) => proxy.descriptor().property_names(),
            Operand::Plain(obj) => obj.descriptor().property_names(),
        }
    }
}

/// Property-wise equality comparator over proxied and plain operands.
///
/// This is an equality check dressed as a comparator: `Equal` means
/// "equal", `Greater` means "not equal". It is not a total order and must
/// only back membership or equality tests, never sorting.
pub struct InstanceProxyComparer {
    property_names: Vec<String>,
}

impl InstanceProxyComparer {
    /// Compare every registered property of the proxied operand.
    pub fn new() -> Self {
        Self {
            property_names: Vec::new(),
        }
    }

    /// Compare only the named properties.
    pub fn with_properties<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            property_names: names.into_iter().map(Into::into).collect(),
        }
    }

    fn selected(&self, x: &Operand<'_>, y: &Operand<'_>) -> Vec<String> {
        if !self.property_names.is_empty() {
            return self.property_names.clone();
        }
        // empty list expands at comparison time, preferring y's type
        match (x, y) {
            (_, Operand::Proxied(_)) => y.property_names(),
            (Operand::Proxied(_), _) => x.property_names(),
            _ => Vec::new(),
        }
    }

    /// Core comparison. Property lookups may fail (absent member, foreign
    /// type); those errors propagate.
    pub fn try_compare(&self, x: Operand<'_>, y: Operand<'_>) -> Result<Ordering, ProxyError> {
        match (x, y) {
            // both plain: their own equality, no property list is built
            (Operand::Plain(a), Operand::Plain(b)) => Ok(if a.dyn_eq(b) {
                Ordering::Equal
            } else {
                Ordering::Greater
            }),
            // (plain, proxied) is the reverse call
            (Operand::Plain(_), Operand::Proxied(_)) => self.try_compare(y, x),
            _ => {
                for name in self.selected(&x, &y) {
                    let left = x.get(&name)?;
                    let right = y.get(&name)?;
                    if left != right {
                        log::debug!("property {} differs: {} vs {}", name, left, right);
                        return Ok(Ordering::Greater);
                    }
                }
                Ok(Ordering::Equal)
            }
        }
    }

    /// Comparator entry for membership-style APIs. A failed property
    /// lookup is reported as "not equal".
    pub fn compare(&self, x: Operand<'_>, y: Operand<'_>) -> Ordering {
        self.try_compare(x, y).unwrap_or(Ordering::Greater)
    }

    pub fn eq(&self, x: Operand<'_>, y: Operand<'_>) -> bool {
        self.compare(x, y) == Ordering::Equal
    }
}

impl Default for InstanceProxyComparer {
    fn default() -> Self {
        Self::new()
    }
}
