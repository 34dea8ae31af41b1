// Thu Aug 27 2026 - Alex

use crate::error::ProxyError;
use indexmap::IndexMap;
use std::fmt;

/// Dynamic value carried through every reflective call.
///
/// Property reads, method arguments and return values all travel as a
/// `Value`. Equality is null-safe: two `Null`s compare equal, anything
/// else compares by its own value. `Float` follows IEEE 754 equality,
/// so `Float(f64::NAN)` never compares equal to itself.
///
/// Maps preserve insertion order so their `Display` output is stable.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(IndexMap<String, Value>),
    Bytes(Vec<u8>),
}

impl Value {
    pub fn null() -> Self {
        Value::Null
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(data) => Some(data),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Bytes(_) => "bytes",
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, v) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
            Value::Bytes(data) => write!(f, "<{} bytes>", data.len()),
        }
    }
}

/// Value type tag used for constructor parameter matching.
pub trait ValueTyped {
    const VALUE_TYPE: &'static str;
}

impl ValueTyped for bool {
    const VALUE_TYPE: &'static str = "bool";
}

impl ValueTyped for i32 {
    const VALUE_TYPE: &'static str = "int";
}

impl ValueTyped for i64 {
    const VALUE_TYPE: &'static str = "int";
}

impl ValueTyped for f64 {
    const VALUE_TYPE: &'static str = "float";
}

impl ValueTyped for String {
    const VALUE_TYPE: &'static str = "string";
}

impl ValueTyped for Vec<u8> {
    const VALUE_TYPE: &'static str = "bytes";
}

impl ValueTyped for Value {
    const VALUE_TYPE: &'static str = "any";
}

impl<T: ValueTyped> ValueTyped for Option<T> {
    const VALUE_TYPE: &'static str = T::VALUE_TYPE;
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Value::Map(entries)
    }
}

impl From<Vec<u8>> for Value {
    fn from(data: Vec<u8>) -> Self {
        Value::Bytes(data)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = ProxyError;

    fn try_from(v: Value) -> Result<Self, ProxyError> {
        match v {
            Value::Bool(b) => Ok(b),
            other => Err(ProxyError::mismatch("bool", other.type_name())),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = ProxyError;

    fn try_from(v: Value) -> Result<Self, ProxyError> {
        match v {
            Value::Int(n) => Ok(n),
            other => Err(ProxyError::mismatch("int", other.type_name())),
        }
    }
}

impl TryFrom<Value> for i32 {
    type Error = ProxyError;

    fn try_from(v: Value) -> Result<Self, ProxyError> {
        match v {
            Value::Int(n) => Ok(n as i32),
            other => Err(ProxyError::mismatch("int", other.type_name())),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = ProxyError;

    fn try_from(v: Value) -> Result<Self, ProxyError> {
        match v {
            Value::Float(n) => Ok(n),
            Value::Int(n) => Ok(n as f64),
            other => Err(ProxyError::mismatch("float", other.type_name())),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = ProxyError;

    fn try_from(v: Value) -> Result<Self, ProxyError> {
        match v {
            Value::Str(s) => Ok(s),
            other => Err(ProxyError::mismatch("string", other.type_name())),
        }
    }
}

impl<T> TryFrom<Value> for Option<T>
where
    T: TryFrom<Value, Error = ProxyError>,
{
    type Error = ProxyError;

    fn try_from(v: Value) -> Result<Self, ProxyError> {
        match v {
            Value::Null => Ok(None),
            other => Ok(Some(T::try_from(other)?)),
        }
    }
}

impl TryFrom<Value> for Vec<u8> {
    type Error = ProxyError;

    fn try_from(v: Value) -> Result<Self, ProxyError> {
        match v {
            Value::Bytes(data) => Ok(data),
            other => Err(ProxyError::mismatch("bytes", other.type_name())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_safe_equality() {
        assert_eq!(Value::Null, Value::Null);
        assert_ne!(Value::Null, Value::Int(0));
        assert_eq!(Value::Int(3), Value::Int(3));
        assert_ne!(Value::Int(3), Value::Int(4));
    }

    #[test]
    fn test_float_equality_is_ieee() {
        assert_eq!(Value::Float(1.5), Value::Float(1.5));
        assert_ne!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Value::from(42i64).as_int(), Some(42));
        assert_eq!(Value::from("hello").as_str(), Some("hello"));
        assert_eq!(i64::try_from(Value::Int(7)), Ok(7));
        assert!(String::try_from(Value::Int(7)).is_err());
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(5i64)), Value::Int(5));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::Str("x".to_string()).type_name(), "string");
        assert_eq!(Value::Int(1).type_name(), "int");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Value::Int(42)), "42");
        assert_eq!(format!("{}", Value::Null), "null");
        assert_eq!(
            format!("{}", Value::List(vec![Value::Int(1), Value::Int(2)])),
            "[1, 2]"
        );
    }

    #[test]
    fn test_map_display_keeps_insertion_order() {
        let mut entries = IndexMap::new();
        entries.insert("beta".to_string(), Value::Int(2));
        entries.insert("alpha".to_string(), Value::Int(1));
        assert_eq!(format!("{}", Value::Map(entries)), "{beta: 2, alpha: 1}");
    }
}
