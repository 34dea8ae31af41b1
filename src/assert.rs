// Sat Aug 29 2026 - Alex

use crate::compare::Operand;
use crate::error::ProxyError;
use crate::proxy::InstanceProxy;
use crate::registry::Reflect;
use crate::value::Value;
use thiserror::Error;

/// Assertion outcome reported to the host test framework. The `Display`
/// output is the test-failure message.
#[derive(Error, Debug)]
pub enum AssertFailure {
    #[error("property `{property}` mismatch: expected {expected}, actual {actual}")]
    NotEqual {
        property: String,
        expected: Value,
        actual: Value,
    },
    #[error("property `{property}` unexpectedly equal: {value}")]
    UnexpectedlyEqual { property: String, value: Value },
    #[error(transparent)]
    Lookup(#[from] ProxyError),
}

/// Static assertion facade over proxied and plain operands.
///
/// The panicking entry points raise the host framework's failure signal;
/// the `check_*` variants return the failure instead for callers that
/// want to route it themselves.
pub struct ProxyAssert;

impl ProxyAssert {
    /// Fail on the first selected property whose values are not equal
    /// (null-safe: two nulls are equal).
    pub fn check_equal(
        expected: Operand<'_>,
        actual: Operand<'_>,
        properties: &[&str],
    ) -> Result<(), AssertFailure> {
        for name in Self::selected(properties, &actual) {
            let expected_value = expected.get(&name)?;
            let actual_value = actual.get(&name)?;
            if expected_value != actual_value {
                return Err(AssertFailure::NotEqual {
                    property: name,
                    expected: expected_value,
                    actual: actual_value,
                });
            }
        }
        Ok(())
    }

    /// Fail on the first selected property whose values are equal.
    pub fn check_not_equal(
        not_expected: Operand<'_>,
        actual: Operand<'_>,
        properties: &[&str],
    ) -> Result<(), AssertFailure> {
        for name in Self::selected(properties, &actual) {
            let left = not_expected.get(&name)?;
            let right = actual.get(&name)?;
            if left == right {
                return Err(AssertFailure::UnexpectedlyEqual {
                    property: name,
                    value: right,
                });
            }
        }
        Ok(())
    }

    // default selection: every registered property of the actual side
    fn selected(properties: &[&str], actual: &Operand<'_>) -> Vec<String> {
        if properties.is_empty() {
            actual.property_names()
        } else {
            properties.iter().map(|s| s.to_string()).collect()
        }
    }

    fn raise(result: Result<(), AssertFailure>) {
        if let Err(failure) = result {
            panic!("{}", failure);
        }
    }

    pub fn are_equal(expected: &InstanceProxy, actual: &dyn Reflect) {
        Self::raise(Self::check_equal(
            Operand::Proxied(expected),
            Operand::Plain(actual),
            &[],
        ));
    }

    pub fn are_equal_with(expected: &InstanceProxy, actual: &dyn Reflect, properties: &[&str]) {
        Self::raise(Self::check_equal(
            Operand::Proxied(expected),
            Operand::Plain(actual),
            properties,
        ));
    }

    pub fn are_equal_proxy(expected: &InstanceProxy, actual: &InstanceProxy) {
        Self::raise(Self::check_equal(
            Operand::Proxied(expected),
            Operand::Proxied(actual),
            &[],
        ));
    }

    pub fn are_equal_proxy_with(
        expected: &InstanceProxy,
        actual: &InstanceProxy,
        properties: &[&str],
    ) {
        Self::raise(Self::check_equal(
            Operand::Proxied(expected),
            Operand::Proxied(actual),
            properties,
        ));
    }

    pub fn are_not_equal(not_expected: &InstanceProxy, actual: &dyn Reflect) {
        Self::raise(Self::check_not_equal(
            Operand::Proxied(not_expected),
            Operand::Plain(actual),
            &[],
        ));
    }

    pub fn are_not_equal_with(
        not_expected: &InstanceProxy,
        actual: &dyn Reflect,
        properties: &[&str],
    ) {
        Self::raise(Self::check_not_equal(
            Operand::Proxied(not_expected),
            Operand::Plain(actual),
            properties,
        ));
    }

    pub fn are_not_equal_proxy(not_expected: &InstanceProxy, actual: &InstanceProxy) {
        Self::raise(Self::check_not_equal(
            Operand::Proxied(not_expected),
            Operand::Proxied(actual),
            &[],
        ));
    }

    pub fn are_not_equal_proxy_with(
        not_expected: &InstanceProxy,
        actual: &InstanceProxy,
        properties: &[&str],
    ) {
        Self::raise(Self::check_not_equal(
            Operand::Proxied(not_expected),
            Operand::Proxied(actual),
            properties,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect_struct;

    #[derive(Debug, Clone, PartialEq)]
    struct Record {
        name: String,
        count: i64,
    }

    reflect_struct!(Record in "assert_tests" {
        fields { name: String, count: i64 }
    });

    fn record(name: &str, count: i64) -> Record {
        Record {
            name: name.to_string(),
            count,
        }
    }

    #[test]
    fn test_equal_pair_passes() {
        let expected = InstanceProxy::wrap(record("A", 3));
        let actual = record("A", 3);
        ProxyAssert::are_equal(&expected, &actual);
    }

    #[test]
    fn test_mismatch_names_property_and_both_values() {
        let expected = InstanceProxy::wrap(record("A", 3));
        let actual = record("A", 4);

        let err = ProxyAssert::check_equal(
            Operand::Proxied(&expected),
            Operand::Plain(&actual),
            &[],
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "property `count` mismatch: expected 3, actual 4"
        );
    }

    #[test]
    #[should_panic(expected = "property `count` mismatch: expected 3, actual 4")]
    fn test_are_equal_panics_on_mismatch() {
        let expected = InstanceProxy::wrap(record("A", 3));
        let actual = record("A", 4);
        ProxyAssert::are_equal(&expected, &actual);
    }

    #[test]
    fn test_are_equal_with_subset_ignores_other_properties() {
        let expected = InstanceProxy::wrap(record("A", 3));
        let actual = record("B", 3);
        ProxyAssert::are_equal_with(&expected, &actual, &["count"]);
    }

    #[test]
    fn test_are_equal_proxy_pair() {
        let expected = InstanceProxy::wrap(record("A", 3));
        let actual = InstanceProxy::wrap(record("A", 3));
        ProxyAssert::are_equal_proxy(&expected, &actual);
    }

    #[test]
    fn test_not_equal_raises_on_first_equal_property() {
        let not_expected = InstanceProxy::wrap(record("A", 3));
        let actual = record("A", 4);

        // name is equal, so the check trips there even though count differs
        let err = ProxyAssert::check_not_equal(
            Operand::Proxied(&not_expected),
            Operand::Plain(&actual),
            &[],
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "property `name` unexpectedly equal: A");
    }

    #[test]
    fn test_not_equal_passes_when_all_properties_differ() {
        let not_expected = InstanceProxy::wrap(record("A", 3));
        let actual = record("B", 4);
        ProxyAssert::are_not_equal(&not_expected, &actual);
    }

    #[test]
    #[should_panic(expected = "unexpectedly equal")]
    fn test_are_not_equal_proxy_panics_when_equal() {
        let not_expected = InstanceProxy::wrap(record("A", 3));
        let actual = InstanceProxy::wrap(record("A", 3));
        ProxyAssert::are_not_equal_proxy_with(&not_expected, &actual, &["count"]);
    }

    #[test]
    fn test_null_safe_equality() {
        #[derive(Debug, Clone, PartialEq)]
        struct Slot {
            tag: Option<String>,
        }

        reflect_struct!(Slot in "assert_tests_nullsafe" {
            fields { tag: Option<String> }
        });

        // both sides read as null: equal
        let expected = InstanceProxy::wrap(Slot { tag: None });
        let actual = Slot { tag: None };
        ProxyAssert::are_equal(&expected, &actual);

        // null against a value: not equal
        let actual = Slot {
            tag: Some("x".to_string()),
        };
        let err = ProxyAssert::check_equal(
            Operand::Proxied(&expected),
            Operand::Plain(&actual),
            &[],
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "property `tag` mismatch: expected null, actual x");
    }

    #[test]
    fn test_lookup_error_propagates() {
        let expected = InstanceProxy::wrap(record("A", 3));
        let actual = record("A", 3);

        let err = ProxyAssert::check_equal(
            Operand::Proxied(&expected),
            Operand::Plain(&actual),
            &["missing"],
        )
        .unwrap_err();

        assert!(matches!(
            err,
            AssertFailure::Lookup(ProxyError::MemberNotFound { .. })
        ));
    }
}
