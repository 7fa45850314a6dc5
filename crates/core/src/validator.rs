//! Pure input predicates used at the service boundary.
//!
//! Every operation that accepts caller input runs these checks before any
//! repository call, so invalid input never reaches the database.

use serde::Serialize;
use serde_json::Value;

use crate::status::ReimbStatus;
use crate::types::DbId;

/// Something a caller may hand us as an entity id.
///
/// Path segments, query values and JSON bodies all carry ids in different
/// shapes; each converts to a [`DbId`] only when it denotes a finite integer
/// greater than zero.
pub trait IdCandidate {
    fn to_db_id(&self) -> Option<DbId>;
}

impl IdCandidate for i64 {
    fn to_db_id(&self) -> Option<DbId> {
        (*self > 0).then_some(*self)
    }
}

impl IdCandidate for i32 {
    fn to_db_id(&self) -> Option<DbId> {
        i64::from(*self).to_db_id()
    }
}

impl IdCandidate for u64 {
    fn to_db_id(&self) -> Option<DbId> {
        i64::try_from(*self).ok().and_then(|id| id.to_db_id())
    }
}

impl IdCandidate for f64 {
    fn to_db_id(&self) -> Option<DbId> {
        // NaN and infinities fail `is_finite`; `fract` rejects 3.14.
        // `i64::MAX as f64` rounds up to 2^63, which is already out of range.
        if self.is_finite() && self.fract() == 0.0 && *self > 0.0 && *self < i64::MAX as f64 {
            Some(*self as DbId)
        } else {
            None
        }
    }
}

impl IdCandidate for str {
    fn to_db_id(&self) -> Option<DbId> {
        let trimmed = self.trim();
        trimmed
            .parse::<i64>()
            .ok()
            .and_then(|id| id.to_db_id())
            .or_else(|| trimmed.parse::<f64>().ok().and_then(|id| id.to_db_id()))
    }
}

impl IdCandidate for String {
    fn to_db_id(&self) -> Option<DbId> {
        self.as_str().to_db_id()
    }
}

impl IdCandidate for Value {
    fn to_db_id(&self) -> Option<DbId> {
        match self {
            Value::Number(n) => n
                .as_i64()
                .and_then(|id| id.to_db_id())
                .or_else(|| n.as_f64().and_then(|id| id.to_db_id())),
            Value::String(s) => s.to_db_id(),
            _ => None,
        }
    }
}

impl<T: IdCandidate + ?Sized> IdCandidate for &T {
    fn to_db_id(&self) -> Option<DbId> {
        (**self).to_db_id()
    }
}

/// Types whose declared field names can be queried by key.
pub trait Fields {
    const FIELDS: &'static [&'static str];
}

/// True iff `id` is a finite integer greater than zero.
pub fn is_valid_id<T: IdCandidate + ?Sized>(id: &T) -> bool {
    id.to_db_id().is_some()
}

/// True iff every value is a non-empty string.
pub fn is_valid_strings<S: AsRef<str>>(values: &[S]) -> bool {
    values.iter().all(|v| !v.as_ref().is_empty())
}

/// True iff every field of `obj` not named in `exempt` holds a value.
///
/// Nulls, empty strings and zero numbers count as missing.
pub fn is_valid_object<T: Serialize + ?Sized>(obj: &T, exempt: &[&str]) -> bool {
    let Ok(Value::Object(fields)) = serde_json::to_value(obj) else {
        return false;
    };
    fields
        .iter()
        .filter(|(key, _)| !exempt.contains(&key.as_str()))
        .all(|(_, value)| has_value(value))
}

fn has_value(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => true,
    }
}

/// True iff `key` names a declared field of `T`.
pub fn is_property_of<T: Fields>(key: &str) -> bool {
    T::FIELDS.contains(&key)
}

/// True iff `status` is a canonical status or one of its legacy aliases.
pub fn is_valid_status(status: &str) -> bool {
    status.parse::<ReimbStatus>().is_ok()
}

/// True iff `obj` serializes to null or to an object with no keys.
pub fn is_empty_object<T: Serialize + ?Sized>(obj: &T) -> bool {
    match serde_json::to_value(obj) {
        Ok(Value::Null) => true,
        Ok(Value::Object(fields)) => fields.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize)]
    struct Sample {
        id: i64,
        name: String,
        note: Option<String>,
    }

    impl Fields for Sample {
        const FIELDS: &'static [&'static str] = &["id", "name", "note"];
    }

    #[test]
    fn test_positive_integers_are_valid_ids() {
        for id in [1_i64, 2, 42, 1_000_000, i64::MAX] {
            assert!(is_valid_id(&id), "{id} should be valid");
        }
        assert!(is_valid_id(&7_i32));
        assert!(is_valid_id(&7_u64));
        assert!(is_valid_id(&7.0_f64));
    }

    #[test]
    fn test_non_positive_and_fractional_ids_rejected() {
        assert!(!is_valid_id(&0_i64));
        assert!(!is_valid_id(&-2_i64));
        assert!(!is_valid_id(&3.5_f64));
        assert!(!is_valid_id(&f64::NAN));
        assert!(!is_valid_id(&f64::INFINITY));
        assert!(!is_valid_id(&-0.0_f64));
        assert!(!is_valid_id(&u64::MAX));
    }

    #[test]
    fn test_ids_beyond_i64_range_rejected() {
        assert!(!is_valid_id(&9_223_372_036_854_775_808.0_f64));
        assert!(!is_valid_id("9223372036854775808"));
        assert!(!is_valid_id("9223372036854775999"));
        assert!(!is_valid_id(&json!(9_223_372_036_854_775_808_u64)));
        assert_eq!("9223372036854775807".to_db_id(), Some(i64::MAX));
    }

    #[test]
    fn test_string_ids() {
        assert!(is_valid_id("12"));
        assert!(is_valid_id(" 12 "));
        assert!(is_valid_id("12.0"));
        assert!(!is_valid_id(""));
        assert!(!is_valid_id("abc"));
        assert!(!is_valid_id("3.14"));
        assert!(!is_valid_id("NaN"));
        assert!(!is_valid_id("-1"));
        assert!(is_valid_id(&String::from("5")));
    }

    #[test]
    fn test_json_value_ids() {
        assert!(is_valid_id(&json!(5)));
        assert!(is_valid_id(&json!("5")));
        assert!(!is_valid_id(&json!(0)));
        assert!(!is_valid_id(&json!(2.5)));
        assert!(!is_valid_id(&json!(null)));
        assert!(!is_valid_id(&json!(true)));
        assert!(!is_valid_id(&json!({})));
    }

    #[test]
    fn test_is_valid_strings() {
        assert!(is_valid_strings(&["a", "b"]));
        assert!(!is_valid_strings(&["a", ""]));
        assert!(!is_valid_strings(&[String::new()]));
    }

    #[test]
    fn test_is_valid_object() {
        let full = Sample { id: 1, name: "n".into(), note: Some("x".into()) };
        assert!(is_valid_object(&full, &[]));

        let no_id = Sample { id: 0, name: "n".into(), note: Some("x".into()) };
        assert!(!is_valid_object(&no_id, &[]));
        assert!(is_valid_object(&no_id, &["id"]));

        let no_note = Sample { id: 1, name: "n".into(), note: None };
        assert!(!is_valid_object(&no_note, &[]));
        assert!(is_valid_object(&no_note, &["note"]));

        let empty_name = Sample { id: 1, name: String::new(), note: None };
        assert!(!is_valid_object(&empty_name, &["note"]));
    }

    #[test]
    fn test_non_objects_are_not_valid_objects() {
        assert!(!is_valid_object(&json!(null), &[]));
        assert!(!is_valid_object(&json!("text"), &[]));
    }

    #[test]
    fn test_is_property_of() {
        assert!(is_property_of::<Sample>("id"));
        assert!(is_property_of::<Sample>("note"));
        assert!(!is_property_of::<Sample>("password"));
        assert!(!is_property_of::<Sample>(""));
    }

    #[test]
    fn test_is_valid_status() {
        for status in ["pending", "approved", "approve", "denied", "deny"] {
            assert!(is_valid_status(status), "{status} should be valid");
        }
        for status in ["", "test", "Pending", "resolved", "null"] {
            assert!(!is_valid_status(status), "{status} should be invalid");
        }
    }

    #[test]
    fn test_is_empty_object() {
        assert!(is_empty_object(&json!({})));
        assert!(is_empty_object(&json!(null)));
        assert!(is_empty_object(&None::<Sample>));
        assert!(!is_empty_object(&json!({"a": 1})));
        assert!(!is_empty_object(&Sample { id: 1, name: "n".into(), note: None }));
    }
}
