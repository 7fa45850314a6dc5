//! Shared query parameter types for API handlers.

use std::collections::HashMap;

use ers_core::services::KeyQuery;
use serde_json::Value;

/// Arbitrary `?field=value` lookup parameters on list endpoints.
///
/// No parameters means "list everything"; otherwise the pairs become a
/// unique-key lookup for the service.
pub type LookupParams = HashMap<String, String>;

pub fn to_key_query(params: LookupParams) -> KeyQuery {
    params
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_key_query_keeps_every_pair() {
        let mut params = LookupParams::new();
        params.insert("username".into(), "jdoe".into());
        params.insert("email".into(), "jdoe@example.com".into());

        let query = to_key_query(params);
        assert_eq!(query.len(), 2);
        assert_eq!(query["username"], Value::String("jdoe".into()));
    }
}
